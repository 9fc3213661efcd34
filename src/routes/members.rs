use crate::AppState;
use crate::db::models::ApiResponse;
use crate::db::models::auth::AuthUser;
use crate::db::models::member::TeamMemberResponse;
use crate::routes::stages::SearchQuery;
use crate::services::MembersService;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;

/// GET /team-members
pub async fn get_team_members(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Query(query): Query<SearchQuery>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": "Database connection failed" })),
            )
                .into_response();
        }
    };

    match MembersService::list(&mut conn, query.search.as_deref()) {
        Ok(members) => {
            let responses: Vec<TeamMemberResponse> =
                members.iter().map(TeamMemberResponse::from).collect();
            let response = ApiResponse::success(responses, "Team members retrieved successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => e.into_response(),
    }
}
