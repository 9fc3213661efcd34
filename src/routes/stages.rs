use crate::AppState;
use crate::db::models::ApiResponse;
use crate::db::models::auth::AuthUser;
use crate::db::models::member::TeamMemberResponse;
use crate::db::models::stage::{
    BulkAssignRequest, DueDateRequest, StageActionRequest, StageMutationResponse, StageResponse,
};
use crate::error::AppError;
use crate::services::context::RequestContext;
use crate::services::{MembersService, StagesService};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct SearchQuery {
    pub search: Option<String>,
}

/// Stage endpoints speak the `{ "error": "..." }` failure shape; the server is
/// the authority on whether a transition is legal and rejected intents leave
/// state unchanged.
fn error_json(err: &AppError) -> (StatusCode, Json<serde_json::Value>) {
    let status = match err {
        AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        AppError::Validation { .. } => StatusCode::BAD_REQUEST,
        AppError::Transition(_) | AppError::Conflict { .. } => StatusCode::CONFLICT,
        AppError::Auth { .. } => StatusCode::UNAUTHORIZED,
        _ => {
            tracing::error!("stage endpoint error: {}", err);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": "Internal server error" })),
            );
        }
    };
    (status, Json(serde_json::json!({ "error": err.to_string() })))
}

/// PATCH /stages/:stage_id
pub async fn patch_stage(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(stage_id): Path<Uuid>,
    Json(request): Json<StageActionRequest>,
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

    let ctx = RequestContext { user_id: user.id };

    match StagesService::apply_action(&mut conn, &ctx, stage_id, &request) {
        Ok((stage, affected)) => {
            // Status counts changed; drop the cached dashboard aggregates.
            if let Err(e) = crate::cache::invalidate_dashboard_stats(&state.redis).await {
                tracing::warn!("failed to invalidate dashboard stats cache: {}", e);
            }

            let today = chrono::Utc::now().date_naive();
            let response = StageMutationResponse {
                stage: StageResponse::from_stage(stage, today),
                affected: affected
                    .into_iter()
                    .map(|s| StageResponse::from_stage(s, today))
                    .collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_json(&e).into_response(),
    }
}

/// PATCH /stages/:stage_id/due-date
pub async fn patch_due_date(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(stage_id): Path<Uuid>,
    Json(request): Json<DueDateRequest>,
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

    let ctx = RequestContext { user_id: user.id };

    match StagesService::set_due_date(&mut conn, &ctx, stage_id, &request) {
        Ok(stage) => {
            // The overdue aggregate depends on due dates, so this mutation
            // drops the cached dashboard stats just like status changes do.
            if let Err(e) = crate::cache::invalidate_dashboard_stats(&state.redis).await {
                tracing::warn!("failed to invalidate dashboard stats cache: {}", e);
            }

            let today = chrono::Utc::now().date_naive();
            (StatusCode::OK, Json(StageResponse::from_stage(stage, today))).into_response()
        }
        Err(e) => error_json(&e).into_response(),
    }
}

/// PATCH /rooms/:room_id/assignments
///
/// Always 200 on a processed batch: per-item outcomes live in the body, so a
/// partial failure is never reported as a blanket success or a blanket error.
pub async fn bulk_assign(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(room_id): Path<Uuid>,
    Json(request): Json<BulkAssignRequest>,
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

    let ctx = RequestContext { user_id: user.id };

    match StagesService::bulk_assign(&mut conn, &ctx, room_id, &request) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => error_json(&e).into_response(),
    }
}

/// GET /stages/:stage_id/eligible-members
pub async fn get_eligible_members(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(stage_id): Path<Uuid>,
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

    match MembersService::eligible_for_stage(&mut conn, stage_id, query.search.as_deref()) {
        Ok(members) => {
            let responses: Vec<TeamMemberResponse> =
                members.iter().map(TeamMemberResponse::from).collect();
            let response = ApiResponse::success(responses, "Eligible members retrieved successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_json(&e).into_response(),
    }
}
