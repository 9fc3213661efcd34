use crate::AppState;
use crate::db::models::ApiResponse;
use crate::db::models::auth::AuthUser;
use crate::db::models::room::{CreateRoomRequest, RoomResponse};
use crate::db::models::stage::StageResponse;
use crate::db::repositories::activities::ActivitiesRepo;
use crate::db::repositories::rooms::RoomsRepo;
use crate::services::RoomsService;
use crate::services::context::RequestContext;
use crate::validation::ValidatedJson;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use uuid::Uuid;

const ACTIVITY_FEED_LIMIT: i64 = 100;

/// POST /projects/:project_id/rooms
pub async fn create_room(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(project_id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<CreateRoomRequest>,
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

    match RoomsService::create_room(&mut conn, &ctx, project_id, &request.name) {
        Ok((room, stages)) => {
            let today = chrono::Utc::now().date_naive();
            let stage_responses = stages
                .into_iter()
                .map(|s| StageResponse::from_stage(s, today))
                .collect();
            let response = ApiResponse::created(
                RoomResponse::new(room, stage_responses),
                "Room created successfully",
            );
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// GET /projects/:project_id/rooms
pub async fn get_rooms(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(project_id): Path<Uuid>,
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

    match RoomsService::list_by_project(&mut conn, project_id) {
        Ok(rooms) => {
            let response = ApiResponse::success(rooms, "Rooms retrieved successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// GET /rooms/:room_id
pub async fn get_room(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(room_id): Path<Uuid>,
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

    match RoomsService::get_room(&mut conn, room_id) {
        Ok((room, stages)) => {
            let today = chrono::Utc::now().date_naive();
            let stage_responses = stages
                .into_iter()
                .map(|s| StageResponse::from_stage(s, today))
                .collect();
            let response = ApiResponse::success(
                RoomResponse::new(room, stage_responses),
                "Room retrieved successfully",
            );
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// GET /rooms/:room_id/activities
pub async fn get_room_activities(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(room_id): Path<Uuid>,
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

    if let Ok(None) = RoomsRepo::find_by_id(&mut conn, room_id) {
        return (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "Room not found" })),
        )
            .into_response();
    }

    match ActivitiesRepo::list_by_room(&mut conn, room_id, ACTIVITY_FEED_LIMIT) {
        Ok(activities) => {
            let response = ApiResponse::success(activities, "Activities retrieved successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": "Failed to load activities" })),
        )
            .into_response(),
    }
}
