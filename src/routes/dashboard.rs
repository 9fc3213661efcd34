use crate::AppState;
use crate::db::models::ApiResponse;
use crate::db::models::auth::AuthUser;
use crate::db::models::stage::StageResponse;
use crate::services::DashboardService;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

/// GET /dashboard/stats
///
/// Served from Redis when fresh; clients poll this every 15-60 seconds and one
/// cache TTL of staleness against concurrent mutations is accepted.
pub async fn get_stats(State(state): State<Arc<AppState>>, _user: AuthUser) -> impl IntoResponse {
    match crate::cache::get_cached_dashboard_stats(&state.redis).await {
        Ok(Some(stats)) => {
            let response = ApiResponse::success(stats, "Dashboard stats retrieved successfully");
            return (StatusCode::OK, Json(response)).into_response();
        }
        Ok(None) => {}
        Err(e) => {
            // Cache miss path also covers a broken cache; the database answer
            // is still authoritative.
            tracing::warn!("dashboard stats cache read failed: {}", e);
        }
    }

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

    let today = chrono::Utc::now().date_naive();
    match DashboardService::compute_stats(&mut conn, today) {
        Ok(stats) => {
            if let Err(e) = crate::cache::cache_dashboard_stats(
                &state.redis,
                &stats,
                state.config.stats_cache_ttl_secs,
            )
            .await
            {
                tracing::warn!("dashboard stats cache write failed: {}", e);
            }
            let response = ApiResponse::success(stats, "Dashboard stats retrieved successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// GET /dashboard/my-tasks
pub async fn get_my_tasks(State(state): State<Arc<AppState>>, user: AuthUser) -> impl IntoResponse {
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

    match DashboardService::my_tasks(&mut conn, user.id) {
        Ok(stages) => {
            let today = chrono::Utc::now().date_naive();
            let responses: Vec<StageResponse> = stages
                .into_iter()
                .map(|s| StageResponse::from_stage(s, today))
                .collect();
            let response = ApiResponse::success(responses, "Tasks retrieved successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// GET /dashboard/last-completed
pub async fn get_last_completed(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
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

    match DashboardService::last_completed(&mut conn) {
        Ok(stage) => {
            let today = chrono::Utc::now().date_naive();
            let response = ApiResponse::success(
                stage.map(|s| StageResponse::from_stage(s, today)),
                "Last completed stage retrieved successfully",
            );
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => e.into_response(),
    }
}
