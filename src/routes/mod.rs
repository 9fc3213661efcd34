pub mod auth;
pub mod dashboard;
pub mod members;
pub mod projects;
pub mod rooms;
pub mod stages;

use crate::AppState;
use axum::{
    Router,
    routing::{get, patch, post},
};
use std::sync::Arc;

/// Routes behind the auth middleware. The login route is wired separately in
/// `main` so it stays reachable without a token.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/auth/profile", get(auth::get_profile))
        .route("/projects", get(projects::get_projects))
        .route("/projects", post(projects::create_project))
        .route("/projects/:project_id", get(projects::get_project))
        .route("/projects/:project_id/rooms", get(rooms::get_rooms))
        .route("/projects/:project_id/rooms", post(rooms::create_room))
        .route("/rooms/:room_id", get(rooms::get_room))
        .route("/rooms/:room_id/activities", get(rooms::get_room_activities))
        .route("/rooms/:room_id/assignments", patch(stages::bulk_assign))
        .route("/stages/:stage_id", patch(stages::patch_stage))
        .route("/stages/:stage_id/due-date", patch(stages::patch_due_date))
        .route(
            "/stages/:stage_id/eligible-members",
            get(stages::get_eligible_members),
        )
        .route("/team-members", get(members::get_team_members))
        .route("/dashboard/stats", get(dashboard::get_stats))
        .route("/dashboard/my-tasks", get(dashboard::get_my_tasks))
        .route(
            "/dashboard/last-completed",
            get(dashboard::get_last_completed),
        )
        .with_state(state)
}
