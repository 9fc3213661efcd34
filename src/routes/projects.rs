use crate::AppState;
use crate::db::models::ApiResponse;
use crate::db::models::auth::AuthUser;
use crate::db::models::project::{CreateProjectRequest, NewProject, Project};
use crate::db::repositories::projects::ProjectsRepo;
use crate::validation::ValidatedJson;
use crate::validation::project::validate_create_project;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use uuid::Uuid;

/// GET /projects
pub async fn get_projects(
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

    match ProjectsRepo::list(&mut conn) {
        Ok(projects) => {
            let response = ApiResponse::success(projects, "Projects retrieved successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": "Failed to load projects" })),
        )
            .into_response(),
    }
}

/// POST /projects
pub async fn create_project(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateProjectRequest>,
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

    if let Err(e) = validate_create_project(&request.name, &request.client_name) {
        return e.into_response();
    }

    let new_project = NewProject {
        name: request.name,
        client_name: request.client_name,
    };

    match ProjectsRepo::insert(&mut conn, &new_project) {
        Ok(project) => {
            let response = ApiResponse::created(project, "Project created successfully");
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": "Failed to create project" })),
        )
            .into_response(),
    }
}

/// GET /projects/:project_id
pub async fn get_project(
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

    match ProjectsRepo::find_by_id(&mut conn, project_id) {
        Ok(Some(project)) => {
            let response: ApiResponse<Project> =
                ApiResponse::success(project, "Project retrieved successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "Project not found" })),
        )
            .into_response(),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": "Failed to get project" })),
        )
            .into_response(),
    }
}
