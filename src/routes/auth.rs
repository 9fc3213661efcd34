use crate::AppState;
use crate::db::models::ApiResponse;
use crate::db::models::auth::{AuthUser, LoginRequest, LoginResponse};
use crate::db::repositories::members::MembersRepo;
use crate::validation::ValidatedJson;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use bcrypt::verify;
use std::sync::Arc;
use tokio::task;

/// POST /auth/login
pub async fn login(
    State(state): State<Arc<AppState>>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    let (member, stored_hash) =
        match MembersRepo::find_credentials_by_email(&mut conn, &payload.email) {
            Ok(Some(found)) => found,
            Ok(None) => {
                tracing::warn!("Login failed - no account for email: {}", payload.email);
                let response = ApiResponse::<()>::unauthorized("Invalid email or password");
                return (StatusCode::UNAUTHORIZED, Json(response)).into_response();
            }
            Err(e) => {
                tracing::error!("Login database error: {}", e);
                let response = ApiResponse::<()>::internal_error("Database error");
                return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
            }
        };

    // bcrypt is deliberately slow; run it off the async executor.
    let password = payload.password.clone();
    let is_valid = match task::spawn_blocking(move || verify(password.as_bytes(), &stored_hash))
        .await
    {
        Ok(Ok(valid)) => valid,
        Ok(Err(e)) => {
            tracing::error!("Password verification error: {}", e);
            let response = ApiResponse::<()>::internal_error("Password verification failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
        Err(e) => {
            tracing::error!("Password verification task failed: {}", e);
            let response = ApiResponse::<()>::internal_error("Password verification failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    if !is_valid {
        tracing::warn!("Login failed - bad password for email: {}", payload.email);
        let response = ApiResponse::<()>::unauthorized("Invalid email or password");
        return (StatusCode::UNAUTHORIZED, Json(response)).into_response();
    }

    if !member.is_active {
        let response = ApiResponse::<()>::unauthorized("Account is deactivated");
        return (StatusCode::UNAUTHORIZED, Json(response)).into_response();
    }

    let user = AuthUser {
        id: member.id,
        name: member.name,
        email: member.email,
        role: member.role,
        avatar_url: member.avatar_url,
    };

    let access_token = match state.auth_service.generate_access_token(&user) {
        Ok(token) => token,
        Err(e) => {
            tracing::error!("Failed to generate access token: {}", e);
            let response = ApiResponse::<()>::internal_error("Failed to generate token");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    tracing::info!("Login succeeded for {}", user.email);

    let login_response = LoginResponse {
        access_token,
        token_type: "Bearer".to_string(),
        expires_in: state.auth_service.access_token_ttl().as_secs() as i64,
        user,
    };

    let response = ApiResponse::success(login_response, "Login successful");
    (StatusCode::OK, Json(response)).into_response()
}

/// GET /auth/profile
pub async fn get_profile(user: AuthUser) -> impl IntoResponse {
    let response = ApiResponse::success(user, "Profile retrieved successfully");
    (StatusCode::OK, Json(response)).into_response()
}
