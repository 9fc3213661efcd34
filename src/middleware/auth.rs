use crate::db::{DbPool, models::AuthUser};
use axum::{
    extract::State,
    http::{Request, StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: uuid::Uuid, // user_id
    pub email: String,
    pub exp: u64,    // expiration time
    pub iat: u64,    // issued at
    pub jti: String, // JWT ID
}

pub struct AuthConfig {
    pub jwt_secret: String,
    pub jwt_expiration: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: std::env::var("JWT_SECRET")
                .unwrap_or_else(|_| "your-secret-key".to_string()),
            jwt_expiration: Duration::from_secs(3600), // 1 hour
        }
    }
}

pub struct AuthService {
    config: AuthConfig,
}

impl AuthService {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    pub fn access_token_ttl(&self) -> Duration {
        self.config.jwt_expiration
    }

    pub fn generate_access_token(
        &self,
        user: &AuthUser,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        let claims = Claims {
            sub: user.id,
            email: user.email.clone(),
            exp: now + self.config.jwt_expiration.as_secs(),
            iat: now,
            jti: uuid::Uuid::new_v4().to_string(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret.as_ref()),
        )
    }

    pub fn verify_token(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret.as_ref()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }
}

/// Inserted into request extensions by `auth_middleware` and read back by the
/// `AuthUser` extractor.
#[derive(Clone, Debug)]
pub struct AuthUserInfo {
    pub user: AuthUser,
}

pub async fn auth_middleware(
    State(pool): State<Arc<DbPool>>,
    mut request: Request<axum::body::Body>,
    next: Next<axum::body::Body>,
) -> Result<Response, StatusCode> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|auth_header| auth_header.to_str().ok())
        .and_then(|auth_str| {
            auth_str
                .strip_prefix("Bearer ")
                .map(|token| token.to_string())
        });

    let token = auth_header.ok_or(StatusCode::UNAUTHORIZED)?;

    let auth_service = AuthService::new(AuthConfig::default());

    let claims = auth_service
        .verify_token(&token)
        .map_err(|_| StatusCode::UNAUTHORIZED)?;

    // The token only proves identity; role and active status come from the
    // database on every request.
    let user = load_active_user(&pool, claims.sub).map_err(|_| StatusCode::UNAUTHORIZED)?;

    request.extensions_mut().insert(AuthUserInfo { user });

    Ok(next.run(request).await)
}

fn load_active_user(
    pool: &Arc<DbPool>,
    user_id: uuid::Uuid,
) -> Result<AuthUser, diesel::result::Error> {
    use crate::schema::users::dsl::*;
    use diesel::prelude::*;

    let mut conn = pool
        .get()
        .map_err(|_| diesel::result::Error::BrokenTransactionManager)?;

    let member = users
        .filter(id.eq(user_id))
        .filter(is_active.eq(true))
        .select(crate::db::models::TeamMember::as_select())
        .first::<crate::db::models::TeamMember>(&mut conn)?;

    Ok(AuthUser {
        id: member.id,
        name: member.name,
        email: member.email,
        role: member.role,
        avatar_url: member.avatar_url,
    })
}
