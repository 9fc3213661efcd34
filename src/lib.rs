pub mod cache;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod schema;
pub mod services;
pub mod validation;
pub mod workflow;

use crate::config::Config;
use crate::db::DbPool;
use crate::middleware::auth::{AuthConfig, AuthService};
use std::sync::Arc;
use std::time::Duration;

pub struct AppState {
    pub db: DbPool,
    pub redis: redis::Client,
    pub config: Arc<Config>,
    pub auth_service: AuthService,
}

impl AppState {
    pub fn new(db: DbPool, redis: redis::Client, config: Config) -> Self {
        let auth_service = AuthService::new(AuthConfig {
            jwt_secret: config.jwt_secret.clone(),
            jwt_expiration: Duration::from_secs(config.jwt_access_token_expires_in),
        });
        Self {
            db,
            redis,
            config: Arc::new(config),
            auth_service,
        }
    }
}

pub fn init_tracing(config: &Config) {
    let level_filter = match config.log_level.as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "info" => "info",
        "warn" => "warn",
        "error" => "error",
        _ => "info",
    };

    unsafe {
        std::env::set_var("RUST_LOG", level_filter);
    }

    match config.log_format.as_str() {
        "json" => {
            tracing_subscriber::fmt().json().init();
        }
        _ => {
            tracing_subscriber::fmt().init();
        }
    }
}
