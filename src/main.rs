use atelier_backend::{AppState, db::DbPool};
use axum::{Router, Server, http::HeaderValue, middleware::from_fn};
use diesel::{
    PgConnection,
    r2d2::{self, ConnectionManager as DbConnectionManager},
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};

#[tokio::main]
async fn main() {
    let config = match atelier_backend::config::Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    atelier_backend::init_tracing(&config);

    // Initialize database
    let manager = DbConnectionManager::<PgConnection>::new(&config.database_url);
    let db: DbPool = r2d2::Pool::builder()
        .max_size(config.database_max_connections)
        .min_idle(Some(config.database_min_connections))
        .connection_timeout(Duration::from_secs(config.database_connection_timeout))
        .build(manager)
        .expect("Failed to create database connection pool");

    // Initialize Redis
    let redis =
        redis::Client::open(config.redis_url.clone()).expect("Failed to create Redis client");

    let addr = config
        .server_address()
        .parse()
        .expect("Invalid server address");

    // Application state
    let state = Arc::new(AppState::new(db, redis, config));

    // CORS configuration: "*" opens up, anything else is an explicit allowlist
    let cors = if state.config.cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = state
            .config
            .cors_origins
            .iter()
            .map(|origin| origin.parse().expect("Invalid CORS origin"))
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Login does not require a token
    let auth_routes = Router::new()
        .route(
            "/auth/login",
            axum::routing::post(atelier_backend::routes::auth::login),
        )
        .with_state(state.clone());

    // Everything else sits behind the auth middleware
    let protected_routes =
        atelier_backend::routes::create_router(state.clone()).layer(
            axum::middleware::from_fn_with_state(
                Arc::new(state.db.clone()),
                atelier_backend::middleware::auth::auth_middleware,
            ),
        );

    let api = Router::new().merge(auth_routes).merge(protected_routes);

    let app = Router::new()
        .nest("/api", api)
        .layer(cors)
        .layer(from_fn(atelier_backend::middleware::logger::logger));

    tracing::info!("Server running at http://{}", addr);
    Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
