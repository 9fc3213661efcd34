use ::redis::{AsyncCommands, Client, RedisResult, cmd};

use crate::error::AppError;
use crate::services::dashboard_service::DashboardStats;

const STATS_KEY: &str = "dashboard:stats";

/// Caches the dashboard aggregates. Clients poll these on a 15-60s interval,
/// so one TTL of staleness is an accepted tradeoff, not a bug.
pub async fn cache_dashboard_stats(
    redis_client: &Client,
    stats: &DashboardStats,
    ttl: u64,
) -> Result<(), AppError> {
    let mut conn = redis_client
        .get_multiplexed_async_connection()
        .await
        .map_err(|e| AppError::Internal(format!("Failed to get Redis connection: {}", e)))?;

    let stats_json = serde_json::to_string(stats)
        .map_err(|e| AppError::Internal(format!("Failed to serialize dashboard stats: {}", e)))?;

    let _: () = conn
        .set_ex(STATS_KEY, stats_json, ttl)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to cache dashboard stats: {}", e)))?;

    Ok(())
}

pub async fn get_cached_dashboard_stats(
    redis_client: &Client,
) -> Result<Option<DashboardStats>, AppError> {
    let mut conn = redis_client
        .get_multiplexed_async_connection()
        .await
        .map_err(|e| AppError::Internal(format!("Failed to get Redis connection: {}", e)))?;

    let stats_json: Option<String> = conn
        .get(STATS_KEY)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to get cached dashboard stats: {}", e)))?;

    match stats_json {
        Some(json) => {
            let stats = serde_json::from_str(&json).map_err(|e| {
                AppError::Internal(format!("Failed to deserialize dashboard stats: {}", e))
            })?;
            Ok(Some(stats))
        }
        None => Ok(None),
    }
}

/// Dropped after any stage mutation so the next poll recomputes.
pub async fn invalidate_dashboard_stats(redis_client: &Client) -> Result<(), AppError> {
    let mut conn = redis_client
        .get_multiplexed_async_connection()
        .await
        .map_err(|e| AppError::Internal(format!("Failed to get Redis connection: {}", e)))?;

    let _: RedisResult<i32> = conn.del(STATS_KEY).await;

    Ok(())
}

pub async fn redis_health_check(redis_client: &Client) -> Result<bool, AppError> {
    let mut conn = redis_client
        .get_multiplexed_async_connection()
        .await
        .map_err(|e| AppError::Internal(format!("Failed to get Redis connection: {}", e)))?;

    let pong: String = cmd("PING")
        .query_async(&mut conn)
        .await
        .map_err(|e| AppError::Internal(format!("Redis health check failed: {}", e)))?;

    Ok(pong == "PONG")
}
