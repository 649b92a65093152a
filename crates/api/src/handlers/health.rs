//! Service banner, smoke-test and health endpoints.

use axum::extract::State;
use axum::Json;
use inventory_db::repositories::AssetRepo;
use serde::Serialize;

use crate::response::StatusMessage;
use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the database cannot be queried.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    pub db_healthy: bool,
    /// Rows in `assets`; null when the database is unreachable.
    pub asset_count: Option<i64>,
}

/// GET / -- confirms the service is up.
pub async fn root() -> Json<StatusMessage> {
    Json(StatusMessage {
        status: Some("OK"),
        message: "Asset Management API is running",
    })
}

/// GET /api/test -- confirms the API router is mounted.
pub async fn api_test() -> Json<StatusMessage> {
    Json(StatusMessage {
        status: None,
        message: "API test endpoint is working!",
    })
}

/// GET /health -- counts assets as the liveness probe for the database.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let asset_count = match AssetRepo::count(&state.pool).await {
        Ok(count) => Some(count),
        Err(err) => {
            tracing::warn!(error = %err, "Health check could not reach the database");
            None
        }
    };
    let db_healthy = asset_count.is_some();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        asset_count,
    })
}
