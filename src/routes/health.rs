use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::constants::PING_RESPONSE;
use crate::db::QueryRepository;
use crate::AppState;

/// Liveness check, useful for confirming the server has started
pub async fn ping() -> &'static str {
    PING_RESPONSE
}

/// Health check endpoint
///
/// Returns the health status of the server and database connection.
/// Used by load balancers and monitoring systems.
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let db_status = match QueryRepository::new(&state.pool).ping().await {
        Ok(()) => "connected",
        Err(e) => {
            tracing::error!("Database health check failed: {:?}", e);
            "disconnected"
        }
    };

    Json(json!({
        "status": if db_status == "connected" { "healthy" } else { "unhealthy" },
        "database": db_status,
        "environment": state.config.environment,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
