//! Handler for health check endpoint.

use std::time::Instant;

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{HealthResponse, ServiceState, StoreCheck};
use crate::state::AppState;

/// Pings the store and reports the result.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: The store answered the ping
/// - **503 Service Unavailable**: The ping failed or timed out
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "store": { "backend": "postgres", "reachable": true, "latency_ms": 2 }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse::from_store_check(check_store(&state).await);

    let status = match response.status {
        ServiceState::Healthy => StatusCode::OK,
        ServiceState::Degraded => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status, Json(response))
}

async fn check_store(state: &AppState) -> StoreCheck {
    let backend = state.store.backend();
    let started = Instant::now();
    let result = state.store.ping().await;
    let latency_ms = started.elapsed().as_millis() as u64;

    if let Err(e) = &result {
        tracing::warn!(backend, latency_ms, error = %e, "Store health check failed");
    }

    StoreCheck {
        backend,
        reachable: result.is_ok(),
        latency_ms,
        error: result.err().map(|e| e.to_string()),
    }
}
