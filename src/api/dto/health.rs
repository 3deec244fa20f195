//! Body of `GET /health`.

use serde::Serialize;

/// Overall service state, derived from the store check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceState {
    Healthy,
    Degraded,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: ServiceState,
    pub version: &'static str,
    pub store: StoreCheck,
}

/// Outcome of one store ping.
#[derive(Debug, Serialize)]
pub struct StoreCheck {
    /// `postgres` or `memory`.
    pub backend: &'static str,
    pub reachable: bool,
    pub latency_ms: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthResponse {
    /// Builds the response for a finished store check.
    pub fn from_store_check(store: StoreCheck) -> Self {
        let status = if store.reachable {
            ServiceState::Healthy
        } else {
            ServiceState::Degraded
        };

        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            store,
        }
    }
}
