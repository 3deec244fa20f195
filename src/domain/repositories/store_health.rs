//! Connectivity check for the backing store.

use crate::error::AppError;
use async_trait::async_trait;

/// Liveness check implemented by every store backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StoreHealth: Send + Sync {
    /// Short backend name for logs and the health endpoint.
    fn backend(&self) -> &'static str;

    /// Round-trips a trivial request to the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] or [`AppError::Timeout`] if the store is
    /// unreachable.
    async fn ping(&self) -> Result<(), AppError>;
}
