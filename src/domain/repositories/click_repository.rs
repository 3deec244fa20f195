//! Repository trait for click events.

use crate::domain::entities::{Click, NewClick};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the append-only `clicks` collection.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClickRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::MemoryStore`] - In-memory implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Appends a click event stamped with the current time.
    ///
    /// Does not check that the code exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] or [`AppError::Timeout`] on store errors.
    async fn record(&self, new_click: NewClick) -> Result<Click, AppError>;

    /// Lists every click recorded for `code`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] or [`AppError::Timeout`] on store errors.
    async fn list_by_code(&self, code: &str) -> Result<Vec<Click>, AppError>;
}
