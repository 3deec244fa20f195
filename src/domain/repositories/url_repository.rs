//! Repository trait for short URL data access.

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the `urls` collection.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::MemoryStore`] - In-memory implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Persists a new short URL with `click_count = 0`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code is already taken.
    /// Returns [`AppError::Internal`] or [`AppError::Timeout`] on store errors.
    async fn create(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError>;

    /// Finds a short URL by its code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] or [`AppError::Timeout`] on store errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortUrl>, AppError>;

    /// Lists every short URL owned by `owner_id`, oldest first.
    ///
    /// An owner without URLs yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] or [`AppError::Timeout`] on store errors.
    async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<ShortUrl>, AppError>;

    /// Atomically adds one to the click counter of `code`.
    ///
    /// Returns `Ok(true)` if a record matched, `Ok(false)` if the code does not
    /// exist. The match and the increment are a single store operation.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] or [`AppError::Timeout`] on store errors.
    async fn increment_click_count(&self, code: &str) -> Result<bool, AppError>;
}
