//! Repository trait for user data access.

use crate::domain::entities::{NewUser, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the `users` collection.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::MemoryStore`] - In-memory implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persists a new user with `created_at` set to the current time.
    ///
    /// Uniqueness of `email` is enforced by the store in the same operation
    /// as the insert.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a user with the same email exists.
    /// Returns [`AppError::Internal`] or [`AppError::Timeout`] on store errors.
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Finds a user by email.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] or [`AppError::Timeout`] on store errors.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
}
