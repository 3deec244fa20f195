//! User registration and lookup service.

use std::sync::Arc;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use serde_json::json;

/// Service for registering and looking up users.
pub struct UserService<U: UserRepository + ?Sized> {
    repository: Arc<U>,
}

impl<U: UserRepository + ?Sized> UserService<U> {
    /// Creates a new user service.
    pub fn new(repository: Arc<U>) -> Self {
        Self { repository }
    }

    /// Registers a new user.
    ///
    /// Surrounding whitespace is trimmed from both fields before storing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name is blank once trimmed.
    /// Returns [`AppError::Conflict`] if the email is already registered.
    /// Returns [`AppError::Internal`] or [`AppError::Timeout`] on store errors.
    pub async fn register(&self, email: &str, name: &str) -> Result<User, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::bad_request(
                "Name must be 1-100 characters",
                json!({ "name": "blank" }),
            ));
        }

        let new_user = NewUser {
            email: email.trim().to_string(),
            name: name.to_string(),
        };

        let user = self.repository.create(new_user).await?;
        tracing::info!(user_id = user.id, email = %user.email, "User registered");

        Ok(user)
    }

    /// Finds a user by email.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has this email.
    /// Returns [`AppError::Internal`] or [`AppError::Timeout`] on store errors.
    pub async fn find_by_email(&self, email: &str) -> Result<User, AppError> {
        self.repository
            .find_by_email(email.trim())
            .await?
            .ok_or_else(|| AppError::not_found("User not found", json!({ "email": email })))
    }
}
