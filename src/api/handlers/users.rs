//! Handler for user registration.

use axum::{Json, extract::State};

use crate::api::dto::user::{RegisterUserRequest, UserResponse};
use crate::api::extract::ValidatedJson;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new user.
///
/// # Endpoint
///
/// `POST /api/users`
///
/// # Request Body
///
/// ```json
/// { "email": "ada@example.com", "name": "Ada" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed or fails validation.
/// Returns 409 Conflict if the email is already registered.
pub async fn register_user_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state
        .user_service
        .register(&payload.email, &payload.name)
        .await?;

    Ok(Json(user.into()))
}
