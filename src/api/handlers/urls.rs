//! Handlers for short URL creation, resolution and listing.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::url::{CreateUrlRequest, ShortUrlResponse};
use crate::api::extract::ValidatedJson;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL owned by a registered user.
///
/// # Endpoint
///
/// `POST /api/url`
///
/// # Request Body
///
/// ```json
/// { "long_url": "https://example.com/page", "email": "ada@example.com" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed or the URL is invalid.
/// Returns 404 Not Found if no user has the given email.
pub async fn create_url_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUrlRequest>,
) -> Result<Json<ShortUrlResponse>, AppError> {
    let url = state
        .url_service
        .create(&payload.long_url, &payload.email)
        .await?;

    Ok(Json(url.into()))
}

/// Returns the record behind a short code.
///
/// # Endpoint
///
/// `GET /api/url/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the code does not exist.
pub async fn resolve_url_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ShortUrlResponse>, AppError> {
    let url = state.url_service.resolve(&code).await?;

    Ok(Json(url.into()))
}

/// Lists the short URLs owned by a user, oldest first.
///
/// # Endpoint
///
/// `GET /api/url/getUrlsByUserId/{email}`
///
/// # Errors
///
/// Returns 404 Not Found if no user has the given email.
pub async fn list_urls_by_owner_handler(
    Path(email): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<ShortUrlResponse>>, AppError> {
    let urls = state.url_service.list_by_owner_email(&email).await?;

    Ok(Json(urls.into_iter().map(Into::into).collect()))
}
