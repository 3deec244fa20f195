//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_info::ClientInfo;

/// Redirects a short code to its long URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Resolve the code
/// 2. Track the click (counter + event) with client IP and `User-Agent`
/// 3. Return 307 Temporary Redirect
///
/// A tracking failure after a successful resolve is logged and does not
/// block the redirect.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    client: ClientInfo,
) -> Result<impl IntoResponse, AppError> {
    let url = state.url_service.resolve(&code).await?;

    if let Err(e) = state.click_service.track(&code, client).await {
        tracing::warn!(code = %code, error = %e, "Failed to track click");
    }

    Ok(Redirect::temporary(&url.long_url))
}
