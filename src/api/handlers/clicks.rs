//! Handlers for click recording and click history.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::click::ClickResponse;
use crate::api::dto::url::ClickStatusResponse;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_info::ClientInfo;

/// Records a click on a short code.
///
/// # Endpoint
///
/// `POST /api/url/{code}/click`
///
/// Increments the click counter, then stores a click event with the client
/// IP and `User-Agent`.
///
/// # Errors
///
/// Returns 404 Not Found if the code does not exist.
pub async fn record_click_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    client: ClientInfo,
) -> Result<Json<ClickStatusResponse>, AppError> {
    state.click_service.track(&code, client).await?;

    Ok(Json(ClickStatusResponse::success()))
}

/// Lists the click events of a short code, oldest first.
///
/// # Endpoint
///
/// `GET /api/url/{code}/stats`
///
/// An unknown code yields an empty array.
pub async fn click_stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<ClickResponse>>, AppError> {
    let clicks = state.click_service.list_by_code(&code).await?;

    Ok(Json(clicks.into_iter().map(Into::into).collect()))
}
