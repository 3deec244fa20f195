//! Handler for the per-user dashboard.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::dashboard::DashboardResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns link activity and totals for a user.
///
/// # Endpoint
///
/// `GET /api/dashboard/{email}`
///
/// # Errors
///
/// Returns 404 Not Found if no user has the given email.
pub async fn dashboard_handler(
    Path(email): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, AppError> {
    let summary = state.dashboard_service.dashboard(&email).await?;

    Ok(Json(summary.into()))
}
