//! API route configuration.

use crate::api::handlers::{
    click_stats_handler, create_url_handler, dashboard_handler, list_urls_by_owner_handler,
    record_click_handler, register_user_handler, resolve_url_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /users`                        - Register a user
/// - `POST /url`                          - Create a short URL
/// - `GET  /url/getUrlsByUserId/{email}`  - List a user's short URLs
/// - `GET  /url/{code}`                   - Resolve a short code
/// - `POST /url/{code}/click`             - Record a click
/// - `GET  /url/{code}/stats`             - Click events of a short code
/// - `GET  /dashboard/{email}`            - Link activity summary of a user
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(register_user_handler))
        .route("/url", post(create_url_handler))
        .route(
            "/url/getUrlsByUserId/{email}",
            get(list_urls_by_owner_handler),
        )
        .route("/url/{code}", get(resolve_url_handler))
        .route("/url/{code}/click", post(record_click_handler))
        .route("/url/{code}/stats", get(click_stats_handler))
        .route("/dashboard/{email}", get(dashboard_handler))
}
