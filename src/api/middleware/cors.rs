//! Cross-origin resource sharing.

use tower_http::cors::CorsLayer;

/// Allows any origin, method and header, and answers `OPTIONS` preflight
/// requests before they reach a handler.
pub fn layer() -> CorsLayer {
    CorsLayer::permissive()
}
