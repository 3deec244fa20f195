//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod clicks;
pub mod dashboard;
pub mod health;
pub mod redirect;
pub mod urls;
pub mod users;

pub use clicks::{click_stats_handler, record_click_handler};
pub use dashboard::dashboard_handler;
pub use health::health_handler;
pub use redirect::redirect_handler;
pub use urls::{create_url_handler, list_urls_by_owner_handler, resolve_url_handler};
pub use users::register_user_handler;
