//! Business logic services for the application layer.

pub mod click_service;
pub mod dashboard_service;
pub mod url_service;
pub mod user_service;

pub use click_service::ClickService;
pub use dashboard_service::{DashboardService, DashboardSummary, LinkActivity};
pub use url_service::UrlService;
pub use user_service::UserService;
