//! Application layer services implementing business logic.
//!
//! Services coordinate repository calls and enforce the rules that sit above
//! plain storage: URL policy, short code generation with collision retry, the
//! counter-then-record click flow and dashboard aggregation. They are generic
//! over the repository traits so the same code runs on PostgreSQL, in memory
//! and against `mockall` mocks.
//!
//! # Available Services
//!
//! - [`services::UserService`] - Registration and lookup by email
//! - [`services::UrlService`] - Short URL creation, resolution and listing
//! - [`services::ClickService`] - Click recording and history
//! - [`services::DashboardService`] - Per-user link activity summary

pub mod services;
