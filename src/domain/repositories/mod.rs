//! Repository trait definitions for the domain layer.
//!
//! These traits abstract the three collections of the document store. They
//! are implemented by `crate::infrastructure::persistence` (PostgreSQL) and
//! `crate::infrastructure::memory` (in-process), and mocked with `mockall`
//! in unit tests.
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - Registration and lookup by email
//! - [`UrlRepository`] - Short URL creation, resolution, listing, click counter
//! - [`ClickRepository`] - Click event log
//! - [`StoreHealth`] - Backend connectivity check

pub mod click_repository;
pub mod store_health;
pub mod url_repository;
pub mod user_repository;

pub use click_repository::ClickRepository;
pub use store_health::StoreHealth;
pub use url_repository::UrlRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use click_repository::MockClickRepository;
#[cfg(test)]
pub use store_health::MockStoreHealth;
#[cfg(test)]
pub use url_repository::MockUrlRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
