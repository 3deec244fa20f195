//! PostgreSQL persistence.
//!
//! [`StoreClient`] owns the pool and the per-operation deadline; the
//! repositories are thin handles over it, one per collection. Queries use
//! runtime-checked `sqlx::query_as` with private row types.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - `users`
//! - [`PgUrlRepository`] - `urls`
//! - [`PgClickRepository`] - `clicks`

pub mod pg_click_repository;
pub mod pg_url_repository;
pub mod pg_user_repository;
pub mod store;

pub use pg_click_repository::PgClickRepository;
pub use pg_url_repository::PgUrlRepository;
pub use pg_user_repository::PgUserRepository;
pub use store::{StoreClient, StoreOptions};
