//! Core domain entities.
//!
//! Entities are plain data structures; persistence and serialization live in
//! the infrastructure and API layers.
//!
//! - [`User`] - A registered owner of short URLs
//! - [`ShortUrl`] - A long URL reachable through a short code
//! - [`Click`] - One recorded visit of a short URL
//!
//! Each entity has a `New*` counterpart carrying only the fields a caller
//! supplies on creation.

pub mod click;
pub mod short_url;
pub mod user;

pub use click::{Click, NewClick};
pub use short_url::{NewShortUrl, ShortUrl};
pub use user::{NewUser, User};
