//! Domain layer: business entities and repository contracts.
//!
//! - [`entities`] - Users, short URLs and click events
//! - [`repositories`] - Data access traits implemented by the infrastructure layer
//!
//! The domain layer has no dependency on the HTTP or storage layers.

pub mod entities;
pub mod repositories;
