//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs derive `Deserialize` + `Validate` and are read through
//! [`crate::api::extract::ValidatedJson`]. Response DTOs fix the JSON field
//! names of the wire format and convert from domain entities.

pub mod click;
pub mod dashboard;
pub mod health;
pub mod url;
pub mod user;
