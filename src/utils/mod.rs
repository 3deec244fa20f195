//! Utility functions shared by services and handlers.
//!
//! - [`code_generator`] - Random short code generation
//! - [`url_policy`] - Which long URLs may be shortened
//! - [`client_info`] - Client IP and user agent extraction for click tracking

pub mod client_info;
pub mod code_generator;
pub mod url_policy;
