//! Infrastructure layer: concrete store backends.
//!
//! - [`persistence`] - PostgreSQL store client and repositories
//! - [`memory`] - In-process store with the same semantics

pub mod memory;
pub mod persistence;
