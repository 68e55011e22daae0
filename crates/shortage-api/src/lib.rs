//! Shared data model for the shortage tracker
//!
//! This crate defines the types exchanged between the front end and the
//! shortage registry:
//! - Shortage records and their enums
//! - Caller identity
//! - Query filters
//! - Operation outcomes

mod outcomes;
mod query;
mod types;

pub use outcomes::*;
pub use query::*;
pub use types::*;
