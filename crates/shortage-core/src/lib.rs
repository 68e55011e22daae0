//! Core shortage registry
//!
//! This crate is the heart of the tracker, containing:
//! - The in-memory collection and its one-record-per-identity invariant
//! - Priority-based conflict resolution on add
//! - Visibility rules and the filter pipeline for queries
//! - Ownership checks on delete
//! - Write-through persistence with degraded-mode warnings

mod events;
mod filter;
mod registry;

pub use events::*;
pub use filter::*;
pub use registry::*;
