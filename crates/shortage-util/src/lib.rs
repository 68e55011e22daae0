//! Shared utilities for the shortage tracker
//!
//! This crate provides:
//! - User name type with case-insensitive matching
//! - Time utilities (mock-able clock, date parsing for filters)
//! - Error types for caller-side input validation
//! - Default paths for the data file and configuration

mod error;
mod names;
mod paths;
mod time;

pub use error::*;
pub use names::*;
pub use paths::*;
pub use time::*;
