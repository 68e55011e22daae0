//! Persistence layer for the shortage tracker
//!
//! Provides:
//! - The `RecordStore` trait: load and save the whole collection
//! - `JsonFileStore`: pretty-printed JSON document on disk
//! - `MemoryStore`: in-process store for tests, with write-failure simulation

mod json;
mod memory;
mod traits;

pub use json::*;
pub use memory::*;
pub use traits::*;

use thiserror::Error;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Serialization(e.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
