//! Error types for caller-side input validation

use thiserror::Error;

/// Raised when raw user input cannot be turned into a field value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    #[error("Invalid room: {0:?}")]
    InvalidRoom(String),

    #[error("Invalid category: {0:?}")]
    InvalidCategory(String),

    #[error("Invalid priority: {input:?} (expected {min}-{max})")]
    InvalidPriority { input: String, min: u8, max: u8 },

    #[error("Invalid date: {0:?}")]
    InvalidDate(String),

    #[error("Title cannot be empty")]
    EmptyTitle,
}

impl TrackerError {
    pub fn room(input: impl Into<String>) -> Self {
        Self::InvalidRoom(input.into())
    }

    pub fn category(input: impl Into<String>) -> Self {
        Self::InvalidCategory(input.into())
    }

    pub fn date(input: impl Into<String>) -> Self {
        Self::InvalidDate(input.into())
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
