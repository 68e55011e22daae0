//! Results of registry operations
//!
//! These are policy outcomes, not errors: a rejected duplicate or a
//! forbidden delete is an expected answer.

use serde::{Deserialize, Serialize};

/// Result of adding a shortage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AddOutcome {
    /// No record had this identity; the new one was stored
    Inserted,

    /// A lower-priority record with this identity was replaced
    Replaced { previous_priority: u8 },

    /// A record with this identity and equal or higher priority already exists
    Rejected { existing_priority: u8 },
}

impl AddOutcome {
    /// True if the collection changed
    pub fn is_stored(&self) -> bool {
        matches!(self, AddOutcome::Inserted | AddOutcome::Replaced { .. })
    }
}

/// Result of a delete request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
    /// The caller is neither an admin nor the reporter
    Forbidden,
    /// The room text names no known room
    InvalidRoom,
}
