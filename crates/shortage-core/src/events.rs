//! Warnings raised by the registry when persistence misbehaves

use thiserror::Error;

/// A persistence problem the registry survived.
///
/// The registry keeps working from memory; these are queued so the front
/// end can tell the user the data file is out of step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreWarning {
    /// Saved data could not be read; the registry started empty
    #[error("Could not load shortages from {location}: {reason}. Starting with an empty list.")]
    LoadFailed { location: String, reason: String },

    /// A change was kept in memory but not written out
    #[error("Could not save shortages to {location}: {reason}. Changes are kept for this session only.")]
    SaveFailed { location: String, reason: String },
}
