//! Store trait definitions

use shortage_api::Shortage;

use crate::StoreResult;

/// Durable home for the shortage collection.
///
/// Stores deal in whole collections: every save replaces what was there.
pub trait RecordStore: Send + Sync {
    /// Load the saved collection.
    ///
    /// Returns `Ok(None)` if nothing has been saved yet.
    fn load(&self) -> StoreResult<Option<Vec<Shortage>>>;

    /// Replace the saved collection with `records`
    fn save(&self, records: &[Shortage]) -> StoreResult<()>;

    /// Human-readable location, for log messages
    fn location(&self) -> String;
}
