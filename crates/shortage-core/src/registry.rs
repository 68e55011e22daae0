//! The shortage registry

use shortage_api::{AddOutcome, Caller, DeleteOutcome, Room, Shortage, ShortageKey, ShortageQuery};
use shortage_store::RecordStore;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::{ShortageFilter, StoreWarning};

/// Owns the shortage collection and mirrors it to a [`RecordStore`].
///
/// Every successful mutation rewrites the whole collection to the store
/// before returning. Store failures never fail an operation: the in-memory
/// collection stays authoritative and a [`StoreWarning`] is queued.
pub struct ShortageRegistry {
    records: Vec<Shortage>,
    store: Arc<dyn RecordStore>,
    warnings: Vec<StoreWarning>,
}

impl ShortageRegistry {
    /// Open the registry, loading whatever the store holds.
    ///
    /// Nothing saved yet means an empty registry. Unreadable or corrupt data
    /// also means an empty registry, with a [`StoreWarning::LoadFailed`].
    pub fn open(store: Arc<dyn RecordStore>) -> Self {
        let mut warnings = Vec::new();

        let records = match store.load() {
            Ok(Some(records)) => {
                info!(
                    location = %store.location(),
                    count = records.len(),
                    "Shortages loaded"
                );
                records
            }
            Ok(None) => {
                info!(location = %store.location(), "No saved shortages, starting empty");
                Vec::new()
            }
            Err(e) => {
                error!(
                    location = %store.location(),
                    error = %e,
                    "Failed to load shortages, starting empty"
                );
                warnings.push(StoreWarning::LoadFailed {
                    location: store.location(),
                    reason: e.to_string(),
                });
                Vec::new()
            }
        };

        Self {
            records,
            store,
            warnings,
        }
    }

    /// Add a shortage, resolving identity conflicts by priority.
    ///
    /// A record with the same title (any case) and room is replaced only if
    /// the new priority is strictly higher.
    pub fn add(&mut self, shortage: Shortage) -> AddOutcome {
        let existing = self
            .records
            .iter()
            .position(|s| shortage.key().matches(s));

        let outcome = match existing {
            None => {
                self.records.push(shortage);
                AddOutcome::Inserted
            }
            Some(index) => {
                let existing_priority = self.records[index].priority;
                if shortage.priority <= existing_priority {
                    debug!(
                        title = %shortage.title,
                        room = %shortage.room,
                        priority = shortage.priority,
                        existing_priority,
                        "Duplicate shortage rejected"
                    );
                    return AddOutcome::Rejected { existing_priority };
                }
                self.records.remove(index);
                self.records.push(shortage);
                AddOutcome::Replaced {
                    previous_priority: existing_priority,
                }
            }
        };

        if let Some(stored) = self.records.last() {
            info!(
                title = %stored.title,
                room = %stored.room,
                priority = stored.priority,
                reported_by = %stored.reported_by,
                ?outcome,
                "Shortage stored"
            );
        }

        self.persist();
        outcome
    }

    /// List the shortages `caller` may see that pass every filter in `query`,
    /// highest priority first.
    pub fn query(&self, caller: &Caller, query: &ShortageQuery) -> Vec<Shortage> {
        let filter = ShortageFilter::new(caller, query);

        let mut results: Vec<Shortage> = self
            .records
            .iter()
            .filter(|s| filter.matches(s))
            .cloned()
            .collect();

        // Stable: equal priorities keep insertion order
        results.sort_by(|a, b| b.priority.cmp(&a.priority));

        debug!(
            user = %caller.user,
            is_admin = caller.is_admin,
            matched = results.len(),
            "Shortages queried"
        );
        results
    }

    /// Delete the shortage identified by `title` and the room named by
    /// `room_text`, if `caller` is allowed to.
    pub fn delete(&mut self, title: &str, room_text: &str, caller: &Caller) -> DeleteOutcome {
        let room: Room = match room_text.parse() {
            Ok(room) => room,
            Err(_) => {
                debug!(room = room_text, "Delete with unrecognized room");
                return DeleteOutcome::InvalidRoom;
            }
        };

        let key = ShortageKey::new(title, room);
        let Some(index) = self.records.iter().position(|s| key.matches(s)) else {
            return DeleteOutcome::NotFound;
        };

        if !caller.can_access(&self.records[index]) {
            warn!(
                title,
                room = %room,
                user = %caller.user,
                owner = %self.records[index].reported_by,
                "Delete forbidden"
            );
            return DeleteOutcome::Forbidden;
        }

        let removed = self.records.remove(index);
        info!(
            title = %removed.title,
            room = %removed.room,
            user = %caller.user,
            "Shortage deleted"
        );

        self.persist();
        DeleteOutcome::Deleted
    }

    /// Number of stored shortages
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Snapshot of every stored shortage in insertion order
    pub fn records(&self) -> Vec<Shortage> {
        self.records.clone()
    }

    /// Take the warnings queued since the last call
    pub fn drain_warnings(&mut self) -> Vec<StoreWarning> {
        std::mem::take(&mut self.warnings)
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.records) {
            error!(
                location = %self.store.location(),
                error = %e,
                "Failed to save shortages"
            );
            self.warnings.push(StoreWarning::SaveFailed {
                location: self.store.location(),
                reason: e.to_string(),
            });
        }
    }
}
