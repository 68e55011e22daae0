//! In-memory store implementation (for testing)

use shortage_api::Shortage;
use std::io;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::{RecordStore, StoreError, StoreResult};

/// Keeps the "saved" collection in memory.
///
/// Can be told to fail loads or saves so callers can exercise their
/// degraded paths without touching the filesystem.
#[derive(Default)]
pub struct MemoryStore {
    saved: Mutex<Option<Vec<Shortage>>>,
    fail_loads: AtomicBool,
    fail_saves: AtomicBool,
    save_count: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `records` already saved
    pub fn with_records(records: Vec<Shortage>) -> Self {
        let store = Self::default();
        *store.lock() = Some(records);
        store
    }

    /// Make subsequent loads fail
    pub fn set_fail_loads(&self, fail: bool) {
        self.fail_loads.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent saves fail
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// The collection as last saved
    pub fn saved(&self) -> Option<Vec<Shortage>> {
        self.lock().clone()
    }

    /// Number of successful saves so far
    pub fn save_count(&self) -> usize {
        self.save_count.load(Ordering::SeqCst)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<Vec<Shortage>>> {
        // A poisoned lock only means a test panicked mid-save; the data is still usable
        self.saved.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl RecordStore for MemoryStore {
    fn load(&self) -> StoreResult<Option<Vec<Shortage>>> {
        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(StoreError::Serialization("Simulated load error".into()));
        }
        Ok(self.lock().clone())
    }

    fn save(&self, records: &[Shortage]) -> StoreResult<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StoreError::Io(io::Error::other("Simulated write error")));
        }
        *self.lock() = Some(records.to_vec());
        self.save_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn location(&self) -> String {
        "memory://shortages".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;
    use shortage_api::{Category, Room};

    fn sample() -> Shortage {
        Shortage::new("Soap", "User1", Room::Bathroom, Category::Other, 2, Local::now())
    }

    #[test]
    fn starts_unsaved() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_none());
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn save_and_load() {
        let store = MemoryStore::new();
        let shortage = sample();
        store.save(std::slice::from_ref(&shortage)).unwrap();

        assert_eq!(store.load().unwrap().unwrap(), vec![shortage]);
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn simulated_failures() {
        let store = MemoryStore::with_records(vec![sample()]);

        store.set_fail_saves(true);
        assert!(matches!(store.save(&[]), Err(StoreError::Io(_))));
        assert_eq!(store.saved().unwrap().len(), 1);

        store.set_fail_loads(true);
        assert!(store.load().is_err());

        store.set_fail_loads(false);
        assert_eq!(store.load().unwrap().unwrap().len(), 1);
    }
}
