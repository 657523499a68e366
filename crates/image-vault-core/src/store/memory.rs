//! In-memory store implementations for testing and WASM environments.
//!
//! `RwLock`-guarded so they are usable from any context; the vault itself
//! is single-threaded and never contends.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use crate::error::StorageError;
use crate::models::ImageRecord;

use super::{SessionStore, SnapshotStore};

/// In-memory snapshot store.
#[derive(Default)]
pub struct MemorySnapshotStore {
    records: RwLock<Vec<ImageRecord>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current persisted snapshot, for inspection in tests.
    pub fn snapshot(&self) -> Vec<ImageRecord> {
        self.records.read().unwrap().clone()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load(&self) -> Result<Vec<ImageRecord>, StorageError> {
        Ok(self.records.read().unwrap().clone())
    }

    fn save(&self, records: &[ImageRecord]) -> Result<(), StorageError> {
        *self.records.write().unwrap() = records.to_vec();
        Ok(())
    }
}

/// In-memory session flag store.
#[derive(Default)]
pub struct MemorySessionStore {
    authenticated: AtomicBool,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn set_authenticated(&self) -> Result<(), StorageError> {
        self.authenticated.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn is_authenticated(&self) -> bool {
        self.authenticated.load(Ordering::SeqCst)
    }

    fn clear_authenticated(&self) -> Result<(), StorageError> {
        self.authenticated.store(false, Ordering::SeqCst);
        Ok(())
    }
}
