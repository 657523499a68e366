//! Storage abstraction for Image Vault.
//!
//! The [`SnapshotStore`] trait is the durable collection surface: the
//! whole collection is loaded and saved as one serialized unit, never row
//! by row. The [`SessionStore`] trait is the independent, session-scoped
//! flag surface behind the gate. Backends are pluggable: the in-memory
//! stores here, the file-backed stores in the frontend crate, or
//! `localStorage` / `sessionStorage` on WASM targets.

pub mod memory;

use crate::error::StorageError;
use crate::models::ImageRecord;

/// Durable store for the collection snapshot.
///
/// # Operations
///
/// | Method | Purpose |
/// |--------|---------|
/// | [`load`](SnapshotStore::load) | Read the entire persisted collection |
/// | [`save`](SnapshotStore::save) | Replace the persisted snapshot as one unit |
pub trait SnapshotStore {
    /// Load the persisted collection.
    ///
    /// A missing snapshot is an empty collection, not an error. An
    /// unparsable one is [`StorageError::CorruptSnapshot`].
    fn load(&self) -> Result<Vec<ImageRecord>, StorageError>;

    /// Replace the persisted snapshot with the given collection.
    ///
    /// There is no partial-write surface: from the caller's perspective a
    /// save either replaces the prior snapshot or leaves it unchanged.
    fn save(&self, records: &[ImageRecord]) -> Result<(), StorageError>;
}

impl<T: SnapshotStore + ?Sized> SnapshotStore for &T {
    fn load(&self) -> Result<Vec<ImageRecord>, StorageError> {
        (**self).load()
    }

    fn save(&self, records: &[ImageRecord]) -> Result<(), StorageError> {
        (**self).save(records)
    }
}

/// Session-scoped authentication flag behind the gate.
///
/// Independent of the snapshot surface: the flag lives for the current
/// session, the snapshot for the device or profile.
pub trait SessionStore {
    /// Mark the current session as authenticated.
    fn set_authenticated(&self) -> Result<(), StorageError>;

    /// Whether the current session is authenticated.
    fn is_authenticated(&self) -> bool;

    /// Clear the flag, ending the session.
    fn clear_authenticated(&self) -> Result<(), StorageError>;
}
