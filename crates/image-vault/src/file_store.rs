//! File-backed snapshot and session stores.
//!
//! The collection snapshot is one JSON document at a fixed path. Load
//! reads and parses the whole file; save serializes the whole collection
//! to a sibling `.tmp` file and renames it over the old snapshot, so a
//! reader never observes a partial write. The session flag is a marker
//! file, created at unlock and removed at lock.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use log::debug;

use image_vault_core::error::StorageError;
use image_vault_core::models::ImageRecord;
use image_vault_core::store::{SessionStore, SnapshotStore};

fn io_failure(err: std::io::Error) -> StorageError {
    StorageError::Failure(err.to_string())
}

/// Snapshot store keeping the whole collection in a single JSON file.
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn tmp_path(&self) -> PathBuf {
        let mut tmp = self.path.as_os_str().to_owned();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn load(&self) -> Result<Vec<ImageRecord>, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(io_failure(err)),
        };

        serde_json::from_str(&content).map_err(|err| StorageError::CorruptSnapshot(err.to_string()))
    }

    fn save(&self, records: &[ImageRecord]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_failure)?;
        }

        let json = serde_json::to_string(records).map_err(|err| StorageError::Failure(err.to_string()))?;

        let tmp = self.tmp_path();
        fs::write(&tmp, json).map_err(io_failure)?;
        fs::rename(&tmp, &self.path).map_err(io_failure)?;

        debug!(
            "wrote snapshot ({} records) to {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// Session flag stored as a marker file beside the snapshot.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionStore for FileSessionStore {
    fn set_authenticated(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_failure)?;
        }
        fs::write(&self.path, b"unlocked\n").map_err(io_failure)
    }

    fn is_authenticated(&self) -> bool {
        self.path.exists()
    }

    fn clear_authenticated(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(io_failure(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use tempfile::TempDir;
    use uuid::Uuid;

    use super::*;

    fn record(name: &str) -> ImageRecord {
        ImageRecord {
            id: Uuid::new_v4(),
            content: "data:image/png;base64,aGk=".to_string(),
            display_name: name.to_string(),
            keywords: vec!["test".to_string()],
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let tmp = TempDir::new().unwrap();
        let store = FileSnapshotStore::new(tmp.path().join("vault.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let tmp = TempDir::new().unwrap();
        let store = FileSnapshotStore::new(tmp.path().join("vault.json"));

        let records = vec![record("a"), record("b")];
        store.save(&records).unwrap();
        assert_eq!(store.load().unwrap(), records);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let tmp = TempDir::new().unwrap();
        let store = FileSnapshotStore::new(tmp.path().join("nested/data/vault.json"));
        store.save(&[record("a")]).unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn test_corrupt_snapshot_is_signalled() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("vault.json");
        fs::write(&path, "{ not json").unwrap();

        let store = FileSnapshotStore::new(&path);
        assert!(matches!(
            store.load(),
            Err(StorageError::CorruptSnapshot(_))
        ));
    }

    #[test]
    fn test_save_replaces_snapshot_and_leaves_no_tmp() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("vault.json");
        let store = FileSnapshotStore::new(&path);

        store.save(&[record("a"), record("b")]).unwrap();
        let replacement = vec![record("c")];
        store.save(&replacement).unwrap();

        assert_eq!(store.load().unwrap(), replacement);
        assert!(!store.tmp_path().exists());
    }

    #[test]
    fn test_session_marker_lifecycle() {
        let tmp = TempDir::new().unwrap();
        let session = FileSessionStore::new(tmp.path().join("session"));

        assert!(!session.is_authenticated());
        session.set_authenticated().unwrap();
        assert!(session.is_authenticated());
        session.clear_authenticated().unwrap();
        assert!(!session.is_authenticated());

        // Clearing an already-ended session is fine.
        session.clear_authenticated().unwrap();
    }
}
