//! The vault store: exclusive owner of the in-memory record collection.
//!
//! Every mutation updates the in-memory collection first, then writes the
//! entire collection through the injected [`SnapshotStore`]; there is no
//! incremental persistence path. A failed write never rolls the in-memory
//! mutation back: the session stays usable, and the caller decides how to
//! warn that changes may not survive a reload.
//!
//! The collection is ordered most-recently-inserted first. Insert
//! prepends; removal preserves the relative order of the remainder.

use chrono::Utc;
use log::{debug, warn};
use uuid::Uuid;

use crate::error::{StorageError, VaultError};
use crate::keyword::normalize_keyword_set;
use crate::models::{ImageRecord, RecordDraft};
use crate::search;
use crate::store::SnapshotStore;

/// Outcome of a vault mutation.
///
/// By the time a `Mutation` exists the in-memory change has been applied;
/// `storage_error` reports whether the snapshot write also succeeded.
#[derive(Debug)]
pub struct Mutation<T> {
    /// The in-memory result of the operation.
    pub value: T,
    /// Set when the snapshot write failed; memory remains authoritative.
    pub storage_error: Option<StorageError>,
}

impl<T> Mutation<T> {
    /// Whether the mutation reached durable storage.
    pub fn is_durable(&self) -> bool {
        self.storage_error.is_none()
    }
}

/// Exclusive owner of the ordered record collection.
pub struct VaultStore<S: SnapshotStore> {
    collection: Vec<ImageRecord>,
    snapshots: S,
}

impl<S: SnapshotStore> VaultStore<S> {
    /// Open the vault, hydrating the collection from the snapshot store.
    ///
    /// Load failures degrade to an empty collection: a corrupt snapshot
    /// must not prevent the vault from starting. Keyword sets are
    /// re-normalized on load rather than assumed deduplicated in storage.
    pub fn open(snapshots: S) -> Self {
        let collection = match snapshots.load() {
            Ok(records) => records
                .into_iter()
                .map(|mut record| {
                    record.keywords = normalize_keyword_set(&record.keywords);
                    record
                })
                .collect(),
            Err(err) => {
                warn!("failed to load vault snapshot, starting empty: {err}");
                Vec::new()
            }
        };
        Self {
            collection,
            snapshots,
        }
    }

    /// Insert a new record built from `draft`.
    ///
    /// Keywords are normalized and deduplicated; a draft with no valid
    /// keyword is rejected with [`VaultError::EmptyKeywordSet`] and
    /// nothing is written. Otherwise the record is prepended and the full
    /// collection persisted once.
    pub fn insert(&mut self, draft: RecordDraft) -> Result<Mutation<ImageRecord>, VaultError> {
        let keywords = normalize_keyword_set(&draft.keywords);
        if keywords.is_empty() {
            return Err(VaultError::EmptyKeywordSet);
        }

        let record = ImageRecord {
            id: Uuid::new_v4(),
            content: draft.content,
            display_name: draft.display_name,
            keywords,
            created_at: Utc::now(),
        };
        self.collection.insert(0, record.clone());
        debug!(
            "inserted record {} ({} in collection)",
            record.id,
            self.collection.len()
        );

        Ok(Mutation {
            value: record,
            storage_error: self.persist(),
        })
    }

    /// Remove the record with the given id, if present.
    ///
    /// Removing an absent id is an idempotent no-op: `value` is `false`
    /// and no snapshot write happens.
    pub fn remove(&mut self, id: Uuid) -> Mutation<bool> {
        let before = self.collection.len();
        self.collection.retain(|record| record.id != id);
        if self.collection.len() == before {
            return Mutation {
                value: false,
                storage_error: None,
            };
        }

        debug!("removed record {id} ({} remaining)", self.collection.len());
        Mutation {
            value: true,
            storage_error: self.persist(),
        }
    }

    /// The full collection, most recently inserted first.
    pub fn all(&self) -> &[ImageRecord] {
        &self.collection
    }

    /// Filter the collection by a normalized query keyword set.
    pub fn search(&self, query: &[String]) -> Vec<&ImageRecord> {
        search::search(&self.collection, query)
    }

    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    /// Write the entire collection through the snapshot store.
    fn persist(&self) -> Option<StorageError> {
        match self.snapshots.save(&self.collection) {
            Ok(()) => None,
            Err(err) => {
                warn!("snapshot write failed, in-memory state retained: {err}");
                Some(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::RwLock;

    use super::*;
    use crate::store::memory::MemorySnapshotStore;

    /// Snapshot store that counts saves, for no-op assertions.
    #[derive(Default)]
    struct CountingStore {
        records: RwLock<Vec<ImageRecord>>,
        saves: AtomicUsize,
    }

    impl SnapshotStore for CountingStore {
        fn load(&self) -> Result<Vec<ImageRecord>, StorageError> {
            Ok(self.records.read().unwrap().clone())
        }

        fn save(&self, records: &[ImageRecord]) -> Result<(), StorageError> {
            self.saves.fetch_add(1, Ordering::SeqCst);
            *self.records.write().unwrap() = records.to_vec();
            Ok(())
        }
    }

    /// Snapshot store whose saves always fail.
    struct BrokenStore;

    impl SnapshotStore for BrokenStore {
        fn load(&self) -> Result<Vec<ImageRecord>, StorageError> {
            Ok(Vec::new())
        }

        fn save(&self, _records: &[ImageRecord]) -> Result<(), StorageError> {
            Err(StorageError::Failure("disk full".to_string()))
        }
    }

    /// Snapshot store whose load reports a corrupt snapshot.
    struct CorruptStore;

    impl SnapshotStore for CorruptStore {
        fn load(&self) -> Result<Vec<ImageRecord>, StorageError> {
            Err(StorageError::CorruptSnapshot("not json".to_string()))
        }

        fn save(&self, _records: &[ImageRecord]) -> Result<(), StorageError> {
            Ok(())
        }
    }

    fn draft(name: &str, keywords: &[&str]) -> RecordDraft {
        RecordDraft {
            content: format!("data:image/png;base64,{name}"),
            display_name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    fn names(vault: &VaultStore<impl SnapshotStore>) -> Vec<String> {
        vault.all().iter().map(|r| r.display_name.clone()).collect()
    }

    #[test]
    fn test_insert_prepends() {
        let store = MemorySnapshotStore::new();
        let mut vault = VaultStore::open(&store);
        vault.insert(draft("a", &["one"])).unwrap();
        vault.insert(draft("b", &["two"])).unwrap();
        vault.insert(draft("c", &["three"])).unwrap();
        assert_eq!(names(&vault), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_remove_preserves_order() {
        let store = MemorySnapshotStore::new();
        let mut vault = VaultStore::open(&store);
        vault.insert(draft("a", &["one"])).unwrap();
        let b = vault.insert(draft("b", &["two"])).unwrap().value;
        vault.insert(draft("c", &["three"])).unwrap();

        let outcome = vault.remove(b.id);
        assert!(outcome.value);
        assert_eq!(names(&vault), vec!["c", "a"]);
    }

    #[test]
    fn test_ids_are_unique() {
        let store = MemorySnapshotStore::new();
        let mut vault = VaultStore::open(&store);
        for i in 0..32 {
            vault.insert(draft(&format!("r{i}"), &["kw"])).unwrap();
        }
        let ids: HashSet<Uuid> = vault.all().iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), 32);
    }

    #[test]
    fn test_insert_normalizes_and_dedups_keywords() {
        let store = MemorySnapshotStore::new();
        let mut vault = VaultStore::open(&store);
        let record = vault
            .insert(draft("a", &["Cat", " cat ", "", "Pet"]))
            .unwrap()
            .value;
        assert_eq!(record.keywords, vec!["cat", "pet"]);
    }

    #[test]
    fn test_empty_keyword_set_rejected() {
        let store = CountingStore::default();
        let mut vault = VaultStore::open(&store);
        let result = vault.insert(draft("a", &["  ", ""]));
        assert!(matches!(result, Err(VaultError::EmptyKeywordSet)));
        assert!(vault.is_empty());
        assert_eq!(store.saves.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let store = CountingStore::default();
        let mut vault = VaultStore::open(&store);
        vault.insert(draft("a", &["one"])).unwrap();
        let saves_before = store.saves.load(Ordering::SeqCst);

        let outcome = vault.remove(Uuid::new_v4());
        assert!(!outcome.value);
        assert!(outcome.is_durable());
        assert_eq!(vault.len(), 1);
        assert_eq!(store.saves.load(Ordering::SeqCst), saves_before);
    }

    #[test]
    fn test_snapshot_tracks_every_mutation() {
        let store = MemorySnapshotStore::new();
        let mut vault = VaultStore::open(&store);

        let a = vault.insert(draft("a", &["one"])).unwrap().value;
        assert_eq!(store.snapshot(), vault.all());

        vault.insert(draft("b", &["two"])).unwrap();
        assert_eq!(store.snapshot(), vault.all());

        vault.remove(a.id);
        assert_eq!(store.snapshot(), vault.all());
    }

    #[test]
    fn test_save_failure_keeps_memory_authoritative() {
        let mut vault = VaultStore::open(BrokenStore);

        let outcome = vault.insert(draft("a", &["one"])).unwrap();
        assert!(!outcome.is_durable());
        assert!(matches!(
            outcome.storage_error,
            Some(StorageError::Failure(_))
        ));
        assert_eq!(vault.len(), 1);

        let id = vault.all()[0].id;
        let outcome = vault.remove(id);
        assert!(outcome.value);
        assert!(!outcome.is_durable());
        assert!(vault.is_empty());
    }

    #[test]
    fn test_open_degrades_on_corrupt_snapshot() {
        let vault = VaultStore::open(CorruptStore);
        assert!(vault.is_empty());
    }

    #[test]
    fn test_open_hydrates_from_snapshot() {
        let store = MemorySnapshotStore::new();
        {
            let mut vault = VaultStore::open(&store);
            vault.insert(draft("a", &["one"])).unwrap();
            vault.insert(draft("b", &["two"])).unwrap();
        }
        let reopened = VaultStore::open(&store);
        assert_eq!(names(&reopened), vec!["b", "a"]);
    }

    #[test]
    fn test_open_dedups_keywords_from_storage() {
        // Snapshots are not assumed deduplicated; the model re-normalizes
        // on load.
        let store = MemorySnapshotStore::new();
        let stale = ImageRecord {
            id: Uuid::new_v4(),
            content: String::new(),
            display_name: "old".to_string(),
            keywords: ["Red", "red", " ", "car"].iter().map(|k| k.to_string()).collect(),
            created_at: Utc::now(),
        };
        store.save(std::slice::from_ref(&stale)).unwrap();

        let vault = VaultStore::open(&store);
        assert_eq!(vault.all()[0].keywords, vec!["red", "car"]);
    }

    #[test]
    fn test_search_reads_current_collection() {
        let store = MemorySnapshotStore::new();
        let mut vault = VaultStore::open(&store);
        let cat = vault.insert(draft("cat", &["cat", "pet"])).unwrap().value;
        vault.insert(draft("dog", &["dog", "pet"])).unwrap();

        let query = vec!["pet".to_string()];
        assert_eq!(vault.search(&query).len(), 2);

        vault.remove(cat.id);
        let results = vault.search(&query);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].display_name, "dog");
    }
}
