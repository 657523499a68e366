//! Core data models for Image Vault.
//!
//! These types represent the tagged image records that flow through the
//! vault store, the search engine, and the persistence layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Raw intake shape produced by a frontend before normalization.
#[derive(Debug, Clone)]
pub struct RecordDraft {
    /// Opaque image payload handle (data URI or storage key).
    pub content: String,
    /// Free-text label; may be empty.
    pub display_name: String,
    /// Raw keywords, normalized and deduplicated at insert.
    pub keywords: Vec<String>,
}

/// A tagged image record stored in the vault.
///
/// Records are immutable after creation. There is no update operation,
/// only [`insert`](crate::vault::VaultStore::insert) and
/// [`remove`](crate::vault::VaultStore::remove).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageRecord {
    /// Record identifier, unique across the collection, never reused.
    pub id: Uuid,
    /// Opaque image payload handle. The vault never interprets its bytes.
    pub content: String,
    /// Free-text label; may be empty.
    pub display_name: String,
    /// Normalized search keywords: trimmed, lowercased, deduplicated,
    /// first-seen order preserved.
    pub keywords: Vec<String>,
    /// Creation timestamp, fixed at insert.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> ImageRecord {
        ImageRecord {
            id: Uuid::new_v4(),
            content: "data:image/png;base64,aGVsbG8=".to_string(),
            display_name: "sunset.png".to_string(),
            keywords: vec!["sunset".to_string(), "beach".to_string()],
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_snapshot_round_trip() {
        let records = vec![sample_record(), sample_record()];
        let json = serde_json::to_string(&records).unwrap();
        let parsed: Vec<ImageRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn test_round_trip_preserves_keyword_order() {
        let mut record = sample_record();
        record.keywords = vec!["zebra".to_string(), "alpha".to_string()];
        let json = serde_json::to_string(&record).unwrap();
        let parsed: ImageRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.keywords, vec!["zebra", "alpha"]);
    }
}
