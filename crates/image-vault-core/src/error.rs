//! Error types for vault operations.

/// Errors returned by snapshot and session stores.
///
/// Storage is never fatal: a failed save leaves the in-memory collection
/// authoritative, and a corrupt snapshot degrades to an empty collection
/// at load.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The backing store failed to read or write (I/O error, quota).
    #[error("storage failure: {0}")]
    Failure(String),
    /// The stored snapshot exists but could not be parsed.
    #[error("corrupt snapshot: {0}")]
    CorruptSnapshot(String),
}

/// Errors returned by vault operations and the gate.
#[derive(Debug, thiserror::Error)]
pub enum VaultError {
    /// A keyword was empty after trimming and lowercasing.
    #[error("keyword is empty after normalization")]
    InvalidKeyword,
    /// An insert was attempted with no valid keywords.
    #[error("a record requires at least one valid keyword")]
    EmptyKeywordSet,
    /// The persistence layer failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// The gate rejected the supplied secret.
    #[error("access denied")]
    AccessDenied,
}
