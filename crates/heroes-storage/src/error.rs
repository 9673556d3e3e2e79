//! Storage error types for heroes-storage.
//!
//! [`StorageError`] covers all anticipated failure modes in the storage layer:
//! driver errors, schema setup failures, and the single not-found case.

use thiserror::Error;

/// Errors produced by storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The underlying SQLite driver reported an error.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Applying the embedded schema setup failed.
    #[error("migration error: {0}")]
    Migration(String),

    /// No hero row exists with the given id.
    #[error("hero not found: {0}")]
    HeroNotFound(i64),
}
