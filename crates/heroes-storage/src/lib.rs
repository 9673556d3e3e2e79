//! Storage layer for hero records.
//!
//! Provides the [`HeroStore`] trait defining the storage contract, plus the
//! [`SqliteStore`] (file-backed) and [`InMemoryStore`] backends.
//!
//! # Modules
//!
//! - [`error`]: StorageError enum with all failure modes
//! - [`types`]: HeroId, Hero, NewHero storage-layer types
//! - [`traits`]: HeroStore trait definition
//! - [`schema`]: SQL schema setup for the SQLite backend
//! - [`sqlite`]: SqliteStore implementation
//! - [`memory`]: InMemoryStore implementation

pub mod error;
pub mod memory;
pub mod schema;
pub mod sqlite;
pub mod traits;
pub mod types;

// Re-export key types for ergonomic use.
pub use error::StorageError;
pub use memory::InMemoryStore;
pub use sqlite::SqliteStore;
pub use traits::HeroStore;
pub use types::{Hero, HeroId, NewHero};
