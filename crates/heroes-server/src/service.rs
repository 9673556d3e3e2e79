//! HeroService: the single coordinator between HTTP handlers and storage.
//!
//! All data access flows through [`HeroService`]. Handlers are thin wrappers
//! that delegate to these methods; each method performs exactly one storage
//! operation.

use heroes_storage::{Hero, HeroId, HeroStore, NewHero, SqliteStore};

use crate::error::ApiError;

/// The central service coordinating hero reads and writes.
///
/// Holds the SQLite storage backend; storage failures are converted to
/// [`ApiError`] at this boundary.
pub struct HeroService {
    /// SQLite storage backend for persistence.
    store: SqliteStore,
}

impl HeroService {
    /// Creates a new HeroService, opening (or creating) a SQLite database at
    /// `db_path` and applying the schema.
    pub fn new(db_path: &str) -> Result<Self, ApiError> {
        let store = SqliteStore::new(db_path)
            .map_err(|e| ApiError::Internal(format!("failed to open database: {}", e)))?;
        Ok(HeroService { store })
    }

    /// Creates a new HeroService backed by an in-memory database (for testing).
    pub fn in_memory() -> Result<Self, ApiError> {
        let store = SqliteStore::in_memory()
            .map_err(|e| ApiError::Internal(format!("failed to open test database: {}", e)))?;
        Ok(HeroService { store })
    }

    /// Inserts a new hero, returning the stored record with its assigned id.
    pub fn create_hero(&mut self, new_hero: NewHero) -> Result<Hero, ApiError> {
        Ok(self.store.insert_hero(&new_hero)?)
    }

    /// Lists all stored heroes, ordered by id.
    pub fn list_heroes(&self) -> Result<Vec<Hero>, ApiError> {
        Ok(self.store.list_heroes()?)
    }

    /// Retrieves the full record for one hero.
    pub fn get_hero(&self, id: HeroId) -> Result<Hero, ApiError> {
        Ok(self.store.get_hero(id)?)
    }

    /// Permanently deletes a hero.
    pub fn delete_hero(&mut self, id: HeroId) -> Result<(), ApiError> {
        Ok(self.store.delete_hero(id)?)
    }
}
