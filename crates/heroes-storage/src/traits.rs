//! The [`HeroStore`] trait defining the storage contract for hero records.
//!
//! Each method performs exactly one logical operation against the store.
//! All backends (SqliteStore, InMemoryStore) implement this trait with
//! identical semantics, ensuring they are fully swappable.

use crate::error::StorageError;
use crate::types::{Hero, HeroId, NewHero};

/// The storage contract for hero records.
///
/// The trait is synchronous (not async); callers serialize access through
/// their own session scoping.
pub trait HeroStore {
    /// Inserts a new hero, returning the stored record with its assigned id.
    fn insert_hero(&mut self, new_hero: &NewHero) -> Result<Hero, StorageError>;

    /// Retrieves a hero by id.
    ///
    /// Returns [`StorageError::HeroNotFound`] if no row has that id.
    fn get_hero(&self, id: HeroId) -> Result<Hero, StorageError>;

    /// Permanently deletes a hero by id.
    ///
    /// Returns [`StorageError::HeroNotFound`] if no row has that id.
    fn delete_hero(&mut self, id: HeroId) -> Result<(), StorageError>;

    /// Lists all stored heroes, ordered by id.
    fn list_heroes(&self) -> Result<Vec<Hero>, StorageError>;
}
