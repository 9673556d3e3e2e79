//! In-memory implementation of [`HeroStore`].
//!
//! [`InMemoryStore`] is a first-class backend for tests and anywhere
//! persistence isn't needed. It stores records in a `BTreeMap` with identical
//! semantics to the SQLite backend, including id-ordered listing.

use std::collections::BTreeMap;

use crate::error::StorageError;
use crate::traits::HeroStore;
use crate::types::{Hero, HeroId, NewHero};

/// In-memory implementation of [`HeroStore`].
///
/// Ids are assigned from a monotonic counter starting at 1, mirroring the
/// SQLite backend's rowid assignment.
#[derive(Debug)]
pub struct InMemoryStore {
    heroes: BTreeMap<i64, Hero>,
    next_id: i64,
}

impl InMemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        InMemoryStore {
            heroes: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HeroStore for InMemoryStore {
    fn insert_hero(&mut self, new_hero: &NewHero) -> Result<Hero, StorageError> {
        let id = HeroId(self.next_id);
        self.next_id += 1;
        let hero = Hero {
            id,
            name: new_hero.name.clone(),
            age: new_hero.age,
            secret_name: new_hero.secret_name.clone(),
        };
        self.heroes.insert(id.0, hero.clone());
        Ok(hero)
    }

    fn get_hero(&self, id: HeroId) -> Result<Hero, StorageError> {
        self.heroes
            .get(&id.0)
            .cloned()
            .ok_or(StorageError::HeroNotFound(id.0))
    }

    fn delete_hero(&mut self, id: HeroId) -> Result<(), StorageError> {
        self.heroes
            .remove(&id.0)
            .map(|_| ())
            .ok_or(StorageError::HeroNotFound(id.0))
    }

    fn list_heroes(&self) -> Result<Vec<Hero>, StorageError> {
        // BTreeMap iteration order is ascending by key, matching ORDER BY id.
        Ok(self.heroes.values().cloned().collect())
    }
}
