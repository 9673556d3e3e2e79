//! Storage-layer types for hero identity and record data.
//!
//! [`HeroId`] is defined here because record identity is a storage concern --
//! a hero only gains an id when persisted.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a stored hero.
///
/// The inner `i64` aligns with SQLite's `INTEGER PRIMARY KEY`. Ids are
/// assigned by the store on insert and are immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HeroId(pub i64);

impl fmt::Display for HeroId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HeroId({})", self.0)
    }
}

/// A stored hero record, as persisted in the `heroes` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    /// Store-assigned identifier.
    pub id: HeroId,
    /// Display name (indexed for lookup).
    pub name: String,
    /// Optional age (nullable, indexed).
    pub age: Option<i64>,
    /// The hero's real identity. Not part of the public projection.
    pub secret_name: String,
}

/// Payload for inserting a new hero. Carries no id; the store assigns one.
#[derive(Debug, Clone)]
pub struct NewHero {
    /// Display name.
    pub name: String,
    /// Optional age.
    pub age: Option<i64>,
    /// The hero's real identity.
    pub secret_name: String,
}
