//! Hero request/response payload variants.
//!
//! Three views of the same underlying record, as independent structs:
//! [`HeroCreate`] (creation payload), [`HeroUpdate`] (update payload, declared
//! but not routed -- no update endpoint exists), and [`HeroPublic`] (the
//! projection returned to general callers, which never carries `secret_name`).
//! The stored record itself is [`heroes_storage::Hero`].

use serde::{Deserialize, Serialize};

use heroes_storage::{Hero, HeroId, NewHero};

/// Creation payload: everything but the id, which the store assigns.
#[derive(Debug, Clone, Deserialize)]
pub struct HeroCreate {
    /// Display name.
    pub name: String,
    /// Optional age; absent and `null` both mean unset.
    pub age: Option<i64>,
    /// The hero's real identity.
    pub secret_name: String,
}

/// Update payload: every field optional, absent fields meaning "unchanged".
///
/// Part of the declared API schema; no PATCH/PUT route is wired to it.
#[derive(Debug, Clone, Deserialize)]
pub struct HeroUpdate {
    /// New display name, if any.
    pub name: Option<String>,
    /// New age, if any.
    pub age: Option<i64>,
    /// New secret name, if any.
    pub secret_name: Option<String>,
}

/// Public projection: the fields safe to return to general callers.
#[derive(Debug, Clone, Serialize)]
pub struct HeroPublic {
    /// Store-assigned identifier.
    pub id: HeroId,
    /// Display name.
    pub name: String,
    /// Optional age (serialized as `null` when unset).
    pub age: Option<i64>,
}

impl From<Hero> for HeroPublic {
    fn from(hero: Hero) -> Self {
        HeroPublic {
            id: hero.id,
            name: hero.name,
            age: hero.age,
        }
    }
}

impl From<HeroCreate> for NewHero {
    fn from(payload: HeroCreate) -> Self {
        NewHero {
            name: payload.name,
            age: payload.age,
            secret_name: payload.secret_name,
        }
    }
}
