//! SQLite implementation of [`HeroStore`].
//!
//! [`SqliteStore`] persists hero records in a SQLite database with WAL mode,
//! a transaction around every write, and automatic schema setup on open.

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::StorageError;
use crate::traits::HeroStore;
use crate::types::{Hero, HeroId, NewHero};

/// SQLite-backed implementation of [`HeroStore`].
///
/// Every write operation is wrapped in a transaction for atomicity.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) a SQLite database at `path`.
    pub fn new(path: &str) -> Result<Self, StorageError> {
        let conn = crate::schema::open_database(path)?;
        Ok(SqliteStore { conn })
    }

    /// Opens an in-memory SQLite database (for testing).
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = crate::schema::open_in_memory()?;
        Ok(SqliteStore { conn })
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Maps a `heroes` row (id, name, age, secret_name) to a [`Hero`].
    fn hero_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Hero> {
        Ok(Hero {
            id: HeroId(row.get(0)?),
            name: row.get(1)?,
            age: row.get(2)?,
            secret_name: row.get(3)?,
        })
    }
}

impl HeroStore for SqliteStore {
    fn insert_hero(&mut self, new_hero: &NewHero) -> Result<Hero, StorageError> {
        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO heroes (name, age, secret_name) VALUES (?1, ?2, ?3)",
            params![new_hero.name, new_hero.age, new_hero.secret_name],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(Hero {
            id: HeroId(id),
            name: new_hero.name.clone(),
            age: new_hero.age,
            secret_name: new_hero.secret_name.clone(),
        })
    }

    fn get_hero(&self, id: HeroId) -> Result<Hero, StorageError> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT id, name, age, secret_name FROM heroes WHERE id = ?1")?;
        let hero = stmt
            .query_row(params![id.0], Self::hero_from_row)
            .optional()?;
        hero.ok_or(StorageError::HeroNotFound(id.0))
    }

    fn delete_hero(&mut self, id: HeroId) -> Result<(), StorageError> {
        let tx = self.conn.transaction()?;
        let deleted = tx.execute("DELETE FROM heroes WHERE id = ?1", params![id.0])?;
        if deleted == 0 {
            // Dropping the transaction rolls back.
            return Err(StorageError::HeroNotFound(id.0));
        }
        tx.commit()?;
        Ok(())
    }

    fn list_heroes(&self) -> Result<Vec<Hero>, StorageError> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT id, name, age, secret_name FROM heroes ORDER BY id")?;
        let rows = stmt.query_map([], Self::hero_from_row)?;
        let mut result = Vec::new();
        for row in rows {
            result.push(row?);
        }
        Ok(result)
    }
}
