//! SQLite-based storage.
//!
//! Provides persistent storage for:
//! - The achievement log (one row per confirmed session)
//! - Key-value store for application state, including the streak record

use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use super::migrations;
use crate::achievements::{Achievement, AchievementLog};
use crate::calendar::date_key;
use crate::error::{DatabaseError, Result};
use crate::streak::{StreakRecord, StreakStore, STREAK_RECORD_KEY};

/// SQLite database for achievements and streak state.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) the database at `path`, typically
    /// `<data_dir>/deepwork.db`.
    ///
    /// Creates the schema if it doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open_at(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|source| DatabaseError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_connection(conn)
    }

    /// Open an in-memory database.
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        migrations::migrate(&conn)
            .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;
        Ok(Self { conn })
    }

    /// Get a value from the kv store.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    /// Set a value in the kv store.
    pub fn kv_set(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    /// Store an achievement under a raw day key, bypassing date formatting.
    pub fn insert_raw(&self, key: &str, achievement: &Achievement) -> Result<()> {
        self.conn.execute(
            "INSERT INTO achievements (date_key, goal_text, completed_at) VALUES (?1, ?2, ?3)",
            params![
                key,
                achievement.goal_text,
                achievement.completed_at.to_rfc3339()
            ],
        )?;
        Ok(())
    }
}

fn parse_timestamp(idx: usize, raw: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
        })
}

impl AchievementLog for Database {
    fn list_date_keys(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT DISTINCT date_key FROM achievements ORDER BY date_key")?;
        let keys = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(keys)
    }

    fn append(&self, date: NaiveDate, achievement: &Achievement) -> Result<()> {
        self.insert_raw(&date_key(date), achievement)
    }

    fn entries_on(&self, date: NaiveDate) -> Result<Vec<Achievement>> {
        let mut stmt = self.conn.prepare(
            "SELECT goal_text, completed_at FROM achievements
             WHERE date_key = ?1
             ORDER BY id",
        )?;
        let entries = stmt
            .query_map(params![date_key(date)], |row| {
                let completed_at: String = row.get(1)?;
                Ok(Achievement {
                    goal_text: row.get(0)?,
                    completed_at: parse_timestamp(1, &completed_at)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(entries)
    }

    fn remove_day(&self, key: &str) -> Result<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM achievements WHERE date_key = ?1", params![key])?;
        Ok(removed > 0)
    }
}

impl StreakStore for Database {
    fn load(&self) -> Result<Option<StreakRecord>> {
        Ok(self
            .kv_get(STREAK_RECORD_KEY)?
            .and_then(|raw| StreakRecord::from_json(&raw)))
    }

    fn save(&self, record: &StreakRecord) -> Result<()> {
        self.kv_set(STREAK_RECORD_KEY, &record.to_json()?)
    }
}
