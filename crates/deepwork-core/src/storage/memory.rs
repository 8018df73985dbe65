//! In-memory stores.
//!
//! Useful for hosts that keep their own persistence and for tests. Both
//! types use `RefCell` and are meant to be driven from a single thread.

use std::cell::RefCell;
use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::achievements::{Achievement, AchievementLog};
use crate::calendar::date_key;
use crate::error::Result;
use crate::streak::{StreakRecord, StreakStore};

/// Achievement log held in a sorted map of day key to entries.
#[derive(Debug, Default)]
pub struct MemoryAchievementLog {
    days: RefCell<BTreeMap<String, Vec<Achievement>>>,
}

impl MemoryAchievementLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an achievement under a raw key, which need not be a valid date.
    pub fn insert_raw(&self, key: &str, achievement: Achievement) {
        self.days
            .borrow_mut()
            .entry(key.to_string())
            .or_default()
            .push(achievement);
    }
}

impl AchievementLog for MemoryAchievementLog {
    fn list_date_keys(&self) -> Result<Vec<String>> {
        Ok(self
            .days
            .borrow()
            .iter()
            .filter(|(_, entries)| !entries.is_empty())
            .map(|(key, _)| key.clone())
            .collect())
    }

    fn append(&self, date: NaiveDate, achievement: &Achievement) -> Result<()> {
        self.insert_raw(&date_key(date), achievement.clone());
        Ok(())
    }

    fn entries_on(&self, date: NaiveDate) -> Result<Vec<Achievement>> {
        Ok(self
            .days
            .borrow()
            .get(&date_key(date))
            .cloned()
            .unwrap_or_default())
    }

    fn remove_day(&self, key: &str) -> Result<bool> {
        Ok(self.days.borrow_mut().remove(key).is_some())
    }
}

/// Streak record kept as its serialized JSON, like a key-value slot.
#[derive(Debug, Default)]
pub struct MemoryStreakStore {
    raw: RefCell<Option<String>>,
}

impl MemoryStreakStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with arbitrary stored content, readable or not.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: RefCell::new(Some(raw.into())),
        }
    }
}

impl StreakStore for MemoryStreakStore {
    fn load(&self) -> Result<Option<StreakRecord>> {
        Ok(self
            .raw
            .borrow()
            .as_deref()
            .and_then(StreakRecord::from_json))
    }

    fn save(&self, record: &StreakRecord) -> Result<()> {
        *self.raw.borrow_mut() = Some(record.to_json()?);
        Ok(())
    }
}
