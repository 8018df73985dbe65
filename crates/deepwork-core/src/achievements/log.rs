use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Achievement;
use crate::calendar::date_key;
use crate::error::Result;

/// Append-only, day-keyed store of achievements.
///
/// Implementations only need to support a full listing of day keys; the
/// log is not assumed to answer range queries.
pub trait AchievementLog {
    /// Every day key that has at least one achievement.
    ///
    /// Keys are returned as stored, so a damaged store may yield keys that
    /// are not valid dates. Callers filter those out.
    fn list_date_keys(&self) -> Result<Vec<String>>;

    /// Append an achievement under the given day.
    fn append(&self, date: NaiveDate, achievement: &Achievement) -> Result<()>;

    /// Achievements logged on one day, oldest first.
    fn entries_on(&self, date: NaiveDate) -> Result<Vec<Achievement>>;

    /// Drop every achievement stored under `key`. Returns whether anything
    /// was removed.
    fn remove_day(&self, key: &str) -> Result<bool>;
}

/// What the host shows in its "today's achievements" panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySummary {
    pub date: String,
    pub count: usize,
    pub goals: Vec<String>,
}

/// Count and goal texts logged on `date`.
pub fn summarize_day<L: AchievementLog + ?Sized>(log: &L, date: NaiveDate) -> Result<DaySummary> {
    let entries = log.entries_on(date)?;
    Ok(DaySummary {
        date: date_key(date),
        count: entries.len(),
        goals: entries.into_iter().map(|a| a.goal_text).collect(),
    })
}
