use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Persisted result of the most recent streak computation.
///
/// `current` and `skipped_days` describe the streak as of `last_calculated`
/// and go stale as the calendar moves on; recompute before displaying.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreakRecord {
    /// Length of the active streak, in workdays.
    pub current: u32,
    /// Historical maximum of `current`. Never decreases.
    pub longest: u32,
    /// Most recent day an achievement was observed on.
    pub last_achievement_date: Option<NaiveDate>,
    /// Consecutive missed workdays when the walk stopped.
    pub skipped_days: u32,
    /// `None` until the first computation.
    pub last_calculated: Option<NaiveDate>,
    /// The streak survived only thanks to the one-day tolerance.
    pub show_motivation: bool,
}

impl StreakRecord {
    /// Decode a stored record. Anything unreadable yields `None`.
    pub fn from_json(raw: &str) -> Option<Self> {
        match serde_json::from_str(raw) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(error = %e, "discarding unreadable streak record");
                None
            }
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
