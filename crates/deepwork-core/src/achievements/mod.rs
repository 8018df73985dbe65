//! Achievement log: the per-day record of confirmed deep-work sessions.
//!
//! The log is keyed by `YYYY-MM-DD` day keys and is append-only per day.
//! The streak engine only ever asks which days have at least one entry.

mod entry;
mod log;
mod lookup;
mod retention;

pub use entry::Achievement;
pub use log::{summarize_day, AchievementLog, DaySummary};
pub use lookup::achievement_dates;
pub use retention::{purge_older_than, DEFAULT_HORIZON_DAYS};
