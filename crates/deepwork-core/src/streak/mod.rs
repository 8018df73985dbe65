//! Workday streak engine.
//!
//! The streak is recomputed from scratch on every call: the achievement log
//! is scanned in full, the walk-back algorithm in [`walk`] runs over the
//! resulting date set, and the outcome is merged with the previously stored
//! [`StreakRecord`] so that `longest` never decreases.
//!
//! ```text
//! AchievementLog --keys--> achievement_dates --set--> walk_back --record--> StreakStore
//!                                                         ^
//!                                       StreakStore::load-+
//! ```

mod engine;
mod record;
mod tolerance;
mod walk;

pub use engine::{StreakEngine, StreakStore, STREAK_RECORD_KEY};
pub use record::StreakRecord;
pub use tolerance::{MissState, MissTracker};
pub use walk::{walk_back, WalkPolicy, DEFAULT_LOOKBACK_ITERATIONS};
