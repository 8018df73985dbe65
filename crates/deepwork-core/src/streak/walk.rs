//! Walk-back streak computation.
//!
//! Starting at today, the walk steps backwards one workday at a time and
//! feeds hits and misses into a [`MissTracker`]. It stops when the tracker
//! breaks or after `lookback_iterations` workdays, whichever comes first.
//!
//! When today has no achievement the walk starts *on* today, so today
//! itself is the first miss and consumes the one-day tolerance before any
//! earlier day is looked at.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::record::StreakRecord;
use super::tolerance::{MissState, MissTracker};
use crate::calendar::rewind_to_workday;

/// Workdays examined per computation unless configured otherwise.
pub const DEFAULT_LOOKBACK_ITERATIONS: u32 = 60;

/// Bounds on a single walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkPolicy {
    /// Maximum number of workdays examined by the walk loop.
    pub lookback_iterations: u32,
}

impl Default for WalkPolicy {
    fn default() -> Self {
        Self {
            lookback_iterations: DEFAULT_LOOKBACK_ITERATIONS,
        }
    }
}

impl WalkPolicy {
    pub fn new(lookback_iterations: u32) -> Self {
        Self {
            lookback_iterations,
        }
    }

    /// Upper bound on how many calendar days before today the walk can reach.
    pub fn max_calendar_span_days(&self) -> i64 {
        let n = i64::from(self.lookback_iterations);
        n / 5 * 7 + n % 5 + 2
    }
}

/// Compute a fresh record from the achievement dates and the prior record.
///
/// `prior` only contributes `longest` and, when today has no achievement,
/// `last_achievement_date`.
pub fn walk_back(
    today: NaiveDate,
    dates: &BTreeSet<NaiveDate>,
    prior: &StreakRecord,
    policy: &WalkPolicy,
) -> StreakRecord {
    let found_today = dates.contains(&today);
    let (mut current, mut cursor) = if found_today {
        (1u32, today.pred_opt())
    } else {
        (0u32, Some(today))
    };
    let mut tracker = MissTracker::new();

    for _ in 0..policy.lookback_iterations {
        let Some(day) = cursor.and_then(rewind_to_workday) else {
            break;
        };

        if dates.contains(&day) {
            current += 1;
            tracker.hit();
        } else if tracker.miss() == MissState::Broken {
            break;
        }

        cursor = day.pred_opt();
    }

    StreakRecord {
        current,
        longest: prior.longest.max(current),
        last_achievement_date: if found_today {
            Some(today)
        } else {
            prior.last_achievement_date
        },
        skipped_days: tracker.consecutive_misses(),
        last_calculated: Some(today),
        show_motivation: tracker.used_tolerance() && current > 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::parse_date_key;

    fn d(key: &str) -> NaiveDate {
        parse_date_key(key).unwrap()
    }

    fn dates(keys: &[&str]) -> BTreeSet<NaiveDate> {
        keys.iter().map(|k| d(k)).collect()
    }

    fn walk(today: &str, keys: &[&str]) -> StreakRecord {
        walk_back(
            d(today),
            &dates(keys),
            &StreakRecord::default(),
            &WalkPolicy::default(),
        )
    }

    #[test]
    fn empty_log_gives_zero_streak() {
        let record = walk("2024-12-18", &[]);
        assert_eq!(record.current, 0);
        assert_eq!(record.longest, 0);
        assert!(!record.show_motivation);
        assert_eq!(record.last_calculated, Some(d("2024-12-18")));
    }

    #[test]
    fn only_today_counts_one() {
        let record = walk("2024-12-18", &["2024-12-18"]);
        assert_eq!(record.current, 1);
        assert_eq!(record.last_achievement_date, Some(d("2024-12-18")));
    }

    #[test]
    fn streak_spans_the_weekend() {
        let record = walk("2024-12-16", &["2024-12-16", "2024-12-13", "2024-12-12"]);
        assert_eq!(record.current, 3);
    }

    #[test]
    fn two_full_weeks() {
        let record = walk(
            "2024-12-20",
            &[
                "2024-12-09", "2024-12-10", "2024-12-11", "2024-12-12", "2024-12-13",
                "2024-12-16", "2024-12-17", "2024-12-18", "2024-12-19", "2024-12-20",
            ],
        );
        assert_eq!(record.current, 10);
        assert_eq!(record.longest, 10);
    }

    #[test]
    fn one_missed_day_is_tolerated() {
        // Thursday 19th missing.
        let record = walk(
            "2024-12-20",
            &["2024-12-20", "2024-12-18", "2024-12-17", "2024-12-16", "2024-12-13"],
        );
        assert_eq!(record.current, 5);
        assert!(record.show_motivation);
    }

    #[test]
    fn tolerance_can_be_used_repeatedly() {
        let record = walk("2024-12-20", &["2024-12-20", "2024-12-18", "2024-12-16"]);
        assert_eq!(record.current, 3);
        assert!(record.show_motivation);
    }

    #[test]
    fn two_missed_days_break_before_older_hits() {
        let record = walk("2024-12-18", &["2024-12-13"]);
        assert_eq!(record.current, 0);
        assert_eq!(record.skipped_days, 2);
        assert!(!record.show_motivation);
    }

    #[test]
    fn missing_today_consumes_the_tolerance() {
        // Wednesday empty, Tuesday and Monday logged, nothing the week before.
        let record = walk("2024-12-18", &["2024-12-17", "2024-12-16"]);
        assert_eq!(record.current, 2);
        assert_eq!(record.skipped_days, 2);
        assert!(record.show_motivation);
    }

    #[test]
    fn weekend_today_starts_from_friday() {
        let record = walk("2024-12-15", &["2024-12-13", "2024-12-12"]);
        assert_eq!(record.current, 2);
        assert_eq!(record.last_achievement_date, None);
    }

    #[test]
    fn lookback_ceiling_bounds_the_walk() {
        let mut all = BTreeSet::new();
        let mut day = d("2024-12-20");
        for _ in 0..200 {
            all.insert(day);
            day = day.pred_opt().unwrap();
        }
        let record = walk_back(
            d("2024-12-20"),
            &all,
            &StreakRecord::default(),
            &WalkPolicy::default(),
        );
        assert_eq!(record.current, 61);
        assert_eq!(record.skipped_days, 0);
        assert!(!record.show_motivation);

        let short = walk_back(
            d("2024-12-20"),
            &all,
            &StreakRecord::default(),
            &WalkPolicy::new(4),
        );
        assert_eq!(short.current, 5);
    }

    #[test]
    fn missing_today_uses_a_lookback_iteration() {
        let record = walk_back(
            d("2024-12-18"),
            &dates(&["2024-12-17"]),
            &StreakRecord::default(),
            &WalkPolicy::new(1),
        );
        assert_eq!(record.current, 0);
        assert_eq!(record.skipped_days, 1);
    }

    #[test]
    fn prior_longest_and_last_achievement_are_carried() {
        let prior = StreakRecord {
            current: 3,
            longest: 10,
            last_achievement_date: Some(d("2024-12-10")),
            ..StreakRecord::default()
        };
        let record = walk_back(d("2024-12-18"), &dates(&[]), &prior, &WalkPolicy::default());
        assert_eq!(record.current, 0);
        assert_eq!(record.longest, 10);
        assert_eq!(record.last_achievement_date, Some(d("2024-12-10")));
    }

    #[test]
    fn future_entries_are_inert() {
        let record = walk("2024-12-18", &["2024-12-18", "2025-01-06"]);
        assert_eq!(record.current, 1);
    }

    #[test]
    fn walk_stops_at_the_start_of_the_calendar() {
        let first = NaiveDate::MIN;
        let record = walk_back(
            first,
            &BTreeSet::from([first]),
            &StreakRecord::default(),
            &WalkPolicy::default(),
        );
        assert_eq!(record.current, 1);
    }

    #[test]
    fn calendar_span_covers_default_lookback() {
        assert_eq!(WalkPolicy::default().max_calendar_span_days(), 86);
        assert_eq!(WalkPolicy::new(3).max_calendar_span_days(), 5);
    }
}
