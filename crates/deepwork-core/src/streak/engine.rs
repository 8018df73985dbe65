use chrono::NaiveDate;

use super::record::StreakRecord;
use super::walk::{walk_back, WalkPolicy};
use crate::achievements::{achievement_dates, AchievementLog};
use crate::error::Result;

/// Key the streak record is stored under in key-value backed stores.
pub const STREAK_RECORD_KEY: &str = "streak_data";

/// Singleton storage for the [`StreakRecord`].
pub trait StreakStore {
    /// The stored record, or `None` if nothing readable is stored.
    fn load(&self) -> Result<Option<StreakRecord>>;

    /// Replace the stored record.
    fn save(&self, record: &StreakRecord) -> Result<()>;
}

/// Recomputes and persists the streak.
///
/// The engine holds no state of its own; every call to [`recompute`]
/// re-reads the log and the stored record. Calls are not atomic with
/// respect to each other, so hosts that may trigger recomputation from
/// several places at once must serialize them.
///
/// [`recompute`]: StreakEngine::recompute
pub struct StreakEngine<'a, L: ?Sized, S: ?Sized> {
    log: &'a L,
    store: &'a S,
    policy: WalkPolicy,
}

impl<'a, L, S> StreakEngine<'a, L, S>
where
    L: AchievementLog + ?Sized,
    S: StreakStore + ?Sized,
{
    pub fn new(log: &'a L, store: &'a S) -> Self {
        Self {
            log,
            store,
            policy: WalkPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: WalkPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> &WalkPolicy {
        &self.policy
    }

    /// The stored record, falling back to defaults if it is missing or
    /// cannot be read.
    pub fn prior_record(&self) -> StreakRecord {
        match self.store.load() {
            Ok(record) => record.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to load streak record, starting fresh");
                StreakRecord::default()
            }
        }
    }

    /// Recompute the streak as of `today` and persist it.
    ///
    /// Never fails. If the achievement log cannot be read the prior record
    /// is returned with `longest` raised to at least `current`, and nothing
    /// is written. If saving fails the freshly computed record is still
    /// returned.
    pub fn recompute(&self, today: NaiveDate) -> StreakRecord {
        let prior = self.prior_record();

        let keys = match self.log.list_date_keys() {
            Ok(keys) => keys,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read achievement log, keeping previous streak");
                return StreakRecord {
                    longest: prior.longest.max(prior.current),
                    ..prior
                };
            }
        };
        let dates = achievement_dates(&keys);
        let record = walk_back(today, &dates, &prior, &self.policy);

        tracing::debug!(
            %today,
            logged_days = dates.len(),
            current = record.current,
            longest = record.longest,
            skipped_days = record.skipped_days,
            "recomputed streak"
        );

        if let Err(e) = self.store.save(&record) {
            tracing::error!(error = %e, "failed to save streak record");
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievements::Achievement;
    use crate::calendar::parse_date_key;
    use crate::error::{CoreError, DatabaseError};
    use crate::storage::{MemoryAchievementLog, MemoryStreakStore};

    fn d(key: &str) -> NaiveDate {
        parse_date_key(key).unwrap()
    }

    fn log_with(keys: &[&str]) -> MemoryAchievementLog {
        let log = MemoryAchievementLog::new();
        for key in keys {
            log.append(d(key), &Achievement::now("focus")).unwrap();
        }
        log
    }

    struct UnreadableLog;

    impl AchievementLog for UnreadableLog {
        fn list_date_keys(&self) -> Result<Vec<String>> {
            Err(CoreError::Database(DatabaseError::Locked))
        }
        fn append(&self, _date: NaiveDate, _achievement: &Achievement) -> Result<()> {
            Err(CoreError::Database(DatabaseError::Locked))
        }
        fn entries_on(&self, _date: NaiveDate) -> Result<Vec<Achievement>> {
            Err(CoreError::Database(DatabaseError::Locked))
        }
        fn remove_day(&self, _key: &str) -> Result<bool> {
            Err(CoreError::Database(DatabaseError::Locked))
        }
    }

    struct ReadOnlyStore;

    impl StreakStore for ReadOnlyStore {
        fn load(&self) -> Result<Option<StreakRecord>> {
            Ok(None)
        }
        fn save(&self, _record: &StreakRecord) -> Result<()> {
            Err(CoreError::Database(DatabaseError::Locked))
        }
    }

    #[test]
    fn recompute_persists_the_new_record() {
        let log = log_with(&["2024-12-16", "2024-12-13", "2024-12-12"]);
        let store = MemoryStreakStore::new();
        let record = StreakEngine::new(&log, &store).recompute(d("2024-12-16"));

        assert_eq!(record.current, 3);
        assert_eq!(store.load().unwrap(), Some(record));
    }

    #[test]
    fn recompute_is_idempotent() {
        let log = log_with(&["2024-12-18", "2024-12-16"]);
        let store = MemoryStreakStore::new();
        let engine = StreakEngine::new(&log, &store);

        let first = engine.recompute(d("2024-12-18"));
        let second = engine.recompute(d("2024-12-18"));
        assert_eq!(first, second);
    }

    #[test]
    fn longest_is_kept_when_current_is_lower() {
        let store = MemoryStreakStore::new();
        store
            .save(&StreakRecord {
                current: 3,
                longest: 10,
                last_achievement_date: Some(d("2024-12-10")),
                last_calculated: Some(d("2024-12-10")),
                ..StreakRecord::default()
            })
            .unwrap();
        let log = log_with(&["2024-12-18"]);

        let record = StreakEngine::new(&log, &store).recompute(d("2024-12-18"));
        assert_eq!(record.current, 1);
        assert_eq!(record.longest, 10);
    }

    #[test]
    fn longest_grows_with_current() {
        let store = MemoryStreakStore::new();
        store
            .save(&StreakRecord {
                longest: 3,
                ..StreakRecord::default()
            })
            .unwrap();
        let log = log_with(&[
            "2024-12-20", "2024-12-19", "2024-12-18", "2024-12-17", "2024-12-16",
        ]);

        let record = StreakEngine::new(&log, &store).recompute(d("2024-12-20"));
        assert_eq!(record.current, 5);
        assert_eq!(record.longest, 5);
    }

    #[test]
    fn corrupt_record_is_replaced_by_defaults() {
        let store = MemoryStreakStore::with_raw("{\"longest\": \"lots\"");
        let log = log_with(&["2024-12-18"]);

        let record = StreakEngine::new(&log, &store).recompute(d("2024-12-18"));
        assert_eq!(record.current, 1);
        assert_eq!(record.longest, 1);
        assert_eq!(store.load().unwrap(), Some(record));
    }

    #[test]
    fn unreadable_log_keeps_previous_record() {
        let store = MemoryStreakStore::new();
        let previous = StreakRecord {
            current: 4,
            longest: 7,
            last_calculated: Some(d("2024-12-17")),
            ..StreakRecord::default()
        };
        store.save(&previous).unwrap();

        let record = StreakEngine::new(&UnreadableLog, &store).recompute(d("2024-12-18"));
        assert_eq!(record, previous);
        assert_eq!(store.load().unwrap(), Some(previous));
    }

    #[test]
    fn unreadable_log_never_returns_longest_below_current() {
        let store = MemoryStreakStore::with_raw("{\"current\":5,\"longest\":1}");

        let record = StreakEngine::new(&UnreadableLog, &store).recompute(d("2024-12-18"));
        assert_eq!(record.current, 5);
        assert_eq!(record.longest, 5);
    }

    #[test]
    fn failed_save_still_returns_the_record() {
        let log = log_with(&["2024-12-18"]);
        let record = StreakEngine::new(&log, &ReadOnlyStore).recompute(d("2024-12-18"));
        assert_eq!(record.current, 1);
    }

    #[test]
    fn custom_policy_limits_lookback() {
        let log = log_with(&[
            "2024-12-20", "2024-12-19", "2024-12-18", "2024-12-17", "2024-12-16",
        ]);
        let store = MemoryStreakStore::new();
        let record = StreakEngine::new(&log, &store)
            .with_policy(WalkPolicy::new(2))
            .recompute(d("2024-12-20"));
        assert_eq!(record.current, 3);
    }
}
