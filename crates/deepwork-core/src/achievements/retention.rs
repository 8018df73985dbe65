use chrono::NaiveDate;

use super::AchievementLog;
use crate::calendar::{date_key, parse_date_key};
use crate::error::Result;
use crate::streak::WalkPolicy;

/// Days of history kept by default.
pub const DEFAULT_HORIZON_DAYS: u32 = 30;

/// Remove every day strictly more than `horizon_days` before `today`.
///
/// Today's key is always kept, as are keys that do not parse as dates.
/// Returns the removed keys in ascending order.
pub fn purge_older_than<L: AchievementLog + ?Sized>(
    log: &L,
    today: NaiveDate,
    horizon_days: u32,
    policy: &WalkPolicy,
) -> Result<Vec<String>> {
    let span = policy.max_calendar_span_days();
    if i64::from(horizon_days) < span {
        tracing::warn!(
            horizon_days,
            lookback_span_days = span,
            "retention horizon is shorter than the streak lookback; long streaks may be truncated"
        );
    }

    let today_key = date_key(today);
    let mut removed = Vec::new();
    let mut keys = log.list_date_keys()?;
    keys.sort();

    for key in keys {
        if key == today_key {
            continue;
        }
        let Some(date) = parse_date_key(&key) else {
            continue;
        };
        if (today - date).num_days() > i64::from(horizon_days) && log.remove_day(&key)? {
            removed.push(key);
        }
    }

    if !removed.is_empty() {
        tracing::debug!(count = removed.len(), horizon_days, "purged old achievement days");
    }
    Ok(removed)
}
