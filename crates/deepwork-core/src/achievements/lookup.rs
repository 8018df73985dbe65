use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::calendar::parse_date_key;

/// Turn a full listing of day keys into the set of achievement dates.
///
/// Keys that do not parse as `YYYY-MM-DD` are skipped.
pub fn achievement_dates<I, S>(keys: I) -> BTreeSet<NaiveDate>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    keys.into_iter()
        .filter_map(|key| {
            let key = key.as_ref();
            let parsed = parse_date_key(key);
            if parsed.is_none() {
                tracing::debug!(key, "ignoring malformed achievement day key");
            }
            parsed
        })
        .collect()
}
