//! Calendar helpers.
//!
//! Everything here works on [`NaiveDate`] in the caller's local calendar.
//! A workday is Monday through Friday; holidays are not modelled.

use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone, Weekday};

/// Canonical on-disk format of a day key.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// True for Monday through Friday.
pub fn is_workday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// `YYYY-MM-DD` key for a calendar day.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Day key of a timestamp, taken in the local calendar.
pub fn date_key_at<Tz: TimeZone>(at: &DateTime<Tz>) -> String {
    date_key(at.with_timezone(&Local).date_naive())
}

/// Parse a day key produced by [`date_key`].
///
/// Only the exact zero-padded form is accepted, so `2024-1-5` or
/// `2024-01-05T00:00` are rejected rather than normalised.
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    if key.len() != 10 {
        return None;
    }
    let date = NaiveDate::parse_from_str(key, DATE_KEY_FORMAT).ok()?;
    (date_key(date) == key).then_some(date)
}

/// The date itself if it is a workday, otherwise the closest earlier workday.
///
/// Returns `None` only when stepping back would leave chrono's date range.
pub fn rewind_to_workday(mut date: NaiveDate) -> Option<NaiveDate> {
    while !is_workday(date) {
        date = date.pred_opt()?;
    }
    Some(date)
}

/// Today in the local calendar.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
