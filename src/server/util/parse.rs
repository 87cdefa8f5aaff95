//! Parsing and formatting of the date and time formats accepted in chat.
//!
//! Times typed by users are local to the configured UTC offset; everything stored in
//! the database is UTC.

use chrono::{
    DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc,
};

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d.%m.%Y"];
const DISPLAY_FORMAT: &str = "%d.%m.%Y %H:%M";

/// Parses a `HH:MM` (or `H:MM`) time of day.
pub fn parse_time_of_day(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").ok()
}

/// Parses a `YYYY-MM-DD` or `DD.MM.YYYY` date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value.trim(), format).ok())
}

/// Converts a local wall-clock time at `offset` into UTC.
pub fn local_to_utc(local: NaiveDateTime, offset: FixedOffset) -> Option<DateTime<Utc>> {
    offset
        .from_local_datetime(&local)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Next occurrence of a local time of day strictly after `now`: today if still ahead,
/// otherwise tomorrow.
pub fn next_time_of_day(
    time: NaiveTime,
    now: DateTime<Utc>,
    offset: FixedOffset,
) -> Option<DateTime<Utc>> {
    let today = now.with_timezone(&offset).date_naive();
    let candidate = local_to_utc(today.and_time(time), offset)?;

    if candidate > now {
        Some(candidate)
    } else {
        Some(candidate + Duration::days(1))
    }
}

/// Formats a UTC timestamp as local `DD.MM.YYYY HH:MM` for chat replies.
pub fn format_local(value: DateTime<Utc>, offset: FixedOffset) -> String {
    value.with_timezone(&offset).format(DISPLAY_FORMAT).to_string()
}
