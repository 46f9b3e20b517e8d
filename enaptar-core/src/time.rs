//! Parsing of user-entered times and dates.

use chrono::{Duration, NaiveDate, NaiveTime};

use crate::error::{EnaptarError, EnaptarResult};

/// Parse `HH:MM` into a time of day.
///
/// Exactly two colon-separated integers are accepted, hour 0..=23 and minute
/// 0..=59. Empty input means midnight; whitespace alone is not a time.
pub fn parse_time(input: &str) -> EnaptarResult<NaiveTime> {
    if input.is_empty() {
        return Ok(NaiveTime::MIN);
    }

    let trimmed = input.trim();
    let invalid = || EnaptarError::InvalidTime(input.to_string());

    let (hour, minute) = trimmed.split_once(':').ok_or_else(invalid)?;
    let hour: u32 = hour.trim().parse().map_err(|_| invalid())?;
    let minute: u32 = minute.trim().parse().map_err(|_| invalid())?;

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)
}

/// Parse `YYYY-MM-DD`, or `today` / `tomorrow` / `yesterday` relative to `today`.
pub fn parse_date(input: &str, today: NaiveDate) -> EnaptarResult<NaiveDate> {
    let trimmed = input.trim();

    match trimmed.to_lowercase().as_str() {
        "today" => return Ok(today),
        "tomorrow" => return Ok(today + Duration::days(1)),
        "yesterday" => return Ok(today - Duration::days(1)),
        _ => {}
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| EnaptarError::InvalidDate(input.to_string()))
}
