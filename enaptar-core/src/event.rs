//! Calendar event type.
//!
//! Events have no identifier: two events with the same title, timestamp and
//! description are the same event as far as the store is concerned.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A titled, timestamped calendar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    #[serde(rename = "dt", with = "iso_datetime")]
    pub occurs_at: NaiveDateTime,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
}

impl Event {
    pub fn new(
        title: impl Into<String>,
        occurs_at: NaiveDateTime,
        description: impl Into<String>,
    ) -> Self {
        Event {
            title: title.into(),
            occurs_at,
            description: description.into(),
        }
    }

    /// Build an event for `date` at `time`.
    pub fn on(
        date: NaiveDate,
        time: NaiveTime,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::new(title, date.and_time(time), description)
    }

    pub fn date(&self) -> NaiveDate {
        self.occurs_at.date()
    }

    pub fn time(&self) -> NaiveTime {
        self.occurs_at.time()
    }
}

/// List row form: `14:30  Meeting`
impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}  {}", self.occurs_at.format("%H:%M"), self.title)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// ISO-8601 `dt` field.
///
/// Written as `YYYY-MM-DDTHH:MM:SS`. Read leniently: `T` or space separator,
/// optional seconds and fraction, or a bare date meaning midnight.
pub mod iso_datetime {
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
    use serde::{Deserialize, Deserializer, Serializer};

    const WRITE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    const READ_FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ];

    pub fn format(dt: &NaiveDateTime) -> String {
        dt.format(WRITE_FORMAT).to_string()
    }

    pub fn parse(s: &str) -> Option<NaiveDateTime> {
        READ_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .or_else(|| {
                NaiveDate::parse_from_str(s, "%Y-%m-%d")
                    .ok()
                    .map(|d| d.and_time(NaiveTime::MIN))
            })
    }

    pub fn serialize<S>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format(dt))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse(&s).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid ISO-8601 date-time \"{}\"", s))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn serializes_with_dt_field() {
        let event = Event::new("Meeting", at(2024, 5, 1, 14, 30), "");
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(
            json,
            r#"{"title":"Meeting","dt":"2024-05-01T14:30:00","description":""}"#
        );
    }

    #[test]
    fn missing_description_reads_as_empty() {
        let event: Event =
            serde_json::from_str(r#"{"title":"Lunch","dt":"2024-05-01T12:00:00"}"#).unwrap();
        assert_eq!(event.description, "");
        assert_eq!(event.occurs_at, at(2024, 5, 1, 12, 0));
    }

    #[test]
    fn null_description_reads_as_empty() {
        let event: Event = serde_json::from_str(
            r#"{"title":"Lunch","dt":"2024-05-01T12:00:00","description":null}"#,
        )
        .unwrap();
        assert_eq!(event.description, "");
    }

    #[test]
    fn reads_lenient_datetimes() {
        assert_eq!(iso_datetime::parse("2024-05-01T14:30"), Some(at(2024, 5, 1, 14, 30)));
        assert_eq!(iso_datetime::parse("2024-05-01 14:30:00"), Some(at(2024, 5, 1, 14, 30)));
        assert_eq!(iso_datetime::parse("2024-05-01"), Some(at(2024, 5, 1, 0, 0)));

        let fractional = iso_datetime::parse("2024-05-01T14:30:05.250000").unwrap();
        assert_eq!(iso_datetime::format(&fractional), "2024-05-01T14:30:05.250");
    }

    #[test]
    fn rejects_garbage_datetime() {
        assert!(iso_datetime::parse("yesterday").is_none());
        assert!(iso_datetime::parse("2024-13-01T10:00").is_none());

        let result: Result<Event, _> =
            serde_json::from_str(r#"{"title":"x","dt":"not a date"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn displays_as_list_row() {
        let event = Event::new("Dentist", at(2024, 5, 1, 8, 5), "bring card");
        assert_eq!(event.to_string(), "08:05  Dentist");
    }

    #[test]
    fn equality_is_by_value() {
        let a = Event::new("Gym", at(2024, 5, 1, 18, 0), "");
        let b = Event::new("Gym", at(2024, 5, 1, 18, 0), "");
        let c = Event::new("Gym", at(2024, 5, 1, 18, 0), "legs");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
