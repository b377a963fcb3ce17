//! Timestamp parsing shared by the data files and the date-range filter.
//!
//! Accepted inputs, tried in order:
//!
//! - RFC 3339 (`2024-03-01T12:30:00Z`, `2024-03-01T12:30:00+02:00`)
//! - naive date-time, read as UTC (`2024-03-01T12:30:00`, `2024-03-01 12:30`)
//! - calendar date, read as UTC midnight (`2024-03-01`)

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::error::{ModelError, Result};

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a calendar date or date-time string into a UTC instant.
pub fn parse_instant(input: &str) -> Result<DateTime<Utc>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ModelError::invalid_timestamp(input, "empty input"));
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|err| ModelError::invalid_timestamp(input, err.to_string()))
}

/// Serde adapter for optional `createdAt` fields.
///
/// Serializes as RFC 3339; deserializes anything [`parse_instant`] accepts.
pub mod optional {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    pub fn serialize<S>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(instant) => serializer.serialize_str(&instant.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|value| super::parse_instant(&value).map_err(D::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Timelike};

    #[test]
    fn parses_rfc3339_with_offset() {
        let parsed = parse_instant("2024-03-01T12:30:00+02:00").unwrap();
        assert_eq!(
            parsed,
            Utc.with_ymd_and_hms(2024, 3, 1, 10, 30, 0).unwrap()
        );
    }

    #[test]
    fn parses_naive_datetime_as_utc() {
        let parsed = parse_instant("2024-03-01T12:30:15.250").unwrap();
        assert_eq!(parsed.hour(), 12);
        assert_eq!(parsed.timestamp_subsec_millis(), 250);

        let spaced = parse_instant("2024-03-01 08:05").unwrap();
        assert_eq!(spaced.minute(), 5);
    }

    #[test]
    fn date_only_is_utc_midnight() {
        let parsed = parse_instant(" 2024-03-01 ").unwrap();
        assert_eq!(parsed.day(), 1);
        assert_eq!(parsed.num_seconds_from_midnight(), 0);
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            parse_instant("yesterday-ish"),
            Err(ModelError::InvalidTimestamp { .. })
        ));
        assert!(parse_instant("   ").is_err());
        assert!(parse_instant("2024-13-40").is_err());
    }
}
