//! Front matter timestamp parsing and formatting.
//!
//! Timestamps are written as ISO-8601 UTC strings with millisecond
//! precision (`1970-01-01T00:00:01.000Z`). All comparisons happen at
//! millisecond precision, so filesystem times are truncated on the way in.

use std::time::SystemTime;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde_yaml::Value;

/// Format a timestamp the way it is stored in front matter.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    truncate_millis(at).to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse a front matter value as a timestamp.
///
/// Accepts RFC 3339 strings with any offset, bare dates (`2024-03-01`,
/// read as midnight UTC) and `2024-03-01 10:20:30[.123]` (read as UTC).
/// Anything else, including non-string values, yields `None`.
pub fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    let text = value.as_str()?.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(truncate_millis(parsed.with_timezone(&Utc)));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(truncate_millis(parsed.and_utc()));
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}

/// Convert a filesystem time to a millisecond-precision UTC timestamp.
pub fn from_system_time(time: SystemTime) -> DateTime<Utc> {
    truncate_millis(DateTime::<Utc>::from(time))
}

/// Drop sub-millisecond precision.
pub fn truncate_millis(at: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(at.timestamp_millis()).unwrap_or(at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn formats_with_millis_and_z() {
        let at = Utc.timestamp_millis_opt(1000).unwrap();
        assert_eq!(format_timestamp(at), "1970-01-01T00:00:01.000Z");
    }

    #[test]
    fn parses_rfc3339_utc() {
        let value = Value::String("2021-05-04T10:20:30.456Z".into());
        let parsed = parse_timestamp(&value).unwrap();
        assert_eq!(format_timestamp(parsed), "2021-05-04T10:20:30.456Z");
    }

    #[test]
    fn parses_rfc3339_with_offset_into_utc() {
        let value = Value::String("2021-05-04T12:20:30+02:00".into());
        let parsed = parse_timestamp(&value).unwrap();
        assert_eq!(format_timestamp(parsed), "2021-05-04T10:20:30.000Z");
    }

    #[test]
    fn parses_bare_date_as_midnight() {
        let value = Value::String("2021-05-04".into());
        let parsed = parse_timestamp(&value).unwrap();
        assert_eq!(format_timestamp(parsed), "2021-05-04T00:00:00.000Z");
    }

    #[test]
    fn parses_space_separated_datetime() {
        let value = Value::String("2021-05-04 10:20:30".into());
        let parsed = parse_timestamp(&value).unwrap();
        assert_eq!(parsed.hour(), 10);
    }

    #[test]
    fn rejects_garbage_and_non_strings() {
        assert!(parse_timestamp(&Value::String("yesterday".into())).is_none());
        assert!(parse_timestamp(&Value::String(String::new())).is_none());
        assert!(parse_timestamp(&Value::Bool(true)).is_none());
        assert!(parse_timestamp(&Value::Null).is_none());
        assert!(parse_timestamp(&Value::Number(42.into())).is_none());
    }

    #[test]
    fn system_time_truncates_to_millis() {
        let time = UNIX_EPOCH + Duration::from_nanos(1_234_567_891);
        let at = from_system_time(time);
        assert_eq!(at.timestamp_millis(), 1234);
        assert_eq!(at.timestamp_subsec_nanos(), 234_000_000);
    }
}
