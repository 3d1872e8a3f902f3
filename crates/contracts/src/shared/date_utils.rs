/// Utilities for parsing dates coming from the billing tier
///
/// The remote side sends plain dates ("2025-01-10") for date fields and ISO
/// date-times for timestamps. Parsing never fails loudly: unreadable values
/// become `None` and are treated as a missing date.
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Parse "YYYY-MM-DD" or an ISO datetime into a calendar day
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> 2024-03-15
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    parse_calendar_datetime(value).map(|dt| dt.date())
}

/// Parse "YYYY-MM-DD" (as midnight) or an ISO datetime, keeping the time of day
///
/// An explicit offset is dropped, not converted: the wall-clock reading is kept.
pub fn parse_calendar_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = value.parse::<NaiveDateTime>() {
        return Some(dt);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_calendar_date() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 15);
        assert_eq!(parse_calendar_date("2024-03-15"), expected);
        assert_eq!(parse_calendar_date("2024-03-15T14:02:26.123Z"), expected);
        assert_eq!(parse_calendar_date("2024-03-15T23:30:00+03:00"), expected);
        assert_eq!(parse_calendar_date("2024-03-15T14:02:26"), expected);
    }

    #[test]
    fn test_parse_keeps_time_of_day() {
        let dt = parse_calendar_datetime("2025-01-10T23:59:00").unwrap();
        assert_eq!(dt.format("%H:%M").to_string(), "23:59");
        let dt = parse_calendar_datetime("2025-01-10").unwrap();
        assert_eq!(dt.format("%H:%M").to_string(), "00:00");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(parse_calendar_date("invalid"), None);
        assert_eq!(parse_calendar_date(""), None);
        assert_eq!(parse_calendar_date("2025-02-30"), None);
    }
}
