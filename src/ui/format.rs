//! Event time display.
//!
//! All times are shown in US Eastern time regardless of where the widget is
//! rendered.

use crate::state::{DISPLAY_TZ, EventTime, parse_event_time};
use chrono::{DateTime, NaiveDate, Utc};

/// Shown when the feed sends a date-time that cannot be parsed.
pub const UNKNOWN_DATE: &str = "Date TBA";

/// Format an instant for display, e.g. `8/1/2024, 4:00 PM EDT`.
pub fn format_datetime(instant: DateTime<Utc>) -> String {
    instant
        .with_timezone(&DISPLAY_TZ)
        .format("%-m/%-d/%Y, %-I:%M %p %Z")
        .to_string()
}

/// Format a day with no time, e.g. `7/28/2024`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Display text for an event's raw date-time; `None` when there is none.
pub fn display_datetime(raw: Option<&str>) -> Option<String> {
    let raw = raw?;
    Some(match parse_event_time(raw) {
        Some(EventTime::At(instant)) => format_datetime(instant),
        Some(EventTime::OnDate(date)) => format_date(date),
        None => UNKNOWN_DATE.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn utc(raw: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(raw).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_format_summer_and_winter() {
        assert_eq!(format_datetime(utc("2024-08-01T20:00:00Z")), "8/1/2024, 4:00 PM EDT");
        assert_eq!(format_datetime(utc("2024-12-01T15:30:00Z")), "12/1/2024, 10:30 AM EST");
    }

    #[test]
    fn test_display_datetime() {
        assert_eq!(display_datetime(None), None);
        assert_eq!(display_datetime(Some("soon")), Some(UNKNOWN_DATE.to_string()));
        assert_eq!(
            display_datetime(Some("2024-07-30T10:00:00Z")),
            Some("7/30/2024, 6:00 AM EDT".to_string())
        );
    }

    #[test]
    fn test_display_date_only_keeps_the_day() {
        assert_eq!(display_datetime(Some("2024-07-28")), Some("7/28/2024".to_string()));
    }

    #[test]
    fn test_display_spring_forward_gap() {
        assert_eq!(
            display_datetime(Some("2024-03-10T02:30")),
            Some("3/10/2024, 3:30 AM EDT".to_string())
        );
    }
}
