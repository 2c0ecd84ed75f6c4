//! Event date-time parsing.
//!
//! Feed values are ISO-8601. Wall times without an offset are read in the
//! display time zone, US Eastern.

use chrono::{DateTime, LocalResult, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Utc};
use chrono_tz::America::New_York;
use chrono_tz::Tz;

/// Time zone event times are read and displayed in.
pub const DISPLAY_TZ: Tz = New_York;

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// When an event takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTime {
    /// A known instant.
    At(DateTime<Utc>),
    /// A calendar day with no time of day.
    OnDate(NaiveDate),
}

impl EventTime {
    /// Instant used for ordering. Dates sort at their Eastern midnight.
    pub fn instant(&self) -> DateTime<Utc> {
        match self {
            Self::At(instant) => *instant,
            Self::OnDate(date) => resolve_local(date.and_time(chrono::NaiveTime::MIN)),
        }
    }
}

/// Parse an ISO-8601 value from the feed.
///
/// Accepts RFC 3339, naive date-times and bare dates.
pub fn parse_event_time(raw: &str) -> Option<EventTime> {
    let raw = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(EventTime::At(parsed.with_timezone(&Utc)));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(EventTime::At(resolve_local(naive)));
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(EventTime::OnDate)
}

/// Resolve an Eastern wall time to an instant.
///
/// Ambiguous times take the earlier offset. Times skipped by the
/// spring-forward change move one hour ahead.
fn resolve_local(naive: NaiveDateTime) -> DateTime<Utc> {
    let local = match DISPLAY_TZ.from_local_datetime(&naive) {
        LocalResult::Single(local) | LocalResult::Ambiguous(local, _) => local,
        LocalResult::None => match DISPLAY_TZ
            .from_local_datetime(&(naive + TimeDelta::hours(1)))
            .earliest()
        {
            Some(local) => local,
            None => return Utc.from_utc_datetime(&naive),
        },
    };
    local.with_timezone(&Utc)
}
