//! Event classification and ordering.
//!
//! Events are split into upcoming and completed and put into a total order:
//! upcoming before completed, then chronologically. Events whose date-time
//! is missing or unparseable go last within their group.

use super::{Event, parse_event_time};
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// An event with its derived classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedEvent {
    pub event: Event,
    pub completed: bool,
    /// Parsed instant, `None` when missing or unparseable.
    pub starts_at: Option<DateTime<Utc>>,
}

impl ClassifiedEvent {
    fn new(event: Event) -> Self {
        let completed = event.is_completed();
        let starts_at = event
            .datetime
            .as_deref()
            .and_then(parse_event_time)
            .map(|time| time.instant());
        Self {
            event,
            completed,
            starts_at,
        }
    }
}

/// Classify and sort events.
///
/// The sort is stable, so events with equal keys keep their input order and
/// classifying an already classified list leaves it unchanged.
pub fn classify(events: impl IntoIterator<Item = Event>) -> Vec<ClassifiedEvent> {
    let mut classified: Vec<ClassifiedEvent> =
        events.into_iter().map(ClassifiedEvent::new).collect();
    classified.sort_by(compare);
    classified
}

fn compare(a: &ClassifiedEvent, b: &ClassifiedEvent) -> Ordering {
    a.completed
        .cmp(&b.completed)
        .then_with(|| match (a.starts_at, b.starts_at) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn labels(events: &[ClassifiedEvent]) -> Vec<&str> {
        events.iter().map(|e| e.event.label.as_str()).collect()
    }

    fn unwrap_events(events: Vec<ClassifiedEvent>) -> Vec<Event> {
        events.into_iter().map(|e| e.event).collect()
    }

    #[test]
    fn test_heat_before_final() {
        let events = vec![
            Event::new("Final")
                .at("2024-08-01T20:00:00Z")
                .with_result("1st")
                .with_medal("gold"),
            Event::new("Heat").at("2024-07-30T10:00:00Z"),
        ];

        let classified = classify(events);

        assert_eq!(labels(&classified), vec!["Heat", "Final"]);
        assert!(!classified[0].completed);
        assert!(classified[1].completed);
    }

    #[test]
    fn test_groups_then_chronological() {
        let events = vec![
            Event::new("Semi result").at("2024-07-31T12:00:00Z").with_result("Q"),
            Event::new("Final").at("2024-08-02T18:00:00Z"),
            Event::new("Heat result").at("2024-07-29T09:00:00Z").with_result("Q"),
            Event::new("Relay").at("2024-08-01T18:00:00Z"),
        ];

        let classified = classify(events);

        assert_eq!(
            labels(&classified),
            vec!["Relay", "Final", "Heat result", "Semi result"]
        );
    }

    #[test]
    fn test_offsets_compare_by_instant() {
        // 09:00-05:00 is 14:00Z, after 13:00Z.
        let events = vec![
            Event::new("Eastern").at("2024-08-01T09:00:00-05:00"),
            Event::new("Utc").at("2024-08-01T13:00:00Z"),
        ];

        assert_eq!(labels(&classify(events)), vec!["Utc", "Eastern"]);
    }

    #[test]
    fn test_undated_events_go_last_in_group() {
        let events = vec![
            Event::new("No date"),
            Event::new("Garbage").at("sometime soon"),
            Event::new("Dated").at("2024-08-01T13:00:00Z"),
            Event::new("Done").with_result("DNF"),
        ];

        let classified = classify(events);

        assert_eq!(
            labels(&classified),
            vec!["Dated", "No date", "Garbage", "Done"]
        );
        assert_eq!(classified[1].starts_at, None);
        assert_eq!(classified[2].starts_at, None);
    }

    #[test]
    fn test_spring_forward_gap_sorts_as_dated() {
        // 2024-03-10T02:30 Eastern is skipped by DST and lands at 07:30Z.
        let events = vec![
            Event::new("After").at("2024-03-10T08:00:00Z"),
            Event::new("Undated"),
            Event::new("Gap").at("2024-03-10T02:30"),
            Event::new("Before").at("2024-03-10T07:00:00Z"),
        ];

        let classified = classify(events);

        assert_eq!(labels(&classified), vec!["Before", "Gap", "After", "Undated"]);
        assert!(classified[1].starts_at.is_some());
    }

    #[test]
    fn test_equal_keys_keep_input_order() {
        let events = vec![
            Event::new("B").at("2024-08-01T13:00:00Z"),
            Event::new("A").at("2024-08-01T13:00:00Z"),
            Event::new("C").at("2024-08-01T13:00:00Z"),
        ];

        assert_eq!(labels(&classify(events)), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_classify_is_idempotent() {
        let events = vec![
            Event::new("Final").at("2024-08-03T20:00:00Z").with_result("2nd").with_medal("silver"),
            Event::new("Undated"),
            Event::new("Heat 2").at("2024-08-01T10:00:00Z"),
            Event::new("Heat 1").at("2024-08-01T10:00:00Z"),
            Event::new("Qualifier").at("2024-07-28").with_result("Q"),
        ];

        let once = classify(events);
        let twice = classify(unwrap_events(once.clone()));

        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_list() {
        assert!(classify(Vec::new()).is_empty());
    }
}
