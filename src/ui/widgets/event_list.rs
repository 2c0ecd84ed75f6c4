//! Grouped event list rendering.

use super::MedalBadge;
use crate::state::ClassifiedEvent;
use crate::ui::escape::escape;
use crate::ui::format::display_datetime;
use std::fmt::Write;

/// Renders classified events as an "Upcoming" group followed by a
/// "Results" group. Empty groups are left out.
pub struct EventList<'a> {
    badge: MedalBadge<'a>,
}

impl<'a> EventList<'a> {
    pub fn new(assets_base: &'a str) -> Self {
        Self {
            badge: MedalBadge::new(assets_base),
        }
    }

    pub fn render(&self, events: &[ClassifiedEvent]) -> String {
        let (completed, upcoming): (Vec<&ClassifiedEvent>, Vec<&ClassifiedEvent>) =
            events.iter().partition(|e| e.completed);

        let mut html = String::new();
        self.render_group(&mut html, "Upcoming", &upcoming);
        self.render_group(&mut html, "Results", &completed);
        html
    }

    fn render_group(&self, html: &mut String, title: &str, events: &[&ClassifiedEvent]) {
        if events.is_empty() {
            return;
        }
        let _ = write!(html, "<div class=\"event-group\"><strong>{}</strong>", title);
        for event in events {
            html.push_str(&self.render_event(event));
        }
        html.push_str("</div>");
    }

    /// Render a single event row.
    pub fn render_event(&self, classified: &ClassifiedEvent) -> String {
        let event = &classified.event;
        let status = if classified.completed {
            "completed"
        } else {
            "upcoming"
        };

        let mut html = format!(
            "<div class=\"event {}\"><div>{}",
            status,
            escape(&event.label)
        );
        if let Some(when) = display_datetime(event.datetime.as_deref()) {
            let _ = write!(html, "<br /><small>{}</small>", escape(&when));
        }
        if let Some(result) = event.result.as_deref() {
            let _ = write!(html, "<div>Result: {}</div>", escape(result));
        }
        html.push_str("</div>");
        if let Some(mark) = &event.medal {
            html.push_str(&self.badge.render(mark));
        }
        html.push_str("</div>");
        html
    }
}
