//! Athlete card rendering.

use super::EventList;
use crate::state::{Athlete, ClassifiedEvent, Medal, classify};
use crate::ui::escape::{escape, is_safe_url};
use std::fmt::Write;

/// Renders one athlete: header with headshot and details, then events.
pub struct AthleteCard<'a> {
    events: EventList<'a>,
}

impl<'a> AthleteCard<'a> {
    pub fn new(assets_base: &'a str) -> Self {
        Self {
            events: EventList::new(assets_base),
        }
    }

    pub fn render(&self, athlete: &Athlete) -> String {
        let classified = classify(athlete.events.iter().cloned());

        let mut class = String::from("athlete");
        if let Some(medal) = featured_medal(&classified) {
            let _ = write!(class, " has-medal medal-{}", medal.key());
        }

        let mut html = format!("<div class=\"{}\">\n<div class=\"athlete-header\">\n", class);
        if is_safe_url(&athlete.headshot) {
            let _ = writeln!(
                html,
                "<img src=\"{}\" alt=\"{}\" />",
                escape(athlete.headshot.trim()),
                escape(&athlete.name)
            );
        }
        let _ = write!(html, "<div><strong>{}</strong>", escape(&athlete.name));
        if let Some(details) = details_line(athlete) {
            let _ = write!(html, "<br />{}", escape(&details));
        }
        if !athlete.vt_connection.trim().is_empty() {
            let _ = write!(html, "<br /><em>{}</em>", escape(&athlete.vt_connection));
        }
        html.push_str("</div>\n</div>\n");

        let _ = writeln!(
            html,
            "<div class=\"events\">{}</div>",
            self.events.render(&classified)
        );
        html.push_str("</div>\n");
        html
    }
}

/// The medal of the first event, in classified order, that carries one.
///
/// This is the earliest medal by sort order, not the highest tier.
pub fn featured_medal(events: &[ClassifiedEvent]) -> Option<Medal> {
    events.iter().find_map(|e| e.event.medal_tier())
}

/// `"<sport>, age <age>"`, or whichever half is present.
fn details_line(athlete: &Athlete) -> Option<String> {
    let sport = athlete.sport.trim();
    let age = athlete.age.trim();
    match (sport.is_empty(), age.is_empty()) {
        (false, false) => Some(format!("{}, age {}", sport, age)),
        (false, true) => Some(sport.to_string()),
        (true, false) => Some(format!("age {}", age)),
        (true, true) => None,
    }
}
