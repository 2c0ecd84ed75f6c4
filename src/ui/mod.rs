//! HTML rendering.
//!
//! This module turns payloads and status messages into the markup that
//! replaces the mount's content.

pub mod escape;
pub mod format;
mod mount;
mod widgets;

pub use mount::{FileMount, MemoryMount, Mount};
pub use widgets::{AthleteCard, EventList, MedalBadge, render_state};

use crate::config::OutputConfig;
use crate::state::{DisplayState, Payload};

/// Main HTML renderer.
#[derive(Debug, Clone)]
pub struct Ui {
    assets_base: String,
}

impl Ui {
    pub fn new(assets_base: impl Into<String>) -> Self {
        Self {
            assets_base: assets_base.into(),
        }
    }

    pub fn from_config(config: &OutputConfig) -> Self {
        Self::new(config.assets_base.clone())
    }

    /// Render every athlete card, in feed order.
    ///
    /// Each call builds the full tree from scratch.
    pub fn render_all(&self, payload: &Payload) -> String {
        let card = AthleteCard::new(&self.assets_base);
        payload
            .athletes
            .iter()
            .map(|athlete| card.render(athlete))
            .collect()
    }

    /// Render a status message.
    pub fn render_state(&self, state: DisplayState) -> String {
        render_state(state)
    }
}

impl Default for Ui {
    fn default() -> Self {
        Self::from_config(&OutputConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Athlete, Event};

    #[test]
    fn test_render_all_keeps_feed_order() {
        let payload = Payload::new(
            "v1",
            vec![
                Athlete {
                    name: "Zed".to_string(),
                    ..Default::default()
                },
                Athlete {
                    name: "Amy".to_string(),
                    events: vec![Event::new("Heat")],
                    ..Default::default()
                },
            ],
        );

        let html = Ui::default().render_all(&payload);
        assert_eq!(html.matches("<div class=\"athlete\">").count(), 2);
        assert!(html.find("Zed").unwrap() < html.find("Amy").unwrap());
    }

    #[test]
    fn test_render_all_is_deterministic() {
        let payload = Payload::new(
            "v1",
            vec![Athlete {
                name: "Amy".to_string(),
                events: vec![
                    Event::new("Final").at("2024-08-02T20:00:00Z").with_result("2nd").with_medal("silver"),
                    Event::new("Heat").at("2024-07-30T10:00:00Z"),
                ],
                ..Default::default()
            }],
        );

        let ui = Ui::new("assets");
        assert_eq!(ui.render_all(&payload), ui.render_all(&payload));
        assert!(ui.render_all(&payload).contains("assets/medal-silver.svg"));
    }
}
