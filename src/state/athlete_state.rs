//! Athlete and event state.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Medal tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    /// Lowercase tier key, used for asset names and CSS classes.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Gold => "gold",
            Self::Silver => "silver",
            Self::Bronze => "bronze",
        }
    }
}

impl std::fmt::Display for Medal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gold => write!(f, "Gold"),
            Self::Silver => write!(f, "Silver"),
            Self::Bronze => write!(f, "Bronze"),
        }
    }
}

impl FromStr for Medal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gold" => Ok(Self::Gold),
            "silver" => Ok(Self::Silver),
            "bronze" => Ok(Self::Bronze),
            other => Err(other.to_string()),
        }
    }
}

/// Medal value as it arrived from the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MedalMark {
    /// A known tier.
    Tier(Medal),
    /// Anything else the feed sent. Rendered without a badge.
    Unrecognized(String),
}

impl MedalMark {
    /// Parse a raw medal value. Blank values mean no medal.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            return None;
        }
        Some(match raw.parse::<Medal>() {
            Ok(medal) => Self::Tier(medal),
            Err(_) => Self::Unrecognized(raw.to_string()),
        })
    }

    /// The recognized tier, if any.
    pub fn tier(&self) -> Option<Medal> {
        match self {
            Self::Tier(medal) => Some(*medal),
            Self::Unrecognized(_) => None,
        }
    }
}

/// A single competition event for an athlete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Event name, e.g. "Women's 200m Final".
    pub label: String,
    /// ISO-8601 date-time as sent by the feed.
    pub datetime: Option<String>,
    /// Result text, present once the event is done.
    pub result: Option<String>,
    /// Medal, if one was awarded.
    pub medal: Option<MedalMark>,
}

impl Event {
    /// Create an upcoming event with no date.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            datetime: None,
            result: None,
            medal: None,
        }
    }

    pub fn at(mut self, datetime: impl Into<String>) -> Self {
        self.datetime = Some(datetime.into());
        self
    }

    pub fn with_result(mut self, result: impl Into<String>) -> Self {
        self.result = Some(result.into());
        self
    }

    pub fn with_medal(mut self, medal: &str) -> Self {
        self.medal = MedalMark::parse(medal);
        self
    }

    /// An event is completed once it has a non-blank result.
    ///
    /// A medal alone does not complete an event.
    pub fn is_completed(&self) -> bool {
        self.result
            .as_deref()
            .is_some_and(|result| !result.trim().is_empty())
    }

    /// The recognized medal tier, if any.
    pub fn medal_tier(&self) -> Option<Medal> {
        self.medal.as_ref().and_then(MedalMark::tier)
    }
}

/// An athlete being followed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Athlete {
    pub name: String,
    pub sport: String,
    /// Age as display text; the feed sends either a number or a string.
    pub age: String,
    /// Headshot image URL.
    pub headshot: String,
    /// How the athlete is connected to the community following them.
    pub vt_connection: String,
    /// Events in feed order.
    pub events: Vec<Event>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_medal_parse_is_case_insensitive() {
        assert_eq!(MedalMark::parse(" Gold "), Some(MedalMark::Tier(Medal::Gold)));
        assert_eq!(MedalMark::parse("SILVER"), Some(MedalMark::Tier(Medal::Silver)));
        assert_eq!(MedalMark::parse("bronze"), Some(MedalMark::Tier(Medal::Bronze)));
    }

    #[test]
    fn test_medal_parse_unrecognized_and_blank() {
        assert_eq!(
            MedalMark::parse("platinum"),
            Some(MedalMark::Unrecognized("platinum".to_string()))
        );
        assert_eq!(MedalMark::parse("   "), None);
        assert_eq!(MedalMark::parse("platinum").and_then(|m| m.tier()), None);
    }

    #[test]
    fn test_completion_requires_result() {
        assert!(!Event::new("Heat").is_completed());
        assert!(!Event::new("Heat").with_result("  ").is_completed());
        assert!(!Event::new("Final").with_medal("gold").is_completed());
        assert!(Event::new("Final").with_result("4th").is_completed());
    }

    #[test]
    fn test_medal_display_and_key() {
        assert_eq!(Medal::Silver.to_string(), "Silver");
        assert_eq!(Medal::Silver.key(), "silver");
    }
}
