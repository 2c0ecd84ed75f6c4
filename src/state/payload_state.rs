//! Payload state: one validated poll response.

use super::Athlete;
use serde::{Deserialize, Serialize};

/// Opaque version token used only for change detection.
///
/// Text and numeric tokens never compare equal, so `"1"` and `1` differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Version {
    Text(String),
    Number(serde_json::Number),
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{:?}", text),
            Self::Number(number) => write!(f, "{}", number),
        }
    }
}

impl From<&str> for Version {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<u64> for Version {
    fn from(number: u64) -> Self {
        Self::Number(number.into())
    }
}

/// A validated payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    pub version: Version,
    pub athletes: Vec<Athlete>,
}

impl Payload {
    pub fn new(version: impl Into<Version>, athletes: Vec<Athlete>) -> Self {
        Self {
            version: version.into(),
            athletes,
        }
    }

    /// Whether there is nothing to render.
    pub fn is_empty(&self) -> bool {
        self.athletes.is_empty()
    }
}
