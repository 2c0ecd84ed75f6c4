//! Validation of raw feed JSON into state types.

use crate::error::{Error, Result};
use crate::state::{Athlete, Event, MedalMark, Payload, Version};
use serde::Deserialize;

/// Converts raw feed responses to internal state types.
pub struct DataConverter;

/// Text field the spreadsheet may emit as either a string or a number.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireText {
    Text(String),
    Number(serde_json::Number),
}

impl WireText {
    fn into_string(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(number) => number.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct WirePayload {
    version: Option<Version>,
    athletes: Option<Vec<WireAthlete>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireAthlete {
    name: String,
    sport: Option<String>,
    age: Option<WireText>,
    headshot: Option<String>,
    vt_connection: Option<String>,
    events: Option<Vec<WireEvent>>,
}

#[derive(Debug, Deserialize)]
struct WireEvent {
    label: String,
    datetime: Option<String>,
    result: Option<WireText>,
    medal: Option<String>,
}

impl DataConverter {
    /// Parse and validate a response body.
    ///
    /// Shape violations are [`Error::Parse`]; a well-formed payload with no
    /// athletes is [`Error::EmptyData`].
    pub fn parse_payload(body: &str) -> Result<Payload> {
        let value: serde_json::Value = serde_json::from_str(body)?;
        if !value.is_object() {
            return Err(Error::parse("payload is not a JSON object"));
        }
        let wire: WirePayload = serde_json::from_value(value)?;

        let version = wire
            .version
            .ok_or_else(|| Error::parse("payload has no version"))?;

        let athletes: Vec<Athlete> = wire
            .athletes
            .unwrap_or_default()
            .into_iter()
            .map(Self::convert_athlete)
            .collect();

        if athletes.is_empty() {
            return Err(Error::EmptyData);
        }

        Ok(Payload { version, athletes })
    }

    fn convert_athlete(athlete: WireAthlete) -> Athlete {
        Athlete {
            name: athlete.name,
            sport: athlete.sport.unwrap_or_default(),
            age: athlete.age.map(WireText::into_string).unwrap_or_default(),
            headshot: athlete.headshot.unwrap_or_default(),
            vt_connection: athlete.vt_connection.unwrap_or_default(),
            events: athlete
                .events
                .unwrap_or_default()
                .into_iter()
                .map(Self::convert_event)
                .collect(),
        }
    }

    fn convert_event(event: WireEvent) -> Event {
        Event {
            label: event.label,
            datetime: event.datetime.filter(|d| !d.trim().is_empty()),
            result: event
                .result
                .map(WireText::into_string)
                .filter(|r| !r.trim().is_empty()),
            medal: event.medal.as_deref().and_then(MedalMark::parse),
        }
    }
}
