//! State management for medalwatch.
//!
//! Holds the domain types built from each payload and the poll state
//! machine. The app loop is the only writer: poll outcomes arrive as
//! [`Action`]s and are applied one at a time.

mod athlete_state;
mod classifier;
mod event_time;
mod payload_state;
mod poll_state;

pub use athlete_state::{Athlete, Event, Medal, MedalMark};
pub use classifier::{ClassifiedEvent, classify};
pub use event_time::{DISPLAY_TZ, EventTime, parse_event_time};
pub use payload_state::{Payload, Version};
pub use poll_state::{Effect, KeepReason, Phase, PollState, Ticket};

use crate::error::Error;

/// Actions processed by the app loop.
#[derive(Debug)]
pub enum Action {
    /// Start a new poll cycle.
    Poll,
    /// A poll cycle finished.
    PollCompleted {
        ticket: Ticket,
        outcome: crate::Result<Payload>,
    },
    /// Stop the loop.
    Quit,
}

/// Status messages that replace the whole mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    Loading,
    Empty,
    Unavailable,
}

impl DisplayState {
    /// The message shown for a failed cycle before anything has rendered.
    pub fn for_error(err: &Error) -> Self {
        match err {
            Error::EmptyData => Self::Empty,
            _ => Self::Unavailable,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Loading => "Loading athlete results…",
            Self::Empty => "No athlete data available.",
            Self::Unavailable => "Results are temporarily unavailable.",
        }
    }

    /// CSS modifier class.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Empty => "empty",
            Self::Unavailable => "error",
        }
    }
}
