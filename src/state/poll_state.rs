//! Poll cycle state machine.
//!
//! Replaces the "last version" and "has rendered" flags with one record that
//! every poll outcome is applied to. Applying an outcome yields an [`Effect`]
//! telling the caller what, if anything, to write to the mount.

use super::{DisplayState, Payload, Version};
use crate::error::Error;

/// Whether anything has been rendered yet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing rendered; failures are shown to the user.
    #[default]
    Uninitialized,
    /// Cards for this version are on screen; failures are swallowed.
    Loaded(Version),
}

/// Sequence number handed out when a poll cycle is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(pub u64);

/// What the caller should do with the mount after an outcome is applied.
#[derive(Debug)]
pub enum Effect {
    /// Replace the mount with cards for this payload.
    Render(Payload),
    /// Replace the mount with a status message.
    Show(DisplayState),
    /// Leave the mount untouched.
    Keep(KeepReason),
}

/// Why a poll outcome left the mount untouched.
#[derive(Debug)]
pub enum KeepReason {
    /// A newer cycle has already been applied.
    Stale { ticket: Ticket, applied: Ticket },
    /// Same version as what is on screen.
    Unchanged(Version),
    /// The cycle failed after a successful render.
    Degraded(Error),
}

/// State carried across poll cycles.
#[derive(Debug, Default)]
pub struct PollState {
    phase: Phase,
    issued: u64,
    applied: u64,
}

impl PollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Whether cards have been rendered at least once.
    pub fn has_rendered(&self) -> bool {
        matches!(self.phase, Phase::Loaded(_))
    }

    /// The version currently on screen.
    pub fn current_version(&self) -> Option<&Version> {
        match &self.phase {
            Phase::Uninitialized => None,
            Phase::Loaded(version) => Some(version),
        }
    }

    /// Issue a ticket for a new poll cycle.
    pub fn begin(&mut self) -> Ticket {
        self.issued += 1;
        Ticket(self.issued)
    }

    /// Apply the outcome of the cycle holding `ticket`.
    ///
    /// Outcomes from cycles older than the newest applied one are discarded,
    /// so overlapping requests resolve to the most recently issued response.
    pub fn apply(&mut self, ticket: Ticket, outcome: crate::Result<Payload>) -> Effect {
        if ticket.0 <= self.applied {
            return Effect::Keep(KeepReason::Stale {
                ticket,
                applied: Ticket(self.applied),
            });
        }
        self.applied = ticket.0;

        let outcome = outcome.and_then(|payload| {
            if payload.is_empty() {
                Err(Error::EmptyData)
            } else {
                Ok(payload)
            }
        });

        match outcome {
            Ok(payload) => {
                if self.current_version() == Some(&payload.version) {
                    return Effect::Keep(KeepReason::Unchanged(payload.version));
                }
                self.phase = Phase::Loaded(payload.version.clone());
                Effect::Render(payload)
            }
            Err(err) if self.has_rendered() => Effect::Keep(KeepReason::Degraded(err)),
            Err(err) => Effect::Show(DisplayState::for_error(&err)),
        }
    }
}
