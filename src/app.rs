//! Main application module.
//!
//! This module contains the `App` struct that owns the poll state and the
//! mount, runs poll cycles and applies their outcomes.

use crate::api::PayloadSource;
use crate::error::Result;
use crate::scheduler::Scheduler;
use crate::state::{Action, DisplayState, Effect, KeepReason, Payload, PollState, Ticket};
use crate::ui::{Mount, Ui};

use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;

/// The main application.
pub struct App<S, M> {
    /// Payload source, shared with in-flight fetch tasks.
    source: Arc<S>,
    /// Output surface.
    mount: M,
    /// HTML renderer.
    ui: Ui,
    /// Poll state.
    state: PollState,
    /// Action sender, cloned into the scheduler and fetch tasks.
    action_tx: mpsc::UnboundedSender<Action>,
    /// Action receiver.
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl<S, M> App<S, M>
where
    S: PayloadSource + 'static,
    M: Mount,
{
    /// Create a new application.
    pub fn new(source: S, mount: M, ui: Ui) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Self {
            source: Arc::new(source),
            mount,
            ui,
            state: PollState::new(),
            action_tx,
            action_rx,
        }
    }

    pub fn state(&self) -> &PollState {
        &self.state
    }

    pub fn mount(&self) -> &M {
        &self.mount
    }

    /// Run until Ctrl-C.
    pub async fn run(&mut self) -> Result<()> {
        self.run_until(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for Ctrl-C: {}", e);
                std::future::pending::<()>().await;
            }
        })
        .await
    }

    /// Run the poll loop until `shutdown` resolves.
    pub async fn run_until<F>(&mut self, shutdown: F) -> Result<()>
    where
        F: Future + Send + 'static,
    {
        self.show(DisplayState::Loading);

        let scheduler = Scheduler::new(self.action_tx.clone()).start(shutdown);

        while let Some(action) = self.action_rx.recv().await {
            match action {
                Action::Poll => self.issue_poll(),
                Action::PollCompleted { ticket, outcome } => self.apply(ticket, outcome),
                Action::Quit => {
                    tracing::info!("Shutting down");
                    break;
                }
            }
        }

        scheduler.abort();
        Ok(())
    }

    /// Start a poll cycle in the background.
    ///
    /// Cycles are not serialized; a slow fetch may overlap the next one.
    fn issue_poll(&mut self) {
        let ticket = self.state.begin();
        let source = Arc::clone(&self.source);
        let action_tx = self.action_tx.clone();

        tracing::debug!(ticket = ticket.0, "Issuing poll");
        tokio::spawn(async move {
            let outcome = source.fetch().await;
            if action_tx
                .send(Action::PollCompleted { ticket, outcome })
                .is_err()
            {
                tracing::debug!(ticket = ticket.0, "App stopped before poll completed");
            }
        });
    }

    /// Run one poll cycle inline and apply its outcome.
    pub async fn poll_once(&mut self) {
        let ticket = self.state.begin();
        let outcome = self.source.fetch().await;
        self.apply(ticket, outcome);
    }

    /// Apply a poll outcome and update the mount accordingly.
    pub fn apply(&mut self, ticket: Ticket, outcome: Result<Payload>) {
        match self.state.apply(ticket, outcome) {
            Effect::Render(payload) => {
                tracing::info!(
                    version = %payload.version,
                    athletes = payload.athletes.len(),
                    "Rendering new version"
                );
                let html = self.ui.render_all(&payload);
                self.write(&html);
            }
            Effect::Show(state) => {
                tracing::error!(state = state.kind(), "Poll failed before first render");
                self.show(state);
            }
            Effect::Keep(KeepReason::Unchanged(version)) => {
                tracing::debug!(%version, "Version unchanged, skipping render");
            }
            Effect::Keep(KeepReason::Stale { ticket, applied }) => {
                tracing::debug!(
                    ticket = ticket.0,
                    applied = applied.0,
                    "Discarding stale poll response"
                );
            }
            Effect::Keep(KeepReason::Degraded(err)) if err.is_poll_failure() => {
                tracing::warn!("Poll failed, keeping last rendered view: {}", err);
            }
            Effect::Keep(KeepReason::Degraded(err)) => {
                tracing::error!("Unexpected poll error, keeping last rendered view: {}", err);
            }
        }
    }

    fn show(&mut self, state: DisplayState) {
        let html = self.ui.render_state(state);
        self.write(&html);
    }

    fn write(&mut self, html: &str) {
        if let Err(e) = self.mount.replace(html) {
            tracing::error!("Failed to write mount: {}", e);
        }
    }
}
