//! Poll scheduling.
//!
//! Sends [`Action::Poll`] once at startup and then every [`POLL_INTERVAL`],
//! and [`Action::Quit`] when the shutdown signal fires.

use crate::state::Action;
use std::future::Future;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

/// Time between poll cycles.
pub const POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Drives poll cycles on a fixed interval.
pub struct Scheduler {
    /// Action sender.
    action_tx: mpsc::UnboundedSender<Action>,
    /// Interval between polls.
    interval: Duration,
}

impl Scheduler {
    /// Create a scheduler polling every [`POLL_INTERVAL`].
    pub fn new(action_tx: mpsc::UnboundedSender<Action>) -> Self {
        Self {
            action_tx,
            interval: POLL_INTERVAL,
        }
    }

    /// Start ticking until `shutdown` resolves or the receiver goes away.
    pub fn start<F>(self, shutdown: F) -> tokio::task::JoinHandle<()>
    where
        F: Future + Send + 'static,
    {
        let action_tx = self.action_tx;
        let period = self.interval;

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            tokio::pin!(shutdown);

            loop {
                let action = tokio::select! {
                    _ = ticker.tick() => Action::Poll,
                    _ = &mut shutdown => {
                        let _ = action_tx.send(Action::Quit);
                        break;
                    }
                };

                if action_tx.send(action).is_err() {
                    break;
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_polls_immediately_then_every_interval() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let handle = Scheduler::new(tx).start(tokio::time::sleep(Duration::from_secs(150)));

        let mut polls = 0;
        while let Some(action) = rx.recv().await {
            match action {
                Action::Poll => polls += 1,
                Action::Quit => break,
                other => panic!("unexpected action {:?}", other),
            }
        }
        handle.await.unwrap();

        // t = 0, 60, 120
        assert_eq!(polls, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stops_when_receiver_dropped() {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = Scheduler::new(tx).start(std::future::pending::<()>());
        drop(rx);

        tokio_test::assert_ok!(handle.await);
    }
}
