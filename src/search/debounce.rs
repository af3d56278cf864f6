//! Trailing-edge debounce primitive
//!
//! Holds a rapidly changing value and propagates it only after a fixed
//! quiet period with no further input. A new value inside the quiet
//! period cancels the pending propagation and restarts the timer, so at
//! most one value per quiet interval comes out, always the most recent.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{self, Instant};

/// Debouncer for raw query input
pub struct Debouncer {
    quiet: Duration,
}

impl Debouncer {
    /// Create a debouncer with the given quiet period
    pub fn new(quiet: Duration) -> Self {
        Self { quiet }
    }

    /// Spawn the debounce task. Raw values go into the returned sender;
    /// debounced values come out of the returned receiver. The task
    /// ends when the sender is dropped.
    pub fn spawn(self) -> (mpsc::UnboundedSender<String>, mpsc::UnboundedReceiver<String>) {
        let (raw_tx, mut raw_rx) = mpsc::unbounded_channel::<String>();
        let (out_tx, out_rx) = mpsc::unbounded_channel::<String>();
        let quiet = self.quiet;

        tokio::spawn(async move {
            let timer = time::sleep(Duration::ZERO);
            tokio::pin!(timer);
            let mut pending: Option<String> = None;

            loop {
                tokio::select! {
                    maybe = raw_rx.recv() => match maybe {
                        Some(value) => {
                            pending = Some(value);
                            timer.as_mut().reset(Instant::now() + quiet);
                        }
                        None => break,
                    },
                    () = timer.as_mut(), if pending.is_some() => {
                        if let Some(value) = pending.take() {
                            if out_tx.send(value).is_err() {
                                break;
                            }
                        }
                    }
                }
            }
        });

        (raw_tx, out_rx)
    }
}
