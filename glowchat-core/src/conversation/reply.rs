//! Deferred mock replies

use std::collections::BTreeSet;
use std::fmt;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Identifies the reply owed to one submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReplyTicket(u64);

impl fmt::Display for ReplyTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "reply-{}", self.0)
    }
}

/// Schedules one-shot delayed notifications and cancels them all on shutdown.
///
/// Timer tasks only signal that a ticket is due; the owner of the
/// conversation performs the append. A ticket is handed out at most once,
/// and never after [`ReplyScheduler::cancel_all`].
pub struct ReplyScheduler {
    delay: Duration,
    cancel: CancellationToken,
    due_tx: mpsc::UnboundedSender<ReplyTicket>,
    due_rx: mpsc::UnboundedReceiver<ReplyTicket>,
    pending: BTreeSet<ReplyTicket>,
    next_ticket: u64,
}

impl ReplyScheduler {
    pub fn new(delay: Duration) -> Self {
        let (due_tx, due_rx) = mpsc::unbounded_channel();
        Self {
            delay,
            cancel: CancellationToken::new(),
            due_tx,
            due_rx,
            pending: BTreeSet::new(),
            next_ticket: 0,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Replies scheduled but not yet handed out
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Spawns a timer on the current tokio runtime. Returns `None` once cancelled.
    pub fn schedule(&mut self) -> Option<ReplyTicket> {
        if self.cancel.is_cancelled() {
            return None;
        }

        self.next_ticket += 1;
        let ticket = ReplyTicket(self.next_ticket);
        self.pending.insert(ticket);

        let token = self.cancel.child_token();
        let tx = self.due_tx.clone();
        let delay = self.delay;
        let deadline = Instant::now() + delay;
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    debug!(%ticket, "Deferred reply cancelled");
                }
                _ = tokio::time::sleep_until(deadline) => {
                    let _ = tx.send(ticket);
                }
            }
        });

        debug!(%ticket, delay_ms = delay.as_millis() as u64, "Deferred reply scheduled");
        Some(ticket)
    }

    /// Waits for the next due ticket. `None` when nothing is pending.
    pub async fn next_due(&mut self) -> Option<ReplyTicket> {
        while !self.pending.is_empty() {
            let ticket = self.due_rx.recv().await?;
            if self.pending.remove(&ticket) {
                return Some(ticket);
            }
        }
        None
    }

    /// Non-blocking variant of [`ReplyScheduler::next_due`]
    pub fn try_next_due(&mut self) -> Option<ReplyTicket> {
        while let Ok(ticket) = self.due_rx.try_recv() {
            if self.pending.remove(&ticket) {
                return Some(ticket);
            }
        }
        None
    }

    /// Cancels every outstanding timer and discards tickets already in flight
    pub fn cancel_all(&mut self) {
        if self.cancel.is_cancelled() {
            return;
        }

        let outstanding = self.pending.len();
        self.cancel.cancel();
        self.pending.clear();
        while self.due_rx.try_recv().is_ok() {}
        info!(outstanding, "Deferred replies cancelled");
    }
}

impl Drop for ReplyScheduler {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
