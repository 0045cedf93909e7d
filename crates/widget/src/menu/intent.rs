//! Hover intent.
use crate::core::time::{Duration, Instant};

/// A cancellable close deadline.
///
/// At most one deadline is pending at any time: scheduling a new one
/// discards the previous deadline, so a stale close can never fire after a
/// later open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CloseTimer {
    deadline: Option<Instant>,
}

impl CloseTimer {
    /// Creates an idle [`CloseTimer`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules a close `delay` after `now`, replacing any pending one.
    ///
    /// Returns the new deadline.
    pub fn schedule(&mut self, now: Instant, delay: Duration) -> Instant {
        let deadline = now + delay;
        self.deadline = Some(deadline);

        deadline
    }

    /// Cancels the pending close, if any.
    ///
    /// Returns `true` if a close was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    /// Returns `true` if a close is pending.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns the pending deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Fires the timer if its deadline has passed at `now`.
    ///
    /// Returns `true` exactly once per expired deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
