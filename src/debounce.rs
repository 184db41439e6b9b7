//! Debounce state machine.
//!
//! A [`Debouncer`] holds at most one pending value. Every [`push`] replaces
//! the value and moves the deadline to `now + quiet`; [`poll`] releases the
//! value once the clock has reached the deadline. Nothing bounds the total
//! wait, so a steady stream of pushes defers delivery indefinitely.
//!
//! Time is passed in as a [`Duration`] measured from any fixed origin, which
//! keeps the machine independent of the clock source (the browser uses
//! `Date.now()`, tests use a simulated clock).
//!
//! A timer that fires a little ahead of the clock can ask for the
//! [`remaining`] time and wait again.
//!
//! [`push`]: Debouncer::push
//! [`poll`]: Debouncer::poll
//! [`remaining`]: Debouncer::remaining

use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Eq)]
struct Pending<T> {
    value: T,
    deadline: Duration,
}

/// Coalesces rapid successive values into one delivery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Debouncer<T> {
    quiet: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet
    }

    /// Replace the pending value and restart the quiet period.
    pub fn push(&mut self, value: T, now: Duration) {
        let deadline = now.saturating_add(self.quiet);
        log::trace!("debounce re-armed, deadline at {:?}", deadline);
        self.pending = Some(Pending { value, deadline });
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    fn deadline(&self) -> Option<Duration> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Time left until the pending value is due. Zero once due.
    pub fn remaining(&self, now: Duration) -> Option<Duration> {
        self.deadline().map(|d| d.saturating_sub(now))
    }

    /// Take the pending value if its quiet period has elapsed.
    pub fn poll(&mut self, now: Duration) -> Option<T> {
        match &self.pending {
            Some(p) if now >= p.deadline => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// Drop the pending value without delivering it.
    pub fn cancel(&mut self) -> Option<T> {
        let dropped = self.pending.take().map(|p| p.value);
        if dropped.is_some() {
            log::trace!("debounce cancelled with a pending value");
        }
        dropped
    }
}
