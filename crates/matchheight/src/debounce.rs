//! Trailing/leading-edge debounce as a poll-driven timer.
//!
//! The host event loop supplies time: each call re-arms the deadline, and
//! [`Debounced::poll`] reports when the wrapped work should run. Holding a
//! payload rather than a closure keeps the instance free of borrow
//! entanglement with the tree it ultimately operates on.

use std::time::{Duration, Instant};

/// A debounced trigger around a unit of work carrying `Args`.
///
/// Trailing mode (the default) invokes once per burst, after `wait` of
/// quiescence, with the payload of the most recent call. Leading mode
/// invokes at the first call of a burst and suppresses the trailing edge;
/// the deadline is still cleared when it elapses so the next call starts a
/// fresh burst.
#[derive(Debug)]
pub struct Debounced<Args> {
    wait: Duration,
    immediate: bool,
    deadline: Option<Instant>,
    pending: Option<Args>,
}

impl<Args> Debounced<Args> {
    /// Trailing-edge debounce: invoke after `wait` of quiet.
    pub const fn new(wait: Duration) -> Self {
        Self {
            wait,
            immediate: false,
            deadline: None,
            pending: None,
        }
    }

    /// Leading-edge debounce: invoke at the first call of a burst.
    pub const fn leading(wait: Duration) -> Self {
        Self {
            wait,
            immediate: true,
            deadline: None,
            pending: None,
        }
    }

    /// Record a call at `now`, re-arming the deadline to `now + wait`.
    ///
    /// Returns `Some(args)` exactly when the payload should be invoked right
    /// now (leading mode, no timer pending). Otherwise the payload replaces
    /// any stored one (trailing mode) or is dropped (leading mode) —
    /// intermediate calls within a burst only reset the wait.
    pub fn call(&mut self, args: Args, now: Instant) -> Option<Args> {
        let call_now = self.immediate && self.deadline.is_none();
        // Cancel-and-re-arm is one step; nothing can observe the gap on a
        // single event thread.
        self.deadline = Some(now + self.wait);
        if call_now {
            return Some(args);
        }
        if !self.immediate {
            self.pending = Some(args);
        }
        None
    }

    /// Check the timer at `now`.
    ///
    /// When the deadline has elapsed it is cleared unconditionally; the
    /// stored payload is handed back for invocation only in trailing mode.
    /// Leading mode clears silently, ending the burst.
    pub fn poll(&mut self, now: Instant) -> Option<Args> {
        let due = self.deadline.is_some_and(|deadline| now >= deadline);
        if !due {
            return None;
        }
        self.deadline = None;
        if self.immediate {
            self.pending = None;
            return None;
        }
        self.pending.take()
    }

    /// True while a burst's timer is armed.
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// The instant the current burst's timer elapses, if armed.
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}
