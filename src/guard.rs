//! Single-flight lock over navigation transitions.
//!
//! Each navigation change plays a fixed-length animation. While it runs, further requests are
//! dropped (not queued). The owner schedules [`TimerEvent::TransitionEnd`] for `duration()` after
//! a successful [`TransitionGuard::try_begin`] and calls [`TransitionGuard::end`] when it arrives.
//! There is no way to abort a transition early.
//!
//! [`TimerEvent::TransitionEnd`]: crate::timeline::TimerEvent::TransitionEnd

use std::time::Duration;

/// Length of the reference section/subsection slide animation.
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(300);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// At-most-one-in-flight transition lock.
pub struct TransitionGuard {
    in_flight: bool,
    duration: Duration,
}

impl TransitionGuard {
    #[must_use]
    /// An idle guard whose transitions last `duration`.
    pub fn new(duration: Duration) -> Self {
        Self {
            in_flight: false,
            duration,
        }
    }

    /// Marks a transition as started. Returns `false`, changing nothing, if one is running.
    pub fn try_begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    /// Clears the in-flight flag once the transition's duration has elapsed.
    pub fn end(&mut self) {
        self.in_flight = false;
    }

    #[must_use]
    /// Whether a transition is currently running.
    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    #[must_use]
    /// How long each transition holds the guard.
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl Default for TransitionGuard {
    fn default() -> Self {
        Self::new(DEFAULT_TRANSITION)
    }
}

#[cfg(test)]
#[path = "tests/guard.rs"]
mod tests;
