//! Virtual clock and scheduled completion events.
//!
//! Transitions end on a timer. Rather than firing callbacks from a wall-clock timer, completions
//! are queued here against a virtual `now` and handed back to the owner when time is advanced.
//! The owner delivers them through the same event path as user input, so ordering between a
//! completion and a keypress is explicit, and tests step time deterministically.

use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Completion events a session schedules for itself.
pub enum TimerEvent {
    /// The section/subsection change animation has finished.
    TransitionEnd,
    /// The opening expansion from the anchor rectangle has finished.
    ExpansionEnd,
}

#[derive(Clone, Copy, Debug)]
struct Scheduled {
    due: Duration,
    seq: u64,
    event: TimerEvent,
}

#[derive(Debug, Default)]
/// Virtual time plus the queue of pending timer events.
pub struct Timeline {
    now: Duration,
    seq: u64,
    pending: Vec<Scheduled>,
}

impl Timeline {
    #[must_use]
    /// A timeline at time zero with nothing scheduled.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    /// Current virtual time since the timeline was created.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Queues `event` to fire `after` from now.
    pub fn schedule(&mut self, after: Duration, event: TimerEvent) {
        self.seq += 1;
        self.pending.push(Scheduled {
            due: self.now + after,
            seq: self.seq,
            event,
        });
    }

    /// Moves time forward by `by`, returning the events now due.
    ///
    /// Events come back in deadline order; events sharing a deadline keep scheduling order.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerEvent> {
        self.now += by;
        let now = self.now;
        let (mut due, rest): (Vec<_>, Vec<_>) = self.pending.drain(..).partition(|s| s.due <= now);
        self.pending = rest;
        due.sort_by_key(|s| (s.due, s.seq));
        due.into_iter().map(|s| s.event).collect()
    }

    #[must_use]
    /// Time remaining until the earliest pending event, if any.
    pub fn next_due(&self) -> Option<Duration> {
        self.pending
            .iter()
            .map(|s| s.due.saturating_sub(self.now))
            .min()
    }

    #[must_use]
    /// Number of events still waiting.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Drops every pending event. Virtual time is kept.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
#[path = "tests/timeline.rs"]
mod tests;
