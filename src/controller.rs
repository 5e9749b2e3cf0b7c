//! The navigation state machine: which section and subsection are active.
//!
//! The controller is the only owner of the active `(section, subsection)` pair. Every change goes
//! through the [`TransitionGuard`], so at most one transition is ever in flight and all observable
//! changes are serialised. Section changes always land on subsection 0 in the same assignment.
//!
//! ```text
//!            go_to_section(i), i != active        TransitionEnd
//!   Idle(s, k) ─────────────────────────────▶ InFlight(i, 0) ──────────▶ Idle(i, 0)
//!      │                                          │
//!      │ go_to_subsection(j), j != k              │ any request
//!      ▼                                          ▼
//!   InFlight(s, j)                             dropped (Suppressed)
//! ```
//!
//! Arrow keys are routed by [`NavigationController::granularity`], which is re-read on every key
//! press: a section with subsections steps through them, a section without steps sections.

use crate::error::NavError;
use crate::guard::TransitionGuard;
use crate::index::NavigationIndex;
use crate::timeline::{TimerEvent, Timeline};
use serde::Serialize;
use std::rc::Rc;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
/// Snapshot of the mutable navigation state.
///
/// The menu window's start is owned by the modal's [`MenuWindow`], not the controller, and is
/// reported alongside this state as [`RenderState::visible_menu`].
///
/// [`MenuWindow`]: crate::menu::MenuWindow
/// [`RenderState::visible_menu`]: crate::modal::RenderState::visible_menu
pub struct NavigationState {
    /// Index of the active section.
    pub active_section: usize,
    /// Index of the active subsection (0 when the section has none).
    pub active_subsection: usize,
    /// Whether a transition animation is still holding the guard.
    pub transition_in_flight: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Outcome of a legal request to the controller or the modal.
pub enum Navigation {
    /// State changed and a transition began.
    Applied,
    /// The target is already active, or the request had nothing to do; nothing happened.
    AlreadyActive,
    /// A transition is in flight; the request was dropped.
    Suppressed,
    /// The modal is closed, so there is nothing to navigate.
    Closed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A left/right arrow press.
pub enum Arrow {
    /// Step backwards.
    Left,
    /// Step forwards.
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// The level arrow keys currently move at.
pub enum Granularity {
    /// The active section has subsections; arrows cycle through them.
    Subsection,
    /// The active section has none; arrows cycle sections.
    Section,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Position {
    section: usize,
    subsection: usize,
}

#[derive(Debug)]
/// Owns the active position and serialises changes to it through a transition guard.
pub struct NavigationController {
    index: Rc<NavigationIndex>,
    position: Position,
    guard: TransitionGuard,
}

impl NavigationController {
    #[must_use]
    /// A controller at section 0, subsection 0, with transitions lasting `transition`.
    pub fn new(index: Rc<NavigationIndex>, transition: Duration) -> Self {
        Self {
            index,
            position: Position {
                section: 0,
                subsection: 0,
            },
            guard: TransitionGuard::new(transition),
        }
    }

    #[must_use]
    /// The taxonomy being navigated.
    pub fn index(&self) -> &NavigationIndex {
        &self.index
    }

    #[must_use]
    /// Current state as one consistent snapshot.
    pub fn state(&self) -> NavigationState {
        NavigationState {
            active_section: self.position.section,
            active_subsection: self.position.subsection,
            transition_in_flight: self.guard.in_flight(),
        }
    }

    #[must_use]
    /// Index of the active section.
    pub fn active_section(&self) -> usize {
        self.position.section
    }

    #[must_use]
    /// Index of the active subsection.
    pub fn active_subsection(&self) -> usize {
        self.position.subsection
    }

    #[must_use]
    /// Whether a transition is still running.
    pub fn in_flight(&self) -> bool {
        self.guard.in_flight()
    }

    /// Makes section `section` active with its first subsection.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::SectionOutOfRange`] for an invalid index; state is left unchanged.
    pub fn go_to_section(
        &mut self,
        section: usize,
        timeline: &mut Timeline,
    ) -> Result<Navigation, NavError> {
        self.index.section(section)?;
        if section == self.position.section {
            return Ok(Navigation::AlreadyActive);
        }
        if !self.begin(timeline) {
            tracing::trace!(section, "section change dropped, transition in flight");
            return Ok(Navigation::Suppressed);
        }
        self.position = Position {
            section,
            subsection: 0,
        };
        tracing::debug!(section, "section changed");
        Ok(Navigation::Applied)
    }

    /// Moves to the following section, wrapping from the last to the first.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the target is always in range.
    pub fn next_section(&mut self, timeline: &mut Timeline) -> Result<Navigation, NavError> {
        let count = self.index.section_count();
        self.go_to_section((self.position.section + 1) % count, timeline)
    }

    /// Moves to the preceding section, wrapping from the first to the last.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the target is always in range.
    pub fn prev_section(&mut self, timeline: &mut Timeline) -> Result<Navigation, NavError> {
        let count = self.index.section_count();
        self.go_to_section((self.position.section + count - 1) % count, timeline)
    }

    /// Makes subsection `subsection` of the active section active.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::SubsectionOutOfRange`] for an invalid index; state is left unchanged.
    pub fn go_to_subsection(
        &mut self,
        subsection: usize,
        timeline: &mut Timeline,
    ) -> Result<Navigation, NavError> {
        let section = self.position.section;
        self.index.subsection_label(section, subsection)?;
        if subsection == self.position.subsection {
            return Ok(Navigation::AlreadyActive);
        }
        if !self.begin(timeline) {
            tracing::trace!(subsection, "subsection change dropped, transition in flight");
            return Ok(Navigation::Suppressed);
        }
        self.position.subsection = subsection;
        tracing::debug!(section, subsection, "subsection changed");
        Ok(Navigation::Applied)
    }

    /// Moves to the following subsection of the active section, wrapping around.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::NoSubsections`] if the active section has no subsections.
    pub fn next_subsection(&mut self, timeline: &mut Timeline) -> Result<Navigation, NavError> {
        let count = self.subsections_to_step()?;
        self.go_to_subsection((self.position.subsection + 1) % count, timeline)
    }

    /// Moves to the preceding subsection of the active section, wrapping around.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::NoSubsections`] if the active section has no subsections.
    pub fn prev_subsection(&mut self, timeline: &mut Timeline) -> Result<Navigation, NavError> {
        let count = self.subsections_to_step()?;
        self.go_to_subsection((self.position.subsection + count - 1) % count, timeline)
    }

    #[must_use]
    /// Level the arrow keys act on for the section that is active right now.
    pub fn granularity(&self) -> Granularity {
        match self.index.section(self.position.section) {
            Ok(section) if section.has_subsections() => Granularity::Subsection,
            _ => Granularity::Section,
        }
    }

    /// Routes a left/right arrow press to subsection or section stepping.
    ///
    /// # Errors
    ///
    /// Propagates errors from the routed operation, which the routing itself rules out.
    pub fn on_arrow(
        &mut self,
        arrow: Arrow,
        timeline: &mut Timeline,
    ) -> Result<Navigation, NavError> {
        match (self.granularity(), arrow) {
            (Granularity::Subsection, Arrow::Left) => self.prev_subsection(timeline),
            (Granularity::Subsection, Arrow::Right) => self.next_subsection(timeline),
            (Granularity::Section, Arrow::Left) => self.prev_section(timeline),
            (Granularity::Section, Arrow::Right) => self.next_section(timeline),
        }
    }

    /// Releases the guard. Called when [`TimerEvent::TransitionEnd`] is delivered.
    pub fn end_transition(&mut self) {
        self.guard.end();
    }

    fn begin(&mut self, timeline: &mut Timeline) -> bool {
        if !self.guard.try_begin() {
            return false;
        }
        timeline.schedule(self.guard.duration(), TimerEvent::TransitionEnd);
        true
    }

    fn subsections_to_step(&self) -> Result<usize, NavError> {
        let section = self.position.section;
        match self.index.subsection_count(section)? {
            0 => Err(NavError::NoSubsections { section }),
            n => Ok(n),
        }
    }
}

#[cfg(test)]
#[path = "tests/controller.rs"]
mod tests;
