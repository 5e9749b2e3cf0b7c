//! The case-study modal: one navigation session wired to its collaborators.
//!
//! The modal owns the taxonomy, the menu window, the opening anchor and the virtual timeline, and
//! holds a [`NavigationController`] only while it is open. Closing discards the controller, so a
//! reopened modal always starts at section 0, subsection 0, with the menu at its left edge.
//!
//! Input and timer completions arrive as [`Event`]s through [`CaseStudyModal::dispatch`], or via
//! the `on_*` methods directly. Between events the host moves virtual time forward with
//! [`CaseStudyModal::advance`], which delivers whatever completions have come due.
//!
//! Both page layouts of the original site are the same machine: [`Presentation::Modal`] is the
//! overlay with a five-wide menu and subsection tabs, [`Presentation::Carousel`] the full-page
//! variant that steps sections only and shows every menu entry.

use crate::anchor::{Appearance, ExpansionAnchor, Rect};
use crate::controller::{Arrow, Granularity, Navigation, NavigationController};
use crate::error::NavError;
use crate::index::NavigationIndex;
use crate::menu::MenuWindow;
use crate::scroll::{NoScrollLock, ScrollLock};
use crate::timeline::{TimerEvent, Timeline};
use serde::Serialize;
use std::ops::Range;
use std::rc::Rc;
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Which page layout the session drives.
pub enum Presentation {
    #[default]
    /// Overlay modal with windowed menu, subsection tabs and anchored expansion.
    Modal,
    /// Full-page carousel over sections only, every menu entry visible.
    Carousel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Tunables for a session, normally taken from [`Config`](crate::config::Config).
pub struct ModalOptions {
    /// Menu entries shown at once in the modal layout.
    pub visible_menu_items: usize,
    /// How long each navigation transition holds the guard.
    pub transition: Duration,
    /// How long the anchored opening takes.
    pub expansion: Duration,
    /// Layout variant.
    pub presentation: Presentation,
}

impl Default for ModalOptions {
    fn default() -> Self {
        Self {
            visible_menu_items: crate::menu::DEFAULT_VISIBLE,
            transition: crate::guard::DEFAULT_TRANSITION,
            expansion: crate::anchor::DEFAULT_EXPANSION,
            presentation: Presentation::Modal,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Everything the presentation layer can ask the engine to do.
pub enum Input {
    /// Open the modal, optionally growing out of the trigger's rectangle.
    Open(Option<Rect>),
    /// Close the modal.
    Close,
    /// Escape key; closes at either granularity.
    Escape,
    /// Menu entry clicked.
    SelectSection(usize),
    /// Subsection tab clicked.
    SelectSubsection(usize),
    /// Left arrow key.
    ArrowLeft,
    /// Right arrow key.
    ArrowRight,
    /// "Previous" button.
    PrevSection,
    /// "Next" button.
    NextSection,
    /// Menu paging arrow pointing right.
    PageMenuForward,
    /// Menu paging arrow pointing left.
    PageMenuBackward,
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// A user input or a scheduled completion, delivered through one queue.
pub enum Event {
    /// Something the visitor did.
    Input(Input),
    /// A timer the session scheduled for itself has come due.
    Timer(TimerEvent),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
/// What the presentation layer needs to draw the open modal.
pub struct RenderState {
    /// Index of the active section.
    pub active_section: usize,
    /// Index of the active subsection.
    pub active_subsection: usize,
    /// Label of the active section.
    pub section_label: String,
    /// Label of the active subsection, if the section has any.
    pub subsection_label: Option<String>,
    /// Subsection tab labels of the active section.
    pub subsections: Vec<String>,
    /// Menu entries to draw. `visible_menu.start` is the menu window's start.
    pub visible_menu: Range<usize>,
    /// Whether to draw the left paging arrow.
    pub show_menu_backward: bool,
    /// Whether to draw the right paging arrow.
    pub show_menu_forward: bool,
    /// Whether a transition is still running.
    pub transition_in_flight: bool,
    /// One-based position of the active section, for "n of m".
    pub position: usize,
    /// Total sections, for "n of m".
    pub count: usize,
    /// Modal geometry and opacity at the current virtual time.
    pub appearance: Option<Appearance>,
}

/// One case-study navigation session and its collaborators.
pub struct CaseStudyModal<S: ScrollLock = NoScrollLock> {
    index: Rc<NavigationIndex>,
    options: ModalOptions,
    menu: MenuWindow,
    anchor: ExpansionAnchor,
    timeline: Timeline,
    viewport: Rect,
    scroll: S,
    controller: Option<NavigationController>,
}

impl CaseStudyModal<NoScrollLock> {
    #[must_use]
    /// A closed session with nothing to lock behind it.
    pub fn new(index: NavigationIndex, options: ModalOptions) -> Self {
        Self::with_scroll_lock(index, options, NoScrollLock)
    }
}

impl<S: ScrollLock> CaseStudyModal<S> {
    #[must_use]
    /// A closed session that locks `scroll` while open.
    pub fn with_scroll_lock(index: NavigationIndex, options: ModalOptions, scroll: S) -> Self {
        let index = match options.presentation {
            Presentation::Modal => index,
            Presentation::Carousel => index.without_subsections(),
        };
        let visible = match options.presentation {
            Presentation::Modal => options.visible_menu_items,
            Presentation::Carousel => index.section_count(),
        };
        Self {
            menu: MenuWindow::new(index.section_count(), visible),
            index: Rc::new(index),
            options,
            anchor: ExpansionAnchor::new(options.expansion),
            timeline: Timeline::new(),
            viewport: Rect::default(),
            scroll,
            controller: None,
        }
    }

    #[must_use]
    /// The taxonomy this session navigates.
    pub fn index(&self) -> &NavigationIndex {
        &self.index
    }

    #[must_use]
    /// Whether the modal is open.
    pub fn is_open(&self) -> bool {
        self.controller.is_some()
    }

    #[must_use]
    /// The menu window.
    pub fn menu(&self) -> &MenuWindow {
        &self.menu
    }

    #[must_use]
    /// The opening anchor.
    pub fn anchor(&self) -> &ExpansionAnchor {
        &self.anchor
    }

    #[must_use]
    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.timeline.now()
    }

    #[must_use]
    /// Time until the next scheduled completion, for hosts that sleep between events.
    pub fn next_due(&self) -> Option<Duration> {
        self.timeline.next_due()
    }

    /// Sets the full-viewport rectangle that openings expand into.
    ///
    /// Call before [`Self::on_open`]: a session that was never resized expands into an empty
    /// rectangle at the top-left corner.
    pub fn resize(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }

    /// Opens the modal. Returns [`Navigation::AlreadyActive`] if it is already open.
    ///
    /// With an `origin`, the modal's first frame is exactly that rectangle. The carousel layout
    /// has no trigger card and always fades in.
    pub fn on_open(&mut self, origin: Option<Rect>) -> Navigation {
        if self.is_open() {
            tracing::trace!("open ignored, modal already open");
            return Navigation::AlreadyActive;
        }
        if self.viewport.width <= 0.0 || self.viewport.height <= 0.0 {
            tracing::warn!("modal opened before a viewport was set");
        }
        let origin = match self.options.presentation {
            Presentation::Modal => origin,
            Presentation::Carousel => None,
        };
        self.scroll.lock_scroll();
        self.controller = Some(NavigationController::new(
            Rc::clone(&self.index),
            self.options.transition,
        ));
        self.anchor.begin(origin, self.viewport, self.timeline.now());
        self.timeline
            .schedule(self.anchor.duration(), TimerEvent::ExpansionEnd);
        Navigation::Applied
    }

    /// Closes the modal and resets everything to its initial values.
    /// Returns [`Navigation::Closed`] if it was not open.
    pub fn on_close(&mut self) -> Navigation {
        if self.controller.take().is_none() {
            return Navigation::Closed;
        }
        self.menu.reset();
        self.anchor.clear();
        self.timeline.clear();
        self.scroll.restore_scroll();
        tracing::debug!("modal closed");
        Navigation::Applied
    }

    /// Escape closes the modal whatever the arrow granularity is.
    pub fn on_escape(&mut self) -> Navigation {
        self.on_close()
    }

    /// Menu entry `section` was clicked.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::SectionOutOfRange`] for an invalid index.
    pub fn on_select_section(&mut self, section: usize) -> Result<Navigation, NavError> {
        self.navigate(|c, t| c.go_to_section(section, t))
    }

    /// Subsection tab `subsection` was clicked.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::SubsectionOutOfRange`] for an invalid index.
    pub fn on_select_subsection(&mut self, subsection: usize) -> Result<Navigation, NavError> {
        self.navigate(|c, t| c.go_to_subsection(subsection, t))
    }

    /// Left arrow, routed by the active section's granularity.
    ///
    /// # Errors
    ///
    /// Propagates controller errors, which routing rules out.
    pub fn on_key_arrow_left(&mut self) -> Result<Navigation, NavError> {
        self.navigate(|c, t| c.on_arrow(Arrow::Left, t))
    }

    /// Right arrow, routed by the active section's granularity.
    ///
    /// # Errors
    ///
    /// Propagates controller errors, which routing rules out.
    pub fn on_key_arrow_right(&mut self) -> Result<Navigation, NavError> {
        self.navigate(|c, t| c.on_arrow(Arrow::Right, t))
    }

    /// "Previous" button: always steps sections.
    ///
    /// # Errors
    ///
    /// Never fails in practice.
    pub fn on_prev_section(&mut self) -> Result<Navigation, NavError> {
        self.navigate(NavigationController::prev_section)
    }

    /// "Next" button: always steps sections.
    ///
    /// # Errors
    ///
    /// Never fails in practice.
    pub fn on_next_section(&mut self) -> Result<Navigation, NavError> {
        self.navigate(NavigationController::next_section)
    }

    /// Slides the menu window right. Independent of the transition guard.
    /// Returns [`Navigation::AlreadyActive`] at the right edge.
    pub fn on_page_menu_forward(&mut self) -> Navigation {
        self.page_menu(MenuWindow::page_forward)
    }

    /// Slides the menu window left. Independent of the transition guard.
    /// Returns [`Navigation::AlreadyActive`] at the left edge.
    pub fn on_page_menu_backward(&mut self) -> Navigation {
        self.page_menu(MenuWindow::page_backward)
    }

    fn page_menu(&mut self, page: fn(&mut MenuWindow)) -> Navigation {
        if !self.is_open() {
            return Navigation::Closed;
        }
        let before = self.menu.start();
        page(&mut self.menu);
        if self.menu.start() == before {
            Navigation::AlreadyActive
        } else {
            Navigation::Applied
        }
    }

    /// Routes any event. Timer events return `None`.
    ///
    /// # Errors
    ///
    /// Returns the error of the navigation operation the input maps to.
    pub fn dispatch(&mut self, event: Event) -> Result<Option<Navigation>, NavError> {
        let input = match event {
            Event::Timer(timer) => {
                self.deliver(timer);
                return Ok(None);
            }
            Event::Input(input) => input,
        };
        let outcome = match input {
            Input::Open(origin) => self.on_open(origin),
            Input::Close => self.on_close(),
            Input::Escape => self.on_escape(),
            Input::SelectSection(i) => self.on_select_section(i)?,
            Input::SelectSubsection(j) => self.on_select_subsection(j)?,
            Input::ArrowLeft => self.on_key_arrow_left()?,
            Input::ArrowRight => self.on_key_arrow_right()?,
            Input::PrevSection => self.on_prev_section()?,
            Input::NextSection => self.on_next_section()?,
            Input::PageMenuForward => self.on_page_menu_forward(),
            Input::PageMenuBackward => self.on_page_menu_backward(),
        };
        Ok(Some(outcome))
    }

    /// Moves virtual time forward and delivers every completion that came due, in order.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerEvent> {
        let due = self.timeline.advance(by);
        for &timer in &due {
            self.deliver(timer);
        }
        due
    }

    #[must_use]
    /// Arrow granularity for the active section, while open.
    pub fn granularity(&self) -> Option<Granularity> {
        self.controller.as_ref().map(NavigationController::granularity)
    }

    #[must_use]
    /// Snapshot for the presentation layer, or `None` while closed.
    pub fn render_state(&self) -> Option<RenderState> {
        let controller = self.controller.as_ref()?;
        let state = controller.state();
        let section = self.index.section(state.active_section).ok()?;
        Some(RenderState {
            active_section: state.active_section,
            active_subsection: state.active_subsection,
            section_label: section.label.clone(),
            subsection_label: section.subsections.get(state.active_subsection).cloned(),
            subsections: section.subsections.clone(),
            visible_menu: self.menu.visible_range(),
            show_menu_backward: self.menu.show_backward(),
            show_menu_forward: self.menu.show_forward(),
            transition_in_flight: state.transition_in_flight,
            position: state.active_section + 1,
            count: self.index.section_count(),
            appearance: self.anchor.appearance_at(self.timeline.now()),
        })
    }

    fn navigate<F>(&mut self, op: F) -> Result<Navigation, NavError>
    where
        F: FnOnce(&mut NavigationController, &mut Timeline) -> Result<Navigation, NavError>,
    {
        match self.controller.as_mut() {
            Some(controller) => op(controller, &mut self.timeline),
            None => Ok(Navigation::Closed),
        }
    }

    fn deliver(&mut self, timer: TimerEvent) {
        match timer {
            TimerEvent::TransitionEnd => {
                if let Some(controller) = self.controller.as_mut() {
                    controller.end_transition();
                }
            }
            TimerEvent::ExpansionEnd => self.anchor.settle(),
        }
    }
}

impl<S: ScrollLock> Drop for CaseStudyModal<S> {
    fn drop(&mut self) {
        if self.is_open() {
            self.scroll.restore_scroll();
        }
    }
}

#[cfg(test)]
#[path = "tests/modal.rs"]
mod tests;
