//! Terminal host state: the landing page of project cards and the modal on top of it.
//!
//! The landing page plays the part of the site's project timeline. Each card records where it
//! was last drawn, so opening a case study can hand the modal the literal on-screen rectangle of
//! the card that was activated. Terminal cells are scaled to pixels with a fixed cell size.

use crate::anchor;
use crate::error::NavError;
use crate::index::NavigationIndex;
use crate::keymap;
use crate::modal::{CaseStudyModal, Event, ModalOptions};
use crate::scroll::ScrollLock;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Nominal width of a terminal cell in pixels.
pub const CELL_WIDTH_PX: f64 = 8.0;
/// Nominal height of a terminal cell in pixels.
pub const CELL_HEIGHT_PX: f64 = 16.0;

#[must_use]
/// Converts a terminal area to the pixel rectangle the engine works in.
pub fn cells_to_px(area: Rect) -> anchor::Rect {
    anchor::Rect::new(
        f64::from(area.y) * CELL_HEIGHT_PX,
        f64::from(area.x) * CELL_WIDTH_PX,
        f64::from(area.width) * CELL_WIDTH_PX,
        f64::from(area.height) * CELL_HEIGHT_PX,
    )
}

#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
/// Converts an engine rectangle back to cells, clipped to `bounds`.
pub fn px_to_cells(rect: anchor::Rect, bounds: Rect) -> Rect {
    let to_cells = |px: f64, cell: f64| (px / cell).round().max(0.0) as u16;
    let x = to_cells(rect.left, CELL_WIDTH_PX);
    let y = to_cells(rect.top, CELL_HEIGHT_PX);
    let area = Rect::new(
        x,
        y,
        to_cells(rect.width, CELL_WIDTH_PX),
        to_cells(rect.height, CELL_HEIGHT_PX),
    );
    area.intersection(bounds)
}

#[derive(Debug, Default)]
/// Scroll offset of the landing page, frozen while a case study is open.
pub struct PageScroll {
    /// First visible card row.
    pub offset: usize,
    locked: bool,
    saved: Option<usize>,
}

impl PageScroll {
    #[must_use]
    /// Whether scrolling is currently frozen.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Scrolls by `delta` rows within `0..=max`. Ignored while locked.
    pub fn scroll_by(&mut self, delta: isize, max: usize) {
        if self.locked {
            return;
        }
        self.offset = self.offset.saturating_add_signed(delta).min(max);
    }
}

impl ScrollLock for PageScroll {
    fn lock_scroll(&mut self) {
        self.saved = Some(self.offset);
        self.locked = true;
    }

    fn restore_scroll(&mut self) {
        if let Some(offset) = self.saved.take() {
            self.offset = offset;
        }
        self.locked = false;
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
/// Determines which UI screen renders and how input is interpreted.
pub enum View {
    /// Project cards.
    Landing,
    /// The case-study modal over the landing page.
    CaseStudy,
}

/// Everything the terminal front-end draws and mutates.
pub struct AppState {
    /// Card titles on the landing page.
    pub projects: Vec<String>,
    /// Highlighted card.
    pub current_project_index: usize,
    /// Card whose case study is open.
    pub open_project: Option<usize>,
    /// Heading shown above the modal menu.
    pub title: String,
    /// Where each card was drawn on the last frame.
    pub card_areas: Vec<Rect>,
    /// How many cards fit on screen on the last frame.
    pub visible_cards: usize,
    /// Landing page scroll, shared with the modal's scroll lock.
    pub page: Rc<RefCell<PageScroll>>,
    /// The navigation session.
    pub modal: CaseStudyModal<Rc<RefCell<PageScroll>>>,
    /// Status feedback displayed in the help bar.
    pub message: Option<String>,
}

impl AppState {
    #[must_use]
    /// Landing page over `projects`, each opening a case study laid out by `index`.
    pub fn new(
        projects: Vec<String>,
        title: String,
        index: NavigationIndex,
        options: ModalOptions,
    ) -> Self {
        let page = Rc::new(RefCell::new(PageScroll::default()));
        let modal = CaseStudyModal::with_scroll_lock(index, options, Rc::clone(&page));
        Self {
            projects,
            current_project_index: 0,
            open_project: None,
            title,
            card_areas: Vec::new(),
            visible_cards: 1,
            page,
            modal,
            message: None,
        }
    }

    #[must_use]
    /// Screen to draw.
    pub fn view(&self) -> View {
        if self.modal.is_open() {
            View::CaseStudy
        } else {
            View::Landing
        }
    }

    /// Highlights the next card, if there is one.
    pub fn select_next_project(&mut self) {
        if self.current_project_index + 1 < self.projects.len() {
            self.current_project_index += 1;
        }
        self.follow_selection();
    }

    /// Highlights the previous card, if there is one.
    pub fn select_prev_project(&mut self) {
        self.current_project_index = self.current_project_index.saturating_sub(1);
        self.follow_selection();
    }

    /// Scrolls the landing page by `delta` cards. Has no effect while a case study is open.
    pub fn scroll_page(&mut self, delta: isize) {
        let max = self.projects.len().saturating_sub(self.visible_cards);
        self.page.borrow_mut().scroll_by(delta, max);
    }

    fn follow_selection(&mut self) {
        let fits = self.visible_cards.max(1);
        let mut page = self.page.borrow_mut();
        if self.current_project_index < page.offset {
            page.offset = self.current_project_index;
        } else if self.current_project_index >= page.offset + fits {
            page.offset = self.current_project_index + 1 - fits;
        }
    }

    /// Records the terminal size as the modal's full viewport.
    pub fn resize(&mut self, area: Rect) {
        self.modal.resize(cells_to_px(area));
    }

    /// Opens the highlighted card's case study, expanding out of the card.
    pub fn open_selected(&mut self) {
        if self.projects.is_empty() {
            return;
        }
        let origin = self
            .card_areas
            .get(self.current_project_index)
            .copied()
            .filter(|area| !area.is_empty())
            .map(cells_to_px);
        self.open_project = Some(self.current_project_index);
        self.message = None;
        self.modal.on_open(origin);
    }

    /// Routes a key press while the modal is open.
    pub fn handle_modal_key(&mut self, key: KeyEvent) {
        let Some(input) = keymap::modal_input(key, self.modal.menu()) else {
            return;
        };
        match self.modal.dispatch(Event::Input(input)) {
            Ok(_) => self.message = None,
            Err(e) => self.report(&e),
        }
        if !self.modal.is_open() {
            self.open_project = None;
        }
    }

    /// Feeds elapsed wall-clock time to the modal's timeline.
    pub fn tick(&mut self, elapsed: Duration) {
        self.modal.advance(elapsed);
    }

    fn report(&mut self, e: &NavError) {
        tracing::error!(error = %e, "navigation request rejected");
        self.message = Some(e.to_string());
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
