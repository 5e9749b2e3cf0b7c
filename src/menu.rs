//! Windowed pagination over the section menu.
//!
//! Long taxonomies don't fit in one menu bar, so only `visible_count` entries are shown at a
//! time. Paging is purely manual: navigating to a section outside the window does not scroll
//! the window to follow it.

use std::ops::Range;

/// Default number of menu entries shown at once.
pub const DEFAULT_VISIBLE: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// The visible slice `[start, start + visible_count)` of a list of `item_count` menu entries.
pub struct MenuWindow {
    start: usize,
    visible_count: usize,
    item_count: usize,
}

impl MenuWindow {
    #[must_use]
    /// A window at the left edge. A `visible_count` of zero is treated as one.
    pub fn new(item_count: usize, visible_count: usize) -> Self {
        Self {
            start: 0,
            visible_count: visible_count.max(1),
            item_count,
        }
    }

    #[must_use]
    /// First visible item.
    pub fn start(&self) -> usize {
        self.start
    }

    #[must_use]
    /// Configured window width.
    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    #[must_use]
    /// Largest legal `start`.
    pub fn max_start(&self) -> usize {
        self.item_count.saturating_sub(self.visible_count)
    }

    /// Slides the window one item right; no-op at the right edge.
    pub fn page_forward(&mut self) {
        self.start = self.max_start().min(self.start + 1);
    }

    /// Slides the window one item left; no-op at the left edge.
    pub fn page_backward(&mut self) {
        self.start = self.start.saturating_sub(1);
    }

    #[must_use]
    /// Visible item indices, clipped to the item list.
    pub fn visible_range(&self) -> Range<usize> {
        let end = (self.start + self.visible_count).min(self.item_count);
        self.start.min(end)..end
    }

    #[must_use]
    /// Whether a "page backward" control has anything to do.
    pub fn show_backward(&self) -> bool {
        self.start > 0
    }

    #[must_use]
    /// Whether a "page forward" control has anything to do.
    pub fn show_forward(&self) -> bool {
        self.start < self.max_start()
    }

    /// Returns to the left edge.
    pub fn reset(&mut self) {
        self.start = 0;
    }
}

#[cfg(test)]
#[path = "tests/menu.rs"]
mod tests;
