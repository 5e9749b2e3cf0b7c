//! Section representation for the case-study taxonomy.
//!
//! A section is a top-level named group shown in the modal's menu. It owns an ordered list of
//! subsection labels, which may be empty. Sections are identified by their position in the
//! [`NavigationIndex`](crate::index::NavigationIndex), and subsections by their position within
//! the owning section.

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// Immutable named group with its ordered subsection labels.
pub struct Section {
    /// Label shown in the menu bar.
    pub label: String,
    /// Subsection labels in display order.
    pub subsections: Vec<String>,
}

impl Section {
    #[must_use]
    /// Builds a section from any string-like label and subsection labels.
    pub fn new<L, I, S>(label: L, subsections: I) -> Self
    where
        L: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.into(),
            subsections: subsections.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    /// A section with no subsections, as the full-page carousel uses.
    pub fn flat(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            subsections: Vec::new(),
        }
    }

    #[must_use]
    /// Whether left/right should step through subsections while this section is active.
    pub fn has_subsections(&self) -> bool {
        !self.subsections.is_empty()
    }
}
