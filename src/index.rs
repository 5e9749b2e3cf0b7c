//! The static taxonomy the modal navigates: ordered sections, each with ordered subsections.
//!
//! Built once (from the built-in case-study layout, a config file, or a markdown outline) and
//! never mutated afterwards. All lookups are bounds-checked and fail loudly with
//! [`NavError`] rather than clamping, since a bad index always means a caller bug.

use crate::error::NavError;
use crate::section::Section;
use serde::Serialize;

/// Standardised case-study layout shared by every project.
const CASE_STUDY: &[(&str, &[&str])] = &[
    (
        "Project Overview",
        &[
            "Project Overview",
            "Primary Roles",
            "Project Impact",
            "Problem & Solution",
            "Design Process",
        ],
    ),
    (
        "Discovery & Research",
        &[
            "Research Strategy",
            "Methodologies",
            "Participants",
            "Research Insights",
        ],
    ),
    (
        "Design Thinking",
        &["Journey Maps", "JTBD", "Prioritization Framework", "Vision"],
    ),
    (
        "Ideation & Prototyping",
        &[
            "Wireframes",
            "Prototypes",
            "Design Collaboration",
            "Key Design Decisions",
        ],
    ),
    (
        "Design Systems & Usability",
        &[
            "Accessibility Standards",
            "Tokens, Components, Documentation",
            "Design System",
            "Usability",
        ],
    ),
    (
        "Testing & Validation",
        &[
            "Usability Testing",
            "Ethnographic Testing",
            "A/B Tests",
            "Analytics",
        ],
    ),
    (
        "Outcome & Impact",
        &[
            "Business Results",
            "User Outcomes",
            "Lessons Learned",
            "The Future",
        ],
    ),
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// Ordered, immutable list of sections with bounds-checked lookups.
pub struct NavigationIndex {
    sections: Vec<Section>,
}

impl NavigationIndex {
    /// Builds an index from an ordered list of sections.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::EmptyIndex`] if `sections` is empty, since wraparound navigation has
    /// no meaning over zero sections.
    pub fn new(sections: Vec<Section>) -> Result<Self, NavError> {
        if sections.is_empty() {
            return Err(NavError::EmptyIndex);
        }
        Ok(Self { sections })
    }

    #[must_use]
    /// The standardised seven-section case-study layout.
    pub fn case_study() -> Self {
        let sections = CASE_STUDY
            .iter()
            .map(|(label, subs)| Section::new(*label, subs.iter().copied()))
            .collect();
        Self { sections }
    }

    #[must_use]
    /// Same sections with every subsection list dropped.
    ///
    /// The full-page carousel navigates sections only, so it runs over this flattened copy.
    pub fn without_subsections(&self) -> Self {
        Self {
            sections: self
                .sections
                .iter()
                .map(|s| Section::flat(s.label.clone()))
                .collect(),
        }
    }

    #[must_use]
    /// Number of top-level sections (always at least one).
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Number of subsections in section `section`.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::SectionOutOfRange`] if `section` is not a valid index.
    pub fn subsection_count(&self, section: usize) -> Result<usize, NavError> {
        self.section(section).map(|s| s.subsections.len())
    }

    /// Display label of section `section`.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::SectionOutOfRange`] if `section` is not a valid index.
    pub fn section_label(&self, section: usize) -> Result<&str, NavError> {
        self.section(section).map(|s| s.label.as_str())
    }

    /// Display label of subsection `subsection` within section `section`.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::SectionOutOfRange`] or [`NavError::SubsectionOutOfRange`] when either
    /// index is invalid.
    pub fn subsection_label(&self, section: usize, subsection: usize) -> Result<&str, NavError> {
        let owner = self.section(section)?;
        owner
            .subsections
            .get(subsection)
            .map(String::as_str)
            .ok_or(NavError::SubsectionOutOfRange {
                section,
                index: subsection,
                count: owner.subsections.len(),
            })
    }

    /// The section at position `section`.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::SectionOutOfRange`] if `section` is not a valid index.
    pub fn section(&self, section: usize) -> Result<&Section, NavError> {
        self.sections
            .get(section)
            .ok_or(NavError::SectionOutOfRange {
                index: section,
                count: self.sections.len(),
            })
    }

    /// Iterates the sections in menu order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }
}

impl Default for NavigationIndex {
    fn default() -> Self {
        Self::case_study()
    }
}

#[cfg(test)]
#[path = "tests/index.rs"]
mod tests;
