//! Errors surfaced by the navigation engine.
//!
//! Only collaborator bugs and loading failures are errors. A request that is legal but currently
//! disallowed (already active, or made mid-transition) is reported through
//! [`Navigation`](crate::controller::Navigation) instead.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
/// Failures raised by index lookups, navigation requests and taxonomy loading.
pub enum NavError {
    /// A section index outside `0..count` was passed in.
    #[error("section index {index} out of range (have {count} sections)")]
    SectionOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of sections in the index.
        count: usize,
    },
    /// A subsection index outside the owning section's list was passed in.
    #[error("subsection index {index} out of range for section {section} (has {count})")]
    SubsectionOutOfRange {
        /// Section the lookup was made against.
        section: usize,
        /// The offending index.
        index: usize,
        /// Number of subsections in that section.
        count: usize,
    },
    /// Subsection stepping was requested on a section without subsections.
    #[error("section {section} has no subsections to step through")]
    NoSubsections {
        /// The active section at the time of the request.
        section: usize,
    },
    /// A taxonomy must contain at least one section.
    #[error("navigation index has no sections")]
    EmptyIndex,
    /// The markdown outline could not be parsed.
    #[error("outline: {0}")]
    Outline(String),
    /// The configuration file could not be deserialised.
    #[error("config: {0}")]
    Config(String),
    /// Reading a taxonomy or config file failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}
