//! Taxonomy import from an outline document.
//!
//! A case study can be drafted as a markdown outline instead of a config table:
//!
//! ```text
//! # HealthRecord AI Assistant      <- title
//! ## Project Overview              <- section
//! ### Primary Roles                <- subsection of "Project Overview"
//! ## Outcome & Impact              <- section with no subsections
//! ```
//!
//! Headings are found with tree-sitter, so headings inside code fences are not mistaken for
//! sections. Headings deeper than level 3 are ignored, as are subsection headings that appear
//! before the first section.

use crate::error::NavError;
use crate::formats::markdown::MarkdownFormat;
use crate::formats::Format;
use crate::index::NavigationIndex;
use crate::section::Section;
use std::fs;
use std::path::Path;
use streaming_iterator::StreamingIterator;
use tree_sitter::{Parser, Query, QueryCursor};

#[derive(Clone, Debug, PartialEq, Eq)]
/// A parsed outline: the optional title and the taxonomy it describes.
pub struct Outline {
    /// Text of the first level-1 heading, if any.
    pub title: Option<String>,
    /// Sections and subsections in document order.
    pub index: NavigationIndex,
}

/// Reads and parses a markdown outline from disk.
///
/// # Errors
///
/// Returns [`NavError::Io`] if the file cannot be read, otherwise as [`parse_outline`].
pub fn load_outline(path: &Path) -> Result<Outline, NavError> {
    let source = fs::read_to_string(path)?;
    parse_outline(&source, &MarkdownFormat)
}

/// Builds a taxonomy from the headings of `source`.
///
/// # Errors
///
/// Returns [`NavError::Outline`] if the grammar or query cannot be loaded, and
/// [`NavError::EmptyIndex`] if the document has no section headings.
pub fn parse_outline<F: Format>(source: &str, format: &F) -> Result<Outline, NavError> {
    let language = format.language();
    let mut parser = Parser::new();
    parser
        .set_language(&language)
        .map_err(|e| NavError::Outline(e.to_string()))?;
    let tree = parser
        .parse(source, None)
        .ok_or_else(|| NavError::Outline("parse cancelled".to_string()))?;
    let query = Query::new(&language, format.heading_query())
        .map_err(|e| NavError::Outline(e.to_string()))?;

    let mut title = None;
    let mut sections: Vec<Section> = Vec::new();
    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(&query, tree.root_node(), source.as_bytes());

    while let Some(m) = matches.next() {
        for capture in m.captures {
            let node = capture.node;
            let (Some(level), Some(text)) = (
                format.heading_level(&node),
                format.heading_text(&node, source),
            ) else {
                continue;
            };
            match level {
                1 if title.is_none() => title = Some(text.to_string()),
                2 => sections.push(Section::flat(text)),
                3 => match sections.last_mut() {
                    Some(owner) => owner.subsections.push(text.to_string()),
                    None => tracing::debug!(heading = text, "subsection before any section"),
                },
                _ => {}
            }
        }
    }

    Ok(Outline {
        title,
        index: NavigationIndex::new(sections)?,
    })
}

#[cfg(test)]
#[path = "tests/outline.rs"]
mod tests;
