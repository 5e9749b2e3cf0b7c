//! Markdown format implementation using tree-sitter-md.
//!
//! This module provides the tree-sitter query for parsing markdown outlines and reading levels
//! and titles from ATX-style headings (# syntax).

use crate::formats::Format;

/// Tree-sitter query for ATX-style markdown headings (# syntax).
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn language(&self) -> tree_sitter::Language {
        tree_sitter_md::LANGUAGE.into()
    }

    fn heading_query(&self) -> &'static str {
        "(atx_heading) @heading"
    }

    fn heading_level(&self, node: &tree_sitter::Node) -> Option<usize> {
        let marker = node.child(0)?;
        match marker.kind() {
            "atx_h1_marker" => Some(1),
            "atx_h2_marker" => Some(2),
            "atx_h3_marker" => Some(3),
            "atx_h4_marker" => Some(4),
            "atx_h5_marker" => Some(5),
            "atx_h6_marker" => Some(6),
            _ => None,
        }
    }

    fn heading_text<'s>(&self, node: &tree_sitter::Node, source: &'s str) -> Option<&'s str> {
        let mut cursor = node.walk();
        let inline = node
            .children(&mut cursor)
            .find(|child| child.kind() == "inline")?;
        inline
            .utf8_text(source.as_bytes())
            .ok()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}
