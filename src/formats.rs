//! Format trait and implementations for outline documents.
//!
//! This module defines the `Format` trait which abstracts over the document formats a
//! case-study taxonomy can be written in, by providing the tree-sitter grammar and the heading
//! query specific to each format.

pub mod markdown;

/// Grammar and queries needed to read section headings out of a document.
pub trait Format {
    /// Tree-sitter grammar for the format.
    fn language(&self) -> tree_sitter::Language;
    /// Query with a `@heading` capture on every heading node.
    fn heading_query(&self) -> &str;
    /// Depth of a captured heading node (1 for the outermost), if it is one.
    fn heading_level(&self, node: &tree_sitter::Node) -> Option<usize>;
    /// Heading text without markup.
    fn heading_text<'s>(&self, node: &tree_sitter::Node, source: &'s str) -> Option<&'s str>;
}
