//! Render backend trait for output-specific markup.
//!
//! The tree walk in [`TreeRenderer`](crate::TreeRenderer) decides *what* is
//! emitted and in which order; a backend decides how each piece is spelled.

use crate::node::{ListFormat, Mark};
use crate::util::escape_html;

/// Backend trait for format-specific rendering operations.
///
/// Every `*_start` call made by the renderer is matched by exactly one
/// `*_end` call with the same argument, properly nested.
pub trait RenderBackend {
    /// Render a list container opening tag.
    fn list_start(format: ListFormat, out: &mut String);

    /// Render a list container closing tag.
    fn list_end(format: ListFormat, out: &mut String);

    /// Render a list item opening tag.
    fn item_start(out: &mut String);

    /// Render a list item closing tag.
    fn item_end(out: &mut String);

    /// Render the opening tag of an inline formatting mark.
    fn mark_start(mark: Mark, out: &mut String);

    /// Render the closing tag of an inline formatting mark.
    fn mark_end(mark: Mark, out: &mut String);

    /// Render raw text content.
    ///
    /// Default escapes HTML special characters.
    fn text(text: &str, out: &mut String) {
        out.push_str(&escape_html(text));
    }
}
