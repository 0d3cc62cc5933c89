//! Renders portable rich-text node trees to HTML.
//!
//! This crate provides a generic [`TreeRenderer`] that produces HTML through
//! the [`RenderBackend`] trait, plus the [`render`] entry point for the fixed
//! HTML policy of [`HtmlBackend`].
//!
//! # Architecture
//!
//! - [`Node`]: the `type`-tagged document model (lists, list items, text runs)
//! - Block pass: lists and items, folding trailing sibling lists into the
//!   preceding item
//! - Inline pass: text runs, one tag pair per active [`Mark`], bold outermost
//!
//! Invalid structure (unknown node types, text in block position, lists in
//! inline position, nesting past the depth limit) aborts the render with a
//! [`RenderError`] that carries the offending node's [`NodePath`].
//!
//! # Example
//!
//! ```
//! use blockhtml_renderer::render_json;
//!
//! let json = r#"[{"type": "list", "format": "unordered", "children": [
//!     {"type": "list-item", "children": [{"type": "text", "text": "Parent"}]},
//!     {"type": "list", "format": "ordered", "children": [
//!         {"type": "list-item", "children": [{"type": "text", "text": "Child", "bold": true}]}
//!     ]}
//! ]}]"#;
//!
//! let html = render_json(json).unwrap();
//! assert_eq!(
//!     html,
//!     "<ul><li>Parent<ol><li><strong>Child</strong></li></ol></li></ul>"
//! );
//! ```

mod backend;
mod block;
mod error;
mod html;
mod inline;
mod node;
mod renderer;
mod state;
mod util;

pub use backend::RenderBackend;
pub use error::{Content, Error, NodePath, RenderError};
pub use html::HtmlBackend;
pub use node::{List, ListFormat, ListItem, Mark, Node, Text, parse_document};
pub use renderer::{DEFAULT_MAX_DEPTH, TreeRenderer, render, render_json};
pub use util::escape_html;
