//! Node tree renderer with pluggable backend.

use std::marker::PhantomData;

use crate::backend::RenderBackend;
use crate::block::render_blocks;
use crate::error::{Error, RenderError};
use crate::html::HtmlBackend;
use crate::node::{Node, parse_document};
use crate::state::WalkState;

/// Default maximum list nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Node tree renderer with pluggable backend.
///
/// Walks the top-level node sequence and delegates tag spelling to the
/// [`RenderBackend`]. The renderer holds no per-document state, so one
/// instance can render any number of documents, from any number of threads.
pub struct TreeRenderer<B: RenderBackend> {
    max_depth: usize,
    _backend: PhantomData<B>,
}

impl<B: RenderBackend> TreeRenderer<B> {
    /// Create a renderer with the default depth limit.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            _backend: PhantomData,
        }
    }

    /// Set the maximum list nesting depth.
    ///
    /// Documents nesting lists deeper than this fail with
    /// [`RenderError::DepthExceeded`].
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Configured maximum list nesting depth.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Render a top-level node sequence.
    ///
    /// Returns the complete fragment, or the first data-model violation found.
    pub fn render(&self, nodes: &[Node]) -> Result<String, RenderError> {
        let mut state = WalkState::new(self.max_depth);
        let mut out = String::with_capacity(1024);

        if let Err(err) = render_blocks::<B>(nodes, &mut state, &mut out) {
            tracing::debug!(path = %err.path(), error = %err, "Render aborted");
            return Err(err);
        }

        tracing::debug!(nodes = nodes.len(), bytes = out.len(), "Rendered node tree");
        Ok(out)
    }

    /// Parse a JSON array of top-level nodes and render it.
    pub fn render_json(&self, json: &str) -> Result<String, Error> {
        let nodes = parse_document(json)?;
        Ok(self.render(&nodes)?)
    }
}

impl<B: RenderBackend> Default for TreeRenderer<B> {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a top-level node sequence to HTML.
///
/// # Example
///
/// ```
/// use blockhtml_renderer::{ListFormat, Node, render};
///
/// let nodes = [Node::list(
///     ListFormat::Unordered,
///     vec![Node::list_item(vec![Node::text("Hello")])],
/// )];
/// assert_eq!(render(&nodes).unwrap(), "<ul><li>Hello</li></ul>");
/// ```
pub fn render(nodes: &[Node]) -> Result<String, RenderError> {
    TreeRenderer::<HtmlBackend>::new().render(nodes)
}

/// Parse a JSON array of top-level nodes and render it to HTML.
pub fn render_json(json: &str) -> Result<String, Error> {
    TreeRenderer::<HtmlBackend>::new().render_json(json)
}
