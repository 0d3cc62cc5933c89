//! Render error types.

use std::fmt;

/// Position of a node in the tree.
///
/// Holds child indices starting from the top-level sequence. Displayed as
/// `nodes[0].children[2].children[1]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    /// Build a path from child indices.
    pub fn new(indices: &[usize]) -> Self {
        Self(indices.to_vec())
    }

    /// Child indices from the top-level sequence down to the node.
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Nesting depth of the node (1 for top-level nodes).
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn push(&mut self, index: usize) {
        self.0.push(index);
    }

    pub(crate) fn pop(&mut self) {
        self.0.pop();
    }

    /// Copy of this path extended with one more child index.
    pub(crate) fn child(&self, index: usize) -> Self {
        let mut path = self.clone();
        path.push(index);
        path
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut indices = self.0.iter();
        match indices.next() {
            Some(first) => write!(f, "nodes[{first}]")?,
            None => return f.write_str("nodes"),
        }
        for index in indices {
            write!(f, ".children[{index}]")?;
        }
        Ok(())
    }
}

/// Content model a node sequence must satisfy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Content {
    /// Lists and list items (top level, `list` children).
    Block,
    /// Text runs (`list-item` children).
    Inline,
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Block => "block",
            Self::Inline => "inline",
        })
    }
}

/// Data-model violation found while rendering.
///
/// Rendering stops at the first violation; no partial output is returned.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum RenderError {
    /// Node `type` is not part of the model.
    #[error("unrecognized node type `{kind}` at {path}")]
    UnknownNode {
        /// The unrecognized `type` value.
        kind: String,
        /// Position of the offending node.
        path: NodePath,
    },

    /// Known node type in a position its content model forbids.
    #[error("`{kind}` node is not allowed in {expected} content at {path}")]
    MisplacedNode {
        /// The node's `type`.
        kind: &'static str,
        /// Content model of the enclosing sequence.
        expected: Content,
        /// Position of the offending node.
        path: NodePath,
    },

    /// List nesting is deeper than the renderer's limit.
    #[error("list nesting exceeds maximum depth of {limit} at {path}")]
    DepthExceeded {
        /// Configured maximum list depth.
        limit: usize,
        /// Position of the list that crossed the limit.
        path: NodePath,
    },
}

impl RenderError {
    /// Position of the node that caused the error.
    pub fn path(&self) -> &NodePath {
        match self {
            Self::UnknownNode { path, .. }
            | Self::MisplacedNode { path, .. }
            | Self::DepthExceeded { path, .. } => path,
        }
    }
}

/// Error from [`render_json`](crate::render_json).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input is not a valid JSON node array.
    #[error("invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Document parsed but violates the node model.
    #[error(transparent)]
    Render(#[from] RenderError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_path_display() {
        assert_eq!(NodePath::default().to_string(), "nodes");
        assert_eq!(NodePath::new(&[3]).to_string(), "nodes[3]");
        assert_eq!(
            NodePath::new(&[0, 2, 1]).to_string(),
            "nodes[0].children[2].children[1]"
        );
    }

    #[test]
    fn test_node_path_child() {
        let mut path = NodePath::new(&[1]);
        let child = path.child(4);
        assert_eq!(child.indices(), &[1, 4]);
        assert_eq!(child.depth(), 2);

        path.push(7);
        path.pop();
        assert_eq!(path.indices(), &[1]);
    }

    #[test]
    fn test_render_error_messages() {
        let err = RenderError::UnknownNode {
            kind: "image".to_owned(),
            path: NodePath::new(&[0, 1]),
        };
        assert_eq!(
            err.to_string(),
            "unrecognized node type `image` at nodes[0].children[1]"
        );

        let err = RenderError::MisplacedNode {
            kind: "text",
            expected: Content::Block,
            path: NodePath::new(&[2]),
        };
        assert_eq!(
            err.to_string(),
            "`text` node is not allowed in block content at nodes[2]"
        );
        assert_eq!(err.path(), &NodePath::new(&[2]));

        let err = RenderError::DepthExceeded {
            limit: 4,
            path: NodePath::new(&[0, 1, 1, 1, 1]),
        };
        assert!(err.to_string().contains("maximum depth of 4"));
    }
}
