//! Traversal state shared by the block and inline passes.

use crate::error::{Content, NodePath, RenderError};

/// Position and list depth of the walk through one document.
#[derive(Debug)]
pub(crate) struct WalkState {
    /// Path of the sequence currently being rendered.
    path: NodePath,
    depth: usize,
    max_depth: usize,
}

impl WalkState {
    pub(crate) fn new(max_depth: usize) -> Self {
        Self {
            path: NodePath::default(),
            depth: 0,
            max_depth,
        }
    }

    /// Enter the children of the node at `index` in the current sequence.
    pub(crate) fn enter(&mut self, index: usize) {
        self.path.push(index);
    }

    /// Leave the children entered last.
    pub(crate) fn leave(&mut self) {
        self.path.pop();
    }

    /// Enter the children of the list at `index`, enforcing the depth limit.
    pub(crate) fn enter_list(&mut self, index: usize) -> Result<(), RenderError> {
        if self.depth >= self.max_depth {
            return Err(RenderError::DepthExceeded {
                limit: self.max_depth,
                path: self.path.child(index),
            });
        }
        self.depth += 1;
        self.enter(index);
        Ok(())
    }

    pub(crate) fn leave_list(&mut self) {
        self.depth -= 1;
        self.leave();
    }

    pub(crate) fn unknown(&self, index: usize, kind: &str) -> RenderError {
        RenderError::UnknownNode {
            kind: kind.to_owned(),
            path: self.path.child(index),
        }
    }

    pub(crate) fn misplaced(
        &self,
        index: usize,
        kind: &'static str,
        expected: Content,
    ) -> RenderError {
        RenderError::MisplacedNode {
            kind,
            expected,
            path: self.path.child(index),
        }
    }
}
