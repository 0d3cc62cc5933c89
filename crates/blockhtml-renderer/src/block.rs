//! Block pass: lists and list items.
//!
//! Nested lists are not children of the item they belong to. They follow it as
//! siblings inside the parent list:
//!
//! ```text
//! list
//! ├── list-item "Parent"
//! ├── list            <- nested under "Parent"
//! │   └── list-item "Child"
//! └── list-item "Next"
//! ```
//!
//! When a `list-item` is rendered, every `list` that directly follows it is
//! rendered inside the item before its closing tag, and consumed.

use crate::backend::RenderBackend;
use crate::error::{Content, RenderError};
use crate::inline::render_inlines;
use crate::node::{List, Node};
use crate::state::WalkState;

/// Render a sequence of block nodes.
pub(crate) fn render_blocks<B: RenderBackend>(
    nodes: &[Node],
    state: &mut WalkState,
    out: &mut String,
) -> Result<(), RenderError> {
    let mut cursor = 0;
    while let Some(node) = nodes.get(cursor) {
        match node {
            Node::List(list) => render_list::<B>(list, cursor, state, out)?,
            Node::ListItem(item) => {
                B::item_start(out);
                state.enter(cursor);
                render_inlines::<B>(&item.children, state, out)?;
                state.leave();

                while let Some(Node::List(nested)) = nodes.get(cursor + 1) {
                    cursor += 1;
                    render_list::<B>(nested, cursor, state, out)?;
                }
                B::item_end(out);
            }
            Node::Text(_) => return Err(state.misplaced(cursor, "text", Content::Block)),
            Node::Unknown { kind } => return Err(state.unknown(cursor, kind)),
        }
        cursor += 1;
    }
    Ok(())
}

/// Render one list container at position `index` of the current sequence.
fn render_list<B: RenderBackend>(
    list: &List,
    index: usize,
    state: &mut WalkState,
    out: &mut String,
) -> Result<(), RenderError> {
    state.enter_list(index)?;
    B::list_start(list.format, out);
    render_blocks::<B>(&list.children, state, out)?;
    B::list_end(list.format, out);
    state.leave_list();
    Ok(())
}
