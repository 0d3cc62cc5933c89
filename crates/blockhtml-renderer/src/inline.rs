//! Inline pass: text runs with formatting marks.

use crate::backend::RenderBackend;
use crate::error::{Content, RenderError};
use crate::node::{Node, Text};
use crate::state::WalkState;

/// Render a sequence of inline nodes, concatenated in order.
pub(crate) fn render_inlines<B: RenderBackend>(
    nodes: &[Node],
    state: &WalkState,
    out: &mut String,
) -> Result<(), RenderError> {
    for (index, node) in nodes.iter().enumerate() {
        match node {
            Node::Text(text) => render_text::<B>(text, out),
            Node::List(_) => return Err(state.misplaced(index, "list", Content::Inline)),
            Node::ListItem(_) => {
                return Err(state.misplaced(index, "list-item", Content::Inline));
            }
            Node::Unknown { kind } => return Err(state.unknown(index, kind)),
        }
    }
    Ok(())
}

/// Render one text run, one tag pair per active mark (outermost first).
pub(crate) fn render_text<B: RenderBackend>(text: &Text, out: &mut String) {
    for mark in text.marks() {
        B::mark_start(mark, out);
    }
    B::text(&text.text, out);
    for mark in text.marks().rev() {
        B::mark_end(mark, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HtmlBackend;
    use crate::error::NodePath;
    use crate::node::ListFormat;
    use pretty_assertions::assert_eq;

    fn inline_html(nodes: &[Node]) -> Result<String, RenderError> {
        let state = WalkState::new(8);
        let mut out = String::new();
        render_inlines::<HtmlBackend>(nodes, &state, &mut out)?;
        Ok(out)
    }

    fn text_html(text: &Text) -> String {
        let mut out = String::new();
        render_text::<HtmlBackend>(text, &mut out);
        out
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(text_html(&Text::new("Hello")), "Hello");
    }

    #[test]
    fn test_bold_and_italic() {
        assert_eq!(text_html(&Text::new("b").bold()), "<strong>b</strong>");
        assert_eq!(text_html(&Text::new("i").italic()), "<em>i</em>");
    }

    #[test]
    fn test_bold_wraps_italic() {
        let expected = "<strong><em>x</em></strong>";
        assert_eq!(text_html(&Text::new("x").bold().italic()), expected);
        assert_eq!(text_html(&Text::new("x").italic().bold()), expected);
    }

    #[test]
    fn test_all_marks() {
        let text = Text::new("all").code().strikethrough().underline().italic().bold();
        assert_eq!(
            text_html(&text),
            "<strong><em><u><s><code>all</code></s></u></em></strong>"
        );
    }

    #[test]
    fn test_underline_strikethrough_code() {
        assert_eq!(text_html(&Text::new("u").underline()), "<u>u</u>");
        assert_eq!(text_html(&Text::new("s").strikethrough()), "<s>s</s>");
        assert_eq!(text_html(&Text::new("c").code()), "<code>c</code>");
    }

    #[test]
    fn test_empty_text_with_marks() {
        assert_eq!(text_html(&Text::new("").bold()), "<strong></strong>");
        assert_eq!(
            text_html(&Text::new("").bold().italic()),
            "<strong><em></em></strong>"
        );
    }

    #[test]
    fn test_empty_text_without_marks() {
        assert_eq!(text_html(&Text::new("")), "");
    }

    #[test]
    fn test_text_escaped_inside_marks() {
        assert_eq!(text_html(&Text::new("a < b").code()), "<code>a &lt; b</code>");
    }

    #[test]
    fn test_runs_concatenate_in_order() {
        let html = inline_html(&[
            Node::text("Nested with "),
            Text::new("italic").italic().into(),
            Node::text(" text"),
        ])
        .unwrap();
        assert_eq!(html, "Nested with <em>italic</em> text");
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(inline_html(&[]).unwrap(), "");
    }

    #[test]
    fn test_list_in_inline_content() {
        let err = inline_html(&[
            Node::text("a"),
            Node::list(ListFormat::Unordered, Vec::new()),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            RenderError::MisplacedNode {
                kind: "list",
                expected: Content::Inline,
                path: NodePath::new(&[1]),
            }
        );
    }

    #[test]
    fn test_list_item_in_inline_content() {
        let err = inline_html(&[Node::list_item(Vec::new())]).unwrap_err();
        assert!(matches!(
            err,
            RenderError::MisplacedNode {
                kind: "list-item",
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_in_inline_content() {
        let err = inline_html(&[Node::Unknown {
            kind: "mention".to_owned(),
        }])
        .unwrap_err();
        assert_eq!(
            err,
            RenderError::UnknownNode {
                kind: "mention".to_owned(),
                path: NodePath::new(&[0]),
            }
        );
    }
}
