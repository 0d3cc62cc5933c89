//! HTML backend for node tree rendering.
//!
//! Produces compact HTML5 with no whitespace between tags.

use crate::backend::RenderBackend;
use crate::node::{ListFormat, Mark};

/// HTML render backend.
///
/// Produces:
/// - `<ul>` / `<ol>` for unordered / ordered lists
/// - `<li>` for list items
/// - `<strong>`, `<em>`, `<u>`, `<s>`, `<code>` for bold, italic, underline,
///   strikethrough and code marks
pub struct HtmlBackend;

impl HtmlBackend {
    fn list_tag(format: ListFormat) -> &'static str {
        match format {
            ListFormat::Unordered => "ul",
            ListFormat::Ordered => "ol",
        }
    }

    fn mark_tag(mark: Mark) -> &'static str {
        match mark {
            Mark::Bold => "strong",
            Mark::Italic => "em",
            Mark::Underline => "u",
            Mark::Strikethrough => "s",
            Mark::Code => "code",
        }
    }
}

impl RenderBackend for HtmlBackend {
    fn list_start(format: ListFormat, out: &mut String) {
        out.push('<');
        out.push_str(Self::list_tag(format));
        out.push('>');
    }

    fn list_end(format: ListFormat, out: &mut String) {
        out.push_str("</");
        out.push_str(Self::list_tag(format));
        out.push('>');
    }

    fn item_start(out: &mut String) {
        out.push_str("<li>");
    }

    fn item_end(out: &mut String) {
        out.push_str("</li>");
    }

    fn mark_start(mark: Mark, out: &mut String) {
        out.push('<');
        out.push_str(Self::mark_tag(mark));
        out.push('>');
    }

    fn mark_end(mark: Mark, out: &mut String) {
        out.push_str("</");
        out.push_str(Self::mark_tag(mark));
        out.push('>');
    }
}
