//! Document node model.
//!
//! Nodes mirror the portable JSON shape produced by the editor: every node is an
//! object carrying a `type` discriminator plus variant-specific attributes.
//!
//! ```json
//! {"type": "list", "format": "unordered", "children": [
//!     {"type": "list-item", "children": [{"type": "text", "text": "Hi", "bold": true}]}
//! ]}
//! ```
//!
//! Nested lists are stored as siblings that follow the `list-item` they belong
//! to, not as children of that item.

use std::fmt;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// List container kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListFormat {
    /// Bulleted list (`<ul>`).
    Unordered,
    /// Numbered list (`<ol>`).
    Ordered,
}

/// A `list` block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    /// Container kind.
    pub format: ListFormat,
    /// Items and nested lists, in document order.
    #[serde(default)]
    pub children: Vec<Node>,
    /// Indentation hint from the editor.
    ///
    /// Reserved: carried through (de)serialization but never affects output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indent_level: Option<u32>,
}

impl List {
    /// Set the reserved indentation hint.
    #[must_use]
    pub fn with_indent_level(mut self, level: u32) -> Self {
        self.indent_level = Some(level);
        self
    }
}

impl Drop for List {
    fn drop(&mut self) {
        dismantle(&mut self.children);
    }
}

/// A `list-item` block holding inline content.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    /// Inline runs, in document order.
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Drop for ListItem {
    fn drop(&mut self) {
        dismantle(&mut self.children);
    }
}

/// Drop a subtree with an explicit stack instead of recursion, so arbitrarily
/// deep documents can be freed.
fn dismantle(children: &mut Vec<Node>) {
    let mut pending = std::mem::take(children);
    while let Some(node) = pending.pop() {
        match node {
            Node::List(mut list) => pending.append(&mut list.children),
            Node::ListItem(mut item) => pending.append(&mut item.children),
            Node::Text(_) | Node::Unknown { .. } => {}
        }
    }
}

/// Inline formatting mark.
///
/// [`Mark::ALL`] lists marks from outermost to innermost wrapping tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    /// `bold` flag, rendered as `<strong>`.
    Bold,
    /// `italic` flag, rendered as `<em>`.
    Italic,
    /// `underline` flag, rendered as `<u>`.
    Underline,
    /// `strikethrough` flag, rendered as `<s>`.
    Strikethrough,
    /// `code` flag, rendered as `<code>`.
    Code,
}

impl Mark {
    /// All marks in wrapping order, outermost first.
    pub const ALL: [Mark; 5] = [
        Mark::Bold,
        Mark::Italic,
        Mark::Underline,
        Mark::Strikethrough,
        Mark::Code,
    ];
}

/// A `text` run with independent formatting flags.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    /// Raw (unescaped) text content.
    pub text: String,
    /// Strong emphasis.
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,
    /// Emphasis.
    #[serde(default, skip_serializing_if = "is_false")]
    pub italic: bool,
    /// Underlined text.
    #[serde(default, skip_serializing_if = "is_false")]
    pub underline: bool,
    /// Struck-through text.
    #[serde(default, skip_serializing_if = "is_false")]
    pub strikethrough: bool,
    /// Inline code.
    #[serde(default, skip_serializing_if = "is_false")]
    pub code: bool,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !*value
}

impl Text {
    /// Create an unformatted text run.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    #[must_use]
    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    #[must_use]
    pub fn strikethrough(mut self) -> Self {
        self.strikethrough = true;
        self
    }

    #[must_use]
    pub fn code(mut self) -> Self {
        self.code = true;
        self
    }

    /// Whether the given mark is active on this run.
    pub fn has(&self, mark: Mark) -> bool {
        match mark {
            Mark::Bold => self.bold,
            Mark::Italic => self.italic,
            Mark::Underline => self.underline,
            Mark::Strikethrough => self.strikethrough,
            Mark::Code => self.code,
        }
    }

    /// Active marks in wrapping order, outermost first.
    pub fn marks(&self) -> impl DoubleEndedIterator<Item = Mark> + '_ {
        Mark::ALL.into_iter().filter(move |mark| self.has(*mark))
    }
}

/// One element of the document tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    List(List),
    ListItem(ListItem),
    Text(Text),
    /// Node whose `type` is not part of the model.
    ///
    /// Kept so the renderer can report it together with its position.
    Unknown {
        /// The unrecognized `type` value.
        kind: String,
    },
}

impl Node {
    /// Create a `list` node.
    pub fn list(format: ListFormat, children: Vec<Node>) -> Self {
        Self::List(List {
            format,
            children,
            indent_level: None,
        })
    }

    /// Create a `list-item` node.
    pub fn list_item(children: Vec<Node>) -> Self {
        Self::ListItem(ListItem { children })
    }

    /// Create an unformatted `text` node.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(Text::new(text))
    }

    /// The `type` discriminator of this node.
    pub fn kind(&self) -> &str {
        match self {
            Self::List(_) => "list",
            Self::ListItem(_) => "list-item",
            Self::Text(_) => "text",
            Self::Unknown { kind } => kind,
        }
    }
}

impl From<List> for Node {
    fn from(list: List) -> Self {
        Self::List(list)
    }
}

impl From<ListItem> for Node {
    fn from(item: ListItem) -> Self {
        Self::ListItem(item)
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Self::Text(text)
    }
}

/// Borrowed view used to serialize known variants with their `type` tag.
#[derive(Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
enum Tagged<'a> {
    List(&'a List),
    ListItem(&'a ListItem),
    Text(&'a Text),
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::List(list) => Tagged::List(list).serialize(serializer),
            Self::ListItem(item) => Tagged::ListItem(item).serialize(serializer),
            Self::Text(text) => Tagged::Text(text).serialize(serializer),
            Self::Unknown { kind } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("type", kind)?;
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(NodeVisitor)
    }
}

/// Object keys understood by some node variant.
#[derive(Clone, Copy, Deserialize)]
#[serde(field_identifier, rename_all = "camelCase")]
enum Field {
    Type,
    Format,
    Children,
    IndentLevel,
    Text,
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Code,
    #[serde(other)]
    Other,
}

impl Field {
    /// Whether the key is read for a node of the given `type`.
    ///
    /// Keys seen before `type` are always read.
    fn applies_to(self, kind: Option<&str>) -> bool {
        let Some(kind) = kind else {
            return true;
        };
        match self {
            Self::Type => true,
            Self::Format | Self::IndentLevel => kind == "list",
            Self::Children => kind == "list" || kind == "list-item",
            Self::Text | Self::Bold | Self::Italic | Self::Underline | Self::Strikethrough
            | Self::Code => kind == "text",
            Self::Other => false,
        }
    }
}

/// Builds a node in one pass over its object, whatever the key order.
struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = Node;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a node object with a `type` field")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Node, A::Error> {
        let mut kind: Option<String> = None;
        let mut format = None;
        let mut children = None;
        let mut indent_level = None;
        let mut text = None;
        let mut run = Text::default();

        while let Some(field) = map.next_key::<Field>()? {
            if !field.applies_to(kind.as_deref()) {
                map.next_value::<IgnoredAny>()?;
                continue;
            }
            match field {
                Field::Type => kind = Some(map.next_value()?),
                Field::Format => format = Some(map.next_value()?),
                Field::Children => children = Some(map.next_value()?),
                Field::IndentLevel => indent_level = map.next_value()?,
                Field::Text => text = Some(map.next_value()?),
                Field::Bold => run.bold = map.next_value()?,
                Field::Italic => run.italic = map.next_value()?,
                Field::Underline => run.underline = map.next_value()?,
                Field::Strikethrough => run.strikethrough = map.next_value()?,
                Field::Code => run.code = map.next_value()?,
                Field::Other => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        let missing = <A::Error as de::Error>::missing_field;
        let kind = kind.ok_or_else(|| missing("type"))?;
        let node = match kind.as_str() {
            "list" => Node::List(List {
                format: format.ok_or_else(|| missing("format"))?,
                children: children.unwrap_or_default(),
                indent_level,
            }),
            "list-item" => Node::ListItem(ListItem {
                children: children.unwrap_or_default(),
            }),
            "text" => {
                run.text = text.ok_or_else(|| missing("text"))?;
                Node::Text(run)
            }
            _ => Node::Unknown { kind },
        };
        Ok(node)
    }
}

/// Parse a JSON array of top-level nodes.
///
/// Nesting depth is not limited here; the renderer enforces its own bound.
pub fn parse_document(json: &str) -> Result<Vec<Node>, serde_json::Error> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    deserializer.disable_recursion_limit();
    let nodes = Vec::<Node>::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(nodes)
}
