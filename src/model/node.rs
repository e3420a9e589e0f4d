//! Node types.
//!
//! A rich-text document is a tree of [`Node`]s. Element nodes (paragraphs,
//! headings, lists, ...) hold children; leaf nodes (text, line breaks,
//! images, horizontal rules) do not. The JSON shape follows the Lexical
//! editor: a `type` tag followed by the node's fields in camelCase.

use super::TextNode;
use serde::{Serialize, Serializer};
use serde_json::Value;

/// A node in a rich-text document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    /// A paragraph block
    Paragraph(Element),

    /// A heading block (h1-h6)
    Heading(HeadingNode),

    /// A block quote
    Quote(Element),

    /// An ordered or unordered list
    List(ListNode),

    /// An item of a list
    #[serde(rename = "listitem")]
    ListItem(ListItemNode),

    /// A code block
    Code(CodeNode),

    /// A hyperlink wrapping inline children
    Link(LinkNode),

    /// A horizontal rule
    #[serde(rename = "horizontalrule")]
    HorizontalRule(LeafBlock),

    /// An image
    Image(ImageNode),

    /// A run of text
    Text(TextNode),

    /// A line break inside a block
    #[serde(rename = "linebreak")]
    LineBreak(LineBreakNode),

    /// A node of a kind this crate does not model
    #[serde(untagged)]
    Unknown(UnknownNode),
}

impl Node {
    /// Create a paragraph with the given children.
    pub fn paragraph(children: Vec<Node>) -> Self {
        Node::Paragraph(Element::new(children))
    }

    /// Create an unformatted text node.
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(TextNode::new(text))
    }

    /// Create a heading with the given children.
    pub fn heading(tag: HeadingTag, children: Vec<Node>) -> Self {
        Node::Heading(HeadingNode {
            tag,
            element: Element::new(children),
        })
    }

    /// Create a block quote with the given children.
    pub fn quote(children: Vec<Node>) -> Self {
        Node::Quote(Element::new(children))
    }

    /// Create a horizontal rule.
    pub fn horizontal_rule() -> Self {
        Node::HorizontalRule(LeafBlock::default())
    }

    /// Create a line break.
    pub fn line_break() -> Self {
        Node::LineBreak(LineBreakNode { version: 1 })
    }

    /// The node's `type` tag.
    pub fn kind(&self) -> &str {
        match self {
            Node::Paragraph(_) => "paragraph",
            Node::Heading(_) => "heading",
            Node::Quote(_) => "quote",
            Node::List(_) => "list",
            Node::ListItem(_) => "listitem",
            Node::Code(_) => "code",
            Node::Link(_) => "link",
            Node::HorizontalRule(_) => "horizontalrule",
            Node::Image(_) => "image",
            Node::Text(_) => "text",
            Node::LineBreak(_) => "linebreak",
            Node::Unknown(node) => &node.kind,
        }
    }

    /// The element part of the node, if it has children.
    pub fn element(&self) -> Option<&Element> {
        match self {
            Node::Paragraph(element) | Node::Quote(element) => Some(element),
            Node::Heading(node) => Some(&node.element),
            Node::List(node) => Some(&node.element),
            Node::ListItem(node) => Some(&node.element),
            Node::Code(node) => Some(&node.element),
            Node::Link(node) => Some(&node.element),
            _ => None,
        }
    }

    /// Child nodes, or `None` for leaf nodes.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Unknown(node) => node.children.as_deref(),
            _ => self.element().map(|element| element.children.as_slice()),
        }
    }

    /// Literal text carried by the node itself (not its children).
    pub fn text_content(&self) -> Option<&str> {
        match self {
            Node::Text(node) => Some(&node.text),
            Node::Unknown(node) => node.raw.get("text").and_then(Value::as_str),
            _ => None,
        }
    }

    /// Check if this is a text node.
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Check if this node has a children list.
    pub fn is_element(&self) -> bool {
        self.children().is_some()
    }
}

/// Direction of text inside an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    /// Parse a direction name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ltr" => Some(Direction::Ltr),
            "rtl" => Some(Direction::Rtl),
            _ => None,
        }
    }
}

/// Fields shared by every element node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    /// Child nodes
    pub children: Vec<Node>,

    /// Text direction (`null` when mixed or unknown)
    pub direction: Option<Direction>,

    /// Element alignment format ("", "left", "center", ...)
    pub format: String,

    /// Indentation level
    pub indent: u32,

    /// Format applied to text typed into an empty element
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_format: Option<u32>,

    /// Node schema version
    pub version: u32,
}

impl Element {
    /// Create an element with baseline formatting.
    pub fn new(children: Vec<Node>) -> Self {
        Self {
            children,
            direction: Some(Direction::Ltr),
            format: String::new(),
            indent: 0,
            text_format: None,
            version: 1,
        }
    }

    /// Set the text format carried by the element.
    pub fn with_text_format(mut self, text_format: u32) -> Self {
        self.text_format = Some(text_format);
        self
    }

    /// Check if the element has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Default for Element {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Fields shared by block-level leaf nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeafBlock {
    pub direction: Option<Direction>,
    pub format: String,
    pub indent: u32,
    pub version: u32,
}

impl Default for LeafBlock {
    fn default() -> Self {
        Self {
            direction: Some(Direction::Ltr),
            format: String::new(),
            indent: 0,
            version: 1,
        }
    }
}

/// Heading level tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingTag {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingTag {
    /// Heading tag for a level, clamped to 1-6.
    pub fn from_level(level: u8) -> Self {
        match level {
            0 | 1 => HeadingTag::H1,
            2 => HeadingTag::H2,
            3 => HeadingTag::H3,
            4 => HeadingTag::H4,
            5 => HeadingTag::H5,
            _ => HeadingTag::H6,
        }
    }

    /// Parse a tag name such as `"h2"`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "h1" => Some(HeadingTag::H1),
            "h2" => Some(HeadingTag::H2),
            "h3" => Some(HeadingTag::H3),
            "h4" => Some(HeadingTag::H4),
            "h5" => Some(HeadingTag::H5),
            "h6" => Some(HeadingTag::H6),
            _ => None,
        }
    }

    /// Numeric heading level (1-6).
    pub fn level(self) -> u8 {
        match self {
            HeadingTag::H1 => 1,
            HeadingTag::H2 => 2,
            HeadingTag::H3 => 3,
            HeadingTag::H4 => 4,
            HeadingTag::H5 => 5,
            HeadingTag::H6 => 6,
        }
    }
}

/// A heading block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadingNode {
    pub tag: HeadingTag,

    #[serde(flatten)]
    pub element: Element,
}

/// Kind of list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    #[default]
    Bullet,
    Number,
    Check,
}

impl ListType {
    /// Parse a list type name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "bullet" => Some(ListType::Bullet),
            "number" => Some(ListType::Number),
            "check" => Some(ListType::Check),
            _ => None,
        }
    }

    /// HTML tag used to render this list type.
    pub fn tag(self) -> ListTag {
        match self {
            ListType::Number => ListTag::Ol,
            ListType::Bullet | ListType::Check => ListTag::Ul,
        }
    }
}

/// HTML tag of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListTag {
    Ul,
    Ol,
}

/// A list block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListNode {
    pub list_type: ListType,

    /// Number of the first item
    pub start: u32,

    pub tag: ListTag,

    #[serde(flatten)]
    pub element: Element,
}

impl ListNode {
    /// Create a list; `items` should be list item nodes.
    pub fn new(list_type: ListType, start: u32, items: Vec<Node>) -> Self {
        Self {
            list_type,
            start,
            tag: list_type.tag(),
            element: Element::new(items),
        }
    }
}

/// An item of a list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItemNode {
    /// Item number
    pub value: u32,

    #[serde(flatten)]
    pub element: Element,
}

/// A code block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeNode {
    /// Syntax language, if known
    pub language: Option<String>,

    #[serde(flatten)]
    pub element: Element,
}

/// A hyperlink.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkNode {
    pub url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    #[serde(flatten)]
    pub element: Element,
}

/// An image.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageNode {
    pub src: String,

    pub alt_text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_caption: Option<bool>,

    #[serde(flatten)]
    pub block: LeafBlock,
}

impl ImageNode {
    /// Create an image with no size hints.
    pub fn new(src: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt_text: alt_text.into(),
            width: None,
            height: None,
            max_width: None,
            show_caption: None,
            block: LeafBlock::default(),
        }
    }
}

/// A line break.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineBreakNode {
    pub version: u32,
}

/// A node of an unmodeled kind.
///
/// The raw JSON is kept so the node survives re-serialization unchanged.
/// Children, when present, are decoded so traversal still reaches them.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownNode {
    /// The node's `type` tag
    pub kind: String,

    /// The node exactly as it was read
    pub raw: Value,

    /// Decoded children, if the node had a children list
    pub children: Option<Vec<Node>>,
}

impl Serialize for UnknownNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_paragraph_serializes_as_lexical() {
        let node = Node::paragraph(vec![Node::text("Hi")]);
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "paragraph",
                "children": [{
                    "type": "text",
                    "detail": 0,
                    "format": 0,
                    "mode": "normal",
                    "style": "",
                    "text": "Hi",
                    "version": 1
                }],
                "direction": "ltr",
                "format": "",
                "indent": 0,
                "version": 1
            })
        );
    }

    #[test]
    fn test_list_serialization() {
        let item = Node::ListItem(ListItemNode {
            value: 1,
            element: Element::new(vec![Node::text("one")]),
        });
        let list = Node::List(ListNode::new(ListType::Number, 1, vec![item]));
        let value = serde_json::to_value(&list).unwrap();
        assert_eq!(value["type"], "list");
        assert_eq!(value["listType"], "number");
        assert_eq!(value["tag"], "ol");
        assert_eq!(value["children"][0]["type"], "listitem");
        assert_eq!(value["children"][0]["value"], 1);
    }

    #[test]
    fn test_unknown_node_keeps_raw_json() {
        let raw = json!({"type": "upload", "value": {"id": 7}, "version": 2});
        let node = Node::Unknown(UnknownNode {
            kind: "upload".to_string(),
            raw: raw.clone(),
            children: None,
        });
        assert_eq!(serde_json::to_value(&node).unwrap(), raw);
        assert_eq!(node.kind(), "upload");
        assert!(!node.is_element());
    }

    #[test]
    fn test_heading_tag() {
        assert_eq!(HeadingTag::from_level(9), HeadingTag::H6);
        assert_eq!(HeadingTag::from_name("h3").map(HeadingTag::level), Some(3));
        assert_eq!(HeadingTag::from_name("h7"), None);
    }

    #[test]
    fn test_children_of_leaf_nodes() {
        assert!(Node::horizontal_rule().children().is_none());
        assert!(Node::text("x").children().is_none());
        assert_eq!(Node::quote(vec![]).children().map(<[Node]>::len), Some(0));
    }
}
