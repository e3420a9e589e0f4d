//! Document-level types.

use super::{Element, Node};
use serde::{Serialize, Serializer};

/// A rich-text document: a single root element holding the top-level blocks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    /// The root element
    #[serde(serialize_with = "serialize_root")]
    pub root: Element,
}

impl Document {
    /// Create a new document with no blocks.
    pub fn new() -> Self {
        Self {
            root: Element::new(Vec::new()),
        }
    }

    /// Create a document from top-level blocks.
    pub fn from_blocks(blocks: Vec<Node>) -> Self {
        Self {
            root: Element::new(blocks),
        }
    }

    /// Top-level blocks.
    pub fn blocks(&self) -> &[Node] {
        &self.root.children
    }

    /// Append a top-level block.
    pub fn add_block(&mut self, block: Node) {
        self.root.children.push(block);
    }

    /// Number of top-level blocks.
    pub fn block_count(&self) -> usize {
        self.root.children.len()
    }

    /// Check if the document has no blocks.
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    /// Total number of nodes below the root.
    pub fn node_count(&self) -> usize {
        fn count(nodes: &[Node]) -> usize {
            nodes
                .iter()
                .map(|node| 1 + node.children().map(count).unwrap_or(0))
                .sum()
        }
        count(&self.root.children)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
#[serde(tag = "type", rename = "root")]
struct RootRef<'a> {
    #[serde(flatten)]
    element: &'a Element,
}

fn serialize_root<S: Serializer>(
    root: &Element,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    RootRef { element: root }.serialize(serializer)
}

/// An untyped rich-text field value after decoding.
///
/// CMS fields may hold either a plain string or a document; anything else is
/// treated as [`RichText::Empty`].
#[derive(Debug, Clone, PartialEq)]
pub enum RichText {
    /// The value was a plain string
    Plain(String),

    /// The value was a rich-text document
    Document(Document),

    /// The value was missing or could not be read as either
    Empty,
}

impl RichText {
    /// Check if this is the empty sentinel.
    pub fn is_empty(&self) -> bool {
        matches!(self, RichText::Empty)
    }

    /// The decoded document, if any.
    pub fn as_document(&self) -> Option<&Document> {
        match self {
            RichText::Document(doc) => Some(doc),
            _ => None,
        }
    }

    /// Convert into a document, if any.
    pub fn into_document(self) -> Option<Document> {
        match self {
            RichText::Document(doc) => Some(doc),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.block_count(), 0);
    }

    #[test]
    fn test_root_serialization() {
        let doc = Document::new();
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(
            value,
            json!({
                "root": {
                    "type": "root",
                    "children": [],
                    "direction": "ltr",
                    "format": "",
                    "indent": 0,
                    "version": 1
                }
            })
        );
    }

    #[test]
    fn test_node_count() {
        let doc = Document::from_blocks(vec![
            Node::paragraph(vec![Node::text("a"), Node::text("b")]),
            Node::horizontal_rule(),
        ]);
        assert_eq!(doc.block_count(), 2);
        assert_eq!(doc.node_count(), 4);
    }

    #[test]
    fn test_rich_text_accessors() {
        assert!(RichText::Empty.is_empty());
        assert!(RichText::Plain("x".into()).as_document().is_none());
        let rich = RichText::Document(Document::new());
        assert!(rich.into_document().is_some());
    }
}
