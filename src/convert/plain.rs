//! Building documents from plain text.

use serde_json::Value;

use crate::detect::is_rich_text;
use crate::model::{Document, Element, Node};
use crate::parser::Decoder;

/// Build a document holding `text` verbatim.
///
/// The result always has exactly one paragraph with exactly one text node.
/// Markdown syntax is not interpreted and newlines are not split; see
/// [`markdown_to_document`](super::markdown_to_document) for that.
pub fn build_document(text: &str) -> Document {
    Document::from_blocks(vec![Node::paragraph(vec![Node::text(text)])])
}

/// Build a document with one paragraph per line of `text`.
///
/// Runs of newlines separate paragraphs; each paragraph is trimmed and
/// blank ones are dropped, so whitespace-only input yields no paragraphs.
pub fn paragraphs_from_text(text: &str) -> Document {
    let blocks = text
        .split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| Node::Paragraph(Element::new(vec![Node::text(line)]).with_text_format(0)))
        .collect();

    Document::from_blocks(blocks)
}

/// Normalize a rich-text field value submitted by a form.
///
/// Strings become paragraph documents, documents are decoded leniently, and
/// any other value yields `None` (leave the field untouched).
pub fn normalize_field(value: &Value) -> Option<Document> {
    match value {
        Value::String(text) => Some(paragraphs_from_text(text)),
        _ if is_rich_text(value) => Decoder::lenient().decode_document(value).ok(),
        _ => None,
    }
}
