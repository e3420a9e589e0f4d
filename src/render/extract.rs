//! Summary text extraction for previews and search snippets.

use serde_json::Value;

use crate::model::{Document, RichText};
use crate::parser;

/// Extract plain text from any rich-text field value.
///
/// Strings are returned unchanged. Documents yield the text of each
/// top-level block's direct children, concatenated within a block and joined
/// with a single space across blocks. Anything else, including malformed
/// documents, yields an empty string.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use unlexical::render::extract_text;
///
/// let value = json!({"root": {"children": [
///     {"children": [{"text": "Hello"}, {"text": "World"}]},
///     {"children": [{"text": "Again"}]}
/// ]}});
/// assert_eq!(extract_text(&value), "HelloWorld Again");
/// assert_eq!(extract_text(&json!("as is")), "as is");
/// assert_eq!(extract_text(&json!(42)), "");
/// ```
pub fn extract_text(value: &Value) -> String {
    match parser::decode(value) {
        RichText::Plain(text) => text,
        RichText::Document(doc) => extract_document_text(&doc),
        RichText::Empty => String::new(),
    }
}

/// Extract plain text from a field that may be absent.
///
/// A missing field reads the same as `null`.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use unlexical::render::extract_field_text;
///
/// let record = json!({"title": "Boat"});
/// assert_eq!(extract_field_text(record.get("description")), "");
/// assert_eq!(extract_field_text(record.get("title")), "Boat");
/// ```
pub fn extract_field_text(value: Option<&Value>) -> String {
    value.map(extract_text).unwrap_or_default()
}

/// Extract summary text from a decoded document.
///
/// Top-level nodes without children (rules, images, stray text) contribute
/// nothing, not even a separator. Nested elements are not descended into.
pub fn extract_document_text(doc: &Document) -> String {
    doc.blocks()
        .iter()
        .filter_map(|block| block.children())
        .map(|children| {
            children
                .iter()
                .map(|child| child.text_content().unwrap_or(""))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(" ")
}
