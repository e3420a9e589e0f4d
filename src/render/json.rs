//! JSON rendering for rich-text documents.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::model::Document;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a document to a JSON string.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
        JsonFormat::Compact => serde_json::to_string(doc),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Convert a document to a JSON value, ready to store in a content record.
pub fn to_value(doc: &Document) -> Result<Value> {
    serde_json::to_value(doc).map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Node;

    #[test]
    fn test_to_json_pretty() {
        let doc = Document::from_blocks(vec![Node::paragraph(vec![Node::text("Hello")])]);

        let json = to_json(&doc, JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"root\""));
        assert!(json.contains("Hello"));
        assert!(json.contains('\n')); // Pretty has newlines
    }

    #[test]
    fn test_to_json_compact() {
        let doc = Document::new();

        let json = to_json(&doc, JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n')); // Compact has no newlines
        assert!(json.starts_with("{\"root\":{\"type\":\"root\""));
    }

    #[test]
    fn test_to_value_reads_back() {
        let doc = Document::from_blocks(vec![Node::paragraph(vec![Node::text("x")])]);
        let value = to_value(&doc).unwrap();
        let decoded: Document = serde_json::from_value(value).unwrap();
        assert_eq!(decoded, doc);
    }
}
