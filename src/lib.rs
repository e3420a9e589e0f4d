//! # unlexical
//!
//! Lexical rich-text documents to plain text and back.
//!
//! CMS rich-text fields store documents as a JSON tree (a `root` node with
//! paragraphs, headings, lists, and text runs). This library decodes those
//! trees into typed nodes, flattens them into plain text for previews and
//! search summaries, and builds new documents from plain text or Markdown.
//!
//! ## Quick Start
//!
//! ```
//! use serde_json::json;
//! use unlexical::{build_document, extract_text, render};
//!
//! // Flatten whatever a rich-text field holds
//! let field = json!({"root": {"children": [
//!     {"type": "paragraph", "children": [{"type": "text", "text": "Hello"}]}
//! ]}});
//! assert_eq!(extract_text(&field), "Hello");
//!
//! // Build a document from plain text and store it as JSON
//! let doc = build_document("plain text");
//! let json = render::to_json(&doc, render::JsonFormat::Compact)?;
//! assert!(json.contains("\"plain text\""));
//! # Ok::<(), unlexical::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Fail-soft extraction**: never errors, malformed content reads as empty
//! - **Typed model**: tagged-union nodes with Lexical-compatible JSON
//! - **Strict or lenient decoding**: report or skip malformed nodes
//! - **Markdown conversion**: headings, lists, links, images, code, quotes
//! - **Visitors**: customize plain-text rendering per node kind

pub mod convert;
pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use convert::{
    build_document, markdown_to_document, paragraphs_from_text, MarkdownOptions, SourceFormat,
};
pub use detect::{detect_input, is_rich_text, InputKind};
pub use error::{Error, Result};
pub use model::{Document, Element, Node, RichText, TextFormat, TextNode};
pub use parser::{decode, DecodeOptions, Decoder, ErrorMode};
pub use render::{extract_field_text, extract_text, JsonFormat, RenderOptions};

use serde_json::Value;
use std::fs;
use std::path::Path;

/// Parse a rich-text document from a JSON string.
///
/// Decoding is strict: any malformed node is an error.
///
/// # Example
///
/// ```
/// let doc = unlexical::parse_str(r#"{"root": {"children": []}}"#).unwrap();
/// assert!(doc.is_empty());
/// ```
pub fn parse_str(json: &str) -> Result<Document> {
    parse_str_with_options(json, DecodeOptions::default())
}

/// Parse a rich-text document from a JSON string with custom options.
///
/// # Example
///
/// ```
/// use unlexical::{parse_str_with_options, DecodeOptions};
///
/// let json = r#"{"root": {"children": [42, {"children": []}]}}"#;
/// let doc = parse_str_with_options(json, DecodeOptions::new().lenient()).unwrap();
/// assert_eq!(doc.block_count(), 1);
/// ```
pub fn parse_str_with_options(json: &str, options: DecodeOptions) -> Result<Document> {
    let value: Value = serde_json::from_str(json)?;
    Decoder::new(options).decode_document(&value)
}

/// Parse a rich-text document from JSON bytes.
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    parse_bytes_with_options(data, DecodeOptions::default())
}

/// Parse a rich-text document from JSON bytes with custom options.
pub fn parse_bytes_with_options(data: &[u8], options: DecodeOptions) -> Result<Document> {
    let value: Value = serde_json::from_slice(data)?;
    Decoder::new(options).decode_document(&value)
}

/// Parse a rich-text document from a JSON file.
///
/// # Example
///
/// ```no_run
/// let doc = unlexical::parse_file("description.json").unwrap();
/// println!("Blocks: {}", doc.block_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    parse_file_with_options(path, DecodeOptions::default())
}

/// Parse a rich-text document from a JSON file with custom options.
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: DecodeOptions) -> Result<Document> {
    let data = fs::read(path)?;
    parse_bytes_with_options(&data, options)
}

/// Extract summary text from a file holding either JSON or plain text.
///
/// Only I/O failures are errors. Files that are not JSON are treated as
/// a plain string field and returned as-is.
pub fn extract_text_from_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let content = fs::read_to_string(path)?;
    Ok(extract_text_from_str(&content))
}

/// Extract summary text from a string holding either JSON or plain text.
///
/// Any valid JSON, scalars included, is extracted as a field value, so
/// `"\"quoted\""` yields `quoted` and `42` yields nothing. Only content
/// that fails to parse is returned as-is.
pub fn extract_text_from_str(content: &str) -> String {
    match serde_json::from_str::<Value>(content) {
        Ok(value) => extract_text(&value),
        Err(_) => content.to_string(),
    }
}

/// Convert Markdown to rich-text JSON.
///
/// # Example
///
/// ```
/// use unlexical::{markdown_to_json, JsonFormat};
///
/// let json = markdown_to_json("## Specs", JsonFormat::Compact).unwrap();
/// assert!(json.contains("\"tag\":\"h2\""));
/// ```
pub fn markdown_to_json(markdown: &str, format: JsonFormat) -> Result<String> {
    let doc = markdown_to_document(markdown, &MarkdownOptions::default());
    render::to_json(&doc, format)
}
