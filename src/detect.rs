//! Input format detection.

use crate::error::Result;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Kind of textual input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// JSON with a rich-text `root`
    Document,
    /// Valid JSON that is not a rich-text document
    Json,
    /// Anything else
    PlainText,
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputKind::Document => write!(f, "rich-text document"),
            InputKind::Json => write!(f, "JSON (not a rich-text document)"),
            InputKind::PlainText => write!(f, "plain text"),
        }
    }
}

/// Check whether a value looks like a rich-text document.
///
/// Only the outer shape is checked: an object with an object-valued `root`.
///
/// # Example
/// ```
/// use serde_json::json;
/// use unlexical::detect::is_rich_text;
///
/// assert!(is_rich_text(&json!({"root": {}})));
/// assert!(!is_rich_text(&json!({"root": null})));
/// assert!(!is_rich_text(&json!("text")));
/// ```
pub fn is_rich_text(value: &Value) -> bool {
    value
        .as_object()
        .and_then(|object| object.get("root"))
        .is_some_and(Value::is_object)
}

/// Detect the kind of a textual input.
pub fn detect_input(input: &str) -> InputKind {
    let trimmed = input.trim_start();
    if !(trimmed.starts_with('{') || trimmed.starts_with('[')) {
        return InputKind::PlainText;
    }

    match serde_json::from_str::<Value>(input) {
        Ok(value) if is_rich_text(&value) => InputKind::Document,
        Ok(_) => InputKind::Json,
        Err(_) => InputKind::PlainText,
    }
}

/// Detect the kind of a file's contents.
pub fn detect_input_from_path<P: AsRef<Path>>(path: P) -> Result<InputKind> {
    let content = fs::read_to_string(path)?;
    Ok(detect_input(&content))
}
