//! Rich-text JSON decoding.

mod decoder;
mod options;

pub use decoder::Decoder;
pub use options::{DecodeOptions, ErrorMode};

use crate::model::RichText;
use serde_json::Value;

/// Decode an untyped rich-text field value without ever failing.
///
/// This is the lenient entry point used by text extraction: malformed nodes
/// are skipped and anything that is neither a string nor a document becomes
/// [`RichText::Empty`].
pub fn decode(value: &Value) -> RichText {
    Decoder::lenient().decode_field(value)
}
