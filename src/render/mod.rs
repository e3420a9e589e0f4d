//! Rendering module for converting documents to text and JSON.

mod extract;
mod json;
mod options;
mod text;
pub mod visitor;

pub use extract::{extract_document_text, extract_field_text, extract_text};
pub use json::{to_json, to_value, JsonFormat};
pub use options::RenderOptions;
pub use text::{to_text, to_text_with_visitor};
pub use visitor::{CompositeVisitor, DefaultVisitor, DocumentVisitor, VisitorAction};
