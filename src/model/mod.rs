//! Document model types for rich-text content.
//!
//! This module defines a tagged-union representation of Lexical-style
//! rich-text documents. Decoding from untyped JSON lives in
//! [`crate::parser`]; serialization back to JSON is derived here.

mod document;
mod node;
mod text;

pub use document::{Document, RichText};
pub use node::{
    CodeNode, Direction, Element, HeadingNode, HeadingTag, ImageNode, LeafBlock, LineBreakNode,
    LinkNode, ListItemNode, ListNode, ListTag, ListType, Node, UnknownNode,
};
pub use text::{TextFormat, TextMode, TextNode};
