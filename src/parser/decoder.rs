//! Decoding of untyped JSON into the document model.
//!
//! Rich-text values arrive from the content store as arbitrary JSON. The
//! decoder walks that JSON once and produces typed [`Node`]s. In strict mode
//! the first malformed node aborts decoding with an error naming its JSON
//! path; in lenient mode malformed nodes are dropped and decoding continues.

use log::debug;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use super::{DecodeOptions, ErrorMode};
use crate::error::{Error, Result};
use crate::model::{
    CodeNode, Direction, Document, Element, HeadingNode, HeadingTag, ImageNode, LeafBlock,
    LineBreakNode, LinkNode, ListItemNode, ListNode, ListType, Node, RichText, TextFormat,
    TextMode, TextNode, UnknownNode,
};

/// Decoder for rich-text JSON values.
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    options: DecodeOptions,
}

impl Decoder {
    /// Create a decoder with the given options.
    pub fn new(options: DecodeOptions) -> Self {
        Self { options }
    }

    /// Create a lenient decoder.
    pub fn lenient() -> Self {
        Self::new(DecodeOptions::new().lenient())
    }

    /// Get the decoder options.
    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Decode a document value.
    ///
    /// The value must be an object whose `root` is an object with a
    /// `children` array, regardless of error mode.
    pub fn decode_document(&self, value: &Value) -> Result<Document> {
        let object = value
            .as_object()
            .ok_or_else(|| Error::invalid_at("$", "expected an object"))?;
        let root = object
            .get("root")
            .and_then(Value::as_object)
            .ok_or_else(|| Error::invalid_at("root", "missing or not an object"))?;

        let root = self.decode_element(root, "root")?;
        Ok(Document { root })
    }

    /// Decode any rich-text field value, never failing.
    ///
    /// Strings become [`RichText::Plain`], well-formed documents become
    /// [`RichText::Document`], and everything else is [`RichText::Empty`].
    pub fn decode_field(&self, value: &Value) -> RichText {
        match value {
            Value::String(text) => RichText::Plain(text.clone()),
            Value::Object(_) => match self.decode_document(value) {
                Ok(doc) => RichText::Document(doc),
                Err(e) => {
                    debug!("treating rich-text value as empty: {}", e);
                    RichText::Empty
                }
            },
            _ => RichText::Empty,
        }
    }

    /// Decode a single node.
    pub fn decode_node(&self, value: &Value, path: &str) -> Result<Node> {
        let object = value
            .as_object()
            .ok_or_else(|| Error::invalid_at(path, "expected an object"))?;

        let kind = match object.get("type").and_then(Value::as_str) {
            Some(kind) => kind,
            None => self.infer_kind(object, path)?,
        };

        let node = match kind {
            "text" => Node::Text(decode_text(object)),
            "linebreak" => Node::LineBreak(LineBreakNode {
                version: version_of(object),
            }),
            "paragraph" => Node::Paragraph(self.decode_element(object, path)?),
            "quote" => Node::Quote(self.decode_element(object, path)?),
            "heading" => {
                let tag = object
                    .get("tag")
                    .and_then(Value::as_str)
                    .and_then(HeadingTag::from_name);
                match tag {
                    Some(tag) => Node::Heading(HeadingNode {
                        tag,
                        element: self.decode_element(object, path)?,
                    }),
                    // Keep the text reachable; the raw JSON is preserved as-is.
                    None if self.options.is_lenient() => {
                        debug!("{}: heading without a valid tag, keeping it opaque", path);
                        self.decode_unknown(kind, value, object, path)?
                    }
                    None => return Err(Error::invalid_at(path, "heading without a valid tag")),
                }
            }
            "list" => {
                let list_type = object
                    .get("listType")
                    .and_then(Value::as_str)
                    .and_then(ListType::from_name)
                    .unwrap_or_else(|| match object.get("tag").and_then(Value::as_str) {
                        Some("ol") => ListType::Number,
                        _ => ListType::Bullet,
                    });
                Node::List(ListNode {
                    list_type,
                    start: u32_field(object, "start").unwrap_or(1),
                    tag: list_type.tag(),
                    element: self.decode_element(object, path)?,
                })
            }
            "listitem" => Node::ListItem(ListItemNode {
                value: u32_field(object, "value").unwrap_or(1),
                element: self.decode_element(object, path)?,
            }),
            "code" => Node::Code(CodeNode {
                language: string_field(object, "language"),
                element: self.decode_element(object, path)?,
            }),
            "link" => Node::Link(LinkNode {
                url: string_field(object, "url").unwrap_or_default(),
                title: string_field(object, "title"),
                rel: string_field(object, "rel"),
                target: string_field(object, "target"),
                element: self.decode_element(object, path)?,
            }),
            "horizontalrule" => Node::HorizontalRule(decode_leaf_block(object)),
            "image" => Node::Image(ImageNode {
                src: string_field(object, "src").unwrap_or_default(),
                alt_text: string_field(object, "altText").unwrap_or_default(),
                width: u32_field(object, "width"),
                height: u32_field(object, "height"),
                max_width: u32_field(object, "maxWidth"),
                show_caption: object.get("showCaption").and_then(Value::as_bool),
                block: decode_leaf_block(object),
            }),
            other => self.decode_unknown(other, value, object, path)?,
        };

        Ok(node)
    }

    /// Keep a node verbatim, decoding its children if it has a list of them.
    fn decode_unknown(
        &self,
        kind: &str,
        value: &Value,
        object: &Map<String, Value>,
        path: &str,
    ) -> Result<Node> {
        let children = match object.get("children") {
            Some(Value::Array(items)) => Some(self.decode_children(items, path)?),
            _ => None,
        };
        Ok(Node::Unknown(UnknownNode {
            kind: kind.to_string(),
            raw: value.clone(),
            children,
        }))
    }

    fn infer_kind(&self, object: &Map<String, Value>, path: &str) -> Result<&'static str> {
        if !self.options.infer_kinds {
            return Err(Error::invalid_at(path, "missing `type`"));
        }
        if object.get("children").is_some_and(Value::is_array) {
            Ok("paragraph")
        } else if object.contains_key("text") {
            Ok("text")
        } else {
            Err(Error::invalid_at(
                path,
                "missing `type` and neither `children` nor `text`",
            ))
        }
    }

    fn decode_element(&self, object: &Map<String, Value>, path: &str) -> Result<Element> {
        let children = match object.get("children") {
            Some(Value::Array(items)) => self.decode_children(items, path)?,
            Some(_) => return Err(Error::invalid_at(path, "`children` is not an array")),
            None => return Err(Error::invalid_at(path, "missing `children`")),
        };

        Ok(Element {
            children,
            direction: object
                .get("direction")
                .and_then(Value::as_str)
                .and_then(Direction::from_name),
            format: string_field(object, "format").unwrap_or_default(),
            indent: u32_field(object, "indent").unwrap_or(0),
            text_format: u32_field(object, "textFormat"),
            version: version_of(object),
        })
    }

    fn decode_children(&self, items: &[Value], path: &str) -> Result<Vec<Node>> {
        let mut children = Vec::with_capacity(items.len());

        for (index, item) in items.iter().enumerate() {
            let child_path = format!("{}.children[{}]", path, index);
            match self.decode_node(item, &child_path) {
                Ok(node) => children.push(node),
                Err(e) if self.options.error_mode == ErrorMode::Lenient => {
                    debug!("skipping malformed node: {}", e);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(children)
    }
}

fn decode_text(object: &Map<String, Value>) -> TextNode {
    TextNode {
        detail: u32_field(object, "detail").unwrap_or(0),
        format: TextFormat(u32_field(object, "format").unwrap_or(0)),
        mode: object
            .get("mode")
            .and_then(Value::as_str)
            .and_then(TextMode::from_name)
            .unwrap_or_default(),
        style: string_field(object, "style").unwrap_or_default(),
        // Missing, null, or non-string text reads as empty.
        text: string_field(object, "text").unwrap_or_default(),
        version: version_of(object),
    }
}

fn decode_leaf_block(object: &Map<String, Value>) -> LeafBlock {
    LeafBlock {
        direction: object
            .get("direction")
            .and_then(Value::as_str)
            .and_then(Direction::from_name),
        format: string_field(object, "format").unwrap_or_default(),
        indent: u32_field(object, "indent").unwrap_or(0),
        version: version_of(object),
    }
}

fn string_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    object.get(key).and_then(Value::as_str).map(str::to_string)
}

fn u32_field(object: &Map<String, Value>, key: &str) -> Option<u32> {
    object
        .get(key)
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok())
}

fn version_of(object: &Map<String, Value>) -> u32 {
    u32_field(object, "version").unwrap_or(1)
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Decoder::default()
            .decode_document(&value)
            .map_err(serde::de::Error::custom)
    }
}
