//! Building rich-text documents from text sources.
//!
//! Three builders are provided, one per source format:
//!
//! - [`PlainTextBuilder`]: the whole input becomes one text run, verbatim
//! - [`ParagraphBuilder`]: one trimmed paragraph per non-blank line
//! - [`MarkdownConverter`]: Markdown structure mapped to document nodes
//!
//! # Example
//!
//! ```
//! use unlexical::convert::{builder_for, MarkdownOptions, SourceFormat};
//!
//! let builder = builder_for(SourceFormat::Paragraphs, &MarkdownOptions::default());
//! let doc = builder.build("first\nsecond");
//! assert_eq!(doc.block_count(), 2);
//! ```

mod markdown;
mod plain;

pub use markdown::{
    empty_document, markdown_to_document, MarkdownConverter, MarkdownOptions,
    DEFAULT_IMAGE_MAX_WIDTH,
};
pub use plain::{build_document, normalize_field, paragraphs_from_text};

use crate::error::{Error, Result};
use crate::model::Document;
use std::str::FromStr;

/// Trait for document builders.
///
/// Implement this trait to add support for a new source format.
pub trait DocumentBuilder: Send + Sync {
    /// Get the name of this builder.
    fn name(&self) -> &str;

    /// Build a document from source text.
    fn build(&self, source: &str) -> Document;
}

/// Builder that keeps the input as a single literal text run.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextBuilder;

impl DocumentBuilder for PlainTextBuilder {
    fn name(&self) -> &str {
        "plain"
    }

    fn build(&self, source: &str) -> Document {
        build_document(source)
    }
}

/// Builder that splits the input into one paragraph per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParagraphBuilder;

impl DocumentBuilder for ParagraphBuilder {
    fn name(&self) -> &str {
        "paragraphs"
    }

    fn build(&self, source: &str) -> Document {
        paragraphs_from_text(source)
    }
}

impl DocumentBuilder for MarkdownConverter {
    fn name(&self) -> &str {
        "markdown"
    }

    fn build(&self, source: &str) -> Document {
        self.convert(source)
    }
}

/// Source text format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SourceFormat {
    /// Literal text, one run
    #[default]
    Plain,

    /// One paragraph per line
    Paragraphs,

    /// Markdown
    Markdown,
}

impl FromStr for SourceFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "plain" | "text" => Ok(SourceFormat::Plain),
            "paragraphs" | "lines" => Ok(SourceFormat::Paragraphs),
            "markdown" | "md" => Ok(SourceFormat::Markdown),
            other => Err(Error::Other(format!("Unknown source format: {}", other))),
        }
    }
}

/// Get the builder for a source format.
pub fn builder_for(format: SourceFormat, options: &MarkdownOptions) -> Box<dyn DocumentBuilder> {
    match format {
        SourceFormat::Plain => Box::new(PlainTextBuilder),
        SourceFormat::Paragraphs => Box::new(ParagraphBuilder),
        SourceFormat::Markdown => Box::new(MarkdownConverter::new(options.clone())),
    }
}
