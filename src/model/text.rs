//! Text-level types.

use serde::Serialize;

/// A run of text with consistent formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextNode {
    /// Detail flags (directionless, unmergeable)
    pub detail: u32,

    /// Format flags (bold, italic, ...)
    pub format: TextFormat,

    /// Editing mode
    pub mode: TextMode,

    /// Inline CSS style string
    pub style: String,

    /// The text content
    pub text: String,

    /// Node schema version
    pub version: u32,
}

impl TextNode {
    /// Create a new text node with no formatting.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_format(text, TextFormat::NONE)
    }

    /// Create a text node with the given format flags.
    pub fn with_format(text: impl Into<String>, format: TextFormat) -> Self {
        Self {
            detail: 0,
            format,
            mode: TextMode::Normal,
            style: String::new(),
            text: text.into(),
            version: 1,
        }
    }

    /// Create a bold text node.
    pub fn bold(text: impl Into<String>) -> Self {
        Self::with_format(text, TextFormat::BOLD)
    }

    /// Create an italic text node.
    pub fn italic(text: impl Into<String>) -> Self {
        Self::with_format(text, TextFormat::ITALIC)
    }

    /// Check if this node carries no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check whether `other` could be merged into this node without losing
    /// formatting.
    pub fn can_merge(&self, other: &TextNode) -> bool {
        self.format == other.format
            && self.mode == other.mode
            && self.detail == other.detail
            && self.style == other.style
    }
}

/// Text format bit flags.
///
/// Values follow the Lexical editor. Some converters write 8 for
/// strikethrough; in this model 8 is [`TextFormat::UNDERLINE`], so such
/// runs read as underlined rather than struck through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TextFormat(pub u32);

impl TextFormat {
    pub const NONE: TextFormat = TextFormat(0);
    pub const BOLD: TextFormat = TextFormat(1);
    pub const ITALIC: TextFormat = TextFormat(1 << 1);
    pub const STRIKETHROUGH: TextFormat = TextFormat(1 << 2);
    pub const UNDERLINE: TextFormat = TextFormat(1 << 3);
    pub const CODE: TextFormat = TextFormat(1 << 4);
    pub const SUBSCRIPT: TextFormat = TextFormat(1 << 5);
    pub const SUPERSCRIPT: TextFormat = TextFormat(1 << 6);
    pub const HIGHLIGHT: TextFormat = TextFormat(1 << 7);

    /// Raw flag value.
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Check whether all flags of `other` are set.
    pub fn contains(self, other: TextFormat) -> bool {
        self.0 & other.0 == other.0
    }

    /// Check if no flags are set.
    pub fn is_plain(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for TextFormat {
    type Output = TextFormat;

    fn bitor(self, rhs: TextFormat) -> TextFormat {
        TextFormat(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for TextFormat {
    fn bitor_assign(&mut self, rhs: TextFormat) {
        self.0 |= rhs.0;
    }
}

/// Text editing mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextMode {
    #[default]
    Normal,
    Token,
    Segmented,
}

impl TextMode {
    /// Parse a mode name. Unknown names map to `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "normal" => Some(TextMode::Normal),
            "token" => Some(TextMode::Token),
            "segmented" => Some(TextMode::Segmented),
            _ => None,
        }
    }
}
