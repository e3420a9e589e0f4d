//! Decoding options and configuration.

/// Options for decoding rich-text documents.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
    /// Error handling mode
    pub error_mode: ErrorMode,

    /// Infer a node's kind when its `type` tag is missing
    pub infer_kinds: bool,
}

impl DecodeOptions {
    /// Create new decode options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable lenient mode (skip malformed nodes).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Enable or disable kind inference for untagged nodes.
    pub fn with_kind_inference(mut self, infer: bool) -> Self {
        self.infer_kinds = infer;
        self
    }

    /// Check if malformed nodes are skipped rather than reported.
    pub fn is_lenient(&self) -> bool {
        self.error_mode == ErrorMode::Lenient
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Strict,
            infer_kinds: true,
        }
    }
}

/// Error handling mode during decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail on any malformed node
    #[default]
    Strict,
    /// Skip malformed nodes and continue
    Lenient,
}
