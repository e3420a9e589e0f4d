//! Rendering options and configuration.

/// Options for rendering documents to plain text.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Text appended after every top-level block
    pub block_separator: String,

    /// Trim leading and trailing whitespace from the result
    pub trim: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the separator appended after top-level blocks.
    pub fn with_block_separator(mut self, separator: impl Into<String>) -> Self {
        self.block_separator = separator.into();
        self
    }

    /// Enable or disable trimming of the output.
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            block_separator: "\n\n".to_string(),
            trim: true,
        }
    }
}
