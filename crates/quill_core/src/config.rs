//! Writer configuration.

/// Default indentation unit.
pub const DEFAULT_INDENT_TEXT: &str = "\t";

/// Default line terminator.
pub const DEFAULT_NEWLINE: &str = "\n";

/// Output settings shared by a writer and every child writer it spawns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterConfig {
    /// Text emitted once per indentation level.
    pub indent_text: String,

    /// Line terminator.
    pub newline: String,

    /// When false, line starts carry no indentation at all.
    pub include_indentation: bool,

    /// Ask compressible nodes for their short form.
    pub compress: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            indent_text: DEFAULT_INDENT_TEXT.to_owned(),
            newline: DEFAULT_NEWLINE.to_owned(),
            include_indentation: true,
            compress: false,
        }
    }
}

impl WriterConfig {
    /// Create a config with the specified indent unit.
    pub fn with_indent_text(indent_text: impl Into<String>) -> Self {
        Self {
            indent_text: indent_text.into(),
            ..Default::default()
        }
    }

    /// Create a config with the specified line terminator.
    pub fn with_newline(newline: impl Into<String>) -> Self {
        Self {
            newline: newline.into(),
            ..Default::default()
        }
    }

    /// Create a config for compressed output.
    pub fn compressed() -> Self {
        Self {
            compress: true,
            ..Default::default()
        }
    }

    /// Turn compression on or off.
    #[must_use]
    pub fn compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Turn indentation on or off.
    #[must_use]
    pub fn include_indentation(mut self, include: bool) -> Self {
        self.include_indentation = include;
        self
    }

    /// Replace the indent unit.
    #[must_use]
    pub fn indent_text(mut self, indent_text: impl Into<String>) -> Self {
        self.indent_text = indent_text.into();
        self
    }

    /// Replace the line terminator.
    #[must_use]
    pub fn newline(mut self, newline: impl Into<String>) -> Self {
        self.newline = newline.into();
        self
    }
}
