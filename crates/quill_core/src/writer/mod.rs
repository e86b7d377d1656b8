//! Render Writer
//!
//! The stateful context threaded through a render pass. Wraps an
//! [`Emitter`] and tracks:
//! - the current indentation level (changed only in matched pairs)
//! - whether output is at the start of a line
//! - a memo of indent strings per level
//!
//! Configuration and the format strategy are borrowed, so a node that must
//! pre-render a fragment (to escape or measure it) can spawn a child writer
//! with the same settings and an isolated position; see
//! [`Writer::render_fragment`].

use rustc_hash::FxHashMap;

use crate::config::WriterConfig;
use crate::emitter::{Emitter, StringEmitter};
use crate::error::{RenderError, RenderResult};
use crate::format::FormatStrategy;
use crate::node::Node;
use crate::value::Value;

/// Render context over an emitter.
pub struct Writer<'a> {
    sink: &'a mut dyn Emitter,
    config: &'a WriterConfig,
    format: &'a dyn FormatStrategy,
    indent_level: usize,
    start_of_line: bool,
    indents: FxHashMap<usize, String>,
}

impl<'a> Writer<'a> {
    /// Create a writer at indentation level 0, at the start of a line.
    pub fn new(
        sink: &'a mut dyn Emitter,
        config: &'a WriterConfig,
        format: &'a dyn FormatStrategy,
    ) -> Self {
        Self {
            sink,
            config,
            format,
            indent_level: 0,
            start_of_line: true,
            indents: FxHashMap::default(),
        }
    }

    /// Create a writer from an optional sink, failing fast when it is absent.
    pub fn try_new(
        sink: Option<&'a mut dyn Emitter>,
        config: &'a WriterConfig,
        format: &'a dyn FormatStrategy,
    ) -> Result<Self, RenderError> {
        let sink = sink.ok_or(RenderError::NullWriterTarget)?;
        Ok(Self::new(sink, config, format))
    }

    /// Start at a given indentation level.
    #[must_use]
    pub fn with_indent_level(mut self, level: usize) -> Self {
        self.indent_level = level;
        self
    }

    pub fn config(&self) -> &'a WriterConfig {
        self.config
    }

    pub fn format_strategy(&self) -> &'a dyn FormatStrategy {
        self.format
    }

    /// Whether compressible nodes should use their short form.
    pub fn compress(&self) -> bool {
        self.config.compress
    }

    pub fn indent_level(&self) -> usize {
        self.indent_level
    }

    pub fn is_start_of_line(&self) -> bool {
        self.start_of_line
    }

    // ========================================================================
    // Indentation
    // ========================================================================

    /// Increase indentation by `levels`.
    ///
    /// Prefer [`Writer::with_indent`], which always restores the level.
    pub fn begin_indent(&mut self, levels: usize) {
        self.indent_level += levels;
    }

    /// Decrease indentation by `levels`, clamping at zero.
    pub fn end_indent(&mut self, levels: usize) {
        self.indent_level = self.indent_level.saturating_sub(levels);
    }

    /// Run `f` with indentation increased by `levels`.
    ///
    /// The level is restored whether `f` succeeds or returns an error.
    pub fn with_indent<F, R>(&mut self, levels: usize, f: F) -> R
    where
        F: FnOnce(&mut Self) -> R,
    {
        self.begin_indent(levels);
        let result = f(self);
        self.end_indent(levels);
        result
    }

    // ========================================================================
    // Line breaks
    // ========================================================================

    /// Start a new indented line, unless output is already at a line start.
    ///
    /// Nested nodes may each ask for a fresh line; only the first request
    /// produces one.
    pub fn write_newline_and_indent(&mut self) -> RenderResult {
        if self.start_of_line {
            return Ok(());
        }
        self.write_newline_and_indent_always()
    }

    /// Start a new indented line unconditionally.
    pub fn write_newline_and_indent_always(&mut self) -> RenderResult {
        let config = self.config;
        self.sink.emit(&config.newline)?;
        let indent = if config.include_indentation {
            let level = self.indent_level;
            self.indents
                .entry(level)
                .or_insert_with(|| config.indent_text.repeat(level))
                .as_str()
        } else {
            ""
        };
        if !indent.is_empty() {
            self.sink.emit(indent)?;
        }
        self.start_of_line = true;
        Ok(())
    }

    // ========================================================================
    // Writing
    // ========================================================================

    /// Write a value.
    ///
    /// Values without render content write nothing at all, which is how
    /// optional sections vanish without special-casing at call sites.
    pub fn write(&mut self, value: &Value) -> RenderResult {
        if !value.has_render_content() {
            return Ok(());
        }
        match value {
            Value::Null => Ok(()),
            Value::Node(node) => node.render(self),
            Value::Seq(items) => items.iter().try_for_each(|item| self.write(item)),
            Value::Scalar(scalar) => {
                let text = self.format.format_scalar(scalar);
                self.sink.emit(&text)?;
                self.start_of_line = false;
                Ok(())
            }
        }
    }

    /// Write a node directly.
    pub fn write_node(&mut self, node: &dyn Node) -> RenderResult {
        if node.has_render_content() {
            node.render(self)?;
        }
        Ok(())
    }

    /// Write literal text such as a bracket or keyword.
    pub fn write_str(&mut self, text: &str) -> RenderResult {
        if text.is_empty() {
            return Ok(());
        }
        self.sink.emit(text)?;
        self.start_of_line = false;
        Ok(())
    }

    /// Convert a value to text with this writer's strategy.
    ///
    /// Scalars go straight through the strategy; nodes and sequences are
    /// rendered with [`Writer::render_fragment`].
    pub fn format(&self, value: &Value) -> RenderResult<String> {
        match value {
            Value::Null => Ok(String::new()),
            Value::Scalar(scalar) => Ok(self.format.format_scalar(scalar).into_owned()),
            Value::Node(_) | Value::Seq(_) => self.render_fragment(value),
        }
    }

    /// Render a value into a fresh buffer using a child writer that shares
    /// this writer's config and format strategy but none of its position.
    pub fn render_fragment(&self, value: &Value) -> RenderResult<String> {
        let mut buffer = StringEmitter::new();
        {
            let mut child = Writer::new(&mut buffer, self.config, self.format);
            child.write(value)?;
        }
        Ok(buffer.output())
    }

    pub fn flush(&mut self) -> RenderResult {
        self.sink.flush()
    }
}

impl std::fmt::Debug for Writer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Writer")
            .field("indent_level", &self.indent_level)
            .field("start_of_line", &self.start_of_line)
            .field("config", self.config)
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}
