//! Render Entry Points
//!
//! Each entry point builds one [`Writer`] from [`RenderOptions`], writes the
//! root, and flushes. Buffering entry points return nothing on error; the
//! partial buffer is dropped.

use std::fmt;
use std::io;

use crate::config::WriterConfig;
use crate::emitter::{Emitter, FmtEmitter, IoEmitter, StringEmitter};
use crate::error::RenderResult;
use crate::format::{FormatStrategy, PlainFormat};
use crate::node::Node;
use crate::value::Value;
use crate::writer::Writer;

/// Everything a render pass needs besides the tree itself.
#[derive(Clone, Debug)]
pub struct RenderOptions<'f> {
    pub config: WriterConfig,
    pub format: &'f dyn FormatStrategy,
    /// Indentation level the root starts at.
    pub indent_level: usize,
}

impl<'f> RenderOptions<'f> {
    pub fn new(config: WriterConfig, format: &'f dyn FormatStrategy) -> Self {
        Self {
            config,
            format,
            indent_level: 0,
        }
    }

    /// Default configuration with the given format strategy.
    pub fn with_format(format: &'f dyn FormatStrategy) -> Self {
        Self::new(WriterConfig::default(), format)
    }

    #[must_use]
    pub fn indent_level(mut self, level: usize) -> Self {
        self.indent_level = level;
        self
    }

    #[must_use]
    pub fn compress(mut self, compress: bool) -> Self {
        self.config.compress = compress;
        self
    }

    /// A writer over `sink` configured by these options.
    pub fn writer<'a>(&'a self, sink: &'a mut dyn Emitter) -> Writer<'a> {
        Writer::new(sink, &self.config, self.format).with_indent_level(self.indent_level)
    }
}

impl Default for RenderOptions<'_> {
    fn default() -> Self {
        Self::with_format(&PlainFormat)
    }
}

/// Render a value to a string.
#[tracing::instrument(level = "debug", skip_all, fields(
    indent = options.indent_level,
    compress = options.config.compress,
))]
pub fn render(value: &Value, options: &RenderOptions<'_>) -> RenderResult<String> {
    let mut buffer = StringEmitter::new();
    render_into(&mut buffer, value, options)?;
    Ok(buffer.output())
}

/// Render a node to a string.
#[tracing::instrument(level = "debug", skip_all, fields(
    indent = options.indent_level,
    compress = options.config.compress,
))]
pub fn render_node(node: &dyn Node, options: &RenderOptions<'_>) -> RenderResult<String> {
    let mut buffer = StringEmitter::new();
    {
        let mut w = options.writer(&mut buffer);
        w.write_node(node)?;
        w.flush()?;
    }
    Ok(buffer.output())
}

/// Render into a byte stream, returning the stream once everything is
/// flushed.
#[tracing::instrument(level = "debug", skip_all, fields(
    indent = options.indent_level,
    compress = options.config.compress,
))]
pub fn render_to_io<W: io::Write>(out: W, value: &Value, options: &RenderOptions<'_>) -> RenderResult<W> {
    let mut emitter = IoEmitter::new(out);
    render_into(&mut emitter, value, options)?;
    Ok(emitter.finish()?)
}

/// Render into any text sink, e.g. a `String` or a `fmt::Formatter`.
#[tracing::instrument(level = "debug", skip_all, fields(
    indent = options.indent_level,
    compress = options.config.compress,
))]
pub fn render_to_fmt<W: fmt::Write + ?Sized>(
    out: &mut W,
    value: &Value,
    options: &RenderOptions<'_>,
) -> RenderResult {
    let mut emitter = FmtEmitter::new(out);
    render_into(&mut emitter, value, options)
}

/// Render through a caller-built writer.
pub fn render_with(value: &Value, w: &mut Writer<'_>) -> RenderResult {
    w.write(value)?;
    w.flush()
}

fn render_into(sink: &mut dyn Emitter, value: &Value, options: &RenderOptions<'_>) -> RenderResult {
    let mut w = options.writer(sink);
    render_with(value, &mut w)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "Tests can panic")]

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::container::Container;
    use crate::layout::Layout;

    fn block() -> Container {
        Container::script().with_items(["a", "b"])
    }

    #[test]
    fn renders_to_string() {
        let out = render(&Value::from(block()), &RenderOptions::default()).unwrap();
        assert_eq!(out, "a\nb");
    }

    #[test]
    fn starting_indent_level() {
        let options = RenderOptions::default().indent_level(2);
        let out = render_node(&block(), &options).unwrap();
        assert_eq!(out, "a\n\t\tb");
    }

    #[test]
    fn renders_to_io() {
        let out = render_to_io(Vec::new(), &Value::from(block()), &RenderOptions::default()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a\nb");
    }

    #[test]
    fn renders_to_fmt() {
        let mut out = String::from(">");
        let value = Value::from(Container::new().with_layout(Layout::Inline).with_items(["x", "y"]));
        render_to_fmt(&mut out, &value, &RenderOptions::default()).unwrap();
        assert_eq!(out, ">xy");
    }

    #[derive(Debug)]
    struct Broken;

    impl io::Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::other("closed"))
        }
    }

    #[test]
    fn io_failure_is_reported() {
        let result = render_to_io(Broken, &Value::from("text"), &RenderOptions::default());
        assert!(matches!(result, Err(crate::error::RenderError::Io(_))));
    }
}
