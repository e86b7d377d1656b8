//! Output Emitter
//!
//! Raw text sinks a [`Writer`](crate::Writer) renders into. The writer owns all
//! layout decisions; an emitter only appends text.
//!
//! - [`StringEmitter`]: in-memory buffer, the default for most renders
//! - [`IoEmitter`]: buffered byte stream over any `std::io::Write`
//! - [`FmtEmitter`]: any `std::fmt::Write`, e.g. a caller's `String`

use std::fmt;
use std::io::{self, BufWriter, Write};

use crate::error::RenderResult;

/// Trait for emitting rendered text.
pub trait Emitter {
    /// Emit a text fragment.
    fn emit(&mut self, text: &str) -> RenderResult;

    /// Push buffered text to the underlying sink.
    fn flush(&mut self) -> RenderResult {
        Ok(())
    }
}

/// String-based emitter for in-memory rendering.
#[derive(Debug, Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    /// Create a new string emitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
        }
    }

    /// Get the rendered output.
    pub fn output(self) -> String {
        self.buffer
    }

    /// Get the current buffer contents without consuming.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Get the current length of the buffer.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) -> RenderResult {
        self.buffer.push_str(text);
        Ok(())
    }
}

/// Byte-stream emitter.
///
/// Uses buffered writing; call [`Emitter::flush`] or [`IoEmitter::finish`]
/// to surface the final write error.
pub struct IoEmitter<W: Write> {
    writer: BufWriter<W>,
}

impl<W: Write> IoEmitter<W> {
    /// Wrap a byte sink.
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
        }
    }

    /// Flush and hand back the underlying sink.
    pub fn finish(self) -> io::Result<W> {
        self.writer.into_inner().map_err(io::IntoInnerError::into_error)
    }
}

impl<W: Write> fmt::Debug for IoEmitter<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IoEmitter").finish_non_exhaustive()
    }
}

impl<W: Write> Emitter for IoEmitter<W> {
    fn emit(&mut self, text: &str) -> RenderResult {
        self.writer.write_all(text.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> RenderResult {
        self.writer.flush()?;
        Ok(())
    }
}

/// Text-sink emitter over a borrowed `fmt::Write`.
pub struct FmtEmitter<'s, W: fmt::Write + ?Sized> {
    sink: &'s mut W,
}

impl<'s, W: fmt::Write + ?Sized> FmtEmitter<'s, W> {
    /// Borrow a text sink.
    pub fn new(sink: &'s mut W) -> Self {
        Self { sink }
    }
}

impl<W: fmt::Write + ?Sized> fmt::Debug for FmtEmitter<'_, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FmtEmitter").finish_non_exhaustive()
    }
}

impl<W: fmt::Write + ?Sized> Emitter for FmtEmitter<'_, W> {
    fn emit(&mut self, text: &str) -> RenderResult {
        self.sink.write_str(text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
