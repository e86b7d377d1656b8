//! Render errors.
//!
//! Every error aborts the whole render pass. There is no resuming: the
//! writer's position is meaningless after a failed write, so callers retry by
//! rendering again from the root.

use std::{fmt, io};

/// Error raised while rendering a tree.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The byte sink rejected a write or flush.
    #[error("failed to write rendered output: {0}")]
    Io(#[from] io::Error),

    /// The text sink rejected a write.
    #[error("failed to write rendered output to text sink")]
    Fmt(#[from] fmt::Error),

    /// A writer was constructed without a sink.
    #[error("writer requires an output sink")]
    NullWriterTarget,
}

/// Result alias for render operations.
pub type RenderResult<T = ()> = Result<T, RenderError>;
