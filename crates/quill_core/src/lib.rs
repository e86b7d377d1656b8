//! Quill Core
//!
//! Layout and rendering engine for composable script builders. Callers build
//! a tree of nodes (containers, wrappers, conditionals, dialect-specific
//! nodes from client crates) instead of concatenating strings, and the tree
//! decides at render time where lines break and how far they indent.
//!
//! # Architecture
//!
//! Rendering is a single recursive pass over an owned tree:
//!
//! 1. **Negotiate**: parents suggest layouts to their children; the first
//!    request to reach a node wins, and builders force theirs up front.
//! 2. **Render**: each node writes itself through a [`Writer`], which owns
//!    indentation and start-of-line state.
//!
//! # Modules
//!
//! - [`layout`]: layouts, requests, and the cascade table
//! - [`node`]: the [`Node`] trait every renderable implements
//! - [`value`]: the [`Value`] union held by every child slot
//! - [`container`]: ordered item lists and the core render algorithm
//! - [`wrapper`]: before/content/after triples
//! - [`proxy`]: closure-backed nodes for context-dependent output
//! - [`writer`]: the render context
//! - [`emitter`]: raw output sinks
//! - [`format`]: scalar formatting per output dialect
//! - [`render`]: entry points

pub mod compressible;
pub mod conditional;
pub mod config;
pub mod construct;
pub mod container;
pub mod emitter;
pub mod error;
pub mod format;
pub mod layout;
pub mod node;
pub mod proxy;
pub mod render;
pub mod value;
pub mod wrapper;
pub mod writer;

pub use compressible::Compressible;
pub use conditional::Conditional;
pub use config::WriterConfig;
pub use container::{splice, Container, FlattenFn};
pub use emitter::{Emitter, FmtEmitter, IoEmitter, StringEmitter};
pub use error::{RenderError, RenderResult};
pub use format::{FormatStrategy, PlainFormat};
pub use layout::{Layout, LayoutRequest, LayoutSlot, LayoutState};
pub use node::Node;
pub use proxy::Proxy;
pub use render::{render, render_node, render_to_fmt, render_to_io, render_with, RenderOptions};
pub use value::{Scalar, Value};
pub use wrapper::{Content, WrappedContainer, Wrapper};
pub use writer::Writer;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for render diagnostics.
///
/// Does nothing unless `RUST_LOG` is set, e.g. `RUST_LOG=quill_core=trace`
/// to watch layout negotiation. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Another subscriber may already be installed by the host.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
