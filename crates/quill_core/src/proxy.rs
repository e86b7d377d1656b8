//! Proxy node: renders by calling a closure with the live writer.
//!
//! For output that depends on the render context (the writer's format
//! strategy, compression flag, or indentation) and has no natural node type
//! of its own.

use std::fmt;

use crate::error::RenderResult;
use crate::layout::{Layout, LayoutRequest, LayoutSlot};
use crate::node::Node;
use crate::writer::Writer;

type RenderFn = Box<dyn Fn(&mut Writer<'_>) -> RenderResult>;

pub struct Proxy {
    slot: LayoutSlot,
    render: RenderFn,
    default_layout: Layout,
}

impl Proxy {
    pub fn new(render: impl Fn(&mut Writer<'_>) -> RenderResult + 'static) -> Self {
        Self {
            slot: LayoutSlot::new(),
            render: Box::new(render),
            default_layout: Layout::Inline,
        }
    }

    /// Force a layout. Later suggestions from a parent are ignored.
    #[must_use]
    pub fn with_layout(self, layout: Layout) -> Self {
        self.request_layout(LayoutRequest::Exact(layout), false);
        self
    }

    #[must_use]
    pub fn with_default_layout(mut self, layout: Layout) -> Self {
        self.default_layout = layout;
        self
    }
}

impl fmt::Debug for Proxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Proxy")
            .field("layout", &self.layout())
            .finish_non_exhaustive()
    }
}

impl Node for Proxy {
    fn layout_slot(&self) -> &LayoutSlot {
        &self.slot
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn default_layout(&self) -> Layout {
        self.default_layout
    }

    fn render_content(&self, w: &mut Writer<'_>) -> RenderResult {
        (self.render)(w)
    }
}
