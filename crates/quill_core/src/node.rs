//! The renderable-item trait.
//!
//! Every node owns a [`LayoutSlot`] and answers three questions: which layout
//! it uses, whether it would produce any text, and how to write itself. The
//! provided methods implement the shared protocol (layout resolution,
//! first-writer-wins negotiation, indentation offset); implementors supply
//! [`Node::render_content`] and override the hooks they need.

use std::any::Any;
use std::fmt;

use crate::error::RenderResult;
use crate::layout::{Layout, LayoutRequest, LayoutSlot, LayoutState};
use crate::writer::Writer;

/// A renderable tree node.
pub trait Node: fmt::Debug + Any {
    /// Storage for this node's layout state.
    fn layout_slot(&self) -> &LayoutSlot;

    /// Write the node's own text. Called by [`Node::render`] inside the
    /// node's indentation scope.
    fn render_content(&self, w: &mut Writer<'_>) -> RenderResult;

    fn as_any(&self) -> &dyn Any;

    /// Layout used while nothing has established one.
    fn default_layout(&self) -> Layout {
        Layout::Inline
    }

    /// Extra indentation applied around the node when it spans lines.
    fn indent_offset(&self) -> usize {
        0
    }

    /// Whether rendering would produce any text.
    fn has_render_content(&self) -> bool {
        true
    }

    /// Truthiness when used as the test of a conditional node.
    fn condition_result(&self) -> bool {
        self.has_render_content()
    }

    /// Hook run after the stored layout changed. Owners record the cascade
    /// for their children here and apply it when they render.
    fn on_layout_changed(&self, _state: LayoutState) {}

    /// The effective layout. Never a meta-value.
    fn layout(&self) -> Layout {
        self.layout_slot().state().resolve(self.default_layout())
    }

    fn is_layout_established(&self) -> bool {
        self.layout_slot().is_established()
    }

    /// Apply a layout request and run the change hook if it took effect.
    fn request_layout(&self, request: LayoutRequest, only_if_unestablished: bool) {
        if let Some(state) = self.layout_slot().request(request, only_if_unestablished) {
            self.on_layout_changed(state);
        }
    }

    /// Suggest a layout. Ignored once any layout is established.
    fn try_set_layout(&self, layout: Layout) {
        self.request_layout(layout.into(), true);
    }

    /// Write the node, applying its indentation offset when multi-line.
    fn render(&self, w: &mut Writer<'_>) -> RenderResult {
        let offset = if self.layout().is_multiline() {
            self.indent_offset()
        } else {
            0
        };
        w.with_indent(offset, |w| self.render_content(w))
    }
}
