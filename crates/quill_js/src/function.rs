//! Function expressions and declarations.

use std::cell::Cell;

use quill_core::{
    Layout, LayoutRequest, LayoutSlot, LayoutState, Node, RenderResult, Value, WrappedContainer,
    Writer,
};

use crate::block::Block;
use crate::list::parameters;

/// `function name(params) { body }`
///
/// The body's layout follows the function's own layout once one is
/// established. Until then the body opens on the function's line, and spans
/// lines as a `Block` only when the parameter list does.
#[derive(Debug)]
pub struct Function {
    slot: LayoutSlot,
    name: Value,
    parameters: WrappedContainer,
    body: Block,
    body_layout: Cell<LayoutState>,
}

impl Function {
    /// `function(params) {}`
    pub fn anonymous<I, T>(params: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self::named(Value::Null, params)
    }

    /// `function name(params) {}`
    pub fn named<I, T>(name: impl Into<Value>, params: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self {
            slot: LayoutSlot::new(),
            name: name.into(),
            parameters: parameters(params),
            body: Block::empty(),
            body_layout: Cell::new(LayoutState::Unestablished),
        }
    }

    #[must_use]
    pub fn with_body(mut self, body: Block) -> Self {
        self.body = body;
        self
    }

    /// Replace the body with a block of `lines`.
    #[must_use]
    pub fn with_lines<I, T>(self, lines: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        self.with_body(Block::new(lines))
    }

    #[must_use]
    pub fn with_parameters(mut self, parameters: WrappedContainer) -> Self {
        self.parameters = parameters;
        self
    }

    /// Force a layout; the body takes the same layout.
    #[must_use]
    pub fn with_layout(self, layout: Layout) -> Self {
        self.request_layout(layout.into(), false);
        self
    }

    pub fn name(&self) -> &Value {
        &self.name
    }

    pub fn parameters(&self) -> &WrappedContainer {
        &self.parameters
    }

    pub fn body(&self) -> &Block {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Block {
        &mut self.body
    }

    fn body_request(&self) -> LayoutRequest {
        match self.body_layout.get() {
            LayoutState::Unestablished if self.parameters.content().layout().is_inline() => {
                Layout::InlineBlock.into()
            }
            LayoutState::Unestablished => Layout::Block.into(),
            state => state.into(),
        }
    }
}

impl Node for Function {
    fn layout_slot(&self) -> &LayoutSlot {
        &self.slot
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn on_layout_changed(&self, state: LayoutState) {
        self.body_layout.set(state);
    }

    fn render_content(&self, w: &mut Writer<'_>) -> RenderResult {
        self.body.request_layout(self.body_request(), true);

        if self.layout().is_block() {
            w.write_newline_and_indent()?;
        }
        w.write_str("function")?;
        if self.name.has_render_content() {
            w.write_str(" ")?;
            w.write(&self.name)?;
        }
        w.with_indent(1, |w| w.write_node(&self.parameters))?;
        w.write_str(" ")?;
        w.write_node(&self.body)
    }
}
