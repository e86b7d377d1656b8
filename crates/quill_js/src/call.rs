//! Function calls and constructor calls.

use quill_core::{Layout, LayoutSlot, Node, RenderResult, Value, WrappedContainer, Writer};

use crate::list::arguments;

/// `name(args)`
#[derive(Debug)]
pub struct Call {
    slot: LayoutSlot,
    name: Value,
    arguments: WrappedContainer,
}

impl Call {
    /// A call whose arguments stay on one line.
    pub fn new<I, T>(name: impl Into<Value>, args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self::with_arguments(name, arguments(args).with_layout(Layout::Inline))
    }

    /// A call with a prebuilt argument list, e.g. one laid out as a block.
    pub fn with_arguments(name: impl Into<Value>, arguments: WrappedContainer) -> Self {
        Self {
            slot: LayoutSlot::new(),
            name: name.into(),
            arguments,
        }
    }

    /// Force a layout.
    #[must_use]
    pub fn with_layout(self, layout: Layout) -> Self {
        self.request_layout(layout.into(), false);
        self
    }

    pub fn name(&self) -> &Value {
        &self.name
    }

    pub fn arguments(&self) -> &WrappedContainer {
        &self.arguments
    }

    pub fn arguments_mut(&mut self) -> &mut WrappedContainer {
        &mut self.arguments
    }
}

/// `name(args)` with inline arguments.
pub fn call<I, T>(name: impl Into<Value>, args: I) -> Call
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    Call::new(name, args)
}

impl Node for Call {
    fn layout_slot(&self) -> &LayoutSlot {
        &self.slot
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn render_content(&self, w: &mut Writer<'_>) -> RenderResult {
        if self.layout().is_block() {
            w.write_newline_and_indent()?;
        }
        w.write(&self.name)?;
        w.with_indent(1, |w| w.write_node(&self.arguments))
    }
}

/// `new Name(args)`
#[derive(Debug)]
pub struct New {
    slot: LayoutSlot,
    call: Call,
}

impl New {
    pub fn new<I, T>(class: impl Into<Value>, args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self::from_call(Call::new(class, args))
    }

    pub fn from_call(call: Call) -> Self {
        Self {
            slot: LayoutSlot::new(),
            call,
        }
    }

    /// Force a layout.
    #[must_use]
    pub fn with_layout(self, layout: Layout) -> Self {
        self.request_layout(layout.into(), false);
        self
    }

    pub fn call(&self) -> &Call {
        &self.call
    }
}

impl Node for New {
    fn layout_slot(&self) -> &LayoutSlot {
        &self.slot
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn render_content(&self, w: &mut Writer<'_>) -> RenderResult {
        if self.layout().is_block() {
            w.write_newline_and_indent()?;
        }
        w.write_str("new ")?;
        w.write_node(&self.call)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "Tests can panic")]

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{list, parameters, quote, render_node};

    #[test]
    fn simple_calls() {
        assert_eq!(render_node(&call("f", Vec::<Value>::new())).unwrap(), "f()");
        assert_eq!(render_node(&call("alert", [quote("hi")])).unwrap(), "alert('hi')");
        assert_eq!(render_node(&call("max", [1, 2])).unwrap(), "max(1, 2)");
    }

    #[test]
    fn block_call_starts_new_line() {
        let c = call("f", [1]).with_layout(Layout::Block);
        let out = crate::render(&Value::from(list([Value::from("x"), Value::from(c)]))).unwrap();
        assert_eq!(out, "x, \nf(1)");
    }

    #[test]
    fn block_arguments_indent_past_the_call() {
        let args = parameters(["a", "b"]).with_layout(Layout::InlineBlock);
        let c = Call::with_arguments("f", args);
        assert_eq!(render_node(&c).unwrap(), "f(\n\t\ta, \n\t\tb\n\t)");
    }

    #[test]
    fn constructor_call() {
        assert_eq!(render_node(&New::new("Date", [2008, 1])).unwrap(), "new Date(2008, 1)");
    }
}
