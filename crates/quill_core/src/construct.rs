//! Construction helpers.
//!
//! Short free functions for building trees inline:
//!
//! ```
//! use quill_core::construct::{line, script, wrap};
//! use quill_core::{render, RenderOptions, Value};
//!
//! let call = line(["alert", "(", "1", ")"]);
//! let body = script([Value::from(call), Value::from("return;")]);
//! let out = render(&Value::from(wrap("{", body, "}")), &RenderOptions::default()).unwrap();
//! assert_eq!(out, "{\n\talert(1)\n\treturn;}");
//! ```

use crate::compressible::Compressible;
use crate::conditional::Conditional;
use crate::container::Container;
use crate::error::RenderResult;
use crate::layout::Layout;
use crate::proxy::Proxy;
use crate::value::Value;
use crate::wrapper::{WrappedContainer, Wrapper};
use crate::writer::Writer;

/// A `Block` container: one item per line.
pub fn script<I, T>(items: I) -> Container
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    Container::script().with_items(items)
}

/// An `Inline` container: items run together.
pub fn line<I, T>(items: I) -> Container
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    Container::line().with_items(items)
}

/// A `Block` container indented one level past its parent.
pub fn indent<I, T>(items: I) -> Container
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    Container::indented().with_items(items)
}

/// Wrap any value.
pub fn wrap(before: impl Into<Value>, content: impl Into<Value>, after: impl Into<Value>) -> Wrapper {
    Wrapper::new(before, content.into(), after)
}

/// Wrap a list of items in a fresh container.
pub fn wrap_items<I, T>(before: impl Into<Value>, items: I, after: impl Into<Value>) -> WrappedContainer
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    WrappedContainer::around(before, after).with_items(items)
}

/// `when_true` if `test` holds, otherwise `when_false`.
pub fn when(test: impl Into<Value>, when_true: impl Into<Value>, when_false: impl Into<Value>) -> Conditional {
    Conditional::new(test, when_true, when_false)
}

pub fn compressible(full: impl Into<Value>, compressed: impl Into<Value>) -> Compressible {
    Compressible::new(full, compressed)
}

/// A node that renders by calling `render` with the live writer.
pub fn proxy(render: impl Fn(&mut Writer<'_>) -> RenderResult + 'static) -> Proxy {
    Proxy::new(render)
}

/// Suggest a layout to a value. No-op for scalars and once the node has one.
pub fn try_set_layout(value: &Value, layout: Layout) {
    value.try_set_layout(layout);
}

/// Whether a value would render any text.
pub fn has_render_content(value: &Value) -> bool {
    value.has_render_content()
}
