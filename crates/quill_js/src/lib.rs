//! Quill JavaScript
//!
//! JavaScript node library for the quill script builder. Every construct is
//! a thin layer over the core containers and wrappers; the nodes here only
//! supply keywords, brackets and escaping.
//!
//! ```
//! use quill_js::{call, quote, Block, Function};
//!
//! let greet = Function::named("greet", ["name"])
//!     .with_body(Block::new([call("alert", [quote("hi")])]));
//! assert_eq!(quill_js::render_node(&greet).unwrap(), "function greet(name) {\n\talert('hi')\n}");
//! ```
//!
//! # Modules
//!
//! - [`format`]: JavaScript literal spelling for scalars
//! - [`quote`]: string literals
//! - [`list`]: comma lists, arrays, argument and parameter lists, statements
//! - [`block`]: `{ ... }` statement blocks
//! - [`object`]: object literals, properties and property lists
//! - [`call`]: calls and `new`
//! - [`function`]: function expressions and declarations
//! - [`branch`]: `if` / `else`
//! - [`variable`]: short-name allocation for compressed output
//! - [`extjs`]: Ext JS classes, components and `Ext.apply`

/// Implement [`Node`](quill_core::Node) for a newtype by forwarding every
/// hook to the wrapped node, so the wrapper and the newtype share one
/// layout slot.
macro_rules! forward_node {
    ($ty:ty, $field:ident) => {
        impl quill_core::Node for $ty {
            fn layout_slot(&self) -> &quill_core::LayoutSlot {
                quill_core::Node::layout_slot(&self.$field)
            }

            fn render_content(&self, w: &mut quill_core::Writer<'_>) -> quill_core::RenderResult {
                quill_core::Node::render_content(&self.$field, w)
            }

            fn as_any(&self) -> &dyn std::any::Any {
                self
            }

            fn default_layout(&self) -> quill_core::Layout {
                quill_core::Node::default_layout(&self.$field)
            }

            fn indent_offset(&self) -> usize {
                quill_core::Node::indent_offset(&self.$field)
            }

            fn has_render_content(&self) -> bool {
                quill_core::Node::has_render_content(&self.$field)
            }

            fn condition_result(&self) -> bool {
                quill_core::Node::condition_result(&self.$field)
            }

            fn on_layout_changed(&self, state: quill_core::LayoutState) {
                quill_core::Node::on_layout_changed(&self.$field, state);
            }
        }
    };
}

pub mod block;
pub mod branch;
pub mod call;
pub mod extjs;
pub mod format;
pub mod function;
pub mod list;
pub mod object;
pub mod quote;
pub mod variable;

pub use block::Block;
pub use branch::If;
pub use call::{call, Call, New};
pub use format::{JsFormat, JS_DATETIME_PATTERN};
pub use function::Function;
pub use list::{arguments, array, list, parameters, statement, LIST_SEPARATOR};
pub use object::{property, Object, Property, PropertyList};
pub use quote::{quote, quote_double, Quote};
pub use variable::VariableFactory;

use quill_core::{Node, RenderOptions, RenderResult, Value};

/// Render options preset with [`JsFormat`].
pub fn options() -> RenderOptions<'static> {
    RenderOptions::with_format(&JsFormat)
}

/// Render a value as JavaScript.
pub fn render(value: &Value) -> RenderResult<String> {
    quill_core::render(value, &options())
}

/// Render a node as JavaScript.
pub fn render_node(node: &dyn Node) -> RenderResult<String> {
    quill_core::render_node(node, &options())
}

/// Render a value as JavaScript starting at the given indentation level.
pub fn render_indented(value: &Value, indent_level: usize) -> RenderResult<String> {
    quill_core::render(value, &options().indent_level(indent_level))
}
