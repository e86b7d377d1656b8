//! Comma lists and the bracketed constructs built on them.
//!
//! | builder | brackets | list layout |
//! |---------|----------|-------------|
//! | [`list`] | none | follows its owner |
//! | [`array`] | `[ ]` | follows its owner |
//! | [`parameters`] | `( )` | follows its owner |
//! | [`arguments`] | `( )` | always inline |
//! | [`statement`] | `;` after | inline |

use quill_core::{Container, Layout, Value, WrappedContainer, Wrapper};

/// Separator between list items.
pub const LIST_SEPARATOR: &str = ", ";

/// A comma-separated list.
pub fn list<I, T>(items: I) -> Container
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    Container::new().with_separator(LIST_SEPARATOR).with_items(items)
}

/// An array literal: `[a, b]`.
pub fn array<I, T>(items: I) -> WrappedContainer
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    Wrapper::new("[", list(items), "]")
}

/// Call arguments: `(a, b)`. The list stays on one line even when the call
/// itself is laid out as a block.
pub fn arguments<I, T>(items: I) -> WrappedContainer
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    Wrapper::new("(", list(items).with_layout(Layout::Inline), ")")
}

/// Function parameters: `(a, b)`.
pub fn parameters<I, T>(items: I) -> WrappedContainer
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    Wrapper::new("(", list(items), ")")
}

/// A statement: its parts on one line, terminated by `;`.
pub fn statement<I, T>(parts: I) -> WrappedContainer
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    Wrapper::new(Value::Null, Container::line().with_items(parts), ";").with_content_indent(0)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "Tests can panic")]

    use pretty_assertions::assert_eq;
    use quill_core::Node;

    use super::*;
    use crate::render_node;

    #[test]
    fn inline_forms() {
        assert_eq!(render_node(&list([1, 2, 3])).unwrap(), "1, 2, 3");
        assert_eq!(render_node(&array(["a", "b"])).unwrap(), "[a, b]");
        assert_eq!(render_node(&array(Vec::<Value>::new())).unwrap(), "[]");
        assert_eq!(render_node(&parameters(["x", "y"])).unwrap(), "(x, y)");
        assert_eq!(render_node(&statement(quill_core::values!["var x = ", 1])).unwrap(), "var x = 1;");
    }

    #[test]
    fn block_array_puts_items_on_lines() {
        let a = array([1, 2]).with_layout(Layout::Block);
        assert_eq!(render_node(&a).unwrap(), "[\n\t1, \n\t2\n]");
    }

    #[test]
    fn arguments_stay_inline() {
        let args = arguments(["a", "b"]).with_layout(Layout::Block);
        assert_eq!(args.content().layout(), Layout::Inline);
        assert_eq!(render_node(&args).unwrap(), "(a, b\n)");
    }
}
