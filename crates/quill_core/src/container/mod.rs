//! Ordered Containers
//!
//! [`Container`] is the ordered, mutable item list underneath every composite
//! construct: scripts, argument lists, object bodies, element children.
//!
//! # Render algorithm
//!
//! 1. Flatten the items into a render list (nested sequences are spliced).
//! 2. A `Block` container with content starts on a fresh line.
//! 3. Items without content are skipped and contribute no separator.
//! 4. Between content-bearing items the separator is written, followed by a
//!    line break when the upcoming item is inline and the container spans
//!    lines. Multi-line items break for themselves so they can indent first.
//!
//! # Flattening
//!
//! The flatten step is a plain function pointer so client libraries can
//! replace it: a JavaScript property list spreads nested objects into itself,
//! an XML element hides its attributes from the body.

use std::fmt;
use std::ops::{Index, IndexMut};

use rustc_hash::FxHashSet;

use crate::error::RenderResult;
use crate::layout::{Layout, LayoutRequest, LayoutSlot};
use crate::node::Node;
use crate::value::Value;
use crate::writer::Writer;

/// Expands one item into the render list.
pub type FlattenFn = for<'a> fn(&'a Value, &mut Vec<&'a Value>);

/// Default flattening: splice nested sequences recursively, keep everything
/// else as-is.
pub fn splice<'a>(value: &'a Value, out: &mut Vec<&'a Value>) {
    match value {
        Value::Seq(items) => {
            for item in items {
                splice(item, out);
            }
        }
        _ => out.push(value),
    }
}

/// An ordered list of values rendered with a separator and layout-driven
/// line breaks.
pub struct Container {
    slot: LayoutSlot,
    items: Vec<Value>,
    separator: String,
    default_layout: Layout,
    indent_offset: usize,
    flatten: FlattenFn,
    registered: FxHashSet<String>,
}

impl Container {
    /// An empty inline container with no separator.
    pub fn new() -> Self {
        Self {
            slot: LayoutSlot::new(),
            items: Vec::new(),
            separator: String::new(),
            default_layout: Layout::Inline,
            indent_offset: 0,
            flatten: splice,
            registered: FxHashSet::default(),
        }
    }

    /// A container defaulting to `Block`: every item on its own line.
    pub fn script() -> Self {
        Self::new().with_default_layout(Layout::Block)
    }

    /// A container defaulting to `Inline`.
    pub fn line() -> Self {
        Self::new()
    }

    /// A `Block` container indented one level past its parent.
    pub fn indented() -> Self {
        Self::script().with_indent_offset(1)
    }

    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
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

    #[must_use]
    pub fn with_indent_offset(mut self, levels: usize) -> Self {
        self.indent_offset = levels;
        self
    }

    #[must_use]
    pub fn with_flatten(mut self, flatten: FlattenFn) -> Self {
        self.flatten = flatten;
        self
    }

    #[must_use]
    pub fn with_items<I, T>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        self.extend(items);
        self
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn set_separator(&mut self, separator: impl Into<String>) {
        self.separator = separator.into();
    }

    pub fn set_default_layout(&mut self, layout: Layout) {
        self.default_layout = layout;
    }

    pub fn set_indent_offset(&mut self, levels: usize) {
        self.indent_offset = levels;
    }

    // ========================================================================
    // List operations
    // ========================================================================

    pub fn push(&mut self, item: impl Into<Value>) {
        self.items.push(item.into());
    }

    /// Insert at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, item: impl Into<Value>) {
        self.items.insert(index, item.into());
    }

    /// Insert a run of items at the front, keeping their order.
    pub fn prepend<I, T>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        let tail = std::mem::take(&mut self.items);
        self.items.extend(items.into_iter().map(Into::into));
        self.items.extend(tail);
    }

    /// Remove and return the item at `index`, if any.
    pub fn remove(&mut self, index: usize) -> Option<Value> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Remove every item. Registered names are kept.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.items.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    pub fn items(&self) -> &[Value] {
        &self.items
    }

    /// Add `item` the first time `name` is registered.
    ///
    /// Returns whether the item was added. Used for one-off declarations
    /// (helpers, imports) that several builders may ask for.
    pub fn register(&mut self, name: impl Into<String>, item: impl Into<Value>) -> bool {
        if !self.registered.insert(name.into()) {
            return false;
        }
        self.push(item);
        true
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.registered.contains(name)
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// The flattened list of items to render, in order.
    pub fn render_list(&self) -> Vec<&Value> {
        let mut out = Vec::with_capacity(self.items.len());
        for item in &self.items {
            (self.flatten)(item, &mut out);
        }
        out
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("layout", &self.slot.state())
            .field("separator", &self.separator)
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

impl Node for Container {
    fn layout_slot(&self) -> &LayoutSlot {
        &self.slot
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn default_layout(&self) -> Layout {
        self.default_layout
    }

    fn indent_offset(&self) -> usize {
        self.indent_offset
    }

    fn has_render_content(&self) -> bool {
        self.render_list()
            .into_iter()
            .any(Value::has_render_content)
    }

    fn render_content(&self, w: &mut Writer<'_>) -> RenderResult {
        let layout = self.layout();
        let list = self.render_list();

        if layout.is_block() && list.iter().any(|item| item.has_render_content()) {
            w.write_newline_and_indent()?;
        }

        let mut first = true;
        for item in list {
            if !item.has_render_content() {
                continue;
            }
            if first {
                first = false;
            } else {
                w.write_str(&self.separator)?;
                if item.layout().is_inline() && layout.is_multiline() {
                    w.write_newline_and_indent()?;
                }
            }
            w.write(item)?;
        }
        Ok(())
    }
}

impl Index<usize> for Container {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.items[index]
    }
}

impl IndexMut<usize> for Container {
    fn index_mut(&mut self, index: usize) -> &mut Value {
        &mut self.items[index]
    }
}

impl<'a> IntoIterator for &'a Container {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Into<Value>> Extend<T> for Container {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter.into_iter().map(Into::into));
    }
}

impl<T: Into<Value>> FromIterator<T> for Container {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Container::new().with_items(iter)
    }
}

#[cfg(test)]
mod tests;
