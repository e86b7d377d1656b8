//! Wrappers
//!
//! A [`Wrapper`] renders `before`, then its content one indentation level
//! deeper, then `after`. Brackets, parentheses, tags and statement
//! terminators are all wrappers.
//!
//! When a wrapper's own layout is established it derives a preferred layout
//! for its content (see [`LayoutState::cascade`]) and suggests it at render
//! time. The suggestion loses to anything the content has already settled.
//!
//! [`WrappedContainer`] is the common case of a wrapper around a
//! [`Container`], with the list operations forwarded.

use std::cell::Cell;
use std::fmt;

use crate::container::Container;
use crate::error::RenderResult;
use crate::layout::{Layout, LayoutRequest, LayoutSlot, LayoutState};
use crate::node::Node;
use crate::value::Value;
use crate::writer::Writer;

/// Indentation applied to wrapped content unless configured otherwise.
pub const DEFAULT_CONTENT_INDENT: usize = 1;

/// What a wrapper can hold: any value, or a concrete node type when the
/// owner needs typed access to it.
///
/// The method names differ from [`Node`]'s so both traits can be in scope.
pub trait Content: fmt::Debug + 'static {
    /// Whether writing would produce any text.
    fn is_visible(&self) -> bool;

    fn is_truthy(&self) -> bool;

    /// Suggest a layout. First writer wins.
    fn suggest_layout(&self, layout: Layout);

    fn write_to(&self, w: &mut Writer<'_>) -> RenderResult;
}

impl Content for Value {
    fn is_visible(&self) -> bool {
        Value::has_render_content(self)
    }

    fn is_truthy(&self) -> bool {
        Value::condition_result(self)
    }

    fn suggest_layout(&self, layout: Layout) {
        Value::try_set_layout(self, layout);
    }

    fn write_to(&self, w: &mut Writer<'_>) -> RenderResult {
        w.write(self)
    }
}

impl<N: Node> Content for N {
    fn is_visible(&self) -> bool {
        Node::has_render_content(self)
    }

    fn is_truthy(&self) -> bool {
        Node::condition_result(self)
    }

    fn suggest_layout(&self, layout: Layout) {
        Node::try_set_layout(self, layout);
    }

    fn write_to(&self, w: &mut Writer<'_>) -> RenderResult {
        w.write_node(self)
    }
}

/// A before/content/after triple.
#[derive(Debug)]
pub struct Wrapper<C = Value> {
    slot: LayoutSlot,
    before: Value,
    content: C,
    after: Value,
    content_indent: usize,
    content_layout: Cell<Option<Layout>>,
    default_layout: Layout,
    indent_offset: usize,
}

/// A wrapper whose content is a [`Container`].
pub type WrappedContainer = Wrapper<Container>;

impl<C: Content> Wrapper<C> {
    pub fn new(before: impl Into<Value>, content: C, after: impl Into<Value>) -> Self {
        Self {
            slot: LayoutSlot::new(),
            before: before.into(),
            content,
            after: after.into(),
            content_indent: DEFAULT_CONTENT_INDENT,
            content_layout: Cell::new(None),
            default_layout: Layout::Inline,
            indent_offset: 0,
        }
    }

    /// Force a layout; the content's preferred layout follows from it.
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

    /// Levels of indentation applied to the content. Defaults to one.
    #[must_use]
    pub fn with_content_indent(mut self, levels: usize) -> Self {
        self.content_indent = levels;
        self
    }

    pub fn before(&self) -> &Value {
        &self.before
    }

    pub fn after(&self) -> &Value {
        &self.after
    }

    pub fn set_before(&mut self, before: impl Into<Value>) {
        self.before = before.into();
    }

    pub fn set_after(&mut self, after: impl Into<Value>) {
        self.after = after.into();
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }

    pub fn set_content(&mut self, content: C) {
        self.content = content;
    }

    pub fn into_content(self) -> C {
        self.content
    }

    pub fn content_indent(&self) -> usize {
        self.content_indent
    }

    /// The layout this wrapper will suggest to its content, if any.
    pub fn content_layout(&self) -> Option<Layout> {
        self.content_layout.get()
    }
}

impl<C: Content> Node for Wrapper<C> {
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
        self.before.has_render_content()
            || self.content.is_visible()
            || self.after.has_render_content()
    }

    fn condition_result(&self) -> bool {
        self.content.is_truthy()
    }

    fn on_layout_changed(&self, state: LayoutState) {
        if let Some(layout) = state.cascade() {
            self.content_layout.set(Some(layout));
        }
    }

    fn render_content(&self, w: &mut Writer<'_>) -> RenderResult {
        if let Some(layout) = self.content_layout.get() {
            self.content.suggest_layout(layout);
        }

        let layout = self.layout();
        let content_shows = self.content.is_visible();

        if !self.before.is_null() {
            if layout.is_block() && content_shows {
                w.write_newline_and_indent()?;
            }
            w.write(&self.before)?;
        }

        w.with_indent(self.content_indent, |w| self.content.write_to(w))?;

        if !self.after.is_null() {
            if layout.is_multiline() && content_shows {
                w.write_newline_and_indent()?;
            }
            w.write(&self.after)?;
        }
        Ok(())
    }
}

impl Wrapper<Container> {
    /// Wrap a fresh `Block` container.
    pub fn around(before: impl Into<Value>, after: impl Into<Value>) -> Self {
        Self::new(before, Container::script(), after)
    }

    #[must_use]
    pub fn with_items<I, T>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        self.content.extend(items);
        self
    }

    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.content.set_separator(separator);
        self
    }

    pub fn push(&mut self, item: impl Into<Value>) {
        self.content.push(item);
    }

    pub fn insert(&mut self, index: usize, item: impl Into<Value>) {
        self.content.insert(index, item);
    }

    pub fn prepend<I, T>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        self.content.prepend(items);
    }

    pub fn remove(&mut self, index: usize) -> Option<Value> {
        self.content.remove(index)
    }

    pub fn clear(&mut self) {
        self.content.clear();
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.content.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.content.iter()
    }

    pub fn register(&mut self, name: impl Into<String>, item: impl Into<Value>) -> bool {
        self.content.register(name, item)
    }
}

impl<T: Into<Value>> Extend<T> for Wrapper<Container> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.content.extend(iter);
    }
}

#[cfg(test)]
mod tests;
