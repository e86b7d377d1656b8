//! XML Elements
//!
//! An [`Element`] is a named container. Its items mix attributes, which are
//! written into the start tag, with body content: child elements, text,
//! CDATA and any other node.
//!
//! Scalars added to an element become [`Text`] nodes so they are escaped.
//!
//! # Layout
//!
//! Elements default to `Inline`. An element holding child elements asks for
//! `Block` when it renders, so nested markup indents unless a layout was
//! forced. An element with no body content closes itself: `<name/>`.

use quill_core::{Container, Layout, LayoutSlot, Node, RenderResult, Value, Writer};

use crate::attribute::Attribute;
use crate::escape::encode_name;
use crate::text::Text;

/// `<name attrs>children</name>`
#[derive(Debug)]
pub struct Element {
    name: String,
    children: Container,
}

/// Flatten step for element bodies: attributes belong to the start tag.
fn body_items<'a>(value: &'a Value, out: &mut Vec<&'a Value>) {
    match value {
        Value::Seq(items) => {
            for item in items {
                body_items(item, out);
            }
        }
        _ if value.downcast_ref::<Attribute>().is_some() => {}
        _ => out.push(value),
    }
}

fn collect_attributes<'a>(value: &'a Value, out: &mut Vec<&'a Attribute>) {
    match value {
        Value::Seq(items) => {
            for item in items {
                collect_attributes(item, out);
            }
        }
        _ => out.extend(value.downcast_ref::<Attribute>()),
    }
}

/// Wrap scalars as escaped text, recursing into sequences.
fn into_child(value: Value) -> Value {
    match value {
        Value::Scalar(scalar) => Value::from(Text::new(scalar)),
        Value::Seq(items) => Value::Seq(items.into_iter().map(into_child).collect()),
        other => other,
    }
}

impl Element {
    /// An empty element.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Container::new().with_flatten(body_items),
        }
    }

    #[must_use]
    pub fn with_children<I, T>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        self.extend(children);
        self
    }

    /// Add an attribute.
    #[must_use]
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(Attribute::new(name, value));
        self
    }

    /// Force a layout.
    #[must_use]
    pub fn with_layout(self, layout: Layout) -> Self {
        Self {
            name: self.name,
            children: self.children.with_layout(layout),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn push(&mut self, child: impl Into<Value>) {
        self.children.push(into_child(child.into()));
    }

    pub fn insert(&mut self, index: usize, child: impl Into<Value>) {
        self.children.insert(index, into_child(child.into()));
    }

    pub fn remove(&mut self, index: usize) -> Option<Value> {
        self.children.remove(index)
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// Every item, attributes included, in insertion order.
    pub fn items(&self) -> &[Value] {
        self.children.items()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Attributes in the order they were added.
    pub fn attributes(&self) -> Vec<&Attribute> {
        let mut out = Vec::new();
        for item in self.children.items() {
            collect_attributes(item, &mut out);
        }
        out
    }

    /// The first attribute called `name`.
    pub fn find_attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes().into_iter().find(|a| a.name() == name)
    }

    /// Body items in render order, attributes excluded.
    pub fn body(&self) -> Vec<&Value> {
        self.children.render_list()
    }

    /// Whether any body item would produce text.
    pub fn has_body(&self) -> bool {
        self.children.has_render_content()
    }
}

impl<T: Into<Value>> Extend<T> for Element {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.children.extend(iter.into_iter().map(|child| into_child(child.into())));
    }
}

impl Node for Element {
    fn layout_slot(&self) -> &LayoutSlot {
        self.children.layout_slot()
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn default_layout(&self) -> Layout {
        self.children.default_layout()
    }

    fn render_content(&self, w: &mut Writer<'_>) -> RenderResult {
        let body = self.body();
        if body.iter().any(|item| item.downcast_ref::<Element>().is_some()) {
            self.try_set_layout(Layout::Block);
        }
        let layout = self.layout();
        let name = encode_name(&self.name);

        if layout.is_block() {
            w.write_newline_and_indent()?;
        }
        w.write_str("<")?;
        w.write_str(&name)?;
        for attribute in self.attributes() {
            w.write_str(" ")?;
            w.write_node(attribute)?;
        }

        if !body.iter().any(|item| item.has_render_content()) {
            return w.write_str("/>");
        }

        w.write_str(">")?;
        w.with_indent(1, |w| {
            if layout == Layout::InlineBlock {
                w.write_newline_and_indent()?;
            }
            self.children.render_content(w)
        })?;
        if layout.is_multiline() {
            w.write_newline_and_indent()?;
        }
        w.write_str("</")?;
        w.write_str(&name)?;
        w.write_str(">")
    }
}

#[cfg(test)]
mod tests;
