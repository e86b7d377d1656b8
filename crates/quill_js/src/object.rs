//! Object literals.
//!
//! A [`PropertyList`] spreads nested objects and property lists into itself
//! at render time, so partial objects can be composed:
//!
//! ```
//! use quill_js::{property, Object, PropertyList};
//!
//! let defaults = PropertyList::new([property("a", 1)]);
//! let object = Object::new([quill_core::Value::from(defaults), property("b", 2).into()]);
//! assert_eq!(quill_js::render_node(&object).unwrap(), "{a: 1, b: 2}");
//! ```

use quill_core::{
    Container, FormatStrategy, Layout, LayoutSlot, Node, RenderOptions, RenderResult, Value,
    Wrapper, Writer,
};

use crate::format::JsFormat;
use crate::list::LIST_SEPARATOR;

/// `name: value`
///
/// A property without a name renders nothing, whatever its value.
#[derive(Debug)]
pub struct Property {
    slot: LayoutSlot,
    name: Value,
    value: Value,
}

impl Property {
    pub fn new(name: impl Into<Value>, value: impl Into<Value>) -> Self {
        Self {
            slot: LayoutSlot::new(),
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &Value {
        &self.name
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<Value>) {
        self.value = value.into();
    }

    /// Whether the name renders to `name` under `format`.
    pub fn is_named(&self, name: &str, format: &dyn FormatStrategy) -> bool {
        match self.name.as_str() {
            Some(own) => own == name,
            None => quill_core::render(&self.name, &RenderOptions::with_format(format))
                .is_ok_and(|own| own == name),
        }
    }
}

pub fn property(name: impl Into<Value>, value: impl Into<Value>) -> Property {
    Property::new(name, value)
}

impl Node for Property {
    fn layout_slot(&self) -> &LayoutSlot {
        &self.slot
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn has_render_content(&self) -> bool {
        self.name.has_render_content()
    }

    fn render_content(&self, w: &mut Writer<'_>) -> RenderResult {
        if self.layout().is_block() {
            w.write_newline_and_indent()?;
        }
        w.write(&self.name)?;
        w.write_str(": ")?;
        w.write(&self.value)
    }
}

/// A comma list of properties.
#[derive(Debug)]
pub struct PropertyList {
    inner: Container,
}

/// Flatten step for property lists: nested objects and property lists
/// contribute their own properties.
fn spread<'a>(value: &'a Value, out: &mut Vec<&'a Value>) {
    let nested: &[Value] = if let Some(object) = value.downcast_ref::<Object>() {
        object.properties().items()
    } else if let Some(list) = value.downcast_ref::<PropertyList>() {
        list.items()
    } else if let Value::Seq(items) = value {
        items
    } else {
        out.push(value);
        return;
    };
    for item in nested {
        spread(item, out);
    }
}

impl PropertyList {
    pub fn new<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self {
            inner: Container::new()
                .with_separator(LIST_SEPARATOR)
                .with_flatten(spread)
                .with_items(items),
        }
    }

    /// Force a layout.
    #[must_use]
    pub fn with_layout(self, layout: Layout) -> Self {
        Self {
            inner: self.inner.with_layout(layout),
        }
    }

    pub fn push(&mut self, item: impl Into<Value>) {
        self.inner.push(item);
    }

    /// Append `name: value`.
    pub fn add(&mut self, name: impl Into<Value>, value: impl Into<Value>) {
        self.inner.push(Property::new(name, value));
    }

    pub fn items(&self) -> &[Value] {
        self.inner.items()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// First property named `name`, searching spread objects and lists
    /// depth-first in render order. Names are compared as [`JsFormat`]
    /// spells them.
    pub fn find_property(&self, name: &str) -> Option<&Property> {
        self.find_property_with(name, &JsFormat)
    }

    /// [`PropertyList::find_property`] with names spelled by `format`.
    pub fn find_property_with(&self, name: &str, format: &dyn FormatStrategy) -> Option<&Property> {
        self.inner.render_list().into_iter().find_map(|item| {
            item.downcast_ref::<Property>()
                .filter(|property| property.is_named(name, format))
        })
    }

    /// Value of the first property named `name`.
    pub fn find_property_value(&self, name: &str) -> Option<&Value> {
        self.find_property(name).map(Property::value)
    }
}

impl Default for PropertyList {
    fn default() -> Self {
        Self::new(Vec::<Value>::new())
    }
}

impl<T: Into<Value>> Extend<T> for PropertyList {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

forward_node!(PropertyList, inner);

/// `{name: value, ...}`
#[derive(Debug)]
pub struct Object {
    inner: Wrapper<PropertyList>,
}

impl Object {
    pub fn new<I, T>(properties: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self::from_list(PropertyList::new(properties))
    }

    pub fn from_list(list: PropertyList) -> Self {
        Self {
            inner: Wrapper::new("{", list, "}"),
        }
    }

    /// Force a layout. `Block` and `InlineBlock` put each property on its own
    /// line.
    #[must_use]
    pub fn with_layout(self, layout: Layout) -> Self {
        Self {
            inner: self.inner.with_layout(layout),
        }
    }

    pub fn properties(&self) -> &PropertyList {
        self.inner.content()
    }

    pub fn properties_mut(&mut self) -> &mut PropertyList {
        self.inner.content_mut()
    }

    pub fn add(&mut self, name: impl Into<Value>, value: impl Into<Value>) {
        self.properties_mut().add(name, value);
    }

    pub fn find_property(&self, name: &str) -> Option<&Property> {
        self.properties().find_property(name)
    }

    pub fn find_property_value(&self, name: &str) -> Option<&Value> {
        self.properties().find_property_value(name)
    }
}

impl Default for Object {
    fn default() -> Self {
        Self::new(Vec::<Value>::new())
    }
}

forward_node!(Object, inner);
