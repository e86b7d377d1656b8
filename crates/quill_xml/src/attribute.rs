//! Element attributes.

use quill_core::{LayoutSlot, Node, RenderResult, Value, Writer};

use crate::escape::{encode_attribute, encode_name};

/// `name="value"`, written inside the start tag of the element holding it.
#[derive(Debug)]
pub struct Attribute {
    slot: LayoutSlot,
    name: String,
    value: Value,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            slot: LayoutSlot::new(),
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<Value>) {
        self.value = value.into();
    }
}

impl Node for Attribute {
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
        let value = w.format(&self.value)?;
        w.write_str(&encode_name(&self.name))?;
        w.write_str("=\"")?;
        w.write_str(&encode_attribute(&value))?;
        w.write_str("\"")
    }
}
