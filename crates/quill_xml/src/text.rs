//! Character data and CDATA sections.

use quill_core::{LayoutSlot, Node, RenderResult, Value, Writer};

use crate::escape::{encode_text, escape_cdata};

/// Escaped character data.
///
/// The value is rendered first (with the writer's format strategy) and the
/// resulting text escaped, so nested nodes produce literal text.
#[derive(Debug, Default)]
pub struct Text {
    slot: LayoutSlot,
    value: Value,
}

impl Text {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            slot: LayoutSlot::new(),
            value: value.into(),
        }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl Node for Text {
    fn layout_slot(&self) -> &LayoutSlot {
        &self.slot
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn has_render_content(&self) -> bool {
        self.value.has_render_content()
    }

    fn render_content(&self, w: &mut Writer<'_>) -> RenderResult {
        if self.layout().is_block() {
            w.write_newline_and_indent()?;
        }
        let text = w.format(&self.value)?;
        w.write_str(&encode_text(&text))
    }
}

/// `<![CDATA[...]]>`
#[derive(Debug, Default)]
pub struct CData {
    slot: LayoutSlot,
    data: Value,
}

impl CData {
    pub fn new(data: impl Into<Value>) -> Self {
        Self {
            slot: LayoutSlot::new(),
            data: data.into(),
        }
    }

    pub fn data(&self) -> &Value {
        &self.data
    }
}

impl Node for CData {
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
        let data = w.format(&self.data)?;
        w.write_str("<![CDATA[")?;
        w.write_str(&escape_cdata(&data))?;
        w.write_str("]]>")
    }
}
