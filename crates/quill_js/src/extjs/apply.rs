use quill_core::{LayoutSlot, Node, RenderResult, Value, Writer};

use crate::object::Object;

/// `Ext.apply(receiver, config[, defaults]);`
///
/// Renders nothing when neither object has a property. Defaults are only
/// passed when they have one.
#[derive(Debug)]
pub struct Apply {
    slot: LayoutSlot,
    receiver: Value,
    config: Object,
    defaults: Object,
    if_missing: bool,
}

impl Apply {
    /// Apply `config` to `this`.
    pub fn new(config: Object) -> Self {
        Self {
            slot: LayoutSlot::new(),
            receiver: Value::from("this"),
            config,
            defaults: Object::default(),
            if_missing: false,
        }
    }

    /// Use `Ext.applyIf`, which only copies properties the receiver lacks.
    #[must_use]
    pub fn if_missing(mut self) -> Self {
        self.if_missing = true;
        self
    }

    #[must_use]
    pub fn with_receiver(mut self, receiver: impl Into<Value>) -> Self {
        self.receiver = receiver.into();
        self
    }

    #[must_use]
    pub fn with_defaults(mut self, defaults: Object) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn receiver(&self) -> &Value {
        &self.receiver
    }

    pub fn config(&self) -> &Object {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Object {
        &mut self.config
    }

    pub fn defaults(&self) -> &Object {
        &self.defaults
    }

    pub fn defaults_mut(&mut self) -> &mut Object {
        &mut self.defaults
    }

    fn function_name(&self) -> &'static str {
        if self.if_missing {
            "Ext.applyIf"
        } else {
            "Ext.apply"
        }
    }
}

impl Node for Apply {
    fn layout_slot(&self) -> &LayoutSlot {
        &self.slot
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    // The braces alone always render, so look at the properties.
    fn has_render_content(&self) -> bool {
        self.config.properties().has_render_content() || self.defaults.properties().has_render_content()
    }

    fn render_content(&self, w: &mut Writer<'_>) -> RenderResult {
        if self.layout().is_block() {
            w.write_newline_and_indent()?;
        }
        w.write_str(self.function_name())?;
        w.write_str("(")?;
        w.write(&self.receiver)?;
        w.write_str(", ")?;
        w.write_node(&self.config)?;
        if self.defaults.properties().has_render_content() {
            w.write_str(", ")?;
            w.write_node(&self.defaults)?;
        }
        w.write_str(");")
    }
}
