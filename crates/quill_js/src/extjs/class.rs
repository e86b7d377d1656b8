use quill_core::{Layout, LayoutSlot, Node, RenderResult, Value, Writer};

use super::write_namespace;
use crate::block::Block;
use crate::function::Function;
use crate::object::Object;
use crate::quote::quote;

/// A class declared as a constructor function extending a base class:
///
/// ```text
/// Ext.ns('App');
/// App.Widget = function(config) {...};
/// Ext.extend(App.Widget, Ext.Panel);
/// ```
#[derive(Debug)]
pub struct Class {
    slot: LayoutSlot,
    name: Value,
    base: Value,
    constructor: Function,
}

impl Class {
    pub fn new<I, T>(name: impl Into<Value>, base: impl Into<Value>, params: I, constructor: Block) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self {
            slot: LayoutSlot::new(),
            name: name.into(),
            base: base.into(),
            constructor: Function::anonymous(params)
                .with_body(constructor)
                .with_layout(Layout::InlineBlock),
        }
    }

    pub fn name(&self) -> &Value {
        &self.name
    }

    pub fn base(&self) -> &Value {
        &self.base
    }

    pub fn constructor(&self) -> &Block {
        self.constructor.body()
    }

    pub fn constructor_mut(&mut self) -> &mut Block {
        self.constructor.body_mut()
    }
}

impl Node for Class {
    fn layout_slot(&self) -> &LayoutSlot {
        &self.slot
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn default_layout(&self) -> Layout {
        Layout::Block
    }

    fn render_content(&self, w: &mut Writer<'_>) -> RenderResult {
        let name = w.render_fragment(&self.name)?;
        if self.layout().is_block() {
            w.write_newline_and_indent()?;
        }
        write_namespace(w, &name)?;

        w.write_str(&name)?;
        w.write_str(" = ")?;
        w.write_node(&self.constructor)?;
        w.write_str(";")?;

        w.write_newline_and_indent()?;
        w.write_str("Ext.extend(")?;
        w.write_str(&name)?;
        w.write_str(", ")?;
        w.write(&self.base)?;
        w.write_str(");")
    }
}

/// A component class whose members come from a config object, optionally
/// registered under an xtype:
///
/// ```text
/// Ext.ns('App');
/// App.Grid = Ext.extend(Ext.grid.GridPanel, {...});
/// Ext.reg('appgrid', App.Grid);
/// ```
#[derive(Debug)]
pub struct Component {
    slot: LayoutSlot,
    name: Value,
    base: Value,
    config: Object,
    registry_name: Option<String>,
}

impl Component {
    /// The config object opens on the declaration line unless it already
    /// has a layout.
    pub fn new(name: impl Into<Value>, base: impl Into<Value>, config: Object) -> Self {
        config.try_set_layout(Layout::InlineBlock);
        Self {
            slot: LayoutSlot::new(),
            name: name.into(),
            base: base.into(),
            config,
            registry_name: None,
        }
    }

    /// Register the component with `Ext.reg` under `xtype`.
    #[must_use]
    pub fn with_registry_name(mut self, xtype: impl Into<String>) -> Self {
        self.registry_name = Some(xtype.into());
        self
    }

    pub fn name(&self) -> &Value {
        &self.name
    }

    pub fn base(&self) -> &Value {
        &self.base
    }

    pub fn config(&self) -> &Object {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Object {
        &mut self.config
    }

    pub fn registry_name(&self) -> Option<&str> {
        self.registry_name.as_deref()
    }
}

impl Node for Component {
    fn layout_slot(&self) -> &LayoutSlot {
        &self.slot
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn default_layout(&self) -> Layout {
        Layout::Block
    }

    fn render_content(&self, w: &mut Writer<'_>) -> RenderResult {
        let name = w.render_fragment(&self.name)?;
        if self.layout().is_block() {
            w.write_newline_and_indent()?;
        }
        write_namespace(w, &name)?;

        w.write_str(&name)?;
        w.write_str(" = Ext.extend(")?;
        w.write(&self.base)?;
        w.write_str(", ")?;
        w.write_node(&self.config)?;
        w.write_str(");")?;

        if let Some(xtype) = &self.registry_name {
            w.write_newline_and_indent()?;
            w.write_str("Ext.reg(")?;
            w.write_node(&quote(xtype.as_str()))?;
            w.write_str(", ")?;
            w.write_str(&name)?;
            w.write_str(");")?;
        }
        Ok(())
    }
}
