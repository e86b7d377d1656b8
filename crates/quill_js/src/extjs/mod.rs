//! Ext JS helpers.
//!
//! Class declarations, component registration and `Ext.apply` built on the
//! JavaScript nodes. Class and component names are rendered once with the
//! active format strategy so their namespace can be registered first:
//!
//! ```
//! use quill_js::extjs::Component;
//! use quill_js::{property, quote, Object};
//!
//! let grid = Component::new("App.Grid", "Ext.grid.GridPanel", Object::new([property("title", quote("Orders"))]))
//!     .with_registry_name("appgrid");
//! assert_eq!(
//!     quill_js::render_node(&grid).unwrap(),
//!     "Ext.ns('App');\nApp.Grid = Ext.extend(Ext.grid.GridPanel, {\n\ttitle: 'Orders'\n});\nExt.reg('appgrid', App.Grid);"
//! );
//! ```

mod apply;
mod class;

pub use apply::Apply;
pub use class::{Class, Component};

use quill_core::construct::line;
use quill_core::{RenderResult, Scalar, Value, WrappedContainer, Writer};

use crate::block::Block;
use crate::call::call;
use crate::list::statement;
use crate::object::Object;
use crate::quote::quote;

/// The namespace part of a dotted class name, e.g. `App.data` for
/// `App.data.Store`. `None` when the name has no namespace.
pub fn namespace_of(class_name: &str) -> Option<&str> {
    class_name
        .rfind('.')
        .map(|dot| &class_name[..dot])
        .filter(|namespace| !namespace.is_empty())
}

/// `Class.superclass.function.call(this, args...);`
pub fn base_call<I, T>(class: impl Into<Value>, function: impl Into<Value>, args: I) -> WrappedContainer
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    let target = line([class.into(), Value::from(".superclass."), function.into(), Value::from(".call")]);
    let args = std::iter::once(Value::from("this")).chain(args.into_iter().map(Into::into));
    statement([call(target, args)])
}

/// `Class.superclass.function.apply(this, arguments);`
pub fn base_apply(class: impl Into<Value>, function: impl Into<Value>) -> WrappedContainer {
    let target = line([class.into(), Value::from(".superclass."), function.into(), Value::from(".apply")]);
    statement([call(target, ["this", "arguments"])])
}

/// The Ext data field type for a scalar: `int`, `float`, `date`, `bool` or
/// `string`.
pub fn field_type(scalar: &Scalar) -> &'static str {
    match scalar {
        Scalar::Int(_) => "int",
        Scalar::Float(_) => "float",
        Scalar::DateTime(_) => "date",
        Scalar::Bool(_) => "bool",
        Scalar::Str(_) | Scalar::Duration(_) | Scalar::Uuid(_) => "string",
    }
}

/// `Ext.apply(this, config);`
pub fn apply(config: Object) -> Apply {
    Apply::new(config)
}

/// `Ext.applyIf(this, config);`
pub fn apply_if(config: Object) -> Apply {
    Apply::new(config).if_missing()
}

/// A class with a constructor taking `params`.
pub fn class<I, T>(name: impl Into<Value>, base: impl Into<Value>, params: I, constructor: Block) -> Class
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    Class::new(name, base, params, constructor)
}

pub fn component(name: impl Into<Value>, base: impl Into<Value>, config: Object) -> Component {
    Component::new(name, base, config)
}

/// Write `Ext.ns('namespace');` and start a new line when `class_name` has a
/// namespace.
fn write_namespace(w: &mut Writer<'_>, class_name: &str) -> RenderResult {
    if let Some(namespace) = namespace_of(class_name) {
        w.write_node(&statement([call("Ext.ns", [quote(namespace)])]))?;
        w.write_newline_and_indent()?;
    }
    Ok(())
}
