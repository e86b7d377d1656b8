//! Quill XML
//!
//! XML node library for the quill script builder: elements, attributes,
//! escaped text and CDATA sections, plus the XML Schema format strategy.
//!
//! ```
//! use quill_xml::{element, Element};
//!
//! let doc = element("list", [
//!     Element::new("item").attribute("id", 1).with_children(["one"]),
//!     Element::new("item").attribute("id", 2),
//! ]);
//! assert_eq!(
//!     quill_xml::render_node(&doc).unwrap(),
//!     "<list>\n\t<item id=\"1\">one</item>\n\t<item id=\"2\"/>\n</list>"
//! );
//! ```

pub mod attribute;
pub mod element;
pub mod escape;
pub mod format;
pub mod text;

pub use attribute::Attribute;
pub use element::Element;
pub use escape::{encode_attribute, encode_name, encode_text, escape_cdata};
pub use format::{XmlFormat, XML_DATETIME_PATTERN};
pub use text::{CData, Text};

use quill_core::{Node, RenderOptions, RenderResult, Value};

/// `<name>children</name>`
pub fn element<I, T>(name: impl Into<String>, children: I) -> Element
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    Element::new(name).with_children(children)
}

/// `name="value"`, for adding to an element's items.
pub fn attribute(name: impl Into<String>, value: impl Into<Value>) -> Attribute {
    Attribute::new(name, value)
}

pub fn text(value: impl Into<Value>) -> Text {
    Text::new(value)
}

pub fn cdata(data: impl Into<Value>) -> CData {
    CData::new(data)
}

/// Render options preset with [`XmlFormat`].
pub fn options() -> RenderOptions<'static> {
    RenderOptions::with_format(&XmlFormat)
}

/// Render a value as XML.
pub fn render(value: &Value) -> RenderResult<String> {
    quill_core::render(value, &options())
}

/// Render a node as XML.
pub fn render_node(node: &dyn Node) -> RenderResult<String> {
    quill_core::render_node(node, &options())
}

/// Render a value as XML starting at the given indentation level.
pub fn render_indented(value: &Value, indent_level: usize) -> RenderResult<String> {
    quill_core::render(value, &options().indent_level(indent_level))
}
