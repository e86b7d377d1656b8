//! Golden-output tests for generated XML.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use quill_core::{values, Conditional, Value};
use quill_xml::{attribute, cdata, element, render, render_indented, render_node, text};
use uuid::Uuid;

#[test]
fn typed_configuration_document() {
    let created = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap().and_hms_opt(7, 8, 9).unwrap();
    let doc = element("config", values![
        attribute("id", Uuid::from_u128(0x1234)),
        element("created", [created]),
        element("enabled", [true]),
        element("ratio", [f64::NEG_INFINITY]),
        element("note", values![text("a & b"), cdata("<raw>")]),
    ]);
    assert_eq!(
        render_node(&doc).unwrap(),
        "<config id=\"00000000-0000-0000-0000-000000001234\">\n\
         \t<created>2024-05-06T07:08:09</created>\n\
         \t<enabled>true</enabled>\n\
         \t<ratio>-INF</ratio>\n\
         \t<note>a &amp; b<![CDATA[<raw>]]></note>\n\
         </config>"
    );
}

#[test]
fn conditional_children() {
    let user = |admin: bool| {
        element("user", values![
            attribute("name", "bob"),
            Conditional::when(admin, element("admin", Vec::<Value>::new())),
        ])
    };
    assert_eq!(render_node(&user(false)).unwrap(), "<user name=\"bob\"/>");
    assert_eq!(render_node(&user(true)).unwrap(), "<user name=\"bob\"><admin/></user>");
}

#[test]
fn starting_indent_level() {
    let doc = element("a", [element("b", ["x"])]);
    assert_eq!(render_indented(&Value::from(doc), 1).unwrap(), "<a>\n\t\t<b>x</b>\n\t</a>");
}

#[test]
fn sibling_documents_in_a_sequence() {
    let fragments = Value::from(vec![element("a", Vec::<Value>::new()), element("b", ["1"])]);
    assert_eq!(render(&fragments).unwrap(), "<a/><b>1</b>");
}
