#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use quill_core::values;

use super::*;
use crate::render_node;
use crate::text::CData;

mod building {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn scalars_become_text() {
        let e = Element::new("p").with_children(values!["a", 1]);
        assert_eq!(e.len(), 2);
        assert!(e.items().iter().all(|item| item.downcast_ref::<Text>().is_some()));
    }

    #[test]
    fn nested_sequences_are_wrapped_too() {
        let mut e = Element::new("p");
        e.push(vec!["x", "y"]);
        assert_eq!(e.body().len(), 2);
        assert!(e.body().iter().all(|item| item.downcast_ref::<Text>().is_some()));
    }

    #[test]
    fn attributes_are_kept_out_of_the_body() {
        let e = Element::new("a")
            .attribute("href", "/home")
            .with_children(["Home"])
            .attribute("class", "nav");
        assert_eq!(e.len(), 3);
        assert_eq!(e.body().len(), 1);
        let names: Vec<_> = e.attributes().into_iter().map(Attribute::name).collect();
        assert_eq!(names, ["href", "class"]);
        assert!(e.find_attribute("class").is_some());
        assert!(e.find_attribute("id").is_none());
    }

    #[test]
    fn remove_and_clear() {
        let mut e = Element::new("ul").with_children(["a", "b"]);
        assert!(e.remove(0).is_some());
        assert!(e.remove(5).is_none());
        assert_eq!(e.len(), 1);
        e.clear();
        assert!(e.is_empty());
        assert!(!e.has_body());
    }
}

mod rendering {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_element_closes_itself() {
        assert_eq!(render_node(&Element::new("br")).unwrap(), "<br/>");
        let e = Element::new("img").attribute("src", "a.png").with_children([""]);
        assert_eq!(render_node(&e).unwrap(), "<img src=\"a.png\"/>");
    }

    #[test]
    fn text_content_stays_inline() {
        let e = Element::new("b").attribute("id", 7).with_children(["x < y"]);
        assert_eq!(render_node(&e).unwrap(), "<b id=\"7\">x &lt; y</b>");
    }

    #[test]
    fn child_elements_switch_to_block() {
        let e = Element::new("root").with_children([
            Element::new("a").with_children(["x"]),
            Element::new("b"),
        ]);
        assert_eq!(render_node(&e).unwrap(), "<root>\n\t<a>x</a>\n\t<b/>\n</root>");
        assert_eq!(e.layout(), Layout::Block);
    }

    #[test]
    fn forced_inline_keeps_children_on_one_line() {
        let e = Element::new("p")
            .with_layout(Layout::Inline)
            .with_children(values!["a ", Element::new("i").with_children(["b"]), " c"]);
        assert_eq!(render_node(&e).unwrap(), "<p>a <i>b</i> c</p>");
    }

    #[test]
    fn inline_block_opens_on_the_tag_line() {
        let e = Element::new("p").with_layout(Layout::InlineBlock).with_children(["a", "b"]);
        assert_eq!(render_node(&e).unwrap(), "<p>\n\ta\n\tb\n</p>");
    }

    #[test]
    fn block_text_element() {
        let e = Element::new("p").with_layout(Layout::Block).with_children(["a"]);
        assert_eq!(render_node(&e).unwrap(), "<p>\n\ta\n</p>");
    }

    #[test]
    fn cdata_child() {
        let e = Element::new("script").with_children([CData::new("a && b")]);
        assert_eq!(render_node(&e).unwrap(), "<script><![CDATA[a && b]]></script>");
    }

    #[test]
    fn deep_nesting_indents_each_level() {
        let e = Element::new("a").with_children([
            Element::new("b").with_children([Element::new("c").with_children(["x"])]),
        ]);
        assert_eq!(render_node(&e).unwrap(), "<a>\n\t<b>\n\t\t<c>x</c>\n\t</b>\n</a>");
    }

    #[test]
    fn encoded_tag_names() {
        let e = Element::new("2nd").with_children(["x"]);
        assert_eq!(render_node(&e).unwrap(), "<_x0032_nd>x</_x0032_nd>");
    }
}
