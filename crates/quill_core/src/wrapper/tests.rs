#![allow(clippy::unwrap_used, reason = "Tests can panic")]


use super::*;
use crate::config::WriterConfig;
use crate::emitter::StringEmitter;
use crate::format::PlainFormat;

fn rendered(node: &dyn Node) -> String {
    let config = WriterConfig::default();
    let mut buffer = StringEmitter::new();
    {
        let mut w = Writer::new(&mut buffer, &config, &PlainFormat);
        w.write_node(node).unwrap();
    }
    buffer.output()
}

fn list(items: &[&str], separator: &str) -> Container {
    Container::new()
        .with_separator(separator)
        .with_items(items.iter().copied())
}

mod layout_cascade {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn no_hint_until_layout_established() {
        let w = Wrapper::new("(", Value::from("x"), ")");
        assert_eq!(w.content_layout(), None);
    }

    #[test]
    fn inline_block_cascades_block() {
        let w = Wrapper::new("(", list(&["x"], ""), ")").with_layout(Layout::InlineBlock);
        assert_eq!(w.content_layout(), Some(Layout::Block));
    }

    #[test]
    fn inline_cascades_inline() {
        let w = Wrapper::new("(", list(&["x"], ""), ")").with_layout(Layout::Inline);
        assert_eq!(w.content_layout(), Some(Layout::Inline));
    }

    #[test]
    fn hint_is_applied_at_render_time() {
        let w = Wrapper::new("[", list(&["a", "b"], ","), "]").with_layout(Layout::Block);
        assert!(!w.content().is_layout_established());
        rendered(&w);
        assert_eq!(w.content().layout(), Layout::Block);
    }

    #[test]
    fn hint_loses_to_established_content() {
        let content = list(&["a", "b"], ", ").with_layout(Layout::Inline);
        let w = Wrapper::new("[", content, "]").with_layout(Layout::Block);
        assert_eq!(rendered(&w), "[a, b\n]");
    }

    #[test]
    fn default_request_keeps_hint() {
        let w = Wrapper::new("(", list(&["x"], ""), ")").with_layout(Layout::Block);
        w.request_layout(LayoutRequest::Default, false);
        assert_eq!(w.content_layout(), Some(Layout::Block));
        assert_eq!(w.layout(), Layout::Inline);
    }
}

mod rendering {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn inline_wrapper() {
        let w = Wrapper::new("(", list(&["x", "y"], ", "), ")");
        assert_eq!(rendered(&w), "(x, y)");
    }

    #[test]
    fn block_wrapper_indents_content() {
        let w = Wrapper::new("{", list(&["a", "b"], ";"), "}").with_layout(Layout::Block);
        assert_eq!(rendered(&w), "{\n\ta;\n\tb\n}");
    }

    #[test]
    fn nested_block_wrappers() {
        let inner = Wrapper::new("{", list(&["a: 1", "b: 2"], ","), "}").with_layout(Layout::Block);
        let outer = Wrapper::new("(", inner, ")").with_layout(Layout::Block);
        assert_eq!(rendered(&outer), "(\n\t{\n\t\ta: 1,\n\t\tb: 2\n\t}\n)");
    }

    #[test]
    fn empty_content_keeps_brackets_together() {
        let w = Wrapper::new("{", Container::new(), "}").with_layout(Layout::Block);
        assert!(w.has_render_content());
        assert!(!w.condition_result());
        assert_eq!(rendered(&w), "{}");
    }

    #[test]
    fn null_before_and_after() {
        let w = Wrapper::new(Value::Null, Value::from("body"), ";");
        assert_eq!(rendered(&w), "body;");
        let empty = Wrapper::new(Value::Null, Value::Null, Value::Null);
        assert!(!empty.has_render_content());
    }

    #[test]
    fn content_indent_zero() {
        let w = Wrapper::new("{", list(&["a"], ""), "}")
            .with_layout(Layout::Block)
            .with_content_indent(0);
        assert_eq!(rendered(&w), "{\na\n}");
    }
}

mod wrapped_container {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn forwards_list_operations() {
        let mut w = WrappedContainer::around("[", "]").with_separator(",");
        w.push("b");
        w.prepend(["a"]);
        w.extend(["c"]);
        assert_eq!(w.len(), 3);
        assert_eq!(w.get(0).and_then(Value::as_str), Some("a"));
        assert_eq!(w.remove(2).and_then(|v| v.as_str().map(str::to_owned)), Some("c".to_owned()));
        assert!(w.register("x", "x"));
        assert!(!w.register("x", "x"));
        w.clear();
        assert!(w.is_empty());
    }

    #[test]
    fn around_defaults_to_block_content() {
        let w = WrappedContainer::around("[", "]").with_separator(",").with_items(["a", "b"]);
        assert_eq!(rendered(&w), "[\n\ta,\n\tb]");
    }
}
