#![allow(clippy::unwrap_used, reason = "Tests can panic")]


use super::*;
use crate::config::WriterConfig;
use crate::emitter::StringEmitter;
use crate::format::PlainFormat;
use crate::values;

fn rendered(node: &dyn Node) -> String {
    let config = WriterConfig::with_indent_text("  ");
    let mut buffer = StringEmitter::new();
    {
        let mut w = Writer::new(&mut buffer, &config, &PlainFormat);
        w.write_node(node).unwrap();
    }
    buffer.output()
}

mod list_ops {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn push_insert_prepend_keep_order() {
        let mut c = Container::new();
        c.push("b");
        c.push("d");
        c.insert(1, "c");
        c.prepend(["_", "a"]);
        let texts: Vec<_> = c.iter().filter_map(Value::as_str).collect();
        assert_eq!(texts, ["_", "a", "b", "c", "d"]);
    }

    #[test]
    fn remove_out_of_range_is_none() {
        let mut c: Container = ["a", "b"].into_iter().collect();
        assert!(c.remove(5).is_none());
        assert_eq!(c.remove(0).unwrap().as_str(), Some("a"));
        assert_eq!(c.len(), 1);
        assert_eq!(c[0].as_str(), Some("b"));
    }

    #[test]
    fn index_mut_replaces() {
        let mut c = Container::new().with_items(["a", "b"]);
        c[1] = Value::from("z");
        assert_eq!(c.get(1).and_then(Value::as_str), Some("z"));
        assert!(c.get(2).is_none());
    }

    #[test]
    fn duplicates_allowed() {
        let c = Container::new().with_items(["a", "a", "a"]).with_separator(",");
        assert_eq!(c.len(), 3);
        assert_eq!(rendered(&c), "a,a,a");
    }

    #[test]
    fn register_adds_once() {
        let mut c = Container::script();
        assert!(c.register("helper", "function helper() {}"));
        assert!(!c.register("helper", "function helper() {}"));
        assert!(c.is_registered("helper"));
        assert_eq!(c.len(), 1);
        c.clear();
        assert!(c.is_empty());
        assert!(!c.register("helper", "again"));
    }
}

mod content {
    use super::*;

    #[test]
    fn empty_container_has_no_content() {
        assert!(!Container::new().has_render_content());
    }

    #[test]
    fn nulls_and_empty_strings_have_no_content() {
        let c = Container::new().with_items(values![None::<&str>, "", Vec::<Value>::new()]);
        assert!(!c.has_render_content());
        assert!(!c.condition_result());
    }

    #[test]
    fn content_propagates_from_nested_containers() {
        let inner = Container::new().with_items(["x"]);
        let outer = Container::new().with_items([Container::new(), inner]);
        assert!(outer.has_render_content());
    }
}

mod rendering {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn inline_with_separator() {
        let c = Container::new().with_separator(", ").with_items(["x", "y", "z"]);
        assert_eq!(rendered(&c), "x, y, z");
    }

    #[test]
    fn empty_items_contribute_no_separator() {
        let c = Container::new().with_separator(",").with_items(values!["a", "", None::<i32>, "b"]);
        assert_eq!(rendered(&c), "a,b");
    }

    #[test]
    fn block_puts_each_item_on_its_own_line() {
        let c = Container::script().with_separator(",").with_items(["a", "", "b"]);
        assert_eq!(rendered(&c), "a,\nb");
    }

    #[test]
    fn inline_block_starts_on_current_line() {
        let c = Container::new().with_layout(Layout::InlineBlock).with_items(["a", "b"]);
        assert_eq!(rendered(&c), "a\nb");
    }

    #[test]
    fn empty_block_writes_nothing() {
        let c = Container::script().with_items([""]);
        assert_eq!(rendered(&c), "");
    }

    #[test]
    fn nested_sequences_are_spliced() {
        let c = Container::new()
            .with_separator("+")
            .with_items(values!["a", vec![Value::from("b"), Value::from(vec!["c", "d"])]]);
        assert_eq!(c.render_list().len(), 4);
        assert_eq!(rendered(&c), "a+b+c+d");
    }

    #[test]
    fn indented_block_offsets_its_lines() {
        let c = Container::indented().with_items(["a", "b"]);
        assert_eq!(rendered(&c), "a\n  b");
    }

    #[test]
    fn block_child_breaks_for_itself() {
        let child = Container::indented().with_items(["x"]);
        let parent = Container::script().with_items(values!["a", child, "b"]);
        assert_eq!(rendered(&parent), "a\n  x\nb");
    }

    #[test]
    fn forced_layout_beats_suggestion() {
        let c = Container::new().with_layout(Layout::Inline).with_items(["a", "b"]);
        c.try_set_layout(Layout::Block);
        assert_eq!(c.layout(), Layout::Inline);
        assert_eq!(rendered(&c), "ab");
    }

    #[test]
    fn custom_flatten_replaces_splicing() {
        fn skip_ints<'a>(value: &'a Value, out: &mut Vec<&'a Value>) {
            if !matches!(value, Value::Scalar(crate::value::Scalar::Int(_))) {
                splice(value, out);
            }
        }
        let c = Container::new()
            .with_separator(" ")
            .with_flatten(skip_ints)
            .with_items(values!["a", 1, "b", 2]);
        assert_eq!(rendered(&c), "a b");
    }
}
