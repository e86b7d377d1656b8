//! `if` / `else`.

use quill_core::{Layout, LayoutSlot, Node, RenderResult, Value, Writer};

use crate::block::Block;

/// `if (condition) { ... } else { ... }`
///
/// Both branches open on the `if` line. The `else` part is written only when
/// its block has content.
#[derive(Debug)]
pub struct If {
    slot: LayoutSlot,
    condition: Value,
    then: Block,
    otherwise: Block,
}

impl If {
    /// An `if` around a prebuilt block. The block opens on the `if` line
    /// unless it already has a layout.
    pub fn new(condition: impl Into<Value>, then: Block) -> Self {
        then.try_set_layout(Layout::InlineBlock);
        Self {
            slot: LayoutSlot::new(),
            condition: condition.into(),
            then,
            otherwise: Block::empty().with_layout(Layout::InlineBlock),
        }
    }

    /// An `if` whose true branch is a single item.
    pub fn when(condition: impl Into<Value>, item: impl Into<Value>) -> Self {
        Self::new(condition, Block::new([item]).with_layout(Layout::InlineBlock))
    }

    /// Replace the `else` block. Its layout is kept if already set.
    #[must_use]
    pub fn with_else(mut self, otherwise: Block) -> Self {
        otherwise.try_set_layout(Layout::InlineBlock);
        self.otherwise = otherwise;
        self
    }

    /// Add an item to the `else` block.
    #[must_use]
    pub fn otherwise(mut self, item: impl Into<Value>) -> Self {
        self.otherwise.push(item);
        self
    }

    /// Force a layout.
    #[must_use]
    pub fn with_layout(self, layout: Layout) -> Self {
        self.request_layout(layout.into(), false);
        self
    }

    pub fn condition(&self) -> &Value {
        &self.condition
    }

    pub fn then_block(&self) -> &Block {
        &self.then
    }

    pub fn else_block(&self) -> &Block {
        &self.otherwise
    }
}

impl Node for If {
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
        w.write_str("if (")?;
        w.with_indent(1, |w| w.write(&self.condition))?;
        w.write_str(") ")?;
        w.write_node(&self.then)?;
        if !self.otherwise.is_empty() {
            w.write_str(" else ")?;
            w.write_node(&self.otherwise)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "Tests can panic")]

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{call, render_node, statement};

    #[test]
    fn if_without_else() {
        let branch = If::when("x > 1", statement([call("go", Vec::<Value>::new())]));
        assert_eq!(render_node(&branch).unwrap(), "if (x > 1) {\n\tgo();\n}");
    }

    #[test]
    fn if_with_else() {
        let branch = If::when("ok", statement(["a()"])).otherwise(statement(["b()"]));
        assert_eq!(render_node(&branch).unwrap(), "if (ok) {\n\ta();\n} else {\n\tb();\n}");
    }

    #[test]
    fn supplied_block_keeps_its_layout() {
        let branch = If::new("ok", Block::new([statement(["a()"])]).with_layout(Layout::Inline));
        assert_eq!(branch.then_block().layout(), Layout::Inline);
        assert_eq!(render_node(&branch).unwrap(), "if (ok) {a();}");
    }

    #[test]
    fn supplied_else_block_keeps_its_layout() {
        let otherwise = Block::new([statement(["b()"])]).with_layout(Layout::Block);
        let branch = If::when("ok", "a();").with_else(otherwise);
        assert_eq!(branch.else_block().layout(), Layout::Block);
    }

    #[test]
    fn unestablished_blocks_open_on_the_if_line() {
        let branch = If::new("ok", Block::new(["a();"])).with_else(Block::new(["b();"]));
        assert_eq!(branch.then_block().layout(), Layout::InlineBlock);
        assert_eq!(branch.else_block().layout(), Layout::InlineBlock);
        assert_eq!(render_node(&branch).unwrap(), "if (ok) {\n\ta();\n} else {\n\tb();\n}");
    }

    #[test]
    fn else_items_accumulate() {
        let branch = If::when("ok", "a();").otherwise("b();").otherwise("c();");
        assert_eq!(branch.else_block().layout(), Layout::InlineBlock);
        assert_eq!(
            render_node(&branch).unwrap(),
            "if (ok) {\n\ta();\n} else {\n\tb();\n\tc();\n}"
        );
    }

    #[test]
    fn empty_else_is_omitted() {
        let branch = If::when("ok", "a();").with_else(Block::new([""]));
        assert_eq!(render_node(&branch).unwrap(), "if (ok) {\n\ta();\n}");
    }
}
