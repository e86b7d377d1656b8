//! Statement blocks.

use quill_core::{Container, Layout, Node, Value, WrappedContainer, Wrapper};

/// `{ ... }` around a script of statements.
///
/// Blocks default to [`Layout::Block`]. Owners such as functions and `if`
/// suggest `InlineBlock` so the opening brace stays on their line.
#[derive(Debug)]
pub struct Block {
    inner: WrappedContainer,
}

impl Block {
    pub fn new<I, T>(lines: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self {
            inner: Wrapper::new("{", Container::script().with_items(lines), "}")
                .with_default_layout(Layout::Block),
        }
    }

    /// An empty block.
    pub fn empty() -> Self {
        Self::new(Vec::<Value>::new())
    }

    /// Force a layout.
    #[must_use]
    pub fn with_layout(self, layout: Layout) -> Self {
        Self {
            inner: self.inner.with_layout(layout),
        }
    }

    pub fn push(&mut self, line: impl Into<Value>) {
        self.inner.push(line);
    }

    pub fn script(&self) -> &Container {
        self.inner.content()
    }

    pub fn script_mut(&mut self) -> &mut Container {
        self.inner.content_mut()
    }

    pub fn is_empty(&self) -> bool {
        !self.inner.content().has_render_content()
    }
}

impl Default for Block {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Into<Value>> Extend<T> for Block {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

forward_node!(Block, inner);
