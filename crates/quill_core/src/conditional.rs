//! Conditional node: renders one of two values depending on a test value.

use crate::error::RenderResult;
use crate::layout::LayoutSlot;
use crate::node::Node;
use crate::value::Value;
use crate::writer::Writer;

/// Picks `when_true` or `when_false` at render time.
///
/// The test is evaluated with [`Value::condition_result`]: null is false,
/// nodes report their own result (by default, whether they have content),
/// scalars convert through [`Scalar::to_bool`](crate::value::Scalar::to_bool)
/// and count as false when they have no boolean meaning.
#[derive(Debug, Default)]
pub struct Conditional {
    slot: LayoutSlot,
    test: Value,
    when_true: Value,
    when_false: Value,
}

impl Conditional {
    pub fn new(test: impl Into<Value>, when_true: impl Into<Value>, when_false: impl Into<Value>) -> Self {
        Self {
            slot: LayoutSlot::new(),
            test: test.into(),
            when_true: when_true.into(),
            when_false: when_false.into(),
        }
    }

    /// A conditional that renders nothing when the test fails.
    pub fn when(test: impl Into<Value>, when_true: impl Into<Value>) -> Self {
        Self::new(test, when_true, Value::Null)
    }

    pub fn test(&self) -> &Value {
        &self.test
    }

    pub fn set_test(&mut self, test: impl Into<Value>) {
        self.test = test.into();
    }

    pub fn set_when_true(&mut self, value: impl Into<Value>) {
        self.when_true = value.into();
    }

    pub fn set_when_false(&mut self, value: impl Into<Value>) {
        self.when_false = value.into();
    }

    pub fn test_result(&self) -> bool {
        self.test.condition_result()
    }

    /// The branch that would be rendered now.
    pub fn winner(&self) -> &Value {
        if self.test_result() {
            &self.when_true
        } else {
            &self.when_false
        }
    }
}

impl Node for Conditional {
    fn layout_slot(&self) -> &LayoutSlot {
        &self.slot
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn has_render_content(&self) -> bool {
        self.winner().has_render_content()
    }

    fn render_content(&self, w: &mut Writer<'_>) -> RenderResult {
        w.write(self.winner())
    }
}
