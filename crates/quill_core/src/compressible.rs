//! Compressible node: a full and a short alternative, chosen by the writer's
//! compression flag.

use crate::error::RenderResult;
use crate::layout::LayoutSlot;
use crate::node::Node;
use crate::value::Value;
use crate::writer::Writer;

#[derive(Debug, Default)]
pub struct Compressible {
    slot: LayoutSlot,
    full: Value,
    compressed: Value,
}

impl Compressible {
    pub fn new(full: impl Into<Value>, compressed: impl Into<Value>) -> Self {
        Self {
            slot: LayoutSlot::new(),
            full: full.into(),
            compressed: compressed.into(),
        }
    }

    pub fn full(&self) -> &Value {
        &self.full
    }

    pub fn compressed(&self) -> &Value {
        &self.compressed
    }

    /// The alternative written under the given compression flag.
    pub fn choose(&self, compress: bool) -> &Value {
        if compress {
            &self.compressed
        } else {
            &self.full
        }
    }
}

impl Node for Compressible {
    fn layout_slot(&self) -> &LayoutSlot {
        &self.slot
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    // The writer's flag is unknown here, so either alternative counts.
    fn has_render_content(&self) -> bool {
        self.full.has_render_content() || self.compressed.has_render_content()
    }

    fn render_content(&self, w: &mut Writer<'_>) -> RenderResult {
        w.write(self.choose(w.compress()))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "Tests can panic")]

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::WriterConfig;
    use crate::emitter::StringEmitter;
    use crate::format::PlainFormat;

    fn rendered(node: &dyn Node, config: &WriterConfig) -> String {
        let mut buffer = StringEmitter::new();
        Writer::new(&mut buffer, config, &PlainFormat).write_node(node).unwrap();
        buffer.output()
    }

    #[test]
    fn follows_compress_flag() {
        let c = Compressible::new("longName", "a");
        assert_eq!(rendered(&c, &WriterConfig::default()), "longName");
        assert_eq!(rendered(&c, &WriterConfig::compressed()), "a");
    }

    #[test]
    fn content_if_either_alternative_has_content() {
        assert!(Compressible::new("", "a").has_render_content());
        assert!(Compressible::new("full", Value::Null).has_render_content());
        assert!(!Compressible::new("", Value::Null).has_render_content());
    }
}
