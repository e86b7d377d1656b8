//! String literals.

use quill_core::{LayoutSlot, Node, RenderResult, Value, Writer};

/// A quoted string literal.
///
/// The text is rendered first (it may be any value, including nodes) with
/// the writer's format strategy, then escaped for the chosen quote style.
#[derive(Debug, Default)]
pub struct Quote {
    slot: LayoutSlot,
    text: Value,
    double: bool,
}

impl Quote {
    /// A single-quoted literal.
    pub fn new(text: impl Into<Value>) -> Self {
        Self {
            slot: LayoutSlot::new(),
            text: text.into(),
            double: false,
        }
    }

    /// A double-quoted literal.
    pub fn double(text: impl Into<Value>) -> Self {
        Self {
            double: true,
            ..Self::new(text)
        }
    }

    pub fn text(&self) -> &Value {
        &self.text
    }

    pub fn is_double(&self) -> bool {
        self.double
    }

    fn quote_char(&self) -> char {
        if self.double {
            '"'
        } else {
            '\''
        }
    }
}

/// `'text'`
pub fn quote(text: impl Into<Value>) -> Quote {
    Quote::new(text)
}

/// `"text"`
pub fn quote_double(text: impl Into<Value>) -> Quote {
    Quote::double(text)
}

/// Escape `text` for a literal delimited by `quote`.
pub fn escape(text: &str, quote: char) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\r' if chars.peek() == Some(&'\n') => {
                chars.next();
                out.push_str("\\r\\n");
            }
            '\r' => out.push_str("\\r"),
            '\n' => out.push_str("\\n"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out
}

impl Node for Quote {
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
        let quote = self.quote_char();
        let text = w.format(&self.text)?;

        let mut literal = String::with_capacity(text.len() + 2);
        literal.push(quote);
        literal.push_str(&escape(&text, quote));
        literal.push(quote);
        w.write_str(&literal)
    }
}
