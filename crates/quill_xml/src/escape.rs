//! Escaping for names, text, attribute values and CDATA sections.

use std::fmt::Write as _;

/// Make `name` a valid XML name.
///
/// Characters not allowed at their position are written as `_xHHHH_`, the
/// hex code point padded to four digits.
pub fn encode_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for (i, c) in name.chars().enumerate() {
        let allowed = if i == 0 {
            is_name_start(c)
        } else {
            is_name_char(c)
        };
        if allowed {
            out.push(c);
        } else {
            let _ = write!(out, "_x{:04X}_", u32::from(c));
        }
    }
    out
}

fn is_name_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == ':'
}

fn is_name_char(c: char) -> bool {
    is_name_start(c) || c.is_numeric() || c == '-' || c == '.' || c == '\u{B7}'
}

/// Escape character data: `&`, `<` and `>`.
pub fn encode_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a double-quoted attribute value. Line breaks become character
/// references so they survive attribute-value normalization.
pub fn encode_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&apos;"),
            '"' => out.push_str("&quot;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            _ => out.push(c),
        }
    }
    out
}

/// Split embedded `]]>` terminators across two CDATA sections.
pub fn escape_cdata(data: &str) -> String {
    data.replace("]]>", "]]>]]&gt;<![CDATA[")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn names() {
        assert_eq!(encode_name("item"), "item");
        assert_eq!(encode_name("xs:element"), "xs:element");
        assert_eq!(encode_name("my-name.1"), "my-name.1");
        assert_eq!(encode_name("1st"), "_x0031_st");
        assert_eq!(encode_name("a b"), "a_x0020_b");
    }

    #[test]
    fn text() {
        assert_eq!(encode_text("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
        assert_eq!(encode_text("it's \"quoted\""), "it's \"quoted\"");
    }

    #[test]
    fn attributes() {
        assert_eq!(encode_attribute("say \"hi\" & 'bye'"), "say &quot;hi&quot; &amp; &apos;bye&apos;");
        assert_eq!(encode_attribute("one\r\ntwo"), "one&#13;&#10;two");
    }

    #[test]
    fn cdata_terminators() {
        assert_eq!(escape_cdata("a]]>b"), "a]]>]]&gt;<![CDATA[b");
        assert_eq!(escape_cdata("plain"), "plain");
    }
}
