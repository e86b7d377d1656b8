//! XML Schema lexical forms for scalars.

use chrono::{NaiveDateTime, Timelike};
use quill_core::format::{format_float_with, trimmed_fraction};
use quill_core::FormatStrategy;

/// Date-time pattern for `xs:dateTime`, without the fractional seconds.
pub const XML_DATETIME_PATTERN: &str = "%Y-%m-%dT%H:%M:%S";

/// Formats scalars in their canonical XML Schema spelling: `true`/`false`,
/// `INF`/`-INF`/`NaN`, `xs:dateTime` with up to seven fractional digits and
/// `xs:duration`.
#[derive(Clone, Copy, Debug, Default)]
pub struct XmlFormat;

impl FormatStrategy for XmlFormat {
    fn format_float(&self, f: f64) -> String {
        format_float_with(f, "NaN", "INF")
    }

    fn format_datetime(&self, dt: &NaiveDateTime) -> String {
        let fraction = trimmed_fraction(dt.nanosecond() % 1_000_000_000, 7);
        format!("{}{fraction}", dt.format(XML_DATETIME_PATTERN))
    }
}
