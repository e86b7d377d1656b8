//! JavaScript scalar formatting.

use chrono::NaiveDateTime;
use quill_core::FormatStrategy;

/// Date-time pattern accepted by every `Date` parser: slashes, not dashes.
pub const JS_DATETIME_PATTERN: &str = "%Y/%m/%d %H:%M:%S";

/// Formats scalars as JavaScript literals.
///
/// Booleans are lowercase and non-finite floats use the global names
/// `NaN` and `Infinity`, both inherited from the plain strategy. Date-times
/// use [`JS_DATETIME_PATTERN`].
#[derive(Clone, Copy, Debug, Default)]
pub struct JsFormat;

impl FormatStrategy for JsFormat {
    fn format_datetime(&self, dt: &NaiveDateTime) -> String {
        dt.format(JS_DATETIME_PATTERN).to_string()
    }
}
