//! Format Strategies
//!
//! Scalar-to-text conversion, pluggable per output dialect. A strategy only
//! sees scalars; nodes are rendered by the writer through a child writer that
//! shares the same strategy, so nested output stays consistent.
//!
//! Every method has a locale-independent default. Dialects override the
//! kinds whose literal spelling differs (JS date separators, XML canonical
//! numbers, ...).

use std::borrow::Cow;
use std::fmt::{self, Write as _};

use chrono::{NaiveDateTime, TimeDelta};
use uuid::Uuid;

use crate::value::Scalar;

/// Pattern used by [`PlainFormat`] for date-times.
pub const PLAIN_DATETIME_PATTERN: &str = "%Y-%m-%d %H:%M:%S";

/// Converts scalars to dialect-correct text.
pub trait FormatStrategy: fmt::Debug {
    fn format_str<'a>(&self, s: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(s)
    }

    fn format_int(&self, i: i64) -> String {
        i.to_string()
    }

    fn format_float(&self, f: f64) -> String {
        format_float_with(f, "NaN", "Infinity")
    }

    fn format_bool(&self, b: bool) -> String {
        b.to_string()
    }

    fn format_datetime(&self, dt: &NaiveDateTime) -> String {
        dt.format(PLAIN_DATETIME_PATTERN).to_string()
    }

    fn format_duration(&self, d: &TimeDelta) -> String {
        iso8601_duration(d)
    }

    fn format_uuid(&self, u: &Uuid) -> String {
        u.hyphenated().to_string()
    }

    /// Dispatch on the scalar kind.
    fn format_scalar<'a>(&self, scalar: &'a Scalar) -> Cow<'a, str> {
        match scalar {
            Scalar::Str(s) => self.format_str(s),
            Scalar::Int(i) => Cow::Owned(self.format_int(*i)),
            Scalar::Float(f) => Cow::Owned(self.format_float(*f)),
            Scalar::Bool(b) => Cow::Owned(self.format_bool(*b)),
            Scalar::DateTime(dt) => Cow::Owned(self.format_datetime(dt)),
            Scalar::Duration(d) => Cow::Owned(self.format_duration(d)),
            Scalar::Uuid(u) => Cow::Owned(self.format_uuid(u)),
        }
    }
}

/// Dialect-neutral strategy used when no other is supplied.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainFormat;

impl FormatStrategy for PlainFormat {}

/// Format a float, spelling non-finite values with the given words.
///
/// Finite values use the shortest text that round-trips.
pub fn format_float_with(f: f64, nan: &str, infinity: &str) -> String {
    if f.is_nan() {
        nan.to_owned()
    } else if f.is_infinite() {
        if f.is_sign_negative() {
            format!("-{infinity}")
        } else {
            infinity.to_owned()
        }
    } else {
        f.to_string()
    }
}

/// `.`-prefixed fractional seconds with trailing zeros removed, at most
/// `max_digits` long. Empty when `nanos` is zero at that precision.
pub fn trimmed_fraction(nanos: u32, max_digits: usize) -> String {
    let digits = format!("{nanos:09}");
    let kept = digits[..max_digits.min(9)].trim_end_matches('0');
    if kept.is_empty() {
        String::new()
    } else {
        format!(".{kept}")
    }
}

/// Render a duration as an ISO 8601 / XML Schema `duration`, e.g.
/// `P1DT2H3M4.5S`, `-PT30M`, `PT0S`.
pub fn iso8601_duration(d: &TimeDelta) -> String {
    let negative = *d < TimeDelta::zero();
    let abs = d.abs();
    let total = abs.num_seconds();
    let nanos = u32::try_from(abs.subsec_nanos()).unwrap_or(0);

    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;
    let fraction = trimmed_fraction(nanos, 7);

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push('P');
    if days > 0 {
        let _ = write!(out, "{days}D");
    }
    let has_time = hours > 0 || minutes > 0 || seconds > 0 || !fraction.is_empty();
    if has_time || days == 0 {
        out.push('T');
        if hours > 0 {
            let _ = write!(out, "{hours}H");
        }
        if minutes > 0 {
            let _ = write!(out, "{minutes}M");
        }
        if seconds > 0 || !fraction.is_empty() || (hours == 0 && minutes == 0) {
            let _ = write!(out, "{seconds}{fraction}S");
        }
    }
    out
}

#[cfg(test)]
mod tests;
