#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use chrono::NaiveDate;
use pretty_assertions::assert_eq;

use super::*;

fn plain(scalar: &Scalar) -> String {
    PlainFormat.format_scalar(scalar).into_owned()
}

#[test]
fn plain_scalars() {
    assert_eq!(plain(&Scalar::Str("abc".into())), "abc");
    assert_eq!(plain(&Scalar::Int(-42)), "-42");
    assert_eq!(plain(&Scalar::Float(1.5)), "1.5");
    assert_eq!(plain(&Scalar::Float(100.0)), "100");
    assert_eq!(plain(&Scalar::Bool(true)), "true");
    assert_eq!(plain(&Scalar::Bool(false)), "false");
}

#[test]
fn plain_datetime_is_locale_independent() {
    let dt = NaiveDate::from_ymd_opt(2008, 3, 9)
        .unwrap()
        .and_hms_opt(14, 5, 7)
        .unwrap();
    assert_eq!(plain(&Scalar::DateTime(dt)), "2008-03-09 14:05:07");
}

#[test]
fn plain_uuid_is_hyphenated() {
    let u = Uuid::from_u128(0x0123_4567_89ab_cdef_0123_4567_89ab_cdef);
    assert_eq!(plain(&Scalar::Uuid(u)), "01234567-89ab-cdef-0123-456789abcdef");
}

#[test]
fn non_finite_floats() {
    assert_eq!(format_float_with(f64::NAN, "NaN", "INF"), "NaN");
    assert_eq!(format_float_with(f64::INFINITY, "NaN", "INF"), "INF");
    assert_eq!(format_float_with(f64::NEG_INFINITY, "NaN", "INF"), "-INF");
}

#[test]
fn fraction_trimming() {
    assert_eq!(trimmed_fraction(0, 7), "");
    assert_eq!(trimmed_fraction(500_000_000, 7), ".5");
    assert_eq!(trimmed_fraction(123_456_789, 7), ".1234567");
    assert_eq!(trimmed_fraction(50, 7), "");
}

#[test]
fn durations() {
    assert_eq!(iso8601_duration(&TimeDelta::zero()), "PT0S");
    assert_eq!(iso8601_duration(&TimeDelta::days(1)), "P1D");
    assert_eq!(iso8601_duration(&TimeDelta::minutes(90)), "PT1H30M");
    assert_eq!(
        iso8601_duration(&(TimeDelta::seconds(90) + TimeDelta::milliseconds(500))),
        "PT1M30.5S"
    );
    assert_eq!(
        iso8601_duration(&(TimeDelta::days(1) + TimeDelta::hours(2) + TimeDelta::seconds(4))),
        "P1DT2H4S"
    );
    assert_eq!(iso8601_duration(&TimeDelta::minutes(-30)), "-PT30M");
}

#[derive(Debug)]
struct Shouting;

impl FormatStrategy for Shouting {
    fn format_bool(&self, b: bool) -> String {
        if b { "YES" } else { "NO" }.to_owned()
    }
}

#[test]
fn strategies_override_single_kinds() {
    assert_eq!(Shouting.format_scalar(&Scalar::Bool(true)), "YES");
    assert_eq!(Shouting.format_scalar(&Scalar::Int(7)), "7");
}
