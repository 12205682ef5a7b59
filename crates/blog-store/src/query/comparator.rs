//! Type-aware comparison of field values against query literals.
//!
//! A predicate is evaluated in the first domain that both operands fit:
//!
//! 1. **Numeric** - both coerce to a finite number.
//! 2. **Temporal** - both parse as a calendar date or date-time; the
//!    resolved instants (epoch milliseconds) are compared.
//! 3. **Textual** - equality is case-insensitive; ordering operators compare
//!    the original strings by code point.
//!
//! The textual domain is asymmetric: `autor:Admin` matches
//! `admin`, while `autor:>Admin` compares with case intact.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use super::ast::Operator;
use crate::record::Value;

/// The lens under which a predicate is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Numeric,
    Temporal,
    Textual,
}

/// Date-time layouts carrying an explicit UTC offset, tried after RFC 3339
/// and RFC 2822.
const OFFSET_FORMATS: [&str; 7] = [
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M%:z",
    "%Y-%m-%d %H:%M%z",
];

/// Date-time layouts without an offset. These are read as UTC.
const NAIVE_FORMATS: [&str; 7] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%MZ",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.fZ",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%MZ",
];

/// Operands resolved into their comparison domain.
enum Operands {
    Numeric(f64, f64),
    Temporal(i64, i64),
    Textual(String),
}

impl Operands {
    fn resolve(value: &Value<'_>, literal: &str) -> Self {
        let text = value.to_string();

        let number = match value {
            Value::Number(n) if n.is_finite() => Some(*n),
            _ => parse_number(&text),
        };
        if let (Some(a), Some(b)) = (number, parse_number(literal)) {
            return Operands::Numeric(a, b);
        }

        if let (Some(a), Some(b)) = (parse_instant(&text), parse_instant(literal)) {
            return Operands::Temporal(a, b);
        }

        Operands::Textual(text)
    }

    fn domain(&self) -> Domain {
        match self {
            Operands::Numeric(..) => Domain::Numeric,
            Operands::Temporal(..) => Domain::Temporal,
            Operands::Textual(_) => Domain::Textual,
        }
    }
}

/// Evaluates `value <operator> literal`.
///
/// An absent value never matches, whatever the operator or literal.
///
/// # Example
///
/// ```
/// use blog_store_rs::query::{compare, Operator};
/// use blog_store_rs::Value;
///
/// assert!(compare(&Value::Number(20.0), "15", Operator::Gt));
/// assert!(compare(&Value::String("admin"), "Admin", Operator::Eq));
/// assert!(compare(&Value::String("2023-02-01"), "2023-01-01", Operator::Gt));
/// assert!(!compare(&Value::Absent, "x", Operator::Eq));
/// ```
pub fn compare(value: &Value<'_>, literal: &str, operator: Operator) -> bool {
    if value.is_absent() {
        return false;
    }

    match Operands::resolve(value, literal) {
        Operands::Numeric(a, b) => holds(a.partial_cmp(&b), operator),
        Operands::Temporal(a, b) => holds(Some(a.cmp(&b)), operator),
        Operands::Textual(text) => match operator {
            Operator::Eq => text.to_lowercase() == literal.to_lowercase(),
            _ => holds(Some(text.as_str().cmp(literal)), operator),
        },
    }
}

/// Returns the domain a comparison between `value` and `literal` resolves to.
///
/// Absent values have no domain.
pub fn domain(value: &Value<'_>, literal: &str) -> Option<Domain> {
    if value.is_absent() {
        return None;
    }
    Some(Operands::resolve(value, literal).domain())
}

fn holds(ordering: Option<Ordering>, operator: Operator) -> bool {
    let Some(ordering) = ordering else {
        return false;
    };
    match operator {
        Operator::Eq => ordering == Ordering::Equal,
        Operator::Gt => ordering == Ordering::Greater,
        Operator::Gte => ordering != Ordering::Less,
        Operator::Lt => ordering == Ordering::Less,
        Operator::Lte => ordering != Ordering::Greater,
    }
}

/// Coerces a string to a finite number.
///
/// Surrounding whitespace is ignored. Decimal and exponent notation are
/// accepted, as are `0x`, `0o` and `0b` integers. Empty strings, `NaN` and
/// infinities are not numbers.
pub fn parse_number(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = s.strip_prefix(prefix) {
            if digits.starts_with('+') {
                return None;
            }
            return u64::from_str_radix(digits, radix).ok().map(|n| n as f64);
        }
    }

    // `f64::from_str` also takes "inf" and "NaN"; only plain numerals count here.
    if !s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
    {
        return None;
    }

    s.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parses a calendar date or date-time into epoch milliseconds.
///
/// Accepts RFC 3339, RFC 2822, ISO 8601 date-times with or without an
/// offset (no offset means UTC), and bare `YYYY-MM-DD` / `YYYY-MM` dates
/// (midnight UTC).
pub fn parse_instant(s: &str) -> Option<i64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.timestamp_millis());
    }
    if let Some(dt) = OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(s, fmt).ok())
    {
        return Some(dt.timestamp_millis());
    }
    if let Some(dt) = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    {
        return Some(dt.and_utc().timestamp_millis());
    }

    parse_calendar_date(s)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
}

/// Parses `YYYY-MM-DD`, `YYYY-MM`, or the same with `/` separators.
///
/// Month and day may omit their leading zero. The year has four digits, or
/// six with a sign for expanded years (`+010000-01-01`).
fn parse_calendar_date(s: &str) -> Option<NaiveDate> {
    let separator = if s.contains('/') { '/' } else { '-' };

    let (year, rest) = match s.strip_prefix(&['+', '-'][..]) {
        Some(unsigned) => {
            let (digits, rest) = unsigned.split_once(separator)?;
            if digits.len() != 6 {
                return None;
            }
            let year: i32 = parse_digits(digits)?;
            let year = if s.starts_with('-') { -year } else { year };
            (year, rest)
        }
        None => {
            let (digits, rest) = s.split_once(separator)?;
            if digits.len() != 4 {
                return None;
            }
            (parse_digits(digits)?, rest)
        }
    };

    let mut parts = rest.split(separator);
    let month = parse_short(parts.next()?)?;
    let day = match parts.next() {
        Some(day) => parse_short(day)?,
        None => 1,
    };
    if parts.next().is_some() {
        return None;
    }

    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_digits<T: std::str::FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// One or two digits.
fn parse_short(s: &str) -> Option<u32> {
    if s.len() > 2 {
        return None;
    }
    parse_digits(s)
}
