//! Field values and the record access trait used by the query engine.
//!
//! Records expose their fields by name through [`Record::field`], which
//! returns a borrowed [`Value`]. The value type is closed so that every
//! comparison in the query engine is an exhaustive match.

use std::fmt;

/// A field value borrowed from a record.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// The record has no such field.
    Absent,
    /// The field exists but holds no value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Numeric value.
    Number(f64),
    /// String value.
    String(&'a str),
    /// Ordered list of values (e.g. tags).
    Sequence(Vec<Value<'a>>),
}

impl<'a> Value<'a> {
    /// Returns `true` if the record has no such field.
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// Returns `true` if the value counts as "present" for free-text search.
    ///
    /// Absent and null values, `false`, zero, `NaN` and the empty string are
    /// never searched.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Absent | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::String(s) => !s.is_empty(),
            Value::Sequence(_) => true,
        }
    }

    /// Returns the number, if this is a `Number` value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string, if this is a `String` value.
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Borrows a JSON value as a field value.
    ///
    /// Nested objects are not addressable and surface as [`Value::Absent`].
    pub fn from_json(json: &'a serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => n.as_f64().map_or(Value::Null, Value::Number),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.iter().map(Value::from_json).collect())
            }
            serde_json::Value::Object(_) => Value::Absent,
        }
    }

    /// Builds a sequence value from a slice of strings.
    pub fn strings(items: &'a [String]) -> Self {
        Value::Sequence(items.iter().map(|s| Value::String(s)).collect())
    }
}

/// The string form of a value, as used by textual and free-text matching.
///
/// Numbers print in their shortest decimal form (`10`, `1.5`), sequences
/// join their elements with `,`, and null elements inside a sequence print
/// as nothing.
impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Absent => Ok(()),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write_number(f, *n),
            Value::String(s) => f.write_str(s),
            Value::Sequence(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    if !matches!(item, Value::Null | Value::Absent) {
                        write!(f, "{item}")?;
                    }
                }
                Ok(())
            }
        }
    }
}

/// Writes a number in its shortest round-trip form. Magnitudes at or above
/// 1e21 or below 1e-6 use exponent notation with a signed exponent (`1e+21`).
fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n == 0.0 {
        return f.write_str("0");
    }
    if n.is_infinite() {
        return f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" });
    }
    let magnitude = n.abs();
    if n.is_nan() || (1e-6..1e21).contains(&magnitude) {
        return write!(f, "{n}");
    }

    let exp = format!("{n:e}");
    match exp.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            write!(f, "{mantissa}e+{exponent}")
        }
        _ => f.write_str(&exp),
    }
}

impl From<bool> for Value<'_> {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value<'_> {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<u64> for Value<'_> {
    fn from(n: u64) -> Self {
        Value::Number(n as f64)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::String(s)
    }
}

impl<'a, T> From<Option<T>> for Value<'a>
where
    T: Into<Value<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// Field access by name.
///
/// Implementors return [`Value::Absent`] for fields they do not have.
///
/// # Example
///
/// ```
/// use blog_store_rs::{Record, Value};
///
/// struct Note {
///     title: String,
///     stars: u64,
/// }
///
/// impl Record for Note {
///     fn field(&self, name: &str) -> Value<'_> {
///         match name {
///             "title" => Value::String(&self.title),
///             "stars" => Value::from(self.stars),
///             _ => Value::Absent,
///         }
///     }
/// }
///
/// let note = Note { title: "Hi".into(), stars: 3 };
/// assert_eq!(note.field("stars"), Value::Number(3.0));
/// assert!(note.field("missing").is_absent());
/// ```
pub trait Record {
    /// Returns the value of the named field.
    fn field(&self, name: &str) -> Value<'_>;
}

impl<R: Record + ?Sized> Record for &R {
    fn field(&self, name: &str) -> Value<'_> {
        (**self).field(name)
    }
}

impl Record for serde_json::Map<String, serde_json::Value> {
    fn field(&self, name: &str) -> Value<'_> {
        self.get(name).map_or(Value::Absent, Value::from_json)
    }
}

/// Only JSON objects have fields; any other JSON value has none.
impl Record for serde_json::Value {
    fn field(&self, name: &str) -> Value<'_> {
        match self {
            serde_json::Value::Object(map) => map.field(name),
            _ => Value::Absent,
        }
    }
}
