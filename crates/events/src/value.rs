//! Typed property values
//!
//! `Value` is the capture type for event properties. Each variant renders to
//! a stable string form; that rendered form is the only thing sinks ever see.
//!
//! Strings render wrapped in double quotes (structured capture style), so a
//! consumer that wants the raw text strips one surrounding quote pair.
//! Timestamps render as RFC 3339 with a `Z` suffix and no trailing zero
//! sub-second digits.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};

/// A typed property value attached to an event
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Str(String),
    Timestamp(DateTime<Utc>),
}

impl Value {
    /// Render the value to its stable string form
    ///
    /// This is what `Properties::lookup` hands to sinks.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Uint(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Str(v) => write!(f, "\"{v}\""),
            Value::Timestamp(v) => {
                f.write_str(&v.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Uint(u64::from(v))
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::Uint(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::Timestamp(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_scalars() {
        assert_eq!(Value::from(true).render(), "true");
        assert_eq!(Value::from(42i64).render(), "42");
        assert_eq!(Value::from(7u64).render(), "7");
        assert_eq!(Value::from(19.99).render(), "19.99");
    }

    #[test]
    fn test_render_string_is_quoted() {
        assert_eq!(Value::from("alice").render(), "\"alice\"");
        assert_eq!(Value::from(String::from("")).render(), "\"\"");
    }

    #[test]
    fn test_render_timestamp() {
        let ts: DateTime<Utc> = "2024-01-01T00:00:00Z".parse().unwrap();
        assert_eq!(Value::from(ts).render(), "2024-01-01T00:00:00Z");

        let ts: DateTime<Utc> = "2024-01-01T12:30:45.500Z".parse().unwrap();
        assert_eq!(Value::from(ts).render(), "2024-01-01T12:30:45.500Z");
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(Value::from(3i32), Value::Int(3));
        assert_eq!(Value::from(3u32), Value::Uint(3));
        assert!(matches!(Value::from("x"), Value::Str(_)));
    }
}
