//! Normalization of loosely-typed adapter input.
//!
//! Adapters hand the store ids that came from URL segments, JSON numbers or
//! JSON strings. All of them funnel through [`parse_required_id`] so that
//! absent, null, empty, non-numeric and NaN values are rejected the same way
//! before any lookup happens.

use serde_json::Value;

use crate::db::{DbError, DbResult};

/// An id-shaped value as received from an adapter.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum IdInput {
    /// Absent, null or undefined.
    #[default]
    Missing,
    Int(i64),
    Float(f64),
    /// A path segment or JSON string, parsed on demand.
    Text(String),
}

impl IdInput {
    /// The integer this input denotes, if it denotes exactly one.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            IdInput::Missing => None,
            IdInput::Int(v) => Some(*v),
            IdInput::Float(f) => float_to_integer(*f),
            IdInput::Text(s) => {
                let s = s.trim();
                if s.is_empty() {
                    return None;
                }
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().and_then(float_to_integer))
            }
        }
    }
}

fn float_to_integer(f: f64) -> Option<i64> {
    // The upper bound is exclusive: i64::MAX as f64 rounds up to 2^63.
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

impl From<i64> for IdInput {
    fn from(v: i64) -> Self {
        IdInput::Int(v)
    }
}

impl From<f64> for IdInput {
    fn from(f: f64) -> Self {
        IdInput::Float(f)
    }
}

impl From<&str> for IdInput {
    fn from(s: &str) -> Self {
        IdInput::Text(s.to_string())
    }
}

impl From<String> for IdInput {
    fn from(s: String) -> Self {
        IdInput::Text(s)
    }
}

impl<T: Into<IdInput>> From<Option<T>> for IdInput {
    fn from(v: Option<T>) -> Self {
        v.map_or(IdInput::Missing, Into::into)
    }
}

impl From<&Value> for IdInput {
    fn from(v: &Value) -> Self {
        match v {
            Value::Null => IdInput::Missing,
            Value::Number(n) => match n.as_i64() {
                Some(i) => IdInput::Int(i),
                None => n.as_f64().map_or(IdInput::Missing, IdInput::Float),
            },
            Value::String(s) => IdInput::Text(s.clone()),
            // Booleans, arrays and objects never name an id.
            other => IdInput::Text(other.to_string()),
        }
    }
}

/// Which collection an id refers to. Selects the rejection message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    List,
    Item,
}

impl IdKind {
    fn invalid_message(self) -> &'static str {
        match self {
            IdKind::List => "Invalid todo list ID",
            IdKind::Item => "Invalid todo item ID",
        }
    }
}

/// Parse a required id, failing with `InvalidArgument` when it is unusable.
pub fn parse_required_id(input: &IdInput, kind: IdKind) -> DbResult<i64> {
    input
        .as_integer()
        .ok_or_else(|| DbError::invalid_argument(kind.invalid_message()))
}

/// Treat absent and empty text alike. Returns the text when it is usable.
pub fn parse_required_text(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
