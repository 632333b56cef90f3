use std::{cmp::Ordering, fmt};

use serde::{Deserialize, Serialize};

/// A scalar literal that ends up inlined into generated SQL.
///
/// Deserializes untagged, so JSON `null`, booleans, integers, floats and
/// strings map onto the matching variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SqlValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl SqlValue {
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }

    /// SQL comparison between two values. `None` when either side is NULL or
    /// the kinds cannot be compared.
    pub fn compare(&self, other: &SqlValue) -> Option<Ordering> {
        match (self, other) {
            (SqlValue::Int(left), SqlValue::Int(right)) => Some(left.cmp(right)),
            (SqlValue::Float(left), SqlValue::Float(right)) => left.partial_cmp(right),
            (SqlValue::Int(left), SqlValue::Float(right)) => (*left as f64).partial_cmp(right),
            (SqlValue::Float(left), SqlValue::Int(right)) => left.partial_cmp(&(*right as f64)),
            (SqlValue::Text(left), SqlValue::Text(right)) => Some(left.cmp(right)),
            (SqlValue::Bool(left), SqlValue::Bool(right)) => Some(left.cmp(right)),
            _ => None,
        }
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Null => f.write_str("NULL"),
            SqlValue::Bool(value) => write!(f, "{value}"),
            SqlValue::Int(value) => write!(f, "{value}"),
            SqlValue::Float(value) => write!(f, "{value}"),
            SqlValue::Text(value) => f.write_str(value),
        }
    }
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        SqlValue::Bool(value)
    }
}

impl From<i32> for SqlValue {
    fn from(value: i32) -> Self {
        SqlValue::Int(i64::from(value))
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Int(value)
    }
}

impl From<u32> for SqlValue {
    fn from(value: u32) -> Self {
        SqlValue::Int(i64::from(value))
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        SqlValue::Float(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(SqlValue::Null, Into::into)
    }
}
