mod compare;
mod float;
mod kind;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

// re-exports
pub use compare::{canonical_cmp, canonical_cmp_slice};
pub use float::Float64;
pub use kind::ValueKind;

///
/// Value
///
/// One sort-key column value carried by a continuation boundary.
///
/// Null  → the column's value is SQL NULL.
///
/// Serialized externally tagged so numeric variants survive a token round trip.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float64(Float64),
    Text(String),
}

impl Value {
    /// Declared column kind matching this value, `None` for `Null`.
    #[must_use]
    pub const fn kind(&self) -> Option<ValueKind> {
        match self {
            Self::Null => None,
            Self::Bool(_) => Some(ValueKind::Bool),
            Self::Int(_) => Some(ValueKind::Int),
            Self::Uint(_) => Some(ValueKind::Uint),
            Self::Float64(_) => Some(ValueKind::Float),
            Self::Text(_) => Some(ValueKind::Text),
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Float constructor that maps non-finite input to `None`.
    #[must_use]
    pub fn float(value: f64) -> Option<Self> {
        Float64::try_new(value).map(Self::Float64)
    }

    /// Stable human-readable variant label for diagnostics.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Bool(_) => "Bool",
            Self::Int(_) => "Int",
            Self::Uint(_) => "Uint",
            Self::Float64(_) => "Float64",
            Self::Text(_) => "Text",
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Uint(u64::from(value))
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Self::Uint(value)
    }
}

impl From<Float64> for Value {
    fn from(value: Float64) -> Self {
        Self::Float64(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
