use crate::value::Value;
use std::cmp::Ordering;

/// Total canonical comparator used by in-memory predicate evaluation and
/// row ordering.
///
/// Ordering rules:
/// 1. Canonical variant rank (null, bool, numeric, text)
/// 2. Variant-specific comparison inside a rank
///
/// Numeric variants share a rank and compare by magnitude, so an `Int` and a
/// `Uint` holding the same number are equal here.
#[must_use]
pub fn canonical_cmp(left: &Value, right: &Value) -> Ordering {
    let rank = canonical_rank(left).cmp(&canonical_rank(right));
    if rank != Ordering::Equal {
        return rank;
    }

    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Text(a), Value::Text(b)) => a.cmp(b),
        (Value::Int(a), Value::Int(b)) => a.cmp(b),
        (Value::Uint(a), Value::Uint(b)) => a.cmp(b),
        (Value::Int(a), Value::Uint(b)) => i128::from(*a).cmp(&i128::from(*b)),
        (Value::Uint(a), Value::Int(b)) => i128::from(*a).cmp(&i128::from(*b)),
        (Value::Float64(a), Value::Float64(b)) => a.cmp(b),
        (a, b) => match (numeric_f64(a), numeric_f64(b)) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            _ => Ordering::Equal,
        },
    }
}

/// Lexicographic comparison of two value tuples.
#[must_use]
pub fn canonical_cmp_slice(left: &[Value], right: &[Value]) -> Ordering {
    for (a, b) in left.iter().zip(right) {
        let ordering = canonical_cmp(a, b);
        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    left.len().cmp(&right.len())
}

const fn canonical_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Int(_) | Value::Uint(_) | Value::Float64(_) => 2,
        Value::Text(_) => 3,
    }
}

#[allow(clippy::cast_precision_loss)]
const fn numeric_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Int(v) => Some(*v as f64),
        Value::Uint(v) => Some(*v as f64),
        Value::Float64(v) => Some(v.get()),
        _ => None,
    }
}
