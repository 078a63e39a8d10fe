use crate::{
    db::scheme::SortScheme,
    value::{Value, ValueKind},
};

///
/// SortKey
///
/// Capability a row type provides to the pagination engine: a stable type tag
/// used in scheme identity, and access to its sort-key column values.
///
/// Column names handed to `field_value` and `column_kind` are normalized
/// (trimmed, lower-cased), exactly as they appear in the registered scheme.
///

pub trait SortKey {
    /// Stable tag naming the row type. Part of every scheme id, so changing
    /// it invalidates outstanding tokens.
    const TYPE_TAG: &'static str;

    /// Current value of one sort column, `None` when the row has no such column.
    fn field_value(&self, column: &str) -> Option<Value>;

    /// Declared kind of a column, used to vet token boundary values.
    fn column_kind(column: &str) -> Option<ValueKind> {
        let _ = column;
        None
    }

    /// Sort-key tuple of this row for a scheme, in scheme column order.
    /// Missing columns read as `Value::Null`.
    fn sort_values(&self, scheme: &SortScheme) -> Vec<Value> {
        scheme
            .column_names()
            .map(|column| self.field_value(column).unwrap_or(Value::Null))
            .collect()
    }
}
