use crate::{
    db::direction::Direction,
    traits::SortKey,
    value::{Value, canonical_cmp},
};
use std::cmp::Ordering;

///
/// OrderSpec
///
/// ORDER BY terms of a seek plan, in precedence order. Directions here are
/// physical: already flipped when the scan walks backward.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct OrderSpec {
    pub fields: Vec<(String, Direction)>,
}

impl OrderSpec {
    #[must_use]
    pub const fn new(fields: Vec<(String, Direction)>) -> Self {
        Self { fields }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Compare two rows under this ordering using the canonical value order.
    #[must_use]
    pub fn compare<R: SortKey>(&self, left: &R, right: &R) -> Ordering {
        for (field, direction) in &self.fields {
            let a = left.field_value(field).unwrap_or(Value::Null);
            let b = right.field_value(field).unwrap_or(Value::Null);

            let ordering = direction.apply(canonical_cmp(&a, &b));
            if ordering != Ordering::Equal {
                return ordering;
            }
        }

        Ordering::Equal
    }
}
