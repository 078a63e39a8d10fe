use crate::{
    db::seek::{CompareOp, ComparePredicate, Predicate},
    traits::SortKey,
    value::{Value, canonical_cmp},
};
use std::cmp::Ordering;

impl Predicate {
    /// Evaluate this predicate against one row.
    ///
    /// Comparisons use the canonical value order, the same order
    /// [`OrderSpec::compare`](crate::db::seek::OrderSpec::compare) sorts by.
    /// `Null` is therefore an ordinary value that sorts first, not SQL's
    /// unknown; a missing column reads as `Null`.
    #[must_use]
    pub fn matches<R: SortKey + ?Sized>(&self, row: &R) -> bool {
        match self {
            Self::And(children) => children.iter().all(|child| child.matches(row)),
            Self::Or(children) => children.iter().any(|child| child.matches(row)),
            Self::Compare(cmp) => cmp.matches(row),
        }
    }
}

impl ComparePredicate {
    #[must_use]
    pub fn matches<R: SortKey + ?Sized>(&self, row: &R) -> bool {
        let actual = row.field_value(&self.field).unwrap_or(Value::Null);

        op_holds(self.op, canonical_cmp(&actual, &self.value))
    }
}

const fn op_holds(op: CompareOp, ordering: Ordering) -> bool {
    match op {
        CompareOp::Eq => ordering.is_eq(),
        CompareOp::Lt => ordering.is_lt(),
        CompareOp::Lte => ordering.is_le(),
        CompareOp::Gt => ordering.is_gt(),
        CompareOp::Gte => ordering.is_ge(),
    }
}
