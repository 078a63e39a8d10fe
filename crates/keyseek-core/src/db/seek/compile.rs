use crate::{
    db::{
        direction::Direction,
        seek::{CompareOp, OrderSpec, Predicate},
    },
    value::Value,
};

///
/// SeekPlan
///
/// Everything a query backend needs to fetch one page: the seek filter (absent
/// on a first page), ORDER BY terms in physical direction, and the row limit
/// including the probe row.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SeekPlan {
    pub predicate: Option<Predicate>,
    pub order: OrderSpec,
    pub limit: Option<u32>,
}

impl SeekPlan {
    #[must_use]
    pub const fn new(predicate: Option<Predicate>, order: OrderSpec, limit: Option<u32>) -> Self {
        Self {
            predicate,
            order,
            limit,
        }
    }
}

/// Comparison operator that moves strictly (or inclusively) away from a
/// boundary along one column.
///
/// Ascending walks up and descending walks down; a reverse scan inverts both.
#[must_use]
pub const fn seek_operator(direction: Direction, reverse: bool, inclusive: bool) -> CompareOp {
    match (direction.flip_if(reverse), inclusive) {
        (Direction::Asc, false) => CompareOp::Gt,
        (Direction::Asc, true) => CompareOp::Gte,
        (Direction::Desc, false) => CompareOp::Lt,
        (Direction::Desc, true) => CompareOp::Lte,
    }
}

/// Build the lexicographic tie-break filter for a boundary tuple.
///
/// ```text
/// (c0 > v0)
/// OR (c0 = v0 AND c1 > v1)
/// OR (c0 = v0 AND c1 = v1 AND c2 > v2) ...
/// ```
///
/// Only the final column of the final disjunct takes the inclusive operator
/// when `include` is set. Returns `None` for an empty boundary.
#[must_use]
pub fn compile_seek_predicate<S: AsRef<str>>(
    columns: &[S],
    directions: &[Direction],
    values: &[Value],
    reverse: bool,
    include: bool,
) -> Option<Predicate> {
    let arity = columns.len().min(directions.len()).min(values.len());
    if arity == 0 {
        return None;
    }

    let mut disjuncts = Vec::with_capacity(arity);
    let terms = columns.iter().zip(directions).zip(values).take(arity);

    for (i, ((column, direction), value)) in terms.enumerate() {
        let mut conjuncts: Vec<Predicate> = columns
            .iter()
            .zip(values)
            .take(i)
            .map(|(prefix, bound)| {
                Predicate::compare(prefix.as_ref(), CompareOp::Eq, bound.clone())
            })
            .collect();

        let inclusive = include && i == arity - 1;
        conjuncts.push(Predicate::compare(
            column.as_ref(),
            seek_operator(*direction, reverse, inclusive),
            value.clone(),
        ));

        disjuncts.push(collapse(conjuncts, Predicate::And));
    }

    Some(collapse(disjuncts, Predicate::Or))
}

/// ORDER BY terms walking away from the boundary.
#[must_use]
pub fn seek_order<S: AsRef<str>>(
    columns: &[S],
    directions: &[Direction],
    reverse: bool,
) -> OrderSpec {
    OrderSpec::new(
        columns
            .iter()
            .zip(directions)
            .map(|(column, direction)| (column.as_ref().to_string(), direction.flip_if(reverse)))
            .collect(),
    )
}

// A single child stands alone instead of being wrapped in a one-element group.
fn collapse(mut preds: Vec<Predicate>, wrap: fn(Vec<Predicate>) -> Predicate) -> Predicate {
    if preds.len() == 1
        && let Some(only) = preds.pop()
    {
        return only;
    }

    wrap(preds)
}
