//! Plain SQL rendering of a seek plan with positional `?` parameters.

use crate::{
    db::seek::{CompareOp, ComparePredicate, OrderSpec, Predicate, SeekPlan},
    value::Value,
};
use std::fmt::Write as _;

///
/// SqlFragment
///
/// Rendered clauses without their keywords, plus the bound parameters in
/// placeholder order.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SqlFragment {
    pub where_clause: Option<String>,
    pub order_by: String,
    pub limit: Option<u32>,
    pub params: Vec<Value>,
}

impl SqlFragment {
    /// Clauses joined as a statement suffix, e.g. `WHERE .. ORDER BY .. LIMIT 11`.
    #[must_use]
    pub fn to_suffix(&self) -> String {
        let mut out = String::new();

        if let Some(clause) = &self.where_clause {
            let _ = write!(out, "WHERE {clause}");
        }
        if !self.order_by.is_empty() {
            if !out.is_empty() {
                out.push(' ');
            }
            let _ = write!(out, "ORDER BY {}", self.order_by);
        }
        if let Some(limit) = self.limit {
            if !out.is_empty() {
                out.push(' ');
            }
            let _ = write!(out, "LIMIT {limit}");
        }

        out
    }
}

/// Render a plan. Columns without a `.` are qualified with `alias` when given.
///
/// The fragment is meant for NOT NULL sort columns. A `Null` boundary value
/// is rendered with `IS NULL`/`IS NOT NULL` in the canonical order (Null
/// first), but rows holding NULL are still skipped by comparisons against
/// non-null boundaries under SQL three-valued logic, so nullable columns page
/// differently here than in [`crate::db::memory`].
#[must_use]
pub fn render(plan: &SeekPlan, alias: Option<&str>) -> SqlFragment {
    let mut params = Vec::new();
    let where_clause = plan
        .predicate
        .as_ref()
        .map(|predicate| render_predicate(predicate, alias, &mut params));

    SqlFragment {
        where_clause,
        order_by: render_order(&plan.order, alias),
        limit: plan.limit,
        params,
    }
}

fn render_predicate(
    predicate: &Predicate,
    alias: Option<&str>,
    params: &mut Vec<Value>,
) -> String {
    match predicate {
        Predicate::Compare(cmp) => render_compare(cmp, alias, params),
        Predicate::And(children) => join(children, " AND ", alias, params),
        Predicate::Or(children) => join(children, " OR ", alias, params),
    }
}

fn render_compare(cmp: &ComparePredicate, alias: Option<&str>, params: &mut Vec<Value>) -> String {
    let field = qualify(&cmp.field, alias);

    if !cmp.value.is_null() {
        params.push(cmp.value.clone());
        return format!("{field} {} ?", cmp.op);
    }

    // nothing sorts before Null
    match cmp.op {
        CompareOp::Eq | CompareOp::Lte => format!("{field} IS NULL"),
        CompareOp::Gt => format!("{field} IS NOT NULL"),
        CompareOp::Gte => "1 = 1".to_string(),
        CompareOp::Lt => "1 = 0".to_string(),
    }
}

fn join(
    children: &[Predicate],
    sep: &str,
    alias: Option<&str>,
    params: &mut Vec<Value>,
) -> String {
    let parts: Vec<String> = children
        .iter()
        .map(|child| render_predicate(child, alias, params))
        .collect();
    let joined = parts.join(sep);

    // groups stay parenthesized so the clause can be ANDed with caller filters
    if children.len() < 2 {
        joined
    } else {
        format!("({joined})")
    }
}

fn render_order(order: &OrderSpec, alias: Option<&str>) -> String {
    order
        .fields
        .iter()
        .map(|(field, direction)| format!("{} {direction}", qualify(field, alias)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn qualify(field: &str, alias: Option<&str>) -> String {
    match alias {
        Some(alias) if !alias.is_empty() && !field.contains('.') => format!("{alias}.{field}"),
        _ => field.to_string(),
    }
}
