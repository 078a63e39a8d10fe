//! In-memory executor for seek plans.
//!
//! Reference backend for tests and small embedded collections: filter, stable
//! sort, then limit. Uses the canonical value order throughout.

use crate::{db::seek::SeekPlan, traits::SortKey};

/// Run a plan over a slice of rows and return the fetched rows in physical order.
#[must_use]
pub fn execute<R: SortKey + Clone>(rows: &[R], plan: &SeekPlan) -> Vec<R> {
    let mut fetched: Vec<R> = match &plan.predicate {
        Some(predicate) => rows
            .iter()
            .filter(|row| predicate.matches(*row))
            .cloned()
            .collect(),
        None => rows.to_vec(),
    };

    fetched.sort_by(|a, b| plan.order.compare(a, b));

    if let Some(limit) = plan.limit {
        fetched.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
    }

    fetched
}
