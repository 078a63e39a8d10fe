use serde::{Deserialize, Serialize};
use std::{cell::RefCell, collections::BTreeMap};

///
/// PaginationCounters
/// Ephemeral, in-memory counters for pager activity on this thread.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct PaginationCounters {
    // Pager construction by source
    pub pagers_default: u64,
    pub pagers_order: u64,
    pub pagers_scheme_id: u64,
    pub pagers_token: u64,

    // Page mapping
    pub pages_mapped: u64,
    pub rows_returned: u64,
    pub tokens_issued: u64,
    pub reflections: u64,

    // Rejections
    pub tokens_rejected: u64,
}

///
/// RowTypeCounters
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct RowTypeCounters {
    pub pagers_created: u64,
    pub pages_mapped: u64,
    pub rows_returned: u64,
    pub tokens_rejected: u64,
}

///
/// MetricsReport
/// Point-in-time copy of the counters.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct MetricsReport {
    pub counters: PaginationCounters,
    pub row_types: BTreeMap<String, RowTypeCounters>,
}

#[derive(Debug, Default)]
pub(crate) struct MetricsState {
    pub(crate) counters: PaginationCounters,
    pub(crate) row_types: BTreeMap<String, RowTypeCounters>,
}

impl MetricsState {
    pub(crate) fn row_type(&mut self, row_type: &str) -> &mut RowTypeCounters {
        self.row_types.entry(row_type.to_string()).or_default()
    }
}

thread_local! {
    static METRICS_STATE: RefCell<MetricsState> = RefCell::new(MetricsState::default());
}

/// Borrow metrics immutably.
pub(crate) fn with_state<R>(f: impl FnOnce(&MetricsState) -> R) -> R {
    METRICS_STATE.with(|m| f(&m.borrow()))
}

/// Borrow metrics mutably.
pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut MetricsState) -> R) -> R {
    METRICS_STATE.with(|m| f(&mut m.borrow_mut()))
}

pub(crate) fn report() -> MetricsReport {
    with_state(|m| MetricsReport {
        counters: m.counters.clone(),
        row_types: m.row_types.clone(),
    })
}

/// Reset all counters (useful in tests).
pub(crate) fn reset_all() {
    with_state_mut(|m| *m = MetricsState::default());
}

pub(crate) const fn bump(counter: &mut u64, by: u64) {
    *counter = counter.saturating_add(by);
}
