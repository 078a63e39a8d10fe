//! Metrics sink boundary.
//!
//! Pager code never touches `obs::metrics` directly: every counter update
//! flows through a `MetricsEvent` handed to the active `MetricsSink`.

use crate::obs::metrics::{self, MetricsReport, bump};
use std::{cell::RefCell, rc::Rc};

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<Rc<dyn MetricsSink>>> = RefCell::new(None);
}

///
/// PagerSource
/// How a pager chose its scheme and boundary.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PagerSource {
    Default,
    Order,
    SchemeId,
    Token,
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug)]
pub enum MetricsEvent {
    PagerCreated {
        source: PagerSource,
        row_type: &'static str,
    },
    PageMapped {
        row_type: &'static str,
        rows: u64,
        tokens_issued: u64,
        reflected: bool,
    },
    TokenRejected {
        row_type: &'static str,
    },
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent);
}

/// GlobalMetricsSink
/// Default sink writing into the thread-local counters.
/// Used whenever no scoped override is installed.

pub(crate) struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: MetricsEvent) {
        match event {
            MetricsEvent::PagerCreated { source, row_type } => {
                metrics::with_state_mut(|m| {
                    let c = &mut m.counters;
                    match source {
                        PagerSource::Default => bump(&mut c.pagers_default, 1),
                        PagerSource::Order => bump(&mut c.pagers_order, 1),
                        PagerSource::SchemeId => bump(&mut c.pagers_scheme_id, 1),
                        PagerSource::Token => bump(&mut c.pagers_token, 1),
                    }

                    bump(&mut m.row_type(row_type).pagers_created, 1);
                });
            }

            MetricsEvent::PageMapped {
                row_type,
                rows,
                tokens_issued,
                reflected,
            } => {
                metrics::with_state_mut(|m| {
                    let c = &mut m.counters;
                    bump(&mut c.pages_mapped, 1);
                    bump(&mut c.rows_returned, rows);
                    bump(&mut c.tokens_issued, tokens_issued);
                    if reflected {
                        bump(&mut c.reflections, 1);
                    }

                    let entry = m.row_type(row_type);
                    bump(&mut entry.pages_mapped, 1);
                    bump(&mut entry.rows_returned, rows);
                });
            }

            MetricsEvent::TokenRejected { row_type } => {
                metrics::with_state_mut(|m| {
                    bump(&mut m.counters.tokens_rejected, 1);
                    bump(&mut m.row_type(row_type).tokens_rejected, 1);
                });
            }
        }
    }
}

pub(crate) const GLOBAL_METRICS_SINK: GlobalMetricsSink = GlobalMetricsSink;

pub(crate) fn record(event: MetricsEvent) {
    let sink = SINK_OVERRIDE.with(|cell| cell.borrow().clone());

    match sink {
        Some(sink) => sink.record(event),
        None => GLOBAL_METRICS_SINK.record(event),
    }
}

/// Snapshot the current thread's pagination counters.
#[must_use]
pub fn metrics_report() -> MetricsReport {
    metrics::report()
}

/// Reset all pagination counters on the current thread.
pub fn metrics_reset_all() {
    metrics::reset_all();
}

/// Run a closure with `sink` receiving every event recorded on this thread.
///
/// Overrides nest; the previous sink is restored on exit, including unwind.
pub fn with_metrics_sink<T>(sink: Rc<dyn MetricsSink>, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<Rc<dyn MetricsSink>>);

    impl Drop for Guard {
        fn drop(&mut self) {
            let prev = self.0.take();
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = prev;
            });
        }
    }

    let prev = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink));
    let _guard = Guard(prev);

    f()
}
