//! Observability: pagination counters and the sink abstraction feeding them.

pub(crate) mod metrics;
pub(crate) mod sink;

// re-exports
pub use metrics::{MetricsReport, PaginationCounters, RowTypeCounters};
pub use sink::{
    MetricsEvent, MetricsSink, PagerSource, metrics_report, metrics_reset_all, with_metrics_sink,
};
