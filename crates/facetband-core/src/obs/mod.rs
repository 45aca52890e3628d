//! Observability: ephemeral counters and the metrics sink boundary.
//!
//! Engine modules do not touch counter state directly; every observation
//! flows through a [`sink::MetricsEvent`] handed to [`sink::record`].

pub(crate) mod metrics;
pub mod sink;

// re-exports
pub use metrics::CounterState;
pub use sink::{MetricsEvent, MetricsSink, metrics_report, metrics_reset_all, with_metrics_sink};
