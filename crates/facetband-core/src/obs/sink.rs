//! Metrics sink boundary.
//!
//! Engine logic MUST NOT depend on `obs::metrics` directly.
//! All instrumentation flows through [`MetricsEvent`] and [`MetricsSink`];
//! this module is the only bridge between the engine and counter state.

use crate::{filter::ReconcileOutcome, obs::metrics};
use std::{cell::RefCell, rc::Rc};


thread_local! {
    static SINK_OVERRIDE: RefCell<Option<Rc<dyn MetricsSink>>> = const { RefCell::new(None) };
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug)]
pub enum MetricsEvent {
    /// A min/max form submission failed validation.
    InputRejected,
    /// A band configuration blob failed validation, with the number of
    /// accumulated errors.
    ConfigRejected { errors: u64 },
    /// A single-range reconciliation pass completed.
    Reconcile { outcome: ReconcileOutcome },
    /// A bucketing pass ran over `rows` result rows and `bands` bands.
    BandsBucketed { bands: u64, rows: u64 },
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent);
}

///
/// CounterSink
///
/// Default thread-local sink that writes into global counter state.
/// Acts as the concrete sink when no scoped override is installed.
///

pub(crate) struct CounterSink;

impl MetricsSink for CounterSink {
    fn record(&self, event: MetricsEvent) {
        metrics::with_state_mut(|state| match event {
            MetricsEvent::InputRejected => {
                state.input_rejected = state.input_rejected.saturating_add(1);
            }
            MetricsEvent::ConfigRejected { errors } => {
                state.config_rejected = state.config_rejected.saturating_add(1);
                state.config_errors = state.config_errors.saturating_add(errors);
            }
            MetricsEvent::Reconcile { outcome } => {
                let counter = match outcome {
                    ReconcileOutcome::Substituted => &mut state.reconcile_substituted,
                    ReconcileOutcome::AlreadyPresent => &mut state.reconcile_already_present,
                    ReconcileOutcome::Replaced => &mut state.reconcile_replaced,
                    ReconcileOutcome::Appended => &mut state.reconcile_appended,
                };
                *counter = counter.saturating_add(1);
            }
            MetricsEvent::BandsBucketed { bands, rows } => {
                state.bucket_passes = state.bucket_passes.saturating_add(1);
                state.bands_bucketed = state.bands_bucketed.saturating_add(bands);
                state.rows_bucketed = state.rows_bucketed.saturating_add(rows);
            }
        });
    }
}

/// Route one event to the scoped override, or to counter state when none
/// is installed.
pub(crate) fn record(event: MetricsEvent) {
    let sink = SINK_OVERRIDE.with(|slot| slot.borrow().clone());
    match sink {
        Some(sink) => sink.record(event),
        None => CounterSink.record(event),
    }
}

/// Run `f` with a scoped sink override installed on this thread.
///
/// The previous sink (if any) is restored on every exit path, including
/// unwinds, so nested scopes compose.
pub fn with_metrics_sink<R>(sink: Rc<dyn MetricsSink>, f: impl FnOnce() -> R) -> R {
    struct Restore(Option<Rc<dyn MetricsSink>>);

    impl Drop for Restore {
        fn drop(&mut self) {
            SINK_OVERRIDE.with(|slot| *slot.borrow_mut() = self.0.take());
        }
    }

    let previous = SINK_OVERRIDE.with(|slot| slot.borrow_mut().replace(sink));
    let _restore = Restore(previous);
    f()
}

/// Snapshot the thread's counter state.
#[must_use]
pub fn metrics_report() -> metrics::CounterState {
    metrics::with_state(Clone::clone)
}

/// Reset the thread's counter state.
pub fn metrics_reset_all() {
    metrics::reset();
}
