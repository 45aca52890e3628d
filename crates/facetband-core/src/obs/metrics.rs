use serde::{Deserialize, Serialize};
use std::cell::RefCell;

///
/// CounterState
///
/// Ephemeral, in-memory counters for validation, reconciliation, and
/// bucketing activity. Request-scoped engines reset these between test
/// cases; hosts may snapshot them for their own telemetry surfaces.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct CounterState {
    // Validation surfaces
    pub input_rejected: u64,
    pub config_rejected: u64,
    pub config_errors: u64,

    // Reconciliation outcomes
    pub reconcile_substituted: u64,
    pub reconcile_already_present: u64,
    pub reconcile_replaced: u64,
    pub reconcile_appended: u64,

    // Bucketing
    pub bucket_passes: u64,
    pub bands_bucketed: u64,
    pub rows_bucketed: u64,
}

thread_local! {
    static COUNTER_STATE: RefCell<CounterState> = RefCell::new(CounterState::default());
}

/// Borrow counters immutably.
pub(crate) fn with_state<R>(f: impl FnOnce(&CounterState) -> R) -> R {
    COUNTER_STATE.with(|state| f(&state.borrow()))
}

/// Borrow counters mutably.
pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut CounterState) -> R) -> R {
    COUNTER_STATE.with(|state| f(&mut state.borrow_mut()))
}

/// Reset all counters (useful in tests).
pub(crate) fn reset() {
    with_state_mut(|state| *state = CounterState::default());
}
