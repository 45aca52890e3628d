//! facetband — range-facet widgets for faceted search pages.
//!
//! ## Crate layout
//! - `core`: the engine — range values, input validation, band
//!   configuration parsing, filter-set reconciliation, result bucketing,
//!   and the metrics sink.
//! - `config`: persisted per-widget configuration.
//! - `snapshot`: request-scoped facet state handed in by the host, and the
//!   redirect target handed back.
//! - `widget`: the widget strategies — a free-text min/max form and a
//!   checkbox list of configured bands.
//!
//! The `prelude` module mirrors the surface a host integration uses.

pub use facetband_core as core;

pub mod config;
pub mod snapshot;
pub mod widget;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        config::WidgetConfig,
        snapshot::{FacetSnapshot, RedirectTarget},
        widget::{
            BandListWidget, FacetWidget, RangeForm, RangeInputWidget, WidgetError, WidgetItem,
            WidgetOutput,
        },
    };
    pub use facetband_core::prelude::*;
}
