//! Core engine for facetband: range values, input validation, band
//! configuration parsing, filter-set reconciliation, result bucketing, and
//! the metrics sink exported via `obs`.
#![warn(unreachable_pub)]

pub mod band;
pub mod bucket;
pub mod filter;
pub mod input;
pub mod obs;
pub mod range;

///
/// CONSTANTS
///

/// Largest value the min/max input fields accept.
///
/// The host form caps its text fields at six characters; anything above
/// this bound is rejected as not a whole number.
pub const MAX_INPUT_VALUE: u64 = 999_999;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// Errors, the metrics sink, and parsing internals stay behind their modules.
///

pub mod prelude {
    pub use crate::{
        band::{Band, BandSet},
        bucket::{BandCount, ResultRow},
        filter::{ActiveFilterSet, FilterExpression},
        range::Range,
    };
}
