//! Result bucketing: grouping a facet's raw result rows into configured
//! bands.

use crate::{
    band::{Band, BandSet},
    obs::sink::{self, MetricsEvent},
    range::Range,
};
use serde::{Deserialize, Serialize};


///
/// ResultRow
///
/// One discrete value observed in the facet's dataset with its occurrence
/// count. Produced by the host's search backend; read-only here.
///

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct ResultRow {
    pub raw_value: f64,
    pub count: u64,
}

impl ResultRow {
    /// Create a result row.
    #[must_use]
    pub const fn new(raw_value: f64, count: u64) -> Self {
        Self { raw_value, count }
    }
}

///
/// BandCount
///
/// One band with its summed result count, in band display order.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct BandCount {
    pub band: Band,
    pub count: u64,
}

/// Sum result counts into each band.
///
/// A bounded band collects rows strictly between its bounds
/// (`min < raw < max`; rows sitting exactly on a boundary fall into
/// neither band). An open band collects every row above its lower bound.
/// Zero-count bands stay in the output; dropping them from display is the
/// widget layer's call.
#[must_use]
pub fn bucket(rows: &[ResultRow], bands: &BandSet) -> Vec<BandCount> {
    let counts = bands
        .iter()
        .map(|band| BandCount {
            band: *band,
            count: band_count(band, rows),
        })
        .collect();

    sink::record(MetricsEvent::BandsBucketed {
        bands: bands.len() as u64,
        rows: rows.len() as u64,
    });

    counts
}

/// Largest raw value observed across the result set.
///
/// Used to resolve an open band's effective upper bound when the host
/// needs a fully bounded range for the URL.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn max_raw_value(rows: &[ResultRow]) -> Option<u64> {
    rows.iter()
        .map(|row| row.raw_value)
        .fold(None, |acc: Option<f64>, value| {
            Some(acc.map_or(value, |best| best.max(value)))
        })
        .map(|value| value as u64)
}

impl Band {
    /// Resolve this band to a fully concrete range against a result set:
    /// the lower bound defaults to 0 and an open upper bound becomes the
    /// largest observed raw value.
    #[must_use]
    pub fn resolve(&self, rows: &[ResultRow]) -> Range {
        Range::new(
            Some(self.range.display_min()),
            self.range.max.or_else(|| max_raw_value(rows)),
        )
    }
}

#[allow(clippy::cast_precision_loss)]
fn band_count(band: &Band, rows: &[ResultRow]) -> u64 {
    let min = band.range.display_min() as f64;

    rows.iter()
        .filter(|row| match band.range.max {
            Some(max) => row.raw_value > min && row.raw_value < max as f64,
            None => row.raw_value > min,
        })
        .map(|row| row.count)
        .sum()
}
