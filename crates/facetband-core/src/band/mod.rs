//! Band configuration parsing.
//!
//! A checkbox-list widget is configured with one `min|max` range per line.
//! Parsing validates every line and accumulates every error rather than
//! stopping at the first, so an admin sees all problems in one submission —
//! including several chained errors for a single malformed line.

use crate::{
    obs::sink::{self, MetricsEvent},
    range::Range,
};
use derive_more::Deref;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error as ThisError;

#[cfg(test)]
mod tests;

///
/// Band
///
/// One configured bucket of a facet's value space, parsed from a single
/// configuration line. Bands render in configuration order.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Band {
    pub range: Range,
}

impl Band {
    /// Create a band over the given range.
    #[must_use]
    pub const fn new(range: Range) -> Self {
        Self { range }
    }

    /// User-facing label for this band, e.g. `"$100 - $200"` or `"$200+"`.
    #[must_use]
    pub fn display_label(&self, prefix: &str) -> String {
        self.range.display_label(prefix)
    }
}

///
/// BandSide
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BandSide {
    Min,
    Max,
}

impl fmt::Display for BandSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Min => f.write_str("minimum"),
            Self::Max => f.write_str("maximum"),
        }
    }
}

///
/// BandConfigError
///
/// Admin-facing validation failures for the band configuration blob.
/// Line numbers are 1-based and count every line of the blob.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum BandConfigError {
    #[error("custom range is empty, please enter the desired range")]
    EmptyConfig,

    #[error(
        "line {line}: missing pipe separator, make sure \"|\" is present between the min value and the max value"
    )]
    MissingSeparator { line: usize },

    #[error("line {line}: {side} value '{raw}' is not an integer")]
    NotInteger {
        line: usize,
        side: BandSide,
        raw: String,
    },

    #[error("line {line}: minimum value {min} is greater than maximum value {max}")]
    MinGreaterThanMax { line: usize, min: u64, max: u64 },

    #[error("line {line}: minimum value {min} is equal to the maximum value")]
    MinEqualsMax { line: usize, min: u64 },

    #[error("line {line}: range defines neither a lower nor an upper bound")]
    EmptyRangeOption { line: usize },
}

///
/// BandSet
///
/// Ordered collection of configured bands. Order is configuration order and
/// drives display order. The data model expects no two bands with the same
/// range; duplicates are an admin mistake the parser deliberately does not
/// reject (the error taxonomy has no variant for them).
///

#[derive(Clone, Debug, Default, Deref, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BandSet(Vec<Band>);

impl BandSet {
    /// Build a band set from an existing vector.
    #[must_use]
    pub const fn from_vec(bands: Vec<Band>) -> Self {
        Self(bands)
    }

    /// Parse a multi-line `min|max` configuration blob.
    ///
    /// Lines split on LF, CRLF, or a lone CR. Blank lines are skipped; a
    /// blob with no non-blank lines fails with [`BandConfigError::EmptyConfig`].
    /// All line-level errors across the whole blob are accumulated.
    pub fn parse(config: &str) -> Result<Self, Vec<BandConfigError>> {
        let mut errors = Vec::new();
        let mut bands = Vec::new();
        let mut saw_line = false;

        let normalized = config.replace("\r\n", "\n").replace('\r', "\n");
        for (idx, line) in normalized.split('\n').enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            saw_line = true;

            match parse_line(idx + 1, line) {
                Ok(band) => bands.push(band),
                Err(line_errors) => errors.extend(line_errors),
            }
        }

        if !saw_line {
            errors.push(BandConfigError::EmptyConfig);
        }
        if !errors.is_empty() {
            sink::record(MetricsEvent::ConfigRejected {
                errors: errors.len() as u64,
            });
            return Err(errors);
        }

        Ok(Self(bands))
    }
}

impl From<Vec<Band>> for BandSet {
    fn from(bands: Vec<Band>) -> Self {
        Self(bands)
    }
}

impl IntoIterator for BandSet {
    type Item = Band;
    type IntoIter = std::vec::IntoIter<Band>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a BandSet {
    type Item = &'a Band;
    type IntoIter = std::slice::Iter<'a, Band>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Validate one configuration line.
///
/// A line missing its separator still has its sides checked, so one line can
/// contribute several errors. The integer checks run min-first and at most
/// one `NotInteger` is reported per line.
fn parse_line(line: usize, raw: &str) -> Result<Band, Vec<BandConfigError>> {
    let mut errors = Vec::new();

    let parts: Vec<&str> = raw.split('|').collect();
    if parts.len() != 2 {
        errors.push(BandConfigError::MissingSeparator { line });
    }
    let min_raw = parts.first().map_or("", |side| side.trim());
    let max_raw = parts.get(1).map_or("", |side| side.trim());

    let mut min = None;
    let mut max = None;
    let mut min_side_bad = false;

    if !min_raw.is_empty() {
        match parse_side(min_raw) {
            Some(value) => min = Some(value),
            None => {
                min_side_bad = true;
                errors.push(BandConfigError::NotInteger {
                    line,
                    side: BandSide::Min,
                    raw: min_raw.to_string(),
                });
            }
        }
    }
    // The max side is only checked when the min side parsed cleanly.
    if !max_raw.is_empty() && !min_side_bad {
        match parse_side(max_raw) {
            Some(value) => max = Some(value),
            None => errors.push(BandConfigError::NotInteger {
                line,
                side: BandSide::Max,
                raw: max_raw.to_string(),
            }),
        }
    }

    if min_raw.is_empty() && max_raw.is_empty() {
        errors.push(BandConfigError::EmptyRangeOption { line });
    }

    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            errors.push(BandConfigError::MinGreaterThanMax { line, min, max });
        } else if min == max {
            errors.push(BandConfigError::MinEqualsMax { line, min });
        }
    }

    if errors.is_empty() {
        Ok(Band::new(Range::new(min, max)))
    } else {
        Err(errors)
    }
}

/// One side of a line must be plain ASCII digits and fit the band value
/// space; anything else (signs, decimals, overflow) is not an integer.
fn parse_side(raw: &str) -> Option<u64> {
    if raw.bytes().all(|byte| byte.is_ascii_digit()) {
        raw.parse().ok()
    } else {
        None
    }
}
