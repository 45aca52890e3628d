use serde::{Deserialize, Serialize};


///
/// Range
///
/// One numeric facet constraint with optional bounds. An absent `min` means
/// "no lower bound" and displays as 0; an absent `max` means the range is
/// open-ended. When both bounds are present the well-formedness rule is
/// `min < max` (equal bounds are rejected at the validation layers).
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Range {
    pub min: Option<u64>,
    pub max: Option<u64>,
}

impl Range {
    /// Create a range from optional bounds.
    #[must_use]
    pub const fn new(min: Option<u64>, max: Option<u64>) -> Self {
        Self { min, max }
    }

    /// Create a fully bounded range.
    #[must_use]
    pub const fn bounded(min: u64, max: u64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Create an open-ended range with a lower bound only.
    #[must_use]
    pub const fn open(min: u64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Lower bound as displayed, defaulting to 0 when absent.
    #[must_use]
    pub const fn display_min(&self) -> u64 {
        match self.min {
            Some(min) => min,
            None => 0,
        }
    }

    /// Returns `true` when the range has no upper bound.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.max.is_none()
    }

    /// Returns `true` when the bounds are ordered (`min < max` whenever both
    /// are present).
    #[must_use]
    pub const fn is_well_formed(&self) -> bool {
        match (self.min, self.max) {
            (Some(min), Some(max)) => min < max,
            _ => true,
        }
    }

    /// Build the user-facing label for this range, e.g. `"$100 - $200"` for
    /// a bounded range and `"$200+"` for an open one. The prefix is the
    /// widget's configured currency symbol and may be empty.
    #[must_use]
    pub fn display_label(&self, prefix: &str) -> String {
        let min = self.display_min();
        match self.max {
            Some(max) => format!("{prefix}{min} - {prefix}{max}"),
            None => format!("{prefix}{min}+"),
        }
    }
}
