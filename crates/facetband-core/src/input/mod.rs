//! Validation for the free-text min/max range form.
//!
//! The checks and their order mirror the submission path of the price-range
//! form: emptiness first, then whole-number shape (min before max), then
//! bound ordering. The first failing check wins; errors attach to a single
//! field via [`InputError::field`].

use crate::{
    MAX_INPUT_VALUE,
    obs::sink::{self, MetricsEvent},
    range::Range,
};
use std::fmt;
use thiserror::Error as ThisError;


///
/// InputField
///
/// Which form field a validation message attaches to.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputField {
    Min,
    Max,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Min => f.write_str("min"),
            Self::Max => f.write_str("max"),
        }
    }
}

///
/// InputError
///
/// User-facing validation failures for the min/max form submission.
/// Messages are phrased for direct display next to the offending field.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum InputError {
    #[error("please enter a valid number range")]
    MissingMin,

    #[error("please enter a valid number range")]
    MissingMax,

    #[error("please enter whole numbers only")]
    NotWholeNumber { field: InputField },

    #[error("please enter a valid number range")]
    MinNotLessThanMax,
}

impl InputError {
    /// The field the error message should attach to.
    #[must_use]
    pub const fn field(&self) -> InputField {
        match self {
            Self::MissingMin | Self::MinNotLessThanMax => InputField::Min,
            Self::MissingMax => InputField::Max,
            Self::NotWholeNumber { field } => *field,
        }
    }
}

/// Validate a submitted min/max pair into a fully bounded [`Range`].
///
/// Both values are trimmed before any check. `"0"` is a valid minimum.
pub fn validate(min_raw: &str, max_raw: &str) -> Result<Range, InputError> {
    let min_raw = min_raw.trim();
    let max_raw = max_raw.trim();

    let range = validate_trimmed(min_raw, max_raw);
    if range.is_err() {
        sink::record(MetricsEvent::InputRejected);
    }

    range
}

fn validate_trimmed(min_raw: &str, max_raw: &str) -> Result<Range, InputError> {
    if min_raw.is_empty() {
        return Err(InputError::MissingMin);
    }
    if max_raw.is_empty() {
        return Err(InputError::MissingMax);
    }

    let min = parse_whole(min_raw).ok_or(InputError::NotWholeNumber {
        field: InputField::Min,
    })?;
    let max = parse_whole(max_raw).ok_or(InputError::NotWholeNumber {
        field: InputField::Max,
    })?;

    if min >= max {
        return Err(InputError::MinNotLessThanMax);
    }

    Ok(Range::bounded(min, max))
}

/// Parse one side of the form as a whole number within the input cap.
///
/// The host form historically accepted numeric spellings like `"12.0"`, so
/// a plain integer parse is tried first and a float parse with a
/// zero-fraction check second. Negative values, fractions, and anything
/// above [`MAX_INPUT_VALUE`] are rejected.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn parse_whole(raw: &str) -> Option<u64> {
    if let Ok(value) = raw.parse::<u64>() {
        return (value <= MAX_INPUT_VALUE).then_some(value);
    }

    let value = raw.parse::<f64>().ok()?;
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > MAX_INPUT_VALUE as f64 {
        return None;
    }

    Some(value as u64)
}
