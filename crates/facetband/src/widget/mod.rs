//! Widget strategies.
//!
//! The two render paths of a range facet — a free-text min/max form and a
//! checkbox list of configured bands — are separate strategies behind one
//! [`FacetWidget`] trait, composed by the host per facet instance.

mod band_list;
mod range_input;


pub use band_list::BandListWidget;
pub use range_input::RangeInputWidget;

use crate::snapshot::{FacetSnapshot, RedirectTarget};
use facetband_core::{band::BandConfigError, input::InputError};
use thiserror::Error as ThisError;

///
/// FacetWidget
///

pub trait FacetWidget {
    /// Build the render model for one facet from its request snapshot.
    fn build(&self, snapshot: &FacetSnapshot) -> Result<WidgetOutput, WidgetError>;
}

///
/// WidgetOutput
///
/// Host-facing render model; the host owns the actual markup.
///

#[derive(Clone, Debug, PartialEq)]
pub enum WidgetOutput {
    /// The min/max text form, prefilled from the active selection.
    Form(RangeForm),
    /// Ordered checkbox-list items, zero-count bands already dropped.
    List(Vec<WidgetItem>),
}

///
/// RangeForm
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RangeForm {
    /// Currency prefix rendered before each field.
    pub prefix: String,
    /// Prefilled minimum, empty when nothing is active.
    pub min_value: String,
    /// Prefilled maximum, empty when nothing is active.
    pub max_value: String,
}

impl RangeForm {
    /// Label of the form's submit button.
    pub const SUBMIT_LABEL: &'static str = "Go";
}

///
/// WidgetItem
///
/// One renderable band entry of the checkbox list.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WidgetItem {
    pub label: String,
    /// Summed result count; `None` when the widget hides counts.
    pub count: Option<u64>,
    pub is_active: bool,
    pub target: RedirectTarget,
}

///
/// WidgetError
///
/// Validation failures surfaced to the host's field-attached message
/// layer. Never fatal; the prior filter state is left untouched.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum WidgetError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("band configuration is invalid ({count} error(s))", count = .0.len())]
    Config(Vec<BandConfigError>),
}
