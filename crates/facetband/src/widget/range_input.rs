use crate::{
    config::WidgetConfig,
    snapshot::{FacetSnapshot, RedirectTarget},
    widget::{FacetWidget, RangeForm, WidgetError, WidgetOutput},
};
use facetband_core::{filter, input};

///
/// RangeInputWidget
///
/// The free-text variant: two numeric fields and a submit button. Building
/// yields the prefilled form; submitting validates the entered pair and
/// reconciles it into the page's filter set for redirect.
///

#[derive(Clone, Debug, Default)]
pub struct RangeInputWidget {
    config: WidgetConfig,
}

impl RangeInputWidget {
    /// Create the widget from its persisted configuration.
    #[must_use]
    pub const fn new(config: WidgetConfig) -> Self {
        Self { config }
    }

    /// Handle a form submission.
    ///
    /// Validation failures come back as a [`WidgetError`] for the host's
    /// field-attached message surface; the snapshot's filter state is not
    /// touched on failure.
    pub fn submit(
        &self,
        snapshot: &FacetSnapshot,
        min_raw: &str,
        max_raw: &str,
    ) -> Result<RedirectTarget, WidgetError> {
        let range = input::validate(min_raw, max_raw)?;

        let mut filters = snapshot.filters.clone();
        filter::reconcile(&mut filters, &snapshot.facet_id, range);

        Ok(RedirectTarget {
            route: snapshot.route.clone(),
            filters,
        })
    }
}

impl FacetWidget for RangeInputWidget {
    fn build(&self, snapshot: &FacetSnapshot) -> Result<WidgetOutput, WidgetError> {
        let (min_value, max_value) = snapshot.first_active().map_or_else(
            || (String::new(), String::new()),
            |range| (bound_value(range.min), bound_value(range.max)),
        );

        Ok(WidgetOutput::Form(RangeForm {
            prefix: self.config.prefix.clone(),
            min_value,
            max_value,
        }))
    }
}

fn bound_value(bound: Option<u64>) -> String {
    bound.map_or_else(String::new, |value| value.to_string())
}
