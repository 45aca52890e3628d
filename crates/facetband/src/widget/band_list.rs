use crate::{
    config::WidgetConfig,
    snapshot::{FacetSnapshot, RedirectTarget},
    widget::{FacetWidget, WidgetError, WidgetItem, WidgetOutput},
};
use facetband_core::{band::BandSet, bucket, filter};

///
/// BandListWidget
///
/// The checkbox-list variant: buckets the facet's results into the
/// configured bands and emits one toggling item per non-empty band. Each
/// item's target is the filter set that checking (or unchecking) that band
/// should navigate to, with every other active selection preserved.
///

#[derive(Clone, Debug, Default)]
pub struct BandListWidget {
    config: WidgetConfig,
}

impl BandListWidget {
    /// Create the widget from its persisted configuration.
    #[must_use]
    pub const fn new(config: WidgetConfig) -> Self {
        Self { config }
    }
}

impl FacetWidget for BandListWidget {
    fn build(&self, snapshot: &FacetSnapshot) -> Result<WidgetOutput, WidgetError> {
        let bands = BandSet::parse(&self.config.ranges).map_err(WidgetError::Config)?;
        let counts = bucket::bucket(&snapshot.results, &bands);

        let mut items = Vec::with_capacity(counts.len());
        for entry in counts {
            // A band with nothing in it renders no item.
            if entry.count == 0 {
                continue;
            }

            let resolved = entry.band.resolve(&snapshot.results);
            let is_active = snapshot.active.contains(&resolved);

            // Clicking a band toggles it against the current selections.
            let mut desired = snapshot.active.clone();
            if is_active {
                desired.retain(|range| *range != resolved);
            } else {
                desired.push(resolved);
            }

            let mut filters = snapshot.filters.clone();
            filter::reconcile_selections(&mut filters, &snapshot.facet_id, resolved, &desired);

            items.push(WidgetItem {
                label: entry.band.display_label(&self.config.prefix),
                count: self.config.show_counts.then_some(entry.count),
                is_active,
                target: RedirectTarget {
                    route: snapshot.route.clone(),
                    filters,
                },
            });
        }

        Ok(WidgetOutput::List(items))
    }
}
