use facetband_core::{bucket::ResultRow, filter::ActiveFilterSet, range::Range};
use serde::{Deserialize, Serialize};

///
/// FacetSnapshot
///
/// Request-scoped view of one facet, read once at the start of a request.
/// Everything a widget needs arrives here explicitly — route name, active
/// selections, the page's filter set, result rows — rather than being
/// pulled from ambient host services.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct FacetSnapshot {
    /// Stable key of the facet being rendered, e.g. `"price"`.
    pub facet_id: String,

    /// Route name of the current search page; redirects return to it.
    pub route: String,

    /// Ranges currently applied for this facet, in application order.
    pub active: Vec<Range>,

    /// All active filter expressions on the page, across every facet.
    pub filters: ActiveFilterSet,

    /// The facet's result rows, read-only.
    pub results: Vec<ResultRow>,
}

impl FacetSnapshot {
    /// Create a snapshot with no active state or results.
    #[must_use]
    pub const fn new(facet_id: String, route: String) -> Self {
        Self {
            facet_id,
            route,
            active: Vec::new(),
            filters: ActiveFilterSet::new(),
            results: Vec::new(),
        }
    }

    /// The first active range, used to prefill the min/max form.
    #[must_use]
    pub fn first_active(&self) -> Option<Range> {
        self.active.first().copied()
    }
}

///
/// RedirectTarget
///
/// Where a submission or item click should take the user: the same search
/// route with the reconciled filter set. URL building stays with the host.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RedirectTarget {
    pub route: String,
    pub filters: ActiveFilterSet,
}
