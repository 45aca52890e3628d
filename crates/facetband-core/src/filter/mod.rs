//! Filter expressions and active-filter-set reconciliation.
//!
//! An [`ActiveFilterSet`] holds the page's active facet constraints as the
//! host hands them over: an ordered list of opaque expression strings, one
//! per applied constraint across every facet on the page. Reconciliation
//! merges a chosen range into that list without disturbing the relative
//! order of other facets' entries.
//!
//! Matching is by substring containment, as the host's URL scheme has
//! always done. A facet id that happens to be a substring of another
//! facet's expression can therefore false-match; this is carried behavior,
//! not an invitation to switch to structural parsing.

use crate::{
    obs::sink::{self, MetricsEvent},
    range::Range,
};
use derive_more::Deref;
use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(test)]
mod tests;

/// Unresolved lower-bound marker a range-slider leaves inside an
/// expression until a concrete range is chosen.
pub const RANGE_SLIDER_MIN_TOKEN: &str = "__range_slider_min__";

/// Unresolved upper-bound marker; always paired with
/// [`RANGE_SLIDER_MIN_TOKEN`].
pub const RANGE_SLIDER_MAX_TOKEN: &str = "__range_slider_max__";

///
/// FilterExpression
///
/// One facet constraint as a typed value. The wire form the host's URL
/// scheme expects — `facet:(min:M,max:N)`, absent bounds left blank — is
/// produced only at the boundary via `Display`.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct FilterExpression {
    pub facet_id: String,
    pub range: Range,
}

impl FilterExpression {
    /// Create an expression binding a facet to a range.
    #[must_use]
    pub fn new(facet_id: impl Into<String>, range: Range) -> Self {
        Self {
            facet_id: facet_id.into(),
            range,
        }
    }
}

impl fmt::Display for FilterExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:(min:", self.facet_id)?;
        if let Some(min) = self.range.min {
            write!(f, "{min}")?;
        }
        f.write_str(",max:")?;
        if let Some(max) = self.range.max {
            write!(f, "{max}")?;
        }
        f.write_str(")")
    }
}

///
/// ReconcileOutcome
///
/// How a reconciliation pass landed the new expression in the set.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReconcileOutcome {
    /// Slider placeholders were substituted in place.
    Substituted,
    /// The exact expression was already present; the set is unchanged.
    AlreadyPresent,
    /// An existing entry for the facet was overwritten in place.
    Replaced,
    /// No entry matched; the expression was appended.
    Appended,
}

///
/// ActiveFilterSet
///
/// Ordered, duplicate-free-per-facet list of active filter expressions for
/// a whole search page. Preserves insertion order and serializes
/// identically to `Vec<String>`. Mutation beyond reconciliation is
/// explicit and positional.
///

#[derive(Clone, Debug, Default, Deref, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ActiveFilterSet(Vec<String>);

impl ActiveFilterSet {
    /// Create an empty filter set.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Build a filter set from the host's raw expression strings.
    #[must_use]
    pub const fn from_vec(expressions: Vec<String>) -> Self {
        Self(expressions)
    }

    /// Append a raw expression to the end of the set.
    pub fn push(&mut self, expression: String) {
        self.0.push(expression);
    }

    /// Retain only the expressions matching the predicate.
    pub fn retain<F>(&mut self, predicate: F)
    where
        F: FnMut(&String) -> bool,
    {
        self.0.retain(predicate);
    }

    /// Returns `true` when any entry contains the expression's wire form.
    #[must_use]
    pub fn contains_expression(&self, expression: &FilterExpression) -> bool {
        let wire = expression.to_string();
        self.0.iter().any(|entry| entry.contains(&wire))
    }
}

impl From<Vec<String>> for ActiveFilterSet {
    fn from(expressions: Vec<String>) -> Self {
        Self(expressions)
    }
}

impl From<ActiveFilterSet> for Vec<String> {
    fn from(filters: ActiveFilterSet) -> Self {
        filters.0
    }
}

impl IntoIterator for ActiveFilterSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ActiveFilterSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Merge a chosen range for one facet into the active filter set.
///
/// Single linear, order-preserving pass. Per entry, in order: an entry
/// still carrying both slider placeholder tokens alongside the facet id
/// has the placeholders substituted in place; an entry textually equal to
/// the new expression resolves as a no-op; any other entry containing the
/// facet id is overwritten in place. When nothing matched, the new
/// expression is appended. At most one expression for the facet remains
/// and the pass is idempotent.
pub fn reconcile(active: &mut ActiveFilterSet, facet_id: &str, range: Range) -> ReconcileOutcome {
    let new_expr = FilterExpression::new(facet_id, range).to_string();
    let min_text = bound_text(range.min);
    let max_text = bound_text(range.max);

    let mut resolved = None;
    for entry in &mut active.0 {
        if entry.contains(RANGE_SLIDER_MIN_TOKEN)
            && entry.contains(RANGE_SLIDER_MAX_TOKEN)
            && entry.contains(facet_id)
        {
            *entry = entry
                .replace(RANGE_SLIDER_MIN_TOKEN, &min_text)
                .replace(RANGE_SLIDER_MAX_TOKEN, &max_text);
            resolved.get_or_insert(ReconcileOutcome::Substituted);
        } else if *entry == new_expr {
            resolved.get_or_insert(ReconcileOutcome::AlreadyPresent);
        } else if entry.contains(facet_id) {
            entry.clone_from(&new_expr);
            resolved.get_or_insert(ReconcileOutcome::Replaced);
        }
    }

    let outcome = resolved.unwrap_or_else(|| {
        active.0.push(new_expr);
        ReconcileOutcome::Appended
    });
    sink::record(MetricsEvent::Reconcile { outcome });

    outcome
}

/// Synchronize one facet's expressions with a desired set of selections.
///
/// This is the checkbox-list variant of [`reconcile`]: `rendered` is the
/// band whose link is being built and `selections` is the selection state
/// that following the link should produce. Slider placeholders are
/// resolved with the rendered band's bounds first; the rendered band's
/// expression is dropped when it is absent from `selections` (an uncheck);
/// every selection without a matching entry is appended. Afterwards the
/// set holds exactly one expression per `(facet_id, range)` selection and
/// none for the rendered band unless it is selected.
pub fn reconcile_selections(
    active: &mut ActiveFilterSet,
    facet_id: &str,
    rendered: Range,
    selections: &[Range],
) {
    let min_text = bound_text(rendered.min);
    let max_text = bound_text(rendered.max);
    for entry in &mut active.0 {
        if entry.contains(RANGE_SLIDER_MIN_TOKEN) && entry.contains(RANGE_SLIDER_MAX_TOKEN) {
            *entry = entry
                .replace(RANGE_SLIDER_MIN_TOKEN, &min_text)
                .replace(RANGE_SLIDER_MAX_TOKEN, &max_text);
        }
    }

    if !selections.contains(&rendered) {
        let rendered_wire = FilterExpression::new(facet_id, rendered).to_string();
        active.0.retain(|entry| !entry.contains(&rendered_wire));
    }

    for selection in selections {
        let wire = FilterExpression::new(facet_id, *selection).to_string();
        if !active.0.iter().any(|entry| entry.contains(&wire)) {
            active.0.push(wire);
        }
    }
}

fn bound_text(bound: Option<u64>) -> String {
    bound.map_or_else(String::new, |value| value.to_string())
}
