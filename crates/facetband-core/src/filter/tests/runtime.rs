use super::super::*;
use crate::range::Range;

fn set(entries: &[&str]) -> ActiveFilterSet {
    ActiveFilterSet::from_vec(entries.iter().map(ToString::to_string).collect())
}

#[test]
fn expression_wire_form_matches_host_scheme() {
    let expr = FilterExpression::new("price", Range::bounded(10, 20));
    assert_eq!(expr.to_string(), "price:(min:10,max:20)");

    let open = FilterExpression::new("price", Range::open(200));
    assert_eq!(open.to_string(), "price:(min:200,max:)");

    let unbounded = FilterExpression::new("price", Range::default());
    assert_eq!(unbounded.to_string(), "price:(min:,max:)");
}

#[test]
fn reconcile_into_empty_set_appends() {
    let mut active = ActiveFilterSet::new();

    let outcome = reconcile(&mut active, "price", Range::bounded(10, 20));

    assert_eq!(outcome, ReconcileOutcome::Appended);
    assert_eq!(active, set(&["price:(min:10,max:20)"]));
}

#[test]
fn reconcile_replaces_existing_entry_for_the_facet() {
    let mut active = set(&["price:(min:10,max:20)"]);

    let outcome = reconcile(&mut active, "price", Range::bounded(30, 40));

    assert_eq!(outcome, ReconcileOutcome::Replaced);
    assert_eq!(active, set(&["price:(min:30,max:40)"]));
}

#[test]
fn reconcile_preserves_unrelated_facets_and_their_order() {
    let mut active = set(&["color:(min:1,max:2)"]);

    let outcome = reconcile(&mut active, "price", Range::bounded(5, 9));

    assert_eq!(outcome, ReconcileOutcome::Appended);
    assert_eq!(active, set(&["color:(min:1,max:2)", "price:(min:5,max:9)"]));
}

#[test]
fn reconcile_replaces_in_place_keeping_position() {
    let mut active = set(&[
        "color:(min:1,max:2)",
        "price:(min:10,max:20)",
        "weight:(min:3,max:4)",
    ]);

    reconcile(&mut active, "price", Range::bounded(50, 60));

    assert_eq!(
        active,
        set(&[
            "color:(min:1,max:2)",
            "price:(min:50,max:60)",
            "weight:(min:3,max:4)",
        ])
    );
}

#[test]
fn reconcile_is_a_noop_when_the_expression_already_matches() {
    let mut active = set(&["price:(min:10,max:20)"]);
    let before = active.clone();

    let outcome = reconcile(&mut active, "price", Range::bounded(10, 20));

    assert_eq!(outcome, ReconcileOutcome::AlreadyPresent);
    assert_eq!(active, before);
}

#[test]
fn reconcile_substitutes_slider_placeholders_in_place() {
    let mut active = set(&[
        "color:(min:1,max:2)",
        "price:(min:__range_slider_min__,max:__range_slider_max__)",
    ]);

    let outcome = reconcile(&mut active, "price", Range::bounded(15, 25));

    assert_eq!(outcome, ReconcileOutcome::Substituted);
    assert_eq!(
        active,
        set(&["color:(min:1,max:2)", "price:(min:15,max:25)"])
    );
}

#[test]
fn placeholder_entry_for_another_facet_is_left_alone() {
    let mut active = set(&["weight:(min:__range_slider_min__,max:__range_slider_max__)"]);

    let outcome = reconcile(&mut active, "price", Range::bounded(1, 2));

    assert_eq!(outcome, ReconcileOutcome::Appended);
    assert_eq!(
        active,
        set(&[
            "weight:(min:__range_slider_min__,max:__range_slider_max__)",
            "price:(min:1,max:2)",
        ])
    );
}

#[test]
fn substring_facet_ids_false_match_by_design() {
    // "price" is a substring of the "price_old" entry, so the entry is
    // overwritten. Carried behavior from the host's URL scheme.
    let mut active = set(&["price_old:(min:1,max:2)"]);

    let outcome = reconcile(&mut active, "price", Range::bounded(5, 9));

    assert_eq!(outcome, ReconcileOutcome::Replaced);
    assert_eq!(active, set(&["price:(min:5,max:9)"]));
}

#[test]
fn selections_sync_appends_missing_selections() {
    let mut active = set(&["color:(min:1,max:2)"]);
    let rendered = Range::bounded(100, 200);
    let selections = [Range::bounded(100, 200), Range::bounded(300, 400)];

    reconcile_selections(&mut active, "price", rendered, &selections);

    assert_eq!(
        active,
        set(&[
            "color:(min:1,max:2)",
            "price:(min:100,max:200)",
            "price:(min:300,max:400)",
        ])
    );
}

#[test]
fn selections_sync_drops_an_unchecked_band() {
    let mut active = set(&["price:(min:100,max:200)", "price:(min:300,max:400)"]);
    let rendered = Range::bounded(100, 200);
    // The rendered band is no longer selected: its entry must go.
    let selections = [Range::bounded(300, 400)];

    reconcile_selections(&mut active, "price", rendered, &selections);

    assert_eq!(active, set(&["price:(min:300,max:400)"]));
}

#[test]
fn selections_sync_resolves_slider_placeholders_with_the_rendered_band() {
    let mut active = set(&["price:(min:__range_slider_min__,max:__range_slider_max__)"]);
    let rendered = Range::bounded(100, 200);
    let selections = [Range::bounded(100, 200)];

    reconcile_selections(&mut active, "price", rendered, &selections);

    assert_eq!(active, set(&["price:(min:100,max:200)"]));
}

#[test]
fn selections_sync_does_not_duplicate_present_selections() {
    let mut active = set(&["price:(min:100,max:200)"]);
    let rendered = Range::bounded(100, 200);
    let selections = [Range::bounded(100, 200)];

    reconcile_selections(&mut active, "price", rendered, &selections);

    assert_eq!(active, set(&["price:(min:100,max:200)"]));
}

#[test]
fn filter_set_serializes_transparently() {
    let active = set(&["price:(min:1,max:2)"]);
    let json = serde_json::to_string(&active).unwrap();

    assert_eq!(json, r#"["price:(min:1,max:2)"]"#);

    let decoded: ActiveFilterSet = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, active);
}

#[test]
fn contains_expression_matches_by_wire_form() {
    let active = set(&["price:(min:1,max:2)"]);

    assert!(active.contains_expression(&FilterExpression::new("price", Range::bounded(1, 2))));
    assert!(!active.contains_expression(&FilterExpression::new("price", Range::bounded(3, 4))));
}
