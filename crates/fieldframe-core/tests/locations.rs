// crates/fieldframe-core/tests/locations.rs
// ============================================================================
// Module: Location Conversion Tests
// Description: Validate UI selection to flat rule conversion and back.
// Purpose: Ensure edit-form selections round-trip through stored rules.
// Dependencies: fieldframe-core
// ============================================================================

//! Round-trip tests between placement selections and flat location rules.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "Test-only assertions and helpers are permitted."
)]

use fieldframe_core::LocationParam;
use fieldframe_core::LocationRule;
use fieldframe_core::PlacementSelection;
use fieldframe_core::RuleOperator;
use fieldframe_core::SelectionTarget;
use fieldframe_core::locations_to_selections;
use fieldframe_core::selections_to_locations;

#[test]
fn page_selection_becomes_a_single_literal_rule() {
    let locations = selections_to_locations(&[PlacementSelection::new(SelectionTarget::Page)]);
    assert_eq!(locations.len(), 1);
    assert_eq!(locations[0].rule_group, 0);
    assert_eq!(locations[0].param, LocationParam::PostType);
    assert_eq!(locations[0].operator, RuleOperator::Equals);
    assert_eq!(locations[0].value, "page");
}

#[test]
fn narrowed_selection_adds_an_identifier_rule() {
    let locations =
        selections_to_locations(&[PlacementSelection::for_entity(SelectionTarget::Post, 7)]);
    assert_eq!(locations.len(), 2);
    assert_eq!(locations[0].param, LocationParam::PostType);
    assert_eq!(locations[0].value, "post");
    assert_eq!(locations[1].param, LocationParam::Post);
    assert_eq!(locations[1].value, "7");
    assert_eq!(locations[1].rule_group, 0);
}

#[test]
fn post_type_selection_stores_the_numeric_id() {
    let locations =
        selections_to_locations(&[PlacementSelection::for_entity(SelectionTarget::PostType, 5)]);
    assert_eq!(locations.len(), 1);
    assert_eq!(locations[0].param, LocationParam::PostType);
    assert_eq!(locations[0].value, "5");
}

#[test]
fn each_selection_gets_its_own_rule_group() {
    let locations = selections_to_locations(&[
        PlacementSelection::new(SelectionTarget::Page),
        PlacementSelection::for_entity(SelectionTarget::Category, 3),
    ]);
    assert_eq!(locations[0].rule_group, 0);
    assert_eq!(locations[1].rule_group, 1);
    assert_eq!(locations[2].rule_group, 1);
}

#[test]
fn selections_round_trip_through_flat_rules() {
    let selections = vec![
        PlacementSelection::new(SelectionTarget::Page),
        PlacementSelection::for_entity(SelectionTarget::Post, 7),
        PlacementSelection::for_entity(SelectionTarget::PostType, 5),
        PlacementSelection::for_entity(SelectionTarget::Category, 12),
    ];
    let locations = selections_to_locations(&selections);
    let recovered = locations_to_selections(&locations);
    assert_eq!(recovered, selections);
}

#[test]
fn unrecognized_rows_fall_back_to_a_page_selection() {
    let locations = vec![LocationRule::new(
        0,
        LocationParam::EntityType,
        RuleOperator::Equals,
        "category",
    )];
    let selections = locations_to_selections(&locations);
    assert_eq!(selections, vec![PlacementSelection::new(SelectionTarget::Page)]);
}

#[test]
fn rule_groups_recover_in_ascending_order() {
    // Rows stored out of order still group and sort by rule_group.
    let locations = vec![
        LocationRule::new(2, LocationParam::PostType, RuleOperator::Equals, "category"),
        LocationRule::new(0, LocationParam::PostType, RuleOperator::Equals, "post"),
        LocationRule::new(0, LocationParam::Post, RuleOperator::Equals, "7"),
    ];
    let selections = locations_to_selections(&locations);
    assert_eq!(
        selections,
        vec![
            PlacementSelection::for_entity(SelectionTarget::Post, 7),
            PlacementSelection::new(SelectionTarget::Category),
        ]
    );
}
