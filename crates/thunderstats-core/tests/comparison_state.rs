use thunderstats_core::compare::{ComparisonState, Slot};
use thunderstats_core::resolve::{Metric, PLACEHOLDER_IMAGE_URL};
use thunderstats_core::vehicle::{GameMode, VehicleRecord};

fn fighter(identifier: &str) -> VehicleRecord {
    VehicleRecord {
        identifier: identifier.to_string(),
        vehicle_type: Some("fighter".to_string()),
        realistic_br: Some(4.7),
        ..Default::default()
    }
}

fn tank(identifier: &str) -> VehicleRecord {
    VehicleRecord {
        identifier: identifier.to_string(),
        vehicle_type: Some("medium_tank".to_string()),
        realistic_br: Some(6.7),
        ..Default::default()
    }
}

#[test]
fn test_type_filter_change_deselects_stale_selection() {
    let catalog = vec![fighter("p_51d_30"), tank("m1_abrams")];
    let mut state = ComparisonState::new();

    let token = state.select(Slot::Left, Some("p_51d_30")).unwrap();
    state.apply_detail(token, Some(fighter("p_51d_30")));

    // Left slot holds an aircraft; switching any slot's type filter to
    // "Tank" must deselect it.
    state.set_type_filter(Slot::Right, "Tank", &catalog);

    assert_eq!(state.selected(Slot::Left), None);
    assert!(state.details(Slot::Left).is_none());
}

#[test]
fn test_type_filter_keeps_matching_selection() {
    let catalog = vec![fighter("p_51d_30"), tank("m1_abrams")];
    let mut state = ComparisonState::new();
    state.select(Slot::Right, Some("m1_abrams"));

    state.set_type_filter(Slot::Right, "Tank", &catalog);
    assert_eq!(state.selected(Slot::Right), Some("m1_abrams"));
}

#[test]
fn test_failed_detail_fetch_reports_sentinels() {
    let mut state = ComparisonState::new();
    let token = state.select(Slot::Left, Some("ghost_vehicle")).unwrap();

    // The fetch failed; the slot must report sentinels, not stale values.
    assert!(state.apply_detail(token, None));
    assert_eq!(state.image(Slot::Left), PLACEHOLDER_IMAGE_URL);
    assert_eq!(state.speed(Slot::Left), 0.0);
    assert_eq!(
        state
            .battle_rating(Slot::Left, GameMode::Realistic, false)
            .to_string(),
        "N/A"
    );
    assert_eq!(state.metric(Slot::Left, Metric::Mass), 0.0);
}

#[test]
fn test_failed_fetch_replaces_previous_details() {
    let mut state = ComparisonState::new();

    let first = state.select(Slot::Left, Some("m1_abrams")).unwrap();
    state.apply_detail(first, Some(tank("m1_abrams")));
    assert!(state.details(Slot::Left).is_some());

    // Re-selecting clears the old details before the new fetch resolves.
    let second = state.select(Slot::Left, Some("ghost_vehicle")).unwrap();
    assert!(state.details(Slot::Left).is_none());
    state.apply_detail(second, None);
    assert!(state.details(Slot::Left).is_none());
}

#[test]
fn test_stale_token_is_rejected() {
    let mut state = ComparisonState::new();
    let stale = state.select(Slot::Left, Some("t_34")).unwrap();
    let current = state.select(Slot::Left, Some("m1_abrams")).unwrap();

    assert!(!state.apply_detail(stale, Some(tank("t_34"))));
    assert!(state.details(Slot::Left).is_none());
    assert!(state.apply_detail(current, Some(tank("m1_abrams"))));
}

#[test]
fn test_deselection_invalidates_in_flight_fetch() {
    let mut state = ComparisonState::new();
    let token = state.select(Slot::Right, Some("t_34")).unwrap();

    // User clears the selection while the fetch is in flight.
    assert!(state.select(Slot::Right, None).is_none());
    assert!(!state.apply_detail(token, Some(tank("t_34"))));
    assert!(state.details(Slot::Right).is_none());
}

#[test]
fn test_slots_filter_independently() {
    let catalog = vec![fighter("p_51d_30"), tank("m1_abrams")];
    let mut state = ComparisonState::new();

    state.set_type_filter(Slot::Left, "Plane", &catalog);
    state.set_search(Slot::Right, "abrams");

    let left: Vec<&str> = state
        .visible(Slot::Left, &catalog)
        .iter()
        .map(|r| r.identifier.as_str())
        .collect();
    let right: Vec<&str> = state
        .visible(Slot::Right, &catalog)
        .iter()
        .map(|r| r.identifier.as_str())
        .collect();

    assert_eq!(left, vec!["p_51d_30"]);
    assert_eq!(right, vec!["m1_abrams"]);
}

#[test]
fn test_pairwise_radar_over_slots() {
    let mut state = ComparisonState::new();

    let mut light = tank("light");
    light.mass = Some(5_000.0);
    let mut heavy = tank("heavy");
    heavy.mass = Some(10_000.0);

    let a = state.select(Slot::Left, Some("light")).unwrap();
    state.apply_detail(a, Some(light));
    let b = state.select(Slot::Right, Some("heavy")).unwrap();
    state.apply_detail(b, Some(heavy));

    let (left, right) = state.radar_pairwise(&[Metric::Mass]);
    assert_eq!(left[0].normalized, 5.0);
    assert_eq!(right[0].normalized, 10.0);
}
