//! Tests for the route-loop truck simulator

use ecoalert::simulator::{SimulatorPhase, TruckSimulator};
use ecoalert::{EcoAlertError, GeoPoint, WasteRoute};

fn three_point_route() -> WasteRoute {
    WasteRoute {
        id: "test".to_string(),
        name: "Test route".to_string(),
        description: "three waypoints".to_string(),
        path: vec![
            GeoPoint::new(-12.05, -75.18),
            GeoPoint::new(-12.06, -75.19),
            GeoPoint::new(-12.07, -75.20),
        ],
    }
}

fn sim() -> TruckSimulator {
    TruckSimulator::new(three_point_route(), "t-1", "Test driver", 0).unwrap()
}

#[test]
fn test_empty_route_rejected() {
    let route = WasteRoute {
        id: "empty".to_string(),
        name: "Empty".to_string(),
        description: String::new(),
        path: vec![],
    };
    assert!(matches!(
        TruckSimulator::new(route, "t-1", "d", 0),
        Err(EcoAlertError::EmptyRoute { .. })
    ));
}

#[test]
fn test_truck_seeded_at_first_waypoint() {
    let sim = sim();
    assert_eq!(sim.phase(), SimulatorPhase::Stopped);
    assert_eq!(sim.path_index(), 0);
    assert_eq!(sim.truck().location, three_point_route().path[0]);
    assert!(!sim.truck().is_moving);
}

#[test]
fn test_start_announces_once_per_transmission() {
    let mut sim = sim();
    assert!(sim.start(0));
    // Starting again while running does not re-announce
    assert!(!sim.start(1_000));

    // A stop clears the announcement latch: the next start re-announces
    sim.stop();
    assert!(sim.start(2_000));
}

#[test]
fn test_tick_while_stopped_is_noop() {
    let mut sim = sim();
    assert!(sim.tick(0).is_none());
    assert_eq!(sim.path_index(), 0);
}

#[test]
fn test_tick_advances_to_next_waypoint() {
    let mut sim = sim();
    sim.start(0);

    let outcome = sim.tick(3_000).unwrap();
    assert_eq!(outcome.path_index, 1);
    assert!(!outcome.wrapped);
    assert_eq!(sim.truck().location, three_point_route().path[1]);
    assert_eq!(sim.truck().last_update_ms, 3_000);
}

#[test]
fn test_wrap_past_last_waypoint() {
    let mut sim = sim();
    sim.start(0);

    assert_eq!(sim.tick(1).unwrap().path_index, 1);
    assert_eq!(sim.tick(2).unwrap().path_index, 2);

    let wrap = sim.tick(3).unwrap();
    assert!(wrap.wrapped);
    assert_eq!(wrap.path_index, 0);
    assert_eq!(sim.truck().location, three_point_route().path[0]);
}

#[test]
fn test_wrap_clears_delivery_latch() {
    let mut sim = sim();
    sim.start(0);
    sim.tick(1);

    sim.confirm_delivery();
    assert!(sim.delivery_confirmed());
    assert_eq!(sim.phase(), SimulatorPhase::Stopped);

    // Resume and drive past the end of the path
    sim.start(2);
    sim.tick(3); // index 2
    let wrap = sim.tick(4).unwrap();
    assert!(wrap.wrapped);
    assert!(!sim.delivery_confirmed());
}

#[test]
fn test_confirm_delivery_stops_truck() {
    let mut sim = sim();
    sim.start(0);
    sim.confirm_delivery();

    assert_eq!(sim.phase(), SimulatorPhase::Stopped);
    assert!(!sim.truck().is_moving);
    assert!(sim.tick(1).is_none());

    sim.reset_delivery();
    assert!(!sim.delivery_confirmed());
}

#[test]
fn test_position_is_always_a_route_waypoint() {
    let route = three_point_route();
    let mut sim = sim();
    sim.start(0);

    for t in 0..10 {
        sim.tick(t);
        assert!(route.path.contains(&sim.truck().location));
    }
}
