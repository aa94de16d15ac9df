//! Tests for the tiered proximity alert engine

use ecoalert::alerts::{evaluate, AlertTier, CycleFlags};
use ecoalert::demo::DEFAULT_CENTER;
use ecoalert::{GeoPoint, Resident, Severity, Truck};

/// Meters per degree of latitude.
const METERS_PER_DEG_LAT: f64 = 111_194.93;

/// A point the given number of meters due north of the demo center.
fn north_of_home(meters: f64) -> GeoPoint {
    GeoPoint::new(
        DEFAULT_CENTER.latitude + meters / METERS_PER_DEG_LAT,
        DEFAULT_CENTER.longitude,
    )
}

fn resident() -> Resident {
    ecoalert::demo::demo_resident("r1")
}

fn truck_at(meters_from_home: f64) -> Truck {
    Truck {
        id: "t-1".to_string(),
        route_id: "r1".to_string(),
        driver_name: "d".to_string(),
        location: north_of_home(meters_from_home),
        is_moving: true,
        last_update_ms: 0,
    }
}

#[test]
fn test_arrival_fires_inside_arrival_threshold() {
    let mut flags = CycleFlags::default();
    let alert = evaluate(&resident(), &truck_at(40.0), &mut flags, false)
        .unwrap()
        .unwrap();

    assert_eq!(alert.tier, AlertTier::Arrival);
    assert_eq!(alert.severity(), Severity::Success);
    assert!(flags.arrival_sent);
    assert!(!flags.medium_range_sent);
    assert!(!flags.long_range_sent);
}

#[test]
fn test_medium_fires_between_arrival_and_medium() {
    let mut flags = CycleFlags::default();
    let alert = evaluate(&resident(), &truck_at(300.0), &mut flags, false)
        .unwrap()
        .unwrap();

    assert_eq!(alert.tier, AlertTier::MediumRange);
    assert_eq!(alert.severity(), Severity::Warning);
    assert!(flags.medium_range_sent);
    assert!(!flags.arrival_sent);
}

#[test]
fn test_long_fires_between_medium_and_long() {
    let mut flags = CycleFlags::default();
    let alert = evaluate(&resident(), &truck_at(600.0), &mut flags, false)
        .unwrap()
        .unwrap();

    assert_eq!(alert.tier, AlertTier::LongRange);
    assert_eq!(alert.severity(), Severity::Info);
}

#[test]
fn test_nothing_fires_beyond_long_threshold() {
    let mut flags = CycleFlags::default();
    let alert = evaluate(&resident(), &truck_at(1500.0), &mut flags, false).unwrap();
    assert!(alert.is_none());
    assert_eq!(flags, CycleFlags::default());
}

#[test]
fn test_each_tier_fires_at_most_once_per_cycle() {
    let mut flags = CycleFlags::default();
    assert!(evaluate(&resident(), &truck_at(600.0), &mut flags, false)
        .unwrap()
        .is_some());
    // Same tier again this cycle: silent
    assert!(evaluate(&resident(), &truck_at(700.0), &mut flags, false)
        .unwrap()
        .is_none());

    // A new cycle resets the bookkeeping
    flags.reset();
    assert!(evaluate(&resident(), &truck_at(600.0), &mut flags, false)
        .unwrap()
        .is_some());
}

#[test]
fn test_tiers_fire_in_approach_order() {
    let mut flags = CycleFlags::default();
    let mut tiers = Vec::new();
    for meters in [1200.0, 900.0, 400.0, 30.0] {
        if let Some(alert) = evaluate(&resident(), &truck_at(meters), &mut flags, false).unwrap() {
            tiers.push(alert.tier);
        }
    }
    assert_eq!(
        tiers,
        vec![AlertTier::LongRange, AlertTier::MediumRange, AlertTier::Arrival]
    );
    assert!(flags.long_range_sent && flags.medium_range_sent && flags.arrival_sent);
}

#[test]
fn test_disabled_notifications_suppress_alerts() {
    let mut r = resident();
    r.settings.enabled = false;
    let mut flags = CycleFlags::default();
    assert!(evaluate(&r, &truck_at(30.0), &mut flags, false)
        .unwrap()
        .is_none());
}

#[test]
fn test_truck_on_other_route_is_ignored() {
    let mut truck = truck_at(30.0);
    truck.route_id = "r2".to_string();
    let mut flags = CycleFlags::default();
    assert!(evaluate(&resident(), &truck, &mut flags, false)
        .unwrap()
        .is_none());
}

#[test]
fn test_confirmed_delivery_suppresses_alerts() {
    let mut flags = CycleFlags::default();
    assert!(evaluate(&resident(), &truck_at(30.0), &mut flags, true)
        .unwrap()
        .is_none());
    // No bookkeeping happens while suppressed
    assert!(!flags.arrival_sent);
}

#[test]
fn test_invalid_home_fails_fast() {
    let mut r = resident();
    r.home = GeoPoint::new(f64::NAN, -75.2106);
    let mut flags = CycleFlags::default();
    assert!(evaluate(&r, &truck_at(30.0), &mut flags, false).is_err());
}

#[test]
fn test_alert_copy_includes_rounded_distance() {
    let mut flags = CycleFlags::default();
    let alert = evaluate(&resident(), &truck_at(300.0), &mut flags, false)
        .unwrap()
        .unwrap();
    assert_eq!(alert.title(), "Truck approaching");
    assert!(alert.message().contains("300m"));
}
