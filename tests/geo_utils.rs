//! Tests for geo_utils module

use ecoalert::geo_utils::*;
use ecoalert::{EcoAlertError, GeoPoint};

fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

#[test]
fn test_haversine_distance_same_point() {
    let p = GeoPoint::new(-12.0681, -75.2106);
    assert_eq!(haversine_distance(&p, &p), 0.0);
}

#[test]
fn test_haversine_distance_symmetric() {
    let a = GeoPoint::new(-12.0681, -75.2106);
    let b = GeoPoint::new(-12.0505, -75.1850);
    assert_eq!(haversine_distance(&a, &b), haversine_distance(&b, &a));
}

#[test]
fn test_haversine_distance_known_value() {
    // London to Paris is approximately 344 km
    let london = GeoPoint::new(51.5074, -0.1278);
    let paris = GeoPoint::new(48.8566, 2.3522);
    let dist = haversine_distance(&london, &paris);
    assert!(approx_eq(dist, 343_560.0, 5000.0)); // Within 5km
}

#[test]
fn test_haversine_distance_across_huancayo() {
    // Palián to Parque Constitución is a few kilometers
    let palian = GeoPoint::new(-12.0505, -75.1850);
    let centro = GeoPoint::new(-12.0681, -75.2106);
    let dist = haversine_distance(&palian, &centro);
    assert!(dist > 2_000.0 && dist < 5_000.0);
}

#[test]
fn test_distance_between_valid() {
    let a = GeoPoint::new(-12.0681, -75.2106);
    let b = GeoPoint::new(-12.0695, -75.2118);
    let dist = distance_between(&a, &b).unwrap();
    assert!(dist > 0.0);
}

#[test]
fn test_distance_between_rejects_nan() {
    let a = GeoPoint::new(f64::NAN, -75.2106);
    let b = GeoPoint::new(-12.0681, -75.2106);
    assert!(matches!(
        distance_between(&a, &b),
        Err(EcoAlertError::InvalidCoordinate { .. })
    ));
    // Order doesn't matter
    assert!(distance_between(&b, &a).is_err());
}

#[test]
fn test_distance_between_rejects_out_of_range() {
    let a = GeoPoint::new(91.0, 0.0);
    let b = GeoPoint::new(0.0, 0.0);
    assert!(matches!(
        distance_between(&a, &b),
        Err(EcoAlertError::InvalidCoordinate { latitude, .. }) if latitude == 91.0
    ));
}

#[test]
fn test_path_distance() {
    let path = vec![
        GeoPoint::new(-12.06, -75.21),
        GeoPoint::new(-12.07, -75.21),
        GeoPoint::new(-12.08, -75.21),
    ];
    let total = path_distance(&path);
    let leg1 = haversine_distance(&path[0], &path[1]);
    let leg2 = haversine_distance(&path[1], &path[2]);
    assert!(approx_eq(total, leg1 + leg2, 0.001));
}

#[test]
fn test_path_distance_short_paths() {
    assert_eq!(path_distance(&[]), 0.0);
    assert_eq!(path_distance(&[GeoPoint::new(-12.06, -75.21)]), 0.0);
}

#[test]
fn test_compute_bounds() {
    let track = vec![
        GeoPoint::new(-12.08, -75.22),
        GeoPoint::new(-12.06, -75.20),
        GeoPoint::new(-12.07, -75.21),
    ];
    let bounds = compute_bounds(&track);
    assert_eq!(bounds.min_lat, -12.08);
    assert_eq!(bounds.max_lat, -12.06);
    assert_eq!(bounds.min_lng, -75.22);
    assert_eq!(bounds.max_lng, -75.20);
}

#[test]
fn test_compute_center() {
    let track = vec![GeoPoint::new(-12.08, -75.22), GeoPoint::new(-12.06, -75.20)];
    let center = compute_center(&track);
    assert!(approx_eq(center.latitude, -12.07, 0.001));
    assert!(approx_eq(center.longitude, -75.21, 0.001));
}

#[test]
fn test_compute_center_empty() {
    let empty: Vec<GeoPoint> = vec![];
    let center = compute_center(&empty);
    assert_eq!(center.latitude, 0.0);
    assert_eq!(center.longitude, 0.0);
}

#[test]
fn test_meters_to_degrees() {
    // At the equator, 111.32 km is 1 degree
    let deg = meters_to_degrees(111_320.0, 0.0);
    assert!(approx_eq(deg, 1.0, 0.01));

    // At higher latitude, the same distance spans more degrees
    let deg_45 = meters_to_degrees(111_320.0, 45.0);
    assert!(deg_45 > 1.0);
}
