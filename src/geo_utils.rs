//! Geographic utilities: great-circle distance, path length, bounds and
//! center calculations.

use crate::{Bounds, EcoAlertError, GeoPoint, Result};

/// Earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Calculate the haversine distance between two points in meters.
///
/// Symmetric, and exactly zero for identical points. Input is assumed valid;
/// use [`distance_between`] for untrusted coordinates.
pub fn haversine_distance(p1: &GeoPoint, p2: &GeoPoint) -> f64 {
    if p1 == p2 {
        return 0.0;
    }

    let lat1 = p1.latitude.to_radians();
    let lat2 = p2.latitude.to_radians();
    let dlat = (p2.latitude - p1.latitude).to_radians();
    let dlng = (p2.longitude - p1.longitude).to_radians();

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

/// Checked distance between two points in meters.
///
/// Fails fast with [`EcoAlertError::InvalidCoordinate`] when either point is
/// NaN, infinite or out of range, instead of silently propagating NaN into
/// the alert engine.
pub fn distance_between(p1: &GeoPoint, p2: &GeoPoint) -> Result<f64> {
    for p in [p1, p2] {
        if !p.is_valid() {
            return Err(EcoAlertError::InvalidCoordinate {
                latitude: p.latitude,
                longitude: p.longitude,
            });
        }
    }
    Ok(haversine_distance(p1, p2))
}

/// Total length of a waypoint path in meters.
pub fn path_distance(points: &[GeoPoint]) -> f64 {
    points
        .windows(2)
        .map(|w| haversine_distance(&w[0], &w[1]))
        .sum()
}

/// Compute the bounding box of a track. Returns a degenerate box at the
/// origin for an empty track.
pub fn compute_bounds(points: &[GeoPoint]) -> Bounds {
    Bounds::from_points(points).unwrap_or(Bounds {
        min_lat: 0.0,
        max_lat: 0.0,
        min_lng: 0.0,
        max_lng: 0.0,
    })
}

/// Compute the center of a track (bounding-box center).
pub fn compute_center(points: &[GeoPoint]) -> GeoPoint {
    compute_bounds(points).center()
}

/// Convert a distance in meters to degrees of longitude at a given latitude.
/// Useful for sizing map viewports around a route.
pub fn meters_to_degrees(meters: f64, latitude: f64) -> f64 {
    let meters_per_degree = 111_320.0 * latitude.to_radians().cos();
    meters / meters_per_degree
}
