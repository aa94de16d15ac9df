//! # EcoAlert Core
//!
//! Portable core of the EcoAlert citizen app: tracks a municipal waste truck
//! along its collection route and raises tiered proximity alerts for
//! residents.
//!
//! This library provides:
//! - Tiered proximity alerts (long range / medium range / arrival)
//! - A deterministic route-loop truck simulator driven by the host timer
//! - A mock authentication flow (phone + OTP + home location)
//! - The EcoTachos equipment catalog with shop redirect
//! - Demo seed data for the Huancayo pilot
//!
//! ## Features
//!
//! - **`ffi`** - Enable UniFFI bindings for mobile platforms (iOS/Android)
//!
//! ## Quick Start
//!
//! ```rust
//! use ecoalert::engine::CollectionEngine;
//!
//! let mut engine = CollectionEngine::with_demo_data();
//! let resident = ecoalert::demo::demo_resident("r1");
//! engine.register_resident(resident).unwrap();
//!
//! let started = engine.start_collection("r1", 0).unwrap();
//! assert_eq!(started[0].title, "Route started");
//!
//! // The host timer calls tick every few seconds; alerts fire as the
//! // truck approaches the resident's home.
//! let notifications = engine.tick(3_000).unwrap();
//! for n in &notifications {
//!     println!("[{:?}] {}: {}", n.severity, n.title, n.message);
//! }
//! ```

use serde::{Deserialize, Serialize};

// Unified error handling
pub mod error;
pub use error::{EcoAlertError, OptionExt, Result};

// Geographic utilities (distance, bounds, center calculations)
pub mod geo_utils;
pub use geo_utils::{distance_between, haversine_distance};

// Route-loop truck simulator
pub mod simulator;
pub use simulator::{SimulatorPhase, TickOutcome, TruckSimulator};

// Tiered proximity alert engine
pub mod alerts;
pub use alerts::{evaluate, AlertTier, CycleFlags, ProximityAlert};

// Notification model, sinks and device effects
pub mod notify;
pub use notify::{AlertEffects, LogSink, Notification, NotificationSink, Severity};

// Engine composing routes, residents and the simulator
pub mod engine;
pub use engine::{CollectionEngine, RouteStore};

// Mock authentication flow (phone + OTP + home location)
pub mod auth;
pub use auth::{AuthFlow, AuthMode, AuthStep, LocationProvider, Session};

// EcoTachos equipment catalog
pub mod catalog;
pub use catalog::{BinKind, Catalog, CatalogItem, SHOP_URL};

// Demo seed data (Huancayo pilot)
pub mod demo;

// FFI bindings for mobile platforms (iOS/Android)
#[cfg(feature = "ffi")]
pub mod ffi;

#[cfg(feature = "ffi")]
uniffi::setup_scaffolding!();

/// Initialize logging for Android (only used in FFI)
#[cfg(all(feature = "ffi", target_os = "android"))]
pub(crate) fn init_logging() {
    use android_logger::Config;
    use log::LevelFilter;

    android_logger::init_once(
        Config::default()
            .with_max_level(LevelFilter::Debug)
            .with_tag("EcoAlertRust"),
    );
}

#[cfg(all(feature = "ffi", not(target_os = "android")))]
pub(crate) fn init_logging() {
    // No-op on non-Android platforms
}

// ============================================================================
// Core Types
// ============================================================================

/// A geographic coordinate with latitude and longitude (degrees, WGS84).
///
/// # Example
/// ```
/// use ecoalert::GeoPoint;
/// let point = GeoPoint::new(-12.0681, -75.2106); // Huancayo
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a new point.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Check if the point has valid coordinates.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }
}

/// Bounding box for a route or set of points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl Bounds {
    /// Create bounds from points. Returns `None` for an empty slice.
    pub fn from_points(points: &[GeoPoint]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let mut min_lat = f64::MAX;
        let mut max_lat = f64::MIN;
        let mut min_lng = f64::MAX;
        let mut max_lng = f64::MIN;

        for p in points {
            min_lat = min_lat.min(p.latitude);
            max_lat = max_lat.max(p.latitude);
            min_lng = min_lng.min(p.longitude);
            max_lng = max_lng.max(p.longitude);
        }

        Some(Self {
            min_lat,
            max_lat,
            min_lng,
            max_lng,
        })
    }

    /// Get the center point of the bounds.
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        )
    }
}

/// A waste collection route: immutable seed data with an ordered waypoint path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct WasteRoute {
    /// Unique identifier (e.g. "r1")
    pub id: String,
    /// Display name (e.g. "Ruta 1: Palián - San Carlos")
    pub name: String,
    /// Short description of the covered zone
    pub description: String,
    /// Ordered waypoints the truck visits; the simulation loops over them
    pub path: Vec<GeoPoint>,
}

impl WasteRoute {
    /// Bounding box of the route path, for map viewport fitting.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(&self.path)
    }

    /// Total path length in meters.
    pub fn length_meters(&self) -> f64 {
        geo_utils::path_distance(&self.path)
    }
}

/// A collection truck. Mutated once per simulation tick; its position is
/// always one of the discrete waypoints of its route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct Truck {
    pub id: String,
    /// Route the truck is currently covering
    pub route_id: String,
    pub driver_name: String,
    pub location: GeoPoint,
    pub is_moving: bool,
    /// Unix timestamp in milliseconds of the last position update
    pub last_update_ms: i64,
}

/// Role of an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Enum))]
pub enum UserRole {
    Citizen,
    Driver,
    Admin,
}

/// Alert distance thresholds in meters, ascending: arrival < medium < long.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct AlertThresholds {
    /// "The truck is here" distance. Default: 50 m
    pub arrival: f64,
    /// "Get ready" distance. Default: 500 m
    pub medium: f64,
    /// "Entered your zone" distance. Default: 1000 m
    pub long: f64,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            arrival: 50.0,
            medium: 500.0,
            long: 1000.0,
        }
    }
}

impl AlertThresholds {
    /// Validate that the thresholds are positive and strictly ascending.
    pub fn validate(&self) -> Result<()> {
        let ascending = self.arrival > 0.0 && self.arrival < self.medium && self.medium < self.long;
        if ascending && self.long.is_finite() {
            Ok(())
        } else {
            Err(EcoAlertError::InvalidThresholds {
                arrival: self.arrival,
                medium: self.medium,
                long: self.long,
            })
        }
    }

    /// Sanitize user input the way the settings form does: any non-finite or
    /// non-positive value falls back to its default, and a non-ascending set
    /// falls back entirely.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let pick = |v: f64, d: f64| if v.is_finite() && v > 0.0 { v } else { d };
        let candidate = Self {
            arrival: pick(self.arrival, defaults.arrival),
            medium: pick(self.medium, defaults.medium),
            long: pick(self.long, defaults.long),
        };
        if candidate.validate().is_ok() {
            candidate
        } else {
            defaults
        }
    }
}

/// Per-resident notification preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct NotificationSettings {
    pub enabled: bool,
    pub thresholds: AlertThresholds,
    /// Hour of day (0-23) when the quiet window starts. Default: 23
    pub silent_hours_start: u8,
    /// Hour of day (0-23) when the quiet window ends. Default: 6
    pub silent_hours_end: u8,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            thresholds: AlertThresholds::default(),
            silent_hours_start: 23,
            silent_hours_end: 6,
        }
    }
}

impl NotificationSettings {
    /// Whether the given local hour falls inside the quiet window.
    /// A window wrapping midnight (e.g. 23-6) is handled.
    pub fn is_silent_hour(&self, hour: u8) -> bool {
        let (start, end) = (self.silent_hours_start, self.silent_hours_end);
        if start == end {
            return false;
        }
        if start < end {
            hour >= start && hour < end
        } else {
            hour >= start || hour < end
        }
    }
}

/// A registered resident (citizen role) with a saved home location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct Resident {
    pub id: String,
    pub name: String,
    pub phone_number: String,
    /// The route/zone this resident belongs to
    pub route_id: String,
    /// Home location: the alert reference point
    pub home: GeoPoint,
    /// Human-readable address label
    pub address: String,
    pub settings: NotificationSettings,
}
