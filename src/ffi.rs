//! FFI bindings for mobile platforms (iOS/Android).
//!
//! UniFFI bindings exposing the core to Kotlin and Swift. Free functions are
//! prefixed with `ffi_` where they would collide with the internal API; the
//! stateful engine crosses the boundary as a Mutex-wrapped object so the
//! host can call it from its main thread.

use std::sync::{Arc, Mutex, MutexGuard};

use log::info;

use crate::engine::CollectionEngine;
use crate::{
    init_logging, AlertEffects, CatalogItem, EcoAlertError, GeoPoint, Notification,
    NotificationSettings, Resident, Truck, WasteRoute,
};

// ============================================================================
// Free Functions
// ============================================================================

/// Checked resident-to-truck distance in meters.
#[uniffi::export]
pub fn ffi_distance_between(p1: GeoPoint, p2: GeoPoint) -> Result<f64, EcoAlertError> {
    init_logging();
    crate::geo_utils::distance_between(&p1, &p2)
}

/// Default notification settings (1000/500/50 m, quiet 23-6).
#[uniffi::export]
pub fn default_settings() -> NotificationSettings {
    init_logging();
    info!("[EcoAlertRust] default_settings called - Rust is active!");
    NotificationSettings::default()
}

/// The Huancayo demo routes.
#[uniffi::export]
pub fn demo_routes() -> Vec<WasteRoute> {
    init_logging();
    crate::demo::huancayo_routes()
}

/// The demo location used when device GPS is unavailable.
#[uniffi::export]
pub fn demo_center() -> GeoPoint {
    crate::demo::DEFAULT_CENTER
}

/// Seeded EcoTachos catalog items.
#[uniffi::export]
pub fn catalog_items() -> Vec<CatalogItem> {
    init_logging();
    crate::demo::catalog_items()
}

/// External shop URL for the catalog CTA.
#[uniffi::export]
pub fn shop_url() -> String {
    crate::catalog::SHOP_URL.to_string()
}

/// Device feedback (sound/vibration) to pair with a notification, honoring
/// the resident's quiet hours.
#[uniffi::export]
pub fn alert_effects(
    notification: Notification,
    settings: NotificationSettings,
    local_hour: Option<u8>,
) -> AlertEffects {
    AlertEffects::for_notification(&notification, &settings, local_hour)
}

// ============================================================================
// Engine Object
// ============================================================================

/// Handle to a [`CollectionEngine`] shared with the host app.
#[derive(uniffi::Object)]
pub struct EngineHandle {
    inner: Mutex<CollectionEngine>,
}

impl EngineHandle {
    fn engine(&self) -> MutexGuard<'_, CollectionEngine> {
        // Single host thread; recover the guard even if a previous call
        // panicked mid-update.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[uniffi::export]
impl EngineHandle {
    /// Create an engine seeded with the Huancayo demo routes.
    #[uniffi::constructor]
    pub fn with_demo_data() -> Arc<Self> {
        init_logging();
        info!("[EcoAlertRust] engine created with demo data");
        Arc::new(Self {
            inner: Mutex::new(CollectionEngine::with_demo_data()),
        })
    }

    pub fn register_resident(&self, resident: Resident) -> Result<(), EcoAlertError> {
        init_logging();
        info!("[EcoAlertRust] register_resident {}", resident.id);
        self.engine().register_resident(resident)
    }

    pub fn update_home_location(
        &self,
        resident_id: String,
        home: GeoPoint,
        address: String,
        now_ms: i64,
    ) -> Result<Notification, EcoAlertError> {
        self.engine()
            .update_home_location(&resident_id, home, &address, now_ms)
    }

    pub fn update_settings(
        &self,
        resident_id: String,
        settings: NotificationSettings,
        now_ms: i64,
    ) -> Result<Notification, EcoAlertError> {
        self.engine().update_settings(&resident_id, settings, now_ms)
    }

    pub fn assign_route(
        &self,
        resident_id: String,
        route_id: String,
        now_ms: i64,
    ) -> Result<(), EcoAlertError> {
        self.engine().assign_route(&resident_id, &route_id, now_ms)
    }

    pub fn start_collection(
        &self,
        route_id: String,
        now_ms: i64,
    ) -> Result<Vec<Notification>, EcoAlertError> {
        init_logging();
        info!("[EcoAlertRust] start_collection on {route_id}");
        self.engine().start_collection(&route_id, now_ms)
    }

    pub fn stop_collection(&self) {
        self.engine().stop_collection();
    }

    pub fn confirm_delivery(
        &self,
        resident_id: String,
        now_ms: i64,
    ) -> Result<Notification, EcoAlertError> {
        self.engine().confirm_delivery(&resident_id, now_ms)
    }

    pub fn reset_delivery(
        &self,
        resident_id: String,
        now_ms: i64,
    ) -> Result<Vec<Notification>, EcoAlertError> {
        self.engine().reset_delivery(&resident_id, now_ms)
    }

    /// Host timer entry point: advance the truck one waypoint and collect
    /// the notifications that fired.
    pub fn tick(&self, now_ms: i64) -> Result<Vec<Notification>, EcoAlertError> {
        self.engine().tick(now_ms)
    }

    pub fn truck(&self) -> Option<Truck> {
        self.engine().truck().cloned()
    }

    pub fn is_running(&self) -> bool {
        self.engine().is_running()
    }

    pub fn distance_to_truck(&self, resident_id: String) -> Result<Option<f64>, EcoAlertError> {
        self.engine().distance_to_truck(&resident_id)
    }
}
