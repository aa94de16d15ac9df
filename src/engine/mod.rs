//! # Collection Engine
//!
//! Composes the route store, registered residents, and the truck simulator
//! behind one host-facing API. The host app owns the timer and the UI; the
//! engine owns every piece of state and hands back the notifications each
//! operation produced.
//!
//! ## Architecture
//!
//! - `RouteStore` - waste route seed data, keyed by id
//! - `TruckSimulator` - at most one active route-loop simulation
//! - per-resident `CycleFlags` and delivery latches
//!
//! Everything is single-threaded and deterministic: the same sequence of
//! operations and tick timestamps produces the same notifications.

pub mod route_store;

pub use route_store::RouteStore;

use std::collections::BTreeMap;

use log::info;

use crate::alerts::{evaluate, CycleFlags};
use crate::simulator::TruckSimulator;
use crate::{
    EcoAlertError, GeoPoint, Notification, NotificationSettings, OptionExt, Resident, Result,
    Severity, Truck,
};

/// Per-resident alert bookkeeping for the current route cycle.
#[derive(Debug, Clone, Copy, Default)]
struct ResidentCycle {
    flags: CycleFlags,
    /// "Already took my trash out" latch; suppresses alerts until the next
    /// cycle or an explicit reset.
    delivered: bool,
}

/// The engine behind the citizen app: routes, residents, one simulated truck.
#[derive(Debug, Default)]
pub struct CollectionEngine {
    routes: RouteStore,
    residents: BTreeMap<String, Resident>,
    cycles: BTreeMap<String, ResidentCycle>,
    simulator: Option<TruckSimulator>,
    next_notification_id: u64,
}

impl CollectionEngine {
    /// Create an empty engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine seeded with the Huancayo demo routes.
    pub fn with_demo_data() -> Self {
        let routes = RouteStore::with_routes(crate::demo::huancayo_routes())
            .expect("demo routes are non-empty");
        Self {
            routes,
            ..Self::default()
        }
    }

    // ========================================================================
    // Routes
    // ========================================================================

    /// Add a route to the store.
    pub fn add_route(&mut self, route: crate::WasteRoute) -> Result<()> {
        self.routes.add(route)
    }

    /// Access the route store.
    pub fn routes(&self) -> &RouteStore {
        &self.routes
    }

    // ========================================================================
    // Residents
    // ========================================================================

    /// Register a resident. The assigned route must exist, the home location
    /// must be a valid coordinate and the thresholds must ascend.
    pub fn register_resident(&mut self, resident: Resident) -> Result<()> {
        self.routes
            .get(&resident.route_id)
            .ok_or_unknown_route(&resident.route_id)?;
        if !resident.home.is_valid() {
            return Err(EcoAlertError::InvalidCoordinate {
                latitude: resident.home.latitude,
                longitude: resident.home.longitude,
            });
        }
        resident.settings.thresholds.validate()?;

        info!(
            "registered resident {} on route {}",
            resident.id, resident.route_id
        );
        self.cycles
            .insert(resident.id.clone(), ResidentCycle::default());
        self.residents.insert(resident.id.clone(), resident);
        Ok(())
    }

    /// Get a resident by id.
    pub fn resident(&self, id: &str) -> Option<&Resident> {
        self.residents.get(id)
    }

    /// Number of registered residents.
    pub fn resident_count(&self) -> usize {
        self.residents.len()
    }

    /// Update a resident's saved home location.
    pub fn update_home_location(
        &mut self,
        resident_id: &str,
        home: GeoPoint,
        address: &str,
        now_ms: i64,
    ) -> Result<Notification> {
        if !home.is_valid() {
            return Err(EcoAlertError::InvalidCoordinate {
                latitude: home.latitude,
                longitude: home.longitude,
            });
        }
        let resident = self
            .residents
            .get_mut(resident_id)
            .ok_or_unknown_resident(resident_id)?;
        resident.home = home;
        resident.address = address.to_string();

        Ok(self.notification(
            "Location updated",
            format!("New address: {address}"),
            Severity::Success,
            now_ms,
        ))
    }

    /// Update a resident's notification settings. Threshold values are
    /// sanitized the way the settings form does: out-of-range input falls
    /// back to the 1000/500/50 defaults.
    pub fn update_settings(
        &mut self,
        resident_id: &str,
        settings: NotificationSettings,
        now_ms: i64,
    ) -> Result<Notification> {
        let resident = self
            .residents
            .get_mut(resident_id)
            .ok_or_unknown_resident(resident_id)?;
        resident.settings = NotificationSettings {
            thresholds: settings.thresholds.sanitized(),
            ..settings
        };

        Ok(self.notification(
            "Settings saved",
            "Preferences and zone updated.".to_string(),
            Severity::Success,
            now_ms,
        ))
    }

    /// Move a resident to a different route/zone. The simulated truck is
    /// re-seeded at the new route's first waypoint, paused, and all cycle
    /// and delivery state for the resident is cleared.
    pub fn assign_route(&mut self, resident_id: &str, route_id: &str, now_ms: i64) -> Result<()> {
        let route = self
            .routes
            .get(route_id)
            .ok_or_unknown_route(route_id)?
            .clone();
        let resident = self
            .residents
            .get_mut(resident_id)
            .ok_or_unknown_resident(resident_id)?;
        resident.route_id = route_id.to_string();
        self.cycles
            .insert(resident_id.to_string(), ResidentCycle::default());

        self.simulator = Some(TruckSimulator::new(
            route,
            "t-sim",
            "Assigned driver",
            now_ms,
        )?);
        info!("resident {resident_id} reassigned to route {route_id}");
        Ok(())
    }

    // ========================================================================
    // Collection run
    // ========================================================================

    /// Start (or resume) the collection run on a route.
    ///
    /// Seeds a ghost truck at the route's first waypoint when no simulator
    /// exists for that route yet. Emits "Route started" once per
    /// transmission.
    pub fn start_collection(&mut self, route_id: &str, now_ms: i64) -> Result<Vec<Notification>> {
        let needs_seed = match &self.simulator {
            Some(sim) => sim.route().id != route_id,
            None => true,
        };
        if needs_seed {
            let route = self
                .routes
                .get(route_id)
                .ok_or_unknown_route(route_id)?
                .clone();
            self.simulator = Some(TruckSimulator::new(
                route,
                "t-sim",
                "Assigned driver",
                now_ms,
            )?);
        }

        let sim = self.simulator.as_mut().expect("simulator seeded above");
        let announce = sim.start(now_ms);
        let route_name = sim.route().name.clone();

        let mut out = Vec::new();
        if announce {
            out.push(self.notification(
                "Route started",
                format!("The truck on {route_name} has begun its run."),
                Severity::Info,
                now_ms,
            ));
        }
        Ok(out)
    }

    /// Pause the collection run. A later start re-announces the route.
    pub fn stop_collection(&mut self) {
        if let Some(sim) = self.simulator.as_mut() {
            sim.stop();
        }
    }

    /// Whether the simulated truck is currently moving.
    pub fn is_running(&self) -> bool {
        self.simulator
            .as_ref()
            .is_some_and(|s| s.phase() == crate::SimulatorPhase::Running)
    }

    /// The simulated truck, if a run has been seeded.
    pub fn truck(&self) -> Option<&Truck> {
        self.simulator.as_ref().map(|s| s.truck())
    }

    /// Resident-to-truck distance in meters, `None` when no truck is active
    /// or the truck covers a different route.
    pub fn distance_to_truck(&self, resident_id: &str) -> Result<Option<f64>> {
        let resident = self
            .residents
            .get(resident_id)
            .ok_or_unknown_resident(resident_id)?;
        let Some(truck) = self.truck() else {
            return Ok(None);
        };
        if truck.route_id != resident.route_id {
            return Ok(None);
        }
        crate::geo_utils::distance_between(&resident.home, &truck.location).map(Some)
    }

    /// Resident confirms their trash was handed over: the truck stops and
    /// all alerts stay silenced until the next cycle or an explicit reset.
    pub fn confirm_delivery(&mut self, resident_id: &str, now_ms: i64) -> Result<Notification> {
        let cycle = self
            .cycles
            .get_mut(resident_id)
            .ok_or_unknown_resident(resident_id)?;
        cycle.delivered = true;
        if let Some(sim) = self.simulator.as_mut() {
            sim.confirm_delivery();
        }

        Ok(self.notification(
            "Trash delivered!",
            "The truck has stopped and alerts are silenced.".to_string(),
            Severity::Success,
            now_ms,
        ))
    }

    /// Resident re-enables alerts after a confirmation; the simulation
    /// restarts immediately.
    pub fn reset_delivery(&mut self, resident_id: &str, now_ms: i64) -> Result<Vec<Notification>> {
        let cycle = self
            .cycles
            .get_mut(resident_id)
            .ok_or_unknown_resident(resident_id)?;
        cycle.delivered = false;

        let mut out = vec![self.notification(
            "Simulation restarted",
            "Alerts reactivated.".to_string(),
            Severity::Info,
            now_ms,
        )];

        if let Some(sim) = self.simulator.as_mut() {
            sim.reset_delivery();
            let announce = sim.start(now_ms);
            let route_name = sim.route().name.clone();
            if announce {
                out.push(self.notification(
                    "Route started",
                    format!("The truck on {route_name} has begun its run."),
                    Severity::Info,
                    now_ms,
                ));
            }
        }
        Ok(out)
    }

    /// Advance the simulation one waypoint and evaluate proximity alerts for
    /// every resident assigned to the truck's route.
    ///
    /// Called by the host timer (every ~3 s). A cycle wrap resets all
    /// per-cycle alert flags and delivery latches before evaluation.
    pub fn tick(&mut self, now_ms: i64) -> Result<Vec<Notification>> {
        let Some(sim) = self.simulator.as_mut() else {
            return Ok(Vec::new());
        };
        let Some(outcome) = sim.tick(now_ms) else {
            return Ok(Vec::new());
        };
        if outcome.wrapped {
            for cycle in self.cycles.values_mut() {
                cycle.flags.reset();
                cycle.delivered = false;
            }
        }

        let truck = sim.truck().clone();
        let mut fired = Vec::new();
        for (id, resident) in &self.residents {
            let cycle = self.cycles.entry(id.clone()).or_default();
            if let Some(alert) = evaluate(resident, &truck, &mut cycle.flags, cycle.delivered)? {
                fired.push(alert);
            }
        }

        let mut out = Vec::with_capacity(fired.len());
        for alert in fired {
            let severity = alert.severity();
            let title = alert.title();
            let message = alert.message();
            out.push(self.notification(title, message, severity, now_ms));
        }
        Ok(out)
    }

    fn notification(
        &mut self,
        title: &str,
        message: String,
        severity: Severity,
        now_ms: i64,
    ) -> Notification {
        self.next_notification_id += 1;
        Notification {
            id: self.next_notification_id,
            title: title.to_string(),
            message,
            severity,
            timestamp_ms: now_ms,
        }
    }
}
