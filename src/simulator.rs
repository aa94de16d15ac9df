//! Route-loop truck simulator.
//!
//! An explicit state machine with two phases, `Stopped` and `Running`,
//! advanced by a host-owned timer: the core has no threads or timers of its
//! own, so every run is deterministic given the same tick sequence. The
//! truck's position is always a discrete waypoint of the route path; there is
//! no interpolation between points.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{EcoAlertError, GeoPoint, Result, Truck, WasteRoute};

/// Suggested host timer interval between ticks.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 3_000;

/// Simulator phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Enum))]
pub enum SimulatorPhase {
    Stopped,
    Running,
}

/// Result of one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutcome {
    /// Waypoint index the truck moved to
    pub path_index: usize,
    /// New truck position
    pub location: GeoPoint,
    /// True when the index wrapped back to 0, starting a new cycle
    pub wrapped: bool,
}

/// Simulates a truck driving a route's waypoints on a fixed cadence, looping
/// back to the start at the end of the path.
#[derive(Debug, Clone)]
pub struct TruckSimulator {
    route: WasteRoute,
    truck: Truck,
    phase: SimulatorPhase,
    path_index: usize,
    /// "Route started" has been announced for the current transmission.
    /// Cleared by [`stop`](Self::stop), kept across cycle wraps: the alert
    /// means the driver began transmitting, not that a new lap began.
    movement_started: bool,
    /// Latched by an external delivery confirmation; cleared on cycle wrap
    /// or an explicit reset.
    delivery_confirmed: bool,
}

impl TruckSimulator {
    /// Seed a simulator with a ghost truck at the route's first waypoint.
    ///
    /// Fails with [`EcoAlertError::EmptyRoute`] for a route without
    /// waypoints.
    pub fn new(route: WasteRoute, truck_id: &str, driver_name: &str, now_ms: i64) -> Result<Self> {
        let start = *route.path.first().ok_or(EcoAlertError::EmptyRoute {
            route_id: route.id.clone(),
        })?;

        let truck = Truck {
            id: truck_id.to_string(),
            route_id: route.id.clone(),
            driver_name: driver_name.to_string(),
            location: start,
            is_moving: false,
            last_update_ms: now_ms,
        };

        Ok(Self {
            route,
            truck,
            phase: SimulatorPhase::Stopped,
            path_index: 0,
            movement_started: false,
            delivery_confirmed: false,
        })
    }

    pub fn phase(&self) -> SimulatorPhase {
        self.phase
    }

    pub fn truck(&self) -> &Truck {
        &self.truck
    }

    pub fn route(&self) -> &WasteRoute {
        &self.route
    }

    pub fn path_index(&self) -> usize {
        self.path_index
    }

    pub fn delivery_confirmed(&self) -> bool {
        self.delivery_confirmed
    }

    /// Transition `Stopped -> Running`.
    ///
    /// Returns `true` when this start should announce "route started": once
    /// per transmission, guarded by the `movement_started` latch.
    pub fn start(&mut self, now_ms: i64) -> bool {
        self.phase = SimulatorPhase::Running;
        self.truck.is_moving = true;
        self.truck.last_update_ms = now_ms;

        if self.movement_started {
            return false;
        }
        self.movement_started = true;
        debug!("simulator started on route {}", self.route.id);
        true
    }

    /// Transition `Running -> Stopped` and clear the started announcement so
    /// a later restart re-announces.
    pub fn stop(&mut self) {
        self.phase = SimulatorPhase::Stopped;
        self.truck.is_moving = false;
        self.movement_started = false;
        debug!("simulator stopped on route {}", self.route.id);
    }

    /// External "delivery confirmed" signal: stops the truck and suppresses
    /// further alerts until [`reset_delivery`](Self::reset_delivery) or the
    /// next cycle wrap.
    pub fn confirm_delivery(&mut self) {
        self.delivery_confirmed = true;
        self.stop();
    }

    /// Clear the delivery latch (the resident re-enabled alerts).
    pub fn reset_delivery(&mut self) {
        self.delivery_confirmed = false;
    }

    /// Advance one waypoint. Returns `None` while stopped.
    ///
    /// Past the last waypoint the index wraps to 0 and the outcome reports
    /// `wrapped`, which is the cue to reset all per-cycle alert flags; the
    /// wrap also clears the delivery latch for the next lap.
    pub fn tick(&mut self, now_ms: i64) -> Option<TickOutcome> {
        if self.phase != SimulatorPhase::Running {
            return None;
        }

        let mut next_index = self.path_index + 1;
        let mut wrapped = false;
        if next_index >= self.route.path.len() {
            next_index = 0;
            wrapped = true;
            self.delivery_confirmed = false;
            debug!("route {} cycle wrapped", self.route.id);
        }

        self.path_index = next_index;
        self.truck.location = self.route.path[next_index];
        self.truck.is_moving = true;
        self.truck.last_update_ms = now_ms;

        Some(TickOutcome {
            path_index: next_index,
            location: self.truck.location,
            wrapped,
        })
    }
}
