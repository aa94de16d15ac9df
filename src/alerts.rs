//! Tiered proximity alert engine.
//!
//! Evaluated on every truck position change: compares the resident-to-truck
//! distance against the resident's three ascending thresholds and fires at
//! most one alert per tier per route cycle. Arrival wins over medium, medium
//! over long; the tiers are mutually exclusive within a single evaluation.

use serde::{Deserialize, Serialize};

use crate::geo_utils::distance_between;
use crate::{Resident, Result, Severity, Truck};

/// Alert severity tier based on distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Enum))]
pub enum AlertTier {
    LongRange,
    MediumRange,
    Arrival,
}

/// Per-cycle alert bookkeeping: each tier fires at most once per traversal of
/// the route path. Reset whenever the truck wraps back to waypoint 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct CycleFlags {
    pub long_range_sent: bool,
    pub medium_range_sent: bool,
    pub arrival_sent: bool,
}

impl CycleFlags {
    /// Clear all tier flags for a new cycle.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn sent(&self, tier: AlertTier) -> bool {
        match tier {
            AlertTier::LongRange => self.long_range_sent,
            AlertTier::MediumRange => self.medium_range_sent,
            AlertTier::Arrival => self.arrival_sent,
        }
    }

    fn mark_sent(&mut self, tier: AlertTier) {
        match tier {
            AlertTier::LongRange => self.long_range_sent = true,
            AlertTier::MediumRange => self.medium_range_sent = true,
            AlertTier::Arrival => self.arrival_sent = true,
        }
    }
}

/// A fired proximity alert.
#[derive(Debug, Clone, PartialEq)]
pub struct ProximityAlert {
    pub tier: AlertTier,
    /// Resident-to-truck distance at evaluation time, in meters
    pub distance_meters: f64,
}

impl ProximityAlert {
    pub fn title(&self) -> &'static str {
        match self.tier {
            AlertTier::Arrival => "The truck is here!",
            AlertTier::MediumRange => "Truck approaching",
            AlertTier::LongRange => "Heads up",
        }
    }

    pub fn message(&self) -> String {
        let meters = self.distance_meters.round() as i64;
        match self.tier {
            AlertTier::Arrival => {
                format!("The collector is less than {meters}m away. Take out your trash!")
            }
            AlertTier::MediumRange => format!("It is {meters}m away. Get ready."),
            AlertTier::LongRange => format!("The truck entered your zone ({meters}m)."),
        }
    }

    pub fn severity(&self) -> Severity {
        match self.tier {
            AlertTier::Arrival => Severity::Success,
            AlertTier::MediumRange => Severity::Warning,
            AlertTier::LongRange => Severity::Info,
        }
    }
}

/// Evaluate the alert state machine for one resident against the current
/// truck position.
///
/// Returns `Ok(None)` when nothing fires: notifications disabled, the truck
/// is covering a different route, delivery was already confirmed this cycle,
/// the matching tier already fired, or the truck is simply too far away.
/// On a fire, the corresponding flag in `flags` is marked.
///
/// # Example
/// ```
/// use ecoalert::alerts::{evaluate, AlertTier, CycleFlags};
/// use ecoalert::demo;
///
/// let resident = demo::demo_resident("r1");
/// let mut truck = demo::demo_truck("r1");
/// truck.location = resident.home; // distance 0 -> arrival
///
/// let mut flags = CycleFlags::default();
/// let alert = evaluate(&resident, &truck, &mut flags, false).unwrap().unwrap();
/// assert_eq!(alert.tier, AlertTier::Arrival);
/// assert!(flags.arrival_sent);
/// ```
pub fn evaluate(
    resident: &Resident,
    truck: &Truck,
    flags: &mut CycleFlags,
    delivery_confirmed: bool,
) -> Result<Option<ProximityAlert>> {
    if delivery_confirmed || !resident.settings.enabled || truck.route_id != resident.route_id {
        return Ok(None);
    }

    let distance = distance_between(&resident.home, &truck.location)?;
    let t = &resident.settings.thresholds;

    let tier = if distance <= t.arrival {
        AlertTier::Arrival
    } else if distance <= t.medium {
        AlertTier::MediumRange
    } else if distance <= t.long {
        AlertTier::LongRange
    } else {
        return Ok(None);
    };

    if flags.sent(tier) {
        return Ok(None);
    }
    flags.mark_sent(tier);

    Ok(Some(ProximityAlert {
        tier,
        distance_meters: distance,
    }))
}
