//! Unified error handling for the EcoAlert core.
//!
//! Seed data is trusted, so most operations are infallible; the errors here
//! cover bad user input (auth forms, threshold settings), lookups of unknown
//! ids, and the one consequential runtime failure: an unavailable device
//! location provider.

use thiserror::Error;

/// Errors produced by the EcoAlert core.
#[derive(Debug, Clone, PartialEq, Error)]
#[cfg_attr(feature = "ffi", derive(uniffi::Error))]
#[cfg_attr(feature = "ffi", uniffi(flat_error))]
pub enum EcoAlertError {
    /// A coordinate was NaN, infinite or out of range. Distance math fails
    /// fast instead of silently producing NaN.
    #[error("invalid coordinate: lat {latitude}, lng {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    /// A route was defined without waypoints.
    #[error("route '{route_id}' has an empty waypoint path")]
    EmptyRoute { route_id: String },

    /// A route id was not found in the store.
    #[error("unknown route '{route_id}'")]
    UnknownRoute { route_id: String },

    /// A resident id was not found in the engine.
    #[error("unknown resident '{resident_id}'")]
    UnknownResident { resident_id: String },

    /// Thresholds must satisfy 0 < arrival < medium < long.
    #[error(
        "alert thresholds must ascend: arrival {arrival}m < medium {medium}m < long {long}m"
    )]
    InvalidThresholds { arrival: f64, medium: f64, long: f64 },

    /// The device location provider failed; callers fall back to the demo
    /// center rather than crash the alert flow.
    #[error("location unavailable: {reason}")]
    LocationUnavailable { reason: String },

    // --- Auth form validation ---
    #[error("name is required")]
    MissingName,

    #[error("phone number must have at least 9 digits (got {digits})")]
    InvalidPhone { digits: u32 },

    #[error("password must have at least 4 characters")]
    WeakPassword,

    #[error("passwords do not match")]
    PasswordMismatch,

    #[error("select a route first")]
    RouteNotSelected,

    #[error("verification code does not match")]
    InvalidOtp,

    /// An auth transition was attempted from the wrong step.
    #[error("auth flow is not at the '{expected}' step")]
    WrongAuthStep { expected: String },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, EcoAlertError>;

/// Extension trait for ergonomic `Option -> Result` conversion on lookups.
pub trait OptionExt<T> {
    /// Convert `None` into [`EcoAlertError::UnknownRoute`].
    fn ok_or_unknown_route(self, route_id: &str) -> Result<T>;

    /// Convert `None` into [`EcoAlertError::UnknownResident`].
    fn ok_or_unknown_resident(self, resident_id: &str) -> Result<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_unknown_route(self, route_id: &str) -> Result<T> {
        self.ok_or_else(|| EcoAlertError::UnknownRoute {
            route_id: route_id.to_string(),
        })
    }

    fn ok_or_unknown_resident(self, resident_id: &str) -> Result<T> {
        self.ok_or_else(|| EcoAlertError::UnknownResident {
            resident_id: resident_id.to_string(),
        })
    }
}
