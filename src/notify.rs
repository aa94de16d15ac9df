//! Notification model, delivery sinks and device feedback effects.
//!
//! The core never touches the OS notification APIs, the speaker or the
//! vibration motor. It produces [`Notification`] values and hands them to a
//! [`NotificationSink`] supplied by the host app; [`AlertEffects`] tells the
//! host which device feedback to pair with a delivery.

use log::info;
use serde::{Deserialize, Serialize};

use crate::NotificationSettings;

/// Severity of a notification, mapped to toast styling on the host side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Enum))]
pub enum Severity {
    Info,
    Warning,
    Success,
}

/// A user-facing notification: the (title, message, severity) triple consumed
/// by the host's toast/native-notification layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct Notification {
    /// Monotonically increasing id assigned by the engine
    pub id: u64,
    pub title: String,
    pub message: String,
    pub severity: Severity,
    /// Unix timestamp in milliseconds
    pub timestamp_ms: i64,
}

/// Receives notifications produced by the engine.
///
/// Host apps implement this over their toast component and the platform
/// notification API.
pub trait NotificationSink {
    fn deliver(&mut self, notification: &Notification);
}

/// Sink that forwards notifications to the `log` facade. Used by the CLI and
/// as a default when the host has not installed a sink yet.
#[derive(Debug, Default)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn deliver(&mut self, notification: &Notification) {
        info!(
            "[{:?}] {}: {}",
            notification.severity, notification.title, notification.message
        );
    }
}

/// Device feedback to pair with a notification delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct AlertEffects {
    pub play_sound: bool,
    /// Vibration pattern in milliseconds, empty when vibration is off
    pub vibration_pattern_ms: Vec<u32>,
}

impl AlertEffects {
    /// Silent delivery: notification only, no sound or vibration.
    pub fn silent() -> Self {
        Self {
            play_sound: false,
            vibration_pattern_ms: Vec::new(),
        }
    }

    /// Compute the feedback for a notification.
    ///
    /// Warnings and successes get sound plus the 200-100-200 vibration
    /// pattern; plain info stays quiet. Inside the resident's quiet window
    /// the notification is still delivered but muted.
    pub fn for_notification(
        notification: &Notification,
        settings: &NotificationSettings,
        local_hour: Option<u8>,
    ) -> Self {
        let loud = matches!(notification.severity, Severity::Warning | Severity::Success);
        if !loud {
            return Self::silent();
        }
        if let Some(hour) = local_hour {
            if settings.is_silent_hour(hour) {
                return Self::silent();
            }
        }
        Self {
            play_sound: true,
            vibration_pattern_ms: vec![200, 100, 200],
        }
    }
}
