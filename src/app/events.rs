//! Outbound status and telemetry types.
//!
//! The sequencer pushes these through the
//! [`StatusSink`](super::ports::StatusSink) port.  The adapter on the other
//! side decides how to render them — OLED panel in production, a recording
//! mock in tests.

use super::commands::DriveDirection;

/// Status shown on the local display.
///
/// During boot this tracks [`BootStep`](crate::boot::BootStep); after boot it
/// is recomputed each tick from the link-state edge classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayStatus {
    BootStart,
    WifiConnecting,
    WifiConnected,
    WifiGotIp,
    ServerStart,
    Ready,
}

/// A point-in-time snapshot of the drive actuator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriveTelemetry {
    /// Drive motor speed (0-255).
    pub speed: u8,
    /// Drive motor direction.
    pub direction: DriveDirection,
    /// Steering servo angle (degrees).
    pub steering_deg: i32,
}
