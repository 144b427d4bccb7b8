//! Inbound actuator commands.
//!
//! One HTTP transaction produces at most one of these; the command server
//! hands it synchronously to the [`CommandHandler`](super::ports::CommandHandler)
//! installed by the sequencer.  Commands are never queued.

/// Drive motor direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriveDirection {
    Forward,
    Backward,
    Stop,
}

impl DriveDirection {
    /// Map a raw wire code onto a direction.
    ///
    /// `0` → forward, `1` → backward, anything else → stop.  The catch-all
    /// is a fail-safe: an unrecognised code halts the vehicle rather than
    /// leaving the previous direction in force.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Forward,
            1 => Self::Backward,
            _ => Self::Stop,
        }
    }
}

/// Discrete instruction altering drive speed, drive direction, or steering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorCommand {
    /// Set drive motor speed (already clamped to 0-255 at the parse boundary).
    SetSpeed(u8),
    /// Set drive motor direction.
    SetDirection(DriveDirection),
    /// Request a steering angle in degrees (clamped by the actuator set).
    SetSteering(i32),
}
