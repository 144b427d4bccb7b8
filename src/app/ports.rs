//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ Sequencer (domain)
//! ```
//!
//! Driven adapters (radio, sockets, actuators, display, clock) implement
//! these traits.  The [`Sequencer`](super::sequencer::Sequencer) consumes
//! them via generics, so the domain core never touches hardware directly.

use super::commands::{ActuatorCommand, DriveDirection};
use super::events::{DisplayStatus, DriveTelemetry};

// ───────────────────────────────────────────────────────────────
// Radio port (driven adapter: domain → WiFi hardware)
// ───────────────────────────────────────────────────────────────

/// Station-mode WiFi radio as seen by the link layer.
///
/// `begin` kicks off association and returns immediately; the link layer
/// polls `link_up` (the live status register, never a cached copy) to
/// observe the outcome.
pub trait RadioPort {
    /// Start an association attempt with the given credentials.
    fn begin(&mut self, ssid: &str, pass: &str);

    /// Poll the radio's live connection status.
    fn link_up(&mut self) -> bool;

    /// The station's current address, valid only while the link is up.
    fn local_address(&self) -> heapless::String<16>;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command actuators.
///
/// Values arriving here are already clamped by
/// [`ActuatorSet`](super::actuators::ActuatorSet); implementations are dumb.
pub trait ActuatorPort {
    /// Drive the motor at `duty` (0-255) in the given direction.
    /// `Stop` implies duty 0 regardless of the value passed.
    fn set_motor(&mut self, duty: u8, dir: DriveDirection);

    /// Position the steering servo (degrees).
    fn set_steering(&mut self, angle_deg: i32);

    /// Kill the drive motor — safe shutdown.
    fn all_stop(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Status sink port (driven adapter: domain → display)
// ───────────────────────────────────────────────────────────────

/// The local status display as seen by the sequencer.
///
/// Setters update what *will* be rendered; `update` gives the adapter its
/// tick slice to actually redraw (rate-limited internally).
pub trait StatusSink {
    fn set_status(&mut self, status: DisplayStatus);
    fn set_address(&mut self, addr: &str);
    fn set_telemetry(&mut self, telemetry: &DriveTelemetry);
    fn update(&mut self, now_ms: u64);
}

// ───────────────────────────────────────────────────────────────
// Time port (driven adapter: domain → monotonic clock)
// ───────────────────────────────────────────────────────────────

/// Monotonic time source plus the blocking delay used by the bounded
/// connect loop.  Abstracted so tests can run the 5-second budget in
/// zero wall-clock time.
pub trait TimePort {
    /// Milliseconds since boot (monotonic).
    fn now_ms(&self) -> u64;

    /// Block the (single) thread for `ms` milliseconds.
    fn delay_ms(&self, ms: u32);
}

// ───────────────────────────────────────────────────────────────
// Command handler (decouples HTTP dispatch from actuator mutation)
// ───────────────────────────────────────────────────────────────

/// Receiver for parsed actuator commands.
///
/// The command server knows nothing about the actuator set; it hands every
/// routed command to whatever handler the caller injected into `update`.
/// Exactly one handler sees each command.
pub trait CommandHandler {
    fn handle(&mut self, cmd: ActuatorCommand);
}
