//! Top-level orchestration: boot sequence and the per-tick update chain.
//!
//! The [`Sequencer`] owns every domain component — link, server, actuators,
//! boot step — as plain fields; adapters are passed in by the caller each
//! call, so there are no globals and no interior mutability.  Everything
//! runs on the single main thread:
//!
//! ```text
//! tick: link.update → server.update → actuators.update → display
//! ```
//!
//! Boot is best-effort throughout.  WiFi association failure and server
//! bind failure are logged and skipped; the loop always reaches `Ready`
//! so the vehicle stays controllable by whatever interfaces did come up.

use log::{error, info, warn};

use crate::boot::BootStep;
use crate::config::SystemConfig;
use crate::http::server::CommandServer;
use crate::http::transport::ServerSocket;
use crate::net::edge::{self, LinkEdge, LinkState};
use crate::net::link::NetworkLink;

use super::actuators::ActuatorSet;
use super::commands::ActuatorCommand;
use super::ports::{ActuatorPort, CommandHandler, RadioPort, StatusSink, TimePort};

// ───────────────────────────────────────────────────────────────
// Command dispatch glue
// ───────────────────────────────────────────────────────────────

/// Routes parsed commands into the actuator set.
///
/// Built fresh for each server slice so the mutable borrows of the set and
/// the hardware port live exactly as long as the dispatch that needs them.
pub struct DriveCommandHandler<'a, A: ActuatorPort> {
    actuators: &'a mut ActuatorSet,
    hw: &'a mut A,
}

impl<'a, A: ActuatorPort> DriveCommandHandler<'a, A> {
    pub fn new(actuators: &'a mut ActuatorSet, hw: &'a mut A) -> Self {
        Self { actuators, hw }
    }
}

impl<A: ActuatorPort> CommandHandler for DriveCommandHandler<'_, A> {
    fn handle(&mut self, cmd: ActuatorCommand) {
        match cmd {
            ActuatorCommand::SetSpeed(duty) => self.actuators.set_speed(duty, self.hw),
            ActuatorCommand::SetDirection(dir) => self.actuators.set_direction(dir, self.hw),
            ActuatorCommand::SetSteering(deg) => self.actuators.set_steering(deg, self.hw),
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Sequencer
// ───────────────────────────────────────────────────────────────

pub struct Sequencer<S: ServerSocket> {
    config: SystemConfig,
    link: NetworkLink,
    server: CommandServer<S>,
    actuators: ActuatorSet,
    boot_step: BootStep,
    prev_link: LinkState,
}

impl<S: ServerSocket> Sequencer<S> {
    pub fn new(config: SystemConfig, socket: S) -> Self {
        let actuators = ActuatorSet::new(&config);
        Self {
            link: NetworkLink::new(),
            server: CommandServer::new(socket),
            actuators,
            boot_step: BootStep::Start,
            // Starts Disconnected so a boot-time association shows up as a
            // CameUp edge on the first tick and re-announces the address.
            prev_link: LinkState::Disconnected,
            config,
        }
    }

    /// Boot sequence.  Fails only on invalid credentials; a dead network
    /// or a refused port still boots to `Ready`.
    pub fn init(
        &mut self,
        ssid: &str,
        pass: &str,
        radio: &mut impl RadioPort,
        time: &impl TimePort,
        hw: &mut impl ActuatorPort,
        display: &mut impl StatusSink,
    ) -> crate::error::Result<()> {
        self.advance(BootStep::Start, display);
        info!("sequencer: boot");

        self.advance(BootStep::WifiConnecting, display);
        self.link.init(ssid, pass)?;
        if self.link.connect(radio, time, &self.config) {
            self.advance(BootStep::WifiConnected, display);
            display.set_address(self.link.address());
            self.advance(BootStep::WifiGotIp, display);
        } else {
            warn!("sequencer: starting without network, retrying in background");
        }

        // Known-safe outputs before any command can arrive.
        self.actuators.apply(hw);

        self.advance(BootStep::ServerStart, display);
        if let Err(e) = self.server.init(self.config.http_port) {
            error!("sequencer: command server unavailable: {e}");
        }

        self.advance(BootStep::Ready, display);
        display.set_telemetry(&self.actuators.telemetry());
        info!("sequencer: ready");
        Ok(())
    }

    /// One cooperative tick.
    pub fn update(
        &mut self,
        now_ms: u64,
        radio: &mut impl RadioPort,
        time: &impl TimePort,
        hw: &mut impl ActuatorPort,
        display: &mut impl StatusSink,
    ) {
        self.link.update(now_ms, radio, time, &self.config);

        {
            let mut handler = DriveCommandHandler::new(&mut self.actuators, hw);
            self.server.update(&mut handler);
        }

        self.actuators.update(now_ms, hw);

        self.refresh_status(display);
        display.set_telemetry(&self.actuators.telemetry());
        display.update(now_ms);
    }

    /// Recompute the displayed status from the link-state transition since
    /// the previous tick.  Pure function of (previous, current); transition
    /// announcements fire exactly once per edge, steady ticks settle back
    /// on the ready status (the sink dedups redundant pushes).
    fn refresh_status(&mut self, display: &mut impl StatusSink) {
        let current = LinkState::from(self.link.is_connected());
        match edge::classify(self.prev_link, current) {
            LinkEdge::CameUp => {
                display.set_address(self.link.address());
                display.set_status(crate::app::events::DisplayStatus::WifiGotIp);
                info!("sequencer: link up ({})", self.link.address());
            }
            LinkEdge::WentDown => {
                display.set_address("");
                display.set_status(crate::app::events::DisplayStatus::WifiConnecting);
                warn!("sequencer: link down, reconnecting");
            }
            LinkEdge::Steady => {
                display.set_status(crate::app::events::DisplayStatus::Ready);
            }
        }
        self.prev_link = current;
    }

    fn advance(&mut self, step: BootStep, display: &mut impl StatusSink) {
        debug_assert!(step >= self.boot_step, "boot steps only move forward");
        self.boot_step = step;
        display.set_status(step.display_status());
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn boot_step(&self) -> BootStep {
        self.boot_step
    }

    pub fn is_connected(&self) -> bool {
        self.link.is_connected()
    }

    pub fn actuators(&self) -> &ActuatorSet {
        &self.actuators
    }
}
