//! Status display adapter.
//!
//! Implements [`StatusSink`].  Holds the latest status, station address,
//! and drive telemetry, and redraws at most once per
//! `display_refresh_interval_ms` — and only when something changed, so a
//! steady system does not spam the output.
//!
//! Rendering currently goes to the log.  The I²C OLED on the main board
//! will take over once the panel driver is wired; the rate-limit and
//! dirty tracking stay the same either way.

use log::info;

use crate::app::events::{DisplayStatus, DriveTelemetry};
use crate::app::ports::StatusSink;
use crate::config::SystemConfig;

pub struct StatusDisplay {
    status: DisplayStatus,
    address: heapless::String<16>,
    telemetry: Option<DriveTelemetry>,
    dirty: bool,
    refresh_interval_ms: u64,
    last_render_ms: u64,
}

impl StatusDisplay {
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            status: DisplayStatus::BootStart,
            address: heapless::String::new(),
            telemetry: None,
            dirty: true,
            refresh_interval_ms: u64::from(config.display_refresh_interval_ms),
            last_render_ms: 0,
        }
    }

    fn status_line(&self) -> &'static str {
        match self.status {
            DisplayStatus::BootStart => "booting",
            DisplayStatus::WifiConnecting => "wifi: connecting...",
            DisplayStatus::WifiConnected => "wifi: connected",
            DisplayStatus::WifiGotIp => "wifi: online",
            DisplayStatus::ServerStart => "starting server",
            DisplayStatus::Ready => "ready",
        }
    }

    fn render(&self) {
        match self.telemetry {
            Some(t) => info!(
                "display: [{}] addr={} speed={} dir={:?} steer={}°",
                self.status_line(),
                self.address,
                t.speed,
                t.direction,
                t.steering_deg
            ),
            None => info!("display: [{}] addr={}", self.status_line(), self.address),
        }
    }

    pub fn status(&self) -> DisplayStatus {
        self.status
    }

    pub fn address(&self) -> &str {
        self.address.as_str()
    }
}

impl StatusSink for StatusDisplay {
    fn set_status(&mut self, status: DisplayStatus) {
        if self.status != status {
            self.status = status;
            self.dirty = true;
        }
    }

    fn set_address(&mut self, addr: &str) {
        if self.address.as_str() != addr {
            self.address.clear();
            let _ = self.address.push_str(addr);
            self.dirty = true;
        }
    }

    fn set_telemetry(&mut self, telemetry: &DriveTelemetry) {
        if self.telemetry != Some(*telemetry) {
            self.telemetry = Some(*telemetry);
            self.dirty = true;
        }
    }

    fn update(&mut self, now_ms: u64) {
        if !self.dirty {
            return;
        }
        if now_ms.wrapping_sub(self.last_render_ms) >= self.refresh_interval_ms {
            self.render();
            self.last_render_ms = now_ms;
            self.dirty = false;
        }
    }
}
