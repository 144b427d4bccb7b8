//! RoverLink Firmware — Main Entry Point
//!
//! Hexagonal architecture on a single-threaded cooperative tick loop.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   Adapters (outer ring)                  │
//! │                                                          │
//! │  WifiRadio      TcpServerSocket   HardwareAdapter        │
//! │  (RadioPort)    (ServerSocket)    (ActuatorPort)         │
//! │  StatusDisplay  Esp32TimeAdapter                         │
//! │  (StatusSink)   (TimePort)                               │
//! │                                                          │
//! │  ─────────────── Port Trait Boundary ─────────────       │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────┐      │
//! │  │            Sequencer (pure logic)              │      │
//! │  │  NetworkLink · CommandServer · ActuatorSet     │      │
//! │  └────────────────────────────────────────────────┘      │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

// ── Module declarations ───────────────────────────────────────
pub mod app;
pub mod boot;
pub mod config;
pub mod error;
pub mod http;
pub mod net;

mod adapters;
mod drivers;
mod pins;

// ── Imports ───────────────────────────────────────────────────
use anyhow::Result;
use log::info;

use adapters::display::StatusDisplay;
use adapters::hardware::HardwareAdapter;
use adapters::radio::WifiRadio;
use adapters::socket::TcpServerSocket;
use adapters::time::Esp32TimeAdapter;
use app::ports::TimePort;
use app::sequencer::Sequencer;
use config::SystemConfig;
use drivers::motor::MotorDriver;
use drivers::servo::ServoDriver;

// Credentials are baked at build time; override with
// `ROVER_WIFI_SSID` / `ROVER_WIFI_PASS` in the build environment.
const WIFI_SSID: &str = match option_env!("ROVER_WIFI_SSID") {
    Some(s) => s,
    None => "rover-net",
};
const WIFI_PASS: &str = match option_env!("ROVER_WIFI_PASS") {
    Some(s) => s,
    None => "change-me-please",
};

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  RoverLink v{}                      ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Hardware peripherals ───────────────────────────────
    if let Err(e) = drivers::hw_init::init_peripherals() {
        log::error!("HAL init failed: {e} — halting");
        #[allow(clippy::empty_loop)]
        loop {}
    }
    let watchdog = drivers::watchdog::Watchdog::new();

    // ── 3. Construct adapters ─────────────────────────────────
    let time = Esp32TimeAdapter::new();
    let config = SystemConfig::default();

    #[cfg(target_os = "espidf")]
    let mut radio = {
        use esp_idf_svc::eventloop::EspSystemEventLoop;
        use esp_idf_svc::hal::peripherals::Peripherals;
        use esp_idf_svc::nvs::EspDefaultNvsPartition;
        use esp_idf_svc::wifi::EspWifi;

        let peripherals = Peripherals::take()?;
        let sysloop = EspSystemEventLoop::take()?;
        let nvs = EspDefaultNvsPartition::take()?;
        WifiRadio::new(EspWifi::new(peripherals.modem, sysloop, Some(nvs))?)
    };
    #[cfg(not(target_os = "espidf"))]
    let mut radio = WifiRadio::new();

    let mut hw = HardwareAdapter::new(MotorDriver::new(), ServoDriver::new());
    let mut display = StatusDisplay::new(&config);

    // ── 4. Boot the sequencer ─────────────────────────────────
    let tick_ms = config.control_loop_interval_ms;
    let mut seq = Sequencer::new(config, TcpServerSocket::new());
    seq.init(WIFI_SSID, WIFI_PASS, &mut radio, &time, &mut hw, &mut display)?;

    info!("System ready. Entering control loop.");

    // ── 5. Control loop ───────────────────────────────────────
    loop {
        time.delay_ms(tick_ms);
        seq.update(time.now_ms(), &mut radio, &time, &mut hw, &mut display);
        watchdog.feed();
    }
}
