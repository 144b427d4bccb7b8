//! WiFi station radio adapter.
//!
//! Implements [`RadioPort`] — the hexagonal boundary for the WiFi radio.
//!
//! ## cfg gating
//!
//! - **`target_os = "espidf"`**: real station driver via `esp_idf_svc::wifi::EspWifi`.
//! - **all other targets**: deterministic simulation — the link comes up a
//!   fixed number of status polls after `begin`, which exercises the
//!   bounded connect loop without a real access point.

#[cfg(not(target_os = "espidf"))]
use log::info;
#[cfg(target_os = "espidf")]
use log::warn;

use crate::app::ports::RadioPort;

#[cfg(not(target_os = "espidf"))]
const SIM_POLLS_UNTIL_UP: u32 = 3;

pub struct WifiRadio {
    #[cfg(target_os = "espidf")]
    wifi: esp_idf_svc::wifi::EspWifi<'static>,

    #[cfg(not(target_os = "espidf"))]
    polls_since_begin: u32,
    #[cfg(not(target_os = "espidf"))]
    started: bool,
}

#[cfg(target_os = "espidf")]
impl WifiRadio {
    /// Takes ownership of a constructed (not yet configured) station driver.
    /// The modem peripheral, event loop, and NVS handles are threaded in
    /// from `main()`.
    pub fn new(wifi: esp_idf_svc::wifi::EspWifi<'static>) -> Self {
        Self { wifi }
    }
}

#[cfg(not(target_os = "espidf"))]
impl WifiRadio {
    pub fn new() -> Self {
        Self {
            polls_since_begin: 0,
            started: false,
        }
    }
}

#[cfg(not(target_os = "espidf"))]
impl Default for WifiRadio {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_os = "espidf")]
impl RadioPort for WifiRadio {
    fn begin(&mut self, ssid: &str, pass: &str) {
        use esp_idf_svc::wifi::{AuthMethod, ClientConfiguration, Configuration};

        let auth_method = if pass.is_empty() {
            AuthMethod::None
        } else {
            AuthMethod::WPA2Personal
        };
        let config = Configuration::Client(ClientConfiguration {
            ssid: ssid.try_into().unwrap_or_default(),
            password: pass.try_into().unwrap_or_default(),
            auth_method,
            ..Default::default()
        });

        // Failures here surface as the link never coming up; the link
        // layer's retry policy handles that.
        if let Err(e) = self.wifi.set_configuration(&config) {
            warn!("radio: set_configuration failed: {e}");
            return;
        }
        if let Err(e) = self.wifi.start() {
            warn!("radio: start failed: {e}");
            return;
        }
        if let Err(e) = self.wifi.connect() {
            warn!("radio: connect failed: {e}");
        }
    }

    fn link_up(&mut self) -> bool {
        // Connected at L2 and an address assigned — anything less and the
        // command server is unreachable anyway.
        self.wifi.is_connected().unwrap_or(false)
            && self
                .wifi
                .sta_netif()
                .get_ip_info()
                .map(|info| !info.ip.is_unspecified())
                .unwrap_or(false)
    }

    fn local_address(&self) -> heapless::String<16> {
        use core::fmt::Write as _;
        let mut out = heapless::String::new();
        if let Ok(ip_info) = self.wifi.sta_netif().get_ip_info() {
            let _ = write!(out, "{}", ip_info.ip);
        }
        out
    }
}

#[cfg(not(target_os = "espidf"))]
impl RadioPort for WifiRadio {
    fn begin(&mut self, ssid: &str, _pass: &str) {
        info!("radio(sim): associating with '{ssid}'");
        self.started = true;
        self.polls_since_begin = 0;
    }

    fn link_up(&mut self) -> bool {
        if !self.started {
            return false;
        }
        self.polls_since_begin += 1;
        if self.polls_since_begin == SIM_POLLS_UNTIL_UP {
            info!("radio(sim): link up");
        }
        self.polls_since_begin >= SIM_POLLS_UNTIL_UP
    }

    fn local_address(&self) -> heapless::String<16> {
        let mut out = heapless::String::new();
        if self.started && self.polls_since_begin >= SIM_POLLS_UNTIL_UP {
            let _ = out.push_str("192.168.1.77");
        }
        out
    }
}
