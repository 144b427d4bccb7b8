//! WiFi link lifecycle.
//!
//! [`NetworkLink`] owns the credentials and the connected flag.  Nothing
//! else writes that flag; every other component only reads it.
//!
//! ## Reconnection policy
//!
//! A failed attempt is retried no more often than every
//! `wifi_retry_interval_ms`, tracked by a last-retry timestamp rather than
//! an attempt counter — no backoff state to maintain, no retry storms.
//! Connect failure is never fatal: the system keeps operating disconnected
//! and retries indefinitely.

use log::{info, warn};

use crate::app::ports::{RadioPort, TimePort};
use crate::config::SystemConfig;
use crate::error::LinkError;

// ───────────────────────────────────────────────────────────────
// Credential validation
// ───────────────────────────────────────────────────────────────

fn is_printable_ascii(s: &str) -> bool {
    s.bytes().all(|b| (0x20..=0x7E).contains(&b))
}

fn validate_ssid(ssid: &str) -> Result<(), LinkError> {
    if ssid.is_empty() || ssid.len() > 32 || !is_printable_ascii(ssid) {
        return Err(LinkError::InvalidSsid);
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<(), LinkError> {
    if password.is_empty() {
        return Ok(()); // open network
    }
    if password.len() < 8 || password.len() > 64 {
        return Err(LinkError::InvalidPassword);
    }
    Ok(())
}

// ───────────────────────────────────────────────────────────────
// NetworkLink
// ───────────────────────────────────────────────────────────────

pub struct NetworkLink {
    ssid: heapless::String<32>,
    password: heapless::String<64>,
    connected: bool,
    address: heapless::String<16>,
    last_retry_ms: u64,
}

impl NetworkLink {
    pub fn new() -> Self {
        Self {
            ssid: heapless::String::new(),
            password: heapless::String::new(),
            connected: false,
            address: heapless::String::new(),
            last_retry_ms: 0,
        }
    }

    /// Validate and store credentials.  No side effects on the radio.
    pub fn init(&mut self, ssid: &str, pass: &str) -> Result<(), LinkError> {
        validate_ssid(ssid)?;
        validate_password(pass)?;
        self.ssid.clear();
        self.ssid.push_str(ssid).map_err(|()| LinkError::InvalidSsid)?;
        self.password.clear();
        self.password
            .push_str(pass)
            .map_err(|()| LinkError::InvalidPassword)?;
        info!("link: credentials stored (SSID='{}')", self.ssid);
        Ok(())
    }

    /// One bounded association attempt.
    ///
    /// Kicks the radio, then polls its live status every
    /// `wifi_poll_interval_ms` until it reports up or the
    /// `wifi_connect_budget_ms` budget is spent.  This is the only
    /// permitted blocking call in the system — boot and retry path only.
    pub fn connect(
        &mut self,
        radio: &mut impl RadioPort,
        time: &impl TimePort,
        config: &SystemConfig,
    ) -> bool {
        if self.ssid.is_empty() {
            warn!("link: {}", LinkError::NoCredentials);
            return false;
        }

        info!("link: connecting to '{}'", self.ssid);
        radio.begin(self.ssid.as_str(), self.password.as_str());

        let deadline = time.now_ms() + u64::from(config.wifi_connect_budget_ms);
        let mut up = radio.link_up();
        while !up && time.now_ms() < deadline {
            time.delay_ms(config.wifi_poll_interval_ms);
            up = radio.link_up();
        }

        self.connected = up;
        if up {
            self.address = radio.local_address();
            info!("link: connected ({})", self.address);
        } else {
            self.address.clear();
            warn!("link: {}", LinkError::ConnectTimeout);
        }
        up
    }

    /// Per-tick lifecycle poll.
    ///
    /// Disconnected: re-attempt at most once per retry interval.
    /// Connected: re-poll the live status register to catch silent drops —
    /// the flag is never stale by more than one tick.
    pub fn update(
        &mut self,
        now_ms: u64,
        radio: &mut impl RadioPort,
        time: &impl TimePort,
        config: &SystemConfig,
    ) {
        if self.connected {
            self.connected = radio.link_up();
            if !self.connected {
                self.address.clear();
                warn!("link: connection lost");
            }
        } else if now_ms.wrapping_sub(self.last_retry_ms)
            >= u64::from(config.wifi_retry_interval_ms)
        {
            self.connect(radio, time, config);
            self.last_retry_ms = now_ms;
        }
    }

    // ── Pure reads ────────────────────────────────────────────

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Station address; empty while disconnected.
    pub fn address(&self) -> &str {
        self.address.as_str()
    }
}

// ───────────────────────────────────────────────────────────────
// Tests
// ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    struct FakeClock {
        now: Cell<u64>,
    }

    impl FakeClock {
        fn new() -> Self {
            Self { now: Cell::new(0) }
        }
    }

    impl TimePort for FakeClock {
        fn now_ms(&self) -> u64 {
            self.now.get()
        }
        fn delay_ms(&self, ms: u32) {
            self.now.set(self.now.get() + u64::from(ms));
        }
    }

    /// Radio whose status register comes up a fixed number of polls after
    /// `begin`, or never when `up_after_polls` is `None`.
    struct FakeRadio {
        up_after_polls: Option<u32>,
        polls_since_begin: u32,
        begin_calls: u32,
        up: bool,
    }

    impl FakeRadio {
        fn new(up_after_polls: Option<u32>) -> Self {
            Self {
                up_after_polls,
                polls_since_begin: 0,
                begin_calls: 0,
                up: false,
            }
        }
    }

    impl RadioPort for FakeRadio {
        fn begin(&mut self, _ssid: &str, _pass: &str) {
            self.begin_calls += 1;
            self.polls_since_begin = 0;
            self.up = false;
        }
        fn link_up(&mut self) -> bool {
            self.polls_since_begin += 1;
            if let Some(n) = self.up_after_polls {
                if self.polls_since_begin > n {
                    self.up = true;
                }
            }
            self.up
        }
        fn local_address(&self) -> heapless::String<16> {
            let mut s = heapless::String::new();
            s.push_str("192.168.1.77").unwrap();
            s
        }
    }

    fn linked() -> NetworkLink {
        let mut link = NetworkLink::new();
        link.init("RoverNet", "password1").unwrap();
        link
    }

    #[test]
    fn init_rejects_bad_credentials() {
        let mut link = NetworkLink::new();
        assert_eq!(link.init("", "password1"), Err(LinkError::InvalidSsid));
        assert_eq!(link.init("Net", "short"), Err(LinkError::InvalidPassword));
        assert!(link.init("OpenCafe", "").is_ok());
    }

    #[test]
    fn connect_succeeds_within_budget() {
        let mut link = linked();
        let clock = FakeClock::new();
        let mut radio = FakeRadio::new(Some(3));
        let cfg = SystemConfig::default();

        assert!(link.connect(&mut radio, &clock, &cfg));
        assert!(link.is_connected());
        assert_eq!(link.address(), "192.168.1.77");
        // Came up on the poll after three misses — well inside the budget.
        assert!(clock.now_ms() < u64::from(cfg.wifi_connect_budget_ms));
    }

    #[test]
    fn connect_gives_up_after_budget() {
        let mut link = linked();
        let clock = FakeClock::new();
        let mut radio = FakeRadio::new(None);
        let cfg = SystemConfig::default();

        assert!(!link.connect(&mut radio, &clock, &cfg));
        assert!(!link.is_connected());
        assert_eq!(link.address(), "");
        // The loop spent the whole budget polling at the configured interval.
        assert!(clock.now_ms() >= u64::from(cfg.wifi_connect_budget_ms));
    }

    #[test]
    fn update_spaces_out_retries() {
        let mut link = linked();
        let clock = FakeClock::new();
        let mut radio = FakeRadio::new(None);
        let cfg = SystemConfig::default();

        link.update(5000, &mut radio, &clock, &cfg);
        assert_eq!(radio.begin_calls, 1);

        // Inside the retry window — no new attempt.
        link.update(7000, &mut radio, &clock, &cfg);
        assert_eq!(radio.begin_calls, 1);

        link.update(10_001, &mut radio, &clock, &cfg);
        assert_eq!(radio.begin_calls, 2);
    }

    #[test]
    fn update_holds_off_before_first_interval() {
        let mut link = linked();
        let clock = FakeClock::new();
        let mut radio = FakeRadio::new(None);
        let cfg = SystemConfig::default();

        link.update(4999, &mut radio, &clock, &cfg);
        assert_eq!(radio.begin_calls, 0);
    }

    #[test]
    fn update_detects_silent_drop() {
        let mut link = linked();
        let clock = FakeClock::new();
        let mut radio = FakeRadio::new(Some(0));
        let cfg = SystemConfig::default();

        assert!(link.connect(&mut radio, &clock, &cfg));

        // Radio silently drops; the next tick's poll must notice.
        radio.up_after_polls = None;
        radio.up = false;
        link.update(100, &mut radio, &clock, &cfg);
        assert!(!link.is_connected());
        assert_eq!(link.address(), "");
    }
}
