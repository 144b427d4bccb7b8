//! System configuration parameters
//!
//! All tunable parameters for the rover firmware. Credentials are *not*
//! part of the config — they are passed as in-memory boot parameters.

use serde::{Deserialize, Serialize};

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- WiFi ---
    /// Total time budget for one blocking connect attempt (milliseconds)
    pub wifi_connect_budget_ms: u32,
    /// Radio status poll interval inside the connect loop (milliseconds)
    pub wifi_poll_interval_ms: u32,
    /// Minimum spacing between reconnect attempts (milliseconds)
    pub wifi_retry_interval_ms: u32,

    // --- HTTP ---
    /// TCP port the command server listens on
    pub http_port: u16,

    // --- Steering servo ---
    /// Full-left steering angle (degrees)
    pub steering_left_deg: i32,
    /// Centered steering angle (degrees)
    pub steering_center_deg: i32,
    /// Full-right steering angle (degrees)
    pub steering_right_deg: i32,

    // --- Timing ---
    /// Control loop interval (milliseconds)
    pub control_loop_interval_ms: u32,
    /// Periodic actuator output re-assert interval (milliseconds)
    pub actuator_refresh_interval_ms: u32,
    /// Status display redraw interval (milliseconds)
    pub display_refresh_interval_ms: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // WiFi
            wifi_connect_budget_ms: 5000,
            wifi_poll_interval_ms: 200,
            wifi_retry_interval_ms: 5000,

            // HTTP
            http_port: 80,

            // Steering presets match the control page (90/105/120)
            steering_left_deg: 90,
            steering_center_deg: 105,
            steering_right_deg: 120,

            // Timing
            control_loop_interval_ms: 10,
            actuator_refresh_interval_ms: 1000,
            display_refresh_interval_ms: 250,
        }
    }
}
