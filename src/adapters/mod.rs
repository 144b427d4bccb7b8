//! Platform adapters — concrete implementations of the port traits.
//!
//! Each adapter is dual-target: real ESP-IDF peripherals under
//! `target_os = "espidf"`, simulation or `std` fallbacks everywhere else,
//! so the whole stack runs on a development host.

pub mod display;
pub mod hardware;
pub mod radio;
pub mod socket;
pub mod time;
