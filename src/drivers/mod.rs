//! Low-level peripheral drivers.
//!
//! Dumb hardware access only — clamping and policy live in the domain
//! layer.  Every driver is dual-target: real register access on ESP-IDF,
//! in-memory state tracking elsewhere.

pub mod hw_init;
pub mod motor;
pub mod servo;
pub mod watchdog;
