//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the business rules for the rover: the boot/tick
//! sequencer, drive actuator state with its clamping policies, and the
//! command vocabulary dispatched by the HTTP layer.  All interaction with
//! hardware happens through **port traits** defined in [`ports`], keeping
//! this layer fully testable without real peripherals.

pub mod actuators;
pub mod commands;
pub mod events;
pub mod ports;
pub mod sequencer;
