//! Drive motor driver (DRV8871 H-bridge).
//!
//! Variable-speed forward/reverse control via LEDC PWM (ch0) and the two
//! bridge input pins.  This driver is a dumb actuator: speed arrives
//! already clamped to 0-255 and direction already resolved.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives real PWM and GPIO via hw_init helpers.
//! On host/test: tracks state in-memory only.

use crate::app::commands::DriveDirection;
use crate::drivers::hw_init;
use crate::pins;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotorState {
    Stopped,
    Running { duty: u8, dir: DriveDirection },
}

pub struct MotorDriver {
    state: MotorState,
}

impl Default for MotorDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl MotorDriver {
    pub fn new() -> Self {
        Self {
            state: MotorState::Stopped,
        }
    }

    /// Assert duty and direction on the bridge.  `Stop` (or zero duty)
    /// releases both inputs and zeroes the PWM.
    pub fn set(&mut self, duty: u8, direction: DriveDirection) {
        if duty == 0 || direction == DriveDirection::Stop {
            self.stop();
            return;
        }

        self.set_direction_hw(direction);
        hw_init::ledc_set(hw_init::LEDC_CH_MOTOR, u32::from(duty));
        self.state = MotorState::Running {
            duty,
            dir: direction,
        };
    }

    pub fn stop(&mut self) {
        hw_init::ledc_set(hw_init::LEDC_CH_MOTOR, 0);
        // Both inputs low: coast.
        hw_init::gpio_write(pins::MOTOR_IN1_GPIO, false);
        hw_init::gpio_write(pins::MOTOR_IN2_GPIO, false);
        self.state = MotorState::Stopped;
    }

    fn set_direction_hw(&self, dir: DriveDirection) {
        let (in1, in2) = match dir {
            DriveDirection::Forward => (true, false),
            DriveDirection::Backward => (false, true),
            DriveDirection::Stop => (false, false),
        };
        hw_init::gpio_write(pins::MOTOR_IN1_GPIO, in1);
        hw_init::gpio_write(pins::MOTOR_IN2_GPIO, in2);
    }

    pub fn state(&self) -> MotorState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        !matches!(self.state, MotorState::Stopped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_duty_is_stopped() {
        let mut motor = MotorDriver::new();
        motor.set(0, DriveDirection::Forward);
        assert_eq!(motor.state(), MotorState::Stopped);
        assert!(!motor.is_running());
    }

    #[test]
    fn stop_direction_overrides_duty() {
        let mut motor = MotorDriver::new();
        motor.set(200, DriveDirection::Stop);
        assert_eq!(motor.state(), MotorState::Stopped);
    }

    #[test]
    fn running_state_records_duty_and_direction() {
        let mut motor = MotorDriver::new();
        motor.set(150, DriveDirection::Backward);
        assert_eq!(
            motor.state(),
            MotorState::Running {
                duty: 150,
                dir: DriveDirection::Backward
            }
        );
        motor.stop();
        assert_eq!(motor.state(), MotorState::Stopped);
    }
}
