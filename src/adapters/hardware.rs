//! Hardware adapter — bridges the drive peripherals to [`ActuatorPort`].
//!
//! Owns the motor and servo drivers.  This is the only module in the
//! system that forwards domain actuator calls into real hardware.  On
//! non-espidf targets the underlying drivers track state in memory only.

use crate::app::commands::DriveDirection;
use crate::app::ports::ActuatorPort;
use crate::drivers::motor::MotorDriver;
use crate::drivers::servo::ServoDriver;

/// Concrete adapter combining the drive hardware behind the port trait.
pub struct HardwareAdapter {
    motor: MotorDriver,
    servo: ServoDriver,
}

impl HardwareAdapter {
    pub fn new(motor: MotorDriver, servo: ServoDriver) -> Self {
        Self { motor, servo }
    }

    pub fn motor(&self) -> &MotorDriver {
        &self.motor
    }

    pub fn servo(&self) -> &ServoDriver {
        &self.servo
    }
}

impl ActuatorPort for HardwareAdapter {
    fn set_motor(&mut self, duty: u8, dir: DriveDirection) {
        self.motor.set(duty, dir);
    }

    fn set_steering(&mut self, angle_deg: i32) {
        self.servo.set_angle(angle_deg);
    }

    fn all_stop(&mut self) {
        self.motor.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::motor::MotorState;

    fn adapter() -> HardwareAdapter {
        HardwareAdapter::new(MotorDriver::new(), ServoDriver::new())
    }

    #[test]
    fn motor_commands_reach_the_driver() {
        let mut hw = adapter();
        hw.set_motor(180, DriveDirection::Forward);
        assert_eq!(
            hw.motor().state(),
            MotorState::Running {
                duty: 180,
                dir: DriveDirection::Forward
            }
        );
        hw.all_stop();
        assert_eq!(hw.motor().state(), MotorState::Stopped);
    }

    #[test]
    fn steering_commands_reach_the_servo() {
        let mut hw = adapter();
        hw.set_steering(120);
        assert_eq!(hw.servo().angle_deg(), 120);
    }
}
