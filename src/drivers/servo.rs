//! Steering servo driver (standard 50 Hz hobby servo on LEDC ch1).
//!
//! Converts an angle in degrees (0-180) into a pulse width between
//! `SERVO_MIN_PULSE_US` and `SERVO_MAX_PULSE_US`, then into a 14-bit LEDC
//! duty.  Angles outside 0-180 are clamped here as a last line of defence;
//! the domain layer normally hands over only the three steering presets.

use crate::drivers::hw_init;
use crate::pins;

/// LEDC frame period at 50 Hz, in microseconds.
const FRAME_US: u32 = 1_000_000 / pins::SERVO_PWM_FREQ_HZ;

pub struct ServoDriver {
    angle_deg: u8,
}

impl Default for ServoDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl ServoDriver {
    pub fn new() -> Self {
        Self { angle_deg: 90 }
    }

    /// Position the servo.  Out-of-range angles clamp to 0-180.
    pub fn set_angle(&mut self, angle_deg: i32) {
        let angle = angle_deg.clamp(0, 180) as u8;
        self.angle_deg = angle;
        hw_init::ledc_set(hw_init::LEDC_CH_SERVO, Self::duty_for(angle));
    }

    pub fn angle_deg(&self) -> u8 {
        self.angle_deg
    }

    fn pulse_us(angle: u8) -> u32 {
        let span = pins::SERVO_MAX_PULSE_US - pins::SERVO_MIN_PULSE_US;
        pins::SERVO_MIN_PULSE_US + span * u32::from(angle) / 180
    }

    fn duty_for(angle: u8) -> u32 {
        // duty = pulse / frame, scaled to the timer resolution.
        let max_duty = (1u32 << pins::SERVO_PWM_RESOLUTION_BITS) - 1;
        Self::pulse_us(angle) * max_duty / FRAME_US
    }
}
