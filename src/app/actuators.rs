//! Drive actuator state.
//!
//! [`ActuatorSet`] owns the commanded speed, direction, and steering angle,
//! applies the clamping policies at the setter boundary, and re-asserts the
//! hardware outputs periodically so a glitched driver IC recovers within one
//! refresh interval.  Mutation happens only from the command-dispatch slice
//! of the tick — there is no concurrency.

use log::debug;

use crate::config::SystemConfig;

use super::commands::DriveDirection;
use super::events::DriveTelemetry;
use super::ports::ActuatorPort;

/// Commanded state for the drive motor and steering servo.
pub struct ActuatorSet {
    speed: u8,
    direction: DriveDirection,
    steering_deg: i32,

    left_deg: i32,
    center_deg: i32,
    right_deg: i32,

    refresh_interval_ms: u64,
    last_refresh_ms: u64,
}

impl ActuatorSet {
    /// Initial state: motor stopped at zero speed, steering centered.
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            speed: 0,
            direction: DriveDirection::Stop,
            steering_deg: config.steering_center_deg,
            left_deg: config.steering_left_deg,
            center_deg: config.steering_center_deg,
            right_deg: config.steering_right_deg,
            refresh_interval_ms: u64::from(config.actuator_refresh_interval_ms),
            last_refresh_ms: 0,
        }
    }

    // ── Setters (clamped, assert hardware immediately) ────────

    /// Set drive speed.  The 0-255 clamp is total by construction: the wire
    /// value is clamped into `u8` at the parse boundary.
    pub fn set_speed(&mut self, speed: u8, hw: &mut impl ActuatorPort) {
        self.speed = speed;
        hw.set_motor(self.speed, self.direction);
        debug!("actuators: speed={}", self.speed);
    }

    pub fn set_direction(&mut self, dir: DriveDirection, hw: &mut impl ActuatorPort) {
        self.direction = dir;
        hw.set_motor(self.speed, self.direction);
        debug!("actuators: direction={:?}", self.direction);
    }

    /// Set steering from a requested angle.
    ///
    /// Anything at or beyond an end stop clamps to that stop; every angle
    /// strictly between the stops resolves to the single centered value —
    /// intermediate angles are *not* passed through.  The control page only
    /// ever asks for the three presets, and centering anything else keeps a
    /// confused client from wedging the linkage off-axis.
    pub fn set_steering(&mut self, angle_deg: i32, hw: &mut impl ActuatorPort) {
        self.steering_deg = self.resolve_steering(angle_deg);
        hw.set_steering(self.steering_deg);
        debug!("actuators: steering={}°", self.steering_deg);
    }

    fn resolve_steering(&self, angle_deg: i32) -> i32 {
        if angle_deg <= self.left_deg {
            self.left_deg
        } else if angle_deg >= self.right_deg {
            self.right_deg
        } else {
            self.center_deg
        }
    }

    // ── Per-tick refresh ──────────────────────────────────────

    /// Re-assert the current outputs every refresh interval.
    /// No state change — hardware re-assertion only.
    pub fn update(&mut self, now_ms: u64, hw: &mut impl ActuatorPort) {
        if now_ms.wrapping_sub(self.last_refresh_ms) >= self.refresh_interval_ms {
            self.apply(hw);
            self.last_refresh_ms = now_ms;
        }
    }

    /// Assert both outputs unconditionally (boot and refresh path).
    pub fn apply(&self, hw: &mut impl ActuatorPort) {
        hw.set_motor(self.speed, self.direction);
        hw.set_steering(self.steering_deg);
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn speed(&self) -> u8 {
        self.speed
    }

    pub fn direction(&self) -> DriveDirection {
        self.direction
    }

    pub fn steering_deg(&self) -> i32 {
        self.steering_deg
    }

    pub fn telemetry(&self) -> DriveTelemetry {
        DriveTelemetry {
            speed: self.speed,
            direction: self.direction,
            steering_deg: self.steering_deg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RecordingHw {
        motor: Vec<(u8, DriveDirection)>,
        steering: Vec<i32>,
    }

    impl RecordingHw {
        fn new() -> Self {
            Self {
                motor: Vec::new(),
                steering: Vec::new(),
            }
        }
    }

    impl ActuatorPort for RecordingHw {
        fn set_motor(&mut self, duty: u8, dir: DriveDirection) {
            self.motor.push((duty, dir));
        }
        fn set_steering(&mut self, angle_deg: i32) {
            self.steering.push(angle_deg);
        }
        fn all_stop(&mut self) {
            self.motor.push((0, DriveDirection::Stop));
        }
    }

    fn make_set() -> ActuatorSet {
        ActuatorSet::new(&SystemConfig::default())
    }

    #[test]
    fn starts_stopped_and_centered() {
        let set = make_set();
        assert_eq!(set.speed(), 0);
        assert_eq!(set.direction(), DriveDirection::Stop);
        assert_eq!(set.steering_deg(), 105);
    }

    #[test]
    fn speed_setter_asserts_motor() {
        let mut set = make_set();
        let mut hw = RecordingHw::new();
        set.set_speed(200, &mut hw);
        assert_eq!(set.speed(), 200);
        assert_eq!(hw.motor, vec![(200, DriveDirection::Stop)]);
    }

    #[test]
    fn steering_at_or_below_left_clamps_to_left() {
        let mut set = make_set();
        let mut hw = RecordingHw::new();
        for angle in [90, 89, 0, -400] {
            set.set_steering(angle, &mut hw);
            assert_eq!(set.steering_deg(), 90, "angle {angle}");
        }
    }

    #[test]
    fn steering_at_or_above_right_clamps_to_right() {
        let mut set = make_set();
        let mut hw = RecordingHw::new();
        for angle in [120, 121, 1000] {
            set.set_steering(angle, &mut hw);
            assert_eq!(set.steering_deg(), 120, "angle {angle}");
        }
    }

    #[test]
    fn steering_between_stops_resolves_to_center() {
        let mut set = make_set();
        let mut hw = RecordingHw::new();
        // Strictly-between angles are forced to the centered value,
        // never passed through verbatim.
        for angle in [91, 100, 105, 110, 119] {
            set.set_steering(angle, &mut hw);
            assert_eq!(set.steering_deg(), 105, "angle {angle}");
        }
    }

    #[test]
    fn update_reasserts_only_after_interval() {
        let mut set = make_set();
        let mut hw = RecordingHw::new();

        set.update(500, &mut hw);
        assert!(hw.motor.is_empty()); // inside the interval — no re-assert

        set.update(1000, &mut hw);
        assert_eq!(hw.motor.len(), 1);

        set.update(1500, &mut hw);
        assert_eq!(hw.motor.len(), 1);

        set.update(2000, &mut hw);
        assert_eq!(hw.motor.len(), 2);
    }

    #[test]
    fn telemetry_reflects_current_state() {
        let mut set = make_set();
        let mut hw = RecordingHw::new();
        set.set_speed(150, &mut hw);
        set.set_direction(DriveDirection::Backward, &mut hw);
        let t = set.telemetry();
        assert_eq!(t.speed, 150);
        assert_eq!(t.direction, DriveDirection::Backward);
        assert_eq!(t.steering_deg, 105);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    struct NullHw;
    impl ActuatorPort for NullHw {
        fn set_motor(&mut self, _duty: u8, _dir: DriveDirection) {}
        fn set_steering(&mut self, _angle_deg: i32) {}
        fn all_stop(&mut self) {}
    }

    proptest! {
        #[test]
        fn steering_always_resolves_to_a_preset(angle in any::<i32>()) {
            let mut set = ActuatorSet::new(&SystemConfig::default());
            set.set_steering(angle, &mut NullHw);
            prop_assert!([90, 105, 120].contains(&set.steering_deg()));
        }

        #[test]
        fn steering_resolution_is_monotone_on_the_stops(angle in any::<i32>()) {
            let mut set = ActuatorSet::new(&SystemConfig::default());
            set.set_steering(angle, &mut NullHw);
            if angle <= 90 {
                prop_assert_eq!(set.steering_deg(), 90);
            } else if angle >= 120 {
                prop_assert_eq!(set.steering_deg(), 120);
            } else {
                prop_assert_eq!(set.steering_deg(), 105);
            }
        }
    }
}
