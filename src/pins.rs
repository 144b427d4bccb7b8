//! GPIO / peripheral pin assignments for the rover main board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Drive motor driver (DRV8871 H-bridge)
// ---------------------------------------------------------------------------

/// LEDC PWM output for drive motor speed control.
pub const MOTOR_PWM_GPIO: i32 = 1;
/// H-bridge input 1. IN1=HIGH, IN2=LOW → forward.
pub const MOTOR_IN1_GPIO: i32 = 2;
/// H-bridge input 2. IN1=LOW, IN2=HIGH → reverse. Both LOW → coast/stop.
pub const MOTOR_IN2_GPIO: i32 = 3;

// ---------------------------------------------------------------------------
// Steering servo (standard 50 Hz hobby servo)
// ---------------------------------------------------------------------------

/// LEDC PWM output for the steering servo signal line.
pub const SERVO_PWM_GPIO: i32 = 4;

// ---------------------------------------------------------------------------
// Status display (I²C OLED)
// ---------------------------------------------------------------------------

pub const I2C_SDA_GPIO: i32 = 14;
pub const I2C_SCL_GPIO: i32 = 15;

// ---------------------------------------------------------------------------
// UART debug
// ---------------------------------------------------------------------------

pub const UART_TX_GPIO: i32 = 17;
pub const UART_RX_GPIO: i32 = 18;

// ---------------------------------------------------------------------------
// PWM configuration
// ---------------------------------------------------------------------------

/// LEDC resolution for the drive motor (bits). 8-bit gives 0-255 duty levels,
/// matching the HTTP API's speed range directly.
pub const MOTOR_PWM_RESOLUTION_BITS: u32 = 8;
/// LEDC base frequency for the drive motor (25 kHz — inaudible).
pub const MOTOR_PWM_FREQ_HZ: u32 = 25_000;

/// LEDC resolution for the servo timer (bits). 14-bit at 50 Hz gives
/// ~1.2 µs of pulse-width granularity.
pub const SERVO_PWM_RESOLUTION_BITS: u32 = 14;
/// Standard hobby-servo frame rate.
pub const SERVO_PWM_FREQ_HZ: u32 = 50;
/// Servo pulse width at 0° (microseconds).
pub const SERVO_MIN_PULSE_US: u32 = 500;
/// Servo pulse width at 180° (microseconds).
pub const SERVO_MAX_PULSE_US: u32 = 2500;
