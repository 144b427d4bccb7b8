//! Property-based tests over the HTTP command boundary: arbitrary network
//! input must never panic the engine, and every accepted command must land
//! inside the actuator envelope.

use proptest::prelude::*;

use roverlink::app::actuators::ActuatorSet;
use roverlink::app::commands::{ActuatorCommand, DriveDirection};
use roverlink::app::ports::{ActuatorPort, CommandHandler};
use roverlink::config::SystemConfig;
use roverlink::error::SocketError;
use roverlink::http::server::CommandServer;
use roverlink::http::transport::{ClientSocket, ServerSocket};

// ── Minimal mock stack ────────────────────────────────────────

struct ByteClient {
    rx: Vec<u8>,
    pos: usize,
    open: bool,
}

impl ClientSocket for ByteClient {
    fn is_connected(&self) -> bool {
        self.open && self.pos <= self.rx.len()
    }
    fn read_byte(&mut self) -> Option<u8> {
        let b = self.rx.get(self.pos).copied();
        self.pos += 1;
        b
    }
    fn write_all(&mut self, _buf: &[u8]) {}
    fn close(&mut self) {
        self.open = false;
    }
}

struct OneShotListener {
    next: Option<Vec<u8>>,
}

impl ServerSocket for OneShotListener {
    type Client = ByteClient;
    fn listen(&mut self, _port: u16) -> Result<(), SocketError> {
        Ok(())
    }
    fn accept(&mut self) -> Option<ByteClient> {
        self.next.take().map(|rx| ByteClient {
            rx,
            pos: 0,
            open: true,
        })
    }
}

struct NullHw;
impl ActuatorPort for NullHw {
    fn set_motor(&mut self, _duty: u8, _dir: DriveDirection) {}
    fn set_steering(&mut self, _angle_deg: i32) {}
    fn all_stop(&mut self) {}
}

/// Applies commands straight onto an actuator set, mirroring the wiring
/// the sequencer uses.
struct ApplyHandler {
    actuators: ActuatorSet,
}

impl CommandHandler for ApplyHandler {
    fn handle(&mut self, cmd: ActuatorCommand) {
        match cmd {
            ActuatorCommand::SetSpeed(d) => self.actuators.set_speed(d, &mut NullHw),
            ActuatorCommand::SetDirection(d) => self.actuators.set_direction(d, &mut NullHw),
            ActuatorCommand::SetSteering(a) => self.actuators.set_steering(a, &mut NullHw),
        }
    }
}

fn serve_raw(raw: Vec<u8>) -> ActuatorSet {
    let mut server = CommandServer::new(OneShotListener { next: Some(raw) });
    server.init(80).unwrap();
    let mut handler = ApplyHandler {
        actuators: ActuatorSet::new(&SystemConfig::default()),
    };
    server.update(&mut handler);
    handler.actuators
}

// ── Properties ────────────────────────────────────────────────

proptest! {
    /// Raw byte soup from the network must never panic the parse or
    /// routing path.
    #[test]
    fn arbitrary_bytes_never_panic_the_server(raw in proptest::collection::vec(any::<u8>(), 0..1024)) {
        let _ = serve_raw(raw);
    }

    /// Whatever integer a client sends, the commanded steering angle is
    /// always one of the three presets.
    #[test]
    fn steering_always_lands_on_a_preset(angle in any::<i32>()) {
        let body = format!("angle={angle}");
        let raw = format!(
            "POST /setServoAngle HTTP/1.1\r\nContent-Length: {}\r\n\r\n{body}",
            body.len()
        );
        let actuators = serve_raw(raw.into_bytes());
        prop_assert!([90, 105, 120].contains(&actuators.steering_deg()));
    }

    /// Speed survives the wire clamped into 0-255, saturating not wrapping.
    #[test]
    fn speed_is_clamped_not_wrapped(value in -1_000_000_i64..1_000_000) {
        let body = format!("value={value}");
        let raw = format!(
            "POST /setMotorOutput HTTP/1.1\r\nContent-Length: {}\r\n\r\n{body}",
            body.len()
        );
        let actuators = serve_raw(raw.into_bytes());
        let expected = value.clamp(0, 255) as u8;
        prop_assert_eq!(actuators.speed(), expected);
    }

    /// Any direction code dispatches, and only 0/1 move the vehicle.
    #[test]
    fn unknown_direction_codes_stop_the_vehicle(code in any::<i32>()) {
        let body = format!("dir={code}");
        let raw = format!(
            "POST /setMotorDir HTTP/1.1\r\nContent-Length: {}\r\n\r\n{body}",
            body.len()
        );
        let actuators = serve_raw(raw.into_bytes());
        let expected = match code {
            0 => DriveDirection::Forward,
            1 => DriveDirection::Backward,
            _ => DriveDirection::Stop,
        };
        prop_assert_eq!(actuators.direction(), expected);
    }
}
