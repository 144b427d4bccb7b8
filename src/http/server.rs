//! The command server: accept, parse, route, dispatch, close.
//!
//! One client per tick, serviced to completion before the tick continues.
//! Routing is a fixed table of four endpoints; anything else is a 404.
//! Parameter parsing errors are the client's problem (400), never the
//! system's: the control loop keeps running on its last accepted state.

use core::fmt::Write as _;

use log::{debug, info, warn};

use crate::app::commands::{ActuatorCommand, DriveDirection};
use crate::app::ports::CommandHandler;
use crate::error::SocketError;

use super::form;
use super::page::CONTROL_PAGE;
use super::parser::{Request, RequestParser};
use super::transport::{ClientSocket, ServerSocket};

/// Response buffer.  Sized for the status line, headers and a short body;
/// the HTML page bypasses this and is written straight from its constant.
const MAX_RESPONSE: usize = 512;

pub struct CommandServer<S: ServerSocket> {
    socket: S,
    running: bool,
}

impl<S: ServerSocket> CommandServer<S> {
    pub fn new(socket: S) -> Self {
        Self {
            socket,
            running: false,
        }
    }

    /// Bind and listen.  Failure leaves the server dormant; `update`
    /// becomes a no-op rather than a crash.
    pub fn init(&mut self, port: u16) -> Result<(), SocketError> {
        self.socket.listen(port)?;
        self.running = true;
        info!("http: listening on port {port}");
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// One tick: check for a waiting client and, if present, service it
    /// fully.  Commands routed out of the request go to `handler`.
    pub fn update(&mut self, handler: &mut impl CommandHandler) {
        if !self.running {
            return;
        }
        if let Some(mut client) = self.socket.accept() {
            Self::service(&mut client, handler);
            client.close();
        }
    }

    // ── Request servicing ─────────────────────────────────────

    fn service(client: &mut impl ClientSocket, handler: &mut impl CommandHandler) {
        let mut parser = RequestParser::new();
        while client.is_connected() && !parser.is_done() {
            if let Some(byte) = client.read_byte() {
                parser.feed(byte);
            }
        }
        let request = parser.into_request();
        debug!("http: {} {}", request.method, request.path);
        Self::route(client, &request, handler);
    }

    fn route(client: &mut impl ClientSocket, req: &Request, handler: &mut impl CommandHandler) {
        match (req.method.as_str(), req.path.as_str()) {
            ("GET", "/") => Self::send_page(client),

            ("POST", "/setMotorOutput") => match form::param(&req.body, "value") {
                Some(v) if !v.is_empty() => {
                    let duty = form::parse_int(&v).clamp(0, 255) as u8;
                    handler.handle(ActuatorCommand::SetSpeed(duty));
                    Self::send(client, 200, "text/plain", "OK");
                }
                _ => Self::send(client, 400, "text/plain", "Missing 'value'"),
            },

            ("POST", "/setMotorDir") => match form::param(&req.body, "dir") {
                Some(v) if !v.is_empty() => {
                    let dir = DriveDirection::from_code(form::parse_int(&v));
                    handler.handle(ActuatorCommand::SetDirection(dir));
                    Self::send(client, 200, "text/plain", "OK");
                }
                _ => Self::send(client, 400, "text/plain", "Missing 'dir'"),
            },

            ("POST", "/setServoAngle") => match form::param(&req.body, "angle") {
                Some(v) if !v.is_empty() => {
                    handler.handle(ActuatorCommand::SetSteering(form::parse_int(&v)));
                    Self::send(client, 200, "text/plain", "OK");
                }
                _ => Self::send(client, 400, "text/plain", "Missing 'angle'"),
            },

            (method, path) => {
                warn!("http: no route for {method} {path}");
                Self::send(client, 404, "text/plain", "Page not found");
            }
        }
    }

    // ── Response framing ──────────────────────────────────────

    fn reason(code: u16) -> &'static str {
        match code {
            200 => "OK",
            400 => "Bad Request",
            _ => "Not Found",
        }
    }

    fn send(client: &mut impl ClientSocket, code: u16, content_type: &str, body: &str) {
        let mut resp: heapless::String<MAX_RESPONSE> = heapless::String::new();
        let _ = write!(
            resp,
            "HTTP/1.1 {code} {}\r\nContent-Type: {content_type}\r\nConnection: close\r\n\r\n{body}\r\n",
            Self::reason(code)
        );
        client.write_all(resp.as_bytes());
    }

    fn send_page(client: &mut impl ClientSocket) {
        client.write_all(
            b"HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nConnection: close\r\n\r\n",
        );
        client.write_all(CONTROL_PAGE.as_bytes());
    }
}
