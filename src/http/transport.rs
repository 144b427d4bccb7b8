//! Socket traits — the boundary between the HTTP engine and the TCP stack.
//!
//! The command server is generic over these, so the engine runs unmodified
//! against ESP-IDF's lwIP-backed `std::net` in production and against
//! in-memory mocks in tests.

use crate::error::SocketError;

/// A listening TCP socket.
pub trait ServerSocket {
    type Client: ClientSocket;

    /// Bind and start listening on `port`.
    fn listen(&mut self, port: u16) -> Result<(), SocketError>;

    /// One non-blocking accept check.  `None` when no client is waiting.
    fn accept(&mut self) -> Option<Self::Client>;
}

/// One accepted client connection.
pub trait ClientSocket {
    /// Whether the peer is still connected (EOF and hard errors count as
    /// disconnected).
    fn is_connected(&self) -> bool;

    /// Non-blocking single-byte read.  `None` when no byte is available
    /// right now — the caller decides whether to keep spinning.
    fn read_byte(&mut self) -> Option<u8>;

    /// Best-effort write of the whole buffer.
    fn write_all(&mut self, buf: &[u8]);

    /// Close the connection.
    fn close(&mut self);
}
