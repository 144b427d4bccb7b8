//! TCP socket adapter over `std::net`.
//!
//! ESP-IDF exposes lwIP through the standard library, so the same code
//! serves both targets: non-blocking listener, non-blocking per-client
//! reads.  Implements the [`ServerSocket`] / [`ClientSocket`] pair the
//! command server is generic over.

use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};

use log::{debug, warn};

use crate::error::SocketError;
use crate::http::transport::{ClientSocket, ServerSocket};

pub struct TcpServerSocket {
    listener: Option<TcpListener>,
}

impl TcpServerSocket {
    pub fn new() -> Self {
        Self { listener: None }
    }
}

impl Default for TcpServerSocket {
    fn default() -> Self {
        Self::new()
    }
}

impl ServerSocket for TcpServerSocket {
    type Client = TcpClientSocket;

    fn listen(&mut self, port: u16) -> Result<(), SocketError> {
        let listener = TcpListener::bind(("0.0.0.0", port)).map_err(|e| {
            warn!("socket: bind on port {port} failed: {e}");
            SocketError::BindFailed
        })?;
        listener.set_nonblocking(true).map_err(|e| {
            warn!("socket: set_nonblocking failed: {e}");
            SocketError::BindFailed
        })?;
        self.listener = Some(listener);
        Ok(())
    }

    fn accept(&mut self) -> Option<TcpClientSocket> {
        let listener = self.listener.as_ref()?;
        match listener.accept() {
            Ok((stream, peer)) => {
                debug!("socket: accepted {peer}");
                // Reads stay non-blocking so a stalled client shows up as
                // WouldBlock rather than hanging the tick forever.
                if stream.set_nonblocking(true).is_err() {
                    return None;
                }
                Some(TcpClientSocket {
                    stream,
                    alive: true,
                })
            }
            Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => None,
            Err(e) => {
                warn!("socket: accept failed: {e}");
                None
            }
        }
    }
}

pub struct TcpClientSocket {
    stream: TcpStream,
    alive: bool,
}

impl ClientSocket for TcpClientSocket {
    fn is_connected(&self) -> bool {
        self.alive
    }

    fn read_byte(&mut self) -> Option<u8> {
        let mut buf = [0u8; 1];
        match self.stream.read(&mut buf) {
            Ok(0) => {
                self.alive = false;
                None
            }
            Ok(_) => Some(buf[0]),
            Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => None,
            Err(_) => {
                self.alive = false;
                None
            }
        }
    }

    fn write_all(&mut self, buf: &[u8]) {
        if let Err(e) = self.stream.write_all(buf) {
            debug!("socket: write failed: {e}");
            self.alive = false;
        }
    }

    fn close(&mut self) {
        let _ = self.stream.shutdown(Shutdown::Both);
        self.alive = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_is_nonblocking_when_nobody_connects() {
        let mut server = TcpServerSocket::new();
        // Port 0: let the OS pick, we only care that accept returns fast.
        server.listen(0).unwrap();
        assert!(server.accept().is_none());
    }

    #[test]
    fn accept_without_listen_is_none() {
        let mut server = TcpServerSocket::new();
        assert!(server.accept().is_none());
    }

    #[test]
    fn end_to_end_byte_exchange() {
        let mut server = TcpServerSocket::new();
        server.listen(0).unwrap();
        let addr = server.listener.as_ref().unwrap().local_addr().unwrap();

        let mut peer = TcpStream::connect(addr).unwrap();
        peer.write_all(b"GET").unwrap();
        peer.flush().unwrap();

        // The accept can race the connect; poll briefly.
        let mut client = None;
        for _ in 0..100 {
            if let Some(c) = server.accept() {
                client = Some(c);
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(1));
        }
        let mut client = client.expect("no client accepted");

        let mut got = Vec::new();
        while got.len() < 3 {
            if let Some(b) = client.read_byte() {
                got.push(b);
            }
        }
        assert_eq!(got, b"GET");

        client.write_all(b"OK");
        client.close();

        let mut reply = Vec::new();
        peer.read_to_end(&mut reply).unwrap();
        assert_eq!(reply, b"OK");
    }
}
