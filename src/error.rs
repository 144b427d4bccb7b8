//! Unified error types for the rover firmware.
//!
//! A single `Error` enum that every subsystem converts into, keeping the
//! top-level boot path's error handling uniform. All variants are `Copy`
//! so they can be passed through the tick loop without allocation.
//!
//! HTTP-level failures (missing parameter, unknown route) are *not* errors
//! in this taxonomy — they are answered in-band with 400/404 responses and
//! never surface to the caller of `CommandServer::update`.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Network link bring-up or credential validation failed.
    Link(LinkError),
    /// The command server's listening socket failed.
    Socket(SocketError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Link(e) => write!(f, "link: {e}"),
            Self::Socket(e) => write!(f, "socket: {e}"),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Link(e) => Some(e),
            Self::Socket(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Network link errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkError {
    /// No credentials have been stored yet.
    NoCredentials,
    /// SSID must be 1-32 printable ASCII bytes.
    InvalidSsid,
    /// Password must be 8-64 bytes for WPA2, or empty for open networks.
    InvalidPassword,
    /// The association attempt exhausted its time budget.
    /// Non-fatal: the link layer keeps retrying at a fixed interval.
    ConnectTimeout,
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCredentials => write!(f, "no WiFi credentials configured"),
            Self::InvalidSsid => write!(f, "SSID invalid (must be 1-32 printable ASCII bytes)"),
            Self::InvalidPassword => {
                write!(f, "password invalid (must be 8-64 bytes for WPA2, or empty for open)")
            }
            Self::ConnectTimeout => write!(f, "connect attempt timed out"),
        }
    }
}

impl From<LinkError> for Error {
    fn from(e: LinkError) -> Self {
        Self::Link(e)
    }
}

impl core::error::Error for LinkError {}

// ---------------------------------------------------------------------------
// Socket errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocketError {
    /// Binding the listening socket failed (port in use, no interface).
    BindFailed,
    /// The accept path returned a hard error (not "no client waiting").
    AcceptFailed,
}

impl fmt::Display for SocketError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BindFailed => write!(f, "bind/listen failed"),
            Self::AcceptFailed => write!(f, "accept failed"),
        }
    }
}

impl From<SocketError> for Error {
    fn from(e: SocketError) -> Self {
        Self::Socket(e)
    }
}

impl core::error::Error for SocketError {}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
