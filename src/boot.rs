//! Boot milestone tracking.
//!
//! [`BootStep`] is an ordered walk through system bring-up:
//!
//! ```text
//! Start → WifiConnecting → WifiConnected → WifiGotIp → ServerStart → Ready
//! ```
//!
//! Steps only ever advance (the WiFi steps are skipped when association
//! fails — boot still proceeds to `Ready`).  The sequencer owns the current
//! step exclusively and projects each one onto a [`DisplayStatus`] push.

use crate::app::events::DisplayStatus;

/// Ordered milestone marker for system startup progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum BootStep {
    Start = 0,
    WifiConnecting = 1,
    WifiConnected = 2,
    WifiGotIp = 3,
    ServerStart = 4,
    Ready = 5,
}

impl BootStep {
    /// Total number of steps.
    pub const COUNT: usize = 6;

    /// The status shown on the display while this step is current.
    pub fn display_status(self) -> DisplayStatus {
        match self {
            Self::Start => DisplayStatus::BootStart,
            Self::WifiConnecting => DisplayStatus::WifiConnecting,
            Self::WifiConnected => DisplayStatus::WifiConnected,
            Self::WifiGotIp => DisplayStatus::WifiGotIp,
            Self::ServerStart => DisplayStatus::ServerStart,
            Self::Ready => DisplayStatus::Ready,
        }
    }
}
