//! Link-state edge classification.
//!
//! The sequencer recomputes the displayed status once per tick from the
//! pair (previous link state, current link state).  Making the four-case
//! table explicit keeps it exhaustive and testable without timing: the
//! match below cannot silently miss a combination.

/// Instantaneous connectivity classification of the network radio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    Disconnected,
    Connected,
}

impl From<bool> for LinkState {
    fn from(connected: bool) -> Self {
        if connected {
            Self::Connected
        } else {
            Self::Disconnected
        }
    }
}

/// What happened to the link between two consecutive ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkEdge {
    /// Disconnected → Connected: announce the fresh address.
    CameUp,
    /// Connected → Disconnected: show the reconnecting status.
    WentDown,
    /// No transition (in either direction).
    Steady,
}

/// Classify the transition from `prev` to `current`.
pub fn classify(prev: LinkState, current: LinkState) -> LinkEdge {
    use LinkState::{Connected, Disconnected};
    match (prev, current) {
        (Disconnected, Connected) => LinkEdge::CameUp,
        (Connected, Disconnected) => LinkEdge::WentDown,
        (Connected, Connected) | (Disconnected, Disconnected) => LinkEdge::Steady,
    }
}
