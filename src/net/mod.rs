//! Network lifecycle: credential-owning link layer and the link-state
//! edge classification the sequencer uses to drive the display.

pub mod edge;
pub mod link;
