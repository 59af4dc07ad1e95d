//! Ports for the draw timelock subsystem

pub mod inbound;
pub mod outbound;
