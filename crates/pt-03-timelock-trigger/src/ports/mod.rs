//! Ports for the timelock trigger subsystem

pub mod inbound;
pub mod outbound;
