//! Ports for the access control subsystem

pub mod inbound;
