//! # Shared Types Crate
//!
//! This crate contains the domain primitives used by the draw timelock, the
//! timelock trigger and the access-control subsystem.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: Cross-subsystem types are defined here.
//! - **Injected Time**: Nothing reads the wall clock directly; every
//!   time-dependent decision goes through the [`Clock`] port.
//! - **Envelope-Only Identity**: Payloads carry no caller identity. The
//!   caller `Address` is passed alongside each privileged operation.

pub mod clock;
pub mod entities;
pub mod errors;

pub use clock::{Clock, ManualClock, SystemClock};
pub use entities::*;
pub use errors::*;
