//! Domain layer for the draw timelock

pub mod timelock;

pub use timelock::{Timelock, TimelockPhase, TimelockState};
