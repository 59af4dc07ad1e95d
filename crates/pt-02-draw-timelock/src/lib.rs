//! # pt-02-draw-timelock
//!
//! Sequence-gated timelock guarding draw result calculation.
//!
//! ## Overview
//!
//! The timelock holds exactly one record, `(draw_id, timestamp)`:
//! - **lock**: owner or manager locks the *next* draw id with an unlock time
//! - **set_timelock**: owner overwrites the record unconditionally
//! - **calculate**: pass-through to the draw calculator, refused while the
//!   currently locked draw is still inside its timelock
//!
//! ## Architecture
//!
//! ```text
//! Trigger (3) ──lock(draw_id, unlock)──→ Draw Timelock (2)
//!                                            │
//! Claimer ──────calculate(user, ids)───────→ │ guard ──→ Draw Calculator
//! ```
//!
//! ## Record State Machine
//!
//! ```text
//!             now >= timestamp
//! [ARMED] ─────────────────────→ [ELAPSED]
//!    ↑                               │
//!    └──── lock / set_timelock ──────┘   (either may also land directly in ELAPSED)
//! ```
//!
//! A pristine timelock reports `(0, 0)` and is elapsed. Its first lock may
//! target draw `0` or draw `1`; from then on only `draw_id + 1` is accepted,
//! so draw `0` can be locked at most once.
//!
//! ## Example
//!
//! ```rust,ignore
//! use pt_02_draw_timelock::{DrawTimelockApi, DrawTimelockService};
//!
//! let timelock = DrawTimelockService::deploy(address, access, calculator, clock, bus).await;
//! timelock.lock(owner, 0, clock.now() + 100).await?;
//! assert!(!timelock.has_elapsed());
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use adapters::StaticDrawCalculator;
pub use domain::{Timelock, TimelockPhase, TimelockState};
pub use error::{TimelockError, TimelockResult};
pub use ports::inbound::DrawTimelockApi;
pub use ports::outbound::{CalculationOutput, DrawCalculator};
pub use service::DrawTimelockService;
