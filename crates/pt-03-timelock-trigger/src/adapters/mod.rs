//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements outbound port traits for in-process operation.

mod draw_timelock;
mod history;

pub use draw_timelock::DrawTimelockAdapter;
pub use history::InMemoryPrizeDistributionHistory;
