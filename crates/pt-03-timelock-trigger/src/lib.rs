//! # pt-03-timelock-trigger
//!
//! Pushes prize distribution settings for a draw, but only after locking that
//! draw in the draw timelock.
//!
//! ## Push Flow
//!
//! ```text
//! Owner/Manager ──push_draw_settings(id, settings)──→ Trigger (3)
//!                                                       │
//!                          lock(id, now + duration) ←───┤ 1. guard
//!                          Draw Timelock (2)            │
//!                                                       │
//!                push_prize_distribution(id, settings) ←┘ 2. effect
//!                Prize Distribution History
//! ```
//!
//! A failed lock aborts the push before the history is touched, and the
//! timelock's failure is returned unchanged inside [`TriggerError::Timelock`].
//!
//! ## Example
//!
//! ```rust,ignore
//! use pt_03_timelock_trigger::{TimelockTriggerApi, TimelockTriggerService, TriggerConfig};
//!
//! let trigger = TimelockTriggerService::deploy(
//!     address, access, history, gateway, clock, bus, TriggerConfig::default(),
//! ).await;
//! let id = trigger.push_draw_settings(owner, 0, settings).await?;
//! ```

pub mod adapters;
pub mod config;
pub mod error;
pub mod ports;
pub mod service;

pub use adapters::{DrawTimelockAdapter, InMemoryPrizeDistributionHistory};
pub use config::TriggerConfig;
pub use error::{TriggerError, TriggerResult};
pub use ports::inbound::TimelockTriggerApi;
pub use ports::outbound::{DrawLockGateway, PrizeDistributionStore};
pub use service::TimelockTriggerService;
