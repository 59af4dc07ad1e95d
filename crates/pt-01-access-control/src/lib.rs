//! # pt-01-access-control
//!
//! Two-tier authorization context shared by the draw timelock and the
//! timelock trigger.
//!
//! ## Overview
//!
//! - **Owner**: unconditionally privileged; the only role that can appoint
//!   the manager or hand over ownership.
//! - **Manager**: may run day-to-day operations (`lock`, `push_draw_settings`)
//!   but never touches role assignments or record overrides.
//!
//! ## Ownership Hand-over
//!
//! ```text
//! owner ──transfer_ownership(p)──→ pending = p ──claim_ownership (by p)──→ owner = p
//!   │
//!   └──renounce_ownership──→ owner = 0x0 (manager keeps its role)
//! ```
//!
//! Consumers depend on the [`AuthorizationContext`] port only; they query a
//! role predicate and never hold role state of their own.
//!
//! ## Example
//!
//! ```rust,ignore
//! use pt_01_access_control::{AuthorizationContext, Manageable, OwnershipApi};
//!
//! let access = Manageable::new(contract, owner, bus.clone());
//! access.set_manager(owner, operator).await?;
//! assert!(access.require_manager_or_owner(&operator).is_ok());
//! ```

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use domain::Roles;
pub use error::{AccessError, AccessResult};
pub use ports::inbound::{AuthorizationContext, OwnershipApi};
pub use service::Manageable;
