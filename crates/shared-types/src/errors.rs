//! # Error Types
//!
//! Defines error types used across subsystems.

use thiserror::Error;

/// Coarse classification shared by every subsystem error.
///
/// Callers branch on the kind instead of matching each crate's enum, so a
/// timelock rejection surfacing through the trigger is handled the same way
/// as one raised by the timelock directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Caller lacks the role the operation requires.
    NotAuthorized,
    /// A lock targeted a draw id other than the next one.
    SequenceOutOfOrder,
    /// The currently locked draw has not reached its unlock time.
    TimelockNotExpired,
    /// An argument was rejected before any state was touched.
    InvalidArgument,
    /// A downstream collaborator failed.
    Downstream,
}

impl FailureKind {
    /// Returns true if retrying later, with no other change, may succeed.
    #[must_use]
    pub fn is_time_dependent(&self) -> bool {
        matches!(self, Self::TimelockNotExpired)
    }
}

/// Errors from parsing a textual address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressParseError {
    /// Input is not valid hexadecimal.
    #[error("Invalid hex address: {reason}")]
    InvalidHex { reason: String },

    /// Decoded input is not 20 bytes long.
    #[error("Invalid address length: expected 20 bytes, got {len}")]
    InvalidLength { len: usize },
}
