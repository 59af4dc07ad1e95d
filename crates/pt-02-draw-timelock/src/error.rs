//! Error types for Draw Timelock subsystem

use pt_01_access_control::AccessError;
use shared_types::{DrawId, FailureKind, Timestamp};
use thiserror::Error;

/// Draw timelock errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimelockError {
    /// Caller lacks the required role
    #[error("Not authorized: {0}")]
    NotAuthorized(#[from] AccessError),

    /// Lock requested for a draw other than the next one
    ///
    /// `expected` is wider than `DrawId` so that the successor of the last
    /// representable draw can be reported.
    #[error("Draw {requested} is out of order: expected draw {expected}")]
    SequenceOutOfOrder { expected: u64, requested: DrawId },

    /// The locked draw has not reached its unlock time
    #[error("Timelock for draw {draw_id} has not expired: unlocks at {unlock_timestamp}")]
    TimelockNotExpired {
        draw_id: DrawId,
        unlock_timestamp: Timestamp,
    },

    /// The draw calculator failed
    #[error("Draw calculator failed: {reason}")]
    Calculator { reason: String },
}

impl TimelockError {
    /// Coarse classification of this error.
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::NotAuthorized(e) => e.kind(),
            Self::SequenceOutOfOrder { .. } => FailureKind::SequenceOutOfOrder,
            Self::TimelockNotExpired { .. } => FailureKind::TimelockNotExpired,
            Self::Calculator { .. } => FailureKind::Downstream,
        }
    }
}

/// Result type for timelock operations
pub type TimelockResult<T> = Result<T, TimelockError>;
