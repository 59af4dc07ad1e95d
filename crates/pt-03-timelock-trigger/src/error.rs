//! Error types for Timelock Trigger subsystem

use pt_01_access_control::AccessError;
use pt_02_draw_timelock::TimelockError;
use shared_types::{DrawId, FailureKind};
use thiserror::Error;

/// Timelock trigger errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriggerError {
    /// Caller lacks the required role on the trigger
    #[error("Not authorized: {0}")]
    NotAuthorized(#[from] AccessError),

    /// The draw timelock refused the lock
    #[error(transparent)]
    Timelock(#[from] TimelockError),

    /// The draw timelock answered the lock without locking
    #[error("Draw timelock did not lock draw {draw_id}")]
    LockRefused { draw_id: DrawId },

    /// The prize distribution history refused the push
    #[error("Prize distribution history failed: {reason}")]
    DistributionStore { reason: String },
}

impl TriggerError {
    /// Coarse classification. Timelock failures keep the timelock's kind.
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::NotAuthorized(e) => e.kind(),
            Self::Timelock(e) => e.kind(),
            Self::LockRefused { .. } | Self::DistributionStore { .. } => FailureKind::Downstream,
        }
    }
}

/// Result type for trigger operations
pub type TriggerResult<T> = Result<T, TriggerError>;
