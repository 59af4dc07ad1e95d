//! Error types for Access Control subsystem

use shared_types::{Address, FailureKind};
use thiserror::Error;

/// Access control errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// Caller holds neither the manager nor the owner role
    #[error("Caller {caller:?} is neither manager nor owner")]
    NotManagerOrOwner { caller: Address },

    /// Caller is not the owner
    #[error("Caller {caller:?} is not the owner")]
    NotOwner { caller: Address },

    /// Caller is not the pending owner
    #[error("Caller {caller:?} is not the pending owner")]
    NotPendingOwner { caller: Address },

    /// Ownership cannot be offered to the zero address
    #[error("Pending owner must not be the zero address")]
    ZeroPendingOwner,

    /// Manager is already set to this address
    #[error("Manager is already {manager:?}")]
    ExistingManager { manager: Address },
}

impl AccessError {
    /// Coarse classification of this error.
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::NotManagerOrOwner { .. } | Self::NotOwner { .. } | Self::NotPendingOwner { .. } => {
                FailureKind::NotAuthorized
            }
            Self::ZeroPendingOwner | Self::ExistingManager { .. } => FailureKind::InvalidArgument,
        }
    }
}

/// Result type for access control operations
pub type AccessResult<T> = Result<T, AccessError>;
