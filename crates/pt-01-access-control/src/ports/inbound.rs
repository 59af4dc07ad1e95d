//! Driving Ports (API - Inbound)

use crate::error::{AccessError, AccessResult};
use async_trait::async_trait;
use shared_types::Address;

/// Role predicates consulted by every privileged operation.
///
/// This is the only view other subsystems have of access control. One
/// context may back several components; each holds it by reference.
pub trait AuthorizationContext: Send + Sync {
    /// True if `caller` is the owner.
    fn is_owner(&self, caller: &Address) -> bool;

    /// True if `caller` is the manager.
    fn is_manager(&self, caller: &Address) -> bool;

    /// Fail unless `caller` is the owner.
    fn require_owner(&self, caller: &Address) -> AccessResult<()> {
        if self.is_owner(caller) {
            Ok(())
        } else {
            Err(AccessError::NotOwner { caller: *caller })
        }
    }

    /// Fail unless `caller` is the manager or the owner.
    fn require_manager_or_owner(&self, caller: &Address) -> AccessResult<()> {
        if self.is_manager(caller) || self.is_owner(caller) {
            Ok(())
        } else {
            Err(AccessError::NotManagerOrOwner { caller: *caller })
        }
    }
}

/// Role administration API
#[async_trait]
pub trait OwnershipApi: Send + Sync {
    /// Current owner (zero after renouncing).
    fn owner(&self) -> Address;

    /// Address ownership has been offered to, if any.
    fn pending_owner(&self) -> Option<Address>;

    /// Current manager, if any.
    fn manager(&self) -> Option<Address>;

    /// Appoint a manager, or clear the role with the zero address.
    ///
    /// Owner only. Fails if `new_manager` already holds the role.
    async fn set_manager(&self, caller: Address, new_manager: Address) -> AccessResult<bool>;

    /// Offer ownership to `pending_owner`. Owner only.
    async fn transfer_ownership(&self, caller: Address, pending_owner: Address)
        -> AccessResult<()>;

    /// Accept the outstanding offer. Pending owner only.
    async fn claim_ownership(&self, caller: Address) -> AccessResult<()>;

    /// Give up ownership permanently. Owner only.
    async fn renounce_ownership(&self, caller: Address) -> AccessResult<()>;
}
