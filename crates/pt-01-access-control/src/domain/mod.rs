//! Role state and its transitions
//!
//! Pure functions over [`Roles`]; the service layer adds locking and event
//! publication. Every transition validates first and mutates only on success.

use crate::error::{AccessError, AccessResult};
use shared_types::Address;

/// Current owner, pending owner and manager of one component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Roles {
    owner: Address,
    pending_owner: Option<Address>,
    manager: Option<Address>,
}

impl Roles {
    /// Roles with `owner` set and nothing else.
    #[must_use]
    pub fn new(owner: Address) -> Self {
        Self {
            owner,
            pending_owner: None,
            manager: None,
        }
    }

    /// Current owner. Zero once ownership has been renounced.
    #[must_use]
    pub fn owner(&self) -> Address {
        self.owner
    }

    #[must_use]
    pub fn pending_owner(&self) -> Option<Address> {
        self.pending_owner
    }

    #[must_use]
    pub fn manager(&self) -> Option<Address> {
        self.manager
    }

    /// The zero address never holds a role.
    #[must_use]
    pub fn is_owner(&self, caller: &Address) -> bool {
        !caller.is_zero() && *caller == self.owner
    }

    #[must_use]
    pub fn is_manager(&self, caller: &Address) -> bool {
        !caller.is_zero() && self.manager == Some(*caller)
    }

    fn require_owner(&self, caller: &Address) -> AccessResult<()> {
        if self.is_owner(caller) {
            Ok(())
        } else {
            Err(AccessError::NotOwner { caller: *caller })
        }
    }

    /// Appoint `new_manager`, or clear the role with the zero address.
    ///
    /// Returns the previous manager (zero if none).
    pub fn set_manager(&mut self, caller: &Address, new_manager: Address) -> AccessResult<Address> {
        self.require_owner(caller)?;

        let previous = self.manager.unwrap_or(Address::ZERO);
        if previous == new_manager {
            return Err(AccessError::ExistingManager {
                manager: new_manager,
            });
        }

        self.manager = (!new_manager.is_zero()).then_some(new_manager);
        Ok(previous)
    }

    /// Offer ownership to `pending`. Replaces any earlier offer.
    pub fn offer_ownership(&mut self, caller: &Address, pending: Address) -> AccessResult<()> {
        self.require_owner(caller)?;
        if pending.is_zero() {
            return Err(AccessError::ZeroPendingOwner);
        }

        self.pending_owner = Some(pending);
        Ok(())
    }

    /// Accept a pending offer. Returns the previous owner.
    pub fn claim_ownership(&mut self, caller: &Address) -> AccessResult<Address> {
        match self.pending_owner {
            Some(pending) if !caller.is_zero() && pending == *caller => {
                let previous = self.owner;
                self.owner = pending;
                self.pending_owner = None;
                Ok(previous)
            }
            _ => Err(AccessError::NotPendingOwner { caller: *caller }),
        }
    }

    /// Give up ownership for good. Returns the previous owner.
    ///
    /// Any outstanding offer is withdrawn; the manager keeps its role.
    pub fn renounce_ownership(&mut self, caller: &Address) -> AccessResult<Address> {
        self.require_owner(caller)?;

        let previous = self.owner;
        self.owner = Address::ZERO;
        self.pending_owner = None;
        Ok(previous)
    }
}
