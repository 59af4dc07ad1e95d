//! Manageable - owner/manager authorization context

use crate::domain::Roles;
use crate::error::AccessResult;
use crate::ports::inbound::{AuthorizationContext, OwnershipApi};
use async_trait::async_trait;
use parking_lot::RwLock;
use shared_bus::{ContractEvent, EventPublisher};
use shared_types::Address;
use std::sync::Arc;
use tracing::{info, warn};

/// Role registry for one component, publishing every change on the bus.
pub struct Manageable {
    contract: Address,
    roles: RwLock<Roles>,
    events: Arc<dyn EventPublisher>,
}

impl Manageable {
    /// Create a context for `contract` owned by `owner`, with no manager.
    pub fn new(contract: Address, owner: Address, events: Arc<dyn EventPublisher>) -> Self {
        Self {
            contract,
            roles: RwLock::new(Roles::new(owner)),
            events,
        }
    }

    /// Address of the component these roles belong to.
    pub fn contract(&self) -> Address {
        self.contract
    }

    /// Snapshot of the current roles.
    pub fn roles(&self) -> Roles {
        self.roles.read().clone()
    }
}

impl AuthorizationContext for Manageable {
    fn is_owner(&self, caller: &Address) -> bool {
        self.roles.read().is_owner(caller)
    }

    fn is_manager(&self, caller: &Address) -> bool {
        self.roles.read().is_manager(caller)
    }
}

#[async_trait]
impl OwnershipApi for Manageable {
    fn owner(&self) -> Address {
        self.roles.read().owner()
    }

    fn pending_owner(&self) -> Option<Address> {
        self.roles.read().pending_owner()
    }

    fn manager(&self) -> Option<Address> {
        self.roles.read().manager()
    }

    async fn set_manager(&self, caller: Address, new_manager: Address) -> AccessResult<bool> {
        let previous_manager = self
            .roles
            .write()
            .set_manager(&caller, new_manager)
            .inspect_err(|e| warn!("[pt-01] set_manager rejected: {}", e))?;

        info!(
            "[pt-01] Manager of {} changed {} -> {}",
            self.contract, previous_manager, new_manager
        );

        self.events
            .publish(ContractEvent::ManagerTransferred {
                contract: self.contract,
                previous_manager,
                new_manager,
            })
            .await;

        Ok(true)
    }

    async fn transfer_ownership(
        &self,
        caller: Address,
        pending_owner: Address,
    ) -> AccessResult<()> {
        self.roles
            .write()
            .offer_ownership(&caller, pending_owner)
            .inspect_err(|e| warn!("[pt-01] transfer_ownership rejected: {}", e))?;

        info!(
            "[pt-01] Ownership of {} offered to {}",
            self.contract, pending_owner
        );

        self.events
            .publish(ContractEvent::OwnershipOffered {
                contract: self.contract,
                pending_owner,
            })
            .await;

        Ok(())
    }

    async fn claim_ownership(&self, caller: Address) -> AccessResult<()> {
        let previous_owner = self
            .roles
            .write()
            .claim_ownership(&caller)
            .inspect_err(|e| warn!("[pt-01] claim_ownership rejected: {}", e))?;

        info!("[pt-01] Ownership of {} claimed by {}", self.contract, caller);

        self.events
            .publish(ContractEvent::OwnershipTransferred {
                contract: self.contract,
                previous_owner,
                new_owner: caller,
            })
            .await;

        Ok(())
    }

    async fn renounce_ownership(&self, caller: Address) -> AccessResult<()> {
        let previous_owner = self
            .roles
            .write()
            .renounce_ownership(&caller)
            .inspect_err(|e| warn!("[pt-01] renounce_ownership rejected: {}", e))?;

        info!("[pt-01] Ownership of {} renounced", self.contract);

        self.events
            .publish(ContractEvent::OwnershipTransferred {
                contract: self.contract,
                previous_owner,
                new_owner: Address::ZERO,
            })
            .await;

        Ok(())
    }
}
