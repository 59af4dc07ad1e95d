//! # Event Log Handler
//!
//! Writes every `ContractEvent` to the log, giving an audit trail of
//! deployments, role changes, locks and pushes.

use shared_bus::{ContractEvent, Subscription};
use tracing::info;

/// Logs each event received on its subscription.
pub struct EventLogHandler {
    subscription: Subscription,
}

impl EventLogHandler {
    pub fn new(subscription: Subscription) -> Self {
        Self { subscription }
    }

    /// Run until the bus closes. Returns the number of events logged.
    pub async fn run(mut self) -> u64 {
        info!("Event log handler started");
        let mut logged = 0u64;

        while let Some(event) = self.subscription.recv().await {
            log_event(&event);
            logged += 1;
        }

        info!("Event log handler stopped after {} events", logged);
        logged
    }
}

fn log_event(event: &ContractEvent) {
    match event {
        ContractEvent::OwnershipOffered {
            contract,
            pending_owner,
        } => info!("[pt-01] {} OwnershipOffered -> {}", contract, pending_owner),
        ContractEvent::OwnershipTransferred {
            contract,
            previous_owner,
            new_owner,
        } => info!(
            "[pt-01] {} OwnershipTransferred {} -> {}",
            contract, previous_owner, new_owner
        ),
        ContractEvent::ManagerTransferred {
            contract,
            previous_manager,
            new_manager,
        } => info!(
            "[pt-01] {} ManagerTransferred {} -> {}",
            contract, previous_manager, new_manager
        ),
        ContractEvent::TimelockDeployed {
            timelock,
            draw_calculator,
        } => info!("[pt-02] {} Deployed (calculator {})", timelock, draw_calculator),
        ContractEvent::TimelockSet {
            timelock,
            draw_id,
            timestamp,
        } => info!(
            "[pt-02] {} TimelockSet draw {} at {}",
            timelock, draw_id, timestamp
        ),
        ContractEvent::LockedDraw {
            timelock,
            draw_id,
            unlock_timestamp,
        } => info!(
            "[pt-02] {} LockedDraw {} until {}",
            timelock, draw_id, unlock_timestamp
        ),
        ContractEvent::TriggerDeployed {
            trigger,
            prize_distribution_history,
            timelock,
        } => info!(
            "[pt-03] {} Deployed (history {}, timelock {})",
            trigger, prize_distribution_history, timelock
        ),
        ContractEvent::PrizeDistributionPushed {
            trigger,
            draw_id,
            distribution_id,
        } => info!(
            "[pt-03] {} PrizeDistributionPushed draw {} as {}",
            trigger, draw_id, distribution_id
        ),
    }
}
