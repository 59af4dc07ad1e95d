//! Timelock Trigger Service - Core business logic

use crate::config::TriggerConfig;
use crate::error::{TriggerError, TriggerResult};
use crate::ports::inbound::TimelockTriggerApi;
use crate::ports::outbound::{DrawLockGateway, PrizeDistributionStore};
use async_trait::async_trait;
use pt_01_access_control::AuthorizationContext;
use shared_bus::{ContractEvent, EventPublisher};
use shared_types::{Address, Clock, DistributionId, DrawId, PrizeDistribution};
use std::sync::Arc;
use tracing::{info, warn};

/// Timelock Trigger Service implementation
///
/// Holds no state of its own beyond its collaborators and policy.
pub struct TimelockTriggerService<A, S, L>
where
    A: AuthorizationContext,
    S: PrizeDistributionStore,
    L: DrawLockGateway,
{
    address: Address,
    access: Arc<A>,
    history: Arc<S>,
    timelock: Arc<L>,
    clock: Arc<dyn Clock>,
    events: Arc<dyn EventPublisher>,
    config: TriggerConfig,
}

impl<A, S, L> TimelockTriggerService<A, S, L>
where
    A: AuthorizationContext,
    S: PrizeDistributionStore,
    L: DrawLockGateway,
{
    /// Construct the trigger and announce it on the bus.
    pub async fn deploy(
        address: Address,
        access: Arc<A>,
        history: Arc<S>,
        timelock: Arc<L>,
        clock: Arc<dyn Clock>,
        events: Arc<dyn EventPublisher>,
        config: TriggerConfig,
    ) -> Self {
        let service = Self {
            address,
            access,
            history,
            timelock,
            clock,
            events,
            config,
        };

        info!(
            "[pt-03] Timelock trigger {} deployed (history {}, timelock {}, duration {}s)",
            service.address,
            service.history.address(),
            service.timelock.address(),
            service.config.timelock_duration_secs
        );

        service
            .events
            .publish(ContractEvent::TriggerDeployed {
                trigger: service.address,
                prize_distribution_history: service.history.address(),
                timelock: service.timelock.address(),
            })
            .await;

        service
    }
}

#[async_trait]
impl<A, S, L> TimelockTriggerApi for TimelockTriggerService<A, S, L>
where
    A: AuthorizationContext + 'static,
    S: PrizeDistributionStore + 'static,
    L: DrawLockGateway + 'static,
{
    fn address(&self) -> Address {
        self.address
    }

    fn prize_distribution_history(&self) -> Address {
        self.history.address()
    }

    fn timelock(&self) -> Address {
        self.timelock.address()
    }

    fn config(&self) -> TriggerConfig {
        self.config
    }

    async fn push_draw_settings(
        &self,
        caller: Address,
        draw_id: DrawId,
        distribution: PrizeDistribution,
    ) -> TriggerResult<DistributionId> {
        self.access
            .require_manager_or_owner(&caller)
            .inspect_err(|e| warn!("[pt-03] push of draw {} rejected: {}", draw_id, e))?;

        let unlock_timestamp = self.config.unlock_timestamp(self.clock.now());

        let locked = self
            .timelock
            .lock(draw_id, unlock_timestamp)
            .await
            .inspect_err(|e| warn!("[pt-03] lock of draw {} failed: {}", draw_id, e))?;
        if !locked {
            warn!("[pt-03] timelock did not lock draw {}", draw_id);
            return Err(TriggerError::LockRefused { draw_id });
        }

        let distribution_id = self
            .history
            .push_prize_distribution(draw_id, distribution)
            .await
            .inspect_err(|e| warn!("[pt-03] push of draw {} failed: {}", draw_id, e))?;

        info!(
            "[pt-03] Pushed draw {} as distribution {} (locked until {})",
            draw_id, distribution_id, unlock_timestamp
        );

        self.events
            .publish(ContractEvent::PrizeDistributionPushed {
                trigger: self.address,
                draw_id,
                distribution_id,
            })
            .await;

        Ok(distribution_id)
    }
}
