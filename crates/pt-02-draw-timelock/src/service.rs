//! Draw Timelock Service - Core business logic

use crate::domain::{Timelock, TimelockPhase, TimelockState};
use crate::error::TimelockResult;
use crate::ports::inbound::DrawTimelockApi;
use crate::ports::outbound::{CalculationOutput, DrawCalculator};
use async_trait::async_trait;
use parking_lot::RwLock;
use pt_01_access_control::AuthorizationContext;
use shared_bus::{ContractEvent, EventPublisher};
use shared_types::{Address, Bytes, Clock, DrawId, Timestamp};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Draw Timelock Service implementation
pub struct DrawTimelockService<A, C>
where
    A: AuthorizationContext,
    C: DrawCalculator,
{
    address: Address,
    state: RwLock<TimelockState>,
    access: Arc<A>,
    calculator: Arc<C>,
    clock: Arc<dyn Clock>,
    events: Arc<dyn EventPublisher>,
}

impl<A, C> DrawTimelockService<A, C>
where
    A: AuthorizationContext,
    C: DrawCalculator,
{
    /// Construct a timelock in pristine state and announce it on the bus.
    pub async fn deploy(
        address: Address,
        access: Arc<A>,
        calculator: Arc<C>,
        clock: Arc<dyn Clock>,
        events: Arc<dyn EventPublisher>,
    ) -> Self {
        let service = Self {
            address,
            state: RwLock::new(TimelockState::new()),
            access,
            calculator,
            clock,
            events,
        };

        info!(
            "[pt-02] Draw timelock {} deployed guarding calculator {}",
            service.address,
            service.calculator.address()
        );

        service
            .events
            .publish(ContractEvent::TimelockDeployed {
                timelock: service.address,
                draw_calculator: service.calculator.address(),
            })
            .await;

        service
    }

    /// Snapshot of the record and its sequence bookkeeping.
    pub fn state(&self) -> TimelockState {
        self.state.read().clone()
    }
}

#[async_trait]
impl<A, C> DrawTimelockApi for DrawTimelockService<A, C>
where
    A: AuthorizationContext + 'static,
    C: DrawCalculator + 'static,
{
    fn address(&self) -> Address {
        self.address
    }

    fn draw_calculator(&self) -> Address {
        self.calculator.address()
    }

    fn get_timelock(&self) -> Timelock {
        self.state.read().record()
    }

    fn has_elapsed(&self) -> bool {
        self.get_timelock().has_elapsed(self.clock.now())
    }

    fn phase(&self) -> TimelockPhase {
        self.get_timelock().phase(self.clock.now())
    }

    async fn set_timelock(&self, caller: Address, timelock: Timelock) -> TimelockResult<()> {
        self.access
            .require_owner(&caller)
            .inspect_err(|e| warn!("[pt-02] set_timelock rejected: {}", e))?;

        self.state.write().overwrite(timelock);

        info!(
            "[pt-02] Timelock forced to draw {} unlocking at {}",
            timelock.draw_id, timelock.timestamp
        );

        self.events
            .publish(ContractEvent::TimelockSet {
                timelock: self.address,
                draw_id: timelock.draw_id,
                timestamp: timelock.timestamp,
            })
            .await;

        Ok(())
    }

    async fn lock(
        &self,
        caller: Address,
        draw_id: DrawId,
        unlock_timestamp: Timestamp,
    ) -> TimelockResult<bool> {
        self.access
            .require_manager_or_owner(&caller)
            .inspect_err(|e| warn!("[pt-02] lock of draw {} rejected: {}", draw_id, e))?;

        self.state
            .write()
            .lock(draw_id, unlock_timestamp)
            .inspect_err(|e| warn!("[pt-02] lock rejected: {}", e))?;

        info!(
            "[pt-02] Locked draw {} until {}",
            draw_id, unlock_timestamp
        );

        self.events
            .publish(ContractEvent::LockedDraw {
                timelock: self.address,
                draw_id,
                unlock_timestamp,
            })
            .await;

        Ok(true)
    }

    async fn calculate(
        &self,
        user: Address,
        draw_ids: Vec<DrawId>,
        data: Bytes,
    ) -> TimelockResult<CalculationOutput> {
        let now = self.clock.now();
        self.state
            .read()
            .guard(&draw_ids, now)
            .inspect_err(|e| debug!("[pt-02] calculate refused: {}", e))?;

        self.calculator.calculate(user, &draw_ids, &data).await
    }
}
