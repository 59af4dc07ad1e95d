//! Driven Ports (SPI - Outbound Dependencies)

use crate::error::TriggerResult;
use async_trait::async_trait;
use pt_02_draw_timelock::TimelockResult;
use shared_types::{Address, DistributionId, DrawId, PrizeDistribution, Timestamp};

/// Store receiving prize distributions once their draw is locked.
#[async_trait]
pub trait PrizeDistributionStore: Send + Sync {
    fn address(&self) -> Address;

    /// Record `distribution` for `draw_id` and return its identifier.
    async fn push_prize_distribution(
        &self,
        draw_id: DrawId,
        distribution: PrizeDistribution,
    ) -> TriggerResult<DistributionId>;
}

/// The draw timelock as seen by the trigger.
///
/// Failures come back as the timelock's own error so the trigger can pass
/// them through unchanged.
#[async_trait]
pub trait DrawLockGateway: Send + Sync {
    fn address(&self) -> Address;

    /// Lock `draw_id` until `unlock_timestamp`. `Ok(false)` means the draw
    /// was not locked.
    async fn lock(&self, draw_id: DrawId, unlock_timestamp: Timestamp) -> TimelockResult<bool>;
}
