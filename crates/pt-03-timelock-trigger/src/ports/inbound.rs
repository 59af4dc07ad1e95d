//! Driving Ports (API - Inbound)

use crate::config::TriggerConfig;
use crate::error::TriggerResult;
use async_trait::async_trait;
use shared_types::{Address, DistributionId, DrawId, PrizeDistribution};

/// Primary Timelock Trigger API
#[async_trait]
pub trait TimelockTriggerApi: Send + Sync {
    /// Address of this trigger.
    fn address(&self) -> Address;

    /// Address of the prize distribution history pushes land in.
    fn prize_distribution_history(&self) -> Address;

    /// Address of the draw timelock locked on every push.
    fn timelock(&self) -> Address;

    /// Active policy.
    fn config(&self) -> TriggerConfig;

    /// Lock `draw_id` in the timelock, then push `distribution` to the history.
    ///
    /// Owner or manager only.
    ///
    /// # Errors
    /// * `NotAuthorized` - caller is neither owner nor manager of the trigger
    /// * `Timelock` - the lock failed; the history was not called
    /// * `DistributionStore` - the history refused the push after the lock
    async fn push_draw_settings(
        &self,
        caller: Address,
        draw_id: DrawId,
        distribution: PrizeDistribution,
    ) -> TriggerResult<DistributionId>;
}
