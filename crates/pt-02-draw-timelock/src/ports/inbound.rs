//! Driving Ports (API - Inbound)

use crate::domain::{Timelock, TimelockPhase};
use crate::error::TimelockResult;
use crate::ports::outbound::CalculationOutput;
use async_trait::async_trait;
use shared_types::{Address, Bytes, DrawId, Timestamp};

/// Primary Draw Timelock API
///
/// `lock` and `set_timelock` are privileged; reads and `calculate` are open
/// to anyone.
#[async_trait]
pub trait DrawTimelockApi: Send + Sync {
    /// Address of this timelock.
    fn address(&self) -> Address;

    /// Address of the guarded draw calculator.
    fn draw_calculator(&self) -> Address;

    /// Current record.
    fn get_timelock(&self) -> Timelock;

    /// True if the current time is at or past the record's unlock time.
    fn has_elapsed(&self) -> bool;

    /// Phase of the record at the current time.
    fn phase(&self) -> TimelockPhase;

    /// Overwrite the record without any sequence check. Owner only.
    async fn set_timelock(&self, caller: Address, timelock: Timelock) -> TimelockResult<()>;

    /// Lock the next draw until `unlock_timestamp`. Owner or manager only.
    ///
    /// # Errors
    /// * `NotAuthorized` - caller is neither owner nor manager
    /// * `SequenceOutOfOrder` - `draw_id` is not the next draw
    async fn lock(
        &self,
        caller: Address,
        draw_id: DrawId,
        unlock_timestamp: Timestamp,
    ) -> TimelockResult<bool>;

    /// Guarded pass-through to the draw calculator.
    ///
    /// # Errors
    /// * `TimelockNotExpired` - `draw_ids` contains the locked, still armed draw
    /// * `Calculator` - the calculator itself failed
    async fn calculate(
        &self,
        user: Address,
        draw_ids: Vec<DrawId>,
        data: Bytes,
    ) -> TimelockResult<CalculationOutput>;
}
