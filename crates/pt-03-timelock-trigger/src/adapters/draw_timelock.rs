//! Draw Timelock Adapter
//!
//! Implements `DrawLockGateway` on top of an in-process draw timelock.

use crate::ports::outbound::DrawLockGateway;
use async_trait::async_trait;
use pt_02_draw_timelock::{DrawTimelockApi, TimelockResult};
use shared_types::{Address, DrawId, Timestamp};
use std::sync::Arc;
use tracing::debug;

/// Locks draws in a [`DrawTimelockApi`] on behalf of the trigger.
///
/// Every call is made as `caller`, normally the trigger's own address, which
/// must hold the manager (or owner) role on the timelock.
pub struct DrawTimelockAdapter<T: DrawTimelockApi> {
    timelock: Arc<T>,
    caller: Address,
}

impl<T: DrawTimelockApi> DrawTimelockAdapter<T> {
    pub fn new(timelock: Arc<T>, caller: Address) -> Self {
        Self { timelock, caller }
    }

    /// Address the adapter calls the timelock as.
    pub fn caller(&self) -> Address {
        self.caller
    }
}

#[async_trait]
impl<T: DrawTimelockApi + 'static> DrawLockGateway for DrawTimelockAdapter<T> {
    fn address(&self) -> Address {
        self.timelock.address()
    }

    async fn lock(&self, draw_id: DrawId, unlock_timestamp: Timestamp) -> TimelockResult<bool> {
        debug!(
            "[pt-03] Requesting lock of draw {} as {}",
            draw_id, self.caller
        );
        self.timelock
            .lock(self.caller, draw_id, unlock_timestamp)
            .await
    }
}
