//! Static Draw Calculator Adapter
//!
//! Implements `DrawCalculator` with a fixed prize per draw. Used when no real
//! calculator is attached (simulation, local runtime).

use crate::error::TimelockResult;
use crate::ports::outbound::{CalculationOutput, DrawCalculator};
use async_trait::async_trait;
use shared_types::{Address, DrawId, U256};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// Calculator awarding the same prize for every requested draw.
pub struct StaticDrawCalculator {
    address: Address,
    prize_per_draw: U256,
    calls: AtomicU64,
}

impl StaticDrawCalculator {
    pub fn new(address: Address, prize_per_draw: U256) -> Self {
        Self {
            address,
            prize_per_draw,
            calls: AtomicU64::new(0),
        }
    }

    /// Number of calculations served so far.
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl DrawCalculator for StaticDrawCalculator {
    fn address(&self) -> Address {
        self.address
    }

    async fn calculate(
        &self,
        user: Address,
        draw_ids: &[DrawId],
        data: &[u8],
    ) -> TimelockResult<CalculationOutput> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        debug!(
            "[pt-02] Static calculation for {} over {} draws",
            user,
            draw_ids.len()
        );

        Ok(CalculationOutput {
            prizes: vec![self.prize_per_draw; draw_ids.len()],
            data: data.to_vec(),
        })
    }
}
