//! In-memory Prize Distribution History
//!
//! Implements `PrizeDistributionStore` with a map keyed by draw id.

use crate::error::{TriggerError, TriggerResult};
use crate::ports::outbound::PrizeDistributionStore;
use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{Address, DistributionId, DrawId, PrizeDistribution};
use std::collections::BTreeMap;
use tracing::debug;

/// Distribution history held in process memory.
///
/// Each draw can be pushed once; the returned identifier is the draw id.
pub struct InMemoryPrizeDistributionHistory {
    address: Address,
    distributions: RwLock<BTreeMap<DrawId, PrizeDistribution>>,
}

impl InMemoryPrizeDistributionHistory {
    pub fn new(address: Address) -> Self {
        Self {
            address,
            distributions: RwLock::new(BTreeMap::new()),
        }
    }

    /// Distribution stored for `draw_id`, if any.
    pub fn get(&self, draw_id: DrawId) -> Option<PrizeDistribution> {
        self.distributions.read().get(&draw_id).cloned()
    }

    /// Most recently pushed draw id.
    pub fn newest_draw_id(&self) -> Option<DrawId> {
        self.distributions.read().keys().next_back().copied()
    }

    pub fn len(&self) -> usize {
        self.distributions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.distributions.read().is_empty()
    }
}

#[async_trait]
impl PrizeDistributionStore for InMemoryPrizeDistributionHistory {
    fn address(&self) -> Address {
        self.address
    }

    async fn push_prize_distribution(
        &self,
        draw_id: DrawId,
        distribution: PrizeDistribution,
    ) -> TriggerResult<DistributionId> {
        let mut distributions = self.distributions.write();
        if distributions.contains_key(&draw_id) {
            return Err(TriggerError::DistributionStore {
                reason: format!("draw {draw_id} already has a prize distribution"),
            });
        }
        distributions.insert(draw_id, distribution);
        debug!("[pt-03] History stored distribution for draw {}", draw_id);

        Ok(draw_id)
    }
}
