//! Driven Ports (SPI - Outbound Dependencies)

use crate::error::TimelockResult;
use async_trait::async_trait;
use shared_types::{Address, Bytes, DrawId, U256};

/// Result of a draw calculation, returned to the caller unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CalculationOutput {
    /// One prize amount per requested draw, in request order.
    pub prizes: Vec<U256>,
    /// Opaque data handed back by the calculator.
    pub data: Bytes,
}

/// Draw calculator the timelock guards.
#[async_trait]
pub trait DrawCalculator: Send + Sync {
    /// Address of the calculator.
    fn address(&self) -> Address;

    /// Compute prizes for `user` over `draw_ids`.
    async fn calculate(
        &self,
        user: Address,
        draw_ids: &[DrawId],
        data: &[u8],
    ) -> TimelockResult<CalculationOutput>;
}
