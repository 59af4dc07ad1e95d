//! Timelock trigger configuration

use serde::{Deserialize, Serialize};
use shared_types::Timestamp;

/// Default delay between a push and the unlock of its draw.
pub const DEFAULT_TIMELOCK_DURATION_SECS: u64 = 3600;

/// Trigger policy parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggerConfig {
    /// Seconds a pushed draw stays locked.
    pub timelock_duration_secs: u64,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            timelock_duration_secs: DEFAULT_TIMELOCK_DURATION_SECS,
        }
    }
}

impl TriggerConfig {
    #[must_use]
    pub fn with_duration(timelock_duration_secs: u64) -> Self {
        Self {
            timelock_duration_secs,
        }
    }

    /// Unlock time for a draw pushed at `now`.
    #[must_use]
    pub fn unlock_timestamp(&self, now: Timestamp) -> Timestamp {
        now.saturating_add(self.timelock_duration_secs)
    }
}
