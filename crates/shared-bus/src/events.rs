//! # Contract Events
//!
//! Defines all event types that flow through the shared bus. Each variant is
//! the observable record of one state transition, tagged with the address of
//! the component that emitted it.

use serde::{Deserialize, Serialize};
use shared_types::entities::{Address, DistributionId, DrawId, Timestamp};

/// All events that can be published to the event bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractEvent {
    // =========================================================================
    // SUBSYSTEM 1: ACCESS CONTROL
    // =========================================================================
    /// The owner offered ownership to a pending owner.
    OwnershipOffered {
        /// Component whose ownership is being offered.
        contract: Address,
        /// Address that may now claim ownership.
        pending_owner: Address,
    },

    /// Ownership moved (claimed or renounced).
    OwnershipTransferred {
        /// Component whose ownership changed.
        contract: Address,
        /// Owner before the transfer.
        previous_owner: Address,
        /// Owner after the transfer (zero when renounced).
        new_owner: Address,
    },

    /// The manager role changed hands.
    ManagerTransferred {
        /// Component whose manager changed.
        contract: Address,
        /// Manager before the change (zero if none).
        previous_manager: Address,
        /// Manager after the change (zero if cleared).
        new_manager: Address,
    },

    // =========================================================================
    // SUBSYSTEM 2: DRAW TIMELOCK
    // =========================================================================
    /// A draw timelock was constructed.
    TimelockDeployed {
        /// The new timelock.
        timelock: Address,
        /// Calculator the timelock guards.
        draw_calculator: Address,
    },

    /// The timelock record was overwritten by the owner.
    TimelockSet {
        /// The timelock that changed.
        timelock: Address,
        /// Draw id now stored.
        draw_id: DrawId,
        /// Unlock timestamp now stored.
        timestamp: Timestamp,
    },

    /// The next draw was locked.
    LockedDraw {
        /// The timelock that locked.
        timelock: Address,
        /// Draw id now locked.
        draw_id: DrawId,
        /// Time at which the draw unlocks.
        unlock_timestamp: Timestamp,
    },

    // =========================================================================
    // SUBSYSTEM 3: TIMELOCK TRIGGER
    // =========================================================================
    /// A timelock trigger was constructed.
    TriggerDeployed {
        /// The new trigger.
        trigger: Address,
        /// History the trigger pushes into.
        prize_distribution_history: Address,
        /// Timelock the trigger locks through.
        timelock: Address,
    },

    /// A prize distribution was locked and pushed.
    PrizeDistributionPushed {
        /// The trigger that pushed.
        trigger: Address,
        /// Draw the distribution belongs to.
        draw_id: DrawId,
        /// Identifier the history assigned.
        distribution_id: DistributionId,
    },
}

impl ContractEvent {
    /// Get the topic for this event (for filtering).
    #[must_use]
    pub fn topic(&self) -> EventTopic {
        match self {
            Self::OwnershipOffered { .. }
            | Self::OwnershipTransferred { .. }
            | Self::ManagerTransferred { .. } => EventTopic::AccessControl,
            Self::TimelockDeployed { .. } | Self::TimelockSet { .. } | Self::LockedDraw { .. } => {
                EventTopic::DrawTimelock
            }
            Self::TriggerDeployed { .. } | Self::PrizeDistributionPushed { .. } => {
                EventTopic::TimelockTrigger
            }
        }
    }

    /// Get the address of the emitting component.
    #[must_use]
    pub fn source(&self) -> Address {
        match self {
            Self::OwnershipOffered { contract, .. }
            | Self::OwnershipTransferred { contract, .. }
            | Self::ManagerTransferred { contract, .. } => *contract,
            Self::TimelockDeployed { timelock, .. }
            | Self::TimelockSet { timelock, .. }
            | Self::LockedDraw { timelock, .. } => *timelock,
            Self::TriggerDeployed { trigger, .. }
            | Self::PrizeDistributionPushed { trigger, .. } => *trigger,
        }
    }
}

/// Event topics for subscription filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventTopic {
    /// Subsystem 1 events.
    AccessControl,
    /// Subsystem 2 events.
    DrawTimelock,
    /// Subsystem 3 events.
    TimelockTrigger,
    /// All events (no filtering).
    All,
}

/// Filter for subscribing to specific events.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Topics to include. Empty means all topics.
    pub topics: Vec<EventTopic>,
    /// Emitting components to include. Empty means all sources.
    pub sources: Vec<Address>,
}

impl EventFilter {
    /// Create a filter that accepts all events.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Create a filter for specific topics.
    #[must_use]
    pub fn topics(topics: Vec<EventTopic>) -> Self {
        Self {
            topics,
            sources: Vec::new(),
        }
    }

    /// Create a filter for events from specific components.
    #[must_use]
    pub fn from_sources(sources: Vec<Address>) -> Self {
        Self {
            topics: Vec::new(),
            sources,
        }
    }

    /// Check if an event matches this filter.
    #[must_use]
    pub fn matches(&self, event: &ContractEvent) -> bool {
        let topic_match = self.topics.is_empty()
            || self.topics.contains(&EventTopic::All)
            || self.topics.contains(&event.topic());

        let source_match = self.sources.is_empty() || self.sources.contains(&event.source());

        topic_match && source_match
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locked_draw(timelock: Address) -> ContractEvent {
        ContractEvent::LockedDraw {
            timelock,
            draw_id: 2,
            unlock_timestamp: 100,
        }
    }

    #[test]
    fn test_event_topic_mapping() {
        let timelock = Address::repeat_byte(2);
        let event = locked_draw(timelock);
        assert_eq!(event.topic(), EventTopic::DrawTimelock);
        assert_eq!(event.source(), timelock);
    }

    #[test]
    fn test_access_events_source_is_contract() {
        let contract = Address::repeat_byte(9);
        let event = ContractEvent::ManagerTransferred {
            contract,
            previous_manager: Address::ZERO,
            new_manager: Address::repeat_byte(3),
        };
        assert_eq!(event.topic(), EventTopic::AccessControl);
        assert_eq!(event.source(), contract);
    }

    #[test]
    fn test_filter_all() {
        let filter = EventFilter::all();
        assert!(filter.matches(&locked_draw(Address::repeat_byte(1))));
    }

    #[test]
    fn test_filter_topics() {
        let filter = EventFilter::topics(vec![EventTopic::TimelockTrigger]);

        assert!(!filter.matches(&locked_draw(Address::repeat_byte(1))));

        let pushed = ContractEvent::PrizeDistributionPushed {
            trigger: Address::repeat_byte(4),
            draw_id: 1,
            distribution_id: 1,
        };
        assert!(filter.matches(&pushed));
    }

    #[test]
    fn test_filter_sources() {
        let timelock = Address::repeat_byte(2);
        let filter = EventFilter::from_sources(vec![timelock]);

        assert!(filter.matches(&locked_draw(timelock)));
        assert!(!filter.matches(&locked_draw(Address::repeat_byte(7))));
    }
}
