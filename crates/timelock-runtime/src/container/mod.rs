//! # Component Container
//!
//! Builds every component in dependency order and holds them for the
//! lifetime of the process.
//!
//! ```text
//! Event Bus
//!   ├── Access (timelock)  ── manager = trigger
//!   ├── Access (trigger)   ── manager = configured operator
//!   ├── Draw Calculator ──→ Draw Timelock
//!   └── History ──────────→ Timelock Trigger ──lock──→ Draw Timelock
//! ```

pub mod config;

pub use config::{load_config, ConfigError, RuntimeConfig};

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::handlers::EventLogHandler;
use pt_01_access_control::{Manageable, OwnershipApi};
use pt_02_draw_timelock::{DrawTimelockService, StaticDrawCalculator};
use pt_03_timelock_trigger::{
    DrawTimelockAdapter, InMemoryPrizeDistributionHistory, TimelockTriggerService,
};
use shared_bus::{EventFilter, InMemoryEventBus};
use shared_types::{Clock, U256};

/// Draw timelock as wired by the runtime.
pub type RuntimeTimelock = DrawTimelockService<Manageable, StaticDrawCalculator>;

/// Timelock trigger as wired by the runtime.
pub type RuntimeTrigger = TimelockTriggerService<
    Manageable,
    InMemoryPrizeDistributionHistory,
    DrawTimelockAdapter<RuntimeTimelock>,
>;

/// All components of one deployment.
pub struct TimelockRuntime {
    pub config: RuntimeConfig,
    pub bus: Arc<InMemoryEventBus>,
    pub clock: Arc<dyn Clock>,
    pub timelock_access: Arc<Manageable>,
    pub trigger_access: Arc<Manageable>,
    pub calculator: Arc<StaticDrawCalculator>,
    pub history: Arc<InMemoryPrizeDistributionHistory>,
    pub timelock: Arc<RuntimeTimelock>,
    pub trigger: Arc<RuntimeTrigger>,
    event_log: Option<EventLogHandler>,
}

impl TimelockRuntime {
    /// Validate `config` and deploy every component against `clock`.
    ///
    /// ## Initialization Order
    ///
    /// 1. Event bus and the event log subscription, so deployment events
    ///    are recorded
    /// 2. Access contexts, with the trigger appointed manager of the timelock
    /// 3. Draw calculator and draw timelock
    /// 4. Prize distribution history and timelock trigger
    pub async fn build(config: RuntimeConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        config.validate().context("Invalid runtime configuration")?;

        let bus = Arc::new(InMemoryEventBus::with_capacity(config.event_bus_capacity));
        let event_log = EventLogHandler::new(bus.subscribe(EventFilter::all()));

        let timelock_access = Arc::new(Manageable::new(
            config.timelock_address,
            config.owner,
            bus.clone(),
        ));
        timelock_access
            .set_manager(config.owner, config.trigger_address)
            .await
            .context("Failed to appoint the trigger as timelock manager")?;

        let trigger_access = Arc::new(Manageable::new(
            config.trigger_address,
            config.owner,
            bus.clone(),
        ));
        if let Some(manager) = config.manager() {
            trigger_access
                .set_manager(config.owner, manager)
                .await
                .context("Failed to appoint the trigger manager")?;
        }

        let calculator = Arc::new(StaticDrawCalculator::new(
            config.calculator_address,
            U256::from(config.prize_per_draw),
        ));
        let timelock = Arc::new(
            DrawTimelockService::deploy(
                config.timelock_address,
                timelock_access.clone(),
                calculator.clone(),
                clock.clone(),
                bus.clone(),
            )
            .await,
        );

        let history = Arc::new(InMemoryPrizeDistributionHistory::new(
            config.history_address,
        ));
        let gateway = Arc::new(DrawTimelockAdapter::new(
            timelock.clone(),
            config.trigger_address,
        ));
        let trigger = Arc::new(
            TimelockTriggerService::deploy(
                config.trigger_address,
                trigger_access.clone(),
                history.clone(),
                gateway,
                clock.clone(),
                bus.clone(),
                config.trigger,
            )
            .await,
        );

        info!(
            "Components deployed: timelock {}, trigger {}, owner {}",
            config.timelock_address, config.trigger_address, config.owner
        );

        Ok(Self {
            config,
            bus,
            clock,
            timelock_access,
            trigger_access,
            calculator,
            history,
            timelock,
            trigger,
            event_log: Some(event_log),
        })
    }

    /// Hand out the event log handler subscribed before deployment.
    ///
    /// Returns `None` once taken.
    pub fn take_event_log(&mut self) -> Option<EventLogHandler> {
        self.event_log.take()
    }
}
