//! # Runtime Integration
//!
//! Drives the components as wired by `TimelockRuntime`, the same container the
//! binary builds, including the event log handler.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::time::timeout;
    use tokio_stream::StreamExt;

    use pt_02_draw_timelock::{DrawTimelockApi, Timelock};
    use pt_03_timelock_trigger::TimelockTriggerApi;
    use shared_bus::{ContractEvent, EventFilter, EventTopic};
    use shared_types::{Address, FailureKind, ManualClock, PrizeDistribution, U256};
    use timelock_runtime::{RuntimeConfig, TimelockRuntime};

    const START: u64 = 1_000_000;

    async fn create_test_runtime() -> (TimelockRuntime, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(START));
        let config = RuntimeConfig {
            prize_per_draw: 43,
            ..RuntimeConfig::default()
        };
        let runtime = TimelockRuntime::build(config, clock.clone()).await.unwrap();
        (runtime, clock)
    }

    #[tokio::test]
    async fn test_push_then_claim_after_duration() {
        let (runtime, clock) = create_test_runtime().await;
        let owner = runtime.config.owner;
        let user = Address::repeat_byte(0x0a);

        runtime
            .trigger
            .push_draw_settings(owner, 0, PrizeDistribution::default())
            .await
            .unwrap();

        let err = runtime
            .timelock
            .calculate(user, vec![0], Vec::new())
            .await
            .unwrap_err();
        assert!(err.kind().is_time_dependent());

        clock.advance(runtime.config.trigger.timelock_duration_secs);
        let output = runtime
            .timelock
            .calculate(user, vec![0], Vec::new())
            .await
            .unwrap();
        assert_eq!(output.prizes, vec![U256::from(43u64)]);
        assert_eq!(runtime.calculator.calls(), 1);
    }

    #[tokio::test]
    async fn test_owner_can_lock_directly_alongside_trigger() {
        let (runtime, _clock) = create_test_runtime().await;
        let owner = runtime.config.owner;

        runtime.timelock.lock(owner, 0, START).await.unwrap();

        // The trigger now has to continue from draw 1
        let err = runtime
            .trigger
            .push_draw_settings(owner, 0, PrizeDistribution::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), FailureKind::SequenceOutOfOrder);

        runtime
            .trigger
            .push_draw_settings(owner, 1, PrizeDistribution::default())
            .await
            .unwrap();
        assert_eq!(
            runtime.timelock.get_timelock(),
            Timelock::new(1, START + 3600)
        );
    }

    #[tokio::test]
    async fn test_event_stream_sees_pushes() {
        let (runtime, _clock) = create_test_runtime().await;
        let owner = runtime.config.owner;
        let mut stream = runtime
            .bus
            .event_stream(EventFilter::topics(vec![EventTopic::TimelockTrigger]));

        runtime
            .trigger
            .push_draw_settings(owner, 0, PrizeDistribution::default())
            .await
            .unwrap();

        let event = timeout(Duration::from_secs(1), stream.next())
            .await
            .expect("timed out waiting for event")
            .expect("stream closed");
        assert_eq!(
            event,
            ContractEvent::PrizeDistributionPushed {
                trigger: runtime.config.trigger_address,
                draw_id: 0,
                distribution_id: 0,
            }
        );
    }

    #[tokio::test]
    async fn test_event_log_handler_counts_runtime_events() {
        let (mut runtime, _clock) = create_test_runtime().await;
        let owner = runtime.config.owner;
        let handler = runtime.take_event_log().unwrap();

        for draw_id in 0..3 {
            runtime
                .trigger
                .push_draw_settings(owner, draw_id, PrizeDistribution::default())
                .await
                .unwrap();
        }

        // Dropping the runtime drops every publisher and closes the bus
        drop(runtime);
        let logged = timeout(Duration::from_secs(1), handler.run())
            .await
            .expect("handler did not stop");
        // ManagerTransferred, TimelockDeployed and TriggerDeployed from build,
        // then LockedDraw and PrizeDistributionPushed per push
        assert_eq!(logged, 3 + 3 * 2);
    }
}
