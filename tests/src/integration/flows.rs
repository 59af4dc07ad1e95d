//! # Integration Test Flows
//!
//! Tests that pt-01-access-control, pt-02-draw-timelock and
//! pt-03-timelock-trigger work together over the shared bus.
//!
//! ## Flows Tested:
//!
//! 1. **Trigger (3) → Timelock (2)**: every push locks its draw first
//! 2. **Claimer → Timelock (2) → Calculator**: guarded calculation across a lock
//! 3. **Access (1)**: role checks on both components, separate or shared context

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    // Shared infrastructure
    use shared_bus::{ContractEvent, EventFilter, EventTopic, InMemoryEventBus};
    use shared_types::{Address, Clock, FailureKind, ManualClock, PrizeDistribution, U256};

    // Subsystem 1: Access Control
    use pt_01_access_control::{AuthorizationContext, Manageable, OwnershipApi};

    // Subsystem 2: Draw Timelock
    use pt_02_draw_timelock::{
        DrawTimelockApi, DrawTimelockService, StaticDrawCalculator, Timelock, TimelockError,
    };

    // Subsystem 3: Timelock Trigger
    use pt_03_timelock_trigger::{
        DrawTimelockAdapter, InMemoryPrizeDistributionHistory, TimelockTriggerApi,
        TimelockTriggerService, TriggerConfig, TriggerError,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const TIMELOCK: Address = Address::repeat_byte(0x71);
    const TRIGGER: Address = Address::repeat_byte(0x73);
    const CALCULATOR: Address = Address::repeat_byte(0xca);
    const HISTORY: Address = Address::repeat_byte(0x4b);
    const OWNER: Address = Address::repeat_byte(0x01);
    const OPERATOR: Address = Address::repeat_byte(0x02);
    const USER: Address = Address::repeat_byte(0x0a);
    const START: u64 = 1_700_000_000;
    const DURATION: u64 = 3600;

    type TestTimelock<A> = DrawTimelockService<A, StaticDrawCalculator>;
    type TestTrigger<A> = TimelockTriggerService<
        A,
        InMemoryPrizeDistributionHistory,
        DrawTimelockAdapter<TestTimelock<A>>,
    >;

    struct Deployment<A: AuthorizationContext + 'static> {
        bus: Arc<InMemoryEventBus>,
        clock: Arc<ManualClock>,
        calculator: Arc<StaticDrawCalculator>,
        history: Arc<InMemoryPrizeDistributionHistory>,
        timelock: Arc<TestTimelock<A>>,
        trigger: TestTrigger<A>,
    }

    /// Deploy both components against the given access contexts.
    async fn deploy<A: AuthorizationContext + 'static>(
        bus: Arc<InMemoryEventBus>,
        timelock_access: Arc<A>,
        trigger_access: Arc<A>,
    ) -> Deployment<A> {
        let clock = Arc::new(ManualClock::new(START));
        let calculator = Arc::new(StaticDrawCalculator::new(CALCULATOR, U256::from(43u64)));
        let timelock = Arc::new(
            DrawTimelockService::deploy(
                TIMELOCK,
                timelock_access,
                calculator.clone(),
                clock.clone(),
                bus.clone(),
            )
            .await,
        );
        let history = Arc::new(InMemoryPrizeDistributionHistory::new(HISTORY));
        let trigger = TimelockTriggerService::deploy(
            TRIGGER,
            trigger_access,
            history.clone(),
            Arc::new(DrawTimelockAdapter::new(timelock.clone(), TRIGGER)),
            clock.clone(),
            bus.clone(),
            TriggerConfig::with_duration(DURATION),
        )
        .await;

        Deployment {
            bus,
            clock,
            calculator,
            history,
            timelock,
            trigger,
        }
    }

    /// Separate contexts per component; the trigger manages the timelock and
    /// OPERATOR manages the trigger.
    async fn deploy_separate() -> Deployment<Manageable> {
        let bus = Arc::new(InMemoryEventBus::new());
        let timelock_access = Arc::new(Manageable::new(TIMELOCK, OWNER, bus.clone()));
        timelock_access.set_manager(OWNER, TRIGGER).await.unwrap();
        let trigger_access = Arc::new(Manageable::new(TRIGGER, OWNER, bus.clone()));
        trigger_access.set_manager(OWNER, OPERATOR).await.unwrap();

        deploy(bus, timelock_access, trigger_access).await
    }

    fn create_test_distribution(prize: u64) -> PrizeDistribution {
        PrizeDistribution {
            bit_range_size: 2,
            match_cardinality: 10,
            start_timestamp_offset: 86_400,
            end_timestamp_offset: 300,
            max_picks_per_user: 10,
            number_of_picks: 1_000,
            tiers: vec![300_000_000, 300_000_000, 400_000_000],
            prize: U256::from(prize),
        }
    }

    // =============================================================================
    // TRIGGER (3) → TIMELOCK (2)
    // =============================================================================

    /// Draw 0 can be pushed on a fresh timelock, exactly once.
    #[tokio::test]
    async fn test_first_push_locks_draw_zero_once() {
        let d = deploy_separate().await;

        let id = d
            .trigger
            .push_draw_settings(OWNER, 0, create_test_distribution(100))
            .await
            .unwrap();
        assert_eq!(id, 0);
        assert_eq!(d.timelock.get_timelock(), Timelock::new(0, START + DURATION));

        let err = d
            .trigger
            .push_draw_settings(OWNER, 0, create_test_distribution(200))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            TriggerError::Timelock(TimelockError::SequenceOutOfOrder {
                expected: 1,
                requested: 0
            })
        );
        assert_eq!(d.history.get(0), Some(create_test_distribution(100)));
        assert_eq!(d.history.len(), 1);
    }

    #[tokio::test]
    async fn test_consecutive_pushes_do_not_wait_for_unlock() {
        let d = deploy_separate().await;

        for draw_id in 0..3 {
            d.trigger
                .push_draw_settings(OPERATOR, draw_id, create_test_distribution(10))
                .await
                .unwrap();
            d.clock.advance(10);
        }

        assert_eq!(d.history.newest_draw_id(), Some(2));
        assert_eq!(
            d.timelock.get_timelock(),
            Timelock::new(2, START + 20 + DURATION)
        );
    }

    #[tokio::test]
    async fn test_skipped_draw_is_rejected_without_store_call() {
        let d = deploy_separate().await;
        d.trigger
            .push_draw_settings(OWNER, 0, create_test_distribution(1))
            .await
            .unwrap();

        let err = d
            .trigger
            .push_draw_settings(OWNER, 2, create_test_distribution(1))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), FailureKind::SequenceOutOfOrder);
        assert_eq!(d.history.get(2), None);
        assert_eq!(d.timelock.get_timelock().draw_id, 0);
    }

    #[tokio::test]
    async fn test_stranger_cannot_push() {
        let d = deploy_separate().await;

        let err = d
            .trigger
            .push_draw_settings(USER, 0, create_test_distribution(1))
            .await
            .unwrap_err();

        assert!(matches!(err, TriggerError::NotAuthorized(_)));
        assert!(d.history.is_empty());
        assert_eq!(d.timelock.get_timelock(), Timelock::default());
    }

    /// A trigger that is not a manager of the timelock cannot push anything.
    #[tokio::test]
    async fn test_trigger_without_timelock_role() {
        let bus = Arc::new(InMemoryEventBus::new());
        let d = deploy(
            bus.clone(),
            Arc::new(Manageable::new(TIMELOCK, OWNER, bus.clone())),
            Arc::new(Manageable::new(TRIGGER, OWNER, bus.clone())),
        )
        .await;

        let err = d
            .trigger
            .push_draw_settings(OWNER, 0, create_test_distribution(1))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            TriggerError::Timelock(TimelockError::NotAuthorized(_))
        ));
        assert_eq!(err.kind(), FailureKind::NotAuthorized);
        assert!(d.history.is_empty());
    }

    /// One context shared by reference, with the trigger as its manager.
    #[tokio::test]
    async fn test_shared_authorization_context() {
        let bus = Arc::new(InMemoryEventBus::new());
        let access = Arc::new(Manageable::new(TIMELOCK, OWNER, bus.clone()));
        access.set_manager(OWNER, TRIGGER).await.unwrap();
        let d = deploy(bus, access.clone(), access.clone()).await;

        d.trigger
            .push_draw_settings(OWNER, 0, create_test_distribution(1))
            .await
            .unwrap();

        // Handing ownership over moves control of both components at once
        access.transfer_ownership(OWNER, OPERATOR).await.unwrap();
        access.claim_ownership(OPERATOR).await.unwrap();

        let err = d
            .trigger
            .push_draw_settings(OWNER, 1, create_test_distribution(1))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), FailureKind::NotAuthorized);

        d.trigger
            .push_draw_settings(OPERATOR, 1, create_test_distribution(1))
            .await
            .unwrap();
        assert!(d
            .timelock
            .set_timelock(OPERATOR, Timelock::new(9, 0))
            .await
            .is_ok());
    }

    // =============================================================================
    // CLAIMER → TIMELOCK (2) → CALCULATOR
    // =============================================================================

    #[tokio::test]
    async fn test_lock_then_calculate_after_delay() {
        let d = deploy_separate().await;
        let unlock = d.clock.now() + 100;

        assert!(d.timelock.lock(OWNER, 1, unlock).await.unwrap());
        assert_eq!(d.timelock.get_timelock(), Timelock::new(1, unlock));

        let err = d
            .timelock
            .calculate(USER, vec![1], b"data".to_vec())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), FailureKind::TimelockNotExpired);
        assert_eq!(d.calculator.calls(), 0);

        d.clock.advance(101);
        let output = d
            .timelock
            .calculate(USER, vec![1], b"data".to_vec())
            .await
            .unwrap();
        assert_eq!(output.prizes, vec![U256::from(43u64)]);
        assert_eq!(output.data, b"data".to_vec());
        assert_eq!(d.calculator.calls(), 1);
    }

    #[tokio::test]
    async fn test_pushed_draw_guarded_but_older_draws_claimable() {
        let d = deploy_separate().await;
        d.trigger
            .push_draw_settings(OWNER, 0, create_test_distribution(1))
            .await
            .unwrap();
        d.clock.advance(DURATION);
        d.trigger
            .push_draw_settings(OWNER, 1, create_test_distribution(1))
            .await
            .unwrap();

        assert!(d.timelock.calculate(USER, vec![0], Vec::new()).await.is_ok());
        assert!(d
            .timelock
            .calculate(USER, vec![0, 1], Vec::new())
            .await
            .is_err());

        // Unlock time is inclusive
        d.clock.advance(DURATION - 1);
        assert!(!d.timelock.has_elapsed());
        d.clock.advance(1);
        assert!(d.timelock.has_elapsed());
        assert!(d
            .timelock
            .calculate(USER, vec![0, 1], Vec::new())
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_has_elapsed_is_monotonic_for_fixed_record() {
        let d = deploy_separate().await;
        d.timelock
            .lock(OWNER, 1, d.clock.now() + 50)
            .await
            .unwrap();

        let mut seen_elapsed = false;
        for _ in 0..100 {
            let elapsed = d.timelock.has_elapsed();
            assert!(!(seen_elapsed && !elapsed));
            seen_elapsed |= elapsed;
            d.clock.advance(1);
        }
        assert!(seen_elapsed);
    }

    #[tokio::test]
    async fn test_owner_override_rewinds_sequence() {
        let d = deploy_separate().await;
        for draw_id in 0..3 {
            d.trigger
                .push_draw_settings(OWNER, draw_id, create_test_distribution(1))
                .await
                .unwrap();
        }

        d.timelock
            .set_timelock(OWNER, Timelock::new(0, 0))
            .await
            .unwrap();

        // Draw 0 is no longer lockable after an override, only its successor
        let err = d.timelock.lock(OWNER, 0, 0).await.unwrap_err();
        assert_eq!(err.kind(), FailureKind::SequenceOutOfOrder);
        assert!(d.timelock.lock(OWNER, 1, 0).await.is_ok());
    }

    // =============================================================================
    // EVENTS
    // =============================================================================

    #[tokio::test]
    async fn test_push_event_order() {
        let d = deploy_separate().await;
        let mut sub = d.bus.subscribe(EventFilter::all());

        d.trigger
            .push_draw_settings(OPERATOR, 0, create_test_distribution(1))
            .await
            .unwrap();

        assert_eq!(
            sub.drain(),
            vec![
                ContractEvent::LockedDraw {
                    timelock: TIMELOCK,
                    draw_id: 0,
                    unlock_timestamp: START + DURATION,
                },
                ContractEvent::PrizeDistributionPushed {
                    trigger: TRIGGER,
                    draw_id: 0,
                    distribution_id: 0,
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_deployment_events() {
        let bus = Arc::new(InMemoryEventBus::new());
        let mut sub = bus.subscribe(EventFilter::topics(vec![
            EventTopic::DrawTimelock,
            EventTopic::TimelockTrigger,
        ]));
        let _d = deploy(
            bus.clone(),
            Arc::new(Manageable::new(TIMELOCK, OWNER, bus.clone())),
            Arc::new(Manageable::new(TRIGGER, OWNER, bus.clone())),
        )
        .await;

        assert_eq!(
            sub.drain(),
            vec![
                ContractEvent::TimelockDeployed {
                    timelock: TIMELOCK,
                    draw_calculator: CALCULATOR,
                },
                ContractEvent::TriggerDeployed {
                    trigger: TRIGGER,
                    prize_distribution_history: HISTORY,
                    timelock: TIMELOCK,
                },
            ]
        );
    }

    // =============================================================================
    // CONCURRENCY
    // =============================================================================

    /// Racing locks for the same draw: exactly one wins.
    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_locks_serialize() {
        let d = deploy_separate().await;

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let timelock = d.timelock.clone();
                tokio::spawn(async move { timelock.lock(OWNER, 1, START + i).await })
            })
            .collect();

        let mut won = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(true) => won += 1,
                Ok(false) => panic!("lock never returns false"),
                Err(e) => assert_eq!(e.kind(), FailureKind::SequenceOutOfOrder),
            }
        }
        assert_eq!(won, 1);
        assert_eq!(d.timelock.get_timelock().draw_id, 1);
    }
}
