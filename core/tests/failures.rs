//! Fail-fast paths: empty queue, events in the past, bad scenarios.

use desim_core::{
    EventManager, ManagerState, SimClock, SimError,
    actor::ActorRegistry,
    config::ScenarioConfig,
    geometry::{Direction, Position},
    scenario::Scenario,
    tasks::{EndSimulation, MoveTask},
};

#[test]
fn dispatch_on_empty_queue_fails_without_side_effects() {
    let mut clock = SimClock::new(42);
    {
        let mut manager = EventManager::new(&mut clock);

        let err = manager.handle_next_event().unwrap_err();
        assert!(matches!(err, SimError::EmptyQueue), "unexpected error: {err}");

        assert_eq!(manager.now(), 42);
        assert_eq!(manager.state(), ManagerState::Idle);
        assert_eq!(manager.dispatched(), 0);
        assert!(manager.journal().is_empty());
    }
    assert_eq!(clock.get_time(), 42);
}

#[test]
fn run_without_sentinel_ends_in_empty_queue() {
    let mut actors = ActorRegistry::new();
    let actor = actors.spawn(1, Position::new(0, 0)).unwrap();

    let mut clock = SimClock::new(0);
    let mut manager = EventManager::new(&mut clock);
    manager.add_event(Box::new(MoveTask::new(actor.clone(), Direction::new(1, 1), 0, 5))).unwrap();

    assert!(matches!(manager.run(), Err(SimError::EmptyQueue)));
    assert_eq!(actor.borrow().position, Position::new(1, 1), "the move itself still ran");
}

#[test]
fn registering_in_the_past_is_rejected() {
    let mut clock = SimClock::new(100);
    let mut manager = EventManager::new(&mut clock);

    let err = manager.add_event(Box::new(EndSimulation::at(99))).unwrap_err();
    assert!(
        matches!(err, SimError::EventInPast { now: 100, scheduled: 99 }),
        "unexpected error: {err}"
    );
    assert_eq!(manager.pending(), 0);
}

#[test]
fn clock_cannot_be_rewound_directly() {
    let mut clock = SimClock::new(10);
    clock.set_time(20).unwrap();
    assert!(matches!(
        clock.set_time(5),
        Err(SimError::InvalidTimeOrdering { current: 20, requested: 5 })
    ));
}

#[test]
fn invalid_scenario_is_rejected_before_running() {
    let mut config = ScenarioConfig::default_test();
    config.moves[0].actor = 2;
    assert!(matches!(Scenario::build(config), Err(SimError::UnknownActor(2))));
}

#[test]
fn missing_scenario_file_is_reported() {
    let err = ScenarioConfig::load("/nonexistent/scenario.json").unwrap_err();
    assert!(err.to_string().contains("Cannot read"), "got {err}");
}
