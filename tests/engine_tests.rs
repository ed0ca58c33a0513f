//! Scenario tests for the game state engine.
//!
//! These walk whole sessions through the public API with a manual clock and
//! fixed or seeded delays, checking the phase table and state invariants.

use minigame_engine::core::{
    EngineConfig, FixedDelay, GamePhase, GameRng, GameState, ManualClock, TimerDirective,
    Timestamp,
};
use minigame_engine::rules::{initialize, GameEvent, GameStateEngine};
use minigame_engine::stats::{average_measurement, best_measurement};

type TestEngine = GameStateEngine<FixedDelay, ManualClock>;

fn engine(rounds: u32) -> (TestEngine, ManualClock) {
    let clock = ManualClock::new(10_000);
    let engine = GameStateEngine::new(EngineConfig::new(rounds), FixedDelay(1_500), clock.clone())
        .unwrap();
    (engine, clock)
}

/// Arm, fire the timer, and respond after `reaction` ms.
fn play_round(engine: &mut TestEngine, clock: &ManualClock, state: &GameState, reaction: u64) -> GameState {
    let armed = engine.arm(state);
    clock.advance(armed.pending_delay());
    let active = engine.activate(&armed);
    clock.advance(reaction);
    engine.handle_input(&active)
}

// =============================================================================
// Initialization
// =============================================================================

#[test]
fn test_initialize_any_round_count() {
    for rounds in [1, 2, 3, 5, 10, 100] {
        let state = initialize(rounds);
        assert_eq!(state.phase(), GamePhase::Idle);
        assert_eq!(state.current_round(), 1);
        assert_eq!(state.total_rounds(), rounds);
        assert!(state.history().is_empty());
        assert_eq!(state.activation_timestamp(), None);
        assert_eq!(state.pending_delay(), 0);
    }
}

// =============================================================================
// Reference scenarios
// =============================================================================

/// initialize(3) → arm → activate → input gives round 2 of 3.
#[test]
fn test_first_round_advances() {
    let (mut engine, clock) = engine(3);
    let state = play_round(&mut engine, &clock, &initialize(3), 233);

    assert_eq!(state.phase(), GamePhase::Idle);
    assert_eq!(state.current_round(), 2);
    assert_eq!(state.history().len(), 1);
    assert_eq!(state.history()[0].measurement, 233);
    assert_eq!(state.history()[0].round_index, 1);
}

/// Premature input while armed faults without consuming the round.
#[test]
fn test_premature_input_in_second_round() {
    let (mut engine, clock) = engine(3);
    let state = play_round(&mut engine, &clock, &initialize(3), 233);

    let armed = engine.handle_input(&state);
    assert_eq!(armed.phase(), GamePhase::Armed);

    let faulted = engine.handle_input(&armed);
    assert_eq!(faulted.phase(), GamePhase::Faulted);
    assert_eq!(faulted.history(), state.history());
    assert_eq!(faulted.current_round(), 2);
}

/// Completing all rounds settles with the mean of the recorded values.
#[test]
fn test_full_session_settles() {
    let (mut engine, clock) = engine(3);
    let mut state = initialize(3);
    for reaction in [210, 340, 275] {
        state = play_round(&mut engine, &clock, &state, reaction);
    }

    assert_eq!(state.phase(), GamePhase::Settled);
    assert_eq!(state.history().len(), 3);
    assert_eq!(state.current_round(), 3);
    assert_eq!(average_measurement(state.history()), (210.0 + 340.0 + 275.0) / 3.0);
    assert_eq!(best_measurement(state.history()), 210);

    for (i, outcome) in state.history().iter().enumerate() {
        assert_eq!(outcome.round_index as usize, i + 1);
    }
}

// =============================================================================
// Laws
// =============================================================================

#[test]
fn test_retry_law() {
    let (mut engine, _) = engine(4);
    let armed = engine.handle_input(&initialize(4));
    let faulted = engine.handle_input(&armed);

    let retried = engine.handle_input(&faulted);
    assert_eq!(retried.phase(), GamePhase::Armed);
    assert_eq!(retried.current_round(), faulted.current_round());
    assert_eq!(retried.history(), faulted.history());
    assert_eq!(retried.timer_directive(), TimerDirective::Schedule(1_500));
}

#[test]
fn test_terminal_restart_law() {
    let (mut engine, clock) = engine(2);
    let mut state = initialize(2);
    state = play_round(&mut engine, &clock, &state, 300);
    state = play_round(&mut engine, &clock, &state, 300);
    assert_eq!(state.phase(), GamePhase::Settled);

    assert_eq!(engine.handle_input(&state), initialize(2));
}

#[test]
fn test_activation_timestamp_only_while_active() {
    let (mut engine, clock) = engine(2);
    let mut state = initialize(2);
    let mut seen = Vec::new();

    // Mix valid and stray events; record every intermediate state
    let script = [
        GameEvent::Activate,
        GameEvent::Input,
        GameEvent::Input,
        GameEvent::Activate,
        GameEvent::Input,
        GameEvent::Activate,
        GameEvent::Activate,
        GameEvent::Input,
        GameEvent::Arm,
        GameEvent::Activate,
        GameEvent::Input,
        GameEvent::Input,
        GameEvent::Activate,
    ];
    for event in script {
        clock.advance(100);
        state = engine.transition(&state, event);
        seen.push(state.clone());
    }

    for state in &seen {
        assert_eq!(state.activation_timestamp().is_some(), state.phase() == GamePhase::Active);
        assert!(state.check_invariants().is_ok());
    }
    assert!(seen.iter().any(|s| s.phase() == GamePhase::Faulted));
    assert!(seen.iter().any(|s| s.phase() == GamePhase::Settled));
}

// =============================================================================
// Defensive defaults
// =============================================================================

#[test]
fn test_stale_timer_after_fault() {
    let (mut engine, clock) = engine(3);
    let armed = engine.handle_input(&initialize(3));
    let faulted = engine.handle_input(&armed);

    clock.advance(armed.pending_delay());
    assert_eq!(engine.activate(&faulted), faulted);
}

#[test]
fn test_stale_timer_after_round_complete() {
    let (mut engine, clock) = engine(3);
    let next = play_round(&mut engine, &clock, &initialize(3), 200);

    assert_eq!(engine.activate(&next), next);
}

#[test]
fn test_double_activate_keeps_first_timestamp() {
    let (mut engine, clock) = engine(1);
    let armed = engine.arm(&initialize(1));
    let active = engine.activate(&armed);

    clock.advance(50);
    let again = engine.activate(&active);
    assert_eq!(again.activation_timestamp(), Some(Timestamp(10_000)));
}

#[test]
fn test_states_are_not_mutated() {
    let (mut engine, clock) = engine(2);
    let start = initialize(2);
    let armed = engine.arm(&start);
    let active = engine.activate(&armed);
    clock.advance(120);
    let _ = engine.handle_input(&active);

    assert_eq!(start, initialize(2));
    assert_eq!(armed.phase(), GamePhase::Armed);
    assert_eq!(active.phase(), GamePhase::Active);
    assert!(active.history().is_empty());
}

// =============================================================================
// Seeded delays
// =============================================================================

#[test]
fn test_seeded_delays_reproducible() {
    let run = |seed| {
        let mut engine = GameStateEngine::new(
            EngineConfig::new(3).with_delay_range(500, 2_500),
            GameRng::new(seed),
            ManualClock::new(0),
        )
        .unwrap();
        let mut state = initialize(3);
        let mut delays = Vec::new();
        for _ in 0..3 {
            state = engine.arm(&state);
            delays.push(state.pending_delay());
            state = engine.activate(&state);
            state = engine.handle_input(&state);
        }
        delays
    };

    assert_eq!(run(11), run(11));
    assert!(run(11).iter().all(|d| (500..2_500).contains(d)));
}
