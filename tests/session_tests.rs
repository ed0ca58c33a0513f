//! Session-level tests: presets, collaborator payloads and snapshots.
//!
//! These drive a host loop the way a presentation layer would: apply an
//! event, follow the timer directive, repeat.

use minigame_engine::core::{GamePhase, GameState, ManualClock, TimerDirective};
use minigame_engine::games::reaction::{ReactionGame, ReactionGameBuilder, GAME_ID};
use minigame_engine::report::{SessionSnapshot, SessionSummary};
use minigame_engine::rules::GameEvent;
use minigame_engine::stats::{PercentileTable, Tier, TierTable};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("minigame_engine=trace")
        .with_test_writer()
        .try_init();
}

/// Minimal host: owns at most one pending timer and fires it on demand.
struct Host {
    game: ReactionGame<ManualClock>,
    clock: ManualClock,
    state: GameState,
    pending_timer: Option<u64>,
}

impl Host {
    fn new(rounds: u32, seed: u64) -> Self {
        let clock = ManualClock::new(0);
        let (game, state) = ReactionGameBuilder::new()
            .rounds(rounds)
            .build_with_clock(seed, clock.clone())
            .unwrap();
        Self {
            game,
            clock,
            state,
            pending_timer: None,
        }
    }

    fn dispatch(&mut self, event: GameEvent) {
        self.state = self.game.apply(&self.state, event);
        self.pending_timer = match self.state.timer_directive() {
            TimerDirective::Schedule(ms) => Some(ms),
            TimerDirective::Cancel => None,
        };
    }

    fn tap(&mut self) {
        self.dispatch(GameEvent::Input);
    }

    fn wait_for_timer(&mut self) {
        if let Some(ms) = self.pending_timer.take() {
            self.clock.advance(ms);
            self.dispatch(GameEvent::Activate);
        }
    }

    fn react_after(&mut self, ms: u64) {
        self.clock.advance(ms);
        self.tap();
    }
}

#[test]
fn test_host_loop_with_fault() {
    init_tracing();
    let mut host = Host::new(3, 2024);

    host.tap();
    assert_eq!(host.state.phase(), GamePhase::Armed);
    assert!(host.pending_timer.is_some());

    // Too early: timer must be cancelled
    host.tap();
    assert_eq!(host.state.phase(), GamePhase::Faulted);
    assert_eq!(host.pending_timer, None);

    // Retry the same round
    host.tap();
    host.wait_for_timer();
    assert_eq!(host.state.phase(), GamePhase::Active);
    host.react_after(190);

    for reaction in [240, 260] {
        host.tap();
        host.wait_for_timer();
        host.react_after(reaction);
    }

    assert_eq!(host.state.phase(), GamePhase::Settled);
    assert_eq!(host.state.faults(), 1);

    let summary = host.game.summarize(&host.state, None).unwrap();
    assert_eq!(summary.game_id, GAME_ID);
    assert_eq!(summary.measurements, vec![190, 240, 260]);
    assert_eq!(summary.faults, 1);
    assert_eq!(summary.average, 230.0);
    assert_eq!(summary.tier, "Cheetah");
}

#[test]
fn test_reset_mid_session() {
    let mut host = Host::new(3, 1);
    host.tap();
    host.wait_for_timer();
    host.react_after(300);
    assert_eq!(host.state.current_round(), 2);

    host.dispatch(GameEvent::Reset);
    assert_eq!(host.state.phase(), GamePhase::Idle);
    assert_eq!(host.state.current_round(), 1);
    assert!(host.state.history().is_empty());
    assert_eq!(host.state.faults(), 0);
}

#[test]
fn test_mission_report_win_rule() {
    let mut fast = Host::new(1, 5);
    fast.tap();
    fast.wait_for_timer();
    fast.react_after(150);
    assert_eq!(fast.game.mission_report(&fast.state).unwrap().won, Some(true));

    let mut slow = Host::new(1, 5);
    slow.tap();
    slow.wait_for_timer();
    slow.react_after(650);
    let report = slow.game.mission_report(&slow.state).unwrap();
    assert_eq!(report.won, Some(false));
    assert_eq!(report.score, 650.0);
}

#[test]
fn test_custom_tables() {
    let tiers = TierTable::new([Tier::below(500.0, "Pass", "ok"), Tier::rest("Fail", "slow")]).unwrap();
    let percentiles = PercentileTable::new([(500.0, 50)], 0).unwrap();

    let clock = ManualClock::new(0);
    let (mut game, mut state) = ReactionGameBuilder::new()
        .rounds(1)
        .tiers(tiers)
        .percentiles(percentiles)
        .build_with_clock(3, clock.clone())
        .unwrap();

    state = game.apply(&state, GameEvent::Input);
    state = game.apply(&state, GameEvent::Activate);
    clock.advance(450);
    state = game.apply(&state, GameEvent::Input);

    let summary = game.summarize(&state, Some("hard".into())).unwrap();
    assert_eq!(summary.tier, "Pass");
    assert_eq!(summary.percentile, 50);
    assert_eq!(summary.period.as_deref(), Some("hard"));
}

#[test]
fn test_snapshot_resume_keeps_delay_sequence() {
    init_tracing();
    let mut original = Host::new(4, 77);
    original.tap();
    original.wait_for_timer();
    original.react_after(210);

    let snapshot = SessionSnapshot::capture(&original.state, original.game.engine().delays());
    let bytes = snapshot.encode().unwrap();

    // Continue the original
    original.tap();
    let expected_delay = original.state.pending_delay();

    // Resume elsewhere from the bytes
    let mut resumed = Host::new(4, 0);
    let (state, rng) = SessionSnapshot::decode(&bytes).unwrap().restore();
    resumed.state = state;
    resumed.game.engine_mut().set_delays(rng);
    resumed.tap();

    assert_eq!(resumed.state.pending_delay(), expected_delay);
    assert_eq!(resumed.state.current_round(), 2);
    assert_eq!(resumed.state.history(), original.state.history());
}

#[test]
fn test_summary_requires_settled() {
    let host = Host::new(2, 9);
    let tiers = TierTable::new([Tier::rest("Any", "")]).unwrap();
    let percentiles = PercentileTable::new(Vec::<(f64, u8)>::new(), 0).unwrap();

    assert!(SessionSummary::from_state(&host.state, GAME_ID, None, &tiers, &percentiles).is_none());
    assert!(host.game.summarize(&host.state, None).is_none());
    assert!(host.game.mission_report(&host.state).is_none());
}
