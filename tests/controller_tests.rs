//! Game controller integration tests.
//!
//! These tests drive full rounds through `GameController`: selections,
//! virtual time, resets, difficulty changes, and both terminal causes.

use memory_match::core::EngineConfig;
use memory_match::game::{GameController, GameEvent, TimerKind};
use memory_match::round::{EndCause, RoundStatus};
use memory_match::rules::{score, Difficulty, DifficultyParams};

fn controller(config: EngineConfig) -> GameController {
    GameController::new(config).expect("valid config")
}

fn easy() -> GameController {
    controller(EngineConfig::new().with_seed(42))
}

/// First unmatched card and its partner.
fn matching_pair(game: &GameController) -> (usize, usize) {
    let deck = game.state().deck();
    let first = (0..deck.len())
        .find(|&i| !deck.get(i).unwrap().is_matched())
        .expect("an unmatched card");
    (first, deck.partner_of(first).unwrap())
}

/// Two unmatched cards with different symbols.
fn mismatching_pair(game: &GameController) -> (usize, usize) {
    let deck = game.state().deck();
    let (first, partner) = matching_pair(game);
    let second = (0..deck.len())
        .find(|&i| i != first && i != partner && !deck.get(i).unwrap().is_matched())
        .expect("a second unmatched symbol");
    (first, second)
}

fn terminal_events(events: &[GameEvent]) -> usize {
    events.iter().filter(|e| e.is_terminal()).count()
}

// =============================================================================
// Round start
// =============================================================================

/// The clock does not run until the first selection.
#[test]
fn test_clock_waits_for_first_selection() {
    let mut game = easy();

    assert!(game.advance(10_000).is_empty());
    assert_eq!(game.state().seconds_remaining(), 999);
    assert_eq!(game.state().status(), RoundStatus::NotStarted);
    assert_eq!(game.pending_timers().count(), 0);

    let events = game.select_card(0);
    assert!(matches!(events[0], GameEvent::RoundStarted { .. }));
    assert_eq!(game.state().status(), RoundStatus::Running);

    let events = game.advance(1000);
    assert_eq!(events, vec![GameEvent::ClockTicked { seconds_remaining: 998 }]);
}

// =============================================================================
// Turn resolution
// =============================================================================

/// A matching pair is marked matched after the reveal delay.
#[test]
fn test_match_after_reveal_delay() {
    let mut game = easy();
    let (a, b) = matching_pair(&game);

    game.select_card(a);
    game.select_card(b);
    assert_eq!(game.state().move_count(), 1);
    assert!(game.snapshot().checking);

    assert!(game.advance(499).is_empty());
    assert!(!game.state().deck().get(a).unwrap().is_matched());

    let events = game.advance(1);
    assert!(matches!(events[0], GameEvent::MatchFound { first, second, .. } if first == a && second == b));

    let snapshot = game.snapshot();
    assert!(snapshot.cards[a].matched);
    assert!(snapshot.cards[b].matched);
    assert_eq!(snapshot.match_count, 1);
    assert_eq!(snapshot.move_count, 1);
    assert!(!snapshot.checking);
    assert!(snapshot.cards.iter().all(|c| !c.face_up));
}

/// A mismatched pair is turned back after the difficulty's delay.
#[test]
fn test_mismatch_after_difficulty_delay() {
    let mut game = controller(EngineConfig::new().with_seed(3).with_initial_difficulty(Difficulty::Medium));
    let (a, b) = mismatching_pair(&game);

    game.select_card(a);
    game.select_card(b);

    assert!(game.advance(799).is_empty());
    assert_eq!(game.snapshot().cards.iter().filter(|c| c.face_up).count(), 2);

    let events = game.advance(1);
    assert_eq!(events, vec![GameEvent::MismatchResolved { first: a, second: b }]);

    let snapshot = game.snapshot();
    assert!(!snapshot.cards[a].matched);
    assert!(!snapshot.cards[b].matched);
    assert_eq!(snapshot.move_count, 1);
    assert_eq!(snapshot.match_count, 0);
    assert!(game.state().table().selection().is_empty());
}

/// Re-selecting a face-up card is a silent no-op.
#[test]
fn test_reselect_face_up_is_noop() {
    let mut game = easy();
    game.select_card(5);

    assert!(game.select_card(5).is_empty());
    assert_eq!(game.state().table().selection().len(), 1);
    assert_eq!(game.state().move_count(), 0);
}

/// Selecting a matched card is a silent no-op.
#[test]
fn test_select_matched_is_noop() {
    let mut game = easy();
    let (a, b) = matching_pair(&game);
    game.select_card(a);
    game.select_card(b);
    game.settle();

    assert!(game.select_card(a).is_empty());
    assert!(game.select_card(b).is_empty());
    assert!(game.state().table().selection().is_empty());
    assert_eq!(game.state().move_count(), 1);
}

/// Clicks during the display window are ignored.
#[test]
fn test_clicks_ignored_while_checking() {
    let mut game = easy();
    let (a, b) = mismatching_pair(&game);
    let third = (0..12).find(|&i| i != a && i != b).unwrap();

    game.select_card(a);
    game.select_card(b);
    assert!(game.select_card(third).is_empty());
    assert_eq!(game.state().move_count(), 1);

    game.settle();
    assert!(!game.select_card(third).is_empty());
}

/// Out-of-range clicks do not start the round.
#[test]
fn test_out_of_range_click() {
    let mut game = easy();
    assert!(game.select_card(12).is_empty());
    assert_eq!(game.state().status(), RoundStatus::NotStarted);
}

// =============================================================================
// Terminal causes
// =============================================================================

/// Easy round: six pairs in six moves with 50 seconds left scores 1470.
#[test]
fn test_perfect_easy_round_scores_1470() {
    let mut game = controller(EngineConfig::new().with_seed(11).with_match_reveal_delay_ms(100));
    let mut events = Vec::new();

    let (a, b) = matching_pair(&game);
    events.extend(game.select_card(a));
    events.extend(game.select_card(b));
    events.extend(game.advance(949_000));
    assert_eq!(game.state().seconds_remaining(), 50);
    assert_eq!(game.state().match_count(), 1);

    for _ in 0..5 {
        let (a, b) = matching_pair(&game);
        events.extend(game.select_card(a));
        events.extend(game.select_card(b));
        events.extend(game.advance(100));
    }

    let snapshot = game.snapshot();
    assert_eq!(snapshot.match_count, 6);
    assert_eq!(snapshot.pair_count, 6);
    assert_eq!(snapshot.move_count, 6);
    assert_eq!(snapshot.seconds_remaining, 50);
    assert_eq!(snapshot.status, RoundStatus::Ended(EndCause::Completed));
    assert_eq!(snapshot.final_score, Some(1470));
    assert_eq!(events.last(), Some(&GameEvent::RoundCompleted { round: snapshot.round, score: 1470 }));

    // Clock stopped: no further ticks, no expiry
    assert!(game.advance(2_000_000).is_empty());
    assert_eq!(game.state().seconds_remaining(), 50);
    assert_eq!(terminal_events(&events), 1);
}

/// Running out of time ends the round with no score.
#[test]
fn test_expiry_ends_round() {
    let mut game = controller(EngineConfig::new().with_seed(5).with_initial_difficulty(Difficulty::Hard));
    let (a, b) = mismatching_pair(&game);

    game.select_card(a);
    let events = game.advance(90_000);

    assert_eq!(
        &events[events.len() - 2..],
        &[
            GameEvent::ClockTicked { seconds_remaining: 0 },
            GameEvent::RoundExpired { round: game.state().round() },
        ]
    );
    assert_eq!(game.state().status(), RoundStatus::Ended(EndCause::Expired));
    assert_eq!(game.state().final_score(), None);
    assert!(game.snapshot().cards.iter().all(|c| !c.face_up));

    assert!(game.select_card(b).is_empty());
    assert!(game.advance(60_000).is_empty());
    assert_eq!(game.pending_timers().count(), 0);
}

/// A pair still on display when time runs out is never resolved.
#[test]
fn test_expiry_cancels_pending_match() {
    let params = DifficultyParams {
        pair_count: 2,
        grid_columns: 2,
        mismatch_delay_ms: 500,
        time_budget_seconds: 1,
    };
    let config = EngineConfig::new()
        .with_seed(8)
        .with_difficulty_params(Difficulty::Easy, params)
        .with_match_reveal_delay_ms(800);
    let mut game = controller(config);

    // Reveal the first pair 300ms into the round, so its resolution would
    // land after the clock runs out.
    let (a, b) = matching_pair(&game);
    game.select_card(a);
    game.advance(300);
    game.select_card(b);

    let events = game.advance(5_000);
    assert!(events.iter().all(|e| !matches!(e, GameEvent::MatchFound { .. })));
    assert_eq!(terminal_events(&events), 1);
    assert_eq!(game.state().status(), RoundStatus::Ended(EndCause::Expired));
    assert_eq!(game.state().match_count(), 0);
}

/// Completion on the last second wins if it resolves before the tick.
#[test]
fn test_completion_before_final_tick() {
    let params = DifficultyParams {
        pair_count: 1,
        grid_columns: 2,
        mismatch_delay_ms: 500,
        time_budget_seconds: 1,
    };
    let config = EngineConfig::new()
        .with_seed(2)
        .with_difficulty_params(Difficulty::Easy, params)
        .with_match_reveal_delay_ms(999);
    let mut game = controller(config);

    game.select_card(0);
    game.select_card(1);
    let events = game.advance(5_000);

    assert_eq!(events, vec![
        GameEvent::MatchFound { first: 0, second: 1, symbol: game.state().deck().get(0).unwrap().symbol() },
        GameEvent::RoundCompleted { round: game.state().round(), score: score(1, 1) },
    ]);
    assert_eq!(game.state().status(), RoundStatus::Ended(EndCause::Completed));
}

// =============================================================================
// Reset and difficulty changes
// =============================================================================

/// Reset restores the round and cancels every pending timer.
#[test]
fn test_reset_cancels_pending_timers() {
    let mut game = controller(EngineConfig::new().with_seed(9).with_initial_difficulty(Difficulty::Medium));
    let (a, b) = mismatching_pair(&game);
    game.select_card(a);
    game.select_card(b);
    game.advance(3_500);
    assert!(game.pending_timers().count() > 0);

    let events = game.reset().unwrap();
    assert!(matches!(events[..], [GameEvent::RoundReset { difficulty: Difficulty::Medium, .. }]));
    assert_eq!(game.pending_timers().count(), 0);

    let snapshot = game.snapshot();
    assert_eq!(snapshot.status, RoundStatus::NotStarted);
    assert_eq!(snapshot.seconds_remaining, 120);
    assert_eq!(snapshot.move_count, 0);
    assert_eq!(snapshot.match_count, 0);
    assert_eq!(snapshot.final_score, None);
    assert!(snapshot.cards.iter().all(|c| !c.face_up && !c.matched));

    // Nothing left over from the previous round fires
    assert!(game.advance(10_000).is_empty());
}

/// A stale mismatch-clear never touches the rebuilt deck.
#[test]
fn test_stale_resolution_after_difficulty_change() {
    let mut game = easy();
    let (a, b) = mismatching_pair(&game);
    game.select_card(a);
    game.select_card(b);

    game.set_difficulty(Difficulty::Hard).unwrap();
    game.select_card(0);

    let events = game.advance(1_000);
    assert_eq!(events, vec![GameEvent::ClockTicked { seconds_remaining: 89 }]);
    assert!(game.state().table().selection().contains(0));
    assert_eq!(game.state().move_count(), 0);
}

/// Changing difficulty reshapes the round.
#[test]
fn test_set_difficulty_reshapes_round() {
    let mut game = easy();
    for (difficulty, cards, columns, seconds) in [
        (Difficulty::Medium, 16, 4, 120),
        (Difficulty::Hard, 24, 6, 90),
        (Difficulty::Easy, 12, 4, 999),
    ] {
        game.set_difficulty(difficulty).unwrap();
        let snapshot = game.snapshot();
        assert_eq!(snapshot.difficulty, difficulty);
        assert_eq!(snapshot.cards.len(), cards);
        assert_eq!(snapshot.grid_columns, columns);
        assert_eq!(snapshot.seconds_remaining, seconds);
        assert!(game.state().deck().is_well_formed());
    }
}

/// Each reset deals a new round id and a reproducible deck.
#[test]
fn test_resets_are_reproducible() {
    let mut first = controller(EngineConfig::new().with_seed(77));
    let mut second = controller(EngineConfig::new().with_seed(77));

    for _ in 0..3 {
        first.reset().unwrap();
        second.reset().unwrap();
        assert_eq!(first.state().deck(), second.state().deck());
    }
    assert_eq!(first.state().round(), second.state().round());
}

/// Every tick timer uses the tick interval.
#[test]
fn test_tick_interval_from_config() {
    let mut game = controller(EngineConfig::new().with_seed(1).with_tick_interval_ms(250));
    game.select_card(0);

    let tick = game
        .pending_timers()
        .find(|t| t.kind == TimerKind::ClockTick)
        .unwrap();
    assert_eq!(tick.due_ms, 250);

    game.advance(1_000);
    assert_eq!(game.state().seconds_remaining(), 995);
}

/// Snapshots serialize for the presentation layer.
#[test]
fn test_snapshot_json() {
    let mut game = easy();
    game.select_card(2);

    let json = serde_json::to_value(game.snapshot()).unwrap();
    assert_eq!(json["status"], "running");
    assert_eq!(json["cards"][2]["face_up"], true);
    assert_eq!(json["cards"].as_array().unwrap().len(), 12);
}
