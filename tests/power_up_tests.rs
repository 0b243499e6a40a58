//! Power-up behavior through the public API

use tetris_ultra::core::{Board, GameRng, GameState, PowerUpState};
use tetris_ultra::types::{
    GameAction, GameStatus, PowerUpKind, BOARD_WIDTH, GHOST_DURATION_MS, POWER_UP_LOCK_MS,
    SLOW_DROP_MS, SLOW_DURATION_MS, TICK_MS,
};

fn spawn_token(state: &mut PowerUpState, rng: &mut GameRng) -> PowerUpKind {
    loop {
        if let Some(kind) = state.maybe_spawn(rng) {
            return kind;
        }
    }
}

fn spawn_token_of(state: &mut PowerUpState, rng: &mut GameRng, want: PowerUpKind) -> usize {
    loop {
        match state.maybe_spawn(rng) {
            Some(kind) if kind == want => {
                return state
                    .slots()
                    .iter()
                    .position(|s| *s == Some(want))
                    .expect("token must land in a slot while slots are free");
            }
            Some(_) => {
                // Consume the unwanted token and let its effect expire so
                // the slots stay deterministic.
                let mut board = Board::new();
                let slot = state
                    .slots()
                    .iter()
                    .position(|s| s.is_some())
                    .expect("just spawned");
                state.activate_slot(slot, &mut board);
                state.tick(SLOW_DURATION_MS);
                state.tick(GHOST_DURATION_MS);
            }
            None => {}
        }
    }
}

#[test]
fn test_tokens_fill_slots_in_spawn_order() {
    let mut state = PowerUpState::new();
    let mut rng = GameRng::new(8);

    let first = spawn_token(&mut state, &mut rng);
    let second = spawn_token(&mut state, &mut rng);

    let slots = state.slots();
    assert_eq!(slots[0], Some(first));
    assert_eq!(slots[1], Some(second));
    assert_eq!(slots[2], None);
}

#[test]
fn test_consumed_tokens_stay_in_history() {
    let mut state = PowerUpState::new();
    let mut rng = GameRng::new(8);
    let mut board = Board::new();

    spawn_token(&mut state, &mut rng);
    assert!(state.activate_slot(0, &mut board).is_some());

    assert_eq!(state.tokens().len(), 1);
    assert!(!state.tokens()[0].active);
    assert_eq!(state.slots()[0], None);
}

#[test]
fn test_slow_stretches_gravity_interval() {
    let mut state = PowerUpState::new();
    let mut rng = GameRng::new(16);
    let mut board = Board::new();

    let slot = spawn_token_of(&mut state, &mut rng, PowerUpKind::Slow);
    state.activate_slot(slot, &mut board);
    assert!(state.slow_active());
    assert_eq!(
        tetris_ultra::core::drop_interval_ms(10, state.slow_active()),
        SLOW_DROP_MS
    );
}

#[test]
fn test_bomb_and_clear_score_through_the_engine() {
    // Engine-level check that activation bonuses land in the score.
    // Board effects themselves are covered by the core unit tests; here
    // we drive the real activation path (keyboard slot action).
    let mut state = GameState::new(4);
    state.start();

    // Play until a token shows up or we give up; both outcomes are fine
    // for the scoring assertion below, so only assert when it happened.
    for _ in 0..200 {
        if state.status() != GameStatus::Playing {
            break;
        }
        state.apply_action(GameAction::HardDrop);
        if state.snapshot().power_up_slots[0].is_some() {
            break;
        }
    }

    if let Some(kind) = state.snapshot().power_up_slots[0] {
        let before = state.score();
        assert!(state.apply_action(GameAction::ActivatePowerUp(0)));
        match kind {
            PowerUpKind::Bomb => assert_eq!(state.score(), before + 200),
            PowerUpKind::Clear => assert_eq!(state.score(), before + 500),
            PowerUpKind::Ghost | PowerUpKind::Slow => assert_eq!(state.score(), before),
        }
        // Second activation is blocked while the effect runs.
        if state.snapshot().power_up_slots[0].is_some() {
            assert!(!state.apply_action(GameAction::ActivatePowerUp(0)));
        }
    }
}

#[test]
fn test_ghost_timer_runs_while_paused() {
    let mut state = PowerUpState::new();
    let mut rng = GameRng::new(16);
    let mut board = Board::new();

    let slot = spawn_token_of(&mut state, &mut rng, PowerUpKind::Ghost);
    state.activate_slot(slot, &mut board);
    assert!(state.ghost_visible());

    // The engine keeps ticking power-ups while paused; emulate that.
    let mut remaining = GHOST_DURATION_MS;
    while remaining > 0 {
        state.tick(TICK_MS);
        remaining = remaining.saturating_sub(TICK_MS);
    }
    assert!(!state.ghost_visible());
}

#[test]
fn test_activation_command_gating() {
    let mut state = GameState::new(4);
    // Before start there is nothing to activate.
    assert!(!state.apply_action(GameAction::ActivatePowerUp(0)));

    state.start();
    state.apply_action(GameAction::Pause);
    // Paused accepts activation commands; with empty slots it is still
    // a no-op, and the game stays paused either way.
    assert!(!state.apply_action(GameAction::ActivatePowerUp(0)));
    assert_eq!(state.status(), GameStatus::Paused);
}

#[test]
fn test_spawned_tokens_sit_on_the_top_row() {
    let mut state = PowerUpState::new();
    let mut rng = GameRng::new(99);
    for _ in 0..3 {
        spawn_token(&mut state, &mut rng);
    }
    for token in state.tokens() {
        assert_eq!(token.y, 0);
        assert!((0..BOARD_WIDTH as i8).contains(&token.x));
    }
}

#[test]
fn test_active_lock_blocks_only_until_expiry() {
    let mut state = PowerUpState::new();
    let mut rng = GameRng::new(23);
    let mut board = Board::new();

    spawn_token(&mut state, &mut rng);
    spawn_token(&mut state, &mut rng);

    let first = state.activate_slot(0, &mut board);
    assert!(first.is_some());
    assert!(state.activate_slot(0, &mut board).is_none());

    // Worst case the first token was slow (15s); tick past both bounds.
    state.tick(SLOW_DURATION_MS.max(POWER_UP_LOCK_MS));
    assert!(state.activate_slot(0, &mut board).is_some());
}

#[test]
fn test_restart_clears_pending_effects() {
    let mut state = GameState::new(4);
    state.start();
    // Even if no token ever spawned, restart must leave a clean slate.
    state.apply_action(GameAction::Restart);
    assert!(state.power_up_tokens().is_empty());
    assert_eq!(state.active_power_up(), None);
    assert!(!state.ghost_visible());
}
