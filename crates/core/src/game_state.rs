//! Game state module - the complete engine
//!
//! Ties together board, shapes, collision, RNG, scoring and power-ups.
//! A single mutable `GameState` is advanced by discrete
//! [`GameAction`]s and by [`GameState::tick`]; every rejected operation
//! is a silent no-op and the only terminal condition is a spawn
//! collision (game over).
//!
//! Within one action or tick the mutation order is fixed: board
//! mutation, then score/combo/level updates, then the power-up spawn
//! roll. Nothing interleaves mid-sequence.

use crate::board::Board;
use crate::collision::collides;
use crate::piece::ActivePiece;
use crate::power_up::{PowerUpState, PowerUpToken};
use crate::rng::GameRng;
use crate::scoring;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameAction, GameStatus, PieceKind, PowerUpKind};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<ActivePiece>,
    next: PieceKind,
    rng: GameRng,
    power_ups: PowerUpState,
    status: GameStatus,
    score: u32,
    level: u32,
    lines: u32,
    combo: u32,
    /// In-memory only; survives restarts, lost on process exit
    high_score: u32,
    drop_timer_ms: u32,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut rng = GameRng::new(seed);
        let next = rng.draw_kind();
        Self {
            board: Board::new(),
            active: None,
            next,
            rng,
            power_ups: PowerUpState::new(),
            status: GameStatus::NotStarted,
            score: 0,
            level: 1,
            lines: 0,
            combo: 0,
            high_score: 0,
            drop_timer_ms: 0,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn next_kind(&self) -> PieceKind {
        self.next
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Full power-up token history
    pub fn power_up_tokens(&self) -> &[PowerUpToken] {
        self.power_ups.tokens()
    }

    pub fn active_power_up(&self) -> Option<PowerUpKind> {
        self.power_ups.active_kind()
    }

    pub fn ghost_visible(&self) -> bool {
        self.power_ups.ghost_visible()
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) {
        if self.status != GameStatus::NotStarted {
            return;
        }
        self.status = GameStatus::Playing;
        self.spawn_next();
    }

    /// Apply a game action. Returns whether the action took effect.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        // Restart works from any started state; everything else is gated
        // on the current status below.
        if action == GameAction::Restart {
            if self.status == GameStatus::NotStarted {
                return false;
            }
            self.restart();
            return true;
        }

        match self.status {
            GameStatus::NotStarted => {
                if action == GameAction::Start {
                    self.start();
                    return true;
                }
                false
            }
            GameStatus::GameOver => false,
            // Pausing suspends gravity and piece movement only; power-up
            // activation (and their countdowns) stay live.
            GameStatus::Paused => match action {
                GameAction::Pause => {
                    self.status = GameStatus::Playing;
                    true
                }
                GameAction::ActivatePowerUp(slot) => self.activate_power_up(slot as usize),
                _ => false,
            },
            GameStatus::Playing => match action {
                GameAction::MoveLeft => self.try_shift(-1, 0),
                GameAction::MoveRight => self.try_shift(1, 0),
                GameAction::SoftDrop => {
                    self.soft_drop();
                    true
                }
                GameAction::Rotate => self.try_rotate(),
                GameAction::HardDrop => self.hard_drop(),
                GameAction::Pause => {
                    self.status = GameStatus::Paused;
                    true
                }
                GameAction::ActivatePowerUp(slot) => self.activate_power_up(slot as usize),
                GameAction::Start | GameAction::Restart => false,
            },
        }
    }

    /// Advance time by `elapsed_ms`.
    ///
    /// Gravity runs only while playing; power-up countdowns keep running
    /// while paused (pausing cancels only the movement tick).
    pub fn tick(&mut self, elapsed_ms: u32) {
        match self.status {
            GameStatus::Playing => {
                self.power_ups.tick(elapsed_ms);
                self.drop_timer_ms += elapsed_ms;
                loop {
                    let interval = self.drop_interval_ms();
                    if self.drop_timer_ms < interval || self.status != GameStatus::Playing {
                        break;
                    }
                    self.drop_timer_ms -= interval;
                    self.soft_drop();
                }
            }
            GameStatus::Paused => {
                self.power_ups.tick(elapsed_ms);
            }
            GameStatus::NotStarted | GameStatus::GameOver => {}
        }
    }

    /// Current gravity interval (level speed curve, slow override)
    pub fn drop_interval_ms(&self) -> u32 {
        scoring::drop_interval_ms(self.level, self.power_ups.slow_active())
    }

    /// Landing row of the active piece (display-only preview)
    pub fn ghost_y(&self) -> Option<i8> {
        let active = self.active?;
        Some(active.y + self.fall_distance(&active) as i8)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill an existing snapshot (allocation-free export path)
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.ghost_y = self.ghost_y();
        out.next = self.next;
        out.status = self.status;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.combo = self.combo;
        out.high_score = self.high_score;
        out.power_up_slots = self.power_ups.slots();
        out.active_power_up = self.power_ups.active_kind();
        out.ghost_visible = self.power_ups.ghost_visible();
    }

    /// Shift the active piece, rejecting colliding candidates
    fn try_shift(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        let candidate = active.shifted(dx, dy);
        if collides(&self.board, &candidate.shape, candidate.x, candidate.y) {
            return false;
        }
        self.active = Some(candidate);
        true
    }

    /// Rotate the active piece clockwise.
    ///
    /// No wall kicks: a rotation that collides is rejected outright.
    fn try_rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        let candidate = active.rotated();
        if collides(&self.board, &candidate.shape, candidate.x, candidate.y) {
            return false;
        }
        self.active = Some(candidate);
        true
    }

    /// Move the active piece down one row, locking it when it cannot fall.
    ///
    /// Returns true when the piece moved, false when it locked.
    fn soft_drop(&mut self) -> bool {
        if self.try_shift(0, 1) {
            return true;
        }
        if self.active.is_some() {
            self.lock_active();
        }
        false
    }

    /// Probe the maximum legal fall distance for a piece
    fn fall_distance(&self, piece: &ActivePiece) -> u32 {
        let mut distance = 0u32;
        while !collides(
            &self.board,
            &piece.shape,
            piece.x,
            piece.y + distance as i8 + 1,
        ) {
            distance += 1;
        }
        distance
    }

    /// Drop the active piece to its landing row in one step.
    ///
    /// Awards 2 points per cell fallen, then forces the lock cycle.
    fn hard_drop(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        let distance = self.fall_distance(&active);
        self.score += scoring::hard_drop_bonus(distance);
        if distance > 0 {
            self.active = Some(active.shifted(0, distance as i8));
        }
        // The piece is grounded now; this runs the lock cycle.
        self.soft_drop();
        true
    }

    /// The lock cycle: merge, clear, score, level resync, power-up roll,
    /// then spawn the queued next piece.
    fn lock_active(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board
            .merge_cells(&active.shape.offsets(), active.x, active.y, active.kind);
        let cleared = self.board.clear_full_rows().len();

        if cleared > 0 {
            self.lines += cleared as u32;
            self.combo += 1;
            self.score += scoring::lock_score(cleared, self.combo, self.level);
        } else {
            self.combo = 0;
        }

        self.sync_level();

        if cleared > 0 {
            self.power_ups.maybe_spawn(&mut self.rng);
        }

        self.spawn_next();
    }

    /// Keep `level` equal to `lines / 10 + 1`, awarding the level-up
    /// bonus exactly once per increase.
    fn sync_level(&mut self) {
        let new_level = scoring::level_for_lines(self.lines);
        if new_level > self.level {
            self.level = new_level;
            self.score += scoring::level_up_bonus(new_level);
        }
    }

    /// Promote the queued piece to active and draw a new next piece.
    ///
    /// A spawn collision is the terminal condition: the game transitions
    /// to GameOver and the score is folded into the high score.
    fn spawn_next(&mut self) {
        let piece = ActivePiece::spawn(self.next);
        if collides(&self.board, &piece.shape, piece.x, piece.y) {
            self.status = GameStatus::GameOver;
            self.high_score = self.high_score.max(self.score);
            return;
        }
        self.active = Some(piece);
        self.next = self.rng.draw_kind();
    }

    fn activate_power_up(&mut self, slot: usize) -> bool {
        match self.power_ups.activate_slot(slot, &mut self.board) {
            Some(bonus) => {
                self.score += bonus;
                true
            }
            None => false,
        }
    }

    /// Re-initialize everything except the high score and the RNG
    /// stream, and return to Playing. Pending power-up timers are
    /// invalidated so no stale expiration leaks into the new game.
    fn restart(&mut self) {
        let high_score = self.high_score;
        *self = Self::new(self.rng.state());
        self.high_score = high_score;
        self.start();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
