//! Scoring module - line clear, combo, level and speed rules
//!
//! All reward channels are independent additive contributions: the lock
//! score (base + combo + level bonus), the hard-drop distance bonus and
//! the level-up bonus never replace one another.

use crate::types::{
    BASE_DROP_MS, COMBO_BONUS, DROP_FLOOR_MS, DROP_STEP_PER_LEVEL_MS, HARD_DROP_BONUS_PER_CELL,
    LEVEL_LOCK_BONUS, LEVEL_UP_BONUS, LINE_SCORES, SLOW_DROP_MS,
};

/// Base points for clearing `lines` rows in one lock.
///
/// The table tops out at the four-line tier; larger counts reuse it.
pub fn line_clear_base(lines: usize) -> u32 {
    LINE_SCORES[lines.min(LINE_SCORES.len() - 1)]
}

/// Total points awarded by a lock that cleared `lines > 0` rows.
///
/// `combo` is the chain value after this lock's increment.
pub fn lock_score(lines: usize, combo: u32, level: u32) -> u32 {
    line_clear_base(lines) + combo * COMBO_BONUS + level * LEVEL_LOCK_BONUS
}

/// Hard drop bonus: 2 points per cell fallen
pub fn hard_drop_bonus(distance: u32) -> u32 {
    distance * HARD_DROP_BONUS_PER_CELL
}

/// Level derived from the total cleared line count
pub fn level_for_lines(lines: u32) -> u32 {
    lines / 10 + 1
}

/// One-time bonus awarded when the level increases
pub fn level_up_bonus(new_level: u32) -> u32 {
    new_level * LEVEL_UP_BONUS
}

/// Gravity interval for a level, in milliseconds.
///
/// Shrinks 50ms per level with a 100ms floor; the slow power-up
/// overrides it to a flat 1000ms.
pub fn drop_interval_ms(level: u32, slow: bool) -> u32 {
    if slow {
        return SLOW_DROP_MS;
    }
    BASE_DROP_MS
        .saturating_sub(level.saturating_sub(1) * DROP_STEP_PER_LEVEL_MS)
        .max(DROP_FLOOR_MS)
}
