//! Scoring module - line-clear points, level progression and gravity speed
//!
//! Rules:
//! - A clear of `n` rows scores `LINE_SCORES[n] * level`, using the level in
//!   effect before the clear.
//! - The level is `lines / 10 + 1`.
//! - Gravity starts at 1000ms per row and speeds up by 100ms per level down to
//!   a 100ms floor.
//! - Manual soft drop: +1 per step. Hard drop: +2 per row travelled.

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_STEP_MS, HARD_DROP_POINTS, LINES_PER_LEVEL,
    LINE_SCORES, SOFT_DROP_POINTS,
};

/// Points for clearing `lines` rows at once (0-4) at `level` (1-based).
/// Anything outside 1..=4 scores nothing.
pub fn calculate_line_score(lines: usize, level: u32) -> u32 {
    if lines == 0 || lines >= LINE_SCORES.len() {
        return 0;
    }
    LINE_SCORES[lines].saturating_mul(level)
}

/// Calculate drop score
/// soft_drop: +1 per cell
/// hard_drop: +2 per cell
pub fn calculate_drop_score(cells: u32, is_hard_drop: bool) -> u32 {
    let per_cell = if is_hard_drop {
        HARD_DROP_POINTS
    } else {
        SOFT_DROP_POINTS
    };
    cells.saturating_mul(per_cell)
}

/// Level for a cumulative line count (starts at 1)
pub fn calculate_level(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Gravity interval for a level, clamped at the minimum
pub fn get_drop_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(DROP_STEP_MS);
    BASE_DROP_MS
        .saturating_sub(speedup)
        .max(DROP_INTERVAL_MIN_MS)
}

/// Score, level and speed of one game
///
/// `level` and `drop_interval_ms` are derived from `lines` and are only ever
/// updated together with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoreState {
    score: u32,
    level: u32,
    lines: u32,
    drop_interval_ms: u32,
}

impl ScoreState {
    pub fn new() -> Self {
        Self {
            score: 0,
            level: 1,
            lines: 0,
            drop_interval_ms: BASE_DROP_MS,
        }
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

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    /// Add drop points (soft or hard)
    pub fn add_drop_points(&mut self, cells: u32, is_hard_drop: bool) -> u32 {
        let points = calculate_drop_score(cells, is_hard_drop);
        self.score = self.score.saturating_add(points);
        points
    }

    /// Score a simultaneous clear of `lines` rows, then advance lines, level
    /// and gravity. Returns the points awarded.
    pub fn record_clear(&mut self, lines: usize) -> u32 {
        let points = calculate_line_score(lines, self.level);
        if lines == 0 {
            return points;
        }

        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(lines as u32);
        self.level = calculate_level(self.lines);
        self.drop_interval_ms = get_drop_interval_ms(self.level);
        points
    }
}

impl Default for ScoreState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_scores() {
        assert_eq!(calculate_line_score(0, 1), 0);
        assert_eq!(calculate_line_score(1, 1), 100);
        assert_eq!(calculate_line_score(2, 1), 300);
        assert_eq!(calculate_line_score(3, 1), 500);
        assert_eq!(calculate_line_score(4, 1), 800);

        // Level 5
        assert_eq!(calculate_line_score(1, 5), 500);
        assert_eq!(calculate_line_score(4, 5), 4000);

        assert_eq!(calculate_line_score(5, 3), 0);
    }

    #[test]
    fn test_drop_scores() {
        assert_eq!(calculate_drop_score(10, false), 10);
        assert_eq!(calculate_drop_score(10, true), 20);
    }

    #[test]
    fn test_level_calculation() {
        assert_eq!(calculate_level(0), 1);
        assert_eq!(calculate_level(9), 1);
        assert_eq!(calculate_level(10), 2);
        assert_eq!(calculate_level(29), 3);
        assert_eq!(calculate_level(95), 10);
    }

    #[test]
    fn test_drop_intervals() {
        assert_eq!(get_drop_interval_ms(1), 1000);
        assert_eq!(get_drop_interval_ms(2), 900);
        assert_eq!(get_drop_interval_ms(10), 100);
        assert_eq!(get_drop_interval_ms(11), 100);
        assert_eq!(get_drop_interval_ms(500), 100);
        // Level 0 never happens but must not underflow.
        assert_eq!(get_drop_interval_ms(0), 1000);
    }

    #[test]
    fn clear_uses_level_before_update() {
        let mut state = ScoreState::new();
        for _ in 0..9 {
            state.record_clear(1);
        }
        assert_eq!(state.lines(), 9);
        assert_eq!(state.level(), 1);
        assert_eq!(state.drop_interval_ms(), 1000);

        // Crosses into level 2 but is still paid at level 1.
        let points = state.record_clear(4);
        assert_eq!(points, 800);
        assert_eq!(state.lines(), 13);
        assert_eq!(state.level(), 2);
        assert_eq!(state.drop_interval_ms(), 900);
        assert_eq!(state.score(), 9 * 100 + 800);
    }

    #[test]
    fn zero_line_clear_changes_nothing() {
        let mut state = ScoreState::new();
        assert_eq!(state.record_clear(0), 0);
        assert_eq!(state, ScoreState::new());
    }

    #[test]
    fn interval_floor_holds_at_high_line_counts() {
        let mut state = ScoreState::new();
        while state.lines() < 95 {
            state.record_clear(1);
        }
        assert_eq!(state.level(), 10);
        assert_eq!(state.drop_interval_ms(), 100);
        state.record_clear(4);
        assert_eq!(state.level(), 10);
        assert_eq!(state.drop_interval_ms(), 100);
        state.record_clear(4);
        assert_eq!(state.level(), 11);
        assert_eq!(state.drop_interval_ms(), 100);
    }
}
