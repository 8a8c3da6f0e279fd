use crate::core::PieceKind;

use super::timing::{clamp_level, level_for_lines};

/// Base points for clearing 0–4 lines at once, before the level multiplier.
const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Points awarded for a line clear under the original Nintendo scoring:
/// `base[lines] * (level + 1)`.
///
/// # Panics
///
/// Panics if `cleared > 4`; a single lock can never clear more than 4 rows.
#[must_use]
pub fn score_for_lines(cleared: usize, level: u32) -> u32 {
    LINE_SCORES[cleared] * (level + 1)
}

/// Cumulative score, line count, level, and per-shape lock statistics for
/// one game.
///
/// Level is derived from lines cleared and the starting level rather than
/// stored, so it is monotonically non-decreasing and capped at the kill
/// screen by construction.
#[derive(Debug, Clone)]
pub struct GameStats {
    score: u32,
    total_lines: u32,
    starting_level: u32,
    piece_counts: [u32; PieceKind::LEN],
}

impl GameStats {
    /// Creates a tracker for a game starting at the given level.
    ///
    /// Out-of-range levels are clamped, not rejected.
    #[must_use]
    pub fn new(starting_level: u32) -> Self {
        Self {
            score: 0,
            total_lines: 0,
            starting_level: clamp_level(starting_level),
            piece_counts: [0; PieceKind::LEN],
        }
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub const fn total_lines(&self) -> u32 {
        self.total_lines
    }

    #[must_use]
    pub const fn starting_level(&self) -> u32 {
        self.starting_level
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        level_for_lines(self.total_lines, self.starting_level)
    }

    /// Lock counters per shape, indexed by [`PieceKind`] discriminant.
    #[must_use]
    pub const fn piece_counts(&self) -> &[u32; PieceKind::LEN] {
        &self.piece_counts
    }

    /// Records a locked piece of the given kind.
    pub const fn record_lock(&mut self, kind: PieceKind) {
        self.piece_counts[kind as usize] += 1;
    }

    /// Adds drop points (soft drop: 1/cell, hard drop: 2/cell).
    pub const fn add_drop_points(&mut self, points: u32) {
        self.score += points;
    }

    /// Records a line clear and returns the points awarded for it.
    ///
    /// The award uses the level in effect before the cleared lines are
    /// counted, matching the original scoring order.
    pub fn record_line_clear(&mut self, cleared: usize) -> u32 {
        let points = score_for_lines(cleared, self.level());
        self.score += points;
        #[expect(clippy::cast_possible_truncation)]
        {
            self.total_lines += cleared as u32;
        }
        points
    }
}
