//! Frame-exact timing constants for the Game Boy rule set.
//!
//! All values are frame counts at the fixed 60 Hz tick.

/// Simulation tick rate.
pub const FPS: u32 = 60;

/// Frames after spawn during which the piece ignores input and gravity.
pub const ENTRY_DELAY: u32 = 10;

/// Held frames before horizontal auto-repeat starts.
pub const DAS_DELAY: u32 = 16;

/// Frames between auto-repeated horizontal moves.
pub const DAS_RATE: u32 = 6;

/// Grounded frames before a blocked piece commits to the board.
pub const LOCK_DELAY: u32 = 30;

/// Frames the line-clear flash is shown before marked rows are removed.
pub const LINE_CLEAR_DELAY: u32 = 20;

/// The kill-screen level; levels never exceed this.
pub const MAX_LEVEL: u32 = 29;

/// NES/GB gravity table: frames between automatic drops per level.
const SPEED_TABLE: [u32; 30] = [
    48, 43, 38, 33, 28, 23, 18, 13, 8, 6, //
    5, 5, 5, 4, 4, 4, 3, 3, 3, 2, //
    2, 2, 2, 2, 2, 2, 2, 2, 2, 1,
];

/// Frames between gravity drops at the given level.
///
/// Levels beyond the table fall at the fastest defined speed.
#[must_use]
pub fn gravity_delay(level: u32) -> u32 {
    usize::try_from(level)
        .ok()
        .and_then(|level| SPEED_TABLE.get(level).copied())
        .unwrap_or(1)
}

/// Derives the current level from lines cleared and the starting level,
/// capped at [`MAX_LEVEL`].
#[must_use]
pub fn level_for_lines(total_lines: u32, starting_level: u32) -> u32 {
    (total_lines / 10 + starting_level).min(MAX_LEVEL)
}

/// Clamps an externally supplied starting level into the valid range.
#[must_use]
pub fn clamp_level(level: u32) -> u32 {
    level.min(MAX_LEVEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gravity_delay_matches_table_endpoints() {
        assert_eq!(gravity_delay(0), 48);
        assert_eq!(gravity_delay(9), 6);
        assert_eq!(gravity_delay(19), 2);
        assert_eq!(gravity_delay(29), 1);
    }

    #[test]
    fn gravity_delay_past_kill_screen_is_one_frame() {
        assert_eq!(gravity_delay(30), 1);
        assert_eq!(gravity_delay(255), 1);
    }

    #[test]
    fn level_caps_at_kill_screen() {
        assert_eq!(level_for_lines(0, 0), 0);
        assert_eq!(level_for_lines(95, 0), 9);
        assert_eq!(level_for_lines(1000, 0), MAX_LEVEL);
        assert_eq!(level_for_lines(0, 50), MAX_LEVEL);
        assert_eq!(level_for_lines(30, 5), 8);
    }
}
