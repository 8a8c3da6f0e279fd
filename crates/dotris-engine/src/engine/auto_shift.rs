use super::timing::{DAS_DELAY, DAS_RATE};

/// Delayed auto shift accumulator for one horizontal direction.
///
/// Converts a held key into an immediate move on the first frame, then
/// repeated moves every [`DAS_RATE`] frames once [`DAS_DELAY`] frames have
/// accumulated. Releasing the key resets the accumulator instantly.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoShift {
    frames_held: u32,
}

impl AutoShift {
    #[must_use]
    pub const fn new() -> Self {
        Self { frames_held: 0 }
    }

    pub const fn reset(&mut self) {
        self.frames_held = 0;
    }

    /// Advances the accumulator by one frame and reports whether a move
    /// should be attempted. The accumulator advances whether or not the
    /// attempted move later succeeds.
    pub const fn tick(&mut self, held: bool) -> bool {
        if !held {
            self.frames_held = 0;
            return false;
        }
        let initial = self.frames_held == 0;
        self.frames_held += 1;
        initial
            || self.frames_held >= DAS_DELAY && (self.frames_held - DAS_DELAY) % DAS_RATE == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moves_in(frames: u32) -> Vec<u32> {
        let mut shift = AutoShift::new();
        (1..=frames).filter(|_| shift.tick(true)).collect()
    }

    #[test]
    fn sixteen_held_frames_fire_twice() {
        assert_eq!(moves_in(16), vec![1, 16]);
    }

    #[test]
    fn twenty_two_held_frames_fire_three_times() {
        assert_eq!(moves_in(22), vec![1, 16, 22]);
    }

    #[test]
    fn repeat_rate_is_six_frames() {
        assert_eq!(moves_in(40), vec![1, 16, 22, 28, 34, 40]);
    }

    #[test]
    fn release_resets_immediately() {
        let mut shift = AutoShift::new();
        for _ in 0..10 {
            shift.tick(true);
        }
        assert!(!shift.tick(false));
        // Re-press fires the initial move again.
        assert!(shift.tick(true));
        assert!(!shift.tick(true));
    }
}
