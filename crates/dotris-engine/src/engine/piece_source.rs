use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;

use crate::core::PieceKind;

/// Uniform-random piece supplier.
///
/// Each piece is drawn independently and uniformly from the 7 kinds; there
/// is no bag fairness, matching the Game Boy behavior. Seedable for
/// deterministic replays and tests.
#[derive(Debug, Clone)]
pub struct PieceSource {
    rng: Pcg64Mcg,
}

impl Default for PieceSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PieceSource {
    /// Creates a source seeded from the OS random data source.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: Pcg64Mcg::from_os_rng(),
        }
    }

    /// Creates a deterministic source from a seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Draws the next piece kind.
    pub fn next_kind(&mut self) -> PieceKind {
        self.rng.random()
    }
}
