//! Default entropy capability backed by a seeded ChaCha8 stream.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use tombola_core::IndexSource;

/// A deterministic [`IndexSource`] over a seeded ChaCha8 stream.
///
/// The same seed always produces the same draw sequence, so pools built
/// on it are fully replayable. ChaCha8 is statistically uniform, which is
/// all the pool asks of its source; it is not a secrecy boundary.
#[derive(Clone, Debug)]
pub struct ChaChaIndexSource {
    rng: ChaCha8Rng,
}

impl ChaChaIndexSource {
    /// Create a source from a 64-bit seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl IndexSource for ChaChaIndexSource {
    fn draw(&mut self, bound: u64) -> u64 {
        self.rng.random_range(0..bound)
    }
}
