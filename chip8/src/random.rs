//! Random byte source used by `Cxkk (RND Vx, byte)`.
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Uniform 8-bit random generator.
///
/// Seeding makes program runs reproducible, which is useful for tests
/// and for replaying a session.
pub struct RandomByte {
    rng: StdRng,
}

impl RandomByte {
    /// Creates a generator from the given seed, or from system entropy when `None`.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    #[inline]
    pub fn next_byte(&mut self) -> u8 {
        self.rng.gen::<u8>()
    }
}

impl Default for RandomByte {
    fn default() -> Self {
        Self::new(None)
    }
}
