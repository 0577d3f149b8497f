// src/core/static_random.rs

use num::bigint::Sign;
use num::BigInt;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Random source backing witness selection.
///
/// Wraps a ChaCha8 stream so callers that need reproducible runs can pin
/// the whole witness sequence with a single seed.
pub struct StaticRandom {
    rng: ChaCha8Rng,
}

impl StaticRandom {
    pub fn new() -> Self {
        StaticRandom {
            rng: ChaCha8Rng::from_rng(&mut rand::rng()),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        StaticRandom {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Uniform BigInt in the inclusive range [lower, upper].
    ///
    /// Draws random big-endian bytes the width of the range and rejects
    /// values past the upper end, so every value is equally likely.
    pub fn next_bigint(&mut self, lower: &BigInt, upper: &BigInt) -> BigInt {
        if lower > upper {
            panic!("upper must be greater than or equal to lower");
        }

        let delta = upper - lower;
        let mut buffer = vec![0u8; delta.to_bytes_be().1.len()];

        loop {
            self.rng.fill(&mut buffer[..]);
            let candidate = BigInt::from_bytes_be(Sign::Plus, &buffer);

            if candidate <= delta {
                return candidate + lower;
            }
        }
    }
}
