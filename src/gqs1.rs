//! GQS-1 test vectors
//!
//! A compact companion protocol used for cross-implementation compliance
//! vectors. It shares the ratchet and the folder with the stream protocol
//! but skips sifting:
//!
//! ```text
//! S_0 = seed                          (raw, not hashed)
//! S_c = SHA-256(S_{c-1} || be32(c))   for c = 1, 2, …
//! V_c = S_c[0..16] ^ S_c[16..32]
//! ```
//!
//! The counter is a 32-bit big-endian value, so at most `u32::MAX` vectors
//! exist per seed.

use crate::error::{GoldenSeedError, Result};
use crate::seed::{FULL_SEED_LEN, Seed};
use crate::stream::ratchet::{self, Counter, Digest};
use crate::stream::{Chunk, SiftedBits, fold};

/// Iterator over the GQS-1 vectors of one seed.
#[derive(Debug)]
pub struct Gqs1 {
    state: Digest,
    counter: u32,
}

impl Gqs1 {
    /// Starts the vector sequence for `seed`.
    ///
    /// The protocol state is 32 bytes wide; a 16-byte seed is widened by
    /// repetition first.
    pub fn new(seed: Seed) -> Self {
        let mut state = [0u8; FULL_SEED_LEN];
        state.copy_from_slice(seed.widen().as_bytes());

        Self { state, counter: 0 }
    }

    /// Produces the next vector.
    ///
    /// # Errors
    /// [`GoldenSeedError::CounterExhausted`] once all `u32::MAX` vectors have
    /// been produced.
    pub fn next_vector(&mut self) -> Result<Chunk> {
        let counter = self
            .counter
            .checked_add(1)
            .ok_or(GoldenSeedError::CounterExhausted(u32::MAX as u64))?;

        self.state = ratchet::advance(&self.state, Counter::BigEndian(counter));
        self.counter = counter;

        Ok(fold(&SiftedBits::from_block(self.state)))
    }

    /// Number of vectors produced so far.
    pub fn produced(&self) -> u32 {
        self.counter
    }
}

impl Iterator for Gqs1 {
    type Item = Chunk;

    fn next(&mut self) -> Option<Chunk> {
        self.next_vector().ok()
    }
}

/// First `n` vectors for `seed`.
pub fn generate_test_vectors(seed: Seed, n: usize) -> Result<Vec<Chunk>> {
    if n as u64 > u32::MAX as u64 {
        return Err(GoldenSeedError::CounterExhausted(u32::MAX as u64));
    }

    let mut vectors = Gqs1::new(seed);
    (0..n).map(|_| vectors.next_vector()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::SeedRegistry;

    #[test]
    fn test_first_golden_vectors() {
        let seed = SeedRegistry.lookup("golden-ratio").unwrap();
        let vectors = generate_test_vectors(seed, 3).unwrap();

        let hex: Vec<String> = vectors.iter().map(Chunk::to_hex).collect();
        assert_eq!(
            hex,
            vec![
                "a01611f01e8207a27c1529c3650c4838",
                "255a98839109b593c97580ce561471d7",
                "f9e3d43664f3192b84d90f58ee584d83",
            ]
        );
    }

    #[test]
    fn test_counter_exhaustion() {
        let mut vectors = Gqs1 {
            state: [0u8; 32],
            counter: u32::MAX,
        };

        assert!(matches!(
            vectors.next_vector(),
            Err(GoldenSeedError::CounterExhausted(_))
        ));
        assert!(vectors.next().is_none());
    }
}
