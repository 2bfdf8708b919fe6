//! Stream generator
//!
//! Orchestrates ratchet, sifter and folder into a pull-based, infinite
//! chunk producer.
//!
//! ```text
//! seed ──SHA-256──▶ RatchetState ──step()──▶ 32-byte block
//!                        ▲                        │
//!                        └──── until 256 bits ◀── sift_block
//!                                                 │
//!                                      fold ◀─────┘
//!                                        │
//!                                     Chunk (16 bytes)
//! ```
//!
//! Every call is synchronous and CPU-bound; there is no suspension point
//! and no error path once the generator exists.

use tracing::debug;

use super::folder::{Chunk, fold};
use super::ratchet::RatchetState;
use super::sifter::{BasisSifter, SiftedBits};
use crate::error::Result;
use crate::seed::{Seed, SeedRegistry};

/// Deterministic, inexhaustible chunk producer.
///
/// One generator owns one ratchet state. Independent consumers of the
/// same logical stream each hold their own generator and position it with
/// [`StreamGenerator::skip`].
#[derive(Debug)]
pub struct StreamGenerator {
    seed: Seed,
    ratchet: RatchetState,
    sifter: BasisSifter,
    buf: SiftedBits,
    position: u64,
}

impl StreamGenerator {
    /// Creates a generator from raw seed bytes.
    ///
    /// # Errors
    /// [`GoldenSeedError::InvalidSeedLength`](crate::GoldenSeedError::InvalidSeedLength)
    /// unless `seed` is exactly 16 or 32 bytes.
    pub fn new(seed: &[u8]) -> Result<Self> {
        Ok(Self::from_seed(Seed::from_bytes(seed)?))
    }

    /// Creates a generator from an already validated seed.
    pub fn from_seed(seed: Seed) -> Self {
        debug!(seed = %seed.to_hex(), "stream generator initialised");

        Self {
            ratchet: RatchetState::from_seed(&seed),
            seed,
            sifter: BasisSifter,
            buf: SiftedBits::new(),
            position: 0,
        }
    }

    /// Creates a generator from a named registry seed, checksum verified.
    pub fn from_name(name: &str) -> Result<Self> {
        Ok(Self::from_seed(SeedRegistry.lookup(name)?))
    }

    /// Creates a generator over the default golden-ratio seed.
    pub fn golden_ratio() -> Result<Self> {
        Self::from_name(SeedRegistry::DEFAULT)
    }

    /// Produces the next chunk.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Chunk {
        self.sift_to_quota();
        fold(&self.buf)
    }

    /// Advances as if [`next`](Self::next) had been called `n` times.
    ///
    /// The skipped chunks are never folded; the ratchet still performs
    /// every advance, since acceptance depends on each hash block.
    pub fn skip(&mut self, n: u64) {
        let from = self.position;

        for _ in 0..n {
            self.sift_to_quota();
        }

        debug!(from, to = self.position, "stream skipped");
    }

    /// Number of chunks produced or skipped so far; the index of the chunk
    /// the next call to [`next`](Self::next) returns.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Number of ratchet advances performed so far.
    pub fn ratchet_counter(&self) -> u64 {
        self.ratchet.counter()
    }

    /// Seed this generator was built from.
    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    /// Borrowing iterator over the following chunks. Never ends.
    pub fn chunks(&mut self) -> Chunks<'_> {
        Chunks { generator: self }
    }

    /// Collects the next `n` chunks.
    pub fn take_chunks(&mut self, n: usize) -> Vec<Chunk> {
        self.chunks().take(n).collect()
    }

    /// Chunk at absolute `index` of the stream for `seed`.
    ///
    /// Any number of independent parties evaluating the same `(seed, index)`
    /// obtain the same chunk without coordinating.
    pub fn chunk_at(seed: Seed, index: u64) -> Chunk {
        let mut generator = Self::from_seed(seed);
        generator.skip(index);
        generator.next()
    }

    fn sift_to_quota(&mut self) {
        self.buf.clear();
        self.sifter.fill(&mut self.ratchet, &mut self.buf);
        self.position += 1;
    }
}

/// Iterator returned by [`StreamGenerator::chunks`].
#[derive(Debug)]
pub struct Chunks<'a> {
    generator: &'a mut StreamGenerator,
}

impl Iterator for Chunks<'_> {
    type Item = Chunk;

    fn next(&mut self) -> Option<Chunk> {
        Some(self.generator.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn golden() -> StreamGenerator {
        StreamGenerator::golden_ratio().unwrap()
    }

    #[test]
    fn test_reference_vector() {
        assert_eq!(golden().next().to_hex(), "3c732e0d04dac163a5cc2b15c7caf42c");
    }

    #[test]
    fn test_ratchet_advances_per_chunk() {
        let mut generator = golden();

        generator.next();
        assert_eq!(generator.ratchet_counter(), 17);
        generator.next();
        assert_eq!(generator.ratchet_counter(), 33);
        assert_eq!(generator.position(), 2);
    }

    #[test]
    fn test_skip_zero_is_noop() {
        let mut generator = golden();
        generator.skip(0);

        assert_eq!(generator.position(), 0);
        assert_eq!(generator.ratchet_counter(), 0);
    }

    #[test]
    fn test_skip_tracks_ratchet_of_sequential_calls() {
        let mut sequential = golden();
        for _ in 0..10 {
            sequential.next();
        }

        let mut skipped = golden();
        skipped.skip(10);

        assert_eq!(skipped.position(), sequential.position());
        assert_eq!(skipped.ratchet_counter(), sequential.ratchet_counter());
        assert_eq!(skipped.ratchet.digest(), sequential.ratchet.digest());
    }

    #[test]
    fn test_invalid_seed_rejected() {
        assert!(StreamGenerator::new(&[0u8; 15]).is_err());
        assert!(StreamGenerator::new(&[0u8; 33]).is_err());
    }

    #[test]
    fn test_chunks_iterator_matches_next() {
        let from_iter = golden().take_chunks(5);

        let mut generator = golden();
        let manual: Vec<Chunk> = (0..5).map(|_| generator.next()).collect();

        assert_eq!(from_iter, manual);
    }
}
