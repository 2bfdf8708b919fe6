//! Byte-level access to a chunk stream.
//!
//! [`ByteStream`] turns the chunk-granular generator into a plain byte
//! source: reads of any length are served from consecutive chunks, with no
//! bytes skipped or repeated across calls.

use std::io;

use rand_core::RngCore;

use super::folder::{CHUNK_LEN, Chunk};
use super::generator::StreamGenerator;

/// Buffered byte reader over a [`StreamGenerator`].
#[derive(Debug)]
pub struct ByteStream {
    generator: StreamGenerator,
    pending: Chunk,
    offset: usize,
}

impl ByteStream {
    /// Wraps `generator`, starting at its current position.
    pub fn new(generator: StreamGenerator) -> Self {
        Self {
            generator,
            pending: Chunk::default(),
            offset: CHUNK_LEN,
        }
    }

    /// Fills `out` with the next `out.len()` stream bytes.
    pub fn fill(&mut self, out: &mut [u8]) {
        let mut written = 0;

        while written < out.len() {
            if self.offset == CHUNK_LEN {
                self.pending = self.generator.next();
                self.offset = 0;
            }

            let take = (CHUNK_LEN - self.offset).min(out.len() - written);
            out[written..written + take]
                .copy_from_slice(&self.pending.0[self.offset..self.offset + take]);

            self.offset += take;
            written += take;
        }
    }

    /// Returns the next `n` stream bytes.
    pub fn take_bytes(&mut self, n: usize) -> Vec<u8> {
        let mut out = vec![0u8; n];
        self.fill(&mut out);
        out
    }

    /// Stream offset, in bytes, of the next byte to be read. Chunks skipped
    /// on the generator before wrapping count towards it.
    pub fn byte_position(&self) -> u64 {
        self.generator.position() * CHUNK_LEN as u64 - (CHUNK_LEN - self.offset) as u64
    }

    /// Releases the underlying generator. Buffered bytes of a partially
    /// consumed chunk are dropped.
    pub fn into_inner(self) -> StreamGenerator {
        self.generator
    }
}

impl From<StreamGenerator> for ByteStream {
    fn from(generator: StreamGenerator) -> Self {
        Self::new(generator)
    }
}

impl io::Read for ByteStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.fill(buf);
        Ok(buf.len())
    }
}

impl RngCore for ByteStream {
    fn next_u32(&mut self) -> u32 {
        let mut bytes = [0u8; 4];
        self.fill(&mut bytes);
        u32::from_le_bytes(bytes)
    }

    fn next_u64(&mut self) -> u64 {
        let mut bytes = [0u8; 8];
        self.fill(&mut bytes);
        u64::from_le_bytes(bytes)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.fill(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill(dest);
        Ok(())
    }
}
