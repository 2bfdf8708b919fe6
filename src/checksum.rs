//! Integrity checksums
//!
//! SHA-256 and SHA-512 digests over seed files or generator output, in the
//! lowercase hex form used by the seed registry.

use serde::Serialize;
use sha2::{Digest, Sha256, Sha512};

use crate::stream::ByteStream;

/// SHA-256 and SHA-512 digests of one input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Checksums {
    /// Number of bytes hashed.
    pub len: u64,
    pub sha256: String,
    pub sha512: String,
}

impl Checksums {
    /// Hashes `data`.
    pub fn of(data: &[u8]) -> Self {
        Self {
            len: data.len() as u64,
            sha256: hex::encode(Sha256::digest(data)),
            sha512: hex::encode(Sha512::digest(data)),
        }
    }

    /// Hashes the next `len` bytes of `stream` without buffering them all.
    pub fn of_stream(stream: &mut ByteStream, len: u64) -> Self {
        const BLOCK: usize = 4096;

        let mut sha256 = Sha256::new();
        let mut sha512 = Sha512::new();
        let mut buf = [0u8; BLOCK];
        let mut remaining = len;

        while remaining > 0 {
            let take = remaining.min(BLOCK as u64) as usize;
            stream.fill(&mut buf[..take]);
            sha256.update(&buf[..take]);
            sha512.update(&buf[..take]);
            remaining -= take as u64;
        }

        Self {
            len,
            sha256: hex::encode(sha256.finalize()),
            sha512: hex::encode(sha512.finalize()),
        }
    }
}
