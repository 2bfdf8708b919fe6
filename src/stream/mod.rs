//! Deterministic stream generation
//!
//! The four-stage protocol, one submodule per stage:
//!
//! - [`ratchet`]: `S_{n+1} = SHA-256(S_n || counter)`, forward only
//! - [`sifter`]: keep bit 0 of every byte whose bits 1 and 2 agree,
//!   until 256 bits are collected
//! - [`folder`]: XOR the two 128-bit halves into a 16-byte chunk
//! - [`generator`]: the pull-based orchestrator with `next()` and `skip(n)`
//!
//! [`ByteStream`] exposes the chunk sequence as an arbitrary-length byte
//! source for consumers that do not care about chunk boundaries.
//!
//! The output is deterministic and reproducible across platforms. It is not
//! suitable for keys, passwords, nonces or any other secret material.

mod bytes;
pub mod folder;
pub mod generator;
pub mod ratchet;
pub mod sifter;

pub use bytes::ByteStream;
pub use folder::{CHUNK_LEN, Chunk, fold};
pub use generator::{Chunks, StreamGenerator};
pub use ratchet::{Counter, RatchetState};
pub use sifter::{BasisSifter, QUOTA_BITS, SiftedBits, basis_match, sift_block};
