//! Deterministic high-entropy byte streams from tiny fixed seeds
//!
//! GoldenSeed expands a 16- or 32-byte seed, typically a mathematical
//! constant such as the golden ratio packed as an IEEE-754 complex number,
//! into an infinite sequence of 16-byte chunks. The same seed produces the
//! same bytes on every platform, forever.
//!
//! **Not for cryptography.** The stream is fully determined by a public
//! seed. Use it for procedural content, reproducible fixtures,
//! deterministic simulation and coordination-free tie-breaking only.
//!
//! # Module overview
//!
//! - `seed`
//!   Seed values, their binary layout, and the named seed registry
//!   (`golden-ratio`, `pi`, `e`, `sqrt2`) with SHA-256 checksums.
//!
//! - `stream`
//!   The generation protocol: hash ratchet, basis sifting, XOR folding,
//!   and the pull-based [`StreamGenerator`] that ties them together.
//!   [`ByteStream`] serves arbitrary-length reads on top of it.
//!
//! - `gqs1`
//!   The GQS-1 compliance test-vector protocol.
//!
//! - `fusion`
//!   The binary fusion tap, computed in the fixed-width `U256` from
//!   `primitives`.
//!
//! - `checksum`
//!   SHA-256 / SHA-512 integrity digests over seeds and output.
//!
//! # Examples
//!
//! ```
//! use goldenseed::StreamGenerator;
//!
//! let mut stream = StreamGenerator::golden_ratio().unwrap();
//! assert_eq!(stream.next().to_hex(), "3c732e0d04dac163a5cc2b15c7caf42c");
//! ```
//!
//! Reaching an offset without materialising the skipped chunks:
//!
//! ```
//! use goldenseed::StreamGenerator;
//!
//! let mut a = StreamGenerator::golden_ratio().unwrap();
//! let tenth = a.take_chunks(10).pop().unwrap();
//!
//! let mut b = StreamGenerator::golden_ratio().unwrap();
//! b.skip(9);
//! assert_eq!(b.next(), tenth);
//! ```

pub mod checksum;
pub mod error;
pub mod fusion;
pub mod gqs1;
pub mod primitives;
pub mod seed;
pub mod stream;

pub use error::{GoldenSeedError, Result};
pub use seed::{Seed, SeedRegistry};
pub use stream::{ByteStream, Chunk, StreamGenerator};
