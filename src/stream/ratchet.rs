//! State ratchet
//!
//! One-way, forward-only state advancement:
//!
//! ```text
//! S_{n+1} = SHA-256(S_n || counter_bytes(n))
//! ```
//!
//! Given `S_n`, computing `S_{n+1}` is trivial; recovering `S_n` from
//! `S_{n+1}` would require inverting SHA-256.

use sha2::{Digest as _, Sha256};

use crate::seed::Seed;

/// Size of the ratchet state in bytes.
pub const STATE_LEN: usize = 32;

/// A 32-byte ratchet digest.
pub type Digest = [u8; STATE_LEN];

/// Longest decimal rendering of a `u64`.
const MAX_DECIMAL_DIGITS: usize = 20;

/// Counter value together with its byte encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Counter {
    /// ASCII decimal digits, no padding. Used by the stream protocol.
    Decimal(u64),
    /// Four bytes, big-endian. Used by the GQS-1 vector protocol.
    BigEndian(u32),
}

/// Stack buffer holding an encoded counter.
struct CounterBytes {
    buf: [u8; MAX_DECIMAL_DIGITS],
    len: usize,
}

impl CounterBytes {
    fn as_slice(&self) -> &[u8] {
        &self.buf[MAX_DECIMAL_DIGITS - self.len..]
    }
}

impl Counter {
    fn encode(self) -> CounterBytes {
        let mut buf = [0u8; MAX_DECIMAL_DIGITS];

        match self {
            Counter::Decimal(mut value) => {
                // Digits are written right-aligned, least significant first.
                let mut len = 0;
                loop {
                    len += 1;
                    buf[MAX_DECIMAL_DIGITS - len] = b'0' + (value % 10) as u8;
                    value /= 10;
                    if value == 0 {
                        break;
                    }
                }
                CounterBytes { buf, len }
            }
            Counter::BigEndian(value) => {
                buf[MAX_DECIMAL_DIGITS - 4..].copy_from_slice(&value.to_be_bytes());
                CounterBytes { buf, len: 4 }
            }
        }
    }

    /// Encoded counter bytes as fed to the hash.
    pub fn to_bytes(self) -> Vec<u8> {
        self.encode().as_slice().to_vec()
    }
}

/// Computes the next ratchet state.
///
/// Pure function of `(state, counter)`; the caller owns the state slot and
/// the counter increment.
pub fn advance(state: &Digest, counter: Counter) -> Digest {
    let encoded = counter.encode();

    let mut hasher = Sha256::new();
    hasher.update(state);
    hasher.update(encoded.as_slice());

    hasher.finalize().into()
}

/// Mutable ratchet slot owned by exactly one generator.
///
/// Neither `Clone` nor `Copy`: one state, one logical stream.
#[derive(Debug)]
pub struct RatchetState {
    digest: Digest,
    counter: u64,
}

impl RatchetState {
    /// Initial state for `seed`: `SHA-256(seed)`, counter zero.
    pub fn from_seed(seed: &Seed) -> Self {
        Self {
            digest: seed.digest(),
            counter: 0,
        }
    }

    /// Advances the state once and returns the new digest.
    ///
    /// # Panics
    /// After `u64::MAX` advances. The counter never wraps.
    pub fn step(&mut self) -> Digest {
        self.digest = advance(&self.digest, Counter::Decimal(self.counter));
        self.counter = match self.counter.checked_add(1) {
            Some(next) => next,
            None => panic!("ratchet counter exhausted"),
        };

        self.digest
    }

    /// Current digest.
    pub fn digest(&self) -> &Digest {
        &self.digest
    }

    /// Number of advances performed so far.
    pub fn counter(&self) -> u64 {
        self.counter
    }
}
