//! Seed values
//!
//! A seed is the small, fixed input that fully determines an infinite
//! output sequence. Seeds are raw bytes, exactly 16 or 32 of them, usually
//! produced by packing a mathematical constant as an IEEE-754 complex number:
//!
//! ```text
//! bytes 0..8    real part       (f64, little-endian)
//! bytes 8..16   imaginary part  (f64, little-endian)
//! bytes 16..32  optional extension of the same pattern
//! ```
//!
//! The layout is fixed and endian-independent: the same constant produces
//! the same bytes on every platform.

mod registry;

pub use registry::{RegistryEntry, SeedRegistry};

use sha2::{Digest, Sha256};

use crate::error::{GoldenSeedError, Result};

/// Length of a short seed in bytes.
pub const SHORT_SEED_LEN: usize = 16;

/// Length of a full seed in bytes.
pub const FULL_SEED_LEN: usize = 32;

/// Immutable 16- or 32-byte seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Seed {
    /// 16-byte seed: one packed complex number.
    Short([u8; SHORT_SEED_LEN]),
    /// 32-byte seed.
    Full([u8; FULL_SEED_LEN]),
}

impl Seed {
    /// Builds a seed from raw bytes.
    ///
    /// # Errors
    /// [`GoldenSeedError::InvalidSeedLength`] unless `bytes` is exactly 16 or
    /// 32 bytes long.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if let Ok(short) = <[u8; SHORT_SEED_LEN]>::try_from(bytes) {
            return Ok(Seed::Short(short));
        }

        if let Ok(full) = <[u8; FULL_SEED_LEN]>::try_from(bytes) {
            return Ok(Seed::Full(full));
        }

        Err(GoldenSeedError::InvalidSeedLength(bytes.len()))
    }

    /// Parses a seed from a hex string.
    ///
    /// Surrounding whitespace is ignored; case is not significant.
    pub fn from_hex(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let bytes = hex::decode(trimmed).map_err(|source| GoldenSeedError::InvalidSeedHex {
            input: trimmed.to_string(),
            source,
        })?;

        Self::from_bytes(&bytes)
    }

    /// Packs a complex number `re + im·i` into the 16-byte seed layout.
    pub fn from_complex(re: f64, im: f64) -> Self {
        let mut out = [0u8; SHORT_SEED_LEN];
        out[..8].copy_from_slice(&re.to_le_bytes());
        out[8..].copy_from_slice(&im.to_le_bytes());

        Seed::Short(out)
    }

    /// Extends a 16-byte seed to 32 bytes by repeating its pattern.
    ///
    /// A 32-byte seed is returned unchanged.
    pub fn widen(self) -> Self {
        match self {
            Seed::Short(short) => {
                let mut out = [0u8; FULL_SEED_LEN];
                out[..SHORT_SEED_LEN].copy_from_slice(&short);
                out[SHORT_SEED_LEN..].copy_from_slice(&short);
                Seed::Full(out)
            }
            full => full,
        }
    }

    /// Seed bytes in storage order.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Seed::Short(bytes) => bytes,
            Seed::Full(bytes) => bytes,
        }
    }

    /// Number of seed bytes (16 or 32).
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Always `false`; a seed is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Decodes the leading complex number `(re, im)` of the seed.
    pub fn complex(&self) -> (f64, f64) {
        let bytes = self.as_bytes();
        let mut re = [0u8; 8];
        let mut im = [0u8; 8];
        re.copy_from_slice(&bytes[..8]);
        im.copy_from_slice(&bytes[8..16]);

        (f64::from_le_bytes(re), f64::from_le_bytes(im))
    }

    /// SHA-256 digest of the seed bytes.
    pub fn digest(&self) -> [u8; 32] {
        Sha256::digest(self.as_bytes()).into()
    }

    /// Lowercase hex SHA-256 checksum of the seed bytes.
    pub fn checksum(&self) -> String {
        hex::encode(self.digest())
    }

    /// Lowercase hex encoding of the seed bytes.
    pub fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl TryFrom<&[u8]> for Seed {
    type Error = GoldenSeedError;

    fn try_from(value: &[u8]) -> Result<Self> {
        Seed::from_bytes(value)
    }
}

impl From<[u8; SHORT_SEED_LEN]> for Seed {
    fn from(value: [u8; SHORT_SEED_LEN]) -> Self {
        Seed::Short(value)
    }
}

impl From<[u8; FULL_SEED_LEN]> for Seed {
    fn from(value: [u8; FULL_SEED_LEN]) -> Self {
        Seed::Full(value)
    }
}
