//! Error types for the GoldenSeed library.
//!
//! Every error is raised at construction or lookup time. Once a
//! [`StreamGenerator`](crate::StreamGenerator) exists, producing output
//! cannot fail.

use thiserror::Error;

/// Errors produced by the GoldenSeed library.
#[derive(Debug, Error)]
pub enum GoldenSeedError {
    /// Seed is not exactly 16 or 32 bytes long.
    #[error("seed must be 16 or 32 bytes, got {0}")]
    InvalidSeedLength(usize),

    /// No registry entry exists under the requested name.
    #[error("unknown seed name `{0}`")]
    UnknownSeed(String),

    /// Seed hex string could not be decoded.
    #[error("invalid seed hex `{input}`: {source}")]
    InvalidSeedHex {
        input: String,
        #[source]
        source: hex::FromHexError,
    },

    /// Seed bytes do not hash to the checksum recorded for them.
    #[error("seed checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    /// The 32-bit GQS-1 counter cannot represent the requested vector.
    #[error("GQS-1 counter exhausted after {0} vectors")]
    CounterExhausted(u64),

    /// An intermediate binary fusion value does not fit in 256 bits.
    #[error("binary fusion tap for k = {0} exceeds 256 bits")]
    FusionOverflow(u32),
}

impl GoldenSeedError {
    /// Returns `true` for errors caused by seed configuration rather than
    /// length or arithmetic limits.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            GoldenSeedError::UnknownSeed(_)
                | GoldenSeedError::InvalidSeedHex { .. }
                | GoldenSeedError::ChecksumMismatch { .. }
        )
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GoldenSeedError>;
