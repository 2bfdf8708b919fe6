//! Binary fusion tap
//!
//! Derives a family of integers from a single tap parameter `k`:
//!
//! ```text
//! seed         = "1" ‖ "2" ‖ … ‖ "k"   read as a decimal integer
//! tap_state    = (seed << 3) + k       (8-fold heartbeat plus phase offset)
//! zpe_overflow = 0                     if k < 10
//!              = tap_state ^ (seed * 8) otherwise
//! ```
//!
//! `zpe_overflow` isolates the bits where adding `k` carried into the
//! shifted seed. All values are computed in a fixed-width [`U256`]; any
//! `k` whose tap state needs more than 256 bits is rejected (`k <= 43`
//! fits).

use serde::Serialize;

use crate::error::{GoldenSeedError, Result};
use crate::primitives::U256;

/// Largest `k` whose tap state fits in 256 bits.
pub const MAX_TAP: u32 = 43;

/// Below this `k` no overflow is extracted.
const OVERFLOW_THRESHOLD: u32 = 10;

/// Result of one tap evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FusionTap {
    pub k: u32,
    pub seed: U256,
    pub tap_state: U256,
    pub zpe_overflow: U256,
}

impl FusionTap {
    /// Evaluates the tap for `k`.
    ///
    /// # Errors
    /// [`GoldenSeedError::FusionOverflow`] when `k` is zero or any
    /// intermediate value exceeds 256 bits.
    pub fn new(k: u32) -> Result<Self> {
        let overflow = || GoldenSeedError::FusionOverflow(k);

        if k == 0 || k > MAX_TAP {
            return Err(overflow());
        }

        let digits: String = (1..=k).map(|i| i.to_string()).collect();
        let seed = U256::from_dec_str(&digits).ok_or_else(overflow)?;

        let heartbeat = seed.checked_shl(3).ok_or_else(overflow)?;
        let tap_state = heartbeat
            .checked_add(U256::from(k as u64))
            .ok_or_else(overflow)?;

        let zpe_overflow = if k < OVERFLOW_THRESHOLD {
            U256::ZERO
        } else {
            tap_state ^ seed.checked_mul_small(8).ok_or_else(overflow)?
        };

        Ok(Self {
            k,
            seed,
            tap_state,
            zpe_overflow,
        })
    }

    /// Whether an overflow value is extracted for this `k`.
    pub fn has_overflow(&self) -> bool {
        self.k >= OVERFLOW_THRESHOLD
    }

    /// Serializable summary with decimal and binary renderings.
    pub fn report(&self) -> FusionReport {
        FusionReport {
            k: self.k,
            seed: self.seed.to_string(),
            seed_bits: self.seed.bit_len(),
            binary_seed: format!("{:#b}", self.seed),
            tap_state: format!("{:#b}", self.tap_state),
            tap_bits: self.tap_state.bit_len(),
            zpe_overflow: format!("{:#b}", self.zpe_overflow),
            zpe_overflow_decimal: self.zpe_overflow.to_string(),
            has_zpe: self.has_overflow(),
        }
    }
}

/// Printable form of a [`FusionTap`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FusionReport {
    pub k: u32,
    pub seed: String,
    pub seed_bits: u32,
    pub binary_seed: String,
    pub tap_state: String,
    pub tap_bits: u32,
    pub zpe_overflow: String,
    pub zpe_overflow_decimal: String,
    pub has_zpe: bool,
}

/// Evaluates every `k` in `range`, stopping at the first failure.
pub fn explore(range: std::ops::RangeInclusive<u32>) -> Result<Vec<FusionTap>> {
    range.map(FusionTap::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_k11_reference() {
        let tap = FusionTap::new(11).unwrap();

        assert_eq!(tap.seed.to_string(), "1234567891011");
        assert_eq!(tap.tap_state.to_string(), "9876543128099");
        assert_eq!(tap.zpe_overflow, U256::from(59u64));
    }

    #[test]
    fn test_small_k_has_no_overflow() {
        let tap = FusionTap::new(9).unwrap();

        assert_eq!(tap.seed.to_string(), "123456789");
        assert_eq!(tap.tap_state.to_string(), "987654321");
        assert_eq!(tap.zpe_overflow, U256::ZERO);
        assert!(!tap.has_overflow());
    }

    #[test]
    fn test_huge_k_is_rejected() {
        assert!(matches!(
            FusionTap::new(u32::MAX),
            Err(GoldenSeedError::FusionOverflow(u32::MAX))
        ));
        assert!(explore(40..=u32::MAX).is_err());
    }

    #[test]
    fn test_zero_is_rejected() {
        assert!(matches!(
            FusionTap::new(0),
            Err(GoldenSeedError::FusionOverflow(0))
        ));
    }
}
