use crate::primitives::u256::U256;

use std::ops::{BitAnd, BitXor};

impl BitXor<U256> for U256 {
    type Output = U256;

    fn bitxor(self, rhs: U256) -> Self::Output {
        let mut out = [0u8; 32];

        out.iter_mut()
            .zip(self.0.iter().zip(rhs.0.iter()))
            .for_each(|(o, (l, r))| *o = l ^ r);

        U256(out)
    }
}

impl BitAnd<U256> for U256 {
    type Output = U256;

    fn bitand(self, rhs: U256) -> Self::Output {
        let mut out = [0u8; 32];

        out.iter_mut()
            .zip(self.0.iter().zip(rhs.0.iter()))
            .for_each(|(o, (l, r))| *o = l & r);

        U256(out)
    }
}

/// Converts a `U256` into a 32-byte big-endian array.
impl From<U256> for [u8; 32] {
    fn from(value: U256) -> Self {
        value.0
    }
}

/// Interprets a 32-byte array as a big-endian 256-bit value.
impl From<[u8; 32]> for U256 {
    fn from(value: [u8; 32]) -> Self {
        U256(value)
    }
}

/// Places a `u64` in the least significant 64 bits.
impl From<u64> for U256 {
    fn from(value: u64) -> Self {
        let mut out = [0u8; 32];
        out[24..].copy_from_slice(&value.to_be_bytes());
        U256(out)
    }
}

/// Places a `u128` in the least significant 128 bits.
impl From<u128> for U256 {
    fn from(value: u128) -> Self {
        let mut out = [0u8; 32];
        out[16..].copy_from_slice(&value.to_be_bytes());
        U256(out)
    }
}

/// Attempts to convert a `U256` into a `u128`.
///
/// The conversion succeeds only if the upper 128 bits of the value are zero.
impl TryFrom<U256> for u128 {
    type Error = ();

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        if value.0[..16].iter().any(|&b| b != 0) {
            return Err(());
        }

        let mut buf = [0u8; 16];
        buf.copy_from_slice(&value.0[16..]);

        Ok(u128::from_be_bytes(buf))
    }
}

/// Borrows the underlying 32-byte big-endian array.
impl AsRef<[u8; 32]> for U256 {
    fn as_ref(&self) -> &[u8; 32] {
        &self.0
    }
}
