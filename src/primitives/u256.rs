//! 256-bit unsigned integer primitive
//!
//! This module defines a fixed-size 256-bit unsigned integer type (`U256`).
//!
//! It is designed as a **simple, explicit value type**, not as a full
//! big-integer arithmetic library. Arithmetic is checked: every operation
//! that could exceed 256 bits returns `None` instead of wrapping, so
//! callers decide what an overflow means for them.
//!
//! The internal representation is big-endian, which makes the derived
//! ordering numeric and keeps hexadecimal formatting trivial.

use std::fmt::{self, Binary, Display, Formatter, LowerHex};

/// Fixed-size 256-bit unsigned integer.
///
/// The value is stored as 32 bytes in **big-endian** order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct U256(pub(crate) [u8; 32]);

impl U256 {
    /// The value zero.
    pub const ZERO: Self = Self([0u8; 32]);

    /// The value one.
    pub const ONE: Self = Self::one_be();

    /// The maximum representable value (2²⁵⁶ − 1).
    pub const MAX: Self = Self([255u8; 32]);

    /// Number of bits in the type.
    pub const BITS: u32 = 256;

    /// Returns the value one encoded in big-endian form.
    pub const fn one_be() -> Self {
        let mut out = [0u8; 32];
        out[31] = 1;
        U256(out)
    }

    /// Counts the number of leading zero bits in the integer.
    ///
    /// # Returns
    /// The number of leading zero bits in the range `0..=256`.
    pub fn leading_zeros(&self) -> u32 {
        let mut count = 0u32;

        for &byte in self.0.iter() {
            if byte == 0 {
                count += 8;
            } else {
                count += byte.leading_zeros();
                return count;
            }
        }

        count
    }

    /// Minimum number of bits needed to represent the value (0 for zero).
    pub fn bit_len(&self) -> u32 {
        Self::BITS - self.leading_zeros()
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }

    /// Checked addition. Returns `None` on overflow.
    pub fn checked_add(self, rhs: U256) -> Option<U256> {
        let mut out = [0u8; 32];
        let mut carry = 0u16;

        for ((&a, &b), o) in self.0.iter().zip(rhs.0.iter()).zip(out.iter_mut()).rev() {
            let sum = a as u16 + b as u16 + carry;
            *o = (sum & 0xFF) as u8;
            carry = sum >> 8;
        }

        if carry != 0 {
            return None;
        }

        Some(U256(out))
    }

    /// Checked multiplication by a small factor. Returns `None` on overflow.
    pub fn checked_mul_small(self, factor: u32) -> Option<U256> {
        let mut out = [0u8; 32];
        let mut carry = 0u64;

        for (&a, o) in self.0.iter().zip(out.iter_mut()).rev() {
            let product = a as u64 * factor as u64 + carry;
            *o = (product & 0xFF) as u8;
            carry = product >> 8;
        }

        if carry != 0 {
            return None;
        }

        Some(U256(out))
    }

    /// Checked left shift. Returns `None` if any set bit would be shifted
    /// out of the 256-bit range.
    pub fn checked_shl(self, shift: u32) -> Option<U256> {
        if self.is_zero() {
            return Some(self);
        }
        if shift > self.leading_zeros() {
            return None;
        }
        if shift == 0 {
            return Some(self);
        }

        let byte_shift = (shift / 8) as usize;
        let bit_shift = shift % 8;

        let mut tmp = [0u8; 32];
        tmp[..(32 - byte_shift)].copy_from_slice(&self.0[byte_shift..]);

        if bit_shift == 0 {
            return Some(U256(tmp));
        }

        let mut out = [0u8; 32];
        let mut carry = 0u8;

        for i in (0..32).rev() {
            let val = tmp[i];
            out[i] = (val << bit_shift) | carry;
            carry = val >> (8 - bit_shift);
        }

        Some(U256(out))
    }

    /// Divides by a small non-zero divisor, returning `(quotient, remainder)`.
    ///
    /// # Panics
    /// If `divisor` is zero.
    pub fn div_rem_small(self, divisor: u32) -> (U256, u32) {
        assert!(divisor != 0, "division by zero");

        let mut quotient = [0u8; 32];
        let mut rem = 0u64;

        for (&byte, q) in self.0.iter().zip(quotient.iter_mut()) {
            let cur = (rem << 8) | byte as u64;
            *q = (cur / divisor as u64) as u8;
            rem = cur % divisor as u64;
        }

        (U256(quotient), rem as u32)
    }

    /// Parses a non-empty string of ASCII decimal digits.
    ///
    /// Returns `None` for empty input, non-digit characters, or values that
    /// do not fit in 256 bits.
    pub fn from_dec_str(digits: &str) -> Option<U256> {
        if digits.is_empty() {
            return None;
        }

        digits.bytes().try_fold(U256::ZERO, |acc, c| {
            if !c.is_ascii_digit() {
                return None;
            }
            acc.checked_mul_small(10)?
                .checked_add(U256::from((c - b'0') as u64))
        })
    }
}

impl Display for U256 {
    /// Formats the value in decimal.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.pad_integral(true, "", "0");
        }

        let mut digits = Vec::with_capacity(78);
        let mut value = *self;

        while !value.is_zero() {
            let (quotient, rem) = value.div_rem_small(10);
            digits.push(b'0' + rem as u8);
            value = quotient;
        }
        digits.reverse();

        // Only ASCII digits were pushed.
        let text = String::from_utf8_lossy(&digits);
        f.pad_integral(true, "", &text)
    }
}

impl LowerHex for U256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let full = hex::encode(self.0);
        let trimmed = full.trim_start_matches('0');
        let text = if trimmed.is_empty() { "0" } else { trimmed };

        f.pad_integral(true, "0x", text)
    }
}

impl Binary for U256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let bits: String = self.0.iter().map(|byte| format!("{:08b}", byte)).collect();
        let trimmed = bits.trim_start_matches('0');
        let text = if trimmed.is_empty() { "0" } else { trimmed };

        f.pad_integral(true, "0b", text)
    }
}
