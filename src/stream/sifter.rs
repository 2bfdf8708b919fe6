//! Basis sifter
//!
//! Deterministic bit selection over ratchet output. Each byte is inspected
//! on its own:
//!
//! ```text
//!   bit:   7 6 5 4 3 2 1 0
//!                      ^ ^ ^
//!                      | | └── emitted when accepted
//!                      └─┴──── compared; equal => accept
//! ```
//!
//! Roughly half of all bytes are accepted, so one 32-byte ratchet block
//! yields about 16 bits and a 256-bit quota needs about 16 advances.

use super::ratchet::{RatchetState, STATE_LEN};

/// Bits required before a block can be folded.
pub const QUOTA_BITS: usize = 256;

const QUOTA_BYTES: usize = QUOTA_BITS / 8;

/// Ordered bit buffer with a fixed 256-bit capacity.
///
/// Bits are packed most-significant-first in the order they were appended:
/// bit `i` lives in byte `i / 8` at position `7 - i % 8`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiftedBits {
    packed: [u8; QUOTA_BYTES],
    len: usize,
}

impl SiftedBits {
    /// Empty buffer.
    pub const fn new() -> Self {
        Self {
            packed: [0u8; QUOTA_BYTES],
            len: 0,
        }
    }

    /// Full buffer holding the 256 bits of `block`, most significant first.
    pub const fn from_block(block: [u8; QUOTA_BYTES]) -> Self {
        Self {
            packed: block,
            len: QUOTA_BITS,
        }
    }

    /// Appends one bit. Returns `false` and leaves the buffer untouched when
    /// it is already full.
    pub fn push(&mut self, bit: bool) -> bool {
        if self.is_full() {
            return false;
        }

        if bit {
            self.packed[self.len / 8] |= 0x80 >> (self.len % 8);
        }
        self.len += 1;

        true
    }

    /// Bit at position `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }

        Some(self.packed[index / 8] & (0x80 >> (index % 8)) != 0)
    }

    /// Number of bits held.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// `true` once the quota is reached.
    pub fn is_full(&self) -> bool {
        self.len == QUOTA_BITS
    }

    /// Bits still missing from the quota.
    pub fn remaining(&self) -> usize {
        QUOTA_BITS - self.len
    }

    /// Packed bits. Unfilled positions read as zero.
    pub fn as_bytes(&self) -> &[u8; QUOTA_BYTES] {
        &self.packed
    }

    /// Empties the buffer.
    pub fn clear(&mut self) {
        self.packed = [0u8; QUOTA_BYTES];
        self.len = 0;
    }
}

impl Default for SiftedBits {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns `true` when bit 1 and bit 2 of `byte` are equal.
#[inline(always)]
pub fn basis_match(byte: u8) -> bool {
    ((byte >> 1) & 1) == ((byte >> 2) & 1)
}

/// Sifts one ratchet block into `buf`.
///
/// Returns the number of bits accepted. Once `buf` is full the rest of the
/// block is discarded; nothing carries over to the next quota.
pub fn sift_block(block: &[u8; STATE_LEN], buf: &mut SiftedBits) -> usize {
    let mut accepted = 0;

    for &byte in block.iter() {
        if buf.is_full() {
            break;
        }

        if basis_match(byte) {
            buf.push(byte & 1 == 1);
            accepted += 1;
        }
    }

    accepted
}

/// Drives the ratchet until a sifted buffer reaches its quota.
#[derive(Clone, Copy, Debug, Default)]
pub struct BasisSifter;

impl BasisSifter {
    /// Advances `ratchet` and sifts its output until `buf` is full.
    ///
    /// Returns the number of ratchet advances consumed. No upper bound is
    /// enforced on that number.
    pub fn fill(&self, ratchet: &mut RatchetState, buf: &mut SiftedBits) -> u64 {
        let mut advances = 0u64;

        while !buf.is_full() {
            let block = ratchet.step();
            advances += 1;
            sift_block(&block, buf);
        }

        advances
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Low bits 00x and 11x are accepted, 01x and 10x are rejected.
    const ACCEPT_ZERO: u8 = 0b0000_0000;
    const ACCEPT_ONE: u8 = 0b0000_0111;
    const REJECT_A: u8 = 0b0000_0010;
    const REJECT_B: u8 = 0b0000_0101;

    #[test]
    fn test_basis_match_truth_table() {
        let accepted: Vec<u8> = (0u8..8).filter(|&b| basis_match(b)).collect();
        assert_eq!(accepted, vec![0, 1, 6, 7]);

        // Only the low three bits matter.
        assert!(basis_match(0b1111_1000));
        assert!(!basis_match(0b1111_1010));
    }

    #[test]
    fn test_sift_counts_exactly_matching_bytes() {
        for k in [0usize, 1, 5, 17, 32] {
            let mut block = [REJECT_A; 32];
            for byte in block.iter_mut().take(k) {
                *byte = ACCEPT_ONE;
            }

            let mut buf = SiftedBits::new();
            assert_eq!(sift_block(&block, &mut buf), k);
            assert_eq!(buf.len(), k);
        }
    }

    #[test]
    fn test_sift_extracts_bit_zero_in_order() {
        let mut block = [REJECT_B; 32];
        block[0] = ACCEPT_ONE;
        block[3] = ACCEPT_ZERO;
        block[4] = 0b1111_1001;
        block[31] = 0b0101_0110;

        let mut buf = SiftedBits::new();
        sift_block(&block, &mut buf);

        assert_eq!(buf.len(), 4);
        assert_eq!(buf.get(0), Some(true));
        assert_eq!(buf.get(1), Some(false));
        assert_eq!(buf.get(2), Some(true));
        assert_eq!(buf.get(3), Some(false));
        assert_eq!(buf.get(4), None);
        assert_eq!(buf.as_bytes()[0], 0b1010_0000);
    }

    #[test]
    fn test_sift_stops_at_quota() {
        let mut buf = SiftedBits::new();
        for _ in 0..250 {
            buf.push(false);
        }

        let block = [ACCEPT_ONE; 32];
        assert_eq!(sift_block(&block, &mut buf), 6);
        assert!(buf.is_full());
        assert!(!buf.push(true));
    }

    #[test]
    fn test_from_block_is_full() {
        let buf = SiftedBits::from_block([0xA5; 32]);
        assert!(buf.is_full());
        assert_eq!(buf.get(0), Some(true));
        assert_eq!(buf.get(1), Some(false));
    }

    #[test]
    fn test_clear_resets() {
        let mut buf = SiftedBits::from_block([0xFF; 32]);
        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.as_bytes(), &[0u8; 32]);
    }
}
