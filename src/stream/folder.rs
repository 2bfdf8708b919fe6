//! Output folder
//!
//! Hardens a full 256-bit sifted buffer into a 128-bit chunk by XOR-ing
//! its two halves:
//!
//! ```text
//! out[i] = bits[i] ^ bits[i + 128]    for i in 0..128
//! ```
//!
//! Because bits are packed most-significant-first, this is a plain
//! byte-wise XOR of the first 16 packed bytes with the last 16.

use std::fmt;

use super::sifter::SiftedBits;

/// Size of one output chunk in bytes.
pub const CHUNK_LEN: usize = 16;

/// The atomic 16-byte unit of stream output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Chunk(pub [u8; CHUNK_LEN]);

impl Chunk {
    /// Chunk bytes.
    pub fn as_bytes(&self) -> &[u8; CHUNK_LEN] {
        &self.0
    }

    /// Lowercase hex encoding, 32 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// 128-character string of `0`/`1`, most significant bit first.
    pub fn to_binary(&self) -> String {
        self.0.iter().map(|byte| format!("{:08b}", byte)).collect()
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }

        Ok(())
    }
}

impl AsRef<[u8]> for Chunk {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Chunk> for [u8; CHUNK_LEN] {
    fn from(value: Chunk) -> Self {
        value.0
    }
}

impl From<[u8; CHUNK_LEN]> for Chunk {
    fn from(value: [u8; CHUNK_LEN]) -> Self {
        Chunk(value)
    }
}

/// Folds a full sifted buffer into one chunk.
///
/// # Panics
/// If `bits` is not exactly full. Callers only fold buffers the sifter has
/// filled to quota.
pub fn fold(bits: &SiftedBits) -> Chunk {
    assert!(
        bits.is_full(),
        "fold requires a full sifted buffer, got {} bits",
        bits.len()
    );

    let packed = bits.as_bytes();
    let (first, second) = packed.split_at(CHUNK_LEN);

    let mut out = [0u8; CHUNK_LEN];
    out.iter_mut()
        .zip(first.iter().zip(second.iter()))
        .for_each(|(o, (a, b))| *o = a ^ b);

    Chunk(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(first: u8, second: u8) -> SiftedBits {
        let mut raw = [first; 32];
        raw[16..].fill(second);
        SiftedBits::from_block(raw)
    }

    #[test]
    fn test_fold_zero_half_is_identity() {
        assert_eq!(fold(&block(0x00, 0xFF)), Chunk([0xFF; 16]));
        assert_eq!(fold(&block(0x3C, 0x00)), Chunk([0x3C; 16]));
    }

    #[test]
    fn test_fold_equal_halves_cancel() {
        assert_eq!(fold(&block(0xA7, 0xA7)), Chunk([0u8; 16]));
    }

    #[test]
    fn test_fold_bitwise_definition() {
        let mut raw = [0u8; 32];
        for (i, byte) in raw.iter_mut().enumerate() {
            *byte = (i as u8).wrapping_mul(37) ^ 0x5A;
        }
        let bits = SiftedBits::from_block(raw);
        let chunk = fold(&bits);

        for i in 0..128 {
            let expected = bits.get(i).unwrap() ^ bits.get(i + 128).unwrap();
            let actual = chunk.0[i / 8] & (0x80 >> (i % 8)) != 0;
            assert_eq!(actual, expected, "bit {}", i);
        }
    }

    #[test]
    #[should_panic(expected = "fold requires a full sifted buffer")]
    fn test_fold_rejects_partial_buffer() {
        let mut bits = SiftedBits::new();
        bits.push(true);
        fold(&bits);
    }

    #[test]
    fn test_chunk_formatting() {
        let chunk = Chunk([0x01; 16]);
        assert_eq!(chunk.to_hex(), "01".repeat(16));
        assert_eq!(format!("{}", chunk), chunk.to_hex());
        assert_eq!(chunk.to_binary(), "00000001".repeat(16));
    }
}
