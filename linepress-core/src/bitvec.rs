//! Fixed-width bit vectors for code construction and framing.
//!
//! `BitVec` is the value type every codec builds its codes from: an ordered
//! bit sequence of a declared logical width, convertible to and from an
//! MSB-first bit literal (the string form conventionally written) and an
//! unsigned integer.
//!
//! # Width semantics
//!
//! Rendering always yields at least `size` characters, zero-padded on the
//! most-significant side when the source representation is shorter. When the
//! source is *longer* than `size`, the extra high-order bits are retained
//! rather than truncated; callers are responsible for choosing a sufficient
//! width.
//!
//! # Example
//!
//! ```
//! use linepress_core::bitvec::BitVec;
//!
//! let code = BitVec::from_value(5, 6);
//! assert_eq!(code.to_bit_string(), "00110");
//! assert_eq!(code.to_u64(), 6);
//!
//! let parsed = BitVec::from_bits(8, "101").unwrap();
//! assert_eq!(parsed.to_bit_string(), "00000101");
//! ```

use crate::error::{CodecError, Result};
use std::fmt;

/// An immutable bit sequence of fixed logical width, MSB first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitVec {
    /// Bits in MSB-first order.
    bits: Vec<bool>,
}

impl BitVec {
    /// Parse an MSB-first bit literal, zero-padding up to `size` bits.
    ///
    /// Fails with [`CodecError::MalformedBitLiteral`] if the literal
    /// contains any character other than '0' or '1'. A literal longer than
    /// `size` keeps all of its bits.
    pub fn from_bits(size: usize, literal: &str) -> Result<Self> {
        let mut bits = Vec::with_capacity(size.max(literal.len()));
        for c in literal.chars() {
            match c {
                '0' => bits.push(false),
                '1' => bits.push(true),
                other => return Err(CodecError::malformed_bit(other)),
            }
        }

        if bits.len() < size {
            let mut padded = vec![false; size - bits.len()];
            padded.extend_from_slice(&bits);
            bits = padded;
        }

        Ok(Self { bits })
    }

    /// Build from an unsigned value, zero-padding up to `size` bits.
    ///
    /// The value zero occupies one significant bit, matching its written
    /// binary form "0". A value wider than `size` keeps all of its
    /// significant bits.
    pub fn from_value(size: usize, value: u64) -> Self {
        let significant = if value == 0 {
            1
        } else {
            (u64::BITS - value.leading_zeros()) as usize
        };
        let width = size.max(significant);

        let mut bits = Vec::with_capacity(width);
        for i in (0..width).rev() {
            bits.push(i < 64 && (value >> i) & 1 == 1);
        }

        Self { bits }
    }

    /// The logical width in bits.
    pub fn width(&self) -> usize {
        self.bits.len()
    }

    /// Render as an MSB-first bit literal of exactly `width()` characters.
    pub fn to_bit_string(&self) -> String {
        self.bits.iter().map(|&b| if b { '1' } else { '0' }).collect()
    }

    /// The unsigned value the bit string denotes (radix 2).
    ///
    /// Widths above 64 bits fold through the low 64 bits; every code this
    /// crate produces for numeric interpretation (frame bytes, LZW codes)
    /// is far narrower.
    pub fn to_u64(&self) -> u64 {
        self.bits
            .iter()
            .fold(0u64, |acc, &b| (acc << 1) | u64::from(b))
    }
}

impl fmt::Display for BitVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_bit_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_value_pads_to_size() {
        let v = BitVec::from_value(8, 5);
        assert_eq!(v.to_bit_string(), "00000101");
        assert_eq!(v.width(), 8);
        assert_eq!(v.to_u64(), 5);
    }

    #[test]
    fn test_from_value_zero() {
        assert_eq!(BitVec::from_value(1, 0).to_bit_string(), "0");
        assert_eq!(BitVec::from_value(4, 0).to_bit_string(), "0000");
    }

    #[test]
    fn test_from_value_wider_than_size() {
        // Extra high-order bits are retained, not truncated.
        let v = BitVec::from_value(2, 13);
        assert_eq!(v.to_bit_string(), "1101");
        assert_eq!(v.width(), 4);
    }

    #[test]
    fn test_from_bits_preserves_leading_zeros() {
        let v = BitVec::from_bits(2, "0001").unwrap();
        assert_eq!(v.to_bit_string(), "0001");
        assert_eq!(v.to_u64(), 1);
    }

    #[test]
    fn test_from_bits_rejects_non_binary() {
        let err = BitVec::from_bits(4, "10x1").unwrap_err();
        assert!(matches!(
            err,
            CodecError::MalformedBitLiteral { found: 'x' }
        ));
    }

    #[test]
    fn test_width_invariant() {
        // For any size >= bit length of the value, rendering has exactly
        // `size` characters and the value round-trips.
        for value in [0u64, 1, 2, 7, 8, 255, 256, 12345] {
            let needed = if value == 0 {
                1
            } else {
                (u64::BITS - value.leading_zeros()) as usize
            };
            for size in needed..needed + 10 {
                let v = BitVec::from_value(size, value);
                assert_eq!(v.to_bit_string().len(), size);
                assert_eq!(v.to_u64(), value);
            }
        }
    }

    #[test]
    fn test_literal_roundtrip() {
        let v = BitVec::from_bits(6, "101101").unwrap();
        assert_eq!(v.to_bit_string(), "101101");
        assert_eq!(v.to_u64(), 0b101101);
    }

    #[test]
    fn test_empty_literal() {
        let v = BitVec::from_bits(0, "").unwrap();
        assert_eq!(v.width(), 0);
        assert_eq!(v.to_bit_string(), "");
    }
}
