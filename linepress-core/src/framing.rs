//! Byte framing for bit-string payloads.
//!
//! A frame stores an arbitrary-length bit string in whole bytes with exact
//! boundary accounting: byte 0 records the bit length of the trailing
//! partial byte (0 when the payload is byte-aligned), followed by one byte
//! per full 8-bit MSB-first group, followed by one final byte holding the
//! tail bits when a tail exists. The tail byte makes the frame
//! self-describing, so [`unpack`] reconstructs exactly the bits that went
//! in - no padding slack is ever introduced.
//!
//! # Example
//!
//! ```
//! use linepress_core::framing;
//!
//! let frame = framing::pack("101").unwrap();
//! assert_eq!(frame, vec![3, 0b101]);
//! assert_eq!(framing::unpack(&frame).unwrap(), "101");
//! ```

use crate::bitvec::BitVec;
use crate::error::{CodecError, Result};

/// Pack a bit string into a framed byte buffer.
///
/// Total output size is `1 + floor(n/8) + (1 if n % 8 > 0)` bytes for an
/// `n`-bit payload. Fails with [`CodecError::MalformedBitLiteral`] if the
/// input contains characters other than '0'/'1'.
pub fn pack(bits: &str) -> Result<Vec<u8>> {
    if let Some(bad) = bits.chars().find(|c| *c != '0' && *c != '1') {
        return Err(CodecError::malformed_bit(bad));
    }

    let n = bits.len();
    let tail = n % 8;
    let mut bytes = Vec::with_capacity(1 + n / 8 + usize::from(tail > 0));
    bytes.push(tail as u8);

    let body = &bits[..n - tail];
    for group in body.as_bytes().chunks(8) {
        // Validated above, so the group is pure ASCII '0'/'1'.
        let literal = std::str::from_utf8(group).expect("binary literal is ASCII");
        bytes.push(BitVec::from_bits(8, literal)?.to_u64() as u8);
    }

    if tail > 0 {
        bytes.push(BitVec::from_bits(tail, &bits[n - tail..])?.to_u64() as u8);
    }

    Ok(bytes)
}

/// Unpack a framed byte buffer back into its bit string.
///
/// Exactly inverts [`pack`] for any buffer it produced. Fails with
/// [`CodecError::CorruptFrame`] when the declared tail length is out of
/// range, the buffer is shorter than the frame implies, or the tail byte
/// holds a value wider than the declared tail.
pub fn unpack(bytes: &[u8]) -> Result<String> {
    let Some((&tail, body)) = bytes.split_first() else {
        return Err(CodecError::corrupt_frame("empty buffer"));
    };
    let tail = tail as usize;
    if tail > 7 {
        return Err(CodecError::corrupt_frame(format!(
            "tail length {tail} out of range 0-7"
        )));
    }
    if tail > 0 && body.is_empty() {
        return Err(CodecError::corrupt_frame(
            "tail declared but no tail byte present",
        ));
    }

    let (full, partial) = if tail > 0 {
        body.split_at(body.len() - 1)
    } else {
        (body, &[][..])
    };

    let mut bits = String::with_capacity(full.len() * 8 + tail);
    for &byte in full {
        bits.push_str(&BitVec::from_value(8, u64::from(byte)).to_bit_string());
    }

    if let [last] = partial {
        if usize::from(*last) >= 1 << tail {
            return Err(CodecError::corrupt_frame(format!(
                "tail byte {last:#04x} does not fit in {tail} bits"
            )));
        }
        bits.push_str(&BitVec::from_value(tail, u64::from(*last)).to_bit_string());
    }

    Ok(bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_aligned() {
        let frame = pack("1010101111001101").unwrap();
        assert_eq!(frame, vec![0, 0b10101011, 0b11001101]);
    }

    #[test]
    fn test_pack_with_tail() {
        let frame = pack("10101011101").unwrap();
        assert_eq!(frame, vec![3, 0b10101011, 0b101]);
    }

    #[test]
    fn test_tail_scenario() {
        // Tail byte 3, payload "101" round-trips exactly.
        let frame = pack("101").unwrap();
        assert_eq!(frame, vec![3, 0b101]);
        assert_eq!(unpack(&frame).unwrap(), "101");
    }

    #[test]
    fn test_empty_payload() {
        let frame = pack("").unwrap();
        assert_eq!(frame, vec![0]);
        assert_eq!(unpack(&frame).unwrap(), "");
    }

    #[test]
    fn test_invertibility() {
        let cases = [
            "0",
            "1",
            "01",
            "10110101",
            "101101011",
            "0000000000000001",
            "111111111111111",
            "010101010101010101010101010",
        ];
        for bits in cases {
            let frame = pack(bits).unwrap();
            assert_eq!(unpack(&frame).unwrap(), bits, "payload {bits:?}");
        }
    }

    #[test]
    fn test_pack_rejects_non_binary() {
        assert!(matches!(
            pack("10a1").unwrap_err(),
            CodecError::MalformedBitLiteral { found: 'a' }
        ));
    }

    #[test]
    fn test_unpack_empty_buffer() {
        assert!(matches!(
            unpack(&[]).unwrap_err(),
            CodecError::CorruptFrame { .. }
        ));
    }

    #[test]
    fn test_unpack_tail_out_of_range() {
        assert!(matches!(
            unpack(&[8, 0xFF]).unwrap_err(),
            CodecError::CorruptFrame { .. }
        ));
    }

    #[test]
    fn test_unpack_missing_tail_byte() {
        assert!(matches!(
            unpack(&[3]).unwrap_err(),
            CodecError::CorruptFrame { .. }
        ));
    }

    #[test]
    fn test_unpack_oversized_tail_byte() {
        // Tail of 2 bits cannot hold the value 4.
        assert!(matches!(
            unpack(&[2, 4]).unwrap_err(),
            CodecError::CorruptFrame { .. }
        ));
    }
}
