//! # Linepress Huffman Codec
//!
//! Prefix-free variable-width codec: frequent symbols receive short codes,
//! built by greedy two-smallest merging of the frequency list. Because no
//! code is a prefix of another, decoding needs no fixed stride - the
//! decoder grows a candidate substring one bit at a time and the first
//! match is always the unique correct one.
//!
//! The persisted table omits the `size:` header; every entry's width is
//! its own bit-string length.
//!
//! ## Example
//!
//! ```rust
//! use linepress_huffman::{compress, decompress};
//!
//! let (table, payload) = compress("abracadabra").unwrap();
//! assert_eq!(decompress(&table, &payload).unwrap(), "abracadabra");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod tree;

use linepress_core::error::{CodecError, Result};
use linepress_core::freq;
use linepress_core::table::CodeTable;
use linepress_core::traits::Codec;

/// Huffman prefix-free codec.
#[derive(Debug, Default)]
pub struct HuffmanCodec {
    table: Option<CodeTable>,
}

impl HuffmanCodec {
    /// Create a codec with no table.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Codec for HuffmanCodec {
    fn build_table(&mut self, text: &str) -> Result<()> {
        self.table = Some(tree::assign_codes(&freq::frequency_ranks(text)));
        Ok(())
    }

    fn table(&self) -> Result<&CodeTable> {
        self.table.as_ref().ok_or(CodecError::TableNotBuilt)
    }

    fn load_table(&mut self, table: CodeTable) -> Result<()> {
        // Variable-width entries carry their own widths; a declared size
        // is accepted but unused.
        self.table = Some(table);
        Ok(())
    }

    fn to_bits(&self, text: &str) -> Result<String> {
        self.table()?.to_bits(text)
    }

    fn from_bits(&self, bits: &str) -> Result<String> {
        let inverse = self.table()?.inverse_by_bits();

        // Incremental prefix matching: grow the candidate from the read
        // position one bit at a time; prefix-freedom makes the first match
        // unique. An unmatched leftover is framing slack and ends the scan.
        let mut decoded = String::new();
        let mut start = 0;
        let mut end = 1;
        while start < bits.len() && end <= bits.len() {
            if let Some(&symbol) = inverse.get(&bits[start..end]) {
                decoded.push(symbol);
                start = end;
            }
            end += 1;
        }
        Ok(decoded)
    }
}

/// Compress `text`, returning the serialized table and the framed payload.
pub fn compress(text: &str) -> Result<(String, Vec<u8>)> {
    let mut codec = HuffmanCodec::new();
    codec.build_table(text)?;
    Ok((codec.serialize_table()?, codec.encode(text)?))
}

/// Decompress a framed payload using a serialized table.
pub fn decompress(table_text: &str, payload: &[u8]) -> Result<String> {
    let mut codec = HuffmanCodec::new();
    codec.deserialize_table(table_text)?;
    codec.decode(payload)
}
