//! # Linepress Fixed-Width Codec
//!
//! The simplest of the three linepress strategies: every distinct symbol
//! receives a code of identical width, `ceil(log2(distinct))` bits (clamped
//! to at least 1), assigned by descending frequency rank. Decoding walks
//! the payload in non-overlapping `code_width`-bit chunks.
//!
//! ## Example
//!
//! ```rust
//! use linepress_fixed::{compress, decompress};
//!
//! let (table, payload) = compress("aaabbc").unwrap();
//! assert_eq!(decompress(&table, &payload).unwrap(), "aaabbc");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

use linepress_core::error::{CodecError, Result};
use linepress_core::table::CodeTable;
use linepress_core::traits::Codec;

/// Fixed-width table codec.
///
/// The table is built once per input and never mutated; decoding reads the
/// declared width from the table's `size:` header.
#[derive(Debug, Default)]
pub struct FixedWidthCodec {
    table: Option<CodeTable>,
}

impl FixedWidthCodec {
    /// Create a codec with no table.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Codec for FixedWidthCodec {
    fn build_table(&mut self, text: &str) -> Result<()> {
        self.table = Some(CodeTable::ranked(text));
        Ok(())
    }

    fn table(&self) -> Result<&CodeTable> {
        self.table.as_ref().ok_or(CodecError::TableNotBuilt)
    }

    fn load_table(&mut self, table: CodeTable) -> Result<()> {
        // A zero width would never advance the decode cursor.
        match table.code_width() {
            None | Some(0) => Err(CodecError::MissingCodeWidth),
            Some(_) => {
                self.table = Some(table);
                Ok(())
            }
        }
    }

    fn to_bits(&self, text: &str) -> Result<String> {
        self.table()?.to_bits(text)
    }

    fn from_bits(&self, bits: &str) -> Result<String> {
        let table = self.table()?;
        let width = table.code_width().ok_or(CodecError::MissingCodeWidth)?;
        let inverse = table.inverse_by_bits();

        let mut decoded = String::new();
        let mut pos = 0;
        while pos < bits.len() {
            let end = (pos + width).min(bits.len());
            // An undersized or unmatched chunk is end-of-stream slack, not
            // an error; it is dropped silently.
            if let Some(&symbol) = inverse.get(&bits[pos..end]) {
                decoded.push(symbol);
            }
            pos += width;
        }
        Ok(decoded)
    }
}

/// Compress `text`, returning the serialized table and the framed payload.
pub fn compress(text: &str) -> Result<(String, Vec<u8>)> {
    let mut codec = FixedWidthCodec::new();
    codec.build_table(text)?;
    Ok((codec.serialize_table()?, codec.encode(text)?))
}

/// Decompress a framed payload using a serialized table.
pub fn decompress(table_text: &str, payload: &[u8]) -> Result<String> {
    let mut codec = FixedWidthCodec::new();
    codec.deserialize_table(table_text)?;
    codec.decode(payload)
}
