//! # Linepress LZW Codec
//!
//! Adaptive-dictionary codec: the persisted table is only the seed (one
//! entry per distinct character, at the fixed rank width), and both sides
//! grow an ephemeral working dictionary in lockstep as multi-character
//! strings are discovered. Codes are emitted at a width that grows by one
//! bit whenever `2^width <= entry count`, so encoder and decoder agree on
//! every read without any width being persisted.
//!
//! The working dictionaries are derived per call and never written back;
//! the persisted seed table stays single-character.
//!
//! ## Example
//!
//! ```rust
//! use linepress_lzw::{compress, decompress};
//!
//! let (table, payload) = compress("to be or not to be").unwrap();
//! assert_eq!(decompress(&table, &payload).unwrap(), "to be or not to be");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod decoder;
mod dictionary;
mod encoder;

pub use decoder::LzwDecoder;
pub use encoder::LzwEncoder;

use linepress_core::error::{CodecError, Result};
use linepress_core::table::CodeTable;
use linepress_core::traits::Codec;

/// LZW adaptive-dictionary codec.
///
/// Holds only the immutable seed table; each encode/decode call derives
/// its own working dictionary, so one instance must not be shared across
/// concurrent calls.
#[derive(Debug, Default)]
pub struct LzwCodec {
    table: Option<CodeTable>,
}

impl LzwCodec {
    /// Create a codec with no seed table.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Codec for LzwCodec {
    fn build_table(&mut self, text: &str) -> Result<()> {
        // The LZW seed is the fixed-width rank table.
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
        LzwEncoder::new(self.table()?)?.encode(text)
    }

    fn from_bits(&self, bits: &str) -> Result<String> {
        LzwDecoder::new(self.table()?)?.decode(bits)
    }
}

/// Compress `text`, returning the serialized seed table and the framed
/// payload.
pub fn compress(text: &str) -> Result<(String, Vec<u8>)> {
    let mut codec = LzwCodec::new();
    codec.build_table(text)?;
    Ok((codec.serialize_table()?, codec.encode(text)?))
}

/// Decompress a framed payload using a serialized seed table.
pub fn decompress(table_text: &str, payload: &[u8]) -> Result<String> {
    let mut codec = LzwCodec::new();
    codec.deserialize_table(table_text)?;
    codec.decode(payload)
}
