//! The `Codec` capability trait.
//!
//! Each compression strategy (fixed-width, Huffman, LZW) implements one
//! interface: table construction, bit-string production and consumption,
//! and table serialization. Byte framing and the persisted-table text
//! format are shared, so `encode`/`decode` and the serialization pair are
//! provided as default methods.
//!
//! A codec instance owns its table exclusively; to process independent
//! texts concurrently, use one instance per text.

use crate::error::Result;
use crate::framing;
use crate::table::CodeTable;

/// A text compression strategy over single-character symbols.
pub trait Codec {
    /// Build this codec's table from the input text, replacing any
    /// previously built or loaded table.
    fn build_table(&mut self, text: &str) -> Result<()>;

    /// The current table, or [`CodecError::TableNotBuilt`] if none.
    ///
    /// [`CodecError::TableNotBuilt`]: crate::error::CodecError::TableNotBuilt
    fn table(&self) -> Result<&CodeTable>;

    /// Adopt a previously deserialized table, validating that it carries
    /// what this strategy needs (e.g. a declared width for fixed-stride
    /// decoding).
    fn load_table(&mut self, table: CodeTable) -> Result<()>;

    /// Produce the payload bit string for `text` using the current table.
    fn to_bits(&self, text: &str) -> Result<String>;

    /// Consume a payload bit string back into text using the current table.
    fn from_bits(&self, bits: &str) -> Result<String>;

    /// Encode `text` into a framed byte buffer.
    fn encode(&self, text: &str) -> Result<Vec<u8>> {
        framing::pack(&self.to_bits(text)?)
    }

    /// Decode a framed byte buffer back into text.
    fn decode(&self, bytes: &[u8]) -> Result<String> {
        self.from_bits(&framing::unpack(bytes)?)
    }

    /// Serialize the current table to the persisted text format.
    fn serialize_table(&self) -> Result<String> {
        Ok(self.table()?.to_text())
    }

    /// Load a table from the persisted text format.
    fn deserialize_table(&mut self, text: &str) -> Result<()> {
        self.load_table(CodeTable::from_text(text)?)
    }
}
