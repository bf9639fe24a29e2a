//! Code tables: bidirectional symbol/code mappings with text persistence.
//!
//! A [`CodeTable`] pairs an optional declared code width with a mapping from
//! symbols to [`BitVec`] codes. The width is declared for the fixed-width
//! strategy and for LZW seed tables (where it is the starting width before
//! growth); Huffman tables leave it unset because each entry's width is
//! self-describing.
//!
//! # Persisted text format
//!
//! One line per entry, `symbol:bitstring`, preceded by a `size:<n>` header
//! line exactly when a code width is declared:
//!
//! ```text
//! size:2
//! a:00
//! b:01
//! c:10
//! ```

use crate::bitvec::BitVec;
use crate::error::{CodecError, Result};
use crate::freq;
use std::collections::{BTreeMap, HashMap};

/// Bits required to address `distinct` values, clamped to at least 1.
///
/// The clamp resolves the single-symbol boundary case: `ceil(log2(1))` is
/// zero, and zero-width codes cannot be decoded.
pub fn code_width_for(distinct: usize) -> usize {
    if distinct <= 1 {
        1
    } else {
        (usize::BITS - (distinct - 1).leading_zeros()) as usize
    }
}

/// A symbol-to-code mapping with an optional declared code width.
///
/// Immutable after construction; LZW's growing dictionaries are derived
/// working copies, never written back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    /// Declared code width. `Some` for fixed-width and LZW seed tables,
    /// `None` for variable-width (Huffman) tables.
    code_width: Option<usize>,
    /// Symbol to code. Ordered so persistence output is deterministic.
    entries: BTreeMap<char, BitVec>,
}

impl CodeTable {
    /// Create an empty table with the given declared width.
    pub fn new(code_width: Option<usize>) -> Self {
        Self {
            code_width,
            entries: BTreeMap::new(),
        }
    }

    /// Build the fixed-width rank table for `text`.
    ///
    /// Each distinct symbol receives the code of its rank index (0-based,
    /// after the descending frequency sort) at width
    /// `code_width_for(distinct)`. This is also the LZW seed construction.
    pub fn ranked(text: &str) -> Self {
        let ranks = freq::frequency_ranks(text);
        let width = code_width_for(ranks.len());

        let mut table = Self::new(Some(width));
        for (index, entry) in ranks.iter().enumerate() {
            table
                .entries
                .insert(entry.symbol, BitVec::from_value(width, index as u64));
        }
        table
    }

    /// The declared code width, if any.
    pub fn code_width(&self) -> Option<usize> {
        self.code_width
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the code for a symbol.
    pub fn code(&self, symbol: char) -> Option<&BitVec> {
        self.entries.get(&symbol)
    }

    /// Insert an entry. Intended for table constructors.
    pub fn insert(&mut self, symbol: char, code: BitVec) {
        self.entries.insert(symbol, code);
    }

    /// Iterate entries in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &BitVec)> {
        self.entries.iter().map(|(&sym, code)| (sym, code))
    }

    /// Inverse view keyed by bit string, for prefix and chunk decoding.
    pub fn inverse_by_bits(&self) -> HashMap<String, char> {
        self.entries
            .iter()
            .map(|(&sym, code)| (code.to_bit_string(), sym))
            .collect()
    }

    /// Inverse view keyed by numeric code value, for LZW decoding.
    pub fn inverse_by_value(&self) -> HashMap<u64, String> {
        self.entries
            .iter()
            .map(|(&sym, code)| (code.to_u64(), sym.to_string()))
            .collect()
    }

    /// Produce the concatenated code bit string for `text`.
    ///
    /// Fails with [`CodecError::UnknownSymbol`] on a character absent from
    /// the table (text exogenous to the table it was built from).
    pub fn to_bits(&self, text: &str) -> Result<String> {
        let mut bits = String::new();
        for c in text.chars() {
            let code = self
                .code(c)
                .ok_or_else(|| CodecError::unknown_symbol(c))?;
            bits.push_str(&code.to_bit_string());
        }
        Ok(bits)
    }

    /// Serialize to the persisted text format.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        if let Some(width) = self.code_width {
            out.push_str(&format!("size:{width}\n"));
        }
        for (sym, code) in &self.entries {
            out.push_str(&format!("{sym}:{}\n", code.to_bit_string()));
        }
        out
    }

    /// Parse the persisted text format.
    ///
    /// Entries shorter than a declared `size:` are zero-padded on the MSB
    /// side, matching [`BitVec::from_bits`]. Fails with
    /// [`CodecError::CorruptCodeTable`] on a missing separator, non-numeric
    /// size, duplicate symbol, empty code, or a declared size that is zero
    /// or too narrow for the number of entries.
    pub fn from_text(text: &str) -> Result<Self> {
        let mut code_width: Option<usize> = None;
        let mut size_line = 0;
        let mut entries: BTreeMap<char, BitVec> = BTreeMap::new();

        for (index, line) in text.lines().enumerate() {
            let lineno = index + 1;
            if line.is_empty() {
                continue;
            }

            let sep = line
                .find(':')
                .ok_or_else(|| CodecError::corrupt_table(lineno, "missing ':' separator"))?;
            let (key, value) = (&line[..sep], &line[sep + 1..]);

            // A one-character key is a symbol entry; the empty key means the
            // symbol itself is ':' and the real separator follows it.
            let symbol = match key.chars().count() {
                1 => key.chars().next().expect("one char"),
                0 if value.starts_with(':') => ':',
                _ if key == "size" => {
                    let width = value.parse::<usize>().map_err(|_| {
                        CodecError::corrupt_table(lineno, format!("non-numeric size {value:?}"))
                    })?;
                    code_width = Some(width);
                    size_line = lineno;
                    continue;
                }
                _ => {
                    return Err(CodecError::corrupt_table(
                        lineno,
                        format!("unrecognized key {key:?}"),
                    ));
                }
            };
            let literal = if symbol == ':' && key.is_empty() {
                &value[1..]
            } else {
                value
            };

            if literal.is_empty() {
                return Err(CodecError::corrupt_table(lineno, "empty code"));
            }
            let code = BitVec::from_bits(code_width.unwrap_or(0), literal)
                .map_err(|_| CodecError::corrupt_table(lineno, "malformed code bits"))?;

            if entries.insert(symbol, code).is_some() {
                return Err(CodecError::corrupt_table(
                    lineno,
                    format!("duplicate symbol {symbol:?}"),
                ));
            }
        }

        // A declared width must be decodable: zero-width codes never advance
        // a decoder, and a width too narrow for the entry count cannot
        // address every code the encoder will emit.
        if let Some(width) = code_width {
            if width == 0 {
                return Err(CodecError::corrupt_table(size_line, "declared size 0"));
            }
            if width < code_width_for(entries.len()) {
                return Err(CodecError::corrupt_table(
                    size_line,
                    format!(
                        "declared size {width} cannot address {} entries",
                        entries.len()
                    ),
                ));
            }
        }

        Ok(Self {
            code_width,
            entries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_width_for() {
        assert_eq!(code_width_for(0), 1);
        assert_eq!(code_width_for(1), 1);
        assert_eq!(code_width_for(2), 1);
        assert_eq!(code_width_for(3), 2);
        assert_eq!(code_width_for(4), 2);
        assert_eq!(code_width_for(5), 3);
        assert_eq!(code_width_for(256), 8);
        assert_eq!(code_width_for(257), 9);
    }

    #[test]
    fn test_ranked_scenario() {
        // "aaabbc": a -> rank 0, b -> rank 1, c -> rank 2 at width 2.
        let table = CodeTable::ranked("aaabbc");
        assert_eq!(table.code_width(), Some(2));
        assert_eq!(table.code('a').unwrap().to_bit_string(), "00");
        assert_eq!(table.code('b').unwrap().to_bit_string(), "01");
        assert_eq!(table.code('c').unwrap().to_bit_string(), "10");
    }

    #[test]
    fn test_ranked_single_symbol_clamps_width() {
        let table = CodeTable::ranked("aaaa");
        assert_eq!(table.code_width(), Some(1));
        assert_eq!(table.code('a').unwrap().to_bit_string(), "0");
    }

    #[test]
    fn test_to_bits_scenario() {
        let table = CodeTable::ranked("aaabbc");
        assert_eq!(table.to_bits("aaabbc").unwrap(), "000000010110");
    }

    #[test]
    fn test_to_bits_unknown_symbol() {
        let table = CodeTable::ranked("aaabbc");
        assert!(matches!(
            table.to_bits("abd").unwrap_err(),
            CodecError::UnknownSymbol { symbol: 'd' }
        ));
    }

    #[test]
    fn test_persistence_roundtrip_with_size() {
        let table = CodeTable::ranked("aaabbc");
        let text = table.to_text();
        assert!(text.starts_with("size:2\n"));

        let loaded = CodeTable::from_text(&text).unwrap();
        assert_eq!(loaded, table);
    }

    #[test]
    fn test_persistence_without_size() {
        let mut table = CodeTable::new(None);
        table.insert('a', BitVec::from_bits(1, "1").unwrap());
        table.insert('b', BitVec::from_bits(2, "01").unwrap());

        let text = table.to_text();
        assert!(!text.contains("size:"));

        let loaded = CodeTable::from_text(&text).unwrap();
        assert_eq!(loaded.code_width(), None);
        assert_eq!(loaded.code('b').unwrap().to_bit_string(), "01");
    }

    #[test]
    fn test_parse_colon_symbol() {
        let loaded = CodeTable::from_text("size:2\n::10\n").unwrap();
        assert_eq!(loaded.code(':').unwrap().to_bit_string(), "10");
    }

    #[test]
    fn test_parse_missing_separator() {
        assert!(matches!(
            CodeTable::from_text("ab\n").unwrap_err(),
            CodecError::CorruptCodeTable { line: 1, .. }
        ));
    }

    #[test]
    fn test_parse_non_numeric_size() {
        assert!(matches!(
            CodeTable::from_text("size:two\n").unwrap_err(),
            CodecError::CorruptCodeTable { .. }
        ));
    }

    #[test]
    fn test_parse_duplicate_symbol() {
        assert!(matches!(
            CodeTable::from_text("a:0\na:1\n").unwrap_err(),
            CodecError::CorruptCodeTable { line: 2, .. }
        ));
    }

    #[test]
    fn test_parse_rejects_zero_size() {
        assert!(matches!(
            CodeTable::from_text("size:0\na:0\n").unwrap_err(),
            CodecError::CorruptCodeTable { line: 1, .. }
        ));
    }

    #[test]
    fn test_parse_rejects_undersized_width() {
        // Five entries need three bits; a declared width of two would make
        // encoded codes wider than any decoder read.
        let text = "size:2\na:000\nb:001\nc:010\nd:011\ne:100\n";
        assert!(matches!(
            CodeTable::from_text(text).unwrap_err(),
            CodecError::CorruptCodeTable { line: 1, .. }
        ));
    }

    #[test]
    fn test_parse_accepts_oversized_width() {
        // Padding beyond the minimum is harmless and stays legal.
        let loaded = CodeTable::from_text("size:3\na:000\nb:001\n").unwrap();
        assert_eq!(loaded.code_width(), Some(3));
    }

    #[test]
    fn test_parse_pads_short_entry_to_size() {
        let loaded = CodeTable::from_text("size:4\na:01\n").unwrap();
        assert_eq!(loaded.code('a').unwrap().to_bit_string(), "0001");
    }

    #[test]
    fn test_inverse_views() {
        let table = CodeTable::ranked("aaabbc");
        let by_bits = table.inverse_by_bits();
        assert_eq!(by_bits.get("01"), Some(&'b'));

        let by_value = table.inverse_by_value();
        assert_eq!(by_value.get(&2).map(String::as_str), Some("c"));
    }
}
