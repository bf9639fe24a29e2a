//! LZW working dictionaries with code-width growth.
//!
//! Both sides derive an ephemeral working copy from the persisted
//! single-character seed table: the encoder a string-to-code map, the
//! decoder a code-to-string map. Each carries the next-code counter
//! (starting at the seed entry count) and the current code width (starting
//! at the seed width), growing the width by one whenever
//! `2^width <= next_code`.
//!
//! Growth bookkeeping differs by side, which is why insertion is split:
//! the encoder grows *before* registering a new entry (the width change
//! takes effect for the code about to be assigned), while the decoder
//! registers first and re-evaluates growth at the end of each step. Both
//! apply the growth check once at seeding time; without it, a
//! power-of-two-sized alphabet would have the encoder writing one bit
//! wider than the decoder reads from the very first code.

use linepress_core::error::{CodecError, Result};
use linepress_core::table::CodeTable;
use std::collections::HashMap;

fn seed_width(table: &CodeTable) -> Result<usize> {
    // A zero width reads zero bits per code and the cursor never moves.
    match table.code_width() {
        None | Some(0) => Err(CodecError::MissingCodeWidth),
        Some(width) => Ok(width),
    }
}

fn grown(width: usize, next_code: u64) -> usize {
    if width < 64 && (1u64 << width) <= next_code {
        width + 1
    } else {
        width
    }
}

/// Encoder-side working dictionary: string -> numeric code.
#[derive(Debug)]
pub struct EncodeDictionary {
    map: HashMap<String, u64>,
    next_code: u64,
    width: usize,
}

impl EncodeDictionary {
    /// Seed from a single-character code table.
    pub fn from_table(table: &CodeTable) -> Result<Self> {
        let width = seed_width(table)?;
        let map: HashMap<String, u64> = table
            .iter()
            .map(|(sym, code)| (sym.to_string(), code.to_u64()))
            .collect();
        let next_code = map.len() as u64;

        Ok(Self {
            map,
            next_code,
            width: grown(width, next_code),
        })
    }

    /// Whether `string` has a code.
    pub fn contains(&self, string: &str) -> bool {
        self.map.contains_key(string)
    }

    /// The code for `string`, if any.
    pub fn code_of(&self, string: &str) -> Option<u64> {
        self.map.get(string).copied()
    }

    /// Register `string` under the next code.
    ///
    /// The width grows first when the threshold is crossed, so the new
    /// entry's code is representable at the width in effect after this
    /// call - the decoder derives the same entry one step later and must
    /// agree on every subsequent read width.
    pub fn register(&mut self, string: String) {
        self.width = grown(self.width, self.next_code);
        self.map.insert(string, self.next_code);
        self.next_code += 1;
    }

    /// Current code width in bits.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The next code value to be assigned.
    pub fn next_code(&self) -> u64 {
        self.next_code
    }
}

/// Decoder-side working dictionary: numeric code -> string.
#[derive(Debug)]
pub struct DecodeDictionary {
    map: HashMap<u64, String>,
    next_code: u64,
    width: usize,
}

impl DecodeDictionary {
    /// Seed from a single-character code table.
    pub fn from_table(table: &CodeTable) -> Result<Self> {
        let width = seed_width(table)?;
        let map = table.inverse_by_value();
        let next_code = map.len() as u64;

        Ok(Self {
            map,
            next_code,
            width: grown(width, next_code),
        })
    }

    /// The string for `code`, if already known.
    pub fn lookup(&self, code: u64) -> Option<&str> {
        self.map.get(&code).map(String::as_str)
    }

    /// Register `string` under the next code. Growth is re-evaluated
    /// separately via [`DecodeDictionary::grow`] at the end of the step.
    pub fn register(&mut self, string: String) {
        self.map.insert(self.next_code, string);
        self.next_code += 1;
    }

    /// Re-evaluate the growth threshold after a step completes.
    pub fn grow(&mut self) {
        self.width = grown(self.width, self.next_code);
    }

    /// Current code width in bits.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The next code value to be assigned.
    pub fn next_code(&self) -> u64 {
        self.next_code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_from_table() {
        let table = CodeTable::ranked("aaabbc");
        let dict = EncodeDictionary::from_table(&table).unwrap();

        assert_eq!(dict.next_code(), 3);
        assert_eq!(dict.width(), 2);
        assert_eq!(dict.code_of("a"), Some(0));
        assert_eq!(dict.code_of("b"), Some(1));
        assert_eq!(dict.code_of("c"), Some(2));
        assert!(!dict.contains("ab"));
    }

    #[test]
    fn test_power_of_two_seed_grows_at_once() {
        // Two symbols at width 1: 2^1 <= 2, so both sides start at width 2.
        let table = CodeTable::ranked("abab");
        let enc = EncodeDictionary::from_table(&table).unwrap();
        let dec = DecodeDictionary::from_table(&table).unwrap();
        assert_eq!(enc.width(), 2);
        assert_eq!(dec.width(), 2);
    }

    #[test]
    fn test_register_grows_before_assignment() {
        let table = CodeTable::ranked("aaabbc");
        let mut dict = EncodeDictionary::from_table(&table).unwrap();

        dict.register("aa".to_string()); // code 3, 4 <= 3 is false
        assert_eq!(dict.width(), 2);
        dict.register("ab".to_string()); // 4 <= 4 crosses: width 3, code 4
        assert_eq!(dict.width(), 3);
        assert_eq!(dict.code_of("ab"), Some(4));
    }

    #[test]
    fn test_lockstep_growth() {
        // Step for step, the width the encoder uses to emit must equal the
        // width the decoder uses to read, across several growth crossings.
        let table = CodeTable::ranked("aaabbc");
        let mut enc = EncodeDictionary::from_table(&table).unwrap();
        let mut dec = DecodeDictionary::from_table(&table).unwrap();

        let mut enc_widths = Vec::new();
        let mut dec_widths = Vec::new();
        for step in 0..40u64 {
            // Encoder: emit at current width, then register.
            enc_widths.push(enc.width());
            enc.register(format!("e{step}"));

            // Decoder: read at current width; the first step derives no
            // entry, later steps register then re-check growth.
            dec_widths.push(dec.width());
            if step > 0 {
                dec.register(format!("d{step}"));
            }
            dec.grow();
        }

        assert_eq!(enc_widths, dec_widths);
    }

    #[test]
    fn test_decode_seed_requires_width() {
        let table = CodeTable::from_text("a:0\nb:1\n").unwrap();
        assert!(matches!(
            DecodeDictionary::from_table(&table).unwrap_err(),
            CodecError::MissingCodeWidth
        ));
    }

    #[test]
    fn test_seed_rejects_zero_width() {
        let table = CodeTable::new(Some(0));
        assert!(matches!(
            EncodeDictionary::from_table(&table).unwrap_err(),
            CodecError::MissingCodeWidth
        ));
        assert!(matches!(
            DecodeDictionary::from_table(&table).unwrap_err(),
            CodecError::MissingCodeWidth
        ));
    }
}
