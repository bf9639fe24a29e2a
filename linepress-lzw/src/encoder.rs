//! LZW encoder: greedy longest-match scan.

use crate::dictionary::EncodeDictionary;
use linepress_core::bitvec::BitVec;
use linepress_core::error::{CodecError, Result};
use linepress_core::table::CodeTable;

/// LZW encoder holding the working dictionary for one encode call.
#[derive(Debug)]
pub struct LzwEncoder {
    dict: EncodeDictionary,
}

impl LzwEncoder {
    /// Create an encoder seeded from a single-character code table.
    pub fn new(table: &CodeTable) -> Result<Self> {
        Ok(Self {
            dict: EncodeDictionary::from_table(table)?,
        })
    }

    /// Encode `text` into the concatenated code bit string.
    ///
    /// Maintains `current`, the longest prefix of the remaining input known
    /// to the dictionary. When extending `current` by the next character
    /// falls outside the dictionary, the code for `current` is emitted at
    /// the width in effect at that moment, the extension is registered
    /// (growing the width first when the threshold is crossed), and the
    /// scan restarts at the next character.
    pub fn encode(&mut self, text: &str) -> Result<String> {
        let mut chars = text.chars();
        let Some(first) = chars.next() else {
            return Ok(String::new());
        };

        let mut current = first.to_string();
        if !self.dict.contains(&current) {
            return Err(CodecError::unknown_symbol(first));
        }

        let mut bits = String::new();
        for next in chars {
            let mut extended = current.clone();
            extended.push(next);

            if self.dict.contains(&extended) {
                current = extended;
            } else {
                self.emit(&current, &mut bits)?;
                self.dict.register(extended);

                current.clear();
                current.push(next);
                if !self.dict.contains(&current) {
                    return Err(CodecError::unknown_symbol(next));
                }
            }
        }

        self.emit(&current, &mut bits)?;
        Ok(bits)
    }

    fn emit(&self, current: &str, bits: &mut String) -> Result<()> {
        let code = self
            .dict
            .code_of(current)
            .ok_or_else(|| CodecError::unknown_symbol(current.chars().next().unwrap_or('\0')))?;
        bits.push_str(&BitVec::from_value(self.dict.width(), code).to_bit_string());
        Ok(())
    }
}
