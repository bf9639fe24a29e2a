//! LZW decoder: mirrors the encoder's scan via the conjecture rule.

use crate::dictionary::DecodeDictionary;
use linepress_core::bitvec::BitVec;
use linepress_core::error::{CodecError, Result};
use linepress_core::table::CodeTable;

/// LZW decoder holding the working dictionary for one decode call.
#[derive(Debug)]
pub struct LzwDecoder {
    dict: DecodeDictionary,
}

impl LzwDecoder {
    /// Create a decoder seeded from a single-character code table.
    pub fn new(table: &CodeTable) -> Result<Self> {
        Ok(Self {
            dict: DecodeDictionary::from_table(table)?,
        })
    }

    /// Decode a concatenated code bit string back into text.
    ///
    /// `conjecture` is the previous step's output. A known code emits its
    /// string and (when a conjecture exists) registers
    /// `conjecture + first char of output` - the entry the encoder created
    /// at the same point. An unknown code is the classic
    /// one-step-early citation: its string must be
    /// `conjecture + first char of conjecture`. An unknown code with no
    /// conjecture means the input is corrupt.
    ///
    /// The loop stops when fewer than a full code width of bits remain;
    /// the frame is self-describing, so a well-formed payload ends exactly
    /// on a code boundary.
    pub fn decode(&mut self, bits: &str) -> Result<String> {
        let mut decoded = String::new();
        let mut conjecture = String::new();
        let mut pos = 0;

        while pos + self.dict.width() <= bits.len() {
            let width = self.dict.width();
            let code = BitVec::from_bits(width, &bits[pos..pos + width])?.to_u64();

            let known = self.dict.lookup(code).map(str::to_string);
            let step = match known {
                Some(step) => {
                    if !conjecture.is_empty() {
                        let mut entry = conjecture.clone();
                        entry.push(step.chars().next().expect("entries are non-empty"));
                        self.dict.register(entry);
                    }
                    step
                }
                None => {
                    let first = conjecture
                        .chars()
                        .next()
                        .ok_or_else(|| CodecError::unrepresentable_code(code, pos))?;
                    let mut step = conjecture.clone();
                    step.push(first);
                    self.dict.register(step.clone());
                    step
                }
            };

            decoded.push_str(&step);
            conjecture = step;
            pos += width;
            self.dict.grow();
        }

        Ok(decoded)
    }
}
