//! Symbol frequency model.
//!
//! Every table construction strategy starts from the same ranked frequency
//! list: one entry per distinct character, sorted by descending count. Ties
//! are broken by first occurrence in the input, which pins both fixed-width
//! rank assignment and Huffman merge order so tables are reproducible
//! across runs.

use std::collections::HashMap;

/// One entry of the ranked frequency list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolFrequency {
    /// The character.
    pub symbol: char,
    /// Occurrence count in the scanned text.
    pub count: usize,
}

/// Scan `text` once and return its symbols ranked by descending frequency.
///
/// Equal counts are ordered by first occurrence in the input.
pub fn frequency_ranks(text: &str) -> Vec<SymbolFrequency> {
    let mut counts: HashMap<char, (usize, usize)> = HashMap::new();
    for (seen_at, c) in text.chars().enumerate() {
        counts
            .entry(c)
            .and_modify(|(count, _)| *count += 1)
            .or_insert((1, seen_at));
    }

    let mut ranked: Vec<(char, usize, usize)> = counts
        .into_iter()
        .map(|(symbol, (count, first_seen))| (symbol, count, first_seen))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    ranked
        .into_iter()
        .map(|(symbol, count, _)| SymbolFrequency { symbol, count })
        .collect()
}
