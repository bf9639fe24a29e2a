//! Huffman merge-tree construction and code assignment.
//!
//! The tree exists only during table construction: the ranked frequency
//! list is merged greedily (two lowest-frequency nodes at a time) into a
//! single root, codes are assigned by a depth-first walk, and the tree is
//! discarded.
//!
//! The priority structure is a descending-sorted vector, so the two lowest
//! frequencies are always the last two elements. Re-sorting after each
//! merge is stable, which pins the tie-break: among equal frequencies,
//! earlier-inserted nodes keep their position and the freshly merged node
//! sorts last. Tree shape is therefore reproducible for a given input.

use linepress_core::bitvec::BitVec;
use linepress_core::freq::SymbolFrequency;
use linepress_core::table::CodeTable;

/// A node of the ephemeral merge tree.
#[derive(Debug)]
struct MergeNode {
    /// Combined frequency of all leaves below this node.
    frequency: usize,
    kind: NodeKind,
}

#[derive(Debug)]
enum NodeKind {
    /// A single symbol.
    Leaf(char),
    /// An internal node owning its 0-child and 1-child.
    Internal(Box<MergeNode>, Box<MergeNode>),
}

/// Build the Huffman code table for a ranked frequency list.
///
/// The resulting code set is prefix-free. A single-symbol alphabet is a
/// degenerate one-leaf tree whose naive walk would assign a zero-length,
/// undecodable code; that leaf is forced to the 1-bit code `0` instead.
/// The table declares no code width (each entry's width is its path
/// length).
pub fn assign_codes(ranks: &[SymbolFrequency]) -> CodeTable {
    let mut table = CodeTable::new(None);
    if ranks.is_empty() {
        return table;
    }

    // Descending-sorted vector as the priority structure: the two
    // lowest-frequency nodes are the last two elements.
    let mut nodes: Vec<MergeNode> = ranks
        .iter()
        .map(|entry| MergeNode {
            frequency: entry.count,
            kind: NodeKind::Leaf(entry.symbol),
        })
        .collect();

    while nodes.len() > 1 {
        let zero_child = nodes.pop().expect("len > 1");
        let one_child = nodes.pop().expect("len > 1");
        nodes.push(MergeNode {
            frequency: zero_child.frequency + one_child.frequency,
            kind: NodeKind::Internal(Box::new(zero_child), Box::new(one_child)),
        });
        // Stable: equal frequencies keep insertion order, merged node last.
        nodes.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    }

    let root = nodes.pop().expect("at least one node");
    walk(&root, String::new(), &mut table);
    table
}

fn walk(node: &MergeNode, path: String, table: &mut CodeTable) {
    match &node.kind {
        NodeKind::Leaf(symbol) => {
            // Single-leaf tree: the empty path cannot be decoded.
            let code = if path.is_empty() { "0".to_string() } else { path };
            table.insert(
                *symbol,
                BitVec::from_bits(code.len(), &code).expect("path is binary"),
            );
        }
        NodeKind::Internal(zero_child, one_child) => {
            walk(zero_child, format!("{path}0"), table);
            walk(one_child, format!("{path}1"), table);
        }
    }
}
