//! File persistence for code tables and encoded payloads.
//!
//! Tables are stored in the text format of [`CodeTable::to_text`]; payloads
//! are stored as the raw framed byte buffer. These are thin wrappers so the
//! codecs themselves never touch the filesystem.

use crate::error::Result;
use crate::table::CodeTable;
use std::fs;
use std::path::Path;

/// Write a code table to `path` in the persisted text format.
pub fn save_table(path: impl AsRef<Path>, table: &CodeTable) -> Result<()> {
    fs::write(path, table.to_text())?;
    Ok(())
}

/// Read a code table from `path`.
pub fn load_table(path: impl AsRef<Path>) -> Result<CodeTable> {
    let text = fs::read_to_string(path)?;
    CodeTable::from_text(&text)
}

/// Write a framed payload to `path`.
pub fn save_payload(path: impl AsRef<Path>, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes)?;
    Ok(())
}

/// Read a framed payload from `path`.
pub fn load_payload(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    Ok(fs::read(path)?)
}
