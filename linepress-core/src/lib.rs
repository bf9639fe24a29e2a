//! # Linepress Core
//!
//! Core components for the linepress text compression toolkit.
//!
//! This crate provides the bit-packing substrate shared by all three
//! codecs:
//!
//! - [`bitvec`]: fixed-width bit vectors convertible to/from MSB-first
//!   bit literals and integers
//! - [`framing`]: packing bit strings into byte buffers with exact
//!   boundary accounting (leading tail-length byte)
//! - [`freq`]: single-pass symbol frequency model with pinned tie-breaking
//! - [`table`]: symbol/code tables and their persisted text format
//! - [`store`]: file persistence for tables and payloads
//! - [`traits`]: the [`Codec`] capability trait
//! - [`error`]: error types
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │ Codecs (separate crates)                             │
//! │     FixedWidthCodec, HuffmanCodec, LzwCodec          │
//! ├──────────────────────────────────────────────────────┤
//! │ Table layer (this crate)                             │
//! │     frequency model, CodeTable, persistence          │
//! ├──────────────────────────────────────────────────────┤
//! │ Bit layer (this crate)                               │
//! │     BitVec, byte framing                             │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use linepress_core::bitvec::BitVec;
//! use linepress_core::framing;
//!
//! let bits = BitVec::from_value(4, 0b1010).to_bit_string();
//! let frame = framing::pack(&bits).unwrap();
//! assert_eq!(framing::unpack(&frame).unwrap(), "1010");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod bitvec;
pub mod error;
pub mod framing;
pub mod freq;
pub mod store;
pub mod table;
pub mod traits;

// Re-exports for convenience
pub use bitvec::BitVec;
pub use error::{CodecError, Result};
pub use freq::SymbolFrequency;
pub use table::CodeTable;
pub use traits::Codec;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bitvec::BitVec;
    pub use crate::error::{CodecError, Result};
    pub use crate::freq::{SymbolFrequency, frequency_ranks};
    pub use crate::table::CodeTable;
    pub use crate::traits::Codec;
}
