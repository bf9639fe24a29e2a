//! Error types for linepress operations.
//!
//! One shared error enum covers every failure the codecs can produce:
//! malformed bit literals, frame corruption, table corruption, and the
//! LZW-specific unrepresentable-code condition. All variants describe
//! deterministic failures on malformed input or misuse; none are retryable.

use std::io;
use thiserror::Error;

/// The main error type for linepress operations.
#[derive(Debug, Error)]
pub enum CodecError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A bit literal contained a character other than '0' or '1'.
    #[error("Malformed bit literal: unexpected character {found:?}")]
    MalformedBitLiteral {
        /// The offending character.
        found: char,
    },

    /// Encode encountered a character with no entry in the code table.
    #[error("Unknown symbol: {symbol:?} has no code table entry")]
    UnknownSymbol {
        /// The character with no code.
        symbol: char,
    },

    /// Byte frame is structurally invalid.
    #[error("Corrupt frame: {message}")]
    CorruptFrame {
        /// Description of the framing problem.
        message: String,
    },

    /// Persisted code table failed to parse.
    #[error("Corrupt code table at line {line}: {message}")]
    CorruptCodeTable {
        /// 1-based line number of the offending entry.
        line: usize,
        /// Description of the parse problem.
        message: String,
    },

    /// LZW decode read a code with no dictionary entry and no conjecture
    /// to reconstruct it from.
    #[error("Unrepresentable LZW code {code} at bit position {bit_position}")]
    UnrepresentableCode {
        /// The numeric code value that could not be resolved.
        code: u64,
        /// Bit offset of the code in the unframed payload.
        bit_position: usize,
    },

    /// A codec operation required a code table that was never built or loaded.
    #[error("Code table has not been built or loaded")]
    TableNotBuilt,

    /// A fixed-stride operation required a declared code width, but the
    /// table carries none (variable-width table loaded where a `size:`
    /// header was expected).
    #[error("Code table declares no code width")]
    MissingCodeWidth,
}

/// Result type alias for linepress operations.
pub type Result<T> = std::result::Result<T, CodecError>;

impl CodecError {
    /// Create a malformed bit literal error.
    pub fn malformed_bit(found: char) -> Self {
        Self::MalformedBitLiteral { found }
    }

    /// Create an unknown symbol error.
    pub fn unknown_symbol(symbol: char) -> Self {
        Self::UnknownSymbol { symbol }
    }

    /// Create a corrupt frame error.
    pub fn corrupt_frame(message: impl Into<String>) -> Self {
        Self::CorruptFrame {
            message: message.into(),
        }
    }

    /// Create a corrupt code table error.
    pub fn corrupt_table(line: usize, message: impl Into<String>) -> Self {
        Self::CorruptCodeTable {
            line,
            message: message.into(),
        }
    }

    /// Create an unrepresentable LZW code error.
    pub fn unrepresentable_code(code: u64, bit_position: usize) -> Self {
        Self::UnrepresentableCode { code, bit_position }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CodecError::malformed_bit('x');
        assert!(err.to_string().contains("'x'"));

        let err = CodecError::corrupt_table(3, "missing separator");
        assert!(err.to_string().contains("line 3"));

        let err = CodecError::unrepresentable_code(42, 18);
        assert!(err.to_string().contains("42"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: CodecError = io_err.into();
        assert!(matches!(err, CodecError::Io(_)));
    }
}
