//! Error types for Huffman coding.

use thiserror::Error;

/// Error variants for frequency analysis, encoding and decoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// No code tree can be built from zero symbols.
    #[error("cannot build a code from an empty input")]
    EmptyInput,

    /// The encoder met a symbol that has no entry in its code table.
    #[error("symbol {symbol} at position {position} has no code in the table")]
    UnknownSymbol { position: usize, symbol: String },

    /// The stream ended in the middle of a code.
    #[error("encoded stream ends inside a code ({pending} bits pending)")]
    TruncatedStream { pending: usize },

    /// A code table entry has a zero-length code.
    #[error("code table contains an empty code")]
    EmptyCode,

    /// A code is a prefix of (or equal to) another code in the same table.
    #[error("code table is not prefix-free: {code} collides with another code")]
    NotPrefixFree { code: String },

    /// A bit string contained something other than '0' or '1'.
    #[error("invalid bit character {0:?}")]
    InvalidBit(char),
}

/// A specialized Result type for Huffman coding operations.
pub type Result<T> = std::result::Result<T, Error>;
