//! # huffman_coding
//!
//! Static Huffman coding over arbitrary symbols.
//!
//! The pipeline runs strictly forward: symbol counts ([`FrequencyTable`]),
//! code tree ([`build_huffman_tree`]), code table ([`CodeTable`]), then the
//! [`encode`]/[`decode`] pair. The table is passed between encoder and decoder
//! in memory; no serialized format is defined.
//!
//! ```rust
//! use huffman_coding::{decode, encode};
//!
//! let input: Vec<char> = "abracadabra".chars().collect();
//! let out = encode(&input)?;
//! assert_eq!(decode(&out.encoded, &out.table)?, input);
//! # Ok::<(), huffman_coding::Error>(())
//! ```

use std::fmt::Debug;
use std::hash::Hash;

pub mod bits;
pub mod code_table;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod frequency;
pub mod huffman;
pub mod stats;

pub use bits::{Bits, Code, EncodedStream};
pub use code_table::CodeTable;
pub use decoder::{Decoder, decode};
pub use encoder::{Encoded, encode, encode_with_table};
pub use error::{Error, Result};
pub use frequency::FrequencyTable;
pub use huffman::{HuffmanTree, Node, build_huffman_tree};
pub use stats::CompressionStats;

/// A unit of the input alphabet. Only equality matters for coding; hashing
/// backs the table lookups.
pub trait Symbol: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> Symbol for T {}
