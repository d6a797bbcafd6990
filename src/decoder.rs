use std::time::Instant;

use log::{debug, trace, warn};

use crate::Symbol;
use crate::bits::EncodedStream;
use crate::code_table::CodeTable;
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
enum Child<S> {
    Branch(usize),
    Leaf(S),
}

/// The two children of a branch, indexed by bit.
type Branch<S> = [Option<Child<S>>; 2];

/// Binary trie built from a code table.
///
/// Only branches are stored; leaves live inline in their parent. Decoding
/// follows one child per bit from the root and emits the symbol on reaching
/// a leaf, then restarts at the root. Building the trie rejects any table
/// that is not prefix-free, so a leaf is reached for exactly one code.
#[derive(Debug, Clone)]
pub struct Decoder<S> {
    branches: Vec<Branch<S>>,
}

const ROOT: usize = 0;

impl<S: Symbol> Decoder<S> {
    pub fn new(table: &CodeTable<S>) -> Result<Self> {
        let mut decoder = Decoder {
            branches: vec![[None, None]],
        };
        for (symbol, code) in table.iter() {
            decoder.insert(symbol, code.as_slice())?;
        }
        debug!(
            "Decoding trie built: {} codes, {} branches",
            table.len(),
            decoder.branches.len()
        );
        Ok(decoder)
    }

    fn insert(&mut self, symbol: &S, code: &[u8]) -> Result<()> {
        let Some((&last, path)) = code.split_last() else {
            return Err(Error::EmptyCode);
        };
        let collision = || Error::NotPrefixFree {
            code: code.iter().map(|&b| if b == 1 { '1' } else { '0' }).collect(),
        };

        let mut current = ROOT;
        for &bit in path {
            let next = match &self.branches[current][bit as usize] {
                Some(Child::Leaf(_)) => return Err(collision()),
                Some(Child::Branch(next)) => Some(*next),
                None => None,
            };
            current = match next {
                Some(next) => next,
                None => {
                    let next = self.branches.len();
                    self.branches.push([None, None]);
                    self.branches[current][bit as usize] = Some(Child::Branch(next));
                    next
                }
            };
        }

        let slot = &mut self.branches[current][last as usize];
        if slot.is_some() {
            return Err(collision());
        }
        *slot = Some(Child::Leaf(symbol.clone()));
        Ok(())
    }

    /// Decodes the whole stream.
    ///
    /// Once the bits read since the last symbol leave the trie, no further bit
    /// can complete a code; the remaining bits are only counted and the
    /// stream ends as truncated.
    pub fn decode(&self, encoded: &EncodedStream) -> Result<Vec<S>> {
        debug!("Starting bitstream decoding of {} bits...", encoded.len());
        let start_time = Instant::now();

        let mut result = Vec::new();
        let mut current = Some(ROOT);
        let mut pending = 0usize;

        for (offset, bit) in encoded.iter().enumerate() {
            pending += 1;
            let Some(branch) = current else {
                continue;
            };

            match &self.branches[branch][bit as usize] {
                Some(Child::Leaf(symbol)) => {
                    trace!("Decoded symbol {:?} from {} bits", symbol, pending);
                    result.push(symbol.clone());
                    current = Some(ROOT);
                    pending = 0;
                }
                Some(Child::Branch(next)) => current = Some(*next),
                None => {
                    warn!("No code continues with bit {} at offset {}", bit, offset);
                    current = None;
                }
            }
        }

        if pending > 0 {
            warn!("Stream ended with {} unmatched bits", pending);
            return Err(Error::TruncatedStream { pending });
        }

        debug!(
            "Bitstream decoding finished in {:.2?}, {} symbols",
            start_time.elapsed(),
            result.len()
        );
        Ok(result)
    }
}

/// Recovers the symbol sequence from `encoded` using `table`.
pub fn decode<S: Symbol>(encoded: &EncodedStream, table: &CodeTable<S>) -> Result<Vec<S>> {
    Decoder::new(table)?.decode(encoded)
}
