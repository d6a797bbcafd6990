use log::{debug, error};

use crate::Symbol;
use crate::bits::EncodedStream;
use crate::code_table::CodeTable;
use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;
use crate::huffman::build_huffman_tree;

/// Output of [`encode`]: the bit stream and the table needed to decode it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded<S: Symbol> {
    pub encoded: EncodedStream,
    pub table: CodeTable<S>,
}

/// Builds a code from the symbol frequencies of `input` and encodes it.
pub fn encode<S: Symbol>(input: &[S]) -> Result<Encoded<S>> {
    let frequencies = FrequencyTable::analyze(input)?;
    let tree = build_huffman_tree(&frequencies)?;
    let table = CodeTable::from_tree(&tree);
    let encoded = encode_with_table(input, &table)?;

    Ok(Encoded { encoded, table })
}

/// Concatenates the code of every symbol of `input`, in order.
pub fn encode_with_table<S: Symbol>(input: &[S], table: &CodeTable<S>) -> Result<EncodedStream> {
    debug!("Starting data encoding of {} symbols...", input.len());
    let mut bits = EncodedStream::with_capacity(input.len() * 2);

    for (position, symbol) in input.iter().enumerate() {
        match table.get(symbol) {
            Some(code) => bits.extend_from(code),
            None => {
                error!("Symbol {:?} found in data but not in code table!", symbol);
                return Err(Error::UnknownSymbol {
                    position,
                    symbol: format!("{:?}", symbol),
                });
            }
        }
    }

    debug!("Encoded {} symbols into {} bits", input.len(), bits.len());
    Ok(bits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::Code;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[test]
    fn test_encode_skewed() {
        let out = encode(&chars("aaabbc")).unwrap();
        assert_eq!(out.encoded.to_string(), "111010100");
        assert_eq!(out.table.len(), 3);
    }

    #[test]
    fn test_encode_single_symbol() {
        let out = encode(&chars("aaaa")).unwrap();
        assert_eq!(out.encoded.to_string(), "0000");
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode(&chars("")), Err(Error::EmptyInput));
    }

    #[test]
    fn test_unknown_symbol() {
        let table: CodeTable<char> = [('a', "0".parse::<Code>().unwrap())]
            .into_iter()
            .collect();
        let err = encode_with_table(&chars("aab"), &table).unwrap_err();
        assert_eq!(
            err,
            Error::UnknownSymbol {
                position: 2,
                symbol: "'b'".to_string()
            }
        );
    }
}
