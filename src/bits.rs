//! Bit strings shared by codes and encoded streams.
//!
//! Bits are stored one per byte (`0` or `1`) so that codes can be compared,
//! concatenated and printed without any shifting. [`Bits::to_bytes`] packs
//! them when a compact size is needed for reporting.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// An ordered sequence of binary digits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Bits {
    bits: Vec<u8>,
}

/// The code assigned to a single symbol.
pub type Code = Bits;

/// Concatenation of the codes of every input symbol, in input order.
pub type EncodedStream = Bits;

impl Bits {
    pub fn new() -> Self {
        Bits { bits: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Bits {
            bits: Vec::with_capacity(capacity),
        }
    }

    /// Builds a bit string from `0`/`1` values. Any non-zero value counts as `1`.
    pub fn from_bits<I: IntoIterator<Item = u8>>(bits: I) -> Self {
        Bits {
            bits: bits.into_iter().map(|b| u8::from(b != 0)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn push(&mut self, bit: u8) {
        self.bits.push(u8::from(bit != 0));
    }

    pub fn pop(&mut self) -> Option<u8> {
        self.bits.pop()
    }

    pub fn extend_from(&mut self, other: &Bits) {
        self.bits.extend_from_slice(&other.bits);
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bits
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.bits.iter().copied()
    }

    /// Returns true if `self` is a proper or improper prefix of `other`.
    pub fn is_prefix_of(&self, other: &Bits) -> bool {
        other.bits.starts_with(&self.bits)
    }

    /// Packs the bits most significant bit first, padding the last byte with zeros.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.bits.len().div_ceil(8));
        for chunk in self.bits.chunks(8) {
            let mut byte = 0u8;
            for &bit in chunk {
                byte = (byte << 1) | bit;
            }
            byte <<= 8 - chunk.len();
            bytes.push(byte);
        }
        bytes
    }
}

impl fmt::Display for Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit == 1 { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for Bits {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let bits = s
            .chars()
            .map(|c| match c {
                '0' => Ok(0),
                '1' => Ok(1),
                other => Err(Error::InvalidBit(other)),
            })
            .collect::<Result<Vec<u8>>>()?;
        Ok(Bits { bits })
    }
}

impl FromIterator<u8> for Bits {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Bits::from_bits(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let bits: Bits = "010011".parse().unwrap();
        assert_eq!(bits.len(), 6);
        assert_eq!(bits.as_slice(), &[0, 1, 0, 0, 1, 1]);
        assert_eq!(bits.to_string(), "010011");
    }

    #[test]
    fn test_parse_rejects_other_characters() {
        assert_eq!("01a".parse::<Bits>(), Err(Error::InvalidBit('a')));
        assert_eq!("".parse::<Bits>(), Ok(Bits::new()));
    }

    #[test]
    fn test_prefix() {
        let short: Bits = "10".parse().unwrap();
        let long: Bits = "101".parse().unwrap();
        assert!(short.is_prefix_of(&long));
        assert!(!long.is_prefix_of(&short));
        assert!(short.is_prefix_of(&short));
    }

    #[test]
    fn test_to_bytes_pads_last_byte() {
        let bits: Bits = "1010101011".parse().unwrap();
        assert_eq!(bits.to_bytes(), vec![0b1010_1010, 0b1100_0000]);
        assert!(Bits::new().to_bytes().is_empty());
    }
}
