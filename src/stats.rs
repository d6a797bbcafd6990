//! Compression statistics reported next to an encoding.
//!
//! The baseline stores every symbol on a fixed width of at least
//! [`BASELINE_WIDTH`] bits, widened to the bit length of the symbol's
//! ordinal value when that does not fit.

use log::debug;

use crate::Symbol;
use crate::encoder::Encoded;
use crate::error::Result;
use crate::frequency::FrequencyTable;

pub const BASELINE_WIDTH: usize = 8;

/// Symbols that have a numeric ordinal value.
pub trait Ordinal {
    fn ordinal(&self) -> u32;
}

impl Ordinal for char {
    fn ordinal(&self) -> u32 {
        u32::from(*self)
    }
}

impl Ordinal for u8 {
    fn ordinal(&self) -> u32 {
        u32::from(*self)
    }
}

/// Bits used by the fixed-width baseline for one symbol.
pub fn fixed_width_bits<S: Ordinal>(symbol: &S) -> usize {
    let significant = (u32::BITS - symbol.ordinal().leading_zeros()) as usize;
    significant.max(BASELINE_WIDTH)
}

/// Bits used by the fixed-width baseline for the whole input.
pub fn fixed_width_baseline<S: Ordinal>(input: &[S]) -> usize {
    input.iter().map(fixed_width_bits).sum()
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompressionStats {
    pub symbols: usize,
    pub distinct_symbols: usize,
    pub baseline_bits: usize,
    pub encoded_bits: usize,
    pub packed_bytes: usize,
    pub entropy: f64,
    pub average_code_length: f64,
}

impl CompressionStats {
    pub fn compute<S: Symbol + Ordinal>(input: &[S], encoded: &Encoded<S>) -> Result<Self> {
        let frequencies = FrequencyTable::analyze(input)?;

        let stats = CompressionStats {
            symbols: input.len(),
            distinct_symbols: frequencies.len(),
            baseline_bits: fixed_width_baseline(input),
            encoded_bits: encoded.encoded.len(),
            packed_bytes: encoded.encoded.to_bytes().len(),
            entropy: frequencies.entropy(),
            average_code_length: encoded.table.average_code_length(&frequencies),
        };
        debug!("Compression stats: {:?}", stats);
        Ok(stats)
    }

    /// Space saved relative to the baseline, in percent.
    pub fn compression_rate(&self) -> f64 {
        if self.baseline_bits == 0 {
            return 0.0;
        }
        100.0 - (self.encoded_bits as f64 / self.baseline_bits as f64) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::encode;

    #[test]
    fn test_fixed_width_bits() {
        assert_eq!(fixed_width_bits(&b'a'), 8);
        assert_eq!(fixed_width_bits(&'a'), 8);
        assert_eq!(fixed_width_bits(&'\u{100}'), 9);
        assert_eq!(fixed_width_bits(&'\u{20AC}'), 14);
    }

    #[test]
    fn test_stats_for_skewed_input() {
        let input: Vec<char> = "aaabbc".chars().collect();
        let encoded = encode(&input).unwrap();
        let stats = CompressionStats::compute(&input, &encoded).unwrap();

        assert_eq!(stats.symbols, 6);
        assert_eq!(stats.distinct_symbols, 3);
        assert_eq!(stats.baseline_bits, 48);
        assert_eq!(stats.encoded_bits, 9);
        assert_eq!(stats.packed_bytes, 2);
        assert!((stats.average_code_length - 1.5).abs() < 1e-9);
        assert!(stats.entropy <= stats.average_code_length);
        assert!((stats.compression_rate() - 81.25).abs() < 1e-9);
    }
}
