use std::collections::HashMap;

use log::{debug, trace};

use crate::Symbol;
use crate::error::{Error, Result};

/// Symbol counts sorted by descending frequency.
///
/// Symbols with equal counts stay in the order they first appeared in the
/// input. The tree builder relies on that order for its tie-breaks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<S> {
    entries: Vec<(S, u64)>,
}

impl<S: Symbol> FrequencyTable<S> {
    /// Counts every symbol of `input`.
    pub fn analyze(input: &[S]) -> Result<Self> {
        if input.is_empty() {
            return Err(Error::EmptyInput);
        }

        let mut index: HashMap<&S, usize> = HashMap::new();
        let mut entries: Vec<(S, u64)> = Vec::new();
        for symbol in input {
            match index.get(symbol) {
                Some(&i) => entries[i].1 += 1,
                None => {
                    index.insert(symbol, entries.len());
                    entries.push((symbol.clone(), 1));
                }
            }
        }

        // sort_by is stable, so ties keep first-seen order
        entries.sort_by(|a, b| b.1.cmp(&a.1));

        debug!(
            "Frequency analysis: {} symbols, {} distinct",
            input.len(),
            entries.len()
        );
        for (symbol, count) in &entries {
            trace!("Symbol {:?} occurs {} times", symbol, count);
        }

        Ok(FrequencyTable { entries })
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: a table is only built from non-empty input.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, equal to the length of the analyzed input.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&S, u64)> {
        self.entries.iter().map(|(s, count)| (s, *count))
    }

    /// Shannon entropy of the distribution in bits per symbol.
    pub fn entropy(&self) -> f64 {
        let total = self.total() as f64;

        let entropy: f64 = self
            .entries
            .iter()
            .map(|&(_, count)| {
                let p = count as f64 / total;
                -p * p.log2()
            })
            .sum();

        debug!(
            "Calculated entropy: {:.4} bits/symbol (total samples: {})",
            entropy,
            self.total()
        );
        entropy
    }
}
