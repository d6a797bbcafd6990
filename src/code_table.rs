use std::collections::HashMap;

use log::{debug, trace};

use crate::Symbol;
use crate::bits::Code;
use crate::frequency::FrequencyTable;
use crate::huffman::Node;

/// Mapping from symbol to its code, kept in the order codes were assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable<S: Symbol> {
    entries: Vec<(S, Code)>,
    index: HashMap<S, usize>,
}

impl<S: Symbol> CodeTable<S> {
    /// Walks the tree in pre-order, appending `0` for `left` and `1` for `right`.
    ///
    /// A tree made of a single leaf has no path to walk. Its symbol gets the
    /// one-bit code `0` so that every input symbol still costs one bit and the
    /// stream can be decoded back to the right length.
    pub fn from_tree(root: &Node<S>) -> Self {
        let mut table = CodeTable {
            entries: Vec::new(),
            index: HashMap::new(),
        };

        match root {
            Node::Leaf { symbol, .. } => {
                debug!("Single-symbol tree, assigning code '0' to {:?}", symbol);
                table.insert(symbol.clone(), Code::from_bits([0]));
            }
            Node::Internal { .. } => {
                let mut prefix = Code::new();
                build_code_table(root, &mut prefix, &mut table);
            }
        }

        debug!("Code table built with {} entries", table.len());
        table
    }

    /// Inserts or replaces the code of `symbol`.
    fn insert(&mut self, symbol: S, code: Code) {
        match self.index.get(&symbol) {
            Some(&i) => self.entries[i].1 = code,
            None => {
                self.index.insert(symbol.clone(), self.entries.len());
                self.entries.push((symbol, code));
            }
        }
    }

    pub fn get(&self, symbol: &S) -> Option<&Code> {
        self.index.get(symbol).map(|&i| &self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&S, &Code)> {
        self.entries.iter().map(|(s, c)| (s, c))
    }

    /// True if every code is non-empty and none is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        let mut codes: Vec<&Code> = self.entries.iter().map(|(_, c)| c).collect();
        if codes.iter().any(|c| c.is_empty()) {
            return false;
        }
        // After a lexicographic sort a prefix always sits right before one of its extensions
        codes.sort_by(|a, b| a.as_slice().cmp(b.as_slice()));
        codes.windows(2).all(|pair| !pair[0].is_prefix_of(pair[1]))
    }

    /// Expected code length in bits per symbol under `frequencies`.
    ///
    /// Symbols missing from the table are ignored.
    pub fn average_code_length(&self, frequencies: &FrequencyTable<S>) -> f64 {
        let total = frequencies.total();
        if total == 0 {
            return 0.0;
        }
        let bits: u64 = frequencies
            .iter()
            .filter_map(|(symbol, count)| self.get(symbol).map(|c| c.len() as u64 * count))
            .sum();
        bits as f64 / total as f64
    }
}

impl<S: Symbol> FromIterator<(S, Code)> for CodeTable<S> {
    /// Collects a table supplied independently of any tree. Later entries
    /// replace earlier ones for the same symbol. No validation is done here;
    /// the decoder checks the prefix-free property when it is built.
    fn from_iter<I: IntoIterator<Item = (S, Code)>>(iter: I) -> Self {
        let mut table = CodeTable {
            entries: Vec::new(),
            index: HashMap::new(),
        };
        for (symbol, code) in iter {
            table.insert(symbol, code);
        }
        table
    }
}

fn build_code_table<S: Symbol>(node: &Node<S>, prefix: &mut Code, table: &mut CodeTable<S>) {
    match node {
        Node::Leaf { symbol, .. } => {
            trace!("Assigning code '{}' to symbol {:?}", prefix, symbol);
            table.insert(symbol.clone(), prefix.clone());
        }
        Node::Internal { left, right, .. } => {
            prefix.push(0);
            build_code_table(left, prefix, table);
            prefix.pop();

            prefix.push(1);
            build_code_table(right, prefix, table);
            prefix.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::huffman::build_huffman_tree;

    fn table_for(text: &str) -> CodeTable<char> {
        let input: Vec<char> = text.chars().collect();
        let freq = FrequencyTable::analyze(&input).unwrap();
        CodeTable::from_tree(&build_huffman_tree(&freq).unwrap())
    }

    fn code(bits: &str) -> Code {
        bits.parse().unwrap()
    }

    #[test]
    fn test_codes_for_skewed_input() {
        let table = table_for("aaabbc");
        assert_eq!(table.get(&'a'), Some(&code("1")));
        assert_eq!(table.get(&'b'), Some(&code("01")));
        assert_eq!(table.get(&'c'), Some(&code("00")));
        assert!(table.is_prefix_free());
    }

    #[test]
    fn test_codes_for_uniform_input() {
        let table = table_for("abc");
        assert_eq!(table.get(&'a'), Some(&code("0")));
        assert_eq!(table.get(&'c'), Some(&code("10")));
        assert_eq!(table.get(&'b'), Some(&code("11")));
    }

    #[test]
    fn test_preorder_entry_order() {
        let table = table_for("aaabbc");
        let symbols: Vec<char> = table.iter().map(|(&s, _)| s).collect();
        assert_eq!(symbols, vec!['c', 'b', 'a']);
    }

    #[test]
    fn test_single_symbol_gets_one_bit() {
        let table = table_for("aaaa");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(&'a'), Some(&code("0")));
        assert!(table.is_prefix_free());
    }

    #[test]
    fn test_prefix_free_detection() {
        let good: CodeTable<char> = [('a', code("0")), ('b', code("10")), ('c', code("11"))]
            .into_iter()
            .collect();
        assert!(good.is_prefix_free());

        let prefix: CodeTable<char> = [('a', code("1")), ('b', code("10"))].into_iter().collect();
        assert!(!prefix.is_prefix_free());

        let duplicate: CodeTable<char> = [('a', code("01")), ('b', code("01"))].into_iter().collect();
        assert!(!duplicate.is_prefix_free());

        let empty: CodeTable<char> = [('a', code(""))].into_iter().collect();
        assert!(!empty.is_prefix_free());
    }

    #[test]
    fn test_average_code_length() {
        let input: Vec<char> = "aaabbc".chars().collect();
        let freq = FrequencyTable::analyze(&input).unwrap();
        let table = CodeTable::from_tree(&build_huffman_tree(&freq).unwrap());
        // (3*1 + 2*2 + 1*2) / 6
        assert!((table.average_code_length(&freq) - 1.5).abs() < 1e-9);
    }
}
