use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::{debug, trace};

use crate::Symbol;
use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<S> {
    Leaf {
        symbol: S,
        freq: u64,
    },
    Internal {
        freq: u64,
        left: Box<Node<S>>,
        right: Box<Node<S>>,
    },
}

impl<S> Node<S> {
    pub fn freq(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } => *freq,
            Node::Internal { freq, .. } => *freq,
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

pub type HuffmanTree<S> = Node<S>;

/// Heap entry ordering nodes by lowest weight first, then by highest `seq`.
///
/// Leaves get `seq` equal to their rank in the frequency table and merged
/// nodes get increasing numbers past the last leaf. Among equal weights the
/// most recently queued entry is therefore taken first, the same order a list
/// kept stably sorted by descending weight yields when popped from its tail.
struct HeapNode<S> {
    freq: u64,
    seq: usize,
    node: Node<S>,
}

impl<S> Ord for HeapNode<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse weight for min-heap behavior in BinaryHeap
        other
            .freq
            .cmp(&self.freq)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl<S> PartialOrd for HeapNode<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> PartialEq for HeapNode<S> {
    fn eq(&self, other: &Self) -> bool {
        self.freq == other.freq && self.seq == other.seq
    }
}

impl<S> Eq for HeapNode<S> {}

/// Builds the code tree by repeatedly merging the two lightest nodes.
///
/// The first node taken becomes the `left` child, the second the `right`
/// child. A table with a single symbol yields a bare leaf.
pub fn build_huffman_tree<S: Symbol>(frequencies: &FrequencyTable<S>) -> Result<HuffmanTree<S>> {
    debug!(
        "Building Huffman tree from {} unique symbols",
        frequencies.len()
    );

    let mut heap: BinaryHeap<HeapNode<S>> = frequencies
        .iter()
        .enumerate()
        .map(|(seq, (symbol, freq))| HeapNode {
            freq,
            seq,
            node: Node::Leaf {
                symbol: symbol.clone(),
                freq,
            },
        })
        .collect();

    let mut next_seq = heap.len();
    loop {
        let Some(first) = heap.pop() else {
            return Err(Error::EmptyInput);
        };
        let Some(second) = heap.pop() else {
            debug!(
                "Tree construction complete: {} leaves, depth {}",
                first.node.leaf_count(),
                first.node.depth()
            );
            return Ok(first.node);
        };

        let freq = first.freq + second.freq;
        trace!(
            "Merging weights {} and {} into {} (seq {})",
            first.freq, second.freq, freq, next_seq
        );

        heap.push(HeapNode {
            freq,
            seq: next_seq,
            node: Node::Internal {
                freq,
                left: Box::new(first.node),
                right: Box::new(second.node),
            },
        });
        next_seq += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_for(text: &str) -> Node<char> {
        let input: Vec<char> = text.chars().collect();
        let freq = FrequencyTable::analyze(&input).unwrap();
        build_huffman_tree(&freq).unwrap()
    }

    fn leaf(symbol: char, freq: u64) -> Box<Node<char>> {
        Box::new(Node::Leaf { symbol, freq })
    }

    #[test]
    fn test_merge_order_with_tie() {
        // c+b merge first; the merged node then wins the tie against a
        let expected = Node::Internal {
            freq: 6,
            left: Box::new(Node::Internal {
                freq: 3,
                left: leaf('c', 1),
                right: leaf('b', 2),
            }),
            right: leaf('a', 3),
        };
        assert_eq!(tree_for("aaabbc"), expected);
    }

    #[test]
    fn test_merge_order_uniform() {
        let expected = Node::Internal {
            freq: 3,
            left: leaf('a', 1),
            right: Box::new(Node::Internal {
                freq: 2,
                left: leaf('c', 1),
                right: leaf('b', 1),
            }),
        };
        assert_eq!(tree_for("abc"), expected);
    }

    #[test]
    fn test_single_symbol_is_bare_leaf() {
        assert_eq!(tree_for("aaaa"), Node::Leaf { symbol: 'a', freq: 4 });
    }

    #[test]
    fn test_leaf_count_and_weight() {
        let tree = tree_for("the quick brown fox jumps over the lazy dog");
        assert_eq!(tree.leaf_count(), 27);
        assert_eq!(tree.freq(), 43);
    }
}
