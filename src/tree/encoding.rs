// In: src/tree/encoding.rs

//! Encoder-side tree construction.
//!
//! The builder scans the whole input once for byte frequencies, forces the
//! alphabet up to at least two symbols, and runs the greedy Huffman merge over a
//! min-priority queue. The finished tree yields two artifacts: the per-symbol
//! code table and the pre-order topology bits that let a decoder rebuild the
//! tree with no side information.
//!
//! Queue ties are broken by insertion order. Leaves are seeded in ascending
//! symbol order and every merged node gets the next sequence number, so equal
//! inputs always produce byte-identical streams.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use bitvec::prelude::*;

use super::{HuffNode, HuffmanTree};

/// Number of distinct byte symbols.
pub const ALPHABET_SIZE: usize = 256;

/// Occurrence count per byte value.
pub type FrequencyTable = [u64; ALPHABET_SIZE];

//==================================================================================
// 1. Frequency Statistics
//==================================================================================

/// Counts how often every byte value occurs in `bytes`.
pub fn count_frequencies(bytes: &[u8]) -> FrequencyTable {
    let mut frequencies = [0u64; ALPHABET_SIZE];
    for &byte in bytes {
        frequencies[byte as usize] += 1;
    }
    frequencies
}

/// Guarantees at least two present symbols so that every code is non-empty.
///
/// An empty table gets symbol `0`. A single present symbol `s` gets a synthetic
/// partner `s + 1` (wrapping, so `255` pairs with `0`).
fn ensure_two_symbols(frequencies: &mut FrequencyTable) {
    let distinct = frequencies.iter().filter(|&&count| count != 0).count();
    if distinct == 0 {
        frequencies[0] = 1;
    }
    if distinct <= 1 {
        if let Some(first) = frequencies.iter().position(|&count| count != 0) {
            let partner = (first as u8).wrapping_add(1);
            frequencies[partner as usize] += 1;
        }
    }
}

//==================================================================================
// 2. Priority Queue
//==================================================================================

/// A subtree waiting in the queue with its aggregate frequency.
struct QueueEntry {
    weight: u64,
    seq: usize,
    node: HuffNode,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: invert so the lightest, then oldest, entry wins.
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

/// Runs the Huffman merge. The first entry popped becomes the left child.
fn build_tree(frequencies: &FrequencyTable) -> HuffmanTree {
    let mut heap = BinaryHeap::with_capacity(ALPHABET_SIZE);
    let mut seq = 0usize;

    for (symbol, &weight) in frequencies.iter().enumerate() {
        if weight > 0 {
            heap.push(QueueEntry {
                weight,
                seq,
                node: HuffNode::leaf(symbol as u8),
            });
            seq += 1;
        }
    }

    while let Some(left) = heap.pop() {
        let Some(right) = heap.pop() else {
            return HuffmanTree::new(left.node);
        };
        heap.push(QueueEntry {
            weight: left.weight.saturating_add(right.weight),
            seq,
            node: HuffNode::join(left.node, right.node),
        });
        seq += 1;
    }

    unreachable!("the frequency table always holds at least two symbols")
}

//==================================================================================
// 3. Code Table
//==================================================================================

/// Bit code for every byte value; symbols absent from the tree have no code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: Vec<BitVec<u8, Lsb0>>,
}

impl CodeTable {
    fn from_tree(tree: &HuffmanTree) -> Self {
        let mut table = CodeTable {
            codes: vec![BitVec::new(); ALPHABET_SIZE],
        };
        let mut path = BitVec::new();
        table.assign(tree.root(), &mut path);
        table
    }

    fn assign(&mut self, node: &HuffNode, path: &mut BitVec<u8, Lsb0>) {
        match node {
            HuffNode::Leaf { symbol } => {
                self.codes[*symbol as usize] = path.clone();
            }
            HuffNode::Internal { left, right } => {
                path.push(false);
                self.assign(left, path);
                path.pop();

                path.push(true);
                self.assign(right, path);
                path.pop();
            }
        }
    }

    /// The code of `symbol`, or `None` if it is not in the tree.
    pub fn get(&self, symbol: u8) -> Option<&BitSlice<u8, Lsb0>> {
        let code = &self.codes[symbol as usize];
        (!code.is_empty()).then(|| code.as_bitslice())
    }

    /// Iterates over `(symbol, code)` for every assigned symbol, in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &BitSlice<u8, Lsb0>)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter(|(_, code)| !code.is_empty())
            .map(|(symbol, code)| (symbol as u8, code.as_bitslice()))
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

//==================================================================================
// 4. Public API
//==================================================================================

/// A Huffman tree built from an input buffer, with its derived code table.
#[derive(Debug, Clone)]
pub struct EncodingTree {
    tree: HuffmanTree,
    frequencies: FrequencyTable,
    codes: CodeTable,
}

impl EncodingTree {
    /// Builds the tree for `bytes`. Never fails; an empty input yields the tree
    /// over symbols `0` and `1`.
    pub fn new(bytes: &[u8]) -> Self {
        Self::from_frequencies(count_frequencies(bytes))
    }

    /// Builds the tree from precomputed counts. Degenerate tables are widened to
    /// two symbols first.
    ///
    /// Merged weights saturate at `u64::MAX`; the tree stays complete but may no
    /// longer be optimal for counts that large.
    pub fn from_frequencies(mut frequencies: FrequencyTable) -> Self {
        ensure_two_symbols(&mut frequencies);
        let tree = build_tree(&frequencies);
        let codes = CodeTable::from_tree(&tree);
        EncodingTree {
            tree,
            frequencies,
            codes,
        }
    }

    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    /// Frequencies the tree was built from, including any synthetic symbol.
    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    pub fn codes(&self) -> &CodeTable {
        &self.codes
    }

    pub fn code(&self, symbol: u8) -> Option<&BitSlice<u8, Lsb0>> {
        self.codes.get(symbol)
    }

    /// Serializes the tree shape in pre-order: a leaf is `1` followed by its
    /// symbol's eight bits LSB-first, an internal node is `0` followed by its
    /// left then right subtree.
    pub fn topology(&self) -> BitVec<u8, Lsb0> {
        let mut bits = BitVec::new();
        write_topology(self.tree.root(), &mut bits);
        bits
    }

    /// Concatenates the code of every byte of `bytes`, in order.
    ///
    /// # Panics
    /// Panics if a byte has no code. `bytes` must be the buffer the tree was
    /// built from (or draw only from its symbols).
    pub fn encode_payload(&self, bytes: &[u8]) -> BitVec<u8, Lsb0> {
        let total: usize = bytes
            .iter()
            .map(|&b| self.codes.codes[b as usize].len())
            .sum();
        let mut payload = BitVec::with_capacity(total);
        for &byte in bytes {
            let code = self
                .codes
                .get(byte)
                .unwrap_or_else(|| panic!("byte {} has no code in this tree", byte));
            payload.extend_from_bitslice(code);
        }
        payload
    }
}

fn write_topology(node: &HuffNode, out: &mut BitVec<u8, Lsb0>) {
    match node {
        HuffNode::Leaf { symbol } => {
            out.push(true);
            out.extend_from_bitslice(symbol.view_bits::<Lsb0>());
        }
        HuffNode::Internal { left, right } => {
            out.push(false);
            write_topology(left, out);
            write_topology(right, out);
        }
    }
}

//==================================================================================
// 5. Unit Tests
//==================================================================================
