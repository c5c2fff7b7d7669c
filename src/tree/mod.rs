// In: src/tree/mod.rs

//! The Huffman tree shared by the encoder and the decoder.
//!
//! A tree is a plain owned recursion: every `Internal` node owns exactly two
//! children and every `Leaf` holds one symbol. Frequencies are not stored in the
//! tree; they only exist in the priority queue while the encoder builds it.
//!
//! Edge convention, used on both sides: bit `0` goes left, bit `1` goes right.

pub mod decoding;
pub mod encoding;

pub use decoding::DecodingTree;
pub use encoding::{CodeTable, EncodingTree};

/// One node of a Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffNode {
    Leaf {
        symbol: u8,
    },
    Internal {
        left: Box<HuffNode>,
        right: Box<HuffNode>,
    },
}

impl HuffNode {
    pub fn leaf(symbol: u8) -> Self {
        HuffNode::Leaf { symbol }
    }

    /// Joins two subtrees under a new internal node.
    pub fn join(left: HuffNode, right: HuffNode) -> Self {
        HuffNode::Internal {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffNode::Leaf { .. })
    }

    /// The child selected by one code bit.
    ///
    /// Returns `None` on a leaf.
    pub fn child(&self, bit: bool) -> Option<&HuffNode> {
        match self {
            HuffNode::Leaf { .. } => None,
            HuffNode::Internal { left, right } => Some(if bit { &**right } else { &**left }),
        }
    }

    fn collect_symbols(&self, out: &mut Vec<u8>) {
        match self {
            HuffNode::Leaf { symbol } => out.push(*symbol),
            HuffNode::Internal { left, right } => {
                left.collect_symbols(out);
                right.collect_symbols(out);
            }
        }
    }

    fn depth(&self) -> usize {
        match self {
            HuffNode::Leaf { .. } => 0,
            HuffNode::Internal { left, right } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// Exclusive owner of a tree's root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: HuffNode,
}

impl HuffmanTree {
    pub fn new(root: HuffNode) -> Self {
        HuffmanTree { root }
    }

    pub fn root(&self) -> &HuffNode {
        &self.root
    }

    pub fn into_root(self) -> HuffNode {
        self.root
    }

    /// Leaf symbols in pre-order (left before right).
    pub fn symbols(&self) -> Vec<u8> {
        let mut symbols = Vec::new();
        self.root.collect_symbols(&mut symbols);
        symbols
    }

    pub fn leaf_count(&self) -> usize {
        self.symbols().len()
    }

    /// Length of the longest root-to-leaf path, i.e. the longest code.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Follows `code` from the root. Returns the symbol if the code ends exactly on a leaf.
    pub fn lookup<I>(&self, code: I) -> Option<u8>
    where
        I: IntoIterator<Item = bool>,
    {
        let mut node = &self.root;
        for bit in code {
            node = node.child(bit)?;
        }
        match node {
            HuffNode::Leaf { symbol } => Some(*symbol),
            HuffNode::Internal { .. } => None,
        }
    }
}
