// In: src/tree/decoding.rs

//! Decoder-side tree reconstruction and the symbol decoder.
//!
//! The topology is parsed by recursive descent over an explicit bit cursor. The
//! stream never records where the topology ends; the cursor position after the
//! parse is that boundary, and payload decoding continues from it.

use bitvec::prelude::*;

use super::{HuffNode, HuffmanTree};
use crate::error::HuffpackError;
use crate::kernels::bitpack::{load_byte, BITS_IN_BYTE};

/// Deepest level a tree over at most 256 symbols can reach.
pub const MAX_TREE_DEPTH: usize = 255;

//==================================================================================
// 1. Bit Cursor
//==================================================================================

/// A read position into a bit slice, advanced by every read.
#[derive(Debug, Clone)]
struct BitCursor<'a> {
    bits: &'a BitSlice<u8, Lsb0>,
    position: usize,
}

impl<'a> BitCursor<'a> {
    fn new(bits: &'a BitSlice<u8, Lsb0>) -> Self {
        BitCursor { bits, position: 0 }
    }

    fn read_bit(&mut self) -> Option<bool> {
        let bit = *self.bits.get(self.position)?;
        self.position += 1;
        Some(bit)
    }

    fn read_byte(&mut self) -> Option<u8> {
        let end = self.position + BITS_IN_BYTE;
        let byte = load_byte(self.bits.get(self.position..end)?);
        self.position = end;
        Some(byte)
    }

    fn is_eof(&self) -> bool {
        self.position >= self.bits.len()
    }
}

fn truncated_topology() -> HuffpackError {
    HuffpackError::CorruptStream("truncated tree topology".to_string())
}

fn read_node(cursor: &mut BitCursor<'_>, depth: usize) -> Result<HuffNode, HuffpackError> {
    if depth > MAX_TREE_DEPTH {
        return Err(HuffpackError::CorruptStream(format!(
            "tree topology nests deeper than {} levels",
            MAX_TREE_DEPTH
        )));
    }

    if cursor.read_bit().ok_or_else(truncated_topology)? {
        let symbol = cursor.read_byte().ok_or_else(truncated_topology)?;
        return Ok(HuffNode::leaf(symbol));
    }

    let left = read_node(cursor, depth + 1)?;
    let right = read_node(cursor, depth + 1)?;
    Ok(HuffNode::join(left, right))
}

//==================================================================================
// 2. Public API
//==================================================================================

/// A tree rebuilt from a topology prefix, together with the cursor that keeps
/// reading the payload behind it.
#[derive(Debug, Clone)]
pub struct DecodingTree<'a> {
    tree: HuffmanTree,
    cursor: BitCursor<'a>,
}

impl<'a> DecodingTree<'a> {
    /// Parses the topology at the start of `bits`.
    ///
    /// # Errors
    /// Returns `CorruptStream` if the topology is cut short, nests too deep, or
    /// describes a lone leaf (which could never consume a payload bit).
    pub fn new(bits: &'a BitSlice<u8, Lsb0>) -> Result<Self, HuffpackError> {
        let mut cursor = BitCursor::new(bits);
        let root = read_node(&mut cursor, 0)?;
        if root.is_leaf() {
            return Err(HuffpackError::CorruptStream(
                "tree topology must describe at least two leaves".to_string(),
            ));
        }

        Ok(DecodingTree {
            tree: HuffmanTree::new(root),
            cursor,
        })
    }

    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    pub fn into_tree(self) -> HuffmanTree {
        self.tree
    }

    /// Current bit position. Right after `new` this is the length of the topology.
    pub fn position(&self) -> usize {
        self.cursor.position
    }

    /// Bits left behind the cursor.
    pub fn remaining(&self) -> usize {
        self.cursor.bits.len().saturating_sub(self.cursor.position)
    }

    pub fn is_eof(&self) -> bool {
        self.cursor.is_eof()
    }

    /// Walks from the root along the next payload bits and returns the leaf's symbol.
    ///
    /// # Errors
    /// Returns `CorruptStream` if the bits run out before a leaf is reached.
    pub fn decode_symbol(&mut self) -> Result<u8, HuffpackError> {
        let mut node = self.tree.root();
        loop {
            match node {
                HuffNode::Leaf { symbol } => return Ok(*symbol),
                HuffNode::Internal { left, right } => {
                    let bit = self.cursor.read_bit().ok_or_else(|| {
                        HuffpackError::CorruptStream(
                            "truncated payload, stream ended inside a code".to_string(),
                        )
                    })?;
                    node = if bit { right } else { left };
                }
            }
        }
    }
}

//==================================================================================
// 3. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf_bits(symbol: u8, out: &mut BitVec<u8, Lsb0>) {
        out.push(true);
        out.extend_from_bitslice(symbol.view_bits::<Lsb0>());
    }

    #[test]
    fn test_parse_three_leaf_topology() {
        // (('b', 'c'), 'a')
        let mut bits = bitvec![u8, Lsb0; 0, 0];
        leaf_bits(b'b', &mut bits);
        leaf_bits(b'c', &mut bits);
        leaf_bits(b'a', &mut bits);

        let decoder = DecodingTree::new(&bits).unwrap();
        let expected = HuffNode::join(
            HuffNode::join(HuffNode::leaf(b'b'), HuffNode::leaf(b'c')),
            HuffNode::leaf(b'a'),
        );
        assert_eq!(decoder.tree().root(), &expected);
        assert_eq!(decoder.position(), 2 + 3 * 9);
        assert!(decoder.is_eof());
    }

    #[test]
    fn test_cursor_stops_at_payload_boundary() {
        let mut bits = bitvec![u8, Lsb0; 0];
        leaf_bits(7, &mut bits);
        leaf_bits(9, &mut bits);
        bits.extend_from_bitslice(bits![u8, Lsb0; 1, 0, 0]);

        let mut decoder = DecodingTree::new(&bits).unwrap();
        assert_eq!(decoder.position(), 19);
        assert_eq!(decoder.remaining(), 3);

        assert_eq!(decoder.decode_symbol().unwrap(), 9);
        assert_eq!(decoder.decode_symbol().unwrap(), 7);
        assert_eq!(decoder.decode_symbol().unwrap(), 7);
        assert!(decoder.is_eof());
    }

    #[test]
    fn test_truncated_topology_is_rejected() {
        let mut bits = bitvec![u8, Lsb0; 0];
        leaf_bits(7, &mut bits);
        bits.extend_from_bitslice(bits![u8, Lsb0; 1, 0, 1]);

        let err = DecodingTree::new(&bits).unwrap_err();
        assert!(err.to_string().contains("truncated tree topology"));
    }

    #[test]
    fn test_single_leaf_topology_is_rejected() {
        let mut bits = BitVec::<u8, Lsb0>::new();
        leaf_bits(42, &mut bits);
        assert!(matches!(
            DecodingTree::new(&bits),
            Err(HuffpackError::CorruptStream(_))
        ));
    }

    #[test]
    fn test_runaway_nesting_is_rejected() {
        let bits = BitVec::<u8, Lsb0>::repeat(false, MAX_TREE_DEPTH + 2);
        let err = DecodingTree::new(&bits).unwrap_err();
        assert!(err.to_string().contains("deeper"));
    }

    #[test]
    fn test_payload_ending_inside_a_code() {
        // (('b', 'c'), 'a'): 'b' is 00, so a lone 0 is half a code.
        let mut bits = bitvec![u8, Lsb0; 0, 0];
        leaf_bits(b'b', &mut bits);
        leaf_bits(b'c', &mut bits);
        leaf_bits(b'a', &mut bits);
        bits.push(false);

        let mut decoder = DecodingTree::new(&bits).unwrap();
        let err = decoder.decode_symbol().unwrap_err();
        assert!(err.to_string().contains("truncated payload"));
    }
}
