//! This module is the wire codec for the tree header. It is the single source
//! of truth for how a tree is serialized into the stream and reconstructed
//! from it.
//!
//! The encoding is preorder and self-delimiting: a leaf is a `1` bit followed
//! by a 9-bit symbol field, an internal node is a `0` bit followed by its left
//! then right subtree. The leaf/internal markers bound the recursion, so no
//! node count or length field is transmitted.

use crate::bitio::{BitReader, BitWriter};
use crate::error::HuffError;
use crate::tree::{HuffTree, Node, NodeId};
use crate::{BITS_PER_SYMBOL, EOF_SYMBOL, NUM_SYMBOLS};

/// A well-formed tree over a 257-symbol alphabet never nests deeper than its
/// leaf count; anything deeper is hostile input, not a tree we could have
/// written.
const MAX_DEPTH: usize = NUM_SYMBOLS;

//==================================================================================
// 1. Write Path
//==================================================================================

/// Serializes `tree` in preorder. Recursion is bounded by the alphabet size
/// for any tree built by this crate.
pub fn write_tree(tree: &HuffTree, out: &mut BitWriter) {
    write_node(tree, tree.root(), out);
}

fn write_node(tree: &HuffTree, id: NodeId, out: &mut BitWriter) {
    match tree.node(id) {
        Node::Leaf { symbol } => {
            out.write_bit(true);
            out.write_bits(BITS_PER_SYMBOL, u32::from(symbol));
        }
        Node::Internal { left, right } => {
            out.write_bit(false);
            write_node(tree, left, out);
            write_node(tree, right, out);
        }
    }
}

//==================================================================================
// 2. Read Path
//==================================================================================

/// Reconstructs a tree from its preorder encoding, leaving the reader
/// positioned on the first data bit.
///
/// Rejects input that decodes into something no encoder could have produced:
/// out-of-range symbols, duplicate leaves, a missing pseudo-EOF leaf, or
/// nesting past [`MAX_DEPTH`].
pub fn read_tree(input: &mut BitReader) -> Result<HuffTree, HuffError> {
    let mut nodes = Vec::new();
    let mut seen = [false; NUM_SYMBOLS];
    let root = read_node(input, &mut nodes, &mut seen, 0)?;
    if !seen[EOF_SYMBOL as usize] {
        return Err(HuffError::MalformedTree(
            "tree has no pseudo-EOF leaf".to_string(),
        ));
    }
    Ok(HuffTree::from_parts(nodes, root))
}

fn read_node(
    input: &mut BitReader,
    nodes: &mut Vec<Node>,
    seen: &mut [bool; NUM_SYMBOLS],
    depth: usize,
) -> Result<NodeId, HuffError> {
    if depth > MAX_DEPTH {
        return Err(HuffError::MalformedTree(format!(
            "nesting exceeds depth {MAX_DEPTH}"
        )));
    }

    let marker = input.read_bit().ok_or_else(|| {
        HuffError::TruncatedHeader("input ended at a node marker bit".to_string())
    })?;

    if marker {
        let symbol = input.read_bits(BITS_PER_SYMBOL).ok_or_else(|| {
            HuffError::TruncatedHeader("input ended inside a symbol field".to_string())
        })?;
        let symbol = symbol as usize;
        if symbol >= NUM_SYMBOLS {
            return Err(HuffError::MalformedTree(format!(
                "symbol {symbol} out of range"
            )));
        }
        if seen[symbol] {
            return Err(HuffError::MalformedTree(format!(
                "duplicate leaf for symbol {symbol}"
            )));
        }
        seen[symbol] = true;
        let id = nodes.len();
        nodes.push(Node::Leaf {
            symbol: symbol as u16,
        });
        Ok(id)
    } else {
        let left = read_node(input, nodes, seen, depth + 1)?;
        let right = read_node(input, nodes, seen, depth + 1)?;
        let id = nodes.len();
        nodes.push(Node::Internal { left, right });
        Ok(id)
    }
}
