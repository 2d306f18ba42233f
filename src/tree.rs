//! The Huffman tree itself, stored as an index arena.
//!
//! Nodes live in a flat `Vec` and point at each other by index, which sidesteps
//! ownership-cycle questions entirely: the tree is acyclic and immutable once
//! built, so plain `usize` handles are all the structure we need. A node is
//! either a leaf carrying a symbol or an internal node carrying exactly two
//! children; no other shape can be represented.
//!
//! Weights drive construction only. They live in the priority queue during the
//! merge phase and are not stored on the finished tree.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::{EOF_SYMBOL, NUM_SYMBOLS};

/// Index of a node within its owning [`HuffTree`] arena.
pub type NodeId = usize;

/// One node of the tree. Leaves carry a symbol in `0..=256`; internal nodes
/// carry two children. A one-child node cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    Leaf { symbol: u16 },
    Internal { left: NodeId, right: NodeId },
}

/// An immutable Huffman tree over the 257-symbol alphabet (256 byte values
/// plus the pseudo-EOF sentinel).
#[derive(Debug, Clone)]
pub struct HuffTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl HuffTree {
    /// Builds the tree from a weight table by repeated two-lowest merging.
    ///
    /// Every symbol with a non-zero weight becomes a leaf; the pseudo-EOF
    /// sentinel always qualifies, even from an all-zero table. Ties on weight
    /// break FIFO: among equal weights, the node inserted earliest is
    /// extracted first. Round-trip correctness never depends on the
    /// tie-break, only the compression ratio does.
    pub fn from_weights(weights: &[u64; NUM_SYMBOLS]) -> Self {
        let mut nodes = Vec::new();
        let mut heap: BinaryHeap<Reverse<(u64, usize, NodeId)>> = BinaryHeap::new();
        let mut seq = 0usize;

        for (symbol, &weight) in weights.iter().enumerate() {
            if weight > 0 || symbol == EOF_SYMBOL as usize {
                let id = nodes.len();
                nodes.push(Node::Leaf {
                    symbol: symbol as u16,
                });
                heap.push(Reverse((weight.max(1), seq, id)));
                seq += 1;
            }
        }

        while heap.len() > 1 {
            // Both pops are guarded by the loop condition, so they never fail.
            let Reverse((left_weight, _, left)) = heap.pop().unwrap();
            let Reverse((right_weight, _, right)) = heap.pop().unwrap();
            let id = nodes.len();
            nodes.push(Node::Internal { left, right });
            heap.push(Reverse((left_weight + right_weight, seq, id)));
            seq += 1;
        }

        // The sentinel leaf guarantees the heap was never empty.
        let Reverse((_, _, root)) = heap.pop().unwrap();
        Self { nodes, root }
    }

    /// Assembles a tree from nodes produced by the header reader.
    pub(crate) fn from_parts(nodes: Vec<Node>, root: NodeId) -> Self {
        debug_assert!(root < nodes.len());
        Self { nodes, root }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> Node {
        self.nodes[id]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Iterates the symbols of all leaves, in arena order.
    pub fn leaves(&self) -> impl Iterator<Item = u16> + '_ {
        self.nodes.iter().filter_map(|node| match node {
            Node::Leaf { symbol } => Some(*symbol),
            Node::Internal { .. } => None,
        })
    }
}
