//! Huffman tree construction and bit-level tree serialization.
//!
//! Nodes live in an index-addressed arena owned by [`HuffTree`]: each node
//! refers to its children by arena index, the tree holds the root index, and
//! dropping the tree drops every node with it. A leaf has no children; an
//! internal node carries the summed weight of its two subtrees.
//!
//! The serialized form is a pre-order bitstream: `1` followed by the 8-bit
//! symbol for a leaf, `0` followed by the left then the right subtree for an
//! internal node. The grammar is self-terminating, so no node count is
//! stored. Both directions walk with explicit stacks.

use crate::bitstream::{MsbBitReader, MsbBitWriter};
use crate::error::{HuffmanError, Result};
use crate::heap::BoundedMinHeap;

/// Number of distinct byte values.
pub(crate) const ALPHABET_SIZE: usize = 256;

/// Upper bound on arena size: 256 leaves plus 255 internal nodes, with one
/// slot to spare for the synthesized single-symbol root.
const MAX_NODES: usize = 2 * ALPHABET_SIZE;

/// Arena index of a node.
pub(crate) type NodeId = u16;

/// One node of the Huffman tree.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Node {
    /// Byte value; meaningful only for leaves.
    pub(crate) symbol: u8,
    /// Occurrence count, summed for internal nodes. Left at zero after
    /// deserialization; weights play no role once the tree exists.
    pub(crate) weight: u64,
    /// Left child (the 0 branch).
    pub(crate) left: Option<NodeId>,
    /// Right child (the 1 branch).
    pub(crate) right: Option<NodeId>,
}

impl Node {
    fn leaf(symbol: u8, weight: u64) -> Self {
        Self {
            symbol,
            weight,
            left: None,
            right: None,
        }
    }

    fn internal(weight: u64, left: NodeId, right: Option<NodeId>) -> Self {
        Self {
            symbol: 0,
            weight,
            left: Some(left),
            right,
        }
    }

    /// Whether this node holds a symbol rather than children.
    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Heap entry ordering nodes by weight, then by insertion order.
///
/// The sequence number makes equal-weight merges FIFO, so the tree shape and
/// therefore the compressed bitstream are deterministic for a given input.
/// Round-trip correctness never depends on this; only output stability does.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct HeapEntry {
    weight: u64,
    seq: u16,
    node: NodeId,
}

/// An owned Huffman tree backed by a node arena.
#[derive(Debug)]
pub(crate) struct HuffTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl HuffTree {
    /// Build an optimal prefix-code tree over the byte frequencies of `input`.
    ///
    /// Repeatedly merges the two lowest-weight nodes until one remains; leaf
    /// depth then equals the optimal codeword length for that symbol. A lone
    /// distinct symbol is wrapped under a synthesized internal root so it
    /// still sits at depth 1 and receives a one-bit code.
    pub(crate) fn build(input: &[u8]) -> Result<Self> {
        if input.is_empty() {
            return Err(HuffmanError::EmptyInput);
        }

        let mut frequencies = [0u64; ALPHABET_SIZE];
        for &byte in input {
            frequencies[byte as usize] += 1;
        }

        let mut nodes = Vec::with_capacity(MAX_NODES);
        let mut heap = BoundedMinHeap::with_capacity(ALPHABET_SIZE);
        let mut seq: u16 = 0;

        for (symbol, &weight) in frequencies.iter().enumerate() {
            if weight > 0 {
                let id = nodes.len() as NodeId;
                nodes.push(Node::leaf(symbol as u8, weight));
                heap.push(HeapEntry { weight, seq, node: id });
                seq += 1;
            }
        }

        if heap.len() == 1 {
            let only = heap.pop().expect("heap holds exactly one entry");
            let root = nodes.len() as NodeId;
            nodes.push(Node::internal(only.weight, only.node, None));
            return Ok(Self { nodes, root });
        }

        while heap.len() > 1 {
            let first = heap.pop().expect("heap holds at least two entries");
            let second = heap.pop().expect("heap holds at least two entries");
            let weight = first.weight + second.weight;

            let id = nodes.len() as NodeId;
            nodes.push(Node::internal(weight, first.node, Some(second.node)));
            heap.push(HeapEntry { weight, seq, node: id });
            seq += 1;
        }

        let root = heap.pop().expect("merging leaves exactly one root").node;
        Ok(Self { nodes, root })
    }

    /// Arena index of the root node.
    pub(crate) fn root(&self) -> NodeId {
        self.root
    }

    /// Look up a node by arena index.
    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id as usize]
    }

    /// Serialize the tree shape and leaf symbols into `writer`, pre-order.
    ///
    /// The synthesized single-symbol wrapper is emitted as its bare leaf: a
    /// one-child internal node has no representation in the grammar, and the
    /// decoder's bare-leaf handling reproduces the same single-bit codes.
    pub(crate) fn serialize(&self, writer: &mut MsbBitWriter) {
        let root = self.node(self.root);
        let start = match (root.left, root.right) {
            (Some(left), None) => left,
            _ => self.root,
        };

        let mut stack = vec![start];
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            if node.is_leaf() {
                writer.write_bit(true);
                writer.write_bits(node.symbol as u16, 8);
            } else {
                writer.write_bit(false);
                // Right is pushed first so the left subtree is emitted first.
                if let Some(right) = node.right {
                    stack.push(right);
                }
                if let Some(left) = node.left {
                    stack.push(left);
                }
            }
        }
    }

    /// Rebuild a tree from its pre-order bitstream.
    ///
    /// Mirrors [`HuffTree::serialize`] exactly: children are read left before
    /// right, and the stream alone tells the reader when each subtree ends.
    /// The arena is bounded at twice the alphabet size to reject streams that
    /// describe impossibly large trees.
    pub(crate) fn deserialize(reader: &mut MsbBitReader<'_>) -> Result<Self> {
        enum Pending {
            Left(NodeId),
            Right(NodeId),
        }

        if reader.read_bit()? {
            let symbol = reader.read_bits(8)? as u8;
            return Ok(Self {
                nodes: vec![Node::leaf(symbol, 0)],
                root: 0,
            });
        }

        let mut nodes = vec![Node {
            symbol: 0,
            weight: 0,
            left: None,
            right: None,
        }];
        let mut stack = vec![Pending::Right(0), Pending::Left(0)];

        while let Some(slot) = stack.pop() {
            if nodes.len() >= MAX_NODES {
                return Err(HuffmanError::MalformedTree {
                    reason: "more nodes than the byte alphabet permits",
                    position: reader.bits_read(),
                });
            }

            let id = nodes.len() as NodeId;
            if reader.read_bit()? {
                let symbol = reader.read_bits(8)? as u8;
                nodes.push(Node::leaf(symbol, 0));
            } else {
                nodes.push(Node {
                    symbol: 0,
                    weight: 0,
                    left: None,
                    right: None,
                });
                stack.push(Pending::Right(id));
                stack.push(Pending::Left(id));
            }

            match slot {
                Pending::Left(parent) => nodes[parent as usize].left = Some(id),
                Pending::Right(parent) => nodes[parent as usize].right = Some(id),
            }
        }

        Ok(Self { nodes, root: 0 })
    }
}
