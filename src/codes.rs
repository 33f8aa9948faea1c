//! Per-symbol code table derived from a Huffman tree.

use crate::tree::{ALPHABET_SIZE, HuffTree};

/// A single codeword: the low `len` bits of `bits`, most significant first.
///
/// `bits` is 64 wide rather than 32 because a few megabytes of adversarially
/// skewed input (Fibonacci-like frequencies) can legally push a rare symbol
/// past depth 32; no input that fits in memory can exceed depth 64.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Code {
    /// The codeword bits, right-aligned.
    pub(crate) bits: u64,
    /// Codeword length in bits; 0 marks an unused symbol.
    pub(crate) len: u8,
}

/// Maps every byte value to its codeword.
///
/// Codes are prefix-free by construction: each is the left-0/right-1 path
/// from the root to the symbol's leaf. Symbols absent from the input keep
/// `len == 0` and must never be looked up by the encoder.
#[derive(Debug)]
pub(crate) struct CodeTable {
    codes: [Code; ALPHABET_SIZE],
}

impl CodeTable {
    /// Walk the tree and record (path bits, depth) for every leaf.
    pub(crate) fn from_tree(tree: &HuffTree) -> Self {
        let mut codes = [Code::default(); ALPHABET_SIZE];

        let root = tree.node(tree.root());
        if root.is_leaf() {
            // Bare-leaf root: one bit per occurrence.
            codes[root.symbol as usize] = Code { bits: 0, len: 1 };
            return Self { codes };
        }

        let mut stack = vec![(tree.root(), 0u64, 0u8)];
        while let Some((id, bits, depth)) = stack.pop() {
            let node = tree.node(id);
            if node.is_leaf() {
                codes[node.symbol as usize] = Code { bits, len: depth };
                continue;
            }
            if let Some(right) = node.right {
                stack.push((right, (bits << 1) | 1, depth + 1));
            }
            if let Some(left) = node.left {
                stack.push((left, bits << 1, depth + 1));
            }
        }

        Self { codes }
    }

    /// Codeword for `symbol`.
    #[inline]
    pub(crate) fn code(&self, symbol: u8) -> Code {
        self.codes[symbol as usize]
    }
}
