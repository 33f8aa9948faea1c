//! Huffman-specific error types.

use thiserror::Error;

/// Huffman compression/decompression errors.
#[derive(Debug, Error)]
pub enum HuffmanError {
    /// Compression was given an empty input buffer.
    #[error("cannot compress empty input")]
    EmptyInput,

    /// Decompression was given a container with no data.
    #[error("cannot decompress an empty container")]
    EmptyContainer,

    /// Unexpected end of data while reading a bitstream.
    #[error("unexpected end of data at bit position {position}")]
    UnexpectedEof {
        /// Bit position where the stream ran out.
        position: u64,
    },

    /// The serialized code tree in the container is not well formed.
    #[error("malformed code tree: {reason} (bit position {position})")]
    MalformedTree {
        /// What the reader found wrong with the tree bitstream.
        reason: &'static str,
        /// Bit position at which the problem was detected.
        position: u64,
    },

    /// The encoded payload ended before the recorded original size was reached.
    #[error("corrupted container: decoded {decoded} of {expected} bytes before the payload ran out")]
    CorruptedContainer {
        /// Number of bytes successfully decoded.
        decoded: usize,
        /// Number of bytes the container promised.
        expected: usize,
    },

    /// Container metadata is inconsistent with its data.
    #[error("container tree size {tree_size} exceeds total size {total_size}")]
    InvalidTreeSize {
        /// Recorded size of the serialized tree prefix.
        tree_size: usize,
        /// Actual length of the container data.
        total_size: usize,
    },
}

/// Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, HuffmanError>;
