//! # huffpack: Pure Rust byte-oriented Huffman compression
//!
//! This crate compresses an arbitrary byte buffer into a self-contained
//! [`Container`] and losslessly reconstructs the original bytes from it.
//!
//! ## Features
//!
//! - **Pure Rust**: no C dependencies, `#![forbid(unsafe_code)]`
//! - **Self-describing**: the code tree travels inside the container, so no
//!   external metadata is needed to decompress
//! - **Deterministic**: equal-frequency ties break by symbol insertion
//!   order, so the same input always produces the same bytes
//! - **Corruption detection**: a payload that ends before the recorded
//!   original size is an error, never a silently short result
//!
//! ## Container format
//!
//! ```text
//! [0 .. tree_size)          serialized tree bitstream, MSB-first, zero-padded
//! [tree_size .. total_size) encoded symbol stream, MSB-first, zero-padded
//! ```
//!
//! The tree bitstream is a pre-order description of the code tree:
//!
//! ```text
//! leaf := '1' symbol(8 bits, MSB-first)
//! node := '0' (leaf|node) (leaf|node)    -- left subtree, then right
//! ```
//!
//! The grammar is self-terminating, so no node count is stored. Symbol codes
//! are the left-0/right-1 paths from the root, which makes them prefix-free
//! without delimiters.
//!
//! ## Example
//!
//! ```rust
//! let original = b"abracadabra abracadabra abracadabra";
//!
//! let container = huffpack::compress(original).unwrap();
//! assert_eq!(container.original_size(), original.len());
//!
//! let restored = huffpack::decompress(&container).unwrap();
//! assert_eq!(restored, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod bitstream;
mod codes;
mod container;
mod decoder;
mod encoder;
mod error;
mod heap;
mod tree;

pub use container::Container;
pub use error::{HuffmanError, Result};

/// Compress `input` into a self-contained [`Container`].
///
/// # Errors
///
/// Returns [`HuffmanError::EmptyInput`] when `input` is empty; there is
/// nothing meaningful to encode and no tree to build.
///
/// # Example
///
/// ```rust
/// let container = huffpack::compress(b"hello huffman").unwrap();
/// assert!(container.tree_size() < container.total_size());
/// ```
pub fn compress(input: &[u8]) -> Result<Container> {
    encoder::compress(input)
}

/// Decompress a [`Container`] back into the original bytes.
///
/// # Errors
///
/// - [`HuffmanError::EmptyContainer`] when the container holds no data
/// - [`HuffmanError::UnexpectedEof`] / [`HuffmanError::MalformedTree`] when
///   the serialized tree cannot be rebuilt
/// - [`HuffmanError::CorruptedContainer`] when the payload ends before
///   `original_size` bytes have been decoded
///
/// # Example
///
/// ```rust
/// let container = huffpack::compress(b"round trip").unwrap();
/// let restored = huffpack::decompress(&container).unwrap();
/// assert_eq!(restored, b"round trip");
/// ```
pub fn decompress(container: &Container) -> Result<Vec<u8>> {
    decoder::decompress(container)
}
