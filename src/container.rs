//! The self-contained compression result: serialized tree plus payload.

use crate::error::{HuffmanError, Result};

/// Output of [`compress`](crate::compress): the serialized code tree and the
/// encoded payload in one byte buffer, plus the metadata needed to undo it.
///
/// Layout of the data buffer:
///
/// ```text
/// [0 .. tree_size)          serialized tree bitstream, zero-padded to a byte
/// [tree_size .. total_size) encoded symbol stream, zero-padded to a byte
/// ```
///
/// The original size is recorded because the payload's final byte may carry
/// padding bits with no meaning. There is no magic number or version tag; a
/// caller persisting a container must store `tree_size` and `original_size`
/// alongside the bytes and use [`Container::from_parts`] to rebuild it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    data: Vec<u8>,
    tree_size: usize,
    original_size: usize,
}

impl Container {
    pub(crate) fn new(data: Vec<u8>, tree_size: usize, original_size: usize) -> Self {
        debug_assert!(tree_size <= data.len());
        Self {
            data,
            tree_size,
            original_size,
        }
    }

    /// Rebuild a container from externally stored parts.
    ///
    /// # Errors
    ///
    /// Returns [`HuffmanError::InvalidTreeSize`] when `tree_size` exceeds the
    /// length of `data`.
    pub fn from_parts(data: Vec<u8>, tree_size: usize, original_size: usize) -> Result<Self> {
        if tree_size > data.len() {
            return Err(HuffmanError::InvalidTreeSize {
                tree_size,
                total_size: data.len(),
            });
        }
        Ok(Self {
            data,
            tree_size,
            original_size,
        })
    }

    /// Serialized tree followed by the encoded payload.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Total container size in bytes: tree plus payload.
    pub fn total_size(&self) -> usize {
        self.data.len()
    }

    /// Size of the serialized tree prefix in bytes.
    pub fn tree_size(&self) -> usize {
        self.tree_size
    }

    /// Exact byte length of the original, uncompressed input.
    pub fn original_size(&self) -> usize {
        self.original_size
    }

    /// Consume the container and return its backing bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}
