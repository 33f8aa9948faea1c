//! Compression: tree construction, code assignment, payload encoding.

use crate::bitstream::MsbBitWriter;
use crate::codes::CodeTable;
use crate::container::Container;
use crate::error::Result;
use crate::tree::HuffTree;

/// Longest possible serialized tree in bytes: 511 shape bits plus 256 8-bit
/// leaf symbols, rounded up to a byte.
const MAX_TREE_BYTES: usize = 320;

/// Compress `input` into a self-contained [`Container`].
///
/// Builds the frequency tree, derives the code table, serializes the tree
/// into one bit buffer and the encoded payload into a second, then records
/// `{tree_size, total_size, original_size}` over the concatenated bytes. The
/// tree, the table, and both intermediate buffers are discarded before
/// returning; the container owns the only copy of the output.
pub(crate) fn compress(input: &[u8]) -> Result<Container> {
    let tree = HuffTree::build(input)?;
    let table = CodeTable::from_tree(&tree);

    let mut tree_writer = MsbBitWriter::with_capacity((2 * input.len()).min(MAX_TREE_BYTES));
    tree.serialize(&mut tree_writer);
    let mut data = tree_writer.into_vec();
    let tree_size = data.len();

    // Optimal codes average under 9 bits per symbol, so 2x the input length
    // always covers the payload.
    let mut payload_writer = MsbBitWriter::with_capacity(2 * input.len());
    for &byte in input {
        let code = table.code(byte);
        payload_writer.write_code(code.bits, code.len);
    }
    data.extend_from_slice(&payload_writer.into_vec());

    Ok(Container::new(data, tree_size, input.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HuffmanError;

    #[test]
    fn test_empty_input_is_rejected() {
        assert!(matches!(compress(&[]), Err(HuffmanError::EmptyInput)));
    }

    #[test]
    fn test_metadata_matches_layout() {
        let input = b"compressible compressible compressible";
        let container = compress(input).unwrap();

        assert_eq!(container.original_size(), input.len());
        assert_eq!(container.total_size(), container.data().len());
        assert!(container.tree_size() <= container.total_size());
    }

    #[test]
    fn test_two_symbol_container_bytes() {
        // Tree 0 1 00000001 1 00000010 (3 bytes), payload 000 11111 (1 byte).
        let input = [0x01, 0x01, 0x01, 0x02, 0x02, 0x02, 0x02, 0x02];
        let container = compress(&input).unwrap();

        assert_eq!(container.tree_size(), 3);
        assert_eq!(container.data(), &[0x40, 0x60, 0x40, 0x1F]);
    }

    #[test]
    fn test_single_symbol_sizes() {
        // Bare-leaf tree (2 bytes) plus 100 one-bit codes (13 bytes).
        let container = compress(&[0x41; 100]).unwrap();

        assert_eq!(container.tree_size(), 2);
        assert_eq!(container.total_size(), 15);
        assert_eq!(container.original_size(), 100);
    }
}
