//! Decompression: tree reconstruction and bit-driven tree walking.

use crate::bitstream::MsbBitReader;
use crate::container::Container;
use crate::error::{HuffmanError, Result};
use crate::tree::HuffTree;

/// Decompress `container` back into the original bytes.
///
/// Deserializes the code tree from bit offset 0, then walks it one payload
/// bit at a time starting at byte offset `tree_size`: left on 0, right on 1,
/// emitting a symbol and resetting to the root at each leaf, until
/// `original_size` symbols have been produced. A payload that runs out first
/// is reported as [`HuffmanError::CorruptedContainer`] rather than returned
/// short.
pub(crate) fn decompress(container: &Container) -> Result<Vec<u8>> {
    let data = container.data();
    if data.is_empty() {
        return Err(HuffmanError::EmptyContainer);
    }

    let mut tree_reader = MsbBitReader::new(data);
    let tree = HuffTree::deserialize(&mut tree_reader)?;

    let tree_bytes = tree_reader.bits_read().div_ceil(8) as usize;
    if tree_bytes > container.tree_size() {
        return Err(HuffmanError::MalformedTree {
            reason: "tree overruns its recorded size",
            position: tree_reader.bits_read(),
        });
    }

    let expected = container.original_size();
    let root = tree.node(tree.root());

    // Bare-leaf root: every occurrence is the same symbol, so no payload
    // bits need consuming.
    if root.is_leaf() {
        return Ok(vec![root.symbol; expected]);
    }

    let mut reader = MsbBitReader::new(&data[container.tree_size()..]);
    let mut output = Vec::with_capacity(expected);
    let mut current = tree.root();

    while output.len() < expected {
        let bit = match reader.read_bit() {
            Ok(bit) => bit,
            Err(HuffmanError::UnexpectedEof { .. }) => {
                return Err(HuffmanError::CorruptedContainer {
                    decoded: output.len(),
                    expected,
                });
            }
            Err(e) => return Err(e),
        };

        let node = tree.node(current);
        let branch = if bit { node.right } else { node.left };
        let Some(next) = branch else {
            return Err(HuffmanError::MalformedTree {
                reason: "walk reached a missing child",
                position: reader.bits_read(),
            });
        };

        let next_node = tree.node(next);
        if next_node.is_leaf() {
            output.push(next_node.symbol);
            current = tree.root();
        } else {
            current = next;
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::compress;

    #[test]
    fn test_empty_container_is_rejected() {
        let container = Container::from_parts(Vec::new(), 0, 0).unwrap();
        assert!(matches!(
            decompress(&container),
            Err(HuffmanError::EmptyContainer)
        ));
    }

    #[test]
    fn test_bare_leaf_container_from_parts() {
        // A hand-built container whose tree is the bare leaf 'A': the
        // decoder emits the symbol original_size times without touching
        // the (absent) payload.
        let container = Container::from_parts(vec![0xA0, 0x80], 2, 5).unwrap();
        assert_eq!(decompress(&container).unwrap(), b"AAAAA");
    }

    #[test]
    fn test_truncated_payload_is_detected() {
        let input = b"a moderately repetitive input, repetitive input";
        let full = compress(input).unwrap();

        let mut data = full.data().to_vec();
        data.truncate(data.len() - 2);
        let truncated =
            Container::from_parts(data, full.tree_size(), full.original_size()).unwrap();

        match decompress(&truncated) {
            Err(HuffmanError::CorruptedContainer { decoded, expected }) => {
                assert!(decoded < expected);
                assert_eq!(expected, input.len());
            }
            other => panic!("expected CorruptedContainer, got {other:?}"),
        }
    }

    #[test]
    fn test_tree_size_smaller_than_tree_is_detected() {
        let input = b"abcabcabc";
        let full = compress(input).unwrap();

        // Claim the tree prefix is a single byte; the deserialized tree
        // provably needs more.
        let forged =
            Container::from_parts(full.data().to_vec(), 1, full.original_size()).unwrap();
        assert!(matches!(
            decompress(&forged),
            Err(HuffmanError::MalformedTree { .. })
        ));
    }

    #[test]
    fn test_garbage_tree_is_rejected() {
        let container = Container::from_parts(vec![0x00; 128], 128, 16).unwrap();
        assert!(matches!(
            decompress(&container),
            Err(HuffmanError::MalformedTree { .. })
        ));
    }
}
