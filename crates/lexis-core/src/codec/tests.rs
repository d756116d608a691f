//! Tests for the node block codec.

use super::*;
use crate::error::Error;

fn block(value: char, depth: u32, weight: u32) -> NodeBlock {
    NodeBlock {
        value,
        end_of_word: false,
        has_child: weight > 1,
        has_sibling: false,
        weight,
        depth,
        postings: BlockLocator::NONE,
    }
}

// ========== Block Encoding ==========

#[test]
fn test_block_encode_decode() {
    // Arrange
    let original = NodeBlock {
        value: 'é',
        end_of_word: true,
        has_child: true,
        has_sibling: true,
        weight: 7,
        depth: 3,
        postings: BlockLocator::new(u64::MAX - 1, 4096),
    };

    // Act
    let bytes = original.encode();
    let decoded = NodeBlock::decode(&bytes).unwrap();

    // Assert
    assert_eq!(bytes.len(), BLOCK_SIZE);
    assert_eq!(bytes[BLOCK_SIZE - 1], BLOCK_TERMINATOR);
    assert_eq!(decoded, original);
}

#[test]
fn test_block_layout_is_little_endian() {
    let bytes = block('A', 2, 1).encode();

    assert_eq!(&bytes[0..4], &[0x41, 0, 0, 0]);
    assert_eq!(bytes[4], 0);
    assert_eq!(&bytes[8..12], &[1, 0, 0, 0]);
    assert_eq!(&bytes[12..16], &[2, 0, 0, 0]);
}

#[test]
fn test_postings_offset_uses_all_eight_bytes() {
    // Arrange
    let mut original = block('z', 1, 1);
    original.end_of_word = true;
    original.postings = BlockLocator::new(0x0123_4567_89AB_CDEF, 7);

    // Act
    let bytes = original.encode();
    let decoded = NodeBlock::decode(&bytes).unwrap();

    // Assert
    assert_eq!(&bytes[16..24], &[0xEF, 0xCD, 0xAB, 0x89, 0x67, 0x45, 0x23, 0x01]);
    assert_eq!(&bytes[24..28], &[7, 0, 0, 0]);
    assert_eq!(decoded.postings, original.postings);
}

#[test]
fn test_decode_rejects_wrong_width() {
    let bytes = block('a', 0, 1).encode();

    assert!(matches!(
        NodeBlock::decode(&bytes[..BLOCK_SIZE - 1]),
        Err(Error::CorruptData(_))
    ));
    let mut long = bytes.to_vec();
    long.push(0);
    assert!(matches!(NodeBlock::decode(&long), Err(Error::CorruptData(_))));
}

#[test]
fn test_decode_rejects_bad_terminator() {
    let mut bytes = block('a', 0, 1).encode();
    bytes[BLOCK_SIZE - 1] = b'\n';

    let err = NodeBlock::decode(&bytes).unwrap_err();

    assert!(err.to_string().contains("terminator"));
}

#[test]
fn test_decode_rejects_unknown_flags() {
    let mut bytes = block('a', 0, 1).encode();
    bytes[4] = 0b1000;

    assert!(matches!(NodeBlock::decode(&bytes), Err(Error::CorruptData(_))));
}

#[test]
fn test_decode_rejects_reserved_bytes() {
    let mut bytes = block('a', 0, 1).encode();
    bytes[29] = 1;

    assert!(matches!(NodeBlock::decode(&bytes), Err(Error::CorruptData(_))));
}

#[test]
fn test_decode_rejects_surrogate_value() {
    let mut bytes = block('a', 0, 1).encode();
    bytes[0..4].copy_from_slice(&0xD800u32.to_le_bytes());

    assert!(matches!(NodeBlock::decode(&bytes), Err(Error::CorruptData(_))));
}

#[test]
fn test_decode_rejects_zero_weight() {
    let mut bytes = block('a', 0, 1).encode();
    bytes[8..12].copy_from_slice(&0u32.to_le_bytes());

    assert!(matches!(NodeBlock::decode(&bytes), Err(Error::CorruptData(_))));
}

#[test]
fn test_decode_rejects_weight_child_mismatch() {
    // Leaf flags with a weight claiming descendants
    let mut bytes = block('a', 0, 1).encode();
    bytes[8..12].copy_from_slice(&5u32.to_le_bytes());

    assert!(matches!(NodeBlock::decode(&bytes), Err(Error::CorruptData(_))));
}

// ========== Trie Encoding ==========

#[test]
fn test_encode_empty_trie() {
    let trie = LcrsTrie::new();
    assert!(encode(&trie).unwrap().is_empty());
}

#[test]
fn test_encode_single_chain() {
    // Arrange
    let trie = LcrsTrie::from_terms(["abc"]).unwrap();

    // Act
    let blocks = encode(&trie).unwrap();

    // Assert
    let shape: Vec<(char, u32, u32, bool)> = blocks
        .iter()
        .map(|b| (b.value, b.depth, b.weight, b.end_of_word))
        .collect();
    assert_eq!(
        shape,
        vec![('a', 0, 3, false), ('b', 1, 2, false), ('c', 2, 1, true)]
    );
}

#[test]
fn test_encode_order_is_node_then_children_then_sibling() {
    // Arrange
    let trie = LcrsTrie::from_terms(["cat", "car", "cart", "dog"]).unwrap();

    // Act
    let blocks = encode(&trie).unwrap();

    // Assert - every block is followed by its subtree, then its sibling
    assert_eq!(blocks.len(), trie.node_count());
    for (i, b) in blocks.iter().enumerate() {
        let end = i + b.weight as usize;
        assert!(end <= blocks.len());
        for inner in &blocks[i + 1..end] {
            assert!(inner.depth > b.depth, "subtree block above its root");
        }
        if let Some(next) = blocks.get(end) {
            assert!(next.depth <= b.depth, "block after subtree still inside it");
            if b.has_sibling {
                assert_eq!(next.depth, b.depth);
            }
        } else {
            assert!(!b.has_sibling);
        }
        if b.has_child {
            assert_eq!(blocks[i + 1].depth, b.depth + 1);
        }
    }
}

#[test]
fn test_encode_root_weights_cover_stream() {
    let trie = LcrsTrie::from_terms(["cat", "car", "cart", "dog"]).unwrap();
    let blocks = encode(&trie).unwrap();

    let top_level: u32 = blocks
        .iter()
        .filter(|b| b.depth == 0)
        .map(|b| b.weight)
        .sum();

    assert_eq!(top_level as usize, blocks.len());
}

#[test]
fn test_encode_keeps_postings_on_terminal_blocks() {
    // Arrange
    let mut trie = LcrsTrie::new();
    trie.insert("ab", BlockLocator::new(10, 20)).unwrap();

    // Act
    let blocks = encode(&trie).unwrap();

    // Assert
    assert_eq!(blocks[0].postings, BlockLocator::NONE);
    assert_eq!(blocks[1].postings, BlockLocator::new(10, 20));
}

#[test]
fn test_write_blocks_matches_encode() {
    // Arrange
    let trie = LcrsTrie::from_terms(["alpha", "alps", "beta"]).unwrap();
    let mut buf = Vec::new();

    // Act
    let count = write_blocks(&trie, &mut buf).unwrap();

    // Assert
    assert_eq!(count as usize, trie.node_count());
    assert_eq!(buf.len(), trie.node_count() * BLOCK_SIZE);
    assert_eq!(decode_all(&buf).unwrap(), encode(&trie).unwrap());
}

#[test]
fn test_decode_all_rejects_partial_block() {
    let trie = LcrsTrie::from_terms(["ab"]).unwrap();
    let mut buf = Vec::new();
    write_blocks(&trie, &mut buf).unwrap();
    buf.pop();

    assert!(matches!(decode_all(&buf), Err(Error::CorruptData(_))));
}
