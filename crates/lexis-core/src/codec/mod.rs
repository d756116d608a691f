//! Node block codec.
//!
//! Flattens an [`LcrsTrie`] into a sequence of fixed-width [`NodeBlock`]s in
//! left-biased, node-before-children depth-first order: a node is emitted,
//! then its left child's whole subtree, then its right sibling. That order
//! plus the `weight` and `depth` fields is everything the
//! [`StreamingTrieReader`](crate::reader::StreamingTrieReader) needs to
//! navigate forward-only; there is no header or index.
//!
//! # Stream Format
//!
//! ```text
//! [Block 0: root's first child, depth 0] [Block 1] ... [Block N-1]
//! ```
//!
//! Every block is [`BLOCK_SIZE`] bytes, so skipping `n` blocks is a seek of
//! `n * BLOCK_SIZE` bytes.

mod block;

pub use block::{NodeBlock, BLOCK_SIZE, BLOCK_TERMINATOR};

use crate::error::{Error, Result};
use crate::trie::{LcrsTrie, NodeId};
use crate::word::BlockLocator;
use std::io::Write;

/// Encodes the whole trie into blocks, in stream order.
///
/// # Errors
///
/// Returns `Serialization` if a subtree weight or depth does not fit in 32 bits.
pub fn encode(trie: &LcrsTrie) -> Result<Vec<NodeBlock>> {
    let mut blocks = Vec::with_capacity(trie.node_count());
    walk(trie, |block| {
        blocks.push(block);
        Ok(())
    })?;
    Ok(blocks)
}

/// Encodes the trie straight into `writer`, returning the number of blocks.
///
/// The writer is not flushed.
///
/// # Errors
///
/// Returns an error if encoding fails or the writer fails.
pub fn write_blocks<W: Write>(trie: &LcrsTrie, mut writer: W) -> Result<u64> {
    let mut count = 0u64;
    walk(trie, |block| {
        writer.write_all(&block.encode())?;
        count += 1;
        Ok(())
    })?;
    Ok(count)
}

/// Decodes a complete block stream held in memory.
///
/// # Errors
///
/// Returns `CorruptData` if the buffer is not a whole number of blocks or
/// any block fails to decode.
pub fn decode_all(bytes: &[u8]) -> Result<Vec<NodeBlock>> {
    if bytes.len() % BLOCK_SIZE != 0 {
        return Err(Error::CorruptData(format!(
            "stream of {} bytes ends with a partial block",
            bytes.len()
        )));
    }
    bytes.chunks_exact(BLOCK_SIZE).map(NodeBlock::decode).collect()
}

/// Left-biased preorder walk emitting one block per trie node.
fn walk<F>(trie: &LcrsTrie, mut emit: F) -> Result<()>
where
    F: FnMut(NodeBlock) -> Result<()>,
{
    let weights = trie.subtree_weights();
    let mut stack: Vec<(NodeId, u32)> = trie.first_node().map(|id| (id, 0)).into_iter().collect();

    while let Some((id, depth)) = stack.pop() {
        let node = trie.node(id);

        // Sibling first so the child subtree pops (and is emitted) before it.
        if let Some(sibling) = node.right_sibling {
            stack.push((sibling, depth));
        }
        if let Some(child) = node.left_child {
            let child_depth = depth.checked_add(1).ok_or_else(|| {
                Error::Serialization("term depth exceeds u32::MAX".to_string())
            })?;
            stack.push((child, child_depth));
        }

        let weight = u32::try_from(weights[id]).map_err(|_| {
            Error::Serialization(format!(
                "subtree of {} nodes exceeds the block weight range",
                weights[id]
            ))
        })?;

        emit(NodeBlock {
            value: node.value,
            end_of_word: node.end_of_word,
            has_child: node.left_child.is_some(),
            has_sibling: node.right_sibling.is_some(),
            weight,
            depth,
            postings: if node.end_of_word {
                node.postings
            } else {
                BlockLocator::NONE
            },
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests;
