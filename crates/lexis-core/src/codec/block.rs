//! Fixed-width node block.

use crate::error::{Error, Result};
use crate::word::BlockLocator;

/// Size of one encoded node block in bytes.
pub const BLOCK_SIZE: usize = 32;

/// Last byte of every block.
pub const BLOCK_TERMINATOR: u8 = 0x1E;

const FLAG_END_OF_WORD: u8 = 0b001;
const FLAG_HAS_CHILD: u8 = 0b010;
const FLAG_HAS_SIBLING: u8 = 0b100;
const KNOWN_FLAGS: u8 = FLAG_END_OF_WORD | FLAG_HAS_CHILD | FLAG_HAS_SIBLING;

/// One trie node as stored on disk.
///
/// `weight` counts the node and all of its descendants (siblings excluded),
/// so after reading a block, skipping `weight - 1` blocks lands on whatever
/// follows its subtree. `depth` is the index of `value` in the spelled term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeBlock {
    /// Character of this branch.
    pub value: char,
    /// Some inserted term ends at this node.
    pub end_of_word: bool,
    /// The next block is this node's first child.
    pub has_child: bool,
    /// A sibling follows once this node's subtree ends.
    pub has_sibling: bool,
    /// Node count of this subtree, at least 1.
    pub weight: u32,
    /// Distance from the root's child chain (which sits at depth 0).
    pub depth: u32,
    /// Postings of the term ending here; `BlockLocator::NONE` otherwise.
    pub postings: BlockLocator,
}

impl NodeBlock {
    /// Encodes the block into its fixed-width record.
    ///
    /// ```text
    /// [0..4)   value      u32 LE (Unicode scalar value)
    /// [4]      flags      bit0 end_of_word, bit1 has_child, bit2 has_sibling
    /// [5..8)   reserved   zero
    /// [8..12)  weight     u32 LE
    /// [12..16) depth      u32 LE
    /// [16..24) offset     u64 LE (postings)
    /// [24..28) length     u32 LE (postings)
    /// [28..31) reserved   zero
    /// [31]     terminator 0x1E
    /// ```
    #[must_use]
    pub fn encode(&self) -> [u8; BLOCK_SIZE] {
        let mut buf = [0u8; BLOCK_SIZE];
        buf[0..4].copy_from_slice(&u32::from(self.value).to_le_bytes());

        let mut flags = 0;
        if self.end_of_word {
            flags |= FLAG_END_OF_WORD;
        }
        if self.has_child {
            flags |= FLAG_HAS_CHILD;
        }
        if self.has_sibling {
            flags |= FLAG_HAS_SIBLING;
        }
        buf[4] = flags;

        buf[8..12].copy_from_slice(&self.weight.to_le_bytes());
        buf[12..16].copy_from_slice(&self.depth.to_le_bytes());
        buf[16..24].copy_from_slice(&self.postings.offset.to_le_bytes());
        buf[24..28].copy_from_slice(&self.postings.length.to_le_bytes());
        buf[BLOCK_SIZE - 1] = BLOCK_TERMINATOR;
        buf
    }

    /// Parses a fixed-width record.
    ///
    /// # Errors
    ///
    /// Returns `CorruptData` if the record has the wrong width, a bad
    /// terminator, unknown flags, non-zero reserved bytes, an invalid
    /// character, or a weight that contradicts its child flag.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != BLOCK_SIZE {
            return Err(Error::CorruptData(format!(
                "node block is {} bytes, expected {BLOCK_SIZE}",
                bytes.len()
            )));
        }
        if bytes[BLOCK_SIZE - 1] != BLOCK_TERMINATOR {
            return Err(Error::CorruptData(format!(
                "unrecognized block terminator 0x{:02X}",
                bytes[BLOCK_SIZE - 1]
            )));
        }
        if bytes[5..8].iter().chain(&bytes[28..31]).any(|&b| b != 0) {
            return Err(Error::CorruptData(
                "reserved block bytes are not zero".to_string(),
            ));
        }

        let flags = bytes[4];
        if flags & !KNOWN_FLAGS != 0 {
            return Err(Error::CorruptData(format!(
                "unknown block flags 0b{flags:08b}"
            )));
        }

        let scalar = read_u32(bytes, 0);
        let value = char::from_u32(scalar).ok_or_else(|| {
            Error::CorruptData(format!("0x{scalar:X} is not a Unicode scalar value"))
        })?;

        let weight = read_u32(bytes, 8);
        let has_child = flags & FLAG_HAS_CHILD != 0;
        if weight == 0 {
            return Err(Error::CorruptData("block weight is zero".to_string()));
        }
        if has_child != (weight > 1) {
            return Err(Error::CorruptData(format!(
                "block weight {weight} contradicts has_child={has_child}"
            )));
        }

        Ok(Self {
            value,
            end_of_word: flags & FLAG_END_OF_WORD != 0,
            has_child,
            has_sibling: flags & FLAG_HAS_SIBLING != 0,
            weight,
            depth: read_u32(bytes, 12),
            postings: BlockLocator::new(read_u64(bytes, 16), read_u32(bytes, 24)),
        })
    }
}

fn read_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

fn read_u64(bytes: &[u8], at: usize) -> u64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&bytes[at..at + 8]);
    u64::from_le_bytes(buf)
}
