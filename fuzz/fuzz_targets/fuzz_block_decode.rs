//! Fuzz target for the node block decoder.
//!
//! Any 32-byte record either fails with an error or decodes to a block that
//! encodes back to exactly the same bytes. No input may panic.

#![no_main]

use lexis_core::codec::{decode_all, NodeBlock, BLOCK_SIZE};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(block) = NodeBlock::decode(data) {
        assert_eq!(data.len(), BLOCK_SIZE);
        assert_eq!(&block.encode()[..], data);
        assert!(block.weight >= 1);
        assert_eq!(block.has_child, block.weight > 1);
    }

    let _ = decode_all(data);
});
