//! Fuzz target for the streaming trie reader over untrusted bytes.
//!
//! A block stream read from disk may be truncated or hand-crafted: weights
//! that overrun the stream, depths that jump, siblings that never come. The
//! reader must answer or fail with an error, never panic or loop.

#![no_main]

use arbitrary::Arbitrary;
use lexis_core::{BytesBlockSource, StreamingTrieReader};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    stream: Vec<u8>,
    term: String,
    max_edits: u8,
}

fuzz_target!(|input: Input| {
    let mut reader = StreamingTrieReader::new(BytesBlockSource::new(input.stream.as_slice()));
    let max_edits = usize::from(input.max_edits % 4);

    let _ = reader.has_word(&input.term);
    let _ = reader.starts_with(&input.term);
    let _ = reader.near(&input.term, max_edits);
    let _ = reader.words();
});
