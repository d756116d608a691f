//! Fuzz target checking that the in-memory trie and the streaming reader
//! agree on arbitrary vocabularies.

#![no_main]

use arbitrary::Arbitrary;
use lexis_core::{codec, BytesBlockSource, LcrsTrie, StreamingTrieReader};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    terms: Vec<String>,
    query: String,
    max_edits: u8,
}

fuzz_target!(|input: Input| {
    let mut trie = LcrsTrie::new();
    for term in input.terms.iter().take(256) {
        // Empty and whitespace-only terms are rejected, not indexed.
        if trie.add(term).is_err() {
            assert!(term.trim().is_empty());
        }
    }

    let mut bytes = Vec::new();
    codec::write_blocks(&trie, &mut bytes).expect("encoding an in-memory trie");
    let mut reader = StreamingTrieReader::new(BytesBlockSource::new(bytes.as_slice()));

    let max_edits = match input.max_edits {
        u8::MAX => usize::MAX,
        edits => usize::from(edits % 3),
    };
    match (trie.near(&input.query, max_edits), reader.near(&input.query, max_edits)) {
        (Ok(expected), Ok(streamed)) => assert_eq!(expected, streamed),
        (Err(_), Err(_)) => {}
        (expected, streamed) => panic!("backends disagree: {expected:?} vs {streamed:?}"),
    }

    if let (Ok(expected), Ok(streamed)) = (trie.has_word(&input.query), reader.has_word(&input.query)) {
        assert_eq!(expected, streamed);
    }
});
