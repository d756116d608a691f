//! Tests for `word` module

use super::word::*;

#[test]
fn test_exact_word_has_zero_distance() {
    let word = Word::exact("cat");
    assert_eq!(word.value, "cat");
    assert_eq!(word.distance, 0);
}

#[test]
fn test_sort_by_distance_then_value() {
    // Arrange
    let mut words = vec![
        Word::with_distance("cart", 2),
        Word::with_distance("cat", 1),
        Word::with_distance("bat", 1),
        Word::with_distance("cot", 0),
    ];

    // Act
    sort_by_distance(&mut words);

    // Assert
    let values: Vec<&str> = words.iter().map(|w| w.value.as_str()).collect();
    assert_eq!(values, vec!["cot", "bat", "cat", "cart"]);
}

#[test]
fn test_word_serialization() {
    // Arrange
    let word = Word::with_distance("dog", 1);

    // Act
    let json = serde_json::to_string(&word).expect("serialize");
    let back: Word = serde_json::from_str(&json).expect("deserialize");

    // Assert
    assert_eq!(json, r#"{"value":"dog","distance":1}"#);
    assert_eq!(back, word);
}

#[test]
fn test_block_locator_default_is_none() {
    assert_eq!(BlockLocator::default(), BlockLocator::NONE);
    assert_eq!(BlockLocator::new(128, 16).offset, 128);
}
