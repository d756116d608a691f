//! Levenshtein edit distance.
//!
//! Classic dynamic-programming recurrence over Unicode scalar values:
//! substitution, insertion and deletion each cost 1, no transposition.
//!
//! The recurrence is exposed one row at a time through [`advance_row`] so the
//! in-memory trie can extend a distance row per trie edge instead of
//! recomputing the full matrix for every spelled prefix.

/// Computes the Levenshtein distance between two strings.
///
/// # Example
///
/// ```
/// use lexis_core::levenshtein::distance;
///
/// assert_eq!(distance("kitten", "sitting"), 3);
/// assert_eq!(distance("", "abc"), 3);
/// ```
#[must_use]
pub fn distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    char_distance(&a, &b)
}

/// Computes the Levenshtein distance between two character sequences.
#[must_use]
pub fn char_distance(a: &[char], b: &[char]) -> usize {
    // Keep the shorter sequence as the row to bound memory at O(min(m, n)).
    let (row_chars, col_chars) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    let mut row = first_row(row_chars.len());
    let mut next = Vec::with_capacity(row.len());
    for &ch in col_chars {
        advance_row(&row, row_chars, ch, &mut next);
        std::mem::swap(&mut row, &mut next);
    }
    row[row_chars.len()]
}

/// Returns the distance row of the empty string against a query of `len` chars.
#[must_use]
pub fn first_row(len: usize) -> Vec<usize> {
    (0..=len).collect()
}

/// Extends a distance row by one character.
///
/// `prev[j]` holds the distance between the spelled prefix `s` and
/// `query[..j]`; on return `out[j]` holds the distance between `s + ch` and
/// `query[..j]`. `out[query.len()]` is therefore the full distance and the
/// minimum of `out` is a lower bound for every extension of `s + ch`.
pub fn advance_row(prev: &[usize], query: &[char], ch: char, out: &mut Vec<usize>) {
    debug_assert_eq!(prev.len(), query.len() + 1);

    out.clear();
    out.push(prev[0] + 1);
    for (j, &q) in query.iter().enumerate() {
        let substitution = prev[j] + usize::from(q != ch);
        let insertion = out[j] + 1;
        let deletion = prev[j + 1] + 1;
        out.push(substitution.min(insertion).min(deletion));
    }
}
