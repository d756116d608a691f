//! Term list import.
//!
//! One term per line, optionally followed by its postings locator:
//!
//! ```text
//! cat
//! cart<TAB>1024<TAB>96
//! ```
//!
//! Blank lines are ignored. A term listed twice keeps the last locator.

use anyhow::{bail, Context, Result};
use lexis_core::{BlockLocator, LcrsTrie};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parses one line of a term list; `None` for blank lines.
pub fn parse_line(line: &str) -> Result<Option<(&str, BlockLocator)>> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Ok(None);
    }

    let mut fields = line.split('\t');
    let term = fields.next().unwrap_or(line);
    match (fields.next(), fields.next(), fields.next()) {
        (None, _, _) => Ok(Some((term, BlockLocator::NONE))),
        (Some(offset), Some(length), None) => {
            let offset: u64 = offset
                .trim()
                .parse()
                .with_context(|| format!("invalid postings offset '{offset}'"))?;
            let length: u32 = length
                .trim()
                .parse()
                .with_context(|| format!("invalid postings length '{length}'"))?;
            Ok(Some((term, BlockLocator::new(offset, length))))
        }
        _ => bail!("expected `term` or `term<TAB>offset<TAB>length`"),
    }
}

/// Builds a trie from a term list file.
pub fn load_terms(path: &Path) -> Result<LcrsTrie> {
    let file =
        File::open(path).with_context(|| format!("cannot open term list {}", path.display()))?;

    let mut trie = LcrsTrie::new();
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("{}:{line_no}: read failed", path.display()))?;
        let Some((term, locator)) =
            parse_line(&line).with_context(|| format!("{}:{line_no}", path.display()))?
        else {
            continue;
        };
        trie.insert(term, locator)
            .with_context(|| format!("{}:{line_no}", path.display()))?;
    }

    tracing::debug!(
        path = %path.display(),
        terms = trie.len(),
        nodes = trie.node_count(),
        "term list loaded"
    );
    Ok(trie)
}
