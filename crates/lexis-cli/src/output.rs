//! Result formatting.

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use lexis_core::{BlockLocator, IndexMeta, Word};
use serde_json::json;
use std::path::Path;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable tables.
    #[default]
    Table,
    /// Pretty-printed JSON on stdout.
    Json,
}

fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header.iter().map(|h| Cell::new(h).fg(Color::Cyan)));
    table
}

/// Prints query results, one row per term.
pub fn print_words(words: &[Word], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(words)?),
        OutputFormat::Table => {
            if words.is_empty() {
                println!("{}", "No results.".dimmed());
                return Ok(());
            }
            let mut table = new_table(&["Term", "Distance"]);
            for word in words {
                table.add_row(vec![
                    Cell::new(&word.value).fg(Color::Green),
                    Cell::new(word.distance),
                ]);
            }
            println!("{table}");
            println!("{}", format!("{} term(s)", words.len()).dimmed());
        }
    }
    Ok(())
}

/// Prints the outcome of an exact lookup.
pub fn print_lookup(term: &str, postings: Option<BlockLocator>, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let value = json!({
                "term": term,
                "found": postings.is_some(),
                "postings": postings,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Table => match postings {
            Some(locator) => println!(
                "{} {} (postings offset {}, length {})",
                "found".green().bold(),
                term,
                locator.offset,
                locator.length
            ),
            None => println!("{} {}", "not found".red().bold(), term),
        },
    }
    Ok(())
}

/// Prints index metadata.
pub fn print_meta(path: &Path, meta: &IndexMeta, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let value = json!({
                "path": path.display().to_string(),
                "meta": meta,
                "stream_bytes": meta.stream_len(),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Table => {
            println!("{} {}", "Lexis index:".bold(), path.display());
            let mut table = new_table(&["Property", "Value"]);
            table.add_row(vec![Cell::new("format version"), Cell::new(meta.format_version)]);
            table.add_row(vec![Cell::new("block size"), Cell::new(meta.block_size)]);
            table.add_row(vec![Cell::new("terms"), Cell::new(meta.term_count)]);
            table.add_row(vec![Cell::new("nodes"), Cell::new(meta.node_count)]);
            table.add_row(vec![Cell::new("stream bytes"), Cell::new(meta.stream_len())]);
            println!("{table}");
        }
    }
    Ok(())
}
