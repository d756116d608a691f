#![allow(clippy::doc_markdown)]
//! `Lexis` CLI - build and query LCRS term indexes
//!
//! Usage:
//!   `lexis build terms.txt --index ./lexis_data`
//!   `lexis has cart --index ./lexis_data`
//!   `lexis near cot --edits 1 --format json`

mod commands;
mod import;
mod output;

use clap::{Parser, Subcommand};
use commands::Query;
use lexis_core::config::LoggingConfig;
use lexis_core::LexisConfig;
use output::OutputFormat;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "lexis")]
#[command(author, version, about = "Lexis CLI - LCRS term indexes with exact, prefix and fuzzy search")]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file (defaults < file < LEXIS_* environment variables)
    #[arg(short, long, global = true, default_value = "lexis.toml", env = "LEXIS_CONFIG_FILE")]
    config: PathBuf,

    /// Index directory (defaults to storage.data_dir)
    #[arg(short, long, global = true)]
    index: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "table")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build an index from a term list (`term` or `term<TAB>offset<TAB>length` per line)
    Build {
        /// Path to the term list
        terms: PathBuf,
    },

    /// Check whether a term is indexed and show its postings
    Has {
        /// Exact term
        term: String,
    },

    /// List every term starting with a prefix
    Prefix {
        /// Term prefix
        prefix: String,
    },

    /// List terms within an edit distance, closest first
    Near {
        /// Query term
        term: String,

        /// Maximum edits (defaults to search.default_max_edits)
        #[arg(short = 'k', long)]
        edits: Option<usize>,
    },

    /// List every indexed term
    Dump,

    /// Show index metadata
    Info,
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let registry = tracing_subscriber::registry().with(filter);

    // stdout carries results; logs go to stderr.
    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = LexisConfig::load_from_path(&cli.config)?;
    config.validate()?;
    init_tracing(&config.logging);

    let index_dir = cli
        .index
        .unwrap_or_else(|| PathBuf::from(&config.storage.data_dir));

    let query = match cli.command {
        Commands::Build { terms } => return commands::build(&terms, &index_dir, cli.format),
        Commands::Info => return commands::info(&index_dir, cli.format),
        Commands::Has { term } => Query::Has(term),
        Commands::Prefix { prefix } => Query::Prefix(prefix),
        Commands::Near { term, edits } => Query::Near(term, config.effective_max_edits(edits)?),
        Commands::Dump => Query::Dump,
    };

    commands::run_query(&index_dir, &query, &config, cli.format)
}
