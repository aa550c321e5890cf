//! Command-line parsing for the reason code demo.
//!
//! Argument parsing stays here; `app` turns the parsed flags into a `RunConfig`.

use clap::Parser;

use crate::domain::DomainKind;

/// Top-level CLI. With no flags, scores one credit and one fraud input.
#[derive(Debug, Parser, Clone)]
#[command(name = "reasons", version, about = "Mock model scores explained by reason codes")]
pub struct Cli {
    /// Random seed (falls back to REASON_CODES_SEED, then 42).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Domain(s) to score, in order. Repeat the flag for several.
    #[arg(short = 'd', long = "domain", value_enum)]
    pub domains: Vec<DomainKind>,

    /// Number of predict-and-explain rounds.
    #[arg(short = 'n', long, default_value_t = 1)]
    pub rounds: usize,

    /// Print one JSON object per result instead of text lines.
    #[arg(long)]
    pub json: bool,

    /// Log filter used when RUST_LOG is unset (logs go to stderr).
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
