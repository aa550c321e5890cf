//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and parses CLI arguments
//! - sets up logging
//! - runs the score/explain pipeline
//! - prints results

use std::io::Write;

use clap::Parser;

use crate::cli::Cli;
use crate::domain::DomainKind;
use crate::error::AppError;
use crate::reasons::ScoredReasons;

pub mod pipeline;

pub const DEFAULT_SEED: u64 = 42;
pub const SEED_ENV_VAR: &str = "REASON_CODES_SEED";

/// Resolved run settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub seed: u64,
    pub domains: Vec<DomainKind>,
    pub rounds: usize,
    pub json: bool,
}

/// Entry point for the `reasons` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    crate::telemetry::init(&cli.log_level)?;

    let config = run_config_from_args(&cli, std::env::var(SEED_ENV_VAR).ok().as_deref())?;
    tracing::info!(
        seed = config.seed,
        rounds = config.rounds,
        domains = ?config.domains,
        "starting run"
    );

    let mut stdout = std::io::stdout().lock();
    pipeline::run_pipeline(&config, |kind, result| {
        write_result(&mut stdout, config.json, kind, &result)
    })
}

/// Print one result line. Output failures (closed pipe, serialization) exit with 3.
pub fn write_result<W: Write>(
    out: &mut W,
    json: bool,
    kind: DomainKind,
    result: &ScoredReasons,
) -> Result<(), AppError> {
    let line = if json {
        crate::report::format_json(result)?
    } else {
        crate::report::format_line(kind, result)
    };
    writeln!(out, "{line}").map_err(|e| AppError::new(3, format!("Failed to write result: {e}")))
}

/// Merge flags with the environment. Flag beats env beats `DEFAULT_SEED`.
pub fn run_config_from_args(cli: &Cli, env_seed: Option<&str>) -> Result<RunConfig, AppError> {
    if cli.rounds == 0 {
        return Err(AppError::new(2, "Rounds must be > 0."));
    }

    let seed = match (cli.seed, env_seed) {
        (Some(seed), _) => seed,
        (None, Some(raw)) => raw.trim().parse().map_err(|_| {
            AppError::new(2, format!("Invalid {SEED_ENV_VAR}='{raw}': expected an unsigned integer."))
        })?,
        (None, None) => DEFAULT_SEED,
    };

    let domains = if cli.domains.is_empty() {
        DomainKind::ALL.to_vec()
    } else {
        cli.domains.clone()
    };

    Ok(RunConfig {
        seed,
        domains,
        rounds: cli.rounds,
        json: cli.json,
    })
}
