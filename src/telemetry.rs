use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Install the global subscriber. `RUST_LOG` wins over `log_level`.
pub fn init(log_level: &str) -> Result<(), AppError> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let env_filter = build_filter(rust_log.as_deref(), log_level)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| AppError::new(2, format!("Failed to initialize logging: {e}")))
}

/// An unset or blank `RUST_LOG` falls back to `log_level`; an unparseable one
/// is a configuration error, never silently replaced.
pub fn build_filter(rust_log: Option<&str>, log_level: &str) -> Result<EnvFilter, AppError> {
    match rust_log.map(str::trim).filter(|v| !v.is_empty()) {
        Some(value) => EnvFilter::try_new(value).map_err(|e| {
            AppError::new(2, format!("Invalid RUST_LOG filter '{value}': {e}"))
        }),
        None => EnvFilter::try_new(log_level).map_err(|e| {
            AppError::new(2, format!("Invalid log level/filter '{log_level}': {e}"))
        }),
    }
}
