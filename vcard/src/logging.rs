// src/logging.rs
use std::io::{self, IsTerminal as _};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

pub const LOG_ENV: &str = "VCARD_LOG";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Picks the filter from `env` (the value of `VCARD_LOG`), then the config
/// `log_level`, then `warn`. The second value is a configured level that
/// failed to parse.
#[must_use]
pub fn log_filter<'a>(env: Option<&str>, config: &'a Config) -> (EnvFilter, Option<&'a str>) {
    if let Some(filter) = env
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
    {
        return (filter, None);
    }

    match config.log_level.as_deref() {
        None => (EnvFilter::new(DEFAULT_LOG_LEVEL), None),
        Some(level) => EnvFilter::try_new(level).map_or_else(
            |_| (EnvFilter::new(DEFAULT_LOG_LEVEL), Some(level)),
            |filter| (filter, None),
        ),
    }
}

/// Installs the global subscriber on stderr. Colors only when stderr is a
/// terminal.
#[inline]
pub fn init_logging(config: &Config) {
    let env = std::env::var(LOG_ENV).ok();
    let (filter, invalid_level) = log_filter(env.as_deref(), config);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();

    if let Some(level) = invalid_level {
        tracing::warn!(level = %level, "Invalid log level in config, keeping {DEFAULT_LOG_LEVEL}");
    }
}
