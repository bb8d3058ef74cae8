// src/logging.rs

//! Logging setup using `tracing` + `tracing-subscriber`.
//!
//! Priority for determining the log level:
//! 1. `--log-level` CLI flag (if provided)
//! 2. `log_level` in the settings file
//! 3. `EXHAUSTERR_LOG` environment variable (e.g. "info", "debug")
//! 4. default to `info`
//!
//! Logs are sent to STDERR so that stdout only carries command output.

use anyhow::{Result, anyhow};
use tracing_subscriber::fmt;

use crate::types::LogLevel;

/// Initialise the global logging subscriber.
///
/// Fails if a global subscriber was already installed.
pub fn init_logging(cli_level: Option<LogLevel>, config_level: Option<LogLevel>) -> Result<()> {
    let level = resolve_level(cli_level, config_level, std::env::var("EXHAUSTERR_LOG").ok());

    fmt()
        .with_max_level(level)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to install logging subscriber: {e}"))?;

    Ok(())
}

/// Pick the effective level from the sources listed in the module docs.
pub fn resolve_level(
    cli_level: Option<LogLevel>,
    config_level: Option<LogLevel>,
    env_value: Option<String>,
) -> tracing::Level {
    cli_level
        .or(config_level)
        .or_else(|| env_value.and_then(|s| s.parse::<LogLevel>().ok()))
        .map(level_from_log_level)
        .unwrap_or(tracing::Level::INFO)
}

fn level_from_log_level(lvl: LogLevel) -> tracing::Level {
    match lvl {
        LogLevel::Error => tracing::Level::ERROR,
        LogLevel::Warn => tracing::Level::WARN,
        LogLevel::Info => tracing::Level::INFO,
        LogLevel::Debug => tracing::Level::DEBUG,
        LogLevel::Trace => tracing::Level::TRACE,
    }
}
