use std::str::FromStr;

use clap::ValueEnum;
use serde::Deserialize;

/// How the report hook renders an uncaught [`Exception`](crate::Exception).
///
/// - `Short`: a single `Kind: message` line (default).
/// - `Full`: the line plus every field and note.
/// - `Structured`: the whole exception as TOML, for piping into other tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportStyle {
    Short,
    Full,
    Structured,
}

impl Default for ReportStyle {
    fn default() -> Self {
        ReportStyle::Short
    }
}

/// Log level, shared by the CLI flag and the `log_level` config key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(format!("invalid log level: {other}")),
        }
    }
}
