// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, Subcommand};

use crate::types::{LogLevel, ReportStyle};

/// Command-line arguments for `exhausterr`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "exhausterr",
    version,
    about = "Run railway-style safe operations and show how their errors are handled.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the settings file (TOML).
    ///
    /// Default: `exhausterr.toml` in the current working directory, if present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, the settings file, `EXHAUSTERR_LOG` or a default level is used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Override the report style from the settings file.
    #[arg(long, value_enum, value_name = "STYLE")]
    pub report: Option<ReportStyle>,

    /// Escalate errors into exceptions instead of handling them.
    #[arg(long)]
    pub unwrap: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Floating point division.
    Divide {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },

    /// Integer floor division.
    IntDivide {
        #[arg(allow_negative_numbers = true)]
        a: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
    },

    /// Look a key up in a mapping built from `--entry KEY=VALUE` pairs.
    Lookup {
        key: String,

        #[arg(long = "entry", value_name = "KEY=VALUE", value_parser = parse_entry)]
        entries: Vec<(String, String)>,

        /// Value returned when the key is absent.
        #[arg(long)]
        default: Option<String>,
    },

    /// Pick the item at a position.
    Index { index: usize, items: Vec<String> },
}

fn parse_entry(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((k, v)) if !k.is_empty() => Ok((k.to_string(), v.to_string())),
        _ => Err(format!("invalid entry `{s}` (expected KEY=VALUE)")),
    }
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
