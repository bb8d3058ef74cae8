// src/config/model.rs

use serde::Deserialize;

use crate::types::{LogLevel, ReportStyle};

/// Settings as read from a TOML file.
///
/// ```toml
/// log_level = "debug"
///
/// [report]
/// style = "full"
/// ```
///
/// Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Used when no `--log-level` flag is given; `EXHAUSTERR_LOG` is only
    /// consulted when this is absent too.
    #[serde(default)]
    pub log_level: Option<LogLevel>,

    #[serde(default)]
    pub report: ReportSection,
}

/// `[report]` section.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportSection {
    /// `"short"` (default), `"full"` or `"structured"`.
    #[serde(default)]
    pub style: ReportStyle,
}
