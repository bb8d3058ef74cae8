// src/config/mod.rs

//! Settings for the exception report hook and logging.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load settings from disk or a string (`loader.rs`).

pub mod loader;
pub mod model;

pub use loader::{default_config_path, from_toml_str, load_from_path, load_or_default};
pub use model::{ReportSection, Settings};
