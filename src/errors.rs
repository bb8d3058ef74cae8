// src/errors.rs

//! Crate-wide error aliases and helpers.
//!
//! These are the library's *own* failures (loading settings, rendering
//! descriptions, attaching notes). They are unrelated to the [`crate::Error`]
//! values users return inside [`crate::Result`].

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExhausterrError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("TOML rendering error: {0}")]
    TomlRenderError(#[from] toml::ser::Error),

    #[error("Description template references unknown field `{field}`: {template}")]
    MissingField { field: String, template: String },

    #[error("Description template has unsupported placeholder `{placeholder}`: {template}")]
    UnsupportedPlaceholder { placeholder: String, template: String },

    #[error("Error type {0} has no storage for notes")]
    NotesUnsupported(&'static str),
}

pub type Result<T> = std::result::Result<T, ExhausterrError>;
