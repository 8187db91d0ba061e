//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O and YAML errors, and provides semantic variants
//! for document-shape and rendering failures.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Input file does not exist: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("Missing section: {section}")]
    MissingSection { section: String },

    #[error("Invalid annotated value for {name}: {value:?}")]
    InvalidAnnotation { name: String, value: String },

    #[error("Invalid IPL variable name: {name}")]
    InvalidName { name: String },

    #[error("Duplicate IPL variable name: {name}")]
    DuplicateName { name: String },

    #[error("Unsupported value for {name}: {reason}")]
    UnsupportedValue { name: String, reason: String },

    #[error("Configuration has not been parsed")]
    NotParsed,
}

impl Error {
    pub fn missing_section(section: impl Into<String>) -> Self {
        Error::MissingSection {
            section: section.into(),
        }
    }
}
