use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    /// Too few arguments; help text has already been printed
    #[error("Too few arguments")]
    Usage,

    #[error(transparent)]
    Cli(#[from] clap::Error),

    #[error("Input file does not exist: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] crate::Error),
}

impl AppError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Usage => 2,
            AppError::Cli(e) => e.exit_code() as u8,
            _ => 1,
        }
    }
}
