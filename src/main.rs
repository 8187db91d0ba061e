//! fmuconfig CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: hand the process arguments
//! to the runner and exit with an appropriate status.
//! For programmatic use, prefer the library API (`fmuconfig::api`).

use std::process::ExitCode;

use fmuconfig::cli::{self, AppError};

fn main() -> ExitCode {
    match cli::run(std::env::args().skip(1).collect()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::Cli(e)) => e.exit(),
        Err(AppError::Usage) => ExitCode::from(AppError::Usage.exit_code()),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
