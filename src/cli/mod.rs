//! Command Line Interface (CLI) layer for fmuconfig.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`): validate arguments, build the
//! configuration object, parse the master and dispatch on `--mode`.
//!
//! If you are embedding fmuconfig into another application, prefer using
//! the high-level `fmuconfig::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use errors::AppError;
pub use runner::{run, run_with};
