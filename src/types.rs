//! Shared types and enums used across fmuconfig.
//! Includes the conversion `Mode` and the output `Flavor`.
use clap::ValueEnum;

/// Output flavour selected with `--mode`
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum Mode {
    Ipl,
    Yaml,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Ipl => write!(f, "IPL"),
            Mode::Yaml => write!(f, "YAML"),
        }
    }
}

impl Mode {
    /// File extension of the destination file; template files append `.tmpl`
    pub fn extension(&self) -> &'static str {
        match self {
            Mode::Ipl => "ipl",
            Mode::Yaml => "yml",
        }
    }
}

/// Which side of an annotated `value ~ <placeholder>` pair to render
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Flavor {
    /// Actual values
    Destination,
    /// Placeholder tokens where the document provides them
    Template,
}

impl std::fmt::Display for Flavor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Flavor::Destination => write!(f, "destination"),
            Flavor::Template => write!(f, "template"),
        }
    }
}
