use clap::Parser;
use std::path::PathBuf;

use crate::core::params::{DEFAULT_ROOTNAME, DEFAULT_TOOL, ExportParams};
use crate::types::Mode;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "fmuconfig",
    version,
    about = "Configure from FMU global master",
    override_usage = "fmuconfig CONFIG [OPTIONS]"
)]
pub struct CliArgs {
    /// Input global config master file name on YAML format
    pub config: PathBuf,

    /// Mode for conversion (ipl or yaml)
    #[arg(long, value_enum, default_value_t = Mode::Ipl)]
    pub mode: Mode,

    /// Root of file name
    #[arg(long, default_value = DEFAULT_ROOTNAME)]
    pub rootname: String,

    /// Destination folder (for actual values)
    #[arg(long)]
    pub destination: Option<PathBuf>,

    /// Template folder (for files with <xxxx> values)
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Tool section to apply, e.g. rms or eclipse
    #[arg(long, default_value = DEFAULT_TOOL)]
    pub tool: String,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

impl CliArgs {
    /// The four dispatch arguments, forwarded as-is to the configuration object
    pub fn export_params(&self) -> ExportParams {
        ExportParams {
            rootname: self.rootname.clone(),
            destination: self.destination.clone(),
            template: self.template.clone(),
            tool: self.tool.clone(),
        }
    }
}
