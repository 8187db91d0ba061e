use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_ROOTNAME: &str = "global_variables";
pub const DEFAULT_TOOL: &str = "rms";

/// Export parameters shared by `to_ipl` and `to_yaml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportParams {
    /// Base file name of the generated output, without extension
    pub rootname: String,
    /// Folder for files with actual values
    pub destination: Option<PathBuf>,
    /// Folder for files with `<placeholder>` values
    pub template: Option<PathBuf>,
    /// Tool section to apply, e.g. rms or eclipse
    pub tool: String,
}

impl Default for ExportParams {
    fn default() -> Self {
        Self {
            rootname: DEFAULT_ROOTNAME.to_string(),
            destination: None,
            template: None,
            tool: DEFAULT_TOOL.to_string(),
        }
    }
}
