//! High-level, ergonomic library API: load a global config master, render it
//! in memory, or convert it to files in one call. Prefer these entrypoints
//! over the lower-level `core` and `io` modules when embedding fmuconfig.
use std::path::Path;

use crate::core::config_parser::{ConfigParser, ConfigParserFmu};
use crate::core::params::ExportParams;
use crate::error::{Error, Result};
use crate::types::{Flavor, Mode};

/// Parse a global config master from disk
pub fn load_config(path: &Path) -> Result<ConfigParserFmu> {
    if !path.is_file() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut cfg = ConfigParserFmu::new();
    cfg.parse(path)?;
    Ok(cfg)
}

/// Render one flavour of a master to a string (no files written)
pub fn render_file(path: &Path, mode: Mode, tool: &str, flavor: Flavor) -> Result<String> {
    let cfg = load_config(path)?;
    match mode {
        Mode::Ipl => cfg.render_ipl(tool, flavor),
        Mode::Yaml => cfg.render_yaml(tool, flavor),
    }
}

/// Convert a master to the folders named in `params`
pub fn convert_file(path: &Path, mode: Mode, params: &ExportParams) -> Result<()> {
    let cfg = load_config(path)?;
    match mode {
        Mode::Ipl => cfg.to_ipl(params),
        Mode::Yaml => cfg.to_yaml(params),
    }
}
