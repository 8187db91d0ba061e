//! Output writers for IPL scripts and YAML restatements, plus the shared
//! file header and the destination/template file placement.
pub mod ipl;
pub mod yaml;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::info;

use crate::core::params::ExportParams;
use crate::error::Result;
use crate::types::{Flavor, Mode};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Provenance written at the top of every generated file
#[derive(Debug, Clone)]
pub struct Header {
    pub source: Option<PathBuf>,
    pub tool: String,
    pub flavor: Flavor,
    pub created: DateTime<Utc>,
}

impl Header {
    pub fn new(source: Option<&Path>, tool: &str, flavor: Flavor) -> Self {
        Self {
            source: source.map(Path::to_path_buf),
            tool: tool.to_string(),
            flavor,
            created: Utc::now(),
        }
    }

    /// Header lines, each prefixed with the target format's comment marker
    pub fn lines(&self, comment: &str) -> Vec<String> {
        let source = self
            .source
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<unknown>".to_string());
        vec![
            format!("{} Global variables, generated by fmuconfig {}", comment, VERSION),
            format!("{} Source: {}", comment, source),
            format!("{} Tool: {}", comment, self.tool),
            format!("{} Flavor: {}", comment, self.flavor),
            format!(
                "{} Created: {}",
                comment,
                self.created.format("%Y-%m-%dT%H:%M:%SZ")
            ),
        ]
    }
}

/// Output file name for a mode and flavour, e.g. `global_variables.ipl.tmpl`
pub fn output_file_name(rootname: &str, mode: Mode, flavor: Flavor) -> String {
    match flavor {
        Flavor::Destination => format!("{}.{}", rootname, mode.extension()),
        Flavor::Template => format!("{}.{}.tmpl", rootname, mode.extension()),
    }
}

fn write_file(folder: &Path, name: &str, content: &str) -> Result<PathBuf> {
    fs::create_dir_all(folder)?;
    let path = folder.join(name);
    fs::write(&path, content)?;
    info!("Wrote {:?}", path);
    Ok(path)
}

/// Render and place the requested flavours. With no folder given the
/// destination flavour goes to `stdout` instead.
pub fn write_outputs<F>(
    mode: Mode,
    params: &ExportParams,
    stdout: &mut dyn Write,
    render: F,
) -> Result<Vec<PathBuf>>
where
    F: Fn(Flavor) -> Result<String>,
{
    let mut written = Vec::new();

    if let Some(folder) = &params.destination {
        let name = output_file_name(&params.rootname, mode, Flavor::Destination);
        written.push(write_file(folder, &name, &render(Flavor::Destination)?)?);
    }

    if let Some(folder) = &params.template {
        let name = output_file_name(&params.rootname, mode, Flavor::Template);
        written.push(write_file(folder, &name, &render(Flavor::Template)?)?);
    }

    if written.is_empty() {
        info!("No output folder given, writing {} to stdout", mode);
        stdout.write_all(render(Flavor::Destination)?.as_bytes())?;
        stdout.flush()?;
    }

    Ok(written)
}
