//! The configuration object driven by the CLI runner: the `ConfigParser`
//! seam and `ConfigParserFmu`, which reads a global variables master and
//! exports it as IPL or YAML.
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};
use tracing::{info, warn};

use crate::core::params::ExportParams;
use crate::core::variables::{collect_variables, merge_variables};
use crate::error::{Error, Result};
use crate::io::reader::read_document;
use crate::io::writers::ipl::render_ipl;
use crate::io::writers::yaml::render_yaml;
use crate::io::writers::{Header, write_outputs};
use crate::types::{Flavor, Mode};

pub const GLOBAL_SECTION: &str = "global";

/// Operations the runner performs on a configuration object
pub trait ConfigParser: fmt::Display {
    fn parse(&mut self, path: &Path) -> Result<()>;
    fn to_ipl(&self, params: &ExportParams) -> Result<()>;
    fn to_yaml(&self, params: &ExportParams) -> Result<()>;
}

#[derive(Debug, Default, Clone)]
pub struct ConfigParserFmu {
    source: Option<PathBuf>,
    document: Option<Mapping>,
}

impl ConfigParserFmu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build directly from an already parsed document
    pub fn from_document(document: Mapping) -> Self {
        Self {
            source: None,
            document: Some(document),
        }
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn is_parsed(&self) -> bool {
        self.document.is_some()
    }

    pub fn document(&self) -> Result<&Mapping> {
        self.document.as_ref().ok_or(Error::NotParsed)
    }

    pub fn global(&self) -> Result<&Mapping> {
        self.document()?
            .get(GLOBAL_SECTION)
            .and_then(Value::as_mapping)
            .ok_or_else(|| Error::missing_section(GLOBAL_SECTION))
    }

    /// The named tool section, if present as a mapping
    pub fn tool_section(&self, tool: &str) -> Result<Option<&Mapping>> {
        match self.document()?.get(tool) {
            Some(Value::Mapping(section)) => Ok(Some(section)),
            Some(_) => {
                warn!("Tool section {} is not a mapping, ignoring it", tool);
                Ok(None)
            }
            None => {
                warn!("No tool section {} in configuration", tool);
                Ok(None)
            }
        }
    }

    fn header(&self, tool: &str, flavor: Flavor) -> Header {
        Header::new(self.source(), tool, flavor)
    }

    /// IPL script for `tool`: globals with the tool section merged over them
    pub fn render_ipl(&self, tool: &str, flavor: Flavor) -> Result<String> {
        let mut variables = collect_variables(self.global()?)?;
        if let Some(section) = self.tool_section(tool)? {
            variables = merge_variables(variables, collect_variables(section)?);
        }
        Ok(render_ipl(&variables, &self.header(tool, flavor), flavor))
    }

    /// YAML restatement holding `global` and the `tool` section only
    pub fn render_yaml(&self, tool: &str, flavor: Flavor) -> Result<String> {
        let mut filtered = Mapping::new();
        filtered.insert(
            Value::from(GLOBAL_SECTION),
            Value::Mapping(self.global()?.clone()),
        );
        if tool != GLOBAL_SECTION {
            if let Some(section) = self.tool_section(tool)? {
                filtered.insert(Value::from(tool), Value::Mapping(section.clone()));
            }
        }
        render_yaml(&filtered, &self.header(tool, flavor), flavor)
    }

    fn export(&self, mode: Mode, params: &ExportParams) -> Result<()> {
        self.document()?;
        let stdout = io::stdout();
        let mut stdout = stdout.lock();
        let written = write_outputs(mode, params, &mut stdout, |flavor| match mode {
            Mode::Ipl => self.render_ipl(&params.tool, flavor),
            Mode::Yaml => self.render_yaml(&params.tool, flavor),
        })?;
        info!("{} export finished, {} file(s) written", mode, written.len());
        Ok(())
    }
}

impl ConfigParser for ConfigParserFmu {
    fn parse(&mut self, path: &Path) -> Result<()> {
        let document = read_document(path)?;
        info!("Parsed {:?} ({} top-level keys)", path, document.len());
        self.source = Some(path.to_path_buf());
        self.document = Some(document);
        Ok(())
    }

    fn to_ipl(&self, params: &ExportParams) -> Result<()> {
        self.export(Mode::Ipl, params)
    }

    fn to_yaml(&self, params: &ExportParams) -> Result<()> {
        self.export(Mode::Yaml, params)
    }
}

impl fmt::Display for ConfigParserFmu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.source, &self.document) {
            (Some(path), _) => write!(f, "ConfigParserFmu({})", path.display()),
            (None, Some(_)) => write!(f, "ConfigParserFmu(<in-memory>)"),
            (None, None) => write!(f, "ConfigParserFmu(unparsed)"),
        }
    }
}
