use std::fs;
use std::path::Path;

use serde_yaml::{Mapping, Value};
use tracing::debug;

use crate::error::{Error, Result};

/// Read a global config master and return its top-level mapping.
pub fn read_document(path: &Path) -> Result<Mapping> {
    if !path.is_file() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let text = fs::read_to_string(path)?;
    debug!("Read {} bytes from {:?}", text.len(), path);
    parse_document(&text)
}

/// Parse YAML text; the root must be a mapping.
pub fn parse_document(text: &str) -> Result<Mapping> {
    match serde_yaml::from_str::<Value>(text)? {
        Value::Mapping(map) => Ok(map),
        Value::Null => Err(Error::InvalidDocument("document is empty".to_string())),
        _ => Err(Error::InvalidDocument(
            "top level must be a mapping".to_string(),
        )),
    }
}
