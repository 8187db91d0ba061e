use serde_yaml::{Mapping, Value};

use crate::core::annotation::resolve_tree;
use crate::error::Result;
use crate::io::writers::Header;
use crate::types::Flavor;

/// Restate a (filtered) document as YAML with annotations resolved for `flavor`
pub fn render_yaml(document: &Mapping, header: &Header, flavor: Flavor) -> Result<String> {
    let resolved = resolve_tree("", &Value::Mapping(document.clone()), flavor)?;
    let body = serde_yaml::to_string(&resolved)?;

    let mut out = header.lines("#").join("\n");
    out.push_str("\n\n");
    out.push_str(&body);
    Ok(out)
}
