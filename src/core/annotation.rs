//! Annotated values: a string scalar written as `value ~ <placeholder>`
//! carries both the actual value and the token used in template output.
use serde_yaml::{Mapping, Value};

use crate::error::{Error, Result};
use crate::types::Flavor;

pub const ANNOTATION_SEPARATOR: char = '~';

/// A scalar with its optional template placeholder
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    /// Actual value, used for destination output and for typing
    pub value: Value,
    /// Placeholder token, when the source value was annotated
    pub placeholder: Option<String>,
}

impl Resolved {
    pub fn plain(value: Value) -> Self {
        Self {
            value,
            placeholder: None,
        }
    }

    /// Value to emit for the given flavour
    pub fn for_flavor(&self, flavor: Flavor) -> Value {
        match (flavor, &self.placeholder) {
            (Flavor::Template, Some(token)) => Value::String(token.clone()),
            _ => self.value.clone(),
        }
    }
}

fn is_placeholder(token: &str) -> bool {
    token.len() > 2 && token.starts_with('<') && token.ends_with('>')
}

/// Split `value ~ <token>` into its trimmed halves.
/// A `~` only separates when it stands between whitespace or is followed by
/// a `<...>` token; `~/run` or `http://host/~user` are plain strings.
pub fn split_annotation(s: &str) -> Option<(&str, &str)> {
    s.match_indices(ANNOTATION_SEPARATOR).find_map(|(idx, sep)| {
        let (value, token) = (&s[..idx], &s[idx + sep.len()..]);
        let spaced = value.ends_with(char::is_whitespace)
            && token.starts_with(char::is_whitespace);
        (spaced || is_placeholder(token.trim())).then(|| (value.trim(), token.trim()))
    })
}

/// Re-read the value half as a YAML scalar so `0.25` stays a number.
/// Anything that does not come back as a scalar is kept as text.
fn reparse_scalar(text: &str) -> Value {
    match serde_yaml::from_str::<Value>(text) {
        Ok(v @ (Value::Bool(_) | Value::Number(_) | Value::String(_))) => v,
        _ => Value::String(text.to_string()),
    }
}

/// Resolve a single scalar. `name` is only used for error reporting.
pub fn resolve(name: &str, value: &Value) -> Result<Resolved> {
    let Value::String(s) = value else {
        return Ok(Resolved::plain(value.clone()));
    };

    match split_annotation(s) {
        None => Ok(Resolved::plain(value.clone())),
        Some((actual, token)) => {
            if actual.is_empty() || token.is_empty() {
                return Err(Error::InvalidAnnotation {
                    name: name.to_string(),
                    value: s.clone(),
                });
            }
            Ok(Resolved {
                value: reparse_scalar(actual),
                placeholder: Some(token.to_string()),
            })
        }
    }
}

/// Resolve every annotated scalar below `value` for one flavour.
pub fn resolve_tree(path: &str, value: &Value, flavor: Flavor) -> Result<Value> {
    match value {
        Value::Mapping(map) => {
            let mut out = Mapping::with_capacity(map.len());
            for (key, child) in map {
                let child_path = format!("{}.{}", path, key_label(key));
                out.insert(key.clone(), resolve_tree(&child_path, child, flavor)?);
            }
            Ok(Value::Mapping(out))
        }
        Value::Sequence(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| resolve_tree(&format!("{}[{}]", path, i), item, flavor))
            .collect::<Result<Vec<_>>>()
            .map(Value::Sequence),
        Value::Tagged(tagged) => {
            let mut tagged = tagged.as_ref().clone();
            tagged.value = resolve_tree(path, &tagged.value, flavor)?;
            Ok(Value::Tagged(Box::new(tagged)))
        }
        scalar => Ok(resolve(path, scalar)?.for_flavor(flavor)),
    }
}

/// Human readable rendering of a mapping key
pub fn key_label(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "~".to_string(),
        other => format!("{:?}", other),
    }
}
