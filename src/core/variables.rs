//! Flattening of a YAML section into typed IPL variables.
use std::collections::HashSet;

use serde_yaml::{Mapping, Value};
use tracing::{debug, warn};

use crate::core::annotation::{Resolved, key_label, resolve};
use crate::error::{Error, Result};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum IplType {
    Int,
    Float,
    Bool,
    String,
}

impl std::fmt::Display for IplType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IplType::Int => write!(f, "Int"),
            IplType::Float => write!(f, "Float"),
            IplType::Bool => write!(f, "Bool"),
            IplType::String => write!(f, "String"),
        }
    }
}

impl IplType {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Number(n) if n.is_i64() || n.is_u64() => IplType::Int,
            Value::Number(_) => IplType::Float,
            Value::Bool(_) => IplType::Bool,
            _ => IplType::String,
        }
    }

    /// Common type of an array: ints widen to floats, any other mix is text.
    pub fn unify(self, other: IplType) -> Self {
        match (self, other) {
            (a, b) if a == b => a,
            (IplType::Int, IplType::Float) | (IplType::Float, IplType::Int) => IplType::Float,
            _ => IplType::String,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum VariableValue {
    Scalar(Resolved),
    Array(Vec<Resolved>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
    pub kind: IplType,
    pub value: VariableValue,
}

fn is_ipl_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn variable_name(prefix: Option<&str>, key: &Value) -> Result<String> {
    let key = match key {
        Value::String(_) | Value::Number(_) | Value::Bool(_) => key_label(key),
        other => {
            return Err(Error::InvalidName {
                name: key_label(other),
            });
        }
    };
    let name = match prefix {
        Some(prefix) => format!("{}_{}", prefix, key),
        None => key,
    };
    if !is_ipl_identifier(&name) {
        return Err(Error::InvalidName { name });
    }
    Ok(name)
}

fn array_variable(name: String, items: &[Value]) -> Result<Variable> {
    let mut resolved = Vec::with_capacity(items.len());
    let mut kind: Option<IplType> = None;
    for (i, item) in items.iter().enumerate() {
        if matches!(item, Value::Sequence(_) | Value::Mapping(_)) {
            return Err(Error::UnsupportedValue {
                name,
                reason: format!("element {} is not a scalar", i + 1),
            });
        }
        let r = resolve(&name, item)?;
        let t = IplType::of(&r.value);
        kind = Some(kind.map_or(t, |k| k.unify(t)));
        resolved.push(r);
    }
    Ok(Variable {
        name,
        kind: kind.unwrap_or(IplType::String),
        value: VariableValue::Array(resolved),
    })
}

fn collect_into(prefix: Option<&str>, section: &Mapping, out: &mut Vec<Variable>) -> Result<()> {
    for (key, value) in section {
        let name = variable_name(prefix, key)?;
        match value {
            Value::Null => warn!("Skipping {}: no value", name),
            Value::Mapping(inner) => collect_into(Some(name.as_str()), inner, out)?,
            Value::Sequence(items) => out.push(array_variable(name, items)?),
            Value::Tagged(tagged) => {
                return Err(Error::UnsupportedValue {
                    name,
                    reason: format!("tagged value {}", tagged.tag),
                });
            }
            scalar => {
                let r = resolve(&name, scalar)?;
                out.push(Variable {
                    name,
                    kind: IplType::of(&r.value),
                    value: VariableValue::Scalar(r),
                });
            }
        }
    }
    Ok(())
}

/// Flatten a section into variables, joining nested keys with `_`.
/// Two keys flattening to the same name (`A_B` and `A: {B}`) is an error.
pub fn collect_variables(section: &Mapping) -> Result<Vec<Variable>> {
    let mut out = Vec::new();
    collect_into(None, section, &mut out)?;

    {
        let mut seen = HashSet::with_capacity(out.len());
        if let Some(dup) = out.iter().find(|v| !seen.insert(v.name.as_str())) {
            return Err(Error::DuplicateName {
                name: dup.name.clone(),
            });
        }
    }
    debug!("Collected {} variables", out.len());
    Ok(out)
}

/// Overlay `overrides` on `base`: same names replace in place, new names append.
pub fn merge_variables(mut base: Vec<Variable>, overrides: Vec<Variable>) -> Vec<Variable> {
    for var in overrides {
        match base.iter_mut().find(|v| v.name == var.name) {
            Some(existing) => {
                debug!("Tool section overrides {}", var.name);
                *existing = var;
            }
            None => base.push(var),
        }
    }
    base
}
