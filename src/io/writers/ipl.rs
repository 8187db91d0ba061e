use serde_yaml::Value;

use crate::core::annotation::Resolved;
use crate::core::variables::{IplType, Variable, VariableValue};
use crate::io::writers::Header;
use crate::types::Flavor;

fn format_float(f: f64) -> String {
    let s = f.to_string();
    if f.is_finite() && !s.contains(['.', 'e', 'E']) {
        format!("{}.0", s)
    } else {
        s
    }
}

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Literal for a value in an IPL assignment, coerced to the declared type
fn literal(value: &Value, kind: IplType) -> String {
    match (kind, value) {
        (IplType::Bool, Value::Bool(true)) => "TRUE".to_string(),
        (IplType::Bool, Value::Bool(false)) => "FALSE".to_string(),
        (IplType::Int, Value::Number(n)) => n.to_string(),
        (IplType::Float, Value::Number(n)) => n.as_f64().map(format_float).unwrap_or_default(),
        (_, Value::String(s)) => quote(s),
        (_, Value::Bool(b)) => quote(&b.to_string()),
        (_, Value::Number(n)) => quote(&n.to_string()),
        (_, other) => quote(&serde_yaml::to_string(other).unwrap_or_default()),
    }
}

fn rhs(resolved: &Resolved, kind: IplType, flavor: Flavor) -> String {
    match (flavor, &resolved.placeholder) {
        (Flavor::Template, Some(token)) => token.clone(),
        _ => literal(&resolved.value, kind),
    }
}

/// Render variables as an IPL declaration script
pub fn render_ipl(variables: &[Variable], header: &Header, flavor: Flavor) -> String {
    let mut lines = header.lines("//");
    lines.push(String::new());

    for var in variables {
        match &var.value {
            VariableValue::Scalar(r) => {
                let value = rhs(r, var.kind, flavor);
                lines.push(format!("{} {} = {}", var.kind, var.name, value));
            }
            VariableValue::Array(items) => {
                lines.push(format!("{} {}[]", var.kind, var.name));
                for (i, r) in items.iter().enumerate() {
                    let value = rhs(r, var.kind, flavor);
                    lines.push(format!("{}[{}] = {}", var.name, i + 1, value));
                }
            }
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
