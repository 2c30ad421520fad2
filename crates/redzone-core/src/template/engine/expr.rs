//! Expression evaluation against a [`Context`]
//!
//! Literals and dotted paths only.
//!
//! - `"text"` / `'text'`: string literal (no escapes)
//! - `42`, `-1.5`: JSON number
//! - `true`, `false`, `null`
//! - `name.key.0`: path; a segment indexes objects by key and arrays by position
//!
//! Evaluation never fails. Anything that does not resolve is null.

use super::context::Context;
use serde_json::Value;

/// Evaluate `expr` against `context`
pub fn evaluate(context: &Context, expr: &str) -> Value {
    let expr = expr.trim();

    if let Some(literal) = parse_literal(expr) {
        return literal;
    }

    resolve_path(context, expr).cloned().unwrap_or(Value::Null)
}

/// JSON truthiness used by conditional tags
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(members) => !members.is_empty(),
    }
}

fn parse_literal(expr: &str) -> Option<Value> {
    for quote in ['"', '\''] {
        if let Some(inner) = expr
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return Some(Value::String(inner.to_string()));
        }
    }

    match expr {
        "true" => return Some(Value::Bool(true)),
        "false" => return Some(Value::Bool(false)),
        "null" => return Some(Value::Null),
        _ => {}
    }

    let first = expr.as_bytes().first()?;
    if first.is_ascii_digit() || *first == b'-' {
        return serde_json::from_str::<serde_json::Number>(expr)
            .ok()
            .map(Value::Number);
    }

    None
}

/// Resolve a dotted path
fn resolve_path<'a>(context: &'a Context, path: &str) -> Option<&'a Value> {
    let mut parts = path.split('.');
    let mut current = context.get(parts.next()?.trim());

    for part in parts {
        let part = part.trim();
        current = match current {
            Value::Object(members) => members.get(part)?,
            Value::Array(items) => items.get(part.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }

    Some(current)
}
