//! Helper functions for template rendering

use super::context::Context;
use serde_json::{Map, Value};

/// Stringify a value for template output
///
/// Null renders as nothing so optional fields can be interpolated freely.
pub(crate) fn stringify_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Create an independent loop context: the base bindings with the loop
/// variables written over them
pub(crate) fn create_loop_context<'a>(
    base: &Map<String, Value>,
    bindings: impl IntoIterator<Item = (&'a str, Value)>,
) -> Context {
    let mut scope = base.clone();
    for (name, value) in bindings {
        scope.insert(name.to_string(), value);
    }
    Context::from_bindings(scope)
}
