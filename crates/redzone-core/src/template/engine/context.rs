//! Render context: one scope of name → value bindings

use crate::template::error::TemplateError;
use serde_json::{Map, Value};

static NULL: Value = Value::Null;

/// Binding set visible to expressions at one point of a render
///
/// Contexts are plain values. A nested scope is built by copying the
/// enclosing bindings ([`Context::bindings`]) and handing the edited copy to
/// [`Context::from_bindings`]; no scope ever aliases another.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    bindings: Map<String, Value>,
}

impl Context {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context that owns exactly these bindings
    pub fn from_bindings(bindings: Map<String, Value>) -> Self {
        Self { bindings }
    }

    /// Create a context from JSON-like data
    ///
    /// The data must be an object; its members become the bindings.
    pub fn from_json(data: Value) -> Result<Self, TemplateError> {
        match data {
            Value::Object(bindings) => Ok(Self { bindings }),
            other => Err(TemplateError::InvalidContext {
                found: other.to_string(),
            }),
        }
    }

    /// Add or replace a binding, builder style
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.bindings.insert(name.into(), value.into());
        self
    }

    /// Look up a binding; missing names resolve to null
    pub fn get(&self, name: &str) -> &Value {
        self.bindings.get(name).unwrap_or(&NULL)
    }

    /// All bindings of this scope
    pub fn bindings(&self) -> &Map<String, Value> {
        &self.bindings
    }
}
