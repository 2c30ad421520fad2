//! Render data loading (JSON or TOML → [`Context`])

use crate::error::{RedzoneError, Result};
use crate::template::Context;
use serde_json::Value;
use std::path::Path;

/// Supported data file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Toml,
}

impl DataFormat {
    /// Pick a format from a file extension; anything but `.toml` is JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => DataFormat::Toml,
            _ => DataFormat::Json,
        }
    }
}

/// Parse data text into a render context
pub fn parse_context(content: &str, format: DataFormat) -> Result<Context> {
    let value: Value = match format {
        DataFormat::Json => serde_json::from_str(content)?,
        DataFormat::Toml => toml_to_json(toml::from_str(content)?),
    };
    Ok(Context::from_json(value)?)
}

/// Convert TOML data to the JSON value model
///
/// Datetimes become their TOML text; non-finite floats become null.
fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        toml::Value::Float(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(key, value)| (key, toml_to_json(value)))
                .collect(),
        ),
    }
}

/// Read a data file into a render context
pub fn load_context(path: impl AsRef<Path>) -> Result<Context> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .map_err(|e| RedzoneError::DataInvalid(format!("{}: {}", path.display(), e)))?;
    parse_context(&content, DataFormat::from_path(path))
}
