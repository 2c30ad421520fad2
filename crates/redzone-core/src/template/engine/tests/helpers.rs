//! Shared test helpers for template engine tests

use crate::template::engine::{Children, Context, CustomTag, Fragment};
use crate::template::error::TemplateError;
use serde_json::json;
use std::fmt;

/// Create a simple test context with basic scalar values
pub(super) fn simple_context() -> Context {
    Context::from_json(json!({
        "title": "My Title",
        "count": 42,
        "price": 9.99,
        "enabled": true,
        "nothing": null,
    }))
    .unwrap()
}

/// Create a nested test context with arrays and objects
pub(super) fn nested_context() -> Context {
    Context::from_json(json!({
        "paper": {
            "title": "Research Paper",
            "language": "en",
            "authors": [
                { "name": "John Doe", "email": "john@example.com" },
                { "name": "Jane Smith", "email": "jane@example.com" },
            ],
        },
        "items": ["a", "b", "c"],
        "scores": { "b": 2, "a": 1 },
    }))
    .unwrap()
}

/// Block tag that upper-cases whatever its body renders
#[derive(Debug, Default)]
pub(super) struct UpperTag;

impl CustomTag for UpperTag {
    fn name(&self) -> &str {
        "upper"
    }

    fn is_block(&self) -> bool {
        true
    }

    fn compile(&mut self, fragment: &Fragment<'_>) -> Result<(), TemplateError> {
        if fragment.clean() == "upper" {
            Ok(())
        } else {
            Err(TemplateError::MalformedTag {
                text: fragment.clean().to_string(),
                line: fragment.line,
            })
        }
    }

    fn render(
        &self,
        children: Children<'_>,
        sink: &mut dyn fmt::Write,
        context: &Context,
    ) -> Result<(), TemplateError> {
        let mut body = String::new();
        children.render(&mut body, context)?;
        sink.write_str(&body.to_uppercase())?;
        Ok(())
    }
}

/// Leaf tag that writes a fixed marker
#[derive(Debug, Default)]
pub(super) struct MarkTag;

impl CustomTag for MarkTag {
    fn name(&self) -> &str {
        "mark"
    }

    fn is_block(&self) -> bool {
        false
    }

    fn compile(&mut self, _fragment: &Fragment<'_>) -> Result<(), TemplateError> {
        Ok(())
    }

    fn render(
        &self,
        _children: Children<'_>,
        sink: &mut dyn fmt::Write,
        _context: &Context,
    ) -> Result<(), TemplateError> {
        sink.write_str("*")?;
        Ok(())
    }
}

/// Block tag that reports how many direct children its body has
#[derive(Debug, Default)]
pub(super) struct CountTag;

impl CustomTag for CountTag {
    fn name(&self) -> &str {
        "count"
    }

    fn is_block(&self) -> bool {
        true
    }

    fn compile(&mut self, _fragment: &Fragment<'_>) -> Result<(), TemplateError> {
        Ok(())
    }

    fn render(
        &self,
        children: Children<'_>,
        sink: &mut dyn fmt::Write,
        _context: &Context,
    ) -> Result<(), TemplateError> {
        if children.is_empty() {
            sink.write_str("empty")?;
        } else {
            write!(sink, "{}", children.len())?;
        }
        Ok(())
    }
}
