//! `{% include name %}` / `{% include "name" %}`

use super::split_keyword;
use crate::template::engine::context::Context;
use crate::template::engine::node::Template;
use crate::template::engine::parser::Parser;
use crate::template::engine::tokenize::Fragment;
use crate::template::error::TemplateError;
use std::fmt;

/// Inlines another template, compiled once together with the includer
#[derive(Debug)]
pub struct IncludeNode {
    name: String,
    template: Template,
}

impl Default for IncludeNode {
    fn default() -> Self {
        Self {
            name: String::new(),
            template: Template::new(),
        }
    }
}

impl IncludeNode {
    pub const KEYWORD: &'static str = "include";

    /// Name of the included template as written in the tag
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The compiled included template
    pub fn template(&self) -> &Template {
        &self.template
    }

    pub(crate) fn compile(
        &mut self,
        fragment: &Fragment<'_>,
        parser: &Parser<'_>,
    ) -> Result<(), TemplateError> {
        let text = fragment.clean();
        let malformed = || TemplateError::MalformedTag {
            text: text.to_string(),
            line: fragment.line,
        };

        let rest = split_keyword(text, Self::KEYWORD)
            .ok_or_else(malformed)?
            .trim();
        let name = unquote(rest);
        if name.is_empty() || name.contains(char::is_whitespace) {
            return Err(malformed());
        }

        self.template = parser.include(name)?;
        self.name = name.to_string();
        Ok(())
    }

    pub(crate) fn render(
        &self,
        sink: &mut dyn fmt::Write,
        context: &Context,
    ) -> Result<(), TemplateError> {
        self.template.render(sink, context)
    }
}

fn unquote(text: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = text
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    text
}
