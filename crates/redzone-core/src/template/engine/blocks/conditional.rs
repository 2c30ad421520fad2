//! `{% if [not] expr %} ... {% endif %}`

use super::split_keyword;
use crate::template::engine::context::Context;
use crate::template::engine::expr;
use crate::template::engine::node::Children;
use crate::template::engine::tokenize::Fragment;
use crate::template::error::TemplateError;
use std::fmt;

/// Renders its body once when the condition is truthy
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConditionalNode {
    condition: String,
    negated: bool,
}

impl ConditionalNode {
    pub const KEYWORD: &'static str = "if";
    pub const TERMINATOR: &'static str = "endif";

    /// Condition expression
    pub fn condition(&self) -> &str {
        &self.condition
    }

    /// Whether the condition is prefixed with `not`
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    pub(crate) fn compile(&mut self, fragment: &Fragment<'_>) -> Result<(), TemplateError> {
        let text = fragment.clean();
        let malformed = || TemplateError::MalformedTag {
            text: text.to_string(),
            line: fragment.line,
        };

        let rest = split_keyword(text, Self::KEYWORD)
            .ok_or_else(malformed)?
            .trim();
        let (negated, condition) = match split_keyword(rest, "not") {
            Some(condition) => (true, condition.trim()),
            None => (false, rest),
        };
        if condition.is_empty() {
            return Err(malformed());
        }

        self.negated = negated;
        self.condition = condition.to_string();
        Ok(())
    }

    pub(crate) fn render(
        &self,
        children: Children<'_>,
        sink: &mut dyn fmt::Write,
        context: &Context,
    ) -> Result<(), TemplateError> {
        let value = expr::evaluate(context, &self.condition);
        if expr::is_truthy(&value) != self.negated {
            children.render(sink, context)?;
        }
        Ok(())
    }
}
