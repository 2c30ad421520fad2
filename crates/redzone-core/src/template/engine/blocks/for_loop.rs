//! `{% for name[, name] in expr %} ... {% endfor %}`

use super::{is_identifier, split_keyword};
use crate::template::engine::context::Context;
use crate::template::engine::expr;
use crate::template::engine::helpers::create_loop_context;
use crate::template::engine::node::Children;
use crate::template::engine::tokenize::Fragment;
use crate::template::error::TemplateError;
use serde_json::Value;
use std::fmt;

/// Iteration over an array or an object
///
/// Arrays bind the first name to each element. Objects bind the first name
/// to each key and, when declared, the second name to the member value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForNode {
    source_expr: String,
    binding_names: Vec<String>,
}

impl ForNode {
    pub const KEYWORD: &'static str = "for";
    pub const TERMINATOR: &'static str = "endfor";

    /// Expression producing the iterated value
    pub fn source_expr(&self) -> &str {
        &self.source_expr
    }

    /// Loop variable names (one or two)
    pub fn binding_names(&self) -> &[String] {
        &self.binding_names
    }

    pub(crate) fn compile(&mut self, fragment: &Fragment<'_>) -> Result<(), TemplateError> {
        let text = fragment.clean();
        let line = fragment.line;
        let malformed = || TemplateError::MalformedTag {
            text: text.to_string(),
            line,
        };

        let rest = split_keyword(text, Self::KEYWORD).ok_or_else(malformed)?;
        let (bindings, source) = split_on_in(rest).ok_or_else(malformed)?;
        if bindings.is_empty() || source.is_empty() {
            return Err(malformed());
        }

        let names: Vec<&str> = bindings.split(',').map(str::trim).collect();
        if names.iter().any(|name| name.is_empty()) {
            return Err(TemplateError::EmptyBindingName {
                text: bindings.to_string(),
                line,
            });
        }
        if names.len() > 2 || !names.iter().all(|name| is_identifier(name)) {
            return Err(malformed());
        }
        if names.len() == 2 && names[0] == names[1] {
            return Err(malformed());
        }

        self.binding_names = names.into_iter().map(str::to_string).collect();
        self.source_expr = source.to_string();
        Ok(())
    }

    pub(crate) fn render(
        &self,
        children: Children<'_>,
        sink: &mut dyn fmt::Write,
        context: &Context,
    ) -> Result<(), TemplateError> {
        let source = expr::evaluate(context, &self.source_expr);
        let first = self.binding_names[0].as_str();
        let second = self.binding_names.get(1).map(String::as_str);
        let base = context.bindings();

        match &source {
            Value::Array(items) => {
                for item in items {
                    let scope = create_loop_context(base, [(first, item.clone())]);
                    children.render(sink, &scope)?;
                }
            }
            Value::Object(members) => {
                // Keys in sorted order whatever order the map keeps
                let mut members: Vec<(&String, &Value)> = members.iter().collect();
                members.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));

                for (key, value) in members {
                    let mut bindings = vec![(first, Value::String(key.clone()))];
                    if let Some(second) = second {
                        bindings.push((second, value.clone()));
                    }
                    let scope = create_loop_context(base, bindings);
                    children.render(sink, &scope)?;
                }
            }
            other => {
                return Err(TemplateError::NotIterable {
                    value: other.to_string(),
                })
            }
        }

        Ok(())
    }
}

/// Split `names in expr` at the first standalone `in`
fn split_on_in(rest: &str) -> Option<(&str, &str)> {
    let bytes = rest.as_bytes();
    rest.match_indices("in").find_map(|(idx, _)| {
        let before = idx.checked_sub(1).map(|i| bytes[i])?;
        let after = *bytes.get(idx + 2)?;
        (before.is_ascii_whitespace() && after.is_ascii_whitespace())
            .then(|| (rest[..idx].trim(), rest[idx + 2..].trim()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::engine::tokenize::FragmentKind;

    fn fragment(raw: &str) -> Fragment<'_> {
        Fragment {
            kind: FragmentKind::OpenBlock,
            raw,
            line: 1,
        }
    }

    fn compile(raw: &str) -> Result<ForNode, TemplateError> {
        let mut node = ForNode::default();
        node.compile(&fragment(raw))?;
        Ok(node)
    }

    #[test]
    fn test_compile_single_binding() {
        let node = compile("{% for item in items %}").unwrap();
        assert_eq!(node.binding_names(), ["item"]);
        assert_eq!(node.source_expr(), "items");
    }

    #[test]
    fn test_compile_two_bindings_whitespace_tolerant() {
        let node = compile("{%for   k ,v   in  data.map  %}").unwrap();
        assert_eq!(node.binding_names(), ["k", "v"]);
        assert_eq!(node.source_expr(), "data.map");
    }

    #[test]
    fn test_compile_binding_containing_in() {
        let node = compile("{% for index in indices %}").unwrap();
        assert_eq!(node.binding_names(), ["index"]);
        assert_eq!(node.source_expr(), "indices");
    }

    #[test]
    fn test_compile_rejects_empty_binding() {
        for raw in ["{% for ,y in items %}", "{% for x, in items %}"] {
            match compile(raw) {
                Err(TemplateError::EmptyBindingName { .. }) => {}
                other => panic!("Expected EmptyBindingName for {raw}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_compile_rejects_malformed_headers() {
        for raw in [
            "{% for x items %}",
            "{% for x in %}",
            "{% for in items %}",
            "{% forx in items %}",
            "{% each x in items %}",
            "{% for a, b, c in items %}",
            "{% for a, a in items %}",
            "{% for a b in items %}",
        ] {
            match compile(raw) {
                Err(TemplateError::MalformedTag { text, .. }) => {
                    assert_eq!(text, fragment(raw).clean());
                }
                other => panic!("Expected MalformedTag for {raw}, got {other:?}"),
            }
        }
    }
}
