//! Basic rendering tests for template engine

use super::helpers::{nested_context, simple_context};
use super::*;
use serde_json::json;

#[test]
fn test_render_simple_variable() {
    let context = simple_context();
    let result = render("Title: {{title}}", &context).unwrap();
    assert_eq!(result, "Title: My Title");
}

#[test]
fn test_render_variable_with_spaces() {
    let context = simple_context();
    assert_eq!(render("Title: {{ title }}", &context).unwrap(), "Title: My Title");
    assert_eq!(render("Title: {{  title  }}", &context).unwrap(), "Title: My Title");
}

#[test]
fn test_render_nested_key() {
    let context = nested_context();
    let result = render("Paper: {{ paper.title }}", &context).unwrap();
    assert_eq!(result, "Paper: Research Paper");
}

#[test]
fn test_render_array_index() {
    let context = nested_context();
    let result = render("{{ paper.authors.1.name }}", &context).unwrap();
    assert_eq!(result, "Jane Smith");
}

#[test]
fn test_render_scalar_values() {
    let context = simple_context();
    assert_eq!(render("{{count}}", &context).unwrap(), "42");
    assert_eq!(render("{{price}}", &context).unwrap(), "9.99");
    assert_eq!(render("{{enabled}}", &context).unwrap(), "true");
}

#[test]
fn test_render_missing_and_null_are_empty() {
    let context = simple_context();
    assert_eq!(render("[{{ nothing }}]", &context).unwrap(), "[]");
    assert_eq!(render("[{{ missing.deep.path }}]", &context).unwrap(), "[]");
}

#[test]
fn test_render_composite_values_as_json() {
    let context = nested_context();
    assert_eq!(render("{{ items }}", &context).unwrap(), r#"["a","b","c"]"#);
    assert_eq!(render("{{ scores }}", &context).unwrap(), r#"{"a":1,"b":2}"#);
}

#[test]
fn test_render_literals() {
    let context = Context::new();
    assert_eq!(render("{{ \"text\" }}-{{ 7 }}", &context).unwrap(), "text-7");
}

#[test]
fn test_render_no_tags_is_identity() {
    let context = simple_context();
    for template in [
        "This is plain text with no tags.",
        "",
        "multi\nline\n\ttext { with } single braces % and # signs",
        "unicode ✓ — ß",
    ] {
        assert_eq!(render(template, &context).unwrap(), template);
        assert_eq!(render(template, &Context::new()).unwrap(), template);
    }
}

#[test]
fn test_render_text_independent_of_context() {
    let template = "Dear {{ name }}, your order #{{ order }} shipped.";
    let first = Context::new().with("name", "Ada").with("order", 7);
    let second = Context::new().with("name", "Bob").with("order", 7).with("extra", true);

    assert_eq!(
        render(template, &first).unwrap(),
        "Dear Ada, your order #7 shipped."
    );
    assert_eq!(
        render(template, &second).unwrap(),
        "Dear Bob, your order #7 shipped."
    );
    assert_eq!(
        render(template, &Context::new()).unwrap(),
        "Dear , your order # shipped."
    );
}

#[test]
fn test_render_comments_produce_nothing() {
    let context = simple_context();
    let result = render("a{# {{ title }} {% for %} #}b", &context).unwrap();
    assert_eq!(result, "ab");
}

#[test]
fn test_render_conditional() {
    let context = Context::from_json(json!({
        "admin": true,
        "guest": false,
        "tags": [],
    }))
    .unwrap();

    assert_eq!(render("{% if admin %}yes{% endif %}", &context).unwrap(), "yes");
    assert_eq!(render("{% if guest %}yes{% endif %}", &context).unwrap(), "");
    assert_eq!(render("{% if missing %}yes{% endif %}", &context).unwrap(), "");
    assert_eq!(
        render("{% if not tags %}none{% endif %}", &context).unwrap(),
        "none"
    );
}

#[test]
fn test_compiled_template_renders_repeatedly() {
    let engine = TemplateEngine::new();
    let template = engine.compile("<{{ v }}>").unwrap();

    for v in ["a", "b", "c"] {
        let context = Context::new().with("v", v);
        assert_eq!(template.render_to_string(&context).unwrap(), format!("<{v}>"));
    }
}

#[test]
fn test_render_into_existing_sink() {
    let template = TemplateEngine::new().compile("{{ a }}").unwrap();
    let mut sink = String::from("prefix:");
    template
        .render(&mut sink, &Context::new().with("a", 1))
        .unwrap();
    assert_eq!(sink, "prefix:1");
}
