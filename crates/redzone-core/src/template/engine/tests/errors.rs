//! Error handling tests for template engine

use super::helpers::simple_context;
use super::*;
use serde_json::json;

#[test]
fn test_error_malformed_unclosed_variable() {
    let context = simple_context();
    let result = render("Value: {{title", &context);
    assert_eq!(
        result,
        Err(TemplateError::UnclosedDelimiter {
            delimiter: "{{",
            line: 1
        })
    );
}

#[test]
fn test_error_unclosed_for_loop() {
    let context = simple_context();
    let result = render("{% for x in items %}{{ x }}", &context);
    match result {
        Err(TemplateError::UnclosedBlock { tag, .. }) => assert_eq!(tag, "for"),
        other => panic!("Expected UnclosedBlock, got {other:?}"),
    }
}

#[test]
fn test_error_syntax_reported_before_render() {
    // The loop source is not iterable, but the template never gets that far.
    let context = Context::new().with("n", 1);
    let result = render("{% for x in n %}{% endfor %}{% bogus %}", &context);
    assert!(matches!(result, Err(TemplateError::UnknownTag { .. })));
}

#[test]
fn test_error_invalid_root_context() {
    for data in [json!([1, 2]), json!("text"), json!(null)] {
        let result = Context::from_json(data);
        assert!(matches!(result, Err(TemplateError::InvalidContext { .. })));
    }
}

#[test]
fn test_error_sink_failure() {
    struct Refuse;
    impl std::fmt::Write for Refuse {
        fn write_str(&mut self, _: &str) -> std::fmt::Result {
            Err(std::fmt::Error)
        }
    }

    let template = TemplateEngine::new().compile("text").unwrap();
    let result = template.render(&mut Refuse, &Context::new());
    assert_eq!(result, Err(TemplateError::Sink));
}

#[test]
fn test_error_messages() {
    let cases = [
        (
            TemplateError::UnclosedBlock {
                tag: "for".to_string(),
                line: 2,
            },
            "Unclosed 'for' block opened at line 2",
        ),
        (
            TemplateError::MismatchedEndTag {
                expected: "endfor".to_string(),
                found: "endwhile".to_string(),
                line: 5,
            },
            "Mismatched end tag at line 5: expected 'endfor', found 'endwhile'",
        ),
        (
            TemplateError::NotIterable {
                value: "42".to_string(),
            },
            "42 is not iterable",
        ),
        (
            TemplateError::TemplateNotFound {
                name: "x".to_string(),
                searched: Vec::new(),
            },
            "Template 'x' not found (searched: no search paths configured)",
        ),
    ];

    for (error, message) in cases {
        assert_eq!(error.to_string(), message);
    }
}
