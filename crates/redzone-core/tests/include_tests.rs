//! `include` tags compiled through the loader

use redzone_core::template::{Context, EngineConfig, Node, TemplateEngine, TemplateError};
use redzone_testkit::TemplateDir;
use serde_json::json;

fn engine_for(dir: &TemplateDir) -> TemplateEngine {
    TemplateEngine::with_config(EngineConfig::new().search_path(dir.path()).extension("html"))
}

#[test]
fn test_include_sees_loop_bindings() {
    let dir = TemplateDir::with_files([("item.html", "<li>{{ item.name }}</li>")]);
    let engine = engine_for(&dir);

    let template = engine
        .compile("<ul>{% for item in items %}{% include \"item\" %}{% endfor %}</ul>")
        .unwrap();
    let context = Context::from_json(json!({
        "items": [{ "name": "a" }, { "name": "b" }]
    }))
    .unwrap();

    assert_eq!(
        template.render_to_string(&context).unwrap(),
        "<ul><li>a</li><li>b</li></ul>"
    );
}

#[test]
fn test_nested_includes() {
    let dir = TemplateDir::with_files([
        ("page.html", "[{% include 'partials/header' %}]"),
        ("partials/header.html", "<h1>{{ title }}</h1>{% include partials/sub %}"),
        ("partials/sub.html", "<h2>sub</h2>"),
    ]);
    let engine = engine_for(&dir);

    let template = engine.compile_file("page").unwrap();
    let context = Context::from_json(json!({ "title": "Hi" })).unwrap();
    assert_eq!(
        template.render_to_string(&context).unwrap(),
        "[<h1>Hi</h1><h2>sub</h2>]"
    );
}

#[test]
fn test_missing_include_fails_at_compile() {
    let dir = TemplateDir::new();
    let engine = engine_for(&dir);

    let err = engine.compile("a{% include nope %}b").unwrap_err();
    assert!(matches!(err, TemplateError::TemplateNotFound { ref name, .. } if name == "nope"));
}

#[test]
fn test_recursive_include_hits_depth_limit() {
    let dir = TemplateDir::with_files([("loop.html", "x{% include loop %}")]);
    let engine = engine_for(&dir);

    let err = engine.compile_file("loop").unwrap_err();
    assert_eq!(
        err,
        TemplateError::IncludeDepthExceeded {
            name: "loop".to_string(),
            max: redzone_core::config::consts::MAX_INCLUDE_DEPTH,
        }
    );
    assert!(err.is_syntax_error());
}

#[test]
fn test_syntax_error_inside_include() {
    let dir = TemplateDir::with_files([("broken.html", "{% for x in xs %}no end")]);
    let engine = engine_for(&dir);

    let err = engine.compile("{% include broken %}").unwrap_err();
    assert_eq!(
        err,
        TemplateError::UnclosedBlock {
            tag: "for".to_string(),
            line: 1,
        }
    );
}

#[test]
fn test_malformed_include_tag() {
    let engine = TemplateEngine::new();
    for source in ["{% include %}", "{% include \"\" %}", "{% include a b %}"] {
        let err = engine.compile(source).unwrap_err();
        assert!(
            matches!(err, TemplateError::MalformedTag { .. }),
            "{source}: {err:?}"
        );
    }
}

#[test]
fn test_include_node_owns_compiled_template() {
    let dir = TemplateDir::with_files([("nav.html", "<nav>{{ title }}</nav>")]);
    let engine = engine_for(&dir);

    let template = engine.compile("{% include \"nav\" %}").unwrap();
    let include_id = template.children(template.root())[0];
    match template.node(include_id) {
        Node::Include(include) => {
            assert_eq!(include.name(), "nav");
            let nav = include.template();
            assert_eq!(nav.children(nav.root()).len(), 3);
        }
        other => panic!("Expected Include node, got {other:?}"),
    }
}
