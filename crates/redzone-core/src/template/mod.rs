//! Template module - tokenizer, parser and node-tree renderer
//!
//! Templates are compiled once into a [`Template`] tree and rendered any
//! number of times against JSON-like data held in a [`Context`].
//!
//! ## Syntax
//!
//! - Variables: `{{ user.name }}` (missing paths render as nothing)
//! - Loops: `{% for item in items %} ... {% endfor %}`,
//!   `{% for key, value in object %} ... {% endfor %}`
//! - Conditionals: `{% if user.admin %} ... {% endif %}`, `{% if not items %}`
//! - Includes: `{% include "partials/nav.html" %}` (resolved through search paths)
//! - Comments: `{# ignored #}`
//!
//! ## Example
//!
//! ```rust
//! use redzone_core::template::{Context, TemplateEngine};
//! use serde_json::json;
//!
//! let engine = TemplateEngine::new();
//! let template = engine
//!     .compile("{% for n in names %}<{{ n }}>{% endfor %}")
//!     .unwrap();
//! let context = Context::from_json(json!({ "names": ["a", "b"] })).unwrap();
//! assert_eq!(template.render_to_string(&context).unwrap(), "<a><b>");
//! ```

pub mod engine;
pub mod error;
pub mod loader;

pub use engine::{
    render, Children, Context, CustomTag, EngineConfig, Fragment, FragmentKind, Node, Registry,
    Template, TemplateEngine,
};
pub use error::TemplateError;
pub use loader::TemplateLoader;
