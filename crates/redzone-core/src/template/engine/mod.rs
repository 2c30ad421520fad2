//! Template engine implementation

mod blocks;
mod context;
mod expr;
mod helpers;
mod node;
mod parser;
mod registry;
mod tokenize;

use crate::template::error::TemplateError;
use crate::template::loader::TemplateLoader;

use parser::Parser;

pub use blocks::{ConditionalNode, ForNode, IncludeNode};
pub use context::Context;
pub use expr::{evaluate, is_truthy};
pub use node::{expect_terminator, Children, CustomTag, Node, NodeId, Template};
pub use registry::{EngineConfig, NodeFactory, Registry};
pub use tokenize::{Fragment, FragmentKind, FragmentStream};

/// Template engine: compiles template text with a fixed configuration
///
/// The configuration is moved in at construction and never changes
/// afterwards, so an engine can be shared freely between threads.
#[derive(Debug)]
pub struct TemplateEngine {
    config: EngineConfig,
    loader: TemplateLoader,
}

impl TemplateEngine {
    /// Create an engine with the built-in tags and no search paths
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine from a finished configuration
    pub fn with_config(config: EngineConfig) -> Self {
        let loader = TemplateLoader::new(
            config.search_path_list().to_vec(),
            config.default_extension().map(str::to_string),
        );
        Self { config, loader }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn loader(&self) -> &TemplateLoader {
        &self.loader
    }

    /// Compile template text
    ///
    /// # Errors
    ///
    /// Any syntax error of the template (or of a template it includes),
    /// and loader errors for includes.
    pub fn compile(&self, source: &str) -> Result<Template, TemplateError> {
        Parser::new(&self.config, &self.loader).parse(source)
    }

    /// Resolve `name` through the search paths and compile it
    pub fn compile_file(&self, name: &str) -> Result<Template, TemplateError> {
        let (path, source) = self.loader.load(name)?;
        tracing::debug!(name, path = %path.display(), "loaded template");
        self.compile(&source)
    }

    /// Compile and render in one step
    pub fn render(&self, source: &str, context: &Context) -> Result<String, TemplateError> {
        self.compile(source)?.render_to_string(context)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to render a template with the built-in tags
pub fn render(template: &str, context: &Context) -> Result<String, TemplateError> {
    TemplateEngine::new().render(template, context)
}

#[cfg(test)]
mod tests;
