//! Tag registry and engine configuration

use super::blocks::{ConditionalNode, ForNode, IncludeNode};
use super::node::{CustomTag, Node};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Zero-argument constructor for the node behind a tag keyword
pub type NodeFactory = Arc<dyn Fn() -> Node + Send + Sync>;

/// Keyword → node factory mapping
///
/// Keywords starting with `end` can be registered but never reached: the
/// tokenizer classifies such tags as end tags.
#[derive(Clone)]
pub struct Registry {
    factories: HashMap<String, NodeFactory>,
}

impl Registry {
    /// A registry with no tags at all
    pub fn empty() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// The built-in tags: `for`, `if`, `include`
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry
            .register(ForNode::KEYWORD, || Node::For(ForNode::default()))
            .register(ConditionalNode::KEYWORD, || Node::If(ConditionalNode::default()))
            .register(IncludeNode::KEYWORD, || Node::Include(IncludeNode::default()));
        registry
    }

    /// Register (or replace) the factory for `keyword`
    pub fn register<F>(&mut self, keyword: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn() -> Node + Send + Sync + 'static,
    {
        self.factories.insert(keyword.into(), Arc::new(factory));
        self
    }

    /// Register a [`CustomTag`] built with `Default`
    pub fn register_tag<T>(&mut self, keyword: impl Into<String>) -> &mut Self
    where
        T: CustomTag + Default + 'static,
    {
        self.register(keyword, || Node::Custom(Box::new(T::default())))
    }

    /// Factory registered for `keyword`
    pub fn get(&self, keyword: &str) -> Option<&NodeFactory> {
        self.factories.get(keyword)
    }

    /// Whether `keyword` is registered
    pub fn contains(&self, keyword: &str) -> bool {
        self.factories.contains_key(keyword)
    }

    /// Registered keywords, sorted
    pub fn keywords(&self) -> Vec<&str> {
        let mut keywords: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        keywords.sort_unstable();
        keywords
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("keywords", &self.keywords())
            .finish()
    }
}

/// Everything a [`TemplateEngine`](super::TemplateEngine) is configured with
///
/// Built up front with the consuming builder methods, then moved into the
/// engine, which only ever reads it.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    registry: Registry,
    search_paths: Vec<PathBuf>,
    extension: Option<String>,
}

impl EngineConfig {
    /// Built-in tags, no search paths
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole registry
    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    /// Register a tag factory
    pub fn register<F>(mut self, keyword: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> Node + Send + Sync + 'static,
    {
        self.registry.register(keyword, factory);
        self
    }

    /// Register a [`CustomTag`] built with `Default`
    pub fn register_tag<T>(mut self, keyword: impl Into<String>) -> Self
    where
        T: CustomTag + Default + 'static,
    {
        self.registry.register_tag::<T>(keyword);
        self
    }

    /// Append a directory to the search-path list
    pub fn search_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.search_paths.push(path.into());
        self
    }

    /// Append several directories to the search-path list
    pub fn search_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.search_paths.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Default extension tried for template names without one
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn search_path_list(&self) -> &[PathBuf] {
        &self.search_paths
    }

    pub fn default_extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }
}
