//! Fragment stream → node tree
//!
//! The parser keeps a stack of open block nodes seeded with the root. Text
//! and variables attach to the top of the stack; an open block attaches and,
//! when it is a block, becomes the new top; an end tag pops the top and asks
//! it to validate the terminator.

use super::node::{Node, NodeId, Template};
use super::registry::EngineConfig;
use super::tokenize::{Fragment, FragmentKind, FragmentStream};
use crate::config::consts::MAX_INCLUDE_DEPTH;
use crate::template::error::TemplateError;
use crate::template::loader::TemplateLoader;

pub(crate) struct Parser<'e> {
    config: &'e EngineConfig,
    loader: &'e TemplateLoader,
    depth: usize,
}

impl<'e> Parser<'e> {
    pub(crate) fn new(config: &'e EngineConfig, loader: &'e TemplateLoader) -> Self {
        Self {
            config,
            loader,
            depth: 0,
        }
    }

    /// Compile template source into a tree
    pub(crate) fn parse(&self, source: &str) -> Result<Template, TemplateError> {
        let mut template = Template::new();
        let mut stack: Vec<NodeId> = vec![template.root()];

        for fragment in FragmentStream::new(source) {
            let fragment = fragment?;
            let top = stack[stack.len() - 1];

            match fragment.kind {
                FragmentKind::Text => {
                    template.attach(top, Node::Text(fragment.raw.to_string()), fragment.line);
                }
                FragmentKind::Variable => {
                    let expression = fragment.clean();
                    if expression.is_empty() {
                        return Err(TemplateError::MalformedTag {
                            text: fragment.raw.to_string(),
                            line: fragment.line,
                        });
                    }
                    template.attach(top, Node::Variable(expression.to_string()), fragment.line);
                }
                FragmentKind::OpenBlock => {
                    let node = self.instantiate(&fragment)?;
                    let is_block = node.is_block();
                    let id = template.attach(top, node, fragment.line);
                    if is_block {
                        stack.push(id);
                    }
                }
                FragmentKind::CloseBlock => {
                    let keyword = fragment.keyword();
                    if stack.len() == 1 {
                        return Err(TemplateError::UnexpectedEndTag {
                            keyword: keyword.to_string(),
                            line: fragment.line,
                        });
                    }
                    stack.pop();
                    template
                        .node(top)
                        .validate_terminator(keyword, fragment.line)?;
                }
            }
        }

        if stack.len() > 1 {
            let open = stack[stack.len() - 1];
            return Err(TemplateError::UnclosedBlock {
                tag: template.node(open).name().to_string(),
                line: template.line(open),
            });
        }

        tracing::debug!(nodes = template.len(), depth = self.depth, "compiled template");
        Ok(template)
    }

    /// Build and compile the node for an open-block fragment
    fn instantiate(&self, fragment: &Fragment<'_>) -> Result<Node, TemplateError> {
        let keyword = fragment.keyword();
        if keyword.is_empty() {
            return Err(TemplateError::MalformedTag {
                text: fragment.raw.to_string(),
                line: fragment.line,
            });
        }

        let factory = self
            .config
            .registry()
            .get(keyword)
            .ok_or_else(|| TemplateError::UnknownTag {
                keyword: keyword.to_string(),
                line: fragment.line,
            })?;

        let mut node = factory();
        node.compile(fragment, self)?;
        tracing::trace!(keyword, line = fragment.line, block = node.is_block(), "tag");
        Ok(node)
    }

    /// Load and compile a template referenced from an include tag
    pub(crate) fn include(&self, name: &str) -> Result<Template, TemplateError> {
        if self.depth >= MAX_INCLUDE_DEPTH {
            return Err(TemplateError::IncludeDepthExceeded {
                name: name.to_string(),
                max: MAX_INCLUDE_DEPTH,
            });
        }

        let (path, source) = self.loader.load(name)?;
        tracing::debug!(name, path = %path.display(), "including template");

        let nested = Parser {
            config: self.config,
            loader: self.loader,
            depth: self.depth + 1,
        };
        nested.parse(&source)
    }
}
