//! Compiled template tree
//!
//! A [`Template`] is an arena of [`Node`]s addressed by [`NodeId`]. Slot 0 is
//! always the root; every other slot has exactly one parent, which lists it
//! in its children. The tree is never mutated after parsing returns, so a
//! `Template` can be rendered from many threads at once.

use super::blocks::{ConditionalNode, ForNode, IncludeNode};
use super::context::Context;
use super::expr;
use super::helpers::stringify_value;
use super::parser::Parser;
use super::tokenize::Fragment;
use crate::template::error::TemplateError;
use std::fmt;

/// Index of a node inside its [`Template`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in the arena
    pub fn index(self) -> usize {
        self.0
    }
}

/// A user-defined tag
///
/// Registered through [`Registry::register`](super::Registry::register)
/// with a factory returning [`Node::Custom`].
pub trait CustomTag: fmt::Debug + Send + Sync {
    /// Tag name, used in error messages and for the default terminator
    fn name(&self) -> &str;

    /// Whether the tag encloses a body closed by an end tag
    fn is_block(&self) -> bool;

    /// Parse the tag's own grammar from its fragment
    fn compile(&mut self, fragment: &Fragment<'_>) -> Result<(), TemplateError>;

    /// Check the keyword of the end tag closing this block
    ///
    /// The default accepts exactly `end<name>`.
    fn validate_terminator(&self, keyword: &str, line: usize) -> Result<(), TemplateError> {
        let expected = format!("end{}", self.name());
        expect_terminator(&expected, keyword, line)
    }

    /// Write the tag's output; `children` renders the enclosed body
    fn render(
        &self,
        children: Children<'_>,
        sink: &mut dyn fmt::Write,
        context: &Context,
    ) -> Result<(), TemplateError>;
}

/// One executable unit of a template
#[derive(Debug)]
pub enum Node {
    /// Sentinel top of the tree
    Root,
    /// Literal text
    Text(String),
    /// `{{ expr }}` substitution
    Variable(String),
    /// `{% for %}` loop
    For(ForNode),
    /// `{% if %}` conditional
    If(ConditionalNode),
    /// `{% include %}` of another template
    Include(IncludeNode),
    /// A registered user-defined tag
    Custom(Box<dyn CustomTag>),
}

impl Node {
    /// Whether this node needs a matching end tag
    pub fn is_block(&self) -> bool {
        match self {
            Node::For(_) | Node::If(_) => true,
            Node::Custom(tag) => tag.is_block(),
            Node::Root | Node::Text(_) | Node::Variable(_) | Node::Include(_) => false,
        }
    }

    /// Human-readable tag name
    pub fn name(&self) -> &str {
        match self {
            Node::Root => "root",
            Node::Text(_) => "text",
            Node::Variable(_) => "variable",
            Node::For(_) => "for",
            Node::If(_) => "if",
            Node::Include(_) => "include",
            Node::Custom(tag) => tag.name(),
        }
    }

    /// Parse the tag grammar of a freshly instantiated node
    pub(crate) fn compile(
        &mut self,
        fragment: &Fragment<'_>,
        parser: &Parser<'_>,
    ) -> Result<(), TemplateError> {
        match self {
            Node::For(node) => node.compile(fragment),
            Node::If(node) => node.compile(fragment),
            Node::Include(node) => node.compile(fragment, parser),
            Node::Custom(tag) => tag.compile(fragment),
            Node::Root | Node::Text(_) | Node::Variable(_) => Ok(()),
        }
    }

    /// Check the keyword of the end tag that popped this node
    pub(crate) fn validate_terminator(
        &self,
        keyword: &str,
        line: usize,
    ) -> Result<(), TemplateError> {
        match self {
            Node::For(_) => expect_terminator(ForNode::TERMINATOR, keyword, line),
            Node::If(_) => expect_terminator(ConditionalNode::TERMINATOR, keyword, line),
            Node::Custom(tag) => tag.validate_terminator(keyword, line),
            _ => expect_terminator(&format!("end{}", self.name()), keyword, line),
        }
    }
}

/// Fail unless `found` is exactly `expected`
pub fn expect_terminator(expected: &str, found: &str, line: usize) -> Result<(), TemplateError> {
    if found == expected {
        Ok(())
    } else {
        Err(TemplateError::MismatchedEndTag {
            expected: expected.to_string(),
            found: found.to_string(),
            line,
        })
    }
}

#[derive(Debug)]
struct Slot {
    node: Node,
    line: usize,
    children: Vec<NodeId>,
}

/// A compiled template
#[derive(Debug)]
pub struct Template {
    slots: Vec<Slot>,
}

impl Template {
    const ROOT: NodeId = NodeId(0);

    pub(crate) fn new() -> Self {
        Self {
            slots: vec![Slot {
                node: Node::Root,
                line: 1,
                children: Vec::new(),
            }],
        }
    }

    /// Append `node` as the last child of `parent`
    pub(crate) fn attach(&mut self, parent: NodeId, node: Node, line: usize) -> NodeId {
        let id = NodeId(self.slots.len());
        self.slots.push(Slot {
            node,
            line,
            children: Vec::new(),
        });
        self.slots[parent.0].children.push(id);
        id
    }

    /// The root node
    pub fn root(&self) -> NodeId {
        Self::ROOT
    }

    /// Node stored at `id`
    pub fn node(&self, id: NodeId) -> &Node {
        &self.slots[id.0].node
    }

    /// Line where the node's tag starts
    pub fn line(&self, id: NodeId) -> usize {
        self.slots[id.0].line
    }

    /// Children of `id`, in source order
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.slots[id.0].children
    }

    /// Number of nodes, root included
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the template has nothing but its root
    pub fn is_empty(&self) -> bool {
        self.slots.len() == 1
    }

    /// Render into `sink`
    pub fn render(
        &self,
        sink: &mut dyn fmt::Write,
        context: &Context,
    ) -> Result<(), TemplateError> {
        self.render_node(Self::ROOT, sink, context)
    }

    /// Render into a fresh string
    pub fn render_to_string(&self, context: &Context) -> Result<String, TemplateError> {
        let mut output = String::new();
        self.render(&mut output, context)?;
        Ok(output)
    }

    pub(crate) fn render_node(
        &self,
        id: NodeId,
        sink: &mut dyn fmt::Write,
        context: &Context,
    ) -> Result<(), TemplateError> {
        match self.node(id) {
            Node::Root => self.render_children(id, sink, context),
            Node::Text(text) => Ok(sink.write_str(text)?),
            Node::Variable(expression) => {
                let value = expr::evaluate(context, expression);
                Ok(sink.write_str(&stringify_value(&value))?)
            }
            Node::For(node) => node.render(Children::new(self, id), sink, context),
            Node::If(node) => node.render(Children::new(self, id), sink, context),
            Node::Include(node) => node.render(sink, context),
            Node::Custom(tag) => tag.render(Children::new(self, id), sink, context),
        }
    }

    pub(crate) fn render_children(
        &self,
        id: NodeId,
        sink: &mut dyn fmt::Write,
        context: &Context,
    ) -> Result<(), TemplateError> {
        for &child in self.children(id) {
            self.render_node(child, sink, context)?;
        }
        Ok(())
    }
}

/// Handle for rendering the body of a block node
#[derive(Clone, Copy)]
pub struct Children<'t> {
    template: &'t Template,
    parent: NodeId,
}

impl<'t> Children<'t> {
    fn new(template: &'t Template, parent: NodeId) -> Self {
        Self { template, parent }
    }

    /// Render every child in order
    pub fn render(
        &self,
        sink: &mut dyn fmt::Write,
        context: &Context,
    ) -> Result<(), TemplateError> {
        self.template.render_children(self.parent, sink, context)
    }

    /// Number of direct children
    pub fn len(&self) -> usize {
        self.template.children(self.parent).len()
    }

    /// Whether the block body is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
