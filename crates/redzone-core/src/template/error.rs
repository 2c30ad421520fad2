//! Template error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while compiling or rendering a template
///
/// Every variant is fail-fast: the parse or render call that produced it is
/// abandoned and nothing further is attempted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// An opening delimiter without its closing counterpart
    #[error("Unclosed '{delimiter}' opened at line {line}")]
    UnclosedDelimiter {
        /// The opening delimiter (`{{`, `{%` or `{#`)
        delimiter: &'static str,
        /// Line number where the delimiter opened
        line: usize,
    },

    /// A tag whose own grammar could not be parsed
    #[error("Malformed tag at line {line}: '{text}'")]
    MalformedTag {
        /// The offending tag text
        text: String,
        /// Line number of the tag
        line: usize,
    },

    /// A loop binding list containing an empty name (e.g. a trailing comma)
    #[error("Empty binding name in '{text}' at line {line}")]
    EmptyBindingName {
        /// The binding list as written
        text: String,
        /// Line number of the tag
        line: usize,
    },

    /// A block tag keyword with no registered factory
    #[error("Unknown tag '{keyword}' at line {line}")]
    UnknownTag {
        /// The keyword that was not found in the registry
        keyword: String,
        /// Line number of the tag
        line: usize,
    },

    /// An end tag with no open block to close
    #[error("Unexpected end tag '{keyword}' at line {line}")]
    UnexpectedEndTag {
        /// The end keyword that was seen
        keyword: String,
        /// Line number of the end tag
        line: usize,
    },

    /// An end tag that does not terminate the innermost open block
    #[error("Mismatched end tag at line {line}: expected '{expected}', found '{found}'")]
    MismatchedEndTag {
        /// The terminator the open block requires
        expected: String,
        /// The keyword actually seen
        found: String,
        /// Line number of the end tag
        line: usize,
    },

    /// A block still open when the input ran out
    #[error("Unclosed '{tag}' block opened at line {line}")]
    UnclosedBlock {
        /// Name of the open block's tag
        tag: String,
        /// Line number where the block opened
        line: usize,
    },

    /// Nested includes exceeded the configured depth
    #[error("Include depth exceeded while including '{name}' (max: {max})")]
    IncludeDepthExceeded {
        /// The template being included when the limit was hit
        name: String,
        /// Maximum include depth
        max: usize,
    },

    /// A loop target that is neither an array nor an object
    #[error("{value} is not iterable")]
    NotIterable {
        /// Serialized form of the offending value
        value: String,
    },

    /// Root data handed to a render that is not an object
    #[error("Render context must be an object, found {found}")]
    InvalidContext {
        /// Serialized form of the offending value
        found: String,
    },

    /// The output sink refused a write
    #[error("Failed to write rendered output")]
    Sink,

    /// No search path contains the named template
    #[error("Template '{name}' not found (searched: {})", display_paths(.searched))]
    TemplateNotFound {
        /// The requested template name
        name: String,
        /// Every candidate path that was checked, in order
        searched: Vec<PathBuf>,
    },

    /// A template name that would resolve outside the search paths
    #[error("Invalid template name '{name}': must be a relative path without '..'")]
    InvalidTemplateName {
        /// The rejected name
        name: String,
    },

    /// Reading a resolved template file failed
    #[error("Failed to read template '{}': {message}", .path.display())]
    Io {
        /// The file that could not be read
        path: PathBuf,
        /// Underlying I/O error message
        message: String,
    },
}

impl TemplateError {
    /// True for errors raised while compiling a template
    pub fn is_syntax_error(&self) -> bool {
        matches!(
            self,
            TemplateError::UnclosedDelimiter { .. }
                | TemplateError::MalformedTag { .. }
                | TemplateError::EmptyBindingName { .. }
                | TemplateError::UnknownTag { .. }
                | TemplateError::UnexpectedEndTag { .. }
                | TemplateError::MismatchedEndTag { .. }
                | TemplateError::UnclosedBlock { .. }
                | TemplateError::IncludeDepthExceeded { .. }
        )
    }

    /// True for errors raised while rendering a compiled template
    pub fn is_render_error(&self) -> bool {
        matches!(
            self,
            TemplateError::NotIterable { .. }
                | TemplateError::InvalidContext { .. }
                | TemplateError::Sink
        )
    }
}

impl From<std::fmt::Error> for TemplateError {
    fn from(_: std::fmt::Error) -> Self {
        TemplateError::Sink
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "no search paths configured".to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
