//! Constants shared across the workspace

/// Configuration file looked up in the working directory
pub const CONFIG_FILE: &str = "redzone.toml";

/// Maximum nesting of `{% include %}` tags
pub const MAX_INCLUDE_DEPTH: usize = 16;
