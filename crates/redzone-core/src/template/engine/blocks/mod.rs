//! Built-in tags

mod conditional;
mod for_loop;
mod include;

pub use conditional::ConditionalNode;
pub use for_loop::ForNode;
pub use include::IncludeNode;

/// Strip a leading tag keyword, requiring whitespace (or nothing) after it
///
/// `split_keyword("for x in y", "for")` → `Some(" x in y")`;
/// `split_keyword("format", "for")` → `None`.
pub(crate) fn split_keyword<'a>(text: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = text.strip_prefix(keyword)?;
    (rest.is_empty() || rest.starts_with(char::is_whitespace)).then_some(rest)
}

/// `[A-Za-z_][A-Za-z0-9_]*`
pub(crate) fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_keyword() {
        assert_eq!(split_keyword("for x in y", "for"), Some(" x in y"));
        assert_eq!(split_keyword("for", "for"), Some(""));
        assert_eq!(split_keyword("format", "for"), None);
        assert_eq!(split_keyword("if x", "for"), None);
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("item"));
        assert!(is_identifier("_k2"));
        assert!(!is_identifier("2k"));
        assert!(!is_identifier("a-b"));
        assert!(!is_identifier(""));
    }
}
