//! Name normalization.
//!
//! Requested component paths are arbitrary strings; registry keys must be
//! identifier-shaped. `slug` turns one into the other: path separators
//! become `--` (keeping hierarchy visually distinct from word breaks),
//! whitespace becomes `-`, everything else outside word chars and hyphens
//! is dropped.

use crate::error::{CoreError, CoreResult};

/// Separator run state while scanning.
#[derive(Clone, Copy, PartialEq)]
enum Run {
    Space,
    Path,
}

/// Check that a string is a valid descriptor identifier:
/// non-empty, word characters and hyphens only.
pub fn is_identifier(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
}

/// Normalize a raw component path into an identifier.
///
/// `slug("parent/child")` is `"parent--child"`,
/// `slug("  Hello World  ")` is `"hello-world"`.
pub fn slug(raw: &str) -> CoreResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::InvalidArgument(
            "component name must not be empty".to_string(),
        ));
    }

    let mut out = String::with_capacity(trimmed.len());
    let mut run: Option<Run> = None;

    for c in trimmed.to_lowercase().chars() {
        if c == '/' || c == '\\' {
            // A path separator anywhere in a run makes the whole run a
            // hierarchy break, even with whitespace around it.
            run = Some(Run::Path);
        } else if c.is_whitespace() {
            if run.is_none() {
                run = Some(Run::Space);
            }
        } else if c.is_alphanumeric() || c == '_' || c == '-' {
            if let Some(kind) = run.take() {
                if !out.is_empty() {
                    match kind {
                        Run::Path => out.push_str("--"),
                        Run::Space => out.push('-'),
                    }
                }
            }
            out.push(c);
        }
        // Anything else is stripped and does not start a separator run.
    }

    let result = out.trim_matches('-').to_string();
    if result.is_empty() {
        return Err(CoreError::InvalidArgument(format!(
            "component name '{}' normalizes to an empty identifier",
            raw
        )));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_path_separators() {
        assert_eq!(slug("parent/child").unwrap(), "parent--child");
        assert_eq!(slug("a/b/c").unwrap(), "a--b--c");
        assert_eq!(slug("parent / child").unwrap(), "parent--child");
        assert_eq!(slug("deep//nested\\path").unwrap(), "deep--nested--path");
    }

    #[test]
    fn test_slug_whitespace() {
        assert_eq!(slug("  Hello World  ").unwrap(), "hello-world");
        assert_eq!(slug("Hello\t \nWorld").unwrap(), "hello-world");
    }

    #[test]
    fn test_slug_lowercases() {
        assert_eq!(slug("MyWidget").unwrap(), "mywidget");
    }

    #[test]
    fn test_slug_strips_punctuation() {
        assert_eq!(slug("My.Widget!").unwrap(), "mywidget");
        assert_eq!(
            slug("/leading/and/trailing/").unwrap(),
            "leading--and--trailing"
        );
    }

    #[test]
    fn test_slug_keeps_existing_hyphens() {
        assert_eq!(slug("already-hyphenated").unwrap(), "already-hyphenated");
        assert_eq!(slug("-edge-hyphens-").unwrap(), "edge-hyphens");
    }

    #[test]
    fn test_slug_rejects_empty() {
        assert!(matches!(slug(""), Err(CoreError::InvalidArgument(_))));
        assert!(matches!(slug("   "), Err(CoreError::InvalidArgument(_))));
        assert!(matches!(slug("!!!"), Err(CoreError::InvalidArgument(_))));
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("hello-world"));
        assert!(is_identifier("parent--child"));
        assert!(is_identifier("widget_2"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("has space"));
        assert!(!is_identifier("has/slash"));
    }
}
