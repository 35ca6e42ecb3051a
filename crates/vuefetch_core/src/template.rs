//! Template directive classification.
//!
//! A parsed descriptor's `template` field is not always markup. Short
//! directive prefixes change how it is resolved: fetch from an explicit
//! path, drop the template entirely, or use the text verbatim. An absent
//! or empty field falls back to the conventional template path.

use regex::Regex;

/// How a descriptor's template field should be resolved. First matching
/// rule wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateDirective {
    /// No usable field value; fetch from the conventional template path.
    Conventional,
    /// `path:` / `file:` / `url:` prefix; fetch this target verbatim.
    Path(String),
    /// `!inline` prefix; the final descriptor carries no template.
    Inline,
    /// `id:` / `html:` prefix or plain text; literal markup, no fetch.
    Markup(String),
}

impl TemplateDirective {
    /// Classify an authored template field value.
    pub fn classify(template: Option<&str>) -> Self {
        let text = match template {
            Some(text) if !text.trim().is_empty() => text,
            _ => return Self::Conventional,
        };
        let trimmed = text.trim();

        for prefix in ["path:", "file:", "url:"] {
            if let Some(rest) = strip_prefix_ci(trimmed, prefix) {
                return Self::Path(rest.trim().to_string());
            }
        }

        if strip_prefix_ci(trimmed, "!inline").is_some() {
            return Self::Inline;
        }

        for prefix in ["id:", "html:"] {
            if let Some(rest) = strip_prefix_ci(trimmed, prefix) {
                return Self::Markup(rest.trim().to_string());
            }
        }

        // No directive: the whole field value is the template, verbatim.
        Self::Markup(text.to_string())
    }
}

/// Case-insensitive prefix strip. All directive prefixes are ASCII;
/// `get` keeps the head slice on char boundaries, so multibyte template
/// text is simply a non-match.
fn strip_prefix_ci<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&text[prefix.len()..])
    } else {
        None
    }
}

/// Structural sanity check for template text: it must contain at least
/// one angle-bracket element. Deliberately shallow, this is a shape
/// test, not markup validation.
pub fn looks_like_markup(text: &str) -> bool {
    if let Ok(re) = Regex::new(r"<[A-Za-z!/][^>]*>") {
        re.is_match(text)
    } else {
        false
    }
}
