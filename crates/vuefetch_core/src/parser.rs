//! Restricted literal parser for fetched component bodies.
//!
//! Component sources are authored as loose object literals, typically
//! wrapped in incidental syntax (`let dummy = { ... };`). The original
//! runtime evaluated that text as code; here it is parsed with a small
//! recursive-descent grammar instead. Plain data (strings, numbers,
//! booleans, nested objects and arrays) becomes structured values, while
//! anything behavioral (method shorthand, arrow functions, call
//! expressions) is captured verbatim as opaque text. Nothing is executed.

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use crate::descriptor::{ComponentDescriptor, FieldValue};
use crate::error::{CoreError, CoreResult, Resource};
use crate::slug::{is_identifier, slug};

/// Parse raw fetched component text into a descriptor.
///
/// `requested_name` is the path the caller asked for; it feeds error
/// messages and the name fallback when the body does not declare a
/// usable `name` field of its own. The returned descriptor's `template`
/// field is the authored value, not yet resolved against directives.
pub fn parse_descriptor(raw: &str, requested_name: &str) -> CoreResult<ComponentDescriptor> {
    if raw.trim().is_empty() {
        return Err(CoreError::EmptyResponse {
            resource: Resource::Component,
            name: requested_name.to_string(),
        });
    }

    let body = extract_object_literal(raw)
        .ok_or_else(|| CoreError::MalformedDescriptor(requested_name.to_string()))?;

    let mut fields = LiteralParser::new(body).parse_root().map_err(|e| {
        CoreError::ParseFailure {
            name: requested_name.to_string(),
            cause: e.to_string(),
        }
    })?;

    let declared = match fields.remove("name") {
        Some(FieldValue::String(s)) if is_identifier(&s) => Some(s),
        _ => None,
    };
    let name = match declared {
        Some(declared) => declared,
        None => {
            let fallback = slug(requested_name)?;
            debug!(
                "Component '{}' declares no usable name, using '{}'",
                requested_name, fallback
            );
            fallback
        }
    };

    let template = match fields.remove("template") {
        None => None,
        Some(FieldValue::String(text)) => Some(text),
        Some(_) => {
            return Err(CoreError::ParseFailure {
                name: requested_name.to_string(),
                cause: "template field must be a string".to_string(),
            })
        }
    };

    Ok(ComponentDescriptor {
        name,
        template,
        fields,
    })
}

/// Slice the brace-delimited region out of the fetched text, discarding
/// any wrapper syntax around it. Lightweight structural test only.
fn extract_object_literal(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end > start {
        Some(&raw[start..=end])
    } else {
        None
    }
}

/// Structural parse error with a character position.
#[derive(Debug)]
struct ParseError {
    message: String,
    position: usize,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at offset {}", self.message, self.position)
    }
}

type ParseResult<T> = Result<T, ParseError>;

/// Recursive-descent parser over the extracted object-literal region.
struct LiteralParser {
    chars: Vec<char>,
    pos: usize,
}

impl LiteralParser {
    fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
        }
    }

    fn parse_root(&mut self) -> ParseResult<BTreeMap<String, FieldValue>> {
        self.skip_trivia()?;
        let fields = self.parse_object()?;
        self.skip_trivia()?;
        if self.pos < self.chars.len() {
            return Err(self.error("unexpected trailing characters"));
        }
        Ok(fields)
    }

    fn parse_object(&mut self) -> ParseResult<BTreeMap<String, FieldValue>> {
        self.expect('{')?;
        let mut map = BTreeMap::new();

        loop {
            self.skip_trivia()?;
            if self.eat('}') {
                break;
            }

            let key = self.parse_key()?;
            self.skip_trivia()?;

            let value = if self.peek() == Some('(') {
                // Method shorthand: `created() { ... }`. The parameter
                // list and body are captured verbatim.
                FieldValue::Function(self.capture_expression()?)
            } else {
                self.expect(':')?;
                self.skip_trivia()?;
                self.parse_value()?
            };
            map.insert(key, value);

            self.skip_trivia()?;
            if self.eat(',') {
                continue;
            }
            if self.eat('}') {
                break;
            }
            return Err(self.error("expected ',' or '}' after property value"));
        }

        Ok(map)
    }

    fn parse_array(&mut self) -> ParseResult<Vec<FieldValue>> {
        self.expect('[')?;
        let mut items = Vec::new();

        loop {
            self.skip_trivia()?;
            if self.eat(']') {
                break;
            }
            items.push(self.parse_value()?);
            self.skip_trivia()?;
            if self.eat(',') {
                continue;
            }
            if self.eat(']') {
                break;
            }
            return Err(self.error("expected ',' or ']' after array element"));
        }

        Ok(items)
    }

    fn parse_key(&mut self) -> ParseResult<String> {
        match self.peek() {
            Some(quote @ ('"' | '\'')) => self.parse_string(quote),
            _ => {
                let start = self.pos;
                while let Some(c) = self.peek() {
                    if c.is_alphanumeric() || c == '_' || c == '$' || c == '-' {
                        self.pos += 1;
                    } else {
                        break;
                    }
                }
                if self.pos == start {
                    return Err(self.error("expected property name"));
                }
                Ok(self.chars[start..self.pos].iter().collect())
            }
        }
    }

    fn parse_value(&mut self) -> ParseResult<FieldValue> {
        match self.peek() {
            None => Err(self.error("expected a value")),
            Some('{') => Ok(FieldValue::Object(self.parse_object()?)),
            Some('[') => Ok(FieldValue::Array(self.parse_array()?)),
            Some(quote @ ('"' | '\'' | '`')) => {
                Ok(FieldValue::String(self.parse_string(quote)?))
            }
            Some(c) if c.is_ascii_digit() || c == '-' || c == '+' || c == '.' => {
                self.parse_number()
            }
            _ => {
                if self.eat_keyword("true") {
                    Ok(FieldValue::Bool(true))
                } else if self.eat_keyword("false") {
                    Ok(FieldValue::Bool(false))
                } else if self.eat_keyword("null") || self.eat_keyword("undefined") {
                    Ok(FieldValue::Null)
                } else {
                    // Arrow functions, `function` expressions, call
                    // expressions and anything else non-literal stay
                    // opaque.
                    Ok(FieldValue::Function(self.capture_expression()?))
                }
            }
        }
    }

    fn parse_string(&mut self, quote: char) -> ParseResult<String> {
        self.expect(quote)?;
        let mut out = String::new();

        loop {
            match self.next() {
                None => return Err(self.error("unterminated string literal")),
                Some(c) if c == quote => break,
                Some('\\') => match self.next() {
                    None => return Err(self.error("unterminated escape sequence")),
                    Some('n') => out.push('\n'),
                    Some('t') => out.push('\t'),
                    Some('r') => out.push('\r'),
                    Some(other) => out.push(other),
                },
                Some(c) => out.push(c),
            }
        }

        Ok(out)
    }

    fn parse_number(&mut self) -> ParseResult<FieldValue> {
        let start = self.pos;
        if matches!(self.peek(), Some('-') | Some('+')) {
            self.pos += 1;
        }
        let mut seen_exponent = false;
        while let Some(c) = self.peek() {
            match c {
                '0'..='9' | '.' | '_' => self.pos += 1,
                'e' | 'E' => {
                    seen_exponent = true;
                    self.pos += 1;
                }
                '-' | '+' if seen_exponent => self.pos += 1,
                _ => break,
            }
        }

        let text: String = self.chars[start..self.pos]
            .iter()
            .filter(|c| **c != '_')
            .collect();
        match text.parse::<f64>() {
            Ok(value) => Ok(FieldValue::Number(value)),
            Err(_) => {
                // Not a plain decimal literal after all; capture the
                // whole expression opaquely instead.
                self.pos = start;
                Ok(FieldValue::Function(self.capture_expression()?))
            }
        }
    }

    /// Capture a value expression verbatim until a top-level `,`, `}` or
    /// `]`, balancing brackets and skipping over string literals and
    /// comments on the way.
    fn capture_expression(&mut self) -> ParseResult<String> {
        let start = self.pos;
        let mut depth: i32 = 0;

        while let Some(c) = self.peek() {
            match c {
                ',' | '}' | ']' if depth == 0 => break,
                '(' | '{' | '[' => {
                    depth += 1;
                    self.pos += 1;
                }
                ')' | '}' | ']' => {
                    depth -= 1;
                    if depth < 0 {
                        return Err(self.error("unbalanced brackets in expression"));
                    }
                    self.pos += 1;
                }
                '"' | '\'' | '`' => {
                    self.parse_string(c)?;
                }
                '/' if self.peek_at(1) == Some('/') || self.peek_at(1) == Some('*') => {
                    self.skip_trivia()?;
                }
                _ => self.pos += 1,
            }
        }

        if depth != 0 {
            return Err(self.error("unbalanced brackets in expression"));
        }

        let text: String = self.chars[start..self.pos].iter().collect();
        let text = text.trim().to_string();
        if text.is_empty() {
            return Err(self.error("expected a value"));
        }
        Ok(text)
    }

    fn skip_trivia(&mut self) -> ParseResult<()> {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.pos += 1;
                }
                Some('/') if self.peek_at(1) == Some('/') => {
                    while let Some(c) = self.peek() {
                        if c == '\n' {
                            break;
                        }
                        self.pos += 1;
                    }
                }
                Some('/') if self.peek_at(1) == Some('*') => {
                    self.pos += 2;
                    loop {
                        match self.peek() {
                            None => return Err(self.error("unterminated block comment")),
                            Some('*') if self.peek_at(1) == Some('/') => {
                                self.pos += 2;
                                break;
                            }
                            Some(_) => self.pos += 1,
                        }
                    }
                }
                _ => break,
            }
        }
        Ok(())
    }

    fn eat_keyword(&mut self, keyword: &str) -> bool {
        let end = self.pos + keyword.len();
        if end > self.chars.len() {
            return false;
        }
        let slice: String = self.chars[self.pos..end].iter().collect();
        if slice != keyword {
            return false;
        }
        // Word boundary so `nullable` is not read as `null`.
        if let Some(next) = self.chars.get(end) {
            if next.is_alphanumeric() || *next == '_' || *next == '$' {
                return false;
            }
        }
        self.pos = end;
        true
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn next(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char) -> ParseResult<()> {
        if self.eat(expected) {
            Ok(())
        } else {
            Err(self.error(&format!("expected '{}'", expected)))
        }
    }

    fn error(&self, message: &str) -> ParseError {
        ParseError {
            message: message.to_string(),
            position: self.pos,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_file_component() {
        let raw = r#"
            let dummy = {
                template: `
                    <div>
                        {{ message }}
                    </div>
                `,
                data: () => ({
                    message: "Hello world!"
                }),
                created() {
                    console.log(this.message);
                }
            };
        "#;

        let descriptor = parse_descriptor(raw, "hello-single-file").unwrap();
        assert_eq!(descriptor.name, "hello-single-file");
        assert!(descriptor.template.as_deref().unwrap().contains("{{ message }}"));
        assert!(descriptor.field("data").unwrap().is_function());
        assert!(descriptor.field("created").unwrap().is_function());
    }

    #[test]
    fn test_parse_nested_call_expression() {
        let raw = r#"
            let dummy = {
                components: {
                    child: fetcher.fetch("parent/child")
                },
                data() {
                    return {
                        message: "This is parent component."
                    }
                }
            };
        "#;

        let descriptor = parse_descriptor(raw, "parent").unwrap();
        let components = descriptor.field("components").unwrap().as_object().unwrap();
        match components.get("child").unwrap() {
            FieldValue::Function(text) => {
                assert_eq!(text, r#"fetcher.fetch("parent/child")"#);
            }
            other => panic!("expected opaque expression, got {:?}", other),
        }
        assert!(descriptor.field("data").unwrap().is_function());
    }

    #[test]
    fn test_declared_name_wins() {
        let descriptor = parse_descriptor(r#"{ name: "fancy-button" }"#, "buttons/fancy").unwrap();
        assert_eq!(descriptor.name, "fancy-button");
        assert!(descriptor.field("name").is_none());
    }

    #[test]
    fn test_invalid_declared_name_falls_back_to_slug() {
        let descriptor = parse_descriptor(r#"{ name: "not a name" }"#, "parent/child").unwrap();
        assert_eq!(descriptor.name, "parent--child");
    }

    #[test]
    fn test_missing_name_falls_back_to_slug() {
        let descriptor = parse_descriptor(r#"{ data() { return {} } }"#, "greet").unwrap();
        assert_eq!(descriptor.name, "greet");
    }

    #[test]
    fn test_scalar_values() {
        let raw = r#"{
            // leading comment
            count: 42,
            ratio: -0.5,
            enabled: true,
            hidden: false,
            extra: null,
            tags: ["a", "b", 3],
            nested: { deep: { flag: true } }, /* trailing comma next */
        }"#;

        let descriptor = parse_descriptor(raw, "widget").unwrap();
        assert_eq!(descriptor.field("count"), Some(&FieldValue::Number(42.0)));
        assert_eq!(descriptor.field("ratio"), Some(&FieldValue::Number(-0.5)));
        assert_eq!(descriptor.field("enabled"), Some(&FieldValue::Bool(true)));
        assert_eq!(descriptor.field("hidden"), Some(&FieldValue::Bool(false)));
        assert_eq!(descriptor.field("extra"), Some(&FieldValue::Null));
        assert_eq!(
            descriptor.field("tags"),
            Some(&FieldValue::Array(vec![
                FieldValue::String("a".to_string()),
                FieldValue::String("b".to_string()),
                FieldValue::Number(3.0),
            ]))
        );
        let nested = descriptor.field("nested").unwrap().as_object().unwrap();
        assert!(nested.contains_key("deep"));
    }

    #[test]
    fn test_empty_body_is_empty_response() {
        let err = parse_descriptor("   \n  ", "greet").unwrap_err();
        assert!(matches!(err, CoreError::EmptyResponse { .. }));
    }

    #[test]
    fn test_missing_braces_is_malformed() {
        let err = parse_descriptor("console.log(1);", "greet").unwrap_err();
        assert!(matches!(err, CoreError::MalformedDescriptor(_)));
    }

    #[test]
    fn test_broken_syntax_is_parse_failure() {
        let err = parse_descriptor("{ name: }", "greet").unwrap_err();
        match err {
            CoreError::ParseFailure { name, .. } => assert_eq!(name, "greet"),
            other => panic!("expected parse failure, got {:?}", other),
        }
    }

    #[test]
    fn test_non_string_template_is_parse_failure() {
        let err = parse_descriptor("{ template: 42 }", "greet").unwrap_err();
        match err {
            CoreError::ParseFailure { cause, .. } => {
                assert!(cause.contains("template"));
            }
            other => panic!("expected parse failure, got {:?}", other),
        }
    }

    #[test]
    fn test_quoted_keys_and_escapes() {
        let descriptor =
            parse_descriptor(r#"{ "with-dash": "line\nbreak", 'single': 'it\'s' }"#, "x").unwrap();
        assert_eq!(
            descriptor.field("with-dash").unwrap().as_str(),
            Some("line\nbreak")
        );
        assert_eq!(descriptor.field("single").unwrap().as_str(), Some("it's"));
    }
}
