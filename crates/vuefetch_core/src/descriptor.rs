//! Data model for resolved component descriptors.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::slug::is_identifier;

/// A single field value inside a component descriptor.
///
/// Descriptor bodies are authored as loose object literals, so values can
/// be plain data or behavior. Behavior (method shorthand, arrow functions,
/// `function` expressions) is captured verbatim as [`FieldValue::Function`]
/// text and never executed here.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<FieldValue>),
    Object(BTreeMap<String, FieldValue>),
    /// Opaque source text of a function-valued field.
    Function(String),
}

impl FieldValue {
    /// Borrow the inner string if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the inner object if this is a nested object.
    pub fn as_object(&self) -> Option<&BTreeMap<String, FieldValue>> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Self::Function(_))
    }

    /// Convert to a `serde_json` value for consumers that compose
    /// descriptors into larger JSON documents. Function text is carried
    /// as a plain string.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Null => serde_json::Value::Null,
            Self::Bool(b) => serde_json::Value::Bool(*b),
            Self::Number(n) => serde_json::Number::from_f64(*n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Self::String(s) | Self::Function(s) => serde_json::Value::String(s.clone()),
            Self::Array(items) => {
                serde_json::Value::Array(items.iter().map(Self::to_json).collect())
            }
            Self::Object(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }
}

/// A resolved component descriptor.
///
/// `name` is always a valid identifier once a descriptor leaves the
/// parser. `template` holds final markup text when the component has one;
/// the `!inline` directive resolves to `None`. All remaining authored
/// fields (data, methods, nested component references, ...) live in
/// `fields` untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentDescriptor {
    pub name: String,
    pub template: Option<String>,
    pub fields: BTreeMap<String, FieldValue>,
}

impl ComponentDescriptor {
    /// Create an empty descriptor with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            template: None,
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field insertion, mainly for tests and manual `push`.
    pub fn with_field(mut self, key: impl Into<String>, value: FieldValue) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    /// Builder-style template assignment.
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Look up an authored field by key.
    pub fn field(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// Whether the descriptor carries a registry-acceptable name.
    pub fn has_valid_name(&self) -> bool {
        is_identifier(&self.name)
    }
}
