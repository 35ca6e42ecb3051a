//! Error types for the core module.

use std::fmt;

use thiserror::Error;

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The kind of remote resource an operation was working on.
///
/// Used in error messages so a failure always names what was being
/// resolved when it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Component,
    Template,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Component => write!(f, "component"),
            Self::Template => write!(f, "template"),
        }
    }
}

/// Errors that can occur during descriptor parsing and registry operations.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Empty {resource} response for '{name}'")]
    EmptyResponse { resource: Resource, name: String },

    #[error("Malformed descriptor for '{0}': no object literal found")]
    MalformedDescriptor(String),

    #[error("Malformed template for '{0}': expected angle-bracket markup")]
    MalformedTemplate(String),

    #[error("Failed to parse descriptor for '{name}': {cause}")]
    ParseFailure { name: String, cause: String },
}
