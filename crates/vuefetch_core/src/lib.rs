//! # vuefetch_core
//!
//! Domain model and pure logic for the vuefetch component resolver.
//!
//! This crate knows nothing about transports or async runtimes. It owns:
//!
//! - **Configuration**: normalized resource layout ([`FetcherConfig`])
//! - **Descriptor model**: structured component records ([`ComponentDescriptor`])
//! - **Parser**: restricted literal parsing of fetched component bodies
//! - **Normalizer**: slug derivation for requested component paths
//! - **Template directives**: classification of authored template fields
//! - **Registry**: the process-lifetime descriptor cache
//!
//! The async resolution pipeline that drives these lives in
//! `vuefetch_engine`.

pub mod config;
pub mod descriptor;
pub mod error;
pub mod parser;
pub mod registry;
pub mod slug;
pub mod template;

// Re-export main types for convenience
pub use config::FetcherConfig;
pub use descriptor::{ComponentDescriptor, FieldValue};
pub use error::{CoreError, CoreResult, Resource};
pub use parser::parse_descriptor;
pub use registry::ComponentRegistry;
pub use slug::{is_identifier, slug};
pub use template::{looks_like_markup, TemplateDirective};
