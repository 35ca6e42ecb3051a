//! # vuefetch_engine
//!
//! Async resolution engine for vuefetch.
//!
//! Resolves named component descriptors from a remote origin through an
//! injected [`Transport`], parses them with `vuefetch_core`, and caches
//! each name for the process lifetime so it is fetched at most once.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use vuefetch_engine::{ComponentFetcher, ReqwestTransport};
//!
//! let fetcher = ComponentFetcher::with_defaults(Arc::new(ReqwestTransport::new()));
//! let descriptor = fetcher.fetch("greet").await?;
//! assert_eq!(descriptor.name, "greet");
//! ```
//!
//! There is no global instance: construct one engine and pass it to the
//! consumers that need it.

pub mod error;
pub mod fetcher;
pub mod http;
pub mod mock;
pub mod transport;

// Re-export main types for convenience
pub use error::{FetchError, FetchResult};
pub use fetcher::ComponentFetcher;
pub use http::ReqwestTransport;
pub use mock::MockTransport;
pub use transport::{HttpResponse, Transport, TransportError, TransportResult};

pub use vuefetch_core::{
    ComponentDescriptor, ComponentRegistry, CoreError, CoreResult, FetcherConfig, FieldValue,
    Resource, TemplateDirective,
};
