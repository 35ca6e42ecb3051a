//! Error types for the resolution engine.

use thiserror::Error;
use vuefetch_core::error::{CoreError, Resource};

/// Result type alias for engine operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// Errors surfaced by `ComponentFetcher` operations.
///
/// Every variant names the component (and resource) it failed on. A
/// failed fetch never poisons the engine: the registry keeps only fully
/// resolved descriptors and later calls, including retries of the same
/// name, start from scratch.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{resource} fetch failed for '{name}': {reason}")]
    FetchFailed {
        resource: Resource,
        name: String,
        reason: String,
    },

    #[error("Empty {resource} response for '{name}'")]
    EmptyResponse { resource: Resource, name: String },

    #[error(transparent)]
    Core(#[from] CoreError),
}
