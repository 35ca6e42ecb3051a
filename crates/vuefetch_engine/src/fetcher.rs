//! The asynchronous component resolution engine.
//!
//! `fetch(name)` drives the whole pipeline: registry check, component
//! fetch, descriptor parse, template resolution (at most one further
//! fetch), registry commit. The two network round-trips for one name are
//! strictly sequential. Concurrent first requests for the same name can
//! both miss the cache and fetch redundantly; last writer wins, which is
//! harmless because definitions are static for the process lifetime.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use vuefetch_core::config::FetcherConfig;
use vuefetch_core::descriptor::ComponentDescriptor;
use vuefetch_core::error::{CoreError, Resource};
use vuefetch_core::parser::parse_descriptor;
use vuefetch_core::registry::ComponentRegistry;
use vuefetch_core::template::{looks_like_markup, TemplateDirective};

use crate::error::{FetchError, FetchResult};
use crate::transport::Transport;

/// Resolves named component descriptors through an injected transport
/// and caches each successful resolution for the process lifetime.
pub struct ComponentFetcher {
    config: FetcherConfig,
    transport: Arc<dyn Transport>,
    registry: RwLock<ComponentRegistry>,
}

impl ComponentFetcher {
    /// Create an engine with the given configuration and transport.
    pub fn new(config: FetcherConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            config,
            transport,
            registry: RwLock::new(ComponentRegistry::new()),
        }
    }

    /// Create an engine with the default resource layout.
    pub fn with_defaults(transport: Arc<dyn Transport>) -> Self {
        Self::new(FetcherConfig::default(), transport)
    }

    /// The active configuration.
    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    /// Resolve a component by name.
    ///
    /// Returns the cached descriptor when the exact name was resolved
    /// before; otherwise fetches, parses and caches it. Nothing is cached
    /// on any failure path, so a retry after an error starts from
    /// scratch.
    pub async fn fetch(&self, name: &str) -> FetchResult<Arc<ComponentDescriptor>> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FetchError::InvalidArgument(
                "fetch requires a component name".to_string(),
            ));
        }

        if let Some(cached) = self.registry.read().await.get(name)? {
            debug!("Cache hit for component '{}'", name);
            return Ok(cached);
        }

        let component_url = self.config.component_url(name);
        let body = self
            .fetch_resource(Resource::Component, name, &component_url)
            .await?;

        let mut descriptor = parse_descriptor(&body, name)?;

        match TemplateDirective::classify(descriptor.template.as_deref()) {
            TemplateDirective::Conventional => {
                let template_url = self.config.template_url(name);
                descriptor.template = Some(self.fetch_template(name, &template_url).await?);
            }
            TemplateDirective::Path(target) => {
                descriptor.template = Some(self.fetch_template(name, &target).await?);
            }
            TemplateDirective::Inline => {
                debug!("Template for '{}' declared inline, omitting", name);
                descriptor.template = None;
            }
            TemplateDirective::Markup(markup) => {
                if !looks_like_markup(&markup) {
                    warn!("Literal template for '{}' has no markup shape", name);
                    return Err(CoreError::MalformedTemplate(name.to_string()).into());
                }
                descriptor.template = Some(markup);
            }
        }

        let shared = self.registry.write().await.set(descriptor)?;
        info!("Resolved component '{}' as '{}'", name, shared.name);
        Ok(shared)
    }

    /// Manually pre-register a descriptor. Never overwrites; returns
    /// `false` when the name is already registered.
    pub async fn push(&self, descriptor: ComponentDescriptor) -> FetchResult<bool> {
        Ok(self.registry.write().await.push(descriptor)?)
    }

    /// Read-only registry lookup.
    pub async fn get(&self, name: &str) -> FetchResult<Option<Arc<ComponentDescriptor>>> {
        Ok(self.registry.read().await.get(name)?)
    }

    /// Whether a component is currently registered.
    pub async fn contains(&self, name: &str) -> bool {
        self.registry.read().await.contains(name)
    }

    async fn fetch_resource(
        &self,
        resource: Resource,
        name: &str,
        url: &str,
    ) -> FetchResult<String> {
        debug!("Fetching {} for '{}' from {}", resource, name, url);

        let response = self.transport.http_get(url).await.map_err(|e| {
            warn!("{} fetch failed for '{}': {}", resource, name, e);
            FetchError::FetchFailed {
                resource,
                name: name.to_string(),
                reason: e.to_string(),
            }
        })?;

        if !response.is_success() {
            warn!(
                "{} fetch for '{}' returned status {}",
                resource, name, response.status
            );
            return Err(FetchError::FetchFailed {
                resource,
                name: name.to_string(),
                reason: format!("status {}", response.status),
            });
        }

        Ok(response.body)
    }

    async fn fetch_template(&self, name: &str, url: &str) -> FetchResult<String> {
        let body = self.fetch_resource(Resource::Template, name, url).await?;

        if body.trim().is_empty() {
            return Err(FetchError::EmptyResponse {
                resource: Resource::Template,
                name: name.to_string(),
            });
        }
        if !looks_like_markup(&body) {
            warn!("Fetched template for '{}' has no markup shape", name);
            return Err(CoreError::MalformedTemplate(name.to_string()).into());
        }

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{HttpResponse, TransportResult};
    use async_trait::async_trait;
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        pub NetTransport {}

        #[async_trait]
        impl Transport for NetTransport {
            async fn http_get(&self, url: &str) -> TransportResult<HttpResponse>;
        }
    }

    fn engine(transport: MockNetTransport) -> ComponentFetcher {
        ComponentFetcher::with_defaults(Arc::new(transport))
    }

    #[tokio::test]
    async fn test_empty_name_rejected_without_network() {
        let transport = MockNetTransport::new();
        let fetcher = engine(transport);

        let err = fetcher.fetch("   ").await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn test_cache_hit_short_circuits() {
        // No expectations: any network call would panic the mock.
        let transport = MockNetTransport::new();
        let fetcher = engine(transport);

        fetcher
            .push(ComponentDescriptor::new("greet").with_template("<p>hi</p>"))
            .await
            .unwrap();

        let descriptor = fetcher.fetch("greet").await.unwrap();
        assert_eq!(descriptor.name, "greet");
    }

    #[tokio::test]
    async fn test_component_404_is_fetch_failed() {
        let mut transport = MockNetTransport::new();
        transport
            .expect_http_get()
            .with(eq("static/vue/components/greet.vue.js"))
            .times(1)
            .returning(|_| Ok(HttpResponse::status(404)));
        let fetcher = engine(transport);

        let err = fetcher.fetch("greet").await.unwrap_err();
        match err {
            FetchError::FetchFailed {
                resource, name, ..
            } => {
                assert_eq!(resource, Resource::Component);
                assert_eq!(name, "greet");
            }
            other => panic!("expected fetch failure, got {:?}", other),
        }
        assert!(!fetcher.contains("greet").await);
    }

    #[tokio::test]
    async fn test_literal_template_skips_second_fetch() {
        let mut transport = MockNetTransport::new();
        transport
            .expect_http_get()
            .with(eq("static/vue/components/card.vue.js"))
            .times(1)
            .returning(|_| Ok(HttpResponse::ok(r#"{ template: "html: <p>card</p>" }"#)));
        let fetcher = engine(transport);

        let descriptor = fetcher.fetch("card").await.unwrap();
        assert_eq!(descriptor.template.as_deref(), Some("<p>card</p>"));
    }

    #[tokio::test]
    async fn test_transport_error_is_fetch_failed() {
        let mut transport = MockNetTransport::new();
        transport.expect_http_get().times(1).returning(|url| {
            Err(crate::transport::TransportError::Request {
                url: url.to_string(),
                message: "connection refused".to_string(),
            })
        });
        let fetcher = engine(transport);

        let err = fetcher.fetch("greet").await.unwrap_err();
        assert!(err.to_string().contains("greet"));
        assert!(err.to_string().contains("connection refused"));
    }
}
