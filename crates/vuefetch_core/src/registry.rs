//! Component registry: the process-lifetime descriptor cache.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::descriptor::ComponentDescriptor;
use crate::error::{CoreError, CoreResult};

/// A registry of resolved component descriptors.
///
/// Maps descriptor names to shared, immutable descriptor instances.
/// Entries are only ever added, either by a successful resolution or by
/// manual pre-registration; there is no eviction and no TTL, component
/// definitions are assumed static for the process lifetime. Descriptors
/// are handed out as `Arc` clones so cached entries cannot be mutated by
/// callers.
#[derive(Debug, Default)]
pub struct ComponentRegistry {
    components: HashMap<String, Arc<ComponentDescriptor>>,
}

impl ComponentRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            components: HashMap::new(),
        }
    }

    /// Look up a descriptor by name.
    ///
    /// A miss is `Ok(None)`, never an error; only an empty name is
    /// rejected.
    pub fn get(&self, name: &str) -> CoreResult<Option<Arc<ComponentDescriptor>>> {
        if name.trim().is_empty() {
            return Err(CoreError::InvalidArgument(
                "registry lookup requires a component name".to_string(),
            ));
        }
        Ok(self.components.get(name).cloned())
    }

    /// Insert a descriptor, overwriting any existing entry of the same
    /// name. Returns the shared instance now held by the registry.
    pub fn set(&mut self, descriptor: ComponentDescriptor) -> CoreResult<Arc<ComponentDescriptor>> {
        if !descriptor.has_valid_name() {
            return Err(CoreError::InvalidArgument(format!(
                "descriptor name '{}' is not a valid identifier",
                descriptor.name
            )));
        }
        debug!("Registering component: {}", descriptor.name);
        let name = descriptor.name.clone();
        let shared = Arc::new(descriptor);
        self.components.insert(name, shared.clone());
        Ok(shared)
    }

    /// Manual pre-registration. Unlike [`set`](Self::set) this never
    /// overwrites: returns `false` without touching the registry when an
    /// entry already exists for that name.
    pub fn push(&mut self, descriptor: ComponentDescriptor) -> CoreResult<bool> {
        if !descriptor.has_valid_name() {
            return Err(CoreError::InvalidArgument(format!(
                "descriptor name '{}' is not a valid identifier",
                descriptor.name
            )));
        }
        if self.components.contains_key(&descriptor.name) {
            debug!("Component already registered, keeping existing: {}", descriptor.name);
            return Ok(false);
        }
        self.set(descriptor)?;
        Ok(true)
    }

    /// Check if a component is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    /// Get all registered component names.
    pub fn names(&self) -> Vec<&str> {
        self.components.keys().map(|s| s.as_str()).collect()
    }

    /// Get the number of registered components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
