//! Layered class loading
//!
//! Class resolution consults up to three loader slots in strict
//! priority order: a configured custom loader, the calling context's
//! loader, and the local loader owning the resolver's own metadata.
//! Loaders are borrowed collaborators (shared `Arc`s); the chain
//! never creates or owns one.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::trace;

use tenon_types::ClassRegistry;

use crate::error::{ReflectError, ReflectResult};

/// Failure from a single loader source
#[derive(Debug, Clone, Error)]
pub enum LoadError {
    /// The loader has no class registered under the name
    #[error("unknown class: {name}")]
    UnknownClass {
        /// Requested fully qualified name
        name: String,
    },

    /// The loader could not be consulted at all
    #[error("loader unavailable: {reason}")]
    Unavailable {
        /// What kept the loader from answering
        reason: String,
    },
}

/// A located resource: the URL it was found under plus its payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    /// Location the resource was resolved to
    pub url: String,
    /// Resource payload
    pub bytes: Vec<u8>,
}

/// A single loader source in the chain
pub trait ClassLoader: Send + Sync {
    /// Stable label used in probe logs and diagnostics
    fn label(&self) -> &str;

    /// Resolve a fully qualified class name to a registry id
    fn load_class(&self, name: &str) -> Result<usize, LoadError>;

    /// Locate a named resource; `None` is a routine miss
    fn resource(&self, name: &str) -> Option<Resource> {
        let _ = name;
        None
    }
}

/// Stock loader backed by a shared class registry plus a static
/// resource table
pub struct RegistryLoader {
    label: String,
    registry: Arc<ClassRegistry>,
    resources: FxHashMap<String, Resource>,
}

impl RegistryLoader {
    /// Create a loader over a registry
    pub fn new(label: impl Into<String>, registry: Arc<ClassRegistry>) -> Self {
        Self {
            label: label.into(),
            registry,
            resources: FxHashMap::default(),
        }
    }

    /// Register a resource under a name
    pub fn add_resource(
        &mut self,
        name: impl Into<String>,
        url: impl Into<String>,
        bytes: Vec<u8>,
    ) {
        self.resources.insert(
            name.into(),
            Resource {
                url: url.into(),
                bytes,
            },
        );
    }
}

impl ClassLoader for RegistryLoader {
    fn label(&self) -> &str {
        &self.label
    }

    fn load_class(&self, name: &str) -> Result<usize, LoadError> {
        self.registry
            .get_class_by_name(name)
            .map(|class| class.id)
            .ok_or_else(|| LoadError::UnknownClass {
                name: name.to_string(),
            })
    }

    fn resource(&self, name: &str) -> Option<Resource> {
        self.resources.get(name).cloned()
    }
}

/// Ordered loader chain: custom, then context, then local
///
/// Any subset of slots may be absent; absent slots are skipped.
#[derive(Default, Clone)]
pub struct LoaderChain {
    custom: Option<Arc<dyn ClassLoader>>,
    context: Option<Arc<dyn ClassLoader>>,
    local: Option<Arc<dyn ClassLoader>>,
}

impl LoaderChain {
    /// Create an empty chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configured custom loader (highest priority)
    pub fn with_custom(mut self, loader: Arc<dyn ClassLoader>) -> Self {
        self.custom = Some(loader);
        self
    }

    /// Set the calling context's loader
    pub fn with_context(mut self, loader: Arc<dyn ClassLoader>) -> Self {
        self.context = Some(loader);
        self
    }

    /// Set the local loader (lowest priority)
    pub fn with_local(mut self, loader: Arc<dyn ClassLoader>) -> Self {
        self.local = Some(loader);
        self
    }

    /// The loader general lookups should prefer: the custom loader
    /// when configured, else the context loader.
    pub fn preferred_loader(&self) -> Option<&Arc<dyn ClassLoader>> {
        self.custom.as_ref().or(self.context.as_ref())
    }

    fn slots(&self) -> impl Iterator<Item = &Arc<dyn ClassLoader>> {
        [&self.custom, &self.context, &self.local]
            .into_iter()
            .flatten()
    }

    /// Resolve a class name through the chain.
    ///
    /// The first successful load wins. When every present loader
    /// fails, the error wraps the failure of the *first* loader
    /// tried, so callers diagnosing a miss see the most trusted
    /// source's cause.
    pub fn load_class(&self, name: &str) -> ReflectResult<usize> {
        let mut first_cause: Option<LoadError> = None;

        for loader in self.slots() {
            trace!(loader = loader.label(), class = name, "trying to load class");
            match loader.load_class(name) {
                Ok(id) => return Ok(id),
                Err(cause) => {
                    if first_cause.is_none() {
                        first_cause = Some(cause);
                    }
                }
            }
        }

        Err(ReflectError::ClassNotFound {
            name: name.to_string(),
            source: first_cause.unwrap_or_else(|| LoadError::Unavailable {
                reason: "no loader configured".to_string(),
            }),
        })
    }

    /// Locate a resource through the chain; first hit wins, `None`
    /// when every loader misses.
    pub fn resource(&self, name: &str) -> Option<Resource> {
        for loader in self.slots() {
            trace!(loader = loader.label(), resource = name, "trying to locate resource");
            if let Some(resource) = loader.resource(name) {
                return Some(resource);
            }
        }
        None
    }
}
