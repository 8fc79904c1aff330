//! Handler registry keyed by resource type.
//!
//! Registration is append-only: handlers are added during startup and are
//! never removed. Each type's list is an immutable shared slice that
//! registration replaces, so a snapshot is one reference-count bump under
//! the read lock, released before any handler runs.

use kroute_core::{DynHandler, GroupVersionKind, Handler, Request};
use parking_lot::RwLock;
use std::{collections::HashMap, sync::Arc};

/// Handlers for one type, in registration order.
pub type HandlerList = Arc<[Arc<dyn DynHandler>]>;

/// Maps each [`GroupVersionKind`] to its handlers, in registration order.
///
/// Safe to share across threads: registration takes the write lock,
/// lookups take the read lock, and neither is held while a handler runs.
///
/// # Example
/// ```ignore
/// let registry = Arc::new(HandlerRegistry::new());
/// registry.add_handler(pod_gvk.clone(), DefaultLabels);
/// registry.add_handler(pod_gvk.clone(), EnsureConfigMap);
///
/// assert!(registry.has_handlers(&pod_gvk));
/// ```
pub struct HandlerRegistry {
    handlers: RwLock<HashMap<GroupVersionKind, HandlerList>>,
}

impl HandlerRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
        }
    }

    /// Start a [`RegistryBuilder`].
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Append a handler to the list for `gvk`.
    ///
    /// Visible to every dispatch that starts after this call returns.
    pub fn add_handler<H: Handler>(&self, gvk: GroupVersionKind, handler: H) {
        self.add_dyn_handler(gvk, Arc::new(handler));
    }

    /// Append an already shared handler to the list for `gvk`.
    pub fn add_dyn_handler(&self, gvk: GroupVersionKind, handler: Arc<dyn DynHandler>) {
        #[cfg(feature = "tracing")]
        tracing::debug!(%gvk, "registering handler");

        let mut handlers = self.handlers.write();
        let list = handlers.entry(gvk).or_insert_with(|| Arc::from([]));
        *list = list.iter().cloned().chain(Some(handler)).collect();
    }

    /// Every type that has at least one handler, in no particular order.
    pub fn group_version_kinds(&self) -> Vec<GroupVersionKind> {
        self.handlers
            .read()
            .iter()
            .filter(|(_, list)| !list.is_empty())
            .map(|(gvk, _)| gvk.clone())
            .collect()
    }

    /// Check whether any handler is registered for `gvk`.
    pub fn has_handlers(&self, gvk: &GroupVersionKind) -> bool {
        self.handler_count(gvk) > 0
    }

    /// Check whether any handler is registered for the request's type.
    pub fn handles(&self, req: &Request) -> bool {
        self.has_handlers(&req.gvk)
    }

    /// Number of handlers registered for `gvk`.
    pub fn handler_count(&self, gvk: &GroupVersionKind) -> usize {
        self.handlers.read().get(gvk).map_or(0, |list| list.len())
    }

    /// Snapshot of the handlers for `gvk`, in registration order.
    ///
    /// Registrations made after this returns are not part of the snapshot.
    pub fn handlers_for(&self, gvk: &GroupVersionKind) -> HandlerList {
        self.handlers
            .read()
            .get(gvk)
            .cloned()
            .unwrap_or_else(|| Arc::from([]))
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing a [`HandlerRegistry`].
///
/// The built registry still accepts registrations; the builder is only a
/// convenient way to declare the startup set in one expression.
///
/// # Example
/// ```ignore
/// let registry = RegistryBuilder::new()
///     .register(pod_gvk.clone(), DefaultLabels)
///     .register(pod_gvk, EnsureConfigMap)
///     .build();
/// ```
pub struct RegistryBuilder {
    entries: Vec<(GroupVersionKind, Arc<dyn DynHandler>)>,
}

impl RegistryBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a handler for `gvk`.
    pub fn register<H: Handler>(mut self, gvk: GroupVersionKind, handler: H) -> Self {
        self.register_mut(gvk, handler);
        self
    }

    /// Register a handler for `gvk` (mutable version).
    pub fn register_mut<H: Handler>(&mut self, gvk: GroupVersionKind, handler: H) {
        let handler: Arc<dyn DynHandler> = Arc::new(handler);
        self.entries.push((gvk, handler));
    }

    /// Register an already shared handler for `gvk`.
    pub fn register_dyn(mut self, gvk: GroupVersionKind, handler: Arc<dyn DynHandler>) -> Self {
        self.entries.push((gvk, handler));
        self
    }

    /// Build the registry, preserving registration order per type.
    pub fn build(self) -> HandlerRegistry {
        let registry = HandlerRegistry::new();
        for (gvk, handler) in self.entries {
            registry.add_dyn_handler(gvk, handler);
        }
        registry
    }

    /// Get the number of registrations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the builder has no registrations.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
