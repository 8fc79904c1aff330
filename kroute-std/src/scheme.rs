//! Type registry for statically typed objects.

use kroute_core::{GroupVersionKind, Object, ResolveError, TypeResolver};
use std::{any::TypeId, collections::HashMap};

/// Maps concrete Rust object types to their [`GroupVersionKind`].
///
/// Objects that carry their own type information (see
/// [`Object::type_meta`]) are resolved from it; every other object must
/// have its Rust type registered.
///
/// Populate the scheme at startup, then hand it to a dispatcher. It is not
/// modified afterwards.
///
/// # Example
/// ```ignore
/// let scheme = Scheme::new()
///     .with_type::<Pod>(GroupVersionKind::new("", "v1", "Pod"))
///     .with_type::<Deployment>(GroupVersionKind::new("apps", "v1", "Deployment"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Scheme {
    types: HashMap<TypeId, GroupVersionKind>,
}

impl Scheme {
    /// Create a new empty scheme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `T` as `gvk`.
    pub fn with_type<T: Object>(mut self, gvk: GroupVersionKind) -> Self {
        self.register::<T>(gvk);
        self
    }

    /// Register `T` as `gvk` (mutable version).
    ///
    /// Registering the same type twice replaces the earlier mapping.
    pub fn register<T: Object>(&mut self, gvk: GroupVersionKind) {
        self.types.insert(TypeId::of::<T>(), gvk);
    }

    /// The kind registered for `T`, if any.
    pub fn kind_for<T: Object>(&self) -> Option<&GroupVersionKind> {
        self.types.get(&TypeId::of::<T>())
    }

    /// Get the number of registered types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Check if no types are registered.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl TypeResolver for Scheme {
    fn group_version_kind_for(
        &self,
        object: &dyn Object,
    ) -> Result<GroupVersionKind, ResolveError> {
        if let Some(gvk) = object.type_meta() {
            if gvk.is_empty() {
                return Err(ResolveError::MissingKind {
                    object: object.key(),
                });
            }
            return Ok(gvk.clone());
        }

        self.types
            .get(&object.as_any().type_id())
            .cloned()
            .ok_or_else(|| ResolveError::NotRegistered {
                type_name: object.type_name(),
            })
    }
}
