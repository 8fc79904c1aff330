//! Type resolution for objects.

use crate::{error::ResolveError, gvk::GroupVersionKind, object::Object};
use std::sync::Arc;

/// Determines the [`GroupVersionKind`] of an object.
///
/// The dispatcher uses this to decide whether an object produced by a
/// handler is the target of the request. Implementations must be
/// deterministic and free of side effects.
pub trait TypeResolver: Send + Sync {
    /// Resolve the type of `object`.
    fn group_version_kind_for(&self, object: &dyn Object)
    -> Result<GroupVersionKind, ResolveError>;
}

impl<R: TypeResolver + ?Sized> TypeResolver for Arc<R> {
    fn group_version_kind_for(
        &self,
        object: &dyn Object,
    ) -> Result<GroupVersionKind, ResolveError> {
        (**self).group_version_kind_for(object)
    }
}

impl<R: TypeResolver + ?Sized> TypeResolver for &R {
    fn group_version_kind_for(
        &self,
        object: &dyn Object,
    ) -> Result<GroupVersionKind, ResolveError> {
        (**self).group_version_kind_for(object)
    }
}
