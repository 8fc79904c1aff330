//! Dispatch request.

use crate::{
    gvk::GroupVersionKind,
    object::{Object, ObjectRef, object_key},
};

/// Identifies the resource a dispatch is about.
///
/// The dispatcher owns its own copy of the request and updates
/// [`Request::object`] as handlers produce the target object, so each
/// handler sees the state left by the previous one.
#[derive(Debug, Clone)]
pub struct Request {
    /// Type of the target resource.
    pub gvk: GroupVersionKind,
    /// Namespace of the target resource.
    pub namespace: String,
    /// Name of the target resource.
    pub name: String,
    /// Current state of the target resource, if known.
    pub object: Option<ObjectRef>,
}

impl Request {
    /// Create a request with no current object.
    pub fn new(
        gvk: GroupVersionKind,
        namespace: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            gvk,
            namespace: namespace.into(),
            name: name.into(),
            object: None,
        }
    }

    /// Set the current object.
    pub fn with_object(mut self, object: ObjectRef) -> Self {
        self.object = Some(object);
        self
    }

    /// `namespace/name`, or just `name` for cluster-scoped resources.
    pub fn key(&self) -> String {
        object_key(&self.namespace, &self.name)
    }

    /// The current object, if any.
    pub fn object(&self) -> Option<&ObjectRef> {
        self.object.as_ref()
    }

    /// The current object downcast to `T`.
    ///
    /// Returns `None` when there is no current object or it is of another type.
    pub fn object_as<T: Object>(&self) -> Option<&T> {
        self.object.as_deref().and_then(|obj| obj.downcast_ref::<T>())
    }
}
