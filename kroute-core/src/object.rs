//! Object trait for resource instances.

use crate::gvk::GroupVersionKind;
use std::{any::Any, collections::BTreeMap, fmt::Debug, sync::Arc};

/// Shared handle to a resource instance.
///
/// Objects move between the response accumulator and the request by
/// cloning this handle, never by copying the object itself.
pub type ObjectRef = Arc<dyn Object>;

/// Type-erasure helper implemented for every sized `'static` type.
pub trait AsAny: Any {
    /// Borrow as `&dyn Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// The concrete Rust type name, for diagnostics.
    fn type_name(&self) -> &'static str;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// A named, optionally namespaced resource instance.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Debug)]
/// struct Pod { namespace: String, name: String }
///
/// impl Object for Pod {
///     fn name(&self) -> &str { &self.name }
///     fn namespace(&self) -> &str { &self.namespace }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Object",
    label = "missing `Object` implementation",
    note = "Objects must be `Debug + Send + Sync + 'static` and expose a name and namespace."
)]
pub trait Object: AsAny + Debug + Send + Sync + 'static {
    /// Object name.
    fn name(&self) -> &str;

    /// Object namespace. Empty for cluster-scoped objects.
    fn namespace(&self) -> &str;

    /// Type information carried by the object itself, if any.
    ///
    /// Self-describing objects (such as [`DynamicObject`]) return their
    /// group/version/kind here; statically typed objects usually rely on a
    /// resolver's type mapping instead.
    fn type_meta(&self) -> Option<&GroupVersionKind> {
        None
    }

    /// `namespace/name`, or just `name` for cluster-scoped objects.
    fn key(&self) -> String {
        object_key(self.namespace(), self.name())
    }
}

impl dyn Object {
    /// Downcast to a concrete object type.
    pub fn downcast_ref<T: Object>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Check whether the object is of concrete type `T`.
    pub fn is<T: Object>(&self) -> bool {
        self.as_any().is::<T>()
    }
}

pub(crate) fn object_key(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{namespace}/{name}")
    }
}

/// A schemaless object that carries its own type information.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DynamicObject {
    /// Type of the object.
    pub gvk: GroupVersionKind,
    /// Namespace; empty for cluster-scoped objects.
    pub namespace: String,
    /// Name.
    pub name: String,
    /// Free-form payload.
    pub data: BTreeMap<String, String>,
}

impl DynamicObject {
    /// Create a cluster-scoped object with no data.
    pub fn new(gvk: GroupVersionKind, name: impl Into<String>) -> Self {
        Self {
            gvk,
            namespace: String::new(),
            name: name.into(),
            data: BTreeMap::new(),
        }
    }

    /// Set the namespace.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Insert a data entry.
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Wrap into a shared [`ObjectRef`].
    pub fn into_ref(self) -> ObjectRef {
        Arc::new(self)
    }
}

impl Object for DynamicObject {
    fn name(&self) -> &str {
        &self.name
    }

    fn namespace(&self) -> &str {
        &self.namespace
    }

    fn type_meta(&self) -> Option<&GroupVersionKind> {
        Some(&self.gvk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key() {
        let pod = DynamicObject::new(GroupVersionKind::new("", "v1", "Pod"), "x")
            .with_namespace("default");
        assert_eq!(pod.key(), "default/x");

        let node = DynamicObject::new(GroupVersionKind::new("", "v1", "Node"), "n1");
        assert_eq!(node.key(), "n1");
    }

    #[test]
    fn test_downcast_through_object_ref() {
        let obj: ObjectRef = DynamicObject::new(GroupVersionKind::new("", "v1", "Pod"), "x")
            .with_data("image", "nginx")
            .into_ref();

        assert!(obj.is::<DynamicObject>());
        let pod = obj.downcast_ref::<DynamicObject>().unwrap();
        assert_eq!(pod.data.get("image").map(String::as_str), Some("nginx"));
        assert!((*obj).type_name().ends_with("DynamicObject"));
    }
}
