#![allow(dead_code)]

use kroute::{BoxError, DynamicObject, GroupVersionKind, Handler, ObjectRef, Request, Response};

// ============================================================================
// Test Types
// ============================================================================

pub fn pod() -> GroupVersionKind {
    GroupVersionKind::new("", "v1", "Pod")
}

pub fn config_map() -> GroupVersionKind {
    GroupVersionKind::new("", "v1", "ConfigMap")
}

pub fn deployment() -> GroupVersionKind {
    GroupVersionKind::new("apps", "v1", "Deployment")
}

pub fn object(gvk: GroupVersionKind, namespace: &str, name: &str) -> ObjectRef {
    DynamicObject::new(gvk, name)
        .with_namespace(namespace)
        .into_ref()
}

/// `Kind:namespace/name` for every object left in the response.
pub fn describe(resp: &Response) -> Vec<String> {
    resp.objects()
        .iter()
        .map(|obj| {
            let kind = obj
                .type_meta()
                .map(|gvk| gvk.kind.clone())
                .unwrap_or_default();
            format!("{kind}:{}", obj.key())
        })
        .collect()
}

// ============================================================================
// Test Handlers
// ============================================================================

/// Re-emits the request's target with its `count` incremented.
///
/// Starts from zero when there is no current object.
pub struct CountingHandler;

impl Handler for CountingHandler {
    async fn handle(&self, req: &Request, resp: &mut Response) -> Result<(), BoxError> {
        let count: u32 = match req.object_as::<DynamicObject>() {
            Some(current) => current
                .data
                .get("count")
                .map(|c| c.parse())
                .transpose()?
                .unwrap_or(0),
            None => 0,
        };

        resp.add_object(
            DynamicObject::new(req.gvk.clone(), req.name.clone())
                .with_namespace(req.namespace.clone())
                .with_data("count", (count + 1).to_string())
                .into_ref(),
        );
        Ok(())
    }
}

/// Emits a config map named after the request, next to the target.
pub struct ConfigMapHandler;

impl Handler for ConfigMapHandler {
    async fn handle(&self, req: &Request, resp: &mut Response) -> Result<(), BoxError> {
        resp.add_object(object(
            config_map(),
            &req.namespace,
            &format!("{}-config", req.name),
        ));
        Ok(())
    }
}
