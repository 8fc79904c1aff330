//! # Sequential Dispatch
//!
//! Runs every handler registered for a request's type, one after the other,
//! threading the request's current object through the chain.
//!
//! After each handler returns, the response is scanned for objects that
//! *are* the request's target (same type, namespace and name). Those are
//! removed from the response and the last one becomes `request.object`
//! for the handlers that follow. Everything else stays in the response, in
//! order, for the caller to apply.
//!
//! # Failure policy
//!
//! - A handler error is recorded and the next handler still runs. All
//!   recorded errors are returned together once the chain finishes.
//! - Failing to resolve the type of a produced object aborts the dispatch
//!   immediately: without a type the target cannot be told apart from the
//!   other objects. The response is left as the failing handler produced it.
//!
//! # Example
//!
//! ```rust,ignore
//! let dispatcher = Dispatcher::new(registry, scheme);
//!
//! let mut resp = Response::new();
//! dispatcher.dispatch(Request::new(pod_gvk, "default", "x"), &mut resp).await?;
//! apply(resp.into_objects());
//! ```

use crate::registry::HandlerRegistry;
use kroute_core::{
    AggregateError, DispatchError, Object, ObjectRef, Request, ResolveError, Response,
    TypeResolver,
};
use std::sync::Arc;

/// Check whether `object` is the target of `req`.
///
/// The object's type is resolved first, so a resolver failure is reported
/// even when the name or namespace would not have matched.
pub fn is_object_for_request<R>(
    resolver: &R,
    req: &Request,
    object: &dyn Object,
) -> Result<bool, ResolveError>
where
    R: TypeResolver + ?Sized,
{
    let gvk = resolver.group_version_kind_for(object)?;
    Ok(object.name() == req.name && object.namespace() == req.namespace && gvk == req.gvk)
}

/// Dispatches requests to the handlers of a [`HandlerRegistry`].
pub struct Dispatcher<R> {
    registry: Arc<HandlerRegistry>,
    resolver: R,
}

impl<R: TypeResolver> Dispatcher<R> {
    /// Create a dispatcher over a shared registry.
    pub fn new(registry: Arc<HandlerRegistry>, resolver: R) -> Self {
        Self { registry, resolver }
    }

    /// The registry handlers are looked up in.
    pub fn registry(&self) -> &Arc<HandlerRegistry> {
        &self.registry
    }

    /// The resolver used to identify produced objects.
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Run the handlers for `req` in registration order.
    ///
    /// Handlers are awaited one at a time. The registry is only locked while
    /// the handler list is snapshotted, never while a handler runs.
    ///
    /// On return, `resp` holds every produced object that is not the
    /// request's target. If the dispatch was aborted by a [`ResolveError`],
    /// `resp` is partial and should not be applied.
    pub async fn dispatch(
        &self,
        mut req: Request,
        resp: &mut Response,
    ) -> Result<(), DispatchError> {
        let handlers = self.registry.handlers_for(&req.gvk);
        if handlers.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::trace!(gvk = %req.gvk, key = %req.key(), "no handlers registered");
            return Ok(());
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            gvk = %req.gvk,
            key = %req.key(),
            handlers = handlers.len(),
            "dispatching request"
        );

        let mut errors = Vec::new();
        for (index, handler) in handlers.iter().enumerate() {
            if let Err(err) = handler.handle_dyn(&req, resp).await {
                #[cfg(feature = "tracing")]
                tracing::warn!(key = %req.key(), index, error = %err, "handler failed");
                errors.push(err);
            }

            if let Err(err) = promote_target(&self.resolver, &mut req, resp) {
                #[cfg(feature = "tracing")]
                tracing::error!(key = %req.key(), index, error = %err, "aborting dispatch");
                #[cfg(not(feature = "tracing"))]
                let _ = index; // Suppress unused warning
                return Err(err.into());
            }
        }

        match AggregateError::from_errors(errors) {
            Some(agg) => Err(agg.into()),
            None => Ok(()),
        }
    }

    /// Run [`dispatch`](Self::dispatch) to completion on the current thread.
    ///
    /// For callers outside an async runtime. Must not be called from within
    /// an async task.
    pub fn dispatch_blocking(
        &self,
        req: Request,
        resp: &mut Response,
    ) -> Result<(), DispatchError> {
        futures::executor::block_on(self.dispatch(req, resp))
    }
}

/// Move the objects matching `req` out of `resp`; the last one becomes
/// `req.object`.
///
/// Nothing is modified unless every object resolves.
fn promote_target<R: TypeResolver>(
    resolver: &R,
    req: &mut Request,
    resp: &mut Response,
) -> Result<(), ResolveError> {
    let mut remaining = Vec::with_capacity(resp.len());
    let mut target: Option<ObjectRef> = None;
    let mut matches = 0usize;

    for object in resp.objects() {
        if is_object_for_request(resolver, req, object.as_ref())? {
            matches += 1;
            target = Some(object.clone());
        } else {
            remaining.push(object.clone());
        }
    }

    if let Some(object) = target {
        #[cfg(feature = "tracing")]
        {
            if matches > 1 {
                tracing::warn!(
                    key = %req.key(),
                    matches,
                    "several objects match the request, keeping the last"
                );
            } else {
                tracing::debug!(key = %req.key(), "promoting produced object into the request");
            }
        }
        #[cfg(not(feature = "tracing"))]
        let _ = matches; // Suppress unused warning
        req.object = Some(object);
        resp.set_objects(remaining);
    }

    Ok(())
}
