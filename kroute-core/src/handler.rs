//! # Handler
//!
//! A handler is one step of a reconciliation chain. It reads the request
//! (including the current object left by earlier handlers) and appends the
//! objects it wants to exist to the response.
//!
//! # Static vs Dynamic Dispatch
//!
//! [`Handler`] uses native `async fn` for zero-cost static dispatch.
//! Registries store handlers of different types side by side, so they work
//! with the object-safe [`DynHandler`], which every `Handler` implements.

use crate::{error::BoxError, request::Request, response::Response};
use futures::future::BoxFuture;
use std::{future::Future, sync::Arc};

/// One step of a handler chain.
///
/// # Example
///
/// ```rust,ignore
/// struct LabelPods;
///
/// impl Handler for LabelPods {
///     async fn handle(&self, req: &Request, resp: &mut Response) -> Result<(), BoxError> {
///         if let Some(pod) = req.object_as::<Pod>() {
///             resp.add_object(Arc::new(pod.with_label("managed", "true")));
///         }
///         Ok(())
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Handler`",
    label = "missing `Handler` implementation",
    note = "Handlers must implement `handle(&self, &Request, &mut Response)`."
)]
pub trait Handler: Send + Sync + 'static {
    /// Handle a request, appending produced objects to `resp`.
    fn handle(
        &self,
        req: &Request,
        resp: &mut Response,
    ) -> impl Future<Output = Result<(), BoxError>> + Send;
}

/// Dynamic object-safe version of [`Handler`].
pub trait DynHandler: Send + Sync + 'static {
    /// Handle a request (dynamic dispatch version).
    fn handle_dyn<'a>(
        &'a self,
        req: &'a Request,
        resp: &'a mut Response,
    ) -> BoxFuture<'a, Result<(), BoxError>>;
}

impl<T: Handler> DynHandler for T {
    fn handle_dyn<'a>(
        &'a self,
        req: &'a Request,
        resp: &'a mut Response,
    ) -> BoxFuture<'a, Result<(), BoxError>> {
        Box::pin(self.handle(req, resp))
    }
}

// Lets a shared handler be registered for several types.
impl Handler for Arc<dyn DynHandler> {
    async fn handle(&self, req: &Request, resp: &mut Response) -> Result<(), BoxError> {
        (**self).handle_dyn(req, resp).await
    }
}

/// Conversion of a handler function's return value into a handler result.
///
/// - `()` → `Ok(())`
/// - `Result<(), E>` → the error boxed
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be returned from a handler function",
    label = "expected `()` or `Result<(), E>`"
)]
pub trait IntoHandlerResult {
    /// Convert into a handler result.
    fn into_handler_result(self) -> Result<(), BoxError>;
}

impl IntoHandlerResult for () {
    fn into_handler_result(self) -> Result<(), BoxError> {
        Ok(())
    }
}

impl<E> IntoHandlerResult for Result<(), E>
where
    E: Into<BoxError>,
{
    fn into_handler_result(self) -> Result<(), BoxError> {
        self.map_err(Into::into)
    }
}
