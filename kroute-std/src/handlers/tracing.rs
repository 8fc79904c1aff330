//! Tracing span wrapper for handlers.

use kroute_core::{BoxError, Handler, Request, Response};

#[cfg(feature = "tracing")]
use tracing::Instrument;

/// A handler wrapper that runs the inner handler inside a `tracing` span.
///
/// The span records the handler name, the request's type and its key.
/// Without the `tracing` feature this is a plain pass-through.
pub struct TracingHandler<H> {
    inner: H,
    name: &'static str,
}

impl<H> TracingHandler<H> {
    /// Create a new `TracingHandler` wrapper around a handler.
    pub const fn new(inner: H, name: &'static str) -> Self {
        Self { inner, name }
    }

    /// The name recorded on the span.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<H: Handler> Handler for TracingHandler<H> {
    #[cfg(feature = "tracing")]
    async fn handle(&self, req: &Request, resp: &mut Response) -> Result<(), BoxError> {
        let span = tracing::debug_span!(
            "handler",
            handler = %self.name,
            gvk = %req.gvk,
            key = %req.key()
        );
        self.inner.handle(req, resp).instrument(span).await
    }

    #[cfg(not(feature = "tracing"))]
    async fn handle(&self, req: &Request, resp: &mut Response) -> Result<(), BoxError> {
        self.inner.handle(req, resp).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{CallLog, FailingHandler, RecordingHandler};
    use kroute_core::GroupVersionKind;

    #[tokio::test]
    async fn test_tracing_handler_passthrough() {
        let log = CallLog::new();
        let handler = TracingHandler::new(RecordingHandler::new("inner", &log), "labels");
        assert_eq!(handler.name(), "labels");

        let req = Request::new(GroupVersionKind::new("", "v1", "Pod"), "default", "x");
        handler.handle(&req, &mut Response::new()).await.unwrap();
        assert_eq!(log.entries(), ["inner"]);
    }

    #[tokio::test]
    async fn test_tracing_handler_keeps_error() {
        let handler = TracingHandler::new(FailingHandler::new("nope"), "failing");
        let req = Request::new(GroupVersionKind::new("", "v1", "Pod"), "default", "x");

        let err = handler.handle(&req, &mut Response::new()).await.unwrap_err();
        assert_eq!(err.to_string(), "nope");
    }
}
