//! Closure-backed handlers.

use kroute_core::{BoxError, Handler, IntoHandlerResult, Request, Response};

/// A handler backed by a synchronous closure.
///
/// The closure may return `()` or `Result<(), E>` for any `E` convertible
/// into a [`BoxError`].
///
/// # Example
///
/// ```rust,ignore
/// registry.add_handler(
///     pod_gvk,
///     HandlerFunc::new(|req, resp| {
///         resp.add_object(config_map_for(req));
///     }),
/// );
/// ```
pub struct HandlerFunc<F> {
    func: F,
}

impl<F> HandlerFunc<F> {
    /// Wrap a closure.
    pub fn new<R>(func: F) -> Self
    where
        F: Fn(&Request, &mut Response) -> R + Send + Sync + 'static,
        R: IntoHandlerResult,
    {
        Self { func }
    }
}

impl<F, R> Handler for HandlerFunc<F>
where
    F: Fn(&Request, &mut Response) -> R + Send + Sync + 'static,
    R: IntoHandlerResult,
{
    async fn handle(&self, req: &Request, resp: &mut Response) -> Result<(), BoxError> {
        (self.func)(req, resp).into_handler_result()
    }
}
