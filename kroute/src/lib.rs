//! # kroute - Handler Registry and Sequential Dispatch
//!
//! `kroute` routes a reconciliation request for one resource to every
//! handler registered for that resource's type. Handlers run one after the
//! other, in registration order, and each sees the target object as left by
//! the handlers before it.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use kroute::prelude::*;
//! use std::sync::Arc;
//!
//! let pod = GroupVersionKind::new("", "v1", "Pod");
//!
//! let registry = Arc::new(HandlerRegistry::new());
//! registry.add_handler(pod.clone(), DefaultLabels);
//! registry.add_handler(pod.clone(), EnsureConfigMap);
//!
//! let dispatcher = Dispatcher::new(registry, Scheme::new());
//!
//! let mut resp = Response::new();
//! dispatcher.dispatch(Request::new(pod, "default", "web"), &mut resp).await?;
//! // `resp` now holds the objects to apply besides the pod itself.
//! ```
//!
//! ## Failure semantics
//!
//! - A failing handler does not stop the chain; every handler error is
//!   returned together in a [`DispatchError::Handlers`].
//! - An object whose type cannot be resolved stops the chain at once with
//!   [`DispatchError::Resolve`].

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use kroute_core::{
    // Error types
    AggregateError,
    // Objects
    AsAny,
    BoxError,
    DispatchError,
    // Handler
    DynHandler,
    DynamicObject,
    // Type identity
    GroupVersionKind,
    Handler,
    IntoHandlerResult,
    Object,
    ObjectRef,
    // Request / Response
    Request,
    ResolveError,
    Response,
    TypeResolver,
};

pub use kroute_std::{
    dispatch::{Dispatcher, is_object_for_request},
    registry::{HandlerRegistry, RegistryBuilder},
    scheme::Scheme,
};

/// Standard handler adapters.
pub mod handlers {
    pub use kroute_std::handlers::{HandlerFunc, TracingHandler};
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use kroute_std::testing::*;
}

/// Prelude module - common imports for kroute.
///
/// # Usage
///
/// ```rust,ignore
/// use kroute::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BoxError, DispatchError, Dispatcher, DynamicObject, GroupVersionKind, Handler,
        HandlerRegistry, Object, ObjectRef, Request, Response, Scheme, TypeResolver,
        handlers::HandlerFunc,
    };
}
