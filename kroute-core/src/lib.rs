//! # kroute-core
//!
//! Core traits for the kroute handler dispatch engine.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! handler crates that don't need the registry and dispatcher from
//! `kroute-std`.
//!
//! # Vocabulary
//!
//! - [`GroupVersionKind`] - the routing key identifying a resource type
//! - [`Object`] / [`ObjectRef`] - a named, namespaced resource instance
//! - [`Request`] - the resource a dispatch is about, plus its current state
//! - [`Response`] - objects produced by the handler chain so far
//! - [`Handler`] / [`DynHandler`] - one step of the chain
//! - [`TypeResolver`] - maps an object to its [`GroupVersionKind`]
//!
//! # Error Types
//!
//! - [`DispatchError`] - Top-level error type
//! - [`ResolveError`] - Type resolution errors (abort a dispatch)
//! - [`AggregateError`] - Handler errors (collected across a dispatch)

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod gvk;
mod handler;
mod object;
mod request;
mod resolver;
mod response;

// Re-exports
pub use error::{AggregateError, BoxError, DispatchError, ResolveError};
pub use gvk::GroupVersionKind;
pub use handler::{DynHandler, Handler, IntoHandlerResult};
pub use object::{AsAny, DynamicObject, Object, ObjectRef};
pub use request::Request;
pub use resolver::TypeResolver;
pub use response::Response;
