//! # kroute-std
//!
//! Standard implementations for the kroute handler dispatch engine.
//!
//! This crate provides:
//! - **Registry**: [`HandlerRegistry`](registry::HandlerRegistry), handlers keyed by resource type
//! - **Dispatch**: [`Dispatcher`](dispatch::Dispatcher), sequential execution with
//!   current-object threading
//! - **Type resolution**: [`Scheme`](scheme::Scheme)
//! - **Standard handlers**: closure and tracing adapters
//! - **Testing**: recording, emitting and failing handlers

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use kroute_core;

// Modules
pub mod dispatch;
pub mod handlers;
pub mod registry;
pub mod scheme;
pub mod testing;
