//! Testing utilities for kroute.
//!
//! This module provides handlers and objects that make dispatch behavior
//! easy to observe in tests.
//!
//! # Features
//!
//! - [`CallLog`]: A shared, ordered log handlers append to
//! - [`RecordingHandler`]: Logs its id and records the current object it saw
//! - [`EmittingHandler`]: Appends a fixed set of objects to the response
//! - [`FailingHandler`]: Always returns an error
//! - [`TestObject`]: A statically typed object, resolved through a `Scheme`
//! - [`UnresolvableObject`]: An object whose type can never be resolved

use kroute_core::{BoxError, GroupVersionKind, Handler, Object, ObjectRef, Request, Response};
use parking_lot::Mutex;
use std::sync::Arc;

// ============================================================================
// Call Log
// ============================================================================

/// An ordered log shared between handlers.
///
/// # Example
///
/// ```rust,ignore
/// let log = CallLog::new();
/// registry.add_handler(gvk.clone(), RecordingHandler::new("a", &log));
/// registry.add_handler(gvk.clone(), RecordingHandler::new("b", &log));
///
/// dispatcher.dispatch(req, &mut resp).await?;
/// assert_eq!(log.entries(), ["a", "b"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    entries: Arc<Mutex<Vec<String>>>,
}

impl CallLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn push(&self, entry: impl Into<String>) {
        self.entries.lock().push(entry.into());
    }

    /// Get a copy of the entries.
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().clone()
    }

    /// Clear all entries.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

// ============================================================================
// Recording Handler
// ============================================================================

/// A handler that logs its id and records the request's current object.
///
/// Clones share the same records, so keep a clone to inspect after
/// registering the original.
#[derive(Clone)]
pub struct RecordingHandler {
    id: String,
    log: CallLog,
    observed: Arc<Mutex<Vec<Option<ObjectRef>>>>,
}

impl RecordingHandler {
    /// Create a recording handler writing to `log`.
    pub fn new(id: impl Into<String>, log: &CallLog) -> Self {
        Self {
            id: id.into(),
            log: log.clone(),
            observed: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// The `request.object` seen on each invocation, in call order.
    pub fn observed(&self) -> Vec<Option<ObjectRef>> {
        self.observed.lock().clone()
    }

    /// Get the number of invocations.
    pub fn count(&self) -> usize {
        self.observed.lock().len()
    }
}

impl Handler for RecordingHandler {
    async fn handle(&self, req: &Request, _resp: &mut Response) -> Result<(), BoxError> {
        self.log.push(self.id.clone());
        self.observed.lock().push(req.object.clone());
        Ok(())
    }
}

// ============================================================================
// Emitting Handler
// ============================================================================

/// A handler that appends the same objects to every response.
pub struct EmittingHandler {
    objects: Vec<ObjectRef>,
}

impl EmittingHandler {
    /// Create a handler emitting `objects` in order.
    pub fn new(objects: Vec<ObjectRef>) -> Self {
        Self { objects }
    }
}

impl Handler for EmittingHandler {
    async fn handle(&self, _req: &Request, resp: &mut Response) -> Result<(), BoxError> {
        resp.add_objects(self.objects.iter().cloned());
        Ok(())
    }
}

// ============================================================================
// Failing Handler
// ============================================================================

/// A handler that always fails with the same message.
pub struct FailingHandler {
    message: String,
}

impl FailingHandler {
    /// Create a handler failing with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Handler for FailingHandler {
    async fn handle(&self, _req: &Request, _resp: &mut Response) -> Result<(), BoxError> {
        Err(self.message.clone().into())
    }
}

// ============================================================================
// Test Objects
// ============================================================================

/// A statically typed object with no type information of its own.
///
/// Resolvable only through a resolver that knows its Rust type, such as a
/// `Scheme` with `TestObject` registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestObject {
    /// Namespace.
    pub namespace: String,
    /// Name.
    pub name: String,
    /// Arbitrary payload, for telling instances apart.
    pub value: String,
}

impl TestObject {
    /// Create an object with an empty payload.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            value: String::new(),
        }
    }

    /// Set the payload.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }
}

impl Object for TestObject {
    fn name(&self) -> &str {
        &self.name
    }

    fn namespace(&self) -> &str {
        &self.namespace
    }
}

static NO_KIND: GroupVersionKind = GroupVersionKind {
    group: String::new(),
    version: String::new(),
    kind: String::new(),
};

/// An object that describes its own type with an empty kind.
///
/// A `Scheme` refuses to resolve it, which aborts any dispatch it shows up in.
#[derive(Debug, Clone)]
pub struct UnresolvableObject {
    namespace: String,
    name: String,
}

impl UnresolvableObject {
    /// Create an unresolvable object.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

impl Object for UnresolvableObject {
    fn name(&self) -> &str {
        &self.name
    }

    fn namespace(&self) -> &str {
        &self.namespace
    }

    fn type_meta(&self) -> Option<&GroupVersionKind> {
        Some(&NO_KIND)
    }
}
