//! Response accumulator.

use crate::object::ObjectRef;
use std::time::Duration;

/// Objects produced by a handler chain during one dispatch.
///
/// A response belongs to exactly one dispatch. Handlers append to it;
/// the dispatcher removes the entries that match the request and promotes
/// them into the request. What is left at the end is the set of objects
/// the caller should apply.
#[derive(Debug, Default)]
pub struct Response {
    objects: Vec<ObjectRef>,
    retry_after: Option<Duration>,
}

impl Response {
    /// Create an empty response.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a response pre-seeded with objects.
    pub fn with_objects(objects: Vec<ObjectRef>) -> Self {
        Self {
            objects,
            retry_after: None,
        }
    }

    /// Append an object.
    pub fn add_object(&mut self, object: ObjectRef) {
        self.objects.push(object);
    }

    /// Append objects in iteration order.
    pub fn add_objects(&mut self, objects: impl IntoIterator<Item = ObjectRef>) {
        self.objects.extend(objects);
    }

    /// Objects accumulated so far.
    pub fn objects(&self) -> &[ObjectRef] {
        &self.objects
    }

    /// Take the accumulated objects, leaving the list empty.
    pub fn take_objects(&mut self) -> Vec<ObjectRef> {
        std::mem::take(&mut self.objects)
    }

    /// Replace the accumulated objects.
    pub fn set_objects(&mut self, objects: Vec<ObjectRef>) {
        self.objects = objects;
    }

    /// Consume the response, returning its objects.
    pub fn into_objects(self) -> Vec<ObjectRef> {
        self.objects
    }

    /// Number of accumulated objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if no objects have been accumulated.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Ask the caller to reconcile this resource again after `delay`.
    ///
    /// The shortest requested delay wins.
    pub fn retry_after(&mut self, delay: Duration) {
        self.retry_after = Some(match self.retry_after {
            Some(current) => current.min(delay),
            None => delay,
        });
    }

    /// The requested requeue delay, if any handler asked for one.
    pub fn requeue_after(&self) -> Option<Duration> {
        self.retry_after
    }
}
