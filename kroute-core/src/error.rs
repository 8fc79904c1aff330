//! Error types for kroute.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`DispatchError`] - Top-level error returned by a dispatch
//! - [`ResolveError`] - Failure to determine an object's type (fatal)
//! - [`AggregateError`] - Every error returned by the handlers of one dispatch

use std::fmt;
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while resolving an object's type.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The concrete object type has no registered group/version/kind.
    #[error("no kind is registered for type {type_name}")]
    NotRegistered {
        /// Rust type name of the object.
        type_name: &'static str,
    },

    /// The object describes its own type but the kind is empty.
    #[error("object {object} has no kind set")]
    MissingKind {
        /// Key of the offending object.
        object: String,
    },

    /// A custom resolver error.
    #[error(transparent)]
    Custom(BoxError),
}

impl From<BoxError> for ResolveError {
    fn from(err: BoxError) -> Self {
        ResolveError::Custom(err)
    }
}

/// The errors returned by handlers during one dispatch, in the order they
/// were returned.
///
/// Never empty: build one with [`AggregateError::from_errors`], which maps an
/// empty list to `None`.
#[derive(Error, Debug)]
#[error("{}", DisplayErrors(.errors))]
pub struct AggregateError {
    errors: Vec<BoxError>,
}

impl AggregateError {
    /// Fold a list of errors into one. Returns `None` when the list is empty.
    pub fn from_errors(errors: Vec<BoxError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    /// The constituent errors, in encounter order.
    pub fn errors(&self) -> &[BoxError] {
        &self.errors
    }

    /// Number of constituent errors. Always at least one.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Always `false`: an aggregate holds at least one error.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterate over the constituent errors.
    pub fn iter(&self) -> impl Iterator<Item = &BoxError> {
        self.errors.iter()
    }

    /// Consume into the constituent errors.
    pub fn into_errors(self) -> Vec<BoxError> {
        self.errors
    }
}

struct DisplayErrors<'a>(&'a [BoxError]);

impl fmt::Display for DisplayErrors<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            [single] => write!(f, "{single}"),
            errors => {
                write!(f, "{} handler errors: [", errors.len())?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{err}")?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Errors returned by a dispatch.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// An object produced by a handler could not be identified.
    /// The dispatch stopped at the handler that produced it.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// One or more handlers failed. Every handler still ran.
    #[error(transparent)]
    Handlers(#[from] AggregateError),
}

impl DispatchError {
    /// True when the dispatch was aborted rather than run to completion.
    pub fn is_fatal(&self) -> bool {
        matches!(self, DispatchError::Resolve(_))
    }

    /// The handler errors carried by this error. Empty for fatal errors.
    pub fn handler_errors(&self) -> &[BoxError] {
        match self {
            DispatchError::Handlers(agg) => agg.errors(),
            DispatchError::Resolve(_) => &[],
        }
    }
}
