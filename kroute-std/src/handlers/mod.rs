//! Standard handler adapters.

pub mod func;
pub mod tracing;

pub use self::{func::HandlerFunc, tracing::TracingHandler};
