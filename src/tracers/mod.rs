//! # Tracer capability contracts.
//!
//! Two traits, one per level of the tracing hierarchy:
//! - [`Tracer`] - endpoint-scoped; asked once per connection attempt whether
//!   (and how) to trace that connection.
//! - [`ConnectionTracer`] - connection-scoped; receives the full event
//!   catalog for exactly one connection.
//!
//! Concrete sinks and the multiplexers in [`crate::multiplex`] implement the
//! same traits, so the transport never knows how many observers exist.

mod connection;
mod tracer;

pub use connection::ConnectionTracer;
pub use tracer::Tracer;

// Optional built-in logging tracer (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
mod log;
#[cfg(feature = "logging")]
pub use log::LogTracer;
