//! # Endpoint-level tracer trait.
//!
//! Provides [`Tracer`], the extension point for observing every connection
//! an endpoint handles. The transport asks the tracer once per connection
//! attempt; the tracer answers with a per-connection
//! [`ConnectionTracer`](crate::ConnectionTracer), or declines with `None`.
//!
//! ## Rules
//! - `trace_for` is called exactly once per connection attempt, before any
//!   connection event is emitted.
//! - Returning `None` declines tracing for that connection; the transport
//!   then skips all per-event dispatch for it. Declining is free - prefer it
//!   over returning a tracer that ignores everything.
//! - One endpoint serves many connections: `trace_for` may be called
//!   concurrently and implementations must be safe for that
//!   (`Send + Sync`). Each *returned* connection tracer is only ever used
//!   from its own connection's context.
//!
//! ## Example
//! ```rust
//! use quictrace::{ConnectionId, ConnectionTracer, Perspective, Tracer};
//!
//! /// Traces only connections this endpoint accepted.
//! struct ServerOnly;
//!
//! impl Tracer for ServerOnly {
//!     fn trace_for(
//!         &self,
//!         role: Perspective,
//!         _odcid: &ConnectionId,
//!     ) -> Option<Box<dyn ConnectionTracer>> {
//!         match role {
//!             Perspective::Server => None, // plug in a real tracer here
//!             Perspective::Client => None,
//!         }
//!     }
//! }
//! ```

use crate::types::{ConnectionId, Perspective};

use super::ConnectionTracer;

/// Endpoint-scoped tracer: decides, per connection, whether to trace it.
///
/// Implementations live for the endpoint's whole lifetime and are shared
/// across all of its connections.
///
/// ### Implementation requirements
/// - Must tolerate concurrent `trace_for` calls (one per in-flight
///   connection attempt).
/// - Must not block; this runs on the transport's accept/dial path.
pub trait Tracer: Send + Sync {
    /// Called once per connection attempt.
    ///
    /// `role` says whether this endpoint is the server or the client for
    /// the attempt; `odcid` is the original destination connection ID.
    ///
    /// Returns the tracer to attach to the connection, or `None` to
    /// decline tracing it.
    fn trace_for(
        &self,
        role: Perspective,
        odcid: &ConnectionId,
    ) -> Option<Box<dyn ConnectionTracer>>;
}
