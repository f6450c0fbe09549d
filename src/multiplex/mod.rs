//! # Fanout multiplexers.
//!
//! Collapses any number of tracers into at most one object satisfying the
//! same contract, at both levels of the tracer hierarchy:
//!
//! ```text
//!                 multiplex_tracers([t1, t2, t3])
//!                              │
//!                              ▼
//!        transport ──► TracerMux::trace_for(role, odcid)
//!                        ├─► t1.trace_for() ─► Some(c1)
//!                        ├─► t2.trace_for() ─► None      (declined)
//!                        └─► t3.trace_for() ─► Some(c3)
//!                              │
//!                              ▼  collapse([c1, c3])
//!        transport ──► ConnectionTracerMux ──► c1.event(args)
//!                        (per event)       └─► c3.event(args)
//! ```
//!
//! ## Collapsing rule
//! Shared by both levels, applied at every construction site:
//! - zero tracers → `None` ("absent", so the caller skips dispatch entirely);
//! - one tracer → that tracer, unwrapped (no fanout overhead);
//! - two or more → a multiplexer wrapping them in the given order.
//!
//! An empty multiplexer is unrepresentable: the mux types have no public
//! constructor other than the collapsing functions.

mod connection;
mod tracer;

pub use connection::multiplex_connection_tracers;
pub use tracer::multiplex_tracers;

/// Applies the 0/1/N collapsing rule to an ordered collection.
///
/// `wrap` is only invoked for N >= 2 and receives the collection unchanged,
/// so construction order is forwarding order.
fn collapse<T>(mut items: Vec<T>, wrap: impl FnOnce(Vec<T>) -> T) -> Option<T> {
    match items.len() {
        0 => None,
        1 => items.pop(),
        _ => Some(wrap(items)),
    }
}
