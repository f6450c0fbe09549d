//! # quictrace
//!
//! **quictrace** is an order-preserving event-tracing fanout layer for
//! QUIC-like transports.
//!
//! A transport endpoint emits a fixed catalog of lifecycle and diagnostic
//! events (connection start/close, packets sent/received/dropped/lost,
//! loss-detection timer changes, key updates, metrics updates). This crate
//! lets zero, one, or many observers ("tracers") attach to the same endpoint
//! and the same connection, with every event delivered to every tracer, in
//! attachment order, synchronously - without the event-producing code ever
//! knowing how many observers exist.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!           multiplex_tracers([qlog, metrics, log])     (once per endpoint)
//!                            │
//!                            ▼
//!  transport ──────► Tracer::trace_for(role, odcid)     (once per connection)
//!                      ├─► qlog.trace_for()    ─► Some(q)
//!                      ├─► metrics.trace_for() ─► None        (declined)
//!                      └─► log.trace_for()     ─► Some(l)
//!                            │
//!                            ▼  collapse: 0 → None, 1 → as-is, N → mux
//!  transport ──────► ConnectionTracer                   (per event, hot path)
//!                      ├─► q.sent_packet(hdr, size, ack, frames)
//!                      └─► l.sent_packet(hdr, size, ack, frames)
//! ```
//!
//! ### Rules
//! - **Zero overhead when untraced**: "no tracer" is an explicit `None`, so
//!   the transport skips event dispatch entirely for untraced connections
//!   and endpoints - it is never handed a tracer that ignores everything.
//! - **No wrapping overhead for one tracer**: collapsing returns a sole
//!   tracer unwrapped at both levels.
//! - **Order preservation**: a multiplexer's child order is fixed at
//!   construction and is the forwarding order for every event.
//! - **Pure fanout**: no buffering, batching, filtering, or transformation;
//!   every forwarded call carries the original arguments.
//! - **Synchronous**: no queues, workers, or locks; a fanned-out call
//!   returns when the last child returns. Per-connection serialization is
//!   the transport's job, as it is for a single tracer.
//! - **Faults propagate**: a panicking child tracer aborts delivery to the
//!   children ordered after it; the multiplexer neither catches nor logs.
//!
//! ## Features
//! | Area            | Description                                                   | Key types / functions                                    |
//! |-----------------|---------------------------------------------------------------|----------------------------------------------------------|
//! | **Contracts**   | Capability traits implemented by sinks and multiplexers alike.| [`Tracer`], [`ConnectionTracer`]                         |
//! | **Fanout**      | Collapse N tracers into at most one, per level.               | [`multiplex_tracers`], [`multiplex_connection_tracers`]  |
//! | **Payloads**    | Pass-through event argument types.                            | [`ConnectionId`], [`ExtendedHeader`], [`Frame`], [`RttStats`] |
//! | **Errors**      | Fallible payload construction.                                | [`Error`]                                                |
//!
//! ## Optional features
//! - `logging`: exports the built-in [`LogTracer`] _(demo/reference only)_,
//!   which logs every event through the `tracing` crate.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use quictrace::{
//!     multiplex_tracers, ConnectionId, ConnectionTracer, Perspective, Tracer,
//! };
//!
//! /// Counts connections; declines per-connection tracing.
//! struct ConnCounter;
//!
//! impl Tracer for ConnCounter {
//!     fn trace_for(
//!         &self,
//!         _role: Perspective,
//!         _odcid: &ConnectionId,
//!     ) -> Option<Box<dyn ConnectionTracer>> {
//!         // count here...
//!         None
//!     }
//! }
//!
//! // Endpoint setup: combine configured tracers (possibly none).
//! let tracer = multiplex_tracers(vec![Arc::new(ConnCounter) as Arc<dyn Tracer>]);
//!
//! // Connection setup: ask once, then dispatch events only if accepted.
//! if let Some(tracer) = &tracer {
//!     let conn_tracer = tracer.trace_for(Perspective::Client, &ConnectionId::from([1, 2, 3]));
//!     assert!(conn_tracer.is_none()); // every child declined
//! }
//! ```

mod error;
mod multiplex;
mod tracers;
mod types;

// ---- Public re-exports ----

pub use error::Error;
pub use multiplex::{multiplex_connection_tracers, multiplex_tracers};
pub use tracers::{ConnectionTracer, Tracer};
pub use types::{
    AckFrame, AckRange, ByteCount, CloseReason, ConnectionId, EncryptionLevel, ExtendedHeader,
    Frame, Header, KeyPhase, PacketBufferReason, PacketDropReason, PacketLossReason, PacketNumber,
    PacketType, Perspective, RttStats, StatelessResetToken, TimerType, TransportParameters,
    VersionNumber, MAX_CONNECTION_ID_LEN,
};

// Optional: expose the built-in logging tracer (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use tracers::LogTracer;
