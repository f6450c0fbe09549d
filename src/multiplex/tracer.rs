//! # Endpoint-level multiplexer.
//!
//! [`multiplex_tracers`] combines any number of endpoint [`Tracer`]s into at
//! most one. The resulting tracer asks **every** child about **every**
//! connection attempt (side effects matter, not just return values), then
//! collapses the acceptances with the shared 0/1/N rule.
//!
//! ## What it guarantees
//! - Every child observes every `trace_for` call, in construction order,
//!   regardless of what earlier children returned.
//! - All children declined → `trace_for` returns `None`, never an empty
//!   connection multiplexer.
//! - Exactly one child accepted → its connection tracer is returned
//!   unwrapped; subsequent events reach it with no fanout layer in between.
//!
//! ## What it does **not** guarantee
//! - Isolation of a panicking child: the panic propagates and children
//!   ordered after it do not observe that call.

use std::sync::Arc;

use crate::tracers::{ConnectionTracer, Tracer};
use crate::types::{ConnectionId, Perspective};

use super::{collapse, connection::multiplex_connection_tracers};

/// Combines endpoint tracers into at most one.
///
/// Applies the collapsing rule: an empty list yields `None` (tracing is
/// disabled for the endpoint), a single tracer is returned unchanged, and
/// two or more are wrapped in a multiplexer preserving list order.
///
/// ### Example
/// ```rust
/// use std::sync::Arc;
/// use quictrace::{multiplex_tracers, Tracer};
///
/// let tracers: Vec<Arc<dyn Tracer>> = Vec::new();
/// assert!(multiplex_tracers(tracers).is_none());
/// ```
#[must_use]
pub fn multiplex_tracers(tracers: Vec<Arc<dyn Tracer>>) -> Option<Arc<dyn Tracer>> {
    collapse(tracers, |tracers| {
        Arc::new(TracerMux { tracers }) as Arc<dyn Tracer>
    })
}

/// Fans `trace_for` out to an ordered, immutable set of endpoint tracers.
///
/// Only constructible through [`multiplex_tracers`], which guarantees at
/// least two children.
struct TracerMux {
    tracers: Vec<Arc<dyn Tracer>>,
}

impl Tracer for TracerMux {
    fn trace_for(
        &self,
        role: Perspective,
        odcid: &ConnectionId,
    ) -> Option<Box<dyn ConnectionTracer>> {
        // Every child gets asked, even after earlier children accepted;
        // filter_map visits all elements in order.
        let accepted: Vec<Box<dyn ConnectionTracer>> = self
            .tracers
            .iter()
            .filter_map(|t| t.trace_for(role, odcid))
            .collect();
        multiplex_connection_tracers(accepted)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use super::*;

    /// Endpoint tracer that counts calls and optionally produces a
    /// tagging connection tracer.
    struct CountingTracer {
        calls: Arc<AtomicUsize>,
        seen: Arc<Mutex<Vec<(Perspective, ConnectionId)>>>,
        /// Tag for produced connection tracers; `None` declines every call.
        accept_tag: Option<&'static str>,
        sink: Arc<Mutex<Vec<&'static str>>>,
    }

    impl CountingTracer {
        fn new(accept_tag: Option<&'static str>, sink: Arc<Mutex<Vec<&'static str>>>) -> Self {
            Self {
                calls: Arc::new(AtomicUsize::new(0)),
                seen: Arc::new(Mutex::new(Vec::new())),
                accept_tag,
                sink,
            }
        }
    }

    impl Tracer for CountingTracer {
        fn trace_for(
            &self,
            role: Perspective,
            odcid: &ConnectionId,
        ) -> Option<Box<dyn ConnectionTracer>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen.lock().unwrap().push((role, *odcid));
            self.accept_tag.map(|tag| {
                Box::new(TaggingConnTracer {
                    tag,
                    sink: Arc::clone(&self.sink),
                }) as Box<dyn ConnectionTracer>
            })
        }
    }

    /// Connection tracer that records its tag into a shared sink on every
    /// `loss_timer_canceled`.
    struct TaggingConnTracer {
        tag: &'static str,
        sink: Arc<Mutex<Vec<&'static str>>>,
    }

    impl ConnectionTracer for TaggingConnTracer {
        fn loss_timer_canceled(&mut self) {
            self.sink.lock().unwrap().push(self.tag);
        }
    }

    fn odcid() -> ConnectionId {
        ConnectionId::from([1, 2, 3])
    }

    #[test]
    fn test_zero_tracers_collapse_to_none() {
        assert!(multiplex_tracers(Vec::new()).is_none());
    }

    #[test]
    fn test_single_tracer_returned_unchanged() {
        let sink = Arc::new(Mutex::new(Vec::new()));
        let tr = Arc::new(CountingTracer::new(Some("only"), Arc::clone(&sink)));
        let muxed = multiplex_tracers(vec![Arc::clone(&tr) as Arc<dyn Tracer>])
            .expect("one tracer collapses to itself");
        let mut conn = muxed
            .trace_for(Perspective::Client, &odcid())
            .expect("tracer accepts");
        conn.loss_timer_canceled();
        assert_eq!(tr.calls.load(Ordering::SeqCst), 1);
        assert_eq!(sink.lock().unwrap().as_slice(), &["only"]);
    }

    #[test]
    fn test_trace_for_reaches_every_child_once() {
        let sink = Arc::new(Mutex::new(Vec::new()));
        let tr1 = Arc::new(CountingTracer::new(None, Arc::clone(&sink)));
        let tr2 = Arc::new(CountingTracer::new(None, Arc::clone(&sink)));
        let mux = multiplex_tracers(vec![
            Arc::clone(&tr1) as Arc<dyn Tracer>,
            Arc::clone(&tr2) as Arc<dyn Tracer>,
        ])
        .unwrap();

        let _ = mux.trace_for(Perspective::Server, &odcid());

        assert_eq!(tr1.calls.load(Ordering::SeqCst), 1);
        assert_eq!(tr2.calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            tr1.seen.lock().unwrap().as_slice(),
            &[(Perspective::Server, odcid())]
        );
        assert_eq!(
            tr2.seen.lock().unwrap().as_slice(),
            &[(Perspective::Server, odcid())]
        );
    }

    #[test]
    fn test_all_children_decline_yields_none() {
        let sink = Arc::new(Mutex::new(Vec::new()));
        let tr1 = Arc::new(CountingTracer::new(None, Arc::clone(&sink)));
        let tr2 = Arc::new(CountingTracer::new(None, Arc::clone(&sink)));
        let mux = multiplex_tracers(vec![
            Arc::clone(&tr1) as Arc<dyn Tracer>,
            Arc::clone(&tr2) as Arc<dyn Tracer>,
        ])
        .unwrap();

        // Explicit absence, not an empty-but-present multiplexer.
        assert!(mux.trace_for(Perspective::Client, &odcid()).is_none());
        // Declining children were still asked.
        assert_eq!(tr1.calls.load(Ordering::SeqCst), 1);
        assert_eq!(tr2.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_single_acceptance_routes_events_to_that_child_only() {
        let sink = Arc::new(Mutex::new(Vec::new()));
        let tr1 = Arc::new(CountingTracer::new(Some("a"), Arc::clone(&sink)));
        let tr2 = Arc::new(CountingTracer::new(None, Arc::clone(&sink)));
        let mux = multiplex_tracers(vec![
            Arc::clone(&tr1) as Arc<dyn Tracer>,
            Arc::clone(&tr2) as Arc<dyn Tracer>,
        ])
        .unwrap();

        let mut conn = mux
            .trace_for(Perspective::Client, &odcid())
            .expect("one child accepted");
        conn.loss_timer_canceled();
        conn.loss_timer_canceled();

        assert_eq!(sink.lock().unwrap().as_slice(), &["a", "a"]);
    }

    #[test]
    fn test_multiple_acceptances_fan_out_in_order() {
        let sink = Arc::new(Mutex::new(Vec::new()));
        let tr1 = Arc::new(CountingTracer::new(Some("a"), Arc::clone(&sink)));
        let tr2 = Arc::new(CountingTracer::new(None, Arc::clone(&sink)));
        let tr3 = Arc::new(CountingTracer::new(Some("c"), Arc::clone(&sink)));
        let mux = multiplex_tracers(vec![
            Arc::clone(&tr1) as Arc<dyn Tracer>,
            Arc::clone(&tr2) as Arc<dyn Tracer>,
            Arc::clone(&tr3) as Arc<dyn Tracer>,
        ])
        .unwrap();

        let mut conn = mux
            .trace_for(Perspective::Server, &odcid())
            .expect("two children accepted");
        conn.loss_timer_canceled();

        // Declining child is skipped in the fanout; the rest keep their
        // relative order.
        assert_eq!(sink.lock().unwrap().as_slice(), &["a", "c"]);
    }
}
