//! # Demo: two_tracers
//!
//! Demonstrates fanning events out to two tracers at once: the built-in
//! [`LogTracer`] and a custom loss watcher. Both observe every event of the
//! same connection, in attachment order.
//!
//! ## Flow
//! ```text
//! multiplex_tracers([LogTracer, LossWatcher]) ─► Tracer (one object)
//!     └─► trace_for(Client, odcid) ─► ConnectionTracer (one object)
//!           └─► lost_packet(...) ─► LogTracer, then LossWatcher
//! ```
//!
//! ## Run
//! Requires the `logging` feature to export [`LogTracer`].
//! ```bash
//! cargo run --example two_tracers --features logging
//! ```

use std::sync::Arc;

use quictrace::{
    multiplex_tracers, ConnectionId, ConnectionTracer, EncryptionLevel, LogTracer,
    PacketLossReason, PacketNumber, Perspective, Tracer,
};

/// Prints a warning line per lost packet; ignores everything else.
struct LossWatcher;

impl Tracer for LossWatcher {
    fn trace_for(
        &self,
        _role: Perspective,
        _odcid: &ConnectionId,
    ) -> Option<Box<dyn ConnectionTracer>> {
        Some(Box::new(LossWatcherConn { lost: 0 }))
    }
}

struct LossWatcherConn {
    lost: u32,
}

impl ConnectionTracer for LossWatcherConn {
    fn lost_packet(
        &mut self,
        level: EncryptionLevel,
        packet_number: PacketNumber,
        reason: PacketLossReason,
    ) {
        self.lost += 1;
        println!("[loss-watcher] lost pn={packet_number} level={level} reason={reason}");
    }

    fn close(&mut self) {
        println!("[loss-watcher] total lost: {}", self.lost);
    }
}

fn main() {
    let tracer = multiplex_tracers(vec![
        Arc::new(LogTracer) as Arc<dyn Tracer>,
        Arc::new(LossWatcher) as Arc<dyn Tracer>,
    ])
    .expect("two tracers configured");

    let odcid = ConnectionId::from([1, 2, 3]);
    let mut conn = tracer
        .trace_for(Perspective::Client, &odcid)
        .expect("both tracers accept");

    // Each event reaches the LogTracer first, then the LossWatcher.
    // (LogTracer output only shows up if a tracing subscriber is installed.)
    conn.updated_pto_count(1);
    conn.lost_packet(EncryptionLevel::Initial, 7, PacketLossReason::TimeThreshold);
    conn.lost_packet(
        EncryptionLevel::OneRtt,
        42,
        PacketLossReason::ReorderingThreshold,
    );
    conn.loss_timer_canceled();
    conn.close();
}
