//! # Demo: packet_counter
//!
//! Demonstrates how to build and attach a custom tracer.
//!
//! Shows how to:
//! - Implement the [`Tracer`] and [`ConnectionTracer`] traits.
//! - Decline tracing for connections you don't care about (`None`).
//! - Combine tracers with [`multiplex_tracers`] and drive events the way a
//!   transport would.
//!
//! ## Flow
//! ```text
//! multiplex_tracers([PacketCounter]) ─► Tracer
//!     └─► trace_for(Server, odcid) ─► ConnectionTracer
//!           ├─► sent_packet / received_packet / dropped_packet ...
//!           └─► close() ─► print totals
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example packet_counter
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use quictrace::{
    multiplex_tracers, AckFrame, ByteCount, ConnectionId, ConnectionTracer, ExtendedHeader, Frame,
    PacketDropReason, PacketType, Perspective, Tracer, VersionNumber,
};

/// Shared counters, aggregated across all traced connections.
#[derive(Default)]
struct Totals {
    sent: AtomicU64,
    received: AtomicU64,
    dropped: AtomicU64,
}

/// Counts packets on server-side connections only.
/// In real life, you could feed a metrics registry or a qlog writer.
struct PacketCounter {
    totals: Arc<Totals>,
}

impl Tracer for PacketCounter {
    fn trace_for(
        &self,
        role: Perspective,
        odcid: &ConnectionId,
    ) -> Option<Box<dyn ConnectionTracer>> {
        match role {
            // Client connections go untraced: returning None here means the
            // transport skips all per-event dispatch for them.
            Perspective::Client => None,
            Perspective::Server => {
                println!("[counter] tracing server connection odcid={odcid}");
                Some(Box::new(PacketCounterConn {
                    totals: Arc::clone(&self.totals),
                }))
            }
        }
    }
}

struct PacketCounterConn {
    totals: Arc<Totals>,
}

impl ConnectionTracer for PacketCounterConn {
    fn sent_packet(
        &mut self,
        _header: &ExtendedHeader,
        _size: ByteCount,
        _ack: Option<&AckFrame>,
        _frames: &[Frame],
    ) {
        self.totals.sent.fetch_add(1, Ordering::Relaxed);
    }

    fn received_packet(&mut self, _header: &ExtendedHeader, _size: ByteCount, _frames: &[Frame]) {
        self.totals.received.fetch_add(1, Ordering::Relaxed);
    }

    fn dropped_packet(
        &mut self,
        _packet_type: PacketType,
        _size: ByteCount,
        _reason: PacketDropReason,
    ) {
        self.totals.dropped.fetch_add(1, Ordering::Relaxed);
    }

    fn close(&mut self) {
        println!(
            "[counter] connection done: sent={} received={} dropped={}",
            self.totals.sent.load(Ordering::Relaxed),
            self.totals.received.load(Ordering::Relaxed),
            self.totals.dropped.load(Ordering::Relaxed),
        );
    }
}

fn main() {
    let totals = Arc::new(Totals::default());
    let tracer = multiplex_tracers(vec![Arc::new(PacketCounter {
        totals: Arc::clone(&totals),
    }) as Arc<dyn Tracer>])
    .expect("one tracer configured");

    // A client connection: the counter declines, so the transport would
    // never dispatch events for it.
    let odcid = ConnectionId::from([9, 9, 9]);
    assert!(tracer.trace_for(Perspective::Client, &odcid).is_none());

    // A server connection: drive a few events the way the transport would.
    let odcid = ConnectionId::from([1, 2, 3]);
    let mut conn = tracer
        .trace_for(Perspective::Server, &odcid)
        .expect("counter accepts server connections");

    let header = ExtendedHeader {
        header: quictrace::Header {
            version: Some(VersionNumber::VERSION_1),
            dest_connection_id: odcid,
            ..Default::default()
        },
        packet_number: 0,
        key_phase: None,
    };
    conn.received_packet(&header, 1200, &[Frame::Ping]);
    conn.sent_packet(&header, 1337, None, &[Frame::HandshakeDone]);
    conn.dropped_packet(PacketType::OneRtt, 40, PacketDropReason::DuplicatePacket);
    conn.close();
}
