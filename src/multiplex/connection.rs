//! # Connection-level multiplexer.
//!
//! [`multiplex_connection_tracers`] combines per-connection tracers into at
//! most one. The multiplexer forwards every catalog event verbatim to every
//! child in construction order and does nothing else: no copying beyond what
//! forwarding requires, no reordering, no filtering, no aggregation.
//!
//! ## What it guarantees
//! - Per event occurrence: exactly one call per child, identical arguments,
//!   construction order.
//! - No queueing or deferral; the forwarding loop runs inline in the
//!   caller's context and returns when the last child returns.
//!
//! ## What it does **not** guarantee
//! - Total delivery when a child panics: children ordered after the
//!   panicking one do not observe that occurrence. A faulting tracer is a
//!   programming defect in a collaborator, not a condition handled here.

use std::net::SocketAddr;
use std::time::Instant;

use crate::tracers::ConnectionTracer;
use crate::types::{
    AckFrame, ByteCount, CloseReason, ConnectionId, EncryptionLevel, ExtendedHeader, Frame,
    Header, KeyPhase, PacketBufferReason, PacketDropReason, PacketLossReason, PacketNumber,
    PacketType, Perspective, RttStats, StatelessResetToken, TimerType, TransportParameters,
    VersionNumber,
};

use super::collapse;

/// Combines per-connection tracers into at most one.
///
/// Applies the collapsing rule: an empty list yields `None` (the connection
/// goes untraced), a single tracer is returned unchanged, and two or more
/// are wrapped in a multiplexer preserving list order.
///
/// The endpoint multiplexer feeds its collected acceptances through this
/// function; it is public so a transport wiring tracers up by hand can use
/// the same collapsing.
#[must_use]
pub fn multiplex_connection_tracers(
    tracers: Vec<Box<dyn ConnectionTracer>>,
) -> Option<Box<dyn ConnectionTracer>> {
    collapse(tracers, |tracers| {
        Box::new(ConnectionTracerMux { tracers }) as Box<dyn ConnectionTracer>
    })
}

/// Fans every connection event out to an ordered, immutable, non-empty set
/// of children.
///
/// Only constructible through [`multiplex_connection_tracers`], which
/// guarantees at least two children.
struct ConnectionTracerMux {
    tracers: Vec<Box<dyn ConnectionTracer>>,
}

impl ConnectionTracer for ConnectionTracerMux {
    fn started_connection(
        &mut self,
        local: SocketAddr,
        remote: SocketAddr,
        version: VersionNumber,
        src_connection_id: &ConnectionId,
        dest_connection_id: &ConnectionId,
    ) {
        for t in &mut self.tracers {
            t.started_connection(local, remote, version, src_connection_id, dest_connection_id);
        }
    }

    fn closed_connection(&mut self, reason: &CloseReason) {
        for t in &mut self.tracers {
            t.closed_connection(reason);
        }
    }

    fn sent_transport_parameters(&mut self, params: &TransportParameters) {
        for t in &mut self.tracers {
            t.sent_transport_parameters(params);
        }
    }

    fn received_transport_parameters(&mut self, params: &TransportParameters) {
        for t in &mut self.tracers {
            t.received_transport_parameters(params);
        }
    }

    fn sent_packet(
        &mut self,
        header: &ExtendedHeader,
        size: ByteCount,
        ack: Option<&AckFrame>,
        frames: &[Frame],
    ) {
        for t in &mut self.tracers {
            t.sent_packet(header, size, ack, frames);
        }
    }

    fn received_packet(&mut self, header: &ExtendedHeader, size: ByteCount, frames: &[Frame]) {
        for t in &mut self.tracers {
            t.received_packet(header, size, frames);
        }
    }

    fn received_version_negotiation_packet(&mut self, header: &Header) {
        for t in &mut self.tracers {
            t.received_version_negotiation_packet(header);
        }
    }

    fn received_retry(&mut self, header: &Header) {
        for t in &mut self.tracers {
            t.received_retry(header);
        }
    }

    fn received_stateless_reset(&mut self, token: &StatelessResetToken) {
        for t in &mut self.tracers {
            t.received_stateless_reset(token);
        }
    }

    fn buffered_packet(&mut self, packet_type: PacketType, reason: PacketBufferReason) {
        for t in &mut self.tracers {
            t.buffered_packet(packet_type, reason);
        }
    }

    fn dropped_packet(&mut self, packet_type: PacketType, size: ByteCount, reason: PacketDropReason) {
        for t in &mut self.tracers {
            t.dropped_packet(packet_type, size, reason);
        }
    }

    fn updated_metrics(
        &mut self,
        rtt: &RttStats,
        congestion_window: ByteCount,
        bytes_in_flight: ByteCount,
        packets_in_flight: usize,
    ) {
        for t in &mut self.tracers {
            t.updated_metrics(rtt, congestion_window, bytes_in_flight, packets_in_flight);
        }
    }

    fn lost_packet(
        &mut self,
        level: EncryptionLevel,
        packet_number: PacketNumber,
        reason: PacketLossReason,
    ) {
        for t in &mut self.tracers {
            t.lost_packet(level, packet_number, reason);
        }
    }

    fn updated_pto_count(&mut self, value: u32) {
        for t in &mut self.tracers {
            t.updated_pto_count(value);
        }
    }

    fn updated_key_from_handshake(&mut self, level: EncryptionLevel, role: Perspective) {
        for t in &mut self.tracers {
            t.updated_key_from_handshake(level, role);
        }
    }

    fn updated_key(&mut self, key_phase: KeyPhase, remote: bool) {
        for t in &mut self.tracers {
            t.updated_key(key_phase, remote);
        }
    }

    fn dropped_encryption_level(&mut self, level: EncryptionLevel) {
        for t in &mut self.tracers {
            t.dropped_encryption_level(level);
        }
    }

    fn set_loss_timer(&mut self, timer_type: TimerType, level: EncryptionLevel, deadline: Instant) {
        for t in &mut self.tracers {
            t.set_loss_timer(timer_type, level, deadline);
        }
    }

    fn loss_timer_expired(&mut self, timer_type: TimerType, level: EncryptionLevel) {
        for t in &mut self.tracers {
            t.loss_timer_expired(timer_type, level);
        }
    }

    fn loss_timer_canceled(&mut self) {
        for t in &mut self.tracers {
            t.loss_timer_canceled();
        }
    }

    fn close(&mut self) {
        for t in &mut self.tracers {
            t.close();
        }
    }
}
