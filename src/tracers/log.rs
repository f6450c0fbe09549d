//! # Simple logging tracer for debugging and demos.
//!
//! [`LogTracer`] emits one structured [`tracing`] event per catalog event,
//! under the `quictrace` target at DEBUG level (TRACE for the per-packet
//! events, which are high-volume). This is primarily useful for
//! development, debugging, and examples.
//!
//! ## Output shape
//! ```text
//! DEBUG quictrace: connection started odcid=010203 role=client local=1.2.3.4:443
//! TRACE quictrace: packet sent odcid=010203 pn=42 size=1337 frames=2
//! DEBUG quictrace: connection closed odcid=010203 reason=idle timeout
//! ```
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use quictrace::{multiplex_tracers, LogTracer, Tracer};
//!
//! let tracer = multiplex_tracers(vec![Arc::new(LogTracer) as Arc<dyn Tracer>]);
//! assert!(tracer.is_some());
//! ```

use std::net::SocketAddr;
use std::time::Instant;

use tracing::{debug, trace};

use crate::tracers::{ConnectionTracer, Tracer};
use crate::types::{
    AckFrame, ByteCount, CloseReason, ConnectionId, EncryptionLevel, ExtendedHeader, Frame,
    Header, KeyPhase, PacketBufferReason, PacketDropReason, PacketLossReason, PacketNumber,
    PacketType, Perspective, RttStats, StatelessResetToken, TimerType, TransportParameters,
    VersionNumber,
};

/// Endpoint tracer that logs every event of every connection.
///
/// Enabled via the `logging` feature. Accepts every connection and stamps
/// the role and original destination connection ID on each log line.
///
/// Not intended for production use - implement a custom
/// [`ConnectionTracer`] for qlog output or metrics collection.
#[derive(Default)]
pub struct LogTracer;

impl Tracer for LogTracer {
    fn trace_for(
        &self,
        role: Perspective,
        odcid: &ConnectionId,
    ) -> Option<Box<dyn ConnectionTracer>> {
        debug!(target: "quictrace", %role, %odcid, "tracing connection");
        Some(Box::new(LogConnectionTracer {
            role,
            odcid: *odcid,
        }))
    }
}

/// Per-connection half of [`LogTracer`].
struct LogConnectionTracer {
    role: Perspective,
    odcid: ConnectionId,
}

impl ConnectionTracer for LogConnectionTracer {
    fn started_connection(
        &mut self,
        local: SocketAddr,
        remote: SocketAddr,
        version: VersionNumber,
        src_connection_id: &ConnectionId,
        dest_connection_id: &ConnectionId,
    ) {
        debug!(
            target: "quictrace",
            odcid = %self.odcid,
            role = %self.role,
            %local,
            %remote,
            %version,
            scid = %src_connection_id,
            dcid = %dest_connection_id,
            "connection started"
        );
    }

    fn closed_connection(&mut self, reason: &CloseReason) {
        debug!(target: "quictrace", odcid = %self.odcid, %reason, "connection closed");
    }

    fn sent_transport_parameters(&mut self, params: &TransportParameters) {
        debug!(target: "quictrace", odcid = %self.odcid, ?params, "transport parameters sent");
    }

    fn received_transport_parameters(&mut self, params: &TransportParameters) {
        debug!(target: "quictrace", odcid = %self.odcid, ?params, "transport parameters received");
    }

    fn sent_packet(
        &mut self,
        header: &ExtendedHeader,
        size: ByteCount,
        ack: Option<&AckFrame>,
        frames: &[Frame],
    ) {
        trace!(
            target: "quictrace",
            odcid = %self.odcid,
            pn = header.packet_number,
            size,
            acks = ack.map(|a| a.ack_ranges.len()).unwrap_or(0),
            frames = frames.len(),
            "packet sent"
        );
    }

    fn received_packet(&mut self, header: &ExtendedHeader, size: ByteCount, frames: &[Frame]) {
        trace!(
            target: "quictrace",
            odcid = %self.odcid,
            pn = header.packet_number,
            size,
            frames = frames.len(),
            "packet received"
        );
    }

    fn received_version_negotiation_packet(&mut self, header: &Header) {
        debug!(
            target: "quictrace",
            odcid = %self.odcid,
            dcid = %header.dest_connection_id,
            "version negotiation packet received"
        );
    }

    fn received_retry(&mut self, header: &Header) {
        debug!(
            target: "quictrace",
            odcid = %self.odcid,
            dcid = %header.dest_connection_id,
            "retry packet received"
        );
    }

    fn received_stateless_reset(&mut self, token: &StatelessResetToken) {
        debug!(target: "quictrace", odcid = %self.odcid, %token, "stateless reset received");
    }

    fn buffered_packet(&mut self, packet_type: PacketType, reason: PacketBufferReason) {
        trace!(target: "quictrace", odcid = %self.odcid, %packet_type, %reason, "packet buffered");
    }

    fn dropped_packet(
        &mut self,
        packet_type: PacketType,
        size: ByteCount,
        reason: PacketDropReason,
    ) {
        debug!(
            target: "quictrace",
            odcid = %self.odcid,
            %packet_type,
            size,
            %reason,
            "packet dropped"
        );
    }

    fn updated_metrics(
        &mut self,
        rtt: &RttStats,
        congestion_window: ByteCount,
        bytes_in_flight: ByteCount,
        packets_in_flight: usize,
    ) {
        trace!(
            target: "quictrace",
            odcid = %self.odcid,
            smoothed_rtt_us = rtt.smoothed().as_micros() as u64,
            cwnd = congestion_window,
            bytes_in_flight,
            packets_in_flight,
            "metrics updated"
        );
    }

    fn lost_packet(
        &mut self,
        level: EncryptionLevel,
        packet_number: PacketNumber,
        reason: PacketLossReason,
    ) {
        debug!(
            target: "quictrace",
            odcid = %self.odcid,
            %level,
            pn = packet_number,
            %reason,
            "packet lost"
        );
    }

    fn updated_pto_count(&mut self, value: u32) {
        debug!(target: "quictrace", odcid = %self.odcid, value, "PTO count updated");
    }

    fn updated_key_from_handshake(&mut self, level: EncryptionLevel, role: Perspective) {
        debug!(target: "quictrace", odcid = %self.odcid, %level, %role, "handshake key installed");
    }

    fn updated_key(&mut self, key_phase: KeyPhase, remote: bool) {
        debug!(target: "quictrace", odcid = %self.odcid, key_phase, remote, "key updated");
    }

    fn dropped_encryption_level(&mut self, level: EncryptionLevel) {
        debug!(target: "quictrace", odcid = %self.odcid, %level, "encryption level dropped");
    }

    fn set_loss_timer(&mut self, timer_type: TimerType, level: EncryptionLevel, deadline: Instant) {
        trace!(
            target: "quictrace",
            odcid = %self.odcid,
            timer = %timer_type,
            %level,
            timeout_us = deadline.saturating_duration_since(Instant::now()).as_micros() as u64,
            "loss timer set"
        );
    }

    fn loss_timer_expired(&mut self, timer_type: TimerType, level: EncryptionLevel) {
        debug!(target: "quictrace", odcid = %self.odcid, timer = %timer_type, %level, "loss timer expired");
    }

    fn loss_timer_canceled(&mut self) {
        trace!(target: "quictrace", odcid = %self.odcid, "loss timer canceled");
    }

    fn close(&mut self) {
        debug!(target: "quictrace", odcid = %self.odcid, "tracer closed");
    }
}
