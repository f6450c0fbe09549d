//! # Connection-level tracer trait.
//!
//! [`ConnectionTracer`] receives the full lifecycle/diagnostic event catalog
//! for exactly one connection: one method per event, every method a one-way
//! notification with no return value.
//!
//! ## Rules
//! - The transport serializes calls per connection; implementations need
//!   `Send` (the tracer moves with its connection) but not `Sync`, and take
//!   `&mut self`.
//! - Events arrive in emission order. No method is ever called after
//!   [`close`](ConnectionTracer::close).
//! - Arguments are borrowed summaries owned by the transport; copy out
//!   whatever must outlive the call.
//! - Do not block: several of these methods sit on the per-packet hot path.
//!
//! Every method has an empty default body, so an implementation only spells
//! out the events it cares about.

use std::net::SocketAddr;
use std::time::Instant;

use crate::types::{
    AckFrame, ByteCount, CloseReason, ConnectionId, EncryptionLevel, ExtendedHeader, Frame,
    Header, KeyPhase, PacketBufferReason, PacketDropReason, PacketLossReason, PacketNumber,
    PacketType, Perspective, RttStats, StatelessResetToken, TimerType, TransportParameters,
    VersionNumber,
};

/// Per-connection event sink.
///
/// Created by [`Tracer::trace_for`](crate::Tracer::trace_for) when tracing is
/// accepted for a connection, and retired by [`close`](Self::close) when the
/// connection terminates.
#[allow(unused_variables)]
pub trait ConnectionTracer: Send {
    /// The connection reached the point where both paths and version are known.
    fn started_connection(
        &mut self,
        local: SocketAddr,
        remote: SocketAddr,
        version: VersionNumber,
        src_connection_id: &ConnectionId,
        dest_connection_id: &ConnectionId,
    ) {
    }

    /// The connection was closed.
    fn closed_connection(&mut self, reason: &CloseReason) {}

    /// Transport parameters were sent to the peer.
    fn sent_transport_parameters(&mut self, params: &TransportParameters) {}

    /// Transport parameters were received from the peer.
    fn received_transport_parameters(&mut self, params: &TransportParameters) {}

    /// A packet was sent. `ack` is present when the packet carried an ACK frame;
    /// `frames` lists the remaining frames.
    fn sent_packet(
        &mut self,
        header: &ExtendedHeader,
        size: ByteCount,
        ack: Option<&AckFrame>,
        frames: &[Frame],
    ) {
    }

    /// A packet was received and processed.
    fn received_packet(&mut self, header: &ExtendedHeader, size: ByteCount, frames: &[Frame]) {}

    /// A version negotiation packet was received.
    fn received_version_negotiation_packet(&mut self, header: &Header) {}

    /// A retry packet was received.
    fn received_retry(&mut self, header: &Header) {}

    /// A stateless reset matching one of our tokens was received.
    fn received_stateless_reset(&mut self, token: &StatelessResetToken) {}

    /// A packet was parked until it can be processed.
    fn buffered_packet(&mut self, packet_type: PacketType, reason: PacketBufferReason) {}

    /// A received packet was dropped.
    fn dropped_packet(&mut self, packet_type: PacketType, size: ByteCount, reason: PacketDropReason) {
    }

    /// Path metrics changed (RTT sample, congestion window, in-flight counters).
    fn updated_metrics(
        &mut self,
        rtt: &RttStats,
        congestion_window: ByteCount,
        bytes_in_flight: ByteCount,
        packets_in_flight: usize,
    ) {
    }

    /// A sent packet was declared lost.
    fn lost_packet(
        &mut self,
        level: EncryptionLevel,
        packet_number: PacketNumber,
        reason: PacketLossReason,
    ) {
    }

    /// The probe-timeout counter changed.
    fn updated_pto_count(&mut self, value: u32) {}

    /// The handshake installed keys for a new encryption level.
    fn updated_key_from_handshake(&mut self, level: EncryptionLevel, role: Perspective) {}

    /// A 1-RTT key update completed.
    fn updated_key(&mut self, key_phase: KeyPhase, remote: bool) {}

    /// Keys for an encryption level were discarded.
    fn dropped_encryption_level(&mut self, level: EncryptionLevel) {}

    /// The loss-detection timer was (re)armed.
    fn set_loss_timer(&mut self, timer_type: TimerType, level: EncryptionLevel, deadline: Instant) {
    }

    /// The loss-detection timer fired.
    fn loss_timer_expired(&mut self, timer_type: TimerType, level: EncryptionLevel) {}

    /// The loss-detection timer was disarmed.
    fn loss_timer_canceled(&mut self) {}

    /// The connection is gone; no further events will be delivered.
    ///
    /// Flush and release resources here.
    fn close(&mut self) {}
}
