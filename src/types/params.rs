//! # Negotiated transport parameters.
//!
//! A diagnostic snapshot of the parameters an endpoint sent or received
//! during the handshake. Negotiation itself happens in the transport; this
//! struct only rides along on the `*_transport_parameters` events.

use std::time::Duration;

use super::ids::{ConnectionId, StatelessResetToken};
use super::packet::ByteCount;

/// Transport parameters, as sent or received in the handshake.
///
/// Defaults follow the protocol defaults for absent parameters.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TransportParameters {
    /// Initial connection-level flow control limit.
    pub initial_max_data: ByteCount,
    /// Initial limit for locally-initiated bidirectional streams.
    pub initial_max_stream_data_bidi_local: ByteCount,
    /// Initial limit for peer-initiated bidirectional streams.
    pub initial_max_stream_data_bidi_remote: ByteCount,
    /// Initial limit for unidirectional streams.
    pub initial_max_stream_data_uni: ByteCount,
    /// Maximum number of bidirectional streams the peer may open.
    pub max_bidi_streams: u64,
    /// Maximum number of unidirectional streams the peer may open.
    pub max_uni_streams: u64,
    /// Idle timeout; zero disables.
    pub max_idle_timeout: Duration,
    /// Largest UDP payload the endpoint will accept.
    pub max_udp_payload_size: ByteCount,
    /// Exponent used to decode ACK delays.
    pub ack_delay_exponent: u8,
    /// Maximum time the endpoint may delay ACKs.
    pub max_ack_delay: Duration,
    /// Whether the peer may migrate to a new path.
    pub disable_active_migration: bool,
    /// Number of connection IDs the peer is willing to store.
    pub active_connection_id_limit: u64,
    /// Source connection ID from the first Initial, if echoed.
    pub initial_source_connection_id: Option<ConnectionId>,
    /// Reset token for the handshake connection ID (server only).
    pub stateless_reset_token: Option<StatelessResetToken>,
}

impl Default for TransportParameters {
    fn default() -> Self {
        Self {
            initial_max_data: 0,
            initial_max_stream_data_bidi_local: 0,
            initial_max_stream_data_bidi_remote: 0,
            initial_max_stream_data_uni: 0,
            max_bidi_streams: 0,
            max_uni_streams: 0,
            max_idle_timeout: Duration::ZERO,
            max_udp_payload_size: 65527,
            ack_delay_exponent: 3,
            max_ack_delay: Duration::from_millis(25),
            disable_active_migration: false,
            active_connection_id_limit: 2,
            initial_source_connection_id: None,
            stateless_reset_token: None,
        }
    }
}
