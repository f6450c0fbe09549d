//! # Cause enums for close, drop, loss, and buffering events.

use std::fmt;

use super::ids::StatelessResetToken;

/// Why a connection was closed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[non_exhaustive]
pub enum CloseReason {
    /// The handshake did not complete in time.
    HandshakeTimeout,
    /// The connection was idle longer than the negotiated idle timeout.
    IdleTimeout,
    /// Closed with an application error code.
    ApplicationError {
        /// Application-defined error code.
        error_code: u64,
        /// `true` if the peer initiated the close.
        remote: bool,
    },
    /// Closed with a transport error code.
    TransportError {
        /// Transport error code.
        error_code: u64,
        /// `true` if the peer initiated the close.
        remote: bool,
    },
    /// A stateless reset was received.
    StatelessReset {
        /// The token that matched.
        token: StatelessResetToken,
    },
}

impl fmt::Display for CloseReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CloseReason::HandshakeTimeout => write!(f, "handshake timeout"),
            CloseReason::IdleTimeout => write!(f, "idle timeout"),
            CloseReason::ApplicationError { error_code, remote } => {
                let side = if *remote { "remote" } else { "local" };
                write!(f, "{side} application error {error_code:#x}")
            }
            CloseReason::TransportError { error_code, remote } => {
                let side = if *remote { "remote" } else { "local" };
                write!(f, "{side} transport error {error_code:#x}")
            }
            CloseReason::StatelessReset { token } => {
                write!(f, "stateless reset (token {token})")
            }
        }
    }
}

/// Why a received packet was dropped instead of processed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[non_exhaustive]
pub enum PacketDropReason {
    /// Decryption keys for the packet's level are not yet available.
    KeyUnavailable,
    /// The destination connection ID is not known to this endpoint.
    UnknownConnectionId,
    /// The header could not be parsed.
    HeaderParseError,
    /// The payload failed to decrypt.
    PayloadDecryptError,
    /// The packet violated the protocol.
    ProtocolViolation,
    /// Dropped to bound resource usage before address validation.
    DosPrevention,
    /// The offered version is not supported.
    UnsupportedVersion,
    /// A packet of this type was not expected at this time.
    UnexpectedPacket,
    /// The packet carried an unexpected source connection ID.
    UnexpectedSourceConnectionId,
    /// The packet carried an unexpected version.
    UnexpectedVersion,
    /// The packet number was already processed.
    DuplicatePacket,
}

impl fmt::Display for PacketDropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PacketDropReason::KeyUnavailable => "key_unavailable",
            PacketDropReason::UnknownConnectionId => "unknown_connection_id",
            PacketDropReason::HeaderParseError => "header_parse_error",
            PacketDropReason::PayloadDecryptError => "payload_decrypt_error",
            PacketDropReason::ProtocolViolation => "protocol_violation",
            PacketDropReason::DosPrevention => "dos_prevention",
            PacketDropReason::UnsupportedVersion => "unsupported_version",
            PacketDropReason::UnexpectedPacket => "unexpected_packet",
            PacketDropReason::UnexpectedSourceConnectionId => "unexpected_source_connection_id",
            PacketDropReason::UnexpectedVersion => "unexpected_version",
            PacketDropReason::DuplicatePacket => "duplicate_packet",
        };
        write!(f, "{s}")
    }
}

/// Why a sent packet was declared lost.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PacketLossReason {
    /// Enough later packets were acknowledged (packet reordering threshold).
    ReorderingThreshold,
    /// The packet was sent too long before the newest acknowledged packet.
    TimeThreshold,
}

impl fmt::Display for PacketLossReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PacketLossReason::ReorderingThreshold => write!(f, "reordering_threshold"),
            PacketLossReason::TimeThreshold => write!(f, "time_threshold"),
        }
    }
}

/// Why a received packet is parked for later processing.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PacketBufferReason {
    /// Keys for the packet's encryption level are not yet available.
    WaitingForKeys,
    /// The connection the packet belongs to is not yet set up.
    WaitingForConnection,
}

impl fmt::Display for PacketBufferReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PacketBufferReason::WaitingForKeys => write!(f, "waiting_for_keys"),
            PacketBufferReason::WaitingForConnection => write!(f, "waiting_for_connection"),
        }
    }
}
