//! # Packet-level payload types.
//!
//! Numeric aliases, the small classification enums, and the header views
//! that packet events carry. Everything here is a read-only summary handed
//! to tracers; the wire encode/decode lives in the transport, not here.

use std::fmt;

use super::ids::ConnectionId;

/// A quantity of bytes (packet sizes, window sizes, bytes in flight).
pub type ByteCount = u64;

/// A packet number.
pub type PacketNumber = u64;

/// A 1-RTT key phase (increments on every key update).
pub type KeyPhase = u64;

/// A transport version number.
///
/// ### Example
/// ```
/// use quictrace::VersionNumber;
///
/// assert_eq!(VersionNumber::VERSION_1.to_string(), "v1");
/// assert_eq!(VersionNumber(0x1234).to_string(), "0x1234");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct VersionNumber(pub u32);

impl VersionNumber {
    /// QUIC version 1 (RFC 9000).
    pub const VERSION_1: VersionNumber = VersionNumber(0x1);
    /// QUIC version 2 (RFC 9369).
    pub const VERSION_2: VersionNumber = VersionNumber(0x6b33_43cf);
}

impl fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            VersionNumber::VERSION_1 => write!(f, "v1"),
            VersionNumber::VERSION_2 => write!(f, "v2"),
            VersionNumber(v) => write!(f, "{v:#x}"),
        }
    }
}

/// The role an endpoint plays for a connection.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Perspective {
    /// The endpoint initiated the connection.
    Client,
    /// The endpoint accepted the connection.
    Server,
}

impl fmt::Display for Perspective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Perspective::Client => write!(f, "client"),
            Perspective::Server => write!(f, "server"),
        }
    }
}

/// Classification of a packet, as reported in buffering/drop events.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PacketType {
    /// Initial packet.
    Initial,
    /// Handshake packet.
    Handshake,
    /// Retry packet.
    Retry,
    /// 0-RTT packet.
    ZeroRtt,
    /// Version negotiation packet.
    VersionNegotiation,
    /// Stateless reset packet.
    StatelessReset,
    /// 1-RTT (short header) packet.
    OneRtt,
    /// The packet type could not be determined (e.g. header parse failed).
    NotDetermined,
}

impl fmt::Display for PacketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PacketType::Initial => "initial",
            PacketType::Handshake => "handshake",
            PacketType::Retry => "retry",
            PacketType::ZeroRtt => "0-RTT",
            PacketType::VersionNegotiation => "version_negotiation",
            PacketType::StatelessReset => "stateless_reset",
            PacketType::OneRtt => "1-RTT",
            PacketType::NotDetermined => "not_determined",
        };
        write!(f, "{s}")
    }
}

/// Encryption level of a packet-number space.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum EncryptionLevel {
    /// Initial keys.
    Initial,
    /// Handshake keys.
    Handshake,
    /// 0-RTT keys.
    ZeroRtt,
    /// 1-RTT keys.
    OneRtt,
}

impl fmt::Display for EncryptionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EncryptionLevel::Initial => "initial",
            EncryptionLevel::Handshake => "handshake",
            EncryptionLevel::ZeroRtt => "0-RTT",
            EncryptionLevel::OneRtt => "1-RTT",
        };
        write!(f, "{s}")
    }
}

/// The loss-detection timer that was set, expired, or canceled.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TimerType {
    /// ACK alarm (delayed-ACK timer).
    Ack,
    /// Probe timeout.
    Pto,
}

impl fmt::Display for TimerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerType::Ack => write!(f, "ack"),
            TimerType::Pto => write!(f, "pto"),
        }
    }
}

/// The invariant part of a long packet header.
///
/// Used on its own for packets without a recoverable packet number
/// (version negotiation, retry).
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Header {
    /// Negotiated or offered version. `None` for short-header packets.
    pub version: Option<VersionNumber>,
    /// Source connection ID, if present.
    pub src_connection_id: Option<ConnectionId>,
    /// Destination connection ID.
    pub dest_connection_id: ConnectionId,
    /// Retry / Initial token, if present.
    pub token: Option<Vec<u8>>,
}

/// A long or short header with its packet-number fields decoded.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct ExtendedHeader {
    /// The invariant header fields.
    pub header: Header,
    /// Decoded packet number.
    pub packet_number: PacketNumber,
    /// Key phase bit, for 1-RTT packets.
    pub key_phase: Option<KeyPhase>,
}
