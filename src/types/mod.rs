//! # Pass-through event payload types.
//!
//! Everything a [`ConnectionTracer`](crate::ConnectionTracer) method receives
//! is defined here: identifiers, header and frame summaries, cause enums,
//! transport parameters, and the RTT snapshot. These are inert carriers -
//! this crate never encodes, decodes, or mutates them, it forwards them.

mod frame;
mod ids;
mod packet;
mod params;
mod reason;
mod rtt;

pub use frame::{AckFrame, AckRange, Frame};
pub use ids::{ConnectionId, StatelessResetToken, MAX_CONNECTION_ID_LEN};
pub use packet::{
    ByteCount, EncryptionLevel, ExtendedHeader, Header, KeyPhase, PacketNumber, PacketType,
    Perspective, TimerType, VersionNumber,
};
pub use params::TransportParameters;
pub use reason::{CloseReason, PacketBufferReason, PacketDropReason, PacketLossReason};
pub use rtt::RttStats;
