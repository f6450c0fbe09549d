//! # Frame summaries carried by packet events.
//!
//! [`Frame`] is a diagnostic view of a frame, not its wire form: payload
//! bytes are reduced to offsets and lengths so tracers can log and count
//! without holding on to stream data.

use std::time::Duration;

use super::ids::{ConnectionId, StatelessResetToken};
use super::packet::{ByteCount, PacketNumber};

/// A contiguous range of acknowledged packet numbers (inclusive).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct AckRange {
    /// Smallest acknowledged packet number in the range.
    pub smallest: PacketNumber,
    /// Largest acknowledged packet number in the range.
    pub largest: PacketNumber,
}

/// Summary of an ACK frame.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct AckFrame {
    /// Acknowledged ranges, largest first.
    pub ack_ranges: Vec<AckRange>,
    /// Reported ACK delay.
    pub delay_time: Duration,
}

impl AckFrame {
    /// Returns the largest acknowledged packet number, if any range is present.
    #[must_use]
    pub fn largest_acked(&self) -> Option<PacketNumber> {
        self.ack_ranges.iter().map(|r| r.largest).max()
    }
}

/// Diagnostic summary of a single frame.
#[derive(Clone, PartialEq, Eq, Debug)]
#[non_exhaustive]
pub enum Frame {
    /// PING frame.
    Ping,
    /// ACK frame.
    Ack(AckFrame),
    /// RESET_STREAM frame.
    ResetStream {
        /// Stream being reset.
        stream_id: u64,
        /// Application error code.
        error_code: u64,
        /// Final size of the stream.
        final_size: ByteCount,
    },
    /// STOP_SENDING frame.
    StopSending {
        /// Stream the peer should stop sending on.
        stream_id: u64,
        /// Application error code.
        error_code: u64,
    },
    /// CRYPTO frame (offset and length only).
    Crypto {
        /// Offset into the handshake byte stream.
        offset: ByteCount,
        /// Payload length.
        length: ByteCount,
    },
    /// NEW_TOKEN frame.
    NewToken {
        /// The issued token.
        token: Vec<u8>,
    },
    /// STREAM frame (offset and length only, payload elided).
    Stream {
        /// Stream carrying the data.
        stream_id: u64,
        /// Offset into the stream.
        offset: ByteCount,
        /// Payload length.
        length: ByteCount,
        /// FIN bit.
        fin: bool,
    },
    /// MAX_DATA frame.
    MaxData {
        /// New connection-level flow control limit.
        maximum: ByteCount,
    },
    /// MAX_STREAM_DATA frame.
    MaxStreamData {
        /// Stream the limit applies to.
        stream_id: u64,
        /// New stream-level flow control limit.
        maximum: ByteCount,
    },
    /// DATA_BLOCKED frame.
    DataBlocked {
        /// Limit at which the sender is blocked.
        limit: ByteCount,
    },
    /// NEW_CONNECTION_ID frame.
    NewConnectionId {
        /// Sequence number of the issued ID.
        sequence_number: u64,
        /// IDs up to this sequence number should be retired.
        retire_prior_to: u64,
        /// The issued connection ID.
        connection_id: ConnectionId,
        /// Reset token tied to the issued ID.
        stateless_reset_token: StatelessResetToken,
    },
    /// RETIRE_CONNECTION_ID frame.
    RetireConnectionId {
        /// Sequence number of the retired ID.
        sequence_number: u64,
    },
    /// PATH_CHALLENGE frame.
    PathChallenge {
        /// Challenge payload.
        data: [u8; 8],
    },
    /// PATH_RESPONSE frame.
    PathResponse {
        /// Echoed challenge payload.
        data: [u8; 8],
    },
    /// CONNECTION_CLOSE frame.
    ConnectionClose {
        /// Transport or application error code.
        error_code: u64,
        /// `true` for an application close, `false` for a transport close.
        is_application_error: bool,
        /// Human-readable reason phrase.
        reason_phrase: String,
    },
    /// HANDSHAKE_DONE frame.
    HandshakeDone,
}
