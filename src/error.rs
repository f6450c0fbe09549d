//! Error types used when constructing event payloads.
//!
//! The fanout layer itself is infallible: every tracer method is a one-way
//! notification with no return value, and the multiplexers never produce
//! errors of their own. The only fallible surface is payload construction
//! from untrusted input (e.g. building a [`ConnectionId`](crate::ConnectionId)
//! from a slice of unknown length).

use thiserror::Error;

use crate::types::MAX_CONNECTION_ID_LEN;

/// # Errors produced while constructing event payloads.
#[non_exhaustive]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A connection ID longer than the transport's maximum was supplied.
    #[error("connection ID of {len} bytes exceeds the maximum of {MAX_CONNECTION_ID_LEN}")]
    InvalidConnectionIdLength {
        /// The offending length.
        len: usize,
    },
}

impl Error {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use quictrace::ConnectionId;
    ///
    /// let err = ConnectionId::try_from(&[0u8; 21][..]).unwrap_err();
    /// assert_eq!(err.as_label(), "invalid_connection_id_length");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            Error::InvalidConnectionIdLength { .. } => "invalid_connection_id_length",
        }
    }
}
