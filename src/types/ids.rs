//! # Connection identifiers and stateless-reset tokens.
//!
//! Both types are opaque byte carriers: this crate never parses, mints, or
//! validates them beyond length, it only hands them to tracers.
//!
//! ## Rules
//! - A [`ConnectionId`] holds 0..=20 bytes ([`MAX_CONNECTION_ID_LEN`]);
//!   zero-length IDs are valid (the peer opted out of connection IDs).
//! - A [`StatelessResetToken`] is always exactly 16 bytes.

use std::fmt;

use crate::error::Error;

/// Maximum connection ID length permitted by the transport (QUIC v1: 20 bytes).
pub const MAX_CONNECTION_ID_LEN: usize = 20;

/// An opaque connection ID, 0..=20 bytes.
///
/// Stored inline; cheap to copy and compare. Construct from a fixed-size
/// array via `From`, or from a slice via `TryFrom` (fails on over-long input).
///
/// ### Example
/// ```
/// use quictrace::ConnectionId;
///
/// let cid = ConnectionId::from([1, 2, 3]);
/// assert_eq!(cid.len(), 3);
/// assert_eq!(cid.to_string(), "010203");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId {
    bytes: [u8; MAX_CONNECTION_ID_LEN],
    len: u8,
}

impl ConnectionId {
    /// Returns the ID bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// Returns the ID length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Returns `true` for a zero-length connection ID.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for ConnectionId {
    /// The zero-length connection ID.
    fn default() -> Self {
        ConnectionId::from([0u8; 0])
    }
}

impl<const N: usize> From<[u8; N]> for ConnectionId {
    /// Builds an ID from a fixed-size array.
    ///
    /// # Panics
    /// If `N` exceeds [`MAX_CONNECTION_ID_LEN`]. Use `TryFrom<&[u8]>` for
    /// input of unknown length.
    fn from(src: [u8; N]) -> Self {
        assert!(N <= MAX_CONNECTION_ID_LEN, "connection ID too long");
        let mut bytes = [0u8; MAX_CONNECTION_ID_LEN];
        bytes[..N].copy_from_slice(&src);
        Self { bytes, len: N as u8 }
    }
}

impl TryFrom<&[u8]> for ConnectionId {
    type Error = Error;

    fn try_from(src: &[u8]) -> Result<Self, Error> {
        if src.len() > MAX_CONNECTION_ID_LEN {
            return Err(Error::InvalidConnectionIdLength { len: src.len() });
        }
        let mut bytes = [0u8; MAX_CONNECTION_ID_LEN];
        bytes[..src.len()].copy_from_slice(src);
        Ok(Self {
            bytes,
            len: src.len() as u8,
        })
    }
}

impl AsRef<[u8]> for ConnectionId {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Display for ConnectionId {
    /// Lowercase hex, no separators (`010203`); `(empty)` for zero length.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "(empty)");
        }
        for b in self.as_bytes() {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ConnectionId({self})")
    }
}

/// A 16-byte stateless reset token.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatelessResetToken(pub [u8; 16]);

impl StatelessResetToken {
    /// Returns the token bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }
}

impl From<[u8; 16]> for StatelessResetToken {
    fn from(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for StatelessResetToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for StatelessResetToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StatelessResetToken({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_array_roundtrip() {
        let cid = ConnectionId::from([0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(cid.as_bytes(), &[0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(cid.len(), 4);
        assert!(!cid.is_empty());
    }

    #[test]
    fn test_empty_connection_id() {
        let cid = ConnectionId::from([0u8; 0]);
        assert!(cid.is_empty());
        assert_eq!(cid.to_string(), "(empty)");
    }

    #[test]
    fn test_try_from_rejects_overlong() {
        let long = [0u8; 21];
        let err = ConnectionId::try_from(&long[..]).unwrap_err();
        assert_eq!(err.as_label(), "invalid_connection_id_length");
    }

    #[test]
    fn test_try_from_accepts_max_len() {
        let max = [0xabu8; 20];
        let cid = ConnectionId::try_from(&max[..]).unwrap();
        assert_eq!(cid.len(), MAX_CONNECTION_ID_LEN);
    }

    #[test]
    fn test_hex_display() {
        let cid = ConnectionId::from([1, 2, 3]);
        assert_eq!(cid.to_string(), "010203");
        let token = StatelessResetToken([0xff; 16]);
        assert_eq!(token.to_string(), "ff".repeat(16));
    }
}
