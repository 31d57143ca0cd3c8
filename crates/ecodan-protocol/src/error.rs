//! Protocol error types.

use thiserror::Error;

/// Errors that can occur when working with the Ecodan serial protocol.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Payload is too short for the requested field offset.
    #[error("truncated frame: field needs payload bytes up to offset {expected}, got {actual}")]
    TruncatedFrame {
        /// Payload length the access requires.
        expected: usize,
        /// Actual payload length.
        actual: usize,
    },

    /// Payload is longer than the protocol allows.
    #[error("payload too long: maximum {max} bytes, got {actual}")]
    PayloadTooLong {
        /// Maximum allowed payload length.
        max: usize,
        /// Actual payload length.
        actual: usize,
    },

    /// Received frame failed its checksum.
    #[error("checksum mismatch: expected 0x{expected:02X}, got 0x{actual:02X}")]
    ChecksumMismatch {
        /// Checksum computed over the received bytes.
        expected: u8,
        /// Checksum byte carried by the frame.
        actual: u8,
    },
}
