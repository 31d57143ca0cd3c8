//! Frame type and stream codec.
//!
//! Every message on the link is framed the same way:
//!
//! ```text
//! +------+------+------+------+-----+-------------------+------+
//! | 0xFC | type | 0x02 | 0x7A | len | payload[0..len]   | ck   |
//! +------+------+------+------+-----+-------------------+------+
//! ```
//!
//! where `ck = 0xFC - sum(all preceding bytes)`. For GET/CONFIGURATION
//! responses, payload byte 0 is the packet code and the remaining bytes are
//! the fields described by that code.

use bytes::{Buf, BytesMut};

use crate::constants::*;
use crate::decode;
use crate::error::ProtocolError;
use crate::types::{MessageType, PacketCode};

/// One received or to-be-sent message.
///
/// Field access goes through the bounds-checked accessors below; there is no
/// raw indexing, so a too-short payload surfaces as
/// [`ProtocolError::TruncatedFrame`] rather than a panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    type_code: u8,
    payload: Vec<u8>,
}

impl Frame {
    /// Create a frame from a message type and payload.
    pub fn new(message_type: MessageType, payload: Vec<u8>) -> Result<Self, ProtocolError> {
        Self::from_raw(message_type.code(), payload)
    }

    /// Create a frame from a raw type code and payload.
    pub fn from_raw(type_code: u8, payload: Vec<u8>) -> Result<Self, ProtocolError> {
        if payload.len() > MAX_PAYLOAD_LEN {
            return Err(ProtocolError::PayloadTooLong {
                max: MAX_PAYLOAD_LEN,
                actual: payload.len(),
            });
        }
        Ok(Frame { type_code, payload })
    }

    /// Raw message type byte, kept for diagnostics on unknown types.
    pub fn type_code(&self) -> u8 {
        self.type_code
    }

    /// Message type, if the type byte is a known code.
    pub fn message_type(&self) -> Option<MessageType> {
        MessageType::from_code(self.type_code)
    }

    /// Packet code from payload byte 0, if present and known.
    pub fn packet_code(&self) -> Option<PacketCode> {
        self.payload.first().and_then(|&b| PacketCode::from_code(b))
    }

    /// The payload bytes.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Raw unsigned byte at `offset`.
    pub fn byte(&self, offset: usize) -> Result<u8, ProtocolError> {
        decode::byte(&self.payload, offset)
    }

    /// Big-endian u16 at `offset`.
    pub fn u16_be(&self, offset: usize) -> Result<u16, ProtocolError> {
        decode::u16_be(&self.payload, offset)
    }

    /// Two-byte temperature at `offset` (hundredths of a degree).
    pub fn scaled16(&self, offset: usize) -> Result<f32, ProtocolError> {
        decode::scaled16(&self.payload, offset)
    }

    /// Two-byte signed temperature at `offset`.
    pub fn scaled16_signed(&self, offset: usize) -> Result<f32, ProtocolError> {
        decode::scaled16_signed(&self.payload, offset)
    }

    /// One-byte temperature at `offset` (half-degree steps, -40 offset).
    pub fn scaled8(&self, offset: usize) -> Result<f32, ProtocolError> {
        decode::scaled8(&self.payload, offset)
    }

    /// One-byte temperature at `offset` (whole-degree steps, -40 offset).
    pub fn scaled8_v2(&self, offset: usize) -> Result<f32, ProtocolError> {
        decode::scaled8_v2(&self.payload, offset)
    }

    /// Three-byte energy counter at `offset` (hundredths of a kWh).
    pub fn scaled24(&self, offset: usize) -> Result<f32, ProtocolError> {
        decode::scaled24(&self.payload, offset)
    }

    /// Three-byte runtime counter at `offset` (unscaled).
    pub fn scaled24_v2(&self, offset: usize) -> Result<f32, ProtocolError> {
        decode::scaled24_v2(&self.payload, offset)
    }

    /// Produce the wire image of this frame, checksum included.
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(FRAME_HEADER_LEN + self.payload.len() + 1);
        buf.push(FRAME_SYNC);
        buf.push(self.type_code);
        buf.extend_from_slice(&FRAME_MAGIC);
        buf.push(self.payload.len() as u8);
        buf.extend_from_slice(&self.payload);
        buf.push(checksum(&buf));
        buf
    }
}

fn checksum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(CHECKSUM_SEED, |ck, &b| ck.wrapping_sub(b))
}

/// Accumulating decoder for the byte stream coming off the serial port.
///
/// Bytes are pushed in as they arrive; complete, checksum-valid frames are
/// pulled out. Garbage between frames is skipped while searching for the
/// sync byte.
#[derive(Debug, Default)]
pub struct FrameCodec {
    /// Buffer for accumulating incoming data.
    buffer: BytesMut,
}

impl FrameCodec {
    /// Create a new frame codec.
    pub fn new() -> Self {
        FrameCodec {
            buffer: BytesMut::with_capacity((FRAME_HEADER_LEN + MAX_PAYLOAD_LEN + 1) * 2),
        }
    }

    /// Add received data to the buffer.
    pub fn push(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
    }

    /// Try to decode the next complete frame from the buffer.
    ///
    /// Returns `Ok(Some(frame))` when a valid frame is available, `Ok(None)`
    /// when more data is needed, or `Err(ChecksumMismatch)` when a frame
    /// failed verification. After a checksum error the codec resynchronizes,
    /// so calling again will keep scanning the remaining bytes.
    pub fn decode(&mut self) -> Result<Option<Frame>, ProtocolError> {
        loop {
            // Scan for the sync byte, discarding any preceding garbage.
            let mut skipped = 0usize;
            while !self.buffer.is_empty() && self.buffer[0] != FRAME_SYNC {
                self.buffer.advance(1);
                skipped += 1;
            }
            if skipped > 0 {
                log::trace!("skipped {} bytes of garbage before sync", skipped);
            }

            if self.buffer.len() < FRAME_HEADER_LEN {
                return Ok(None);
            }

            // A sync byte inside garbage won't carry the magic pair; treat
            // it as noise and keep scanning.
            if self.buffer[2..4] != FRAME_MAGIC {
                self.buffer.advance(1);
                continue;
            }

            let len = self.buffer[4] as usize;
            if len > MAX_PAYLOAD_LEN {
                self.buffer.advance(1);
                continue;
            }

            let total = FRAME_HEADER_LEN + len + 1;
            if self.buffer.len() < total {
                return Ok(None);
            }

            let expected = checksum(&self.buffer[..total - 1]);
            let actual = self.buffer[total - 1];
            if expected != actual {
                log::warn!(
                    "dropping frame with bad checksum: expected 0x{:02X}, got 0x{:02X}",
                    expected,
                    actual
                );
                self.buffer.advance(1);
                return Err(ProtocolError::ChecksumMismatch { expected, actual });
            }

            let type_code = self.buffer[1];
            self.buffer.advance(FRAME_HEADER_LEN);
            let payload = self.buffer.split_to(len).to_vec();
            self.buffer.advance(1); // checksum byte

            return Ok(Some(Frame { type_code, payload }));
        }
    }

    /// Get the number of buffered bytes.
    pub fn buffered_len(&self) -> usize {
        self.buffer.len()
    }

    /// Clear the buffer.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}
