//! Commands sent to the controller.
//!
//! The protocol has no per-command identifier: the controller acknowledges
//! set requests in send order, so the host must keep its own queue of
//! in-flight writes (see the tracker in the bridge crate). Payload layouts
//! for set requests are controller-specific and supplied by the caller; this
//! module only deals with putting them on the wire.

use crate::error::ProtocolError;
use crate::frame::Frame;
use crate::types::MessageType;

/// Payload of the connect handshake.
const CONNECT_PAYLOAD: [u8; 2] = [0xCA, 0x01];

/// One command to be sent to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    message_type: MessageType,
    payload: Vec<u8>,
}

impl Command {
    /// Create a command from a message type and payload.
    pub fn new(message_type: MessageType, payload: Vec<u8>) -> Result<Self, ProtocolError> {
        // Validate the length up front so encode can't fail later.
        Frame::new(message_type, payload.clone())?;
        Ok(Command {
            message_type,
            payload,
        })
    }

    /// The connect handshake. Must be sent (and acknowledged) before the
    /// controller answers anything else.
    pub fn connect() -> Self {
        Command {
            message_type: MessageType::ConnectRequest,
            payload: CONNECT_PAYLOAD.to_vec(),
        }
    }

    /// Read request for the given packet code.
    pub fn get(packet_code: u8) -> Self {
        Command {
            message_type: MessageType::GetRequest,
            payload: vec![packet_code],
        }
    }

    /// Message type of this command.
    pub fn message_type(&self) -> MessageType {
        self.message_type
    }

    /// Payload of this command.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Whether this command expects a set acknowledgement.
    pub fn is_write(&self) -> bool {
        self.message_type == MessageType::SetRequest
    }

    /// Produce the wire image of this command.
    pub fn encode(&self) -> Vec<u8> {
        // Length was validated in the constructor.
        Frame::new(self.message_type, self.payload.clone())
            .map(|f| f.encode())
            .unwrap_or_default()
    }
}
