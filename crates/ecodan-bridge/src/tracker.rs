//! Command/acknowledgement tracker.
//!
//! The controller acknowledges set requests in send order and its
//! acknowledgements carry no identifier, so correlation is a plain FIFO:
//! each acknowledgement retires the oldest in-flight write, whatever its
//! content. The queue length is the count of in-flight writes. Retry policy
//! lives with the host; this type only provides the primitives.

use std::collections::VecDeque;

use ecodan_protocol::{Command, Frame, MessageType};
use tracing::{debug, warn};

/// FIFO of issued-but-unacknowledged write commands.
#[derive(Debug, Default)]
pub struct CommandTracker {
    queue: VecDeque<Command>,
}

impl CommandTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        CommandTracker {
            queue: VecDeque::new(),
        }
    }

    /// Record a write that was just sent to the controller.
    pub fn enqueue(&mut self, command: Command) {
        self.queue.push_back(command);
    }

    /// Process an acknowledgement frame: retire and return the oldest
    /// in-flight write. An acknowledgement with nothing in flight is a
    /// no-op. A frame of the wrong type is still processed, with a
    /// diagnostic, since the controller is assumed to acknowledge in order.
    pub fn on_acknowledgement(&mut self, frame: &Frame) -> Option<Command> {
        if frame.message_type() != Some(MessageType::SetResponse) {
            warn!(
                "unexpected acknowledgement type: 0x{:02X}",
                frame.type_code()
            );
        }
        match self.queue.pop_front() {
            Some(command) => Some(command),
            None => {
                debug!("acknowledgement received with no writes in flight");
                None
            }
        }
    }

    /// Number of writes in flight.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether no writes are in flight.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// The oldest in-flight write, if any.
    pub fn oldest(&self) -> Option<&Command> {
        self.queue.front()
    }
}
