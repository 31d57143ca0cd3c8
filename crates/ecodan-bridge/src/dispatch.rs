//! Response dispatcher.
//!
//! One frame in, snapshot mutation plus publish calls out, run to
//! completion. All malformed or unknown input is absorbed as diagnostics:
//! the link must keep operating, so nothing here returns an error to the
//! caller and nothing panics.

use ecodan_protocol::{Command, Frame, MessageType, PacketCode};
use tracing::{debug, info, warn};

use crate::derived;
use crate::handlers;
use crate::sink::StateSink;
use crate::status::Status;
use crate::tracker::CommandTracker;

/// Counters over everything the dispatcher has seen.
#[derive(Debug, Default, Clone, Copy)]
pub struct DispatchStats {
    /// Frames handled, of any type.
    pub frames_handled: u64,
    /// Set acknowledgements processed.
    pub acknowledged_writes: u64,
    /// Frames with an unrecognized message type.
    pub unrecognized_types: u64,
    /// Status responses with an unrecognized packet code.
    pub unrecognized_packets: u64,
    /// Status responses dropped because the payload was too short.
    pub truncated_frames: u64,
}

/// Routes received frames, owns the device-state snapshot and the write
/// queue.
#[derive(Debug, Default)]
pub struct Dispatcher {
    status: Status,
    tracker: CommandTracker,
    connected: bool,
    stats: DispatchStats,
}

impl Dispatcher {
    /// Create a dispatcher with an empty snapshot.
    pub fn new() -> Self {
        Dispatcher::default()
    }

    /// The device-state snapshot.
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Whether the connect handshake has been answered.
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Dispatch counters.
    pub fn stats(&self) -> DispatchStats {
        self.stats
    }

    /// Number of writes in flight.
    pub fn pending_writes(&self) -> usize {
        self.tracker.len()
    }

    /// Record a command the host just sent, so its acknowledgement can be
    /// correlated.
    pub fn enqueue_command(&mut self, command: Command) {
        self.tracker.enqueue(command);
    }

    /// Handle one received frame: route on its message type, update the
    /// snapshot and publish every changed field to `sink`.
    pub fn handle_response(&mut self, frame: &Frame, sink: &mut dyn StateSink) {
        self.stats.frames_handled += 1;

        match frame.message_type() {
            Some(MessageType::SetResponse) => {
                self.tracker.on_acknowledgement(frame);
                self.stats.acknowledged_writes += 1;
            }
            Some(MessageType::GetResponse) | Some(MessageType::ConfigurationResponse) => {
                self.handle_status_response(frame, sink);
            }
            Some(MessageType::ConnectResponse) => {
                if !self.connected {
                    info!("connection reply received from heat pump");
                }
                self.connected = true;
            }
            _ => {
                self.stats.unrecognized_types += 1;
                debug!(
                    "unrecognized message type received on serial link: 0x{:02X}",
                    frame.type_code()
                );
            }
        }
    }

    fn handle_status_response(&mut self, frame: &Frame, sink: &mut dyn StateSink) {
        let Some(code) = frame.packet_code() else {
            self.stats.unrecognized_packets += 1;
            match frame.payload().first() {
                Some(raw) => debug!("unrecognized status packet code: 0x{:02X}", raw),
                None => debug!("status response with empty payload"),
            }
            return;
        };

        self.apply_packet(code, frame, sink);
    }

    fn apply_packet(&mut self, code: PacketCode, frame: &Frame, sink: &mut dyn StateSink) {
        let handler = handlers::handler_for(code);
        match handler(frame, &mut self.status) {
            Ok(changed) => {
                let derived = derived::recompute(&mut self.status, &changed);
                for (name, value) in changed.into_iter().chain(derived) {
                    sink.publish(name, value);
                }
            }
            Err(err) => {
                self.stats.truncated_frames += 1;
                warn!("dropping {:?} packet: {}", code, err);
            }
        }
    }
}
