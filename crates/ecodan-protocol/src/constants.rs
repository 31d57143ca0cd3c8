//! Protocol constants
//!
//! These constants define the message type codes, packet codes, frame layout
//! and fault-code tables used on the Ecodan FTC serial link. None of this is
//! officially documented; the values below are the ones observed on the wire.

// ============================================================================
// Message Type Codes
// ============================================================================

/// Write a value to the controller.
pub const MSG_TYPE_SET_REQUEST: u8 = 0x41;
/// Read a status packet from the controller.
pub const MSG_TYPE_GET_REQUEST: u8 = 0x42;
/// Initial handshake - must be sent before anything else is answered.
pub const MSG_TYPE_CONNECT_REQUEST: u8 = 0x5A;
/// Read a configuration packet from the controller.
pub const MSG_TYPE_CONFIGURATION_REQUEST: u8 = 0x5B;
/// Acknowledgement of a set request.
pub const MSG_TYPE_SET_RESPONSE: u8 = 0x61;
/// Response to a get request.
pub const MSG_TYPE_GET_RESPONSE: u8 = 0x62;
/// Response to the connect handshake.
pub const MSG_TYPE_CONNECT_RESPONSE: u8 = 0x7A;
/// Response to a configuration request.
pub const MSG_TYPE_CONFIGURATION_RESPONSE: u8 = 0x7B;

// ============================================================================
// Packet Codes (payload byte 0 of GET/CONFIGURATION responses)
// ============================================================================

/// Controller date/time and firmware revision.
pub const PACKET_DATETIME_FIRMWARE: u8 = 0x01;
/// Defrost cycle state.
pub const PACKET_DEFROST_STATE: u8 = 0x02;
/// Refrigerant error code and fault codes.
pub const PACKET_ERROR_STATE: u8 = 0x03;
/// Compressor frequency.
pub const PACKET_COMPRESSOR_FREQUENCY: u8 = 0x04;
/// DHW heat source.
pub const PACKET_DHW_STATE: u8 = 0x05;
/// Reported output power.
pub const PACKET_HEATING_POWER: u8 = 0x07;
/// Temperature setpoints and flow bounds.
pub const PACKET_TEMPERATURE_CONFIG: u8 = 0x09;
/// Space-heating temperatures (room, outside, refrigerant).
pub const PACKET_SH_TEMPERATURE_STATE: u8 = 0x0B;
/// Heat pump feed/return and DHW temperatures.
pub const PACKET_TEMPERATURE_STATE_A: u8 = 0x0C;
/// Zone feed/return temperatures.
pub const PACKET_TEMPERATURE_STATE_B: u8 = 0x0D;
/// Boiler feed/return temperatures.
pub const PACKET_TEMPERATURE_STATE_C: u8 = 0x0E;
/// Mixing tank temperature.
pub const PACKET_TEMPERATURE_STATE_D: u8 = 0x0F;
/// External thermostat inputs.
pub const PACKET_EXTERNAL_STATE: u8 = 0x10;
/// Cumulative runtime counter.
pub const PACKET_ACTIVE_TIME: u8 = 0x13;
/// Pump and valve status.
pub const PACKET_PUMP_STATUS: u8 = 0x14;
/// Flow rate plus booster/immersion heater status.
pub const PACKET_FLOW_RATE: u8 = 0x15;
/// Power/operation/DHW modes and zone heating/cooling modes.
pub const PACKET_MODE_FLAGS_A: u8 = 0x26;
/// Forced DHW, holiday and prohibit flags.
pub const PACKET_MODE_FLAGS_B: u8 = 0x28;
/// Cumulative consumed energy per category.
pub const PACKET_ENERGY_USAGE: u8 = 0xA1;
/// Cumulative delivered energy per category.
pub const PACKET_ENERGY_DELIVERY: u8 = 0xA2;
/// Controller hardware version.
pub const PACKET_HARDWARE_CONFIGURATION: u8 = 0xC9;

// ============================================================================
// Frame Layout
// ============================================================================

/// Every frame starts with this sync byte.
pub const FRAME_SYNC: u8 = 0xFC;
/// Fixed header: sync, message type, two magic bytes, payload length.
pub const FRAME_HEADER_LEN: usize = 5;
/// The two magic bytes following the message type.
pub const FRAME_MAGIC: [u8; 2] = [0x02, 0x7A];
/// Maximum payload length the controller ever sends.
pub const MAX_PAYLOAD_LEN: usize = 16;
/// Seed of the frame checksum: `ck = 0xFC - sum(header + payload)`.
pub const CHECKSUM_SEED: u8 = 0xFC;

// ============================================================================
// Fault Code Translation
// ============================================================================

/// Fault code reported when the outdoor unit is unreachable or garbled.
pub const FAULT_CODE_COMMUNICATION: u16 = 0x6999;
/// Fault code reported when no fault is active.
pub const FAULT_CODE_NONE: u16 = 0x8000;

/// First letter of a displayed fault code, indexed by the low three bits of
/// the first fault-letter byte.
pub const FAULT_FIRST_LETTERS: [char; 8] = ['A', 'b', 'E', 'F', 'J', 'L', 'P', 'U'];

/// Mask applied to the first fault-letter byte before indexing.
pub const FAULT_FIRST_LETTER_MASK: u8 = 0x07;

/// Second letter of a displayed fault code, indexed by the second
/// fault-letter byte minus one.
pub const FAULT_SECOND_LETTERS: [char; 21] = [
    '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'O', 'H', 'J', 'L',
    'P', 'U',
];

/// Mask applied to the decremented second fault-letter byte before indexing.
///
/// Note that the mask admits indices 21-31 even though the table only has 21
/// entries; `translate_fault` clamps those to the last entry instead of
/// reading out of bounds.
pub const FAULT_SECOND_LETTER_MASK: u8 = 0x1F;
