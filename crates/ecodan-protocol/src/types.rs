//! Common types used in the protocol.

use crate::constants::*;

/// Message type carried in byte 1 of every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageType {
    /// Write a value to the controller.
    SetRequest,
    /// Read a status packet.
    GetRequest,
    /// Initial handshake.
    ConnectRequest,
    /// Read a configuration packet.
    ConfigurationRequest,
    /// Acknowledgement of a set request.
    SetResponse,
    /// Response to a get request.
    GetResponse,
    /// Response to the connect handshake.
    ConnectResponse,
    /// Response to a configuration request.
    ConfigurationResponse,
}

impl MessageType {
    /// Look up a message type from its wire code.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            MSG_TYPE_SET_REQUEST => Some(MessageType::SetRequest),
            MSG_TYPE_GET_REQUEST => Some(MessageType::GetRequest),
            MSG_TYPE_CONNECT_REQUEST => Some(MessageType::ConnectRequest),
            MSG_TYPE_CONFIGURATION_REQUEST => Some(MessageType::ConfigurationRequest),
            MSG_TYPE_SET_RESPONSE => Some(MessageType::SetResponse),
            MSG_TYPE_GET_RESPONSE => Some(MessageType::GetResponse),
            MSG_TYPE_CONNECT_RESPONSE => Some(MessageType::ConnectResponse),
            MSG_TYPE_CONFIGURATION_RESPONSE => Some(MessageType::ConfigurationResponse),
            _ => None,
        }
    }

    /// Wire code of this message type.
    pub fn code(&self) -> u8 {
        match self {
            MessageType::SetRequest => MSG_TYPE_SET_REQUEST,
            MessageType::GetRequest => MSG_TYPE_GET_REQUEST,
            MessageType::ConnectRequest => MSG_TYPE_CONNECT_REQUEST,
            MessageType::ConfigurationRequest => MSG_TYPE_CONFIGURATION_REQUEST,
            MessageType::SetResponse => MSG_TYPE_SET_RESPONSE,
            MessageType::GetResponse => MSG_TYPE_GET_RESPONSE,
            MessageType::ConnectResponse => MSG_TYPE_CONNECT_RESPONSE,
            MessageType::ConfigurationResponse => MSG_TYPE_CONFIGURATION_RESPONSE,
        }
    }
}

/// Packet code carried in payload byte 0 of GET/CONFIGURATION responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PacketCode {
    /// Controller date/time and firmware revision.
    DatetimeFirmware,
    /// Defrost cycle state.
    DefrostState,
    /// Refrigerant error code and fault codes.
    ErrorState,
    /// Compressor frequency.
    CompressorFrequency,
    /// DHW heat source.
    DhwState,
    /// Reported output power.
    HeatingPower,
    /// Temperature setpoints and flow bounds.
    TemperatureConfig,
    /// Space-heating temperatures.
    ShTemperatureState,
    /// Heat pump feed/return and DHW temperatures.
    TemperatureStateA,
    /// Zone feed/return temperatures.
    TemperatureStateB,
    /// Boiler feed/return temperatures.
    TemperatureStateC,
    /// Mixing tank temperature.
    TemperatureStateD,
    /// External thermostat inputs.
    ExternalState,
    /// Cumulative runtime counter.
    ActiveTime,
    /// Pump and valve status.
    PumpStatus,
    /// Flow rate plus booster/immersion status.
    FlowRate,
    /// Power/operation/DHW modes and zone modes.
    ModeFlagsA,
    /// Forced DHW, holiday and prohibit flags.
    ModeFlagsB,
    /// Cumulative consumed energy.
    EnergyUsage,
    /// Cumulative delivered energy.
    EnergyDelivery,
    /// Controller hardware version.
    HardwareConfiguration,
}

impl PacketCode {
    /// Look up a packet code from its wire value.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            PACKET_DATETIME_FIRMWARE => Some(PacketCode::DatetimeFirmware),
            PACKET_DEFROST_STATE => Some(PacketCode::DefrostState),
            PACKET_ERROR_STATE => Some(PacketCode::ErrorState),
            PACKET_COMPRESSOR_FREQUENCY => Some(PacketCode::CompressorFrequency),
            PACKET_DHW_STATE => Some(PacketCode::DhwState),
            PACKET_HEATING_POWER => Some(PacketCode::HeatingPower),
            PACKET_TEMPERATURE_CONFIG => Some(PacketCode::TemperatureConfig),
            PACKET_SH_TEMPERATURE_STATE => Some(PacketCode::ShTemperatureState),
            PACKET_TEMPERATURE_STATE_A => Some(PacketCode::TemperatureStateA),
            PACKET_TEMPERATURE_STATE_B => Some(PacketCode::TemperatureStateB),
            PACKET_TEMPERATURE_STATE_C => Some(PacketCode::TemperatureStateC),
            PACKET_TEMPERATURE_STATE_D => Some(PacketCode::TemperatureStateD),
            PACKET_EXTERNAL_STATE => Some(PacketCode::ExternalState),
            PACKET_ACTIVE_TIME => Some(PacketCode::ActiveTime),
            PACKET_PUMP_STATUS => Some(PacketCode::PumpStatus),
            PACKET_FLOW_RATE => Some(PacketCode::FlowRate),
            PACKET_MODE_FLAGS_A => Some(PacketCode::ModeFlagsA),
            PACKET_MODE_FLAGS_B => Some(PacketCode::ModeFlagsB),
            PACKET_ENERGY_USAGE => Some(PacketCode::EnergyUsage),
            PACKET_ENERGY_DELIVERY => Some(PacketCode::EnergyDelivery),
            PACKET_HARDWARE_CONFIGURATION => Some(PacketCode::HardwareConfiguration),
            _ => None,
        }
    }

    /// Wire value of this packet code.
    pub fn code(&self) -> u8 {
        match self {
            PacketCode::DatetimeFirmware => PACKET_DATETIME_FIRMWARE,
            PacketCode::DefrostState => PACKET_DEFROST_STATE,
            PacketCode::ErrorState => PACKET_ERROR_STATE,
            PacketCode::CompressorFrequency => PACKET_COMPRESSOR_FREQUENCY,
            PacketCode::DhwState => PACKET_DHW_STATE,
            PacketCode::HeatingPower => PACKET_HEATING_POWER,
            PacketCode::TemperatureConfig => PACKET_TEMPERATURE_CONFIG,
            PacketCode::ShTemperatureState => PACKET_SH_TEMPERATURE_STATE,
            PacketCode::TemperatureStateA => PACKET_TEMPERATURE_STATE_A,
            PacketCode::TemperatureStateB => PACKET_TEMPERATURE_STATE_B,
            PacketCode::TemperatureStateC => PACKET_TEMPERATURE_STATE_C,
            PacketCode::TemperatureStateD => PACKET_TEMPERATURE_STATE_D,
            PacketCode::ExternalState => PACKET_EXTERNAL_STATE,
            PacketCode::ActiveTime => PACKET_ACTIVE_TIME,
            PacketCode::PumpStatus => PACKET_PUMP_STATUS,
            PacketCode::FlowRate => PACKET_FLOW_RATE,
            PacketCode::ModeFlagsA => PACKET_MODE_FLAGS_A,
            PacketCode::ModeFlagsB => PACKET_MODE_FLAGS_B,
            PacketCode::EnergyUsage => PACKET_ENERGY_USAGE,
            PacketCode::EnergyDelivery => PACKET_ENERGY_DELIVERY,
            PacketCode::HardwareConfiguration => PACKET_HARDWARE_CONFIGURATION,
        }
    }
}
