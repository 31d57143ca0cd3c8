//! Device-state snapshot.
//!
//! [`Status`] holds the last-known value of every field decoded off the
//! link. It is mutated only by the dispatcher and can be read (or serialized)
//! by the host integration at any time. Derived fields
//! (`computed_output_power`, the COP values) are refreshed by the recompute
//! step after every dispatch, never left stale.

use serde::Serialize;

/// A value published to the external sink.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Value {
    /// A temperature in degrees Celsius.
    Temperature(f32),
    /// A dimensionless or counter-like number.
    Number(f32),
    /// An on/off flag.
    Bool(bool),
    /// An enumerated mode, published as its wire ordinal.
    Enum(u8),
    /// Free-form text (firmware revision, fault code).
    Text(String),
}

/// One changed field: publish name plus new value.
pub type FieldUpdate = (&'static str, Value);

/// Main power switch state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum PowerMode {
    /// Unit is in standby.
    #[default]
    Standby,
    /// Unit is on.
    On,
    /// Unmapped wire value.
    Unknown(u8),
}

impl From<u8> for PowerMode {
    fn from(code: u8) -> Self {
        match code {
            0 => PowerMode::Standby,
            1 => PowerMode::On,
            c => PowerMode::Unknown(c),
        }
    }
}

/// What the unit is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum OperationMode {
    /// Idle.
    #[default]
    Off,
    /// Heating domestic hot water.
    HotWater,
    /// Space heating.
    Heating,
    /// Space cooling.
    Cooling,
    /// Frost protection.
    FrostProtect,
    /// Legionella prevention cycle.
    LegionellaPrevention,
    /// Unmapped wire value.
    Unknown(u8),
}

impl From<u8> for OperationMode {
    fn from(code: u8) -> Self {
        match code {
            0 => OperationMode::Off,
            1 => OperationMode::HotWater,
            2 => OperationMode::Heating,
            3 => OperationMode::Cooling,
            5 => OperationMode::FrostProtect,
            6 => OperationMode::LegionellaPrevention,
            c => OperationMode::Unknown(c),
        }
    }
}

impl OperationMode {
    /// Wire ordinal, used when publishing.
    pub fn code(&self) -> u8 {
        match self {
            OperationMode::Off => 0,
            OperationMode::HotWater => 1,
            OperationMode::Heating => 2,
            OperationMode::Cooling => 3,
            OperationMode::FrostProtect => 5,
            OperationMode::LegionellaPrevention => 6,
            OperationMode::Unknown(c) => *c,
        }
    }
}

/// Domestic hot water mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum DhwMode {
    /// Normal DHW operation.
    #[default]
    Normal,
    /// Economy DHW operation.
    Eco,
    /// Unmapped wire value.
    Unknown(u8),
}

impl From<u8> for DhwMode {
    fn from(code: u8) -> Self {
        match code {
            0 => DhwMode::Normal,
            1 => DhwMode::Eco,
            c => DhwMode::Unknown(c),
        }
    }
}

/// Per-zone heating/cooling control mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum HpMode {
    /// Heat to a room temperature target.
    #[default]
    HeatRoomTemp,
    /// Heat to a flow temperature target.
    HeatFlowTemp,
    /// Heat on the weather compensation curve.
    HeatCompensationCurve,
    /// Cool to a room temperature target.
    CoolRoomTemp,
    /// Cool to a flow temperature target.
    CoolFlowTemp,
    /// Unmapped wire value.
    Unknown(u8),
}

impl From<u8> for HpMode {
    fn from(code: u8) -> Self {
        match code {
            0 => HpMode::HeatRoomTemp,
            1 => HpMode::HeatFlowTemp,
            2 => HpMode::HeatCompensationCurve,
            3 => HpMode::CoolRoomTemp,
            4 => HpMode::CoolFlowTemp,
            c => HpMode::Unknown(c),
        }
    }
}

impl HpMode {
    /// Wire ordinal, used when publishing.
    pub fn code(&self) -> u8 {
        match self {
            HpMode::HeatRoomTemp => 0,
            HpMode::HeatFlowTemp => 1,
            HpMode::HeatCompensationCurve => 2,
            HpMode::CoolRoomTemp => 3,
            HpMode::CoolFlowTemp => 4,
            HpMode::Unknown(c) => *c,
        }
    }
}

/// Calendar date/time as reported by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ControllerDateTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

/// Last-known value of every decoded field.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Status {
    // Controller identity
    pub controller_datetime: ControllerDateTime,
    pub controller_firmware: String,
    pub controller_version: u8,

    // Fault state
    pub refrigerant_error_code: u8,
    pub fault_code_numeric: u16,
    pub fault_code_letters: u16,
    pub fault_code_text: String,

    // Operating state
    pub defrost_active: bool,
    pub compressor_frequency: u8,
    pub heat_source: u8,
    pub output_power: u8,
    pub runtime: f32,

    // Setpoints and flow bounds
    pub zone1_set_temperature: f32,
    pub zone2_set_temperature: f32,
    pub zone1_flow_setpoint: f32,
    pub zone2_flow_setpoint: f32,
    pub legionella_setpoint: f32,
    pub dhw_temperature_drop: f32,
    pub maximum_flow_temperature: f32,
    pub minimum_flow_temperature: f32,
    pub dhw_flow_setpoint: f32,

    // Temperatures
    pub zone1_room_temperature: f32,
    pub zone2_room_temperature: f32,
    pub outside_temperature: f32,
    pub refrigerant_liquid_temperature: f32,
    pub refrigerant_condensing_temperature: f32,
    pub hp_feed_temperature: f32,
    pub hp_return_temperature: f32,
    pub dhw_temperature: f32,
    pub dhw_secondary_temperature: f32,
    pub zone1_feed_temperature: f32,
    pub zone1_return_temperature: f32,
    pub zone2_feed_temperature: f32,
    pub zone2_return_temperature: f32,
    pub boiler_flow_temperature: f32,
    pub boiler_return_temperature: f32,
    pub mixing_tank_temperature: f32,

    // External inputs
    pub in1_thermostat_request: bool,
    pub in6_thermostat_request: bool,
    pub in5_thermostat_request: bool,

    // Pumps and valves
    pub water_pump_active: bool,
    pub water_pump2_active: bool,
    pub water_pump3_active: bool,
    pub three_way_valve_active: bool,
    pub three_way_valve2_active: bool,
    pub mixing_valve_step: u8,
    pub mixing_valve_status: u8,

    // Flow and auxiliary heaters
    pub booster_active: bool,
    pub immersion_active: bool,
    pub flow_rate: u8,

    // Modes
    pub power: PowerMode,
    pub operation: OperationMode,
    pub hot_water_mode: DhwMode,
    pub heating_cooling_mode: HpMode,
    pub heating_cooling_mode_zone2: HpMode,

    // Mode flags
    pub dhw_forced_active: bool,
    pub holiday_mode: bool,
    pub prohibit_dhw: bool,
    pub prohibit_heating_z1: bool,
    pub prohibit_cooling_z1: bool,
    pub prohibit_heating_z2: bool,
    pub prohibit_cooling_z2: bool,

    // Energy counters
    pub energy_consumed_heating: f32,
    pub energy_consumed_cooling: f32,
    pub energy_consumed_dhw: f32,
    pub energy_delivered_heating: f32,
    pub energy_delivered_cooling: f32,
    pub energy_delivered_dhw: f32,

    // Derived fields, refreshed by the recompute step
    pub computed_output_power: f32,
    pub heating_cop: f32,
    pub cooling_cop: f32,
    pub dhw_cop: f32,
}
