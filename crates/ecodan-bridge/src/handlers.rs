//! Per-packet status handlers.
//!
//! One function per packet code, each reproducing the observed byte layout
//! of that packet. Every handler decodes all of its fields before touching
//! the snapshot, so a truncated payload fails the whole dispatch without a
//! partial update. The returned change list is in publish order.

use ecodan_protocol::{translate_fault, Frame, PacketCode, ProtocolError};

use crate::status::{DhwMode, FieldUpdate, HpMode, OperationMode, PowerMode, Status, Value};

/// A status handler: decode one packet into the snapshot and report the
/// changed fields in publish order.
pub type Handler = fn(&Frame, &mut Status) -> Result<Vec<FieldUpdate>, ProtocolError>;

/// Dispatch table from packet code to handler.
pub fn handler_for(code: PacketCode) -> Handler {
    match code {
        PacketCode::DatetimeFirmware => datetime_firmware,
        PacketCode::DefrostState => defrost_state,
        PacketCode::ErrorState => error_state,
        PacketCode::CompressorFrequency => compressor_frequency,
        PacketCode::DhwState => dhw_state,
        PacketCode::HeatingPower => heating_power,
        PacketCode::TemperatureConfig => temperature_config,
        PacketCode::ShTemperatureState => sh_temperature_state,
        PacketCode::TemperatureStateA => temperature_state_a,
        PacketCode::TemperatureStateB => temperature_state_b,
        PacketCode::TemperatureStateC => temperature_state_c,
        PacketCode::TemperatureStateD => temperature_state_d,
        PacketCode::ExternalState => external_state,
        PacketCode::ActiveTime => active_time,
        PacketCode::PumpStatus => pump_status,
        PacketCode::FlowRate => flow_rate,
        PacketCode::ModeFlagsA => mode_flags_a,
        PacketCode::ModeFlagsB => mode_flags_b,
        PacketCode::EnergyUsage => energy_usage,
        PacketCode::EnergyDelivery => energy_delivery,
        PacketCode::HardwareConfiguration => hardware_configuration,
    }
}

fn datetime_firmware(frame: &Frame, status: &mut Status) -> Result<Vec<FieldUpdate>, ProtocolError> {
    let year = 2000 + frame.byte(1)? as u16;
    let month = frame.byte(2)?;
    let day = frame.byte(3)?;
    let hour = frame.byte(4)?;
    let minute = frame.byte(5)?;
    let second = frame.byte(6)?;
    let firmware = format!("{:02X}.{:02X}", frame.byte(7)?, frame.byte(8)?);

    status.controller_datetime.year = year;
    status.controller_datetime.month = month;
    status.controller_datetime.day = day;
    status.controller_datetime.hour = hour;
    status.controller_datetime.minute = minute;
    status.controller_datetime.second = second;
    status.controller_firmware = firmware.clone();

    Ok(vec![("controller_firmware_text", Value::Text(firmware))])
}

fn defrost_state(frame: &Frame, status: &mut Status) -> Result<Vec<FieldUpdate>, ProtocolError> {
    status.defrost_active = frame.byte(3)? != 0;
    Ok(vec![("status_defrost", Value::Bool(status.defrost_active))])
}

fn error_state(frame: &Frame, status: &mut Status) -> Result<Vec<FieldUpdate>, ProtocolError> {
    let refrigerant_error = frame.byte(1)?;
    let fault_numeric = frame.u16_be(2)?;
    let fault_letters = frame.u16_be(4)?;
    let fault_text = translate_fault(frame.byte(4)?, frame.byte(5)?, fault_numeric);

    status.refrigerant_error_code = refrigerant_error;
    status.fault_code_numeric = fault_numeric;
    status.fault_code_letters = fault_letters;
    status.fault_code_text = fault_text.clone();

    Ok(vec![
        ("refrigerant_error_code", Value::Number(refrigerant_error as f32)),
        ("fault_code_text", Value::Text(fault_text)),
    ])
}

fn compressor_frequency(frame: &Frame, status: &mut Status) -> Result<Vec<FieldUpdate>, ProtocolError> {
    status.compressor_frequency = frame.byte(1)?;
    Ok(vec![(
        "compressor_frequency",
        Value::Number(status.compressor_frequency as f32),
    )])
}

fn dhw_state(frame: &Frame, status: &mut Status) -> Result<Vec<FieldUpdate>, ProtocolError> {
    // 0x00 = heat pump, 0x01 = screw-in heater, 0x02 = electric heater
    status.heat_source = frame.byte(6)?;
    Ok(vec![("heat_source", Value::Number(status.heat_source as f32))])
}

fn heating_power(frame: &Frame, status: &mut Status) -> Result<Vec<FieldUpdate>, ProtocolError> {
    status.output_power = frame.byte(6)?;
    Ok(vec![("output_power", Value::Number(status.output_power as f32))])
}

fn temperature_config(frame: &Frame, status: &mut Status) -> Result<Vec<FieldUpdate>, ProtocolError> {
    let z1_set = frame.scaled16(1)?;
    let z2_set = frame.scaled16(3)?;
    let z1_flow = frame.scaled16(5)?;
    let z2_flow = frame.scaled16(7)?;
    let legionella = frame.scaled16(9)?;
    let dhw_drop = frame.scaled8_v2(11)?;
    let max_flow = frame.scaled8_v2(12)?;
    let min_flow = frame.scaled8_v2(13)?;

    status.zone1_set_temperature = z1_set;
    status.zone2_set_temperature = z2_set;
    status.zone1_flow_setpoint = z1_flow;
    status.zone2_flow_setpoint = z2_flow;
    status.legionella_setpoint = legionella;
    status.dhw_temperature_drop = dhw_drop;
    status.maximum_flow_temperature = max_flow;
    status.minimum_flow_temperature = min_flow;

    Ok(vec![
        ("z1_room_temp_target", Value::Temperature(z1_set)),
        ("z2_room_temp_target", Value::Temperature(z2_set)),
        ("z1_flow_temp_target", Value::Temperature(z1_flow)),
        ("z2_flow_temp_target", Value::Temperature(z2_flow)),
        ("legionella_prevention_temp", Value::Temperature(legionella)),
        ("dhw_flow_temp_drop", Value::Temperature(dhw_drop)),
        ("max_flow_temp", Value::Temperature(max_flow)),
        ("min_flow_temp", Value::Temperature(min_flow)),
    ])
}

fn sh_temperature_state(frame: &Frame, status: &mut Status) -> Result<Vec<FieldUpdate>, ProtocolError> {
    // 0xF0 in the high byte marks a zone not reported by this system.
    let z1_room = if frame.byte(1)? == 0xF0 {
        0.0
    } else {
        frame.scaled16(1)?
    };
    let z2_room = if frame.byte(3)? == 0xF0 {
        0.0
    } else {
        frame.scaled16(3)?
    };
    let refrigerant_liquid = frame.scaled16_signed(8)?;
    let refrigerant_condensing = frame.scaled8(10)?;
    let outside = frame.scaled8(11)?;

    status.zone1_room_temperature = z1_room;
    status.zone2_room_temperature = z2_room;
    status.outside_temperature = outside;
    status.refrigerant_liquid_temperature = refrigerant_liquid;
    status.refrigerant_condensing_temperature = refrigerant_condensing;

    Ok(vec![
        ("z1_room_temp", Value::Temperature(z1_room)),
        ("z2_room_temp", Value::Temperature(z2_room)),
        ("outside_temp", Value::Temperature(outside)),
        ("hp_refrigerant_temp", Value::Temperature(refrigerant_liquid)),
        (
            "hp_refrigerant_condensing_temp",
            Value::Temperature(refrigerant_condensing),
        ),
    ])
}

fn temperature_state_a(frame: &Frame, status: &mut Status) -> Result<Vec<FieldUpdate>, ProtocolError> {
    let hp_feed = frame.scaled16(1)?;
    let hp_return = frame.scaled16(4)?;
    let dhw = frame.scaled16(7)?;
    let dhw_secondary = frame.scaled16(10)?;

    status.hp_feed_temperature = hp_feed;
    status.hp_return_temperature = hp_return;
    status.dhw_temperature = dhw;
    status.dhw_secondary_temperature = dhw_secondary;

    Ok(vec![
        ("hp_feed_temp", Value::Temperature(hp_feed)),
        ("hp_return_temp", Value::Temperature(hp_return)),
        ("dhw_temp", Value::Temperature(dhw)),
        ("dhw_secondary_temp", Value::Temperature(dhw_secondary)),
    ])
}

fn temperature_state_b(frame: &Frame, status: &mut Status) -> Result<Vec<FieldUpdate>, ProtocolError> {
    let z1_feed = frame.scaled16(1)?;
    let z1_return = frame.scaled16(4)?;
    let z2_feed = frame.scaled16(7)?;
    let z2_return = frame.scaled16(10)?;

    status.zone1_feed_temperature = z1_feed;
    status.zone1_return_temperature = z1_return;
    status.zone2_feed_temperature = z2_feed;
    status.zone2_return_temperature = z2_return;

    Ok(vec![
        ("z1_feed_temp", Value::Temperature(z1_feed)),
        ("z1_return_temp", Value::Temperature(z1_return)),
        ("z2_feed_temp", Value::Temperature(z2_feed)),
        ("z2_return_temp", Value::Temperature(z2_return)),
    ])
}

fn temperature_state_c(frame: &Frame, status: &mut Status) -> Result<Vec<FieldUpdate>, ProtocolError> {
    let boiler_flow = frame.scaled16(1)?;
    let boiler_return = frame.scaled16(4)?;

    status.boiler_flow_temperature = boiler_flow;
    status.boiler_return_temperature = boiler_return;

    Ok(vec![
        ("boiler_flow_temp", Value::Temperature(boiler_flow)),
        ("boiler_return_temp", Value::Temperature(boiler_return)),
    ])
}

fn temperature_state_d(frame: &Frame, status: &mut Status) -> Result<Vec<FieldUpdate>, ProtocolError> {
    status.mixing_tank_temperature = frame.scaled16(1)?;
    Ok(vec![(
        "mixing_tank_temp",
        Value::Temperature(status.mixing_tank_temperature),
    )])
}

fn external_state(frame: &Frame, status: &mut Status) -> Result<Vec<FieldUpdate>, ProtocolError> {
    // IN1 thermostat heat/cool request, IN6 thermostat 2, IN5 outdoor
    // thermostat.
    let in1 = frame.byte(1)? != 0;
    let in6 = frame.byte(2)? != 0;
    let in5 = frame.byte(3)? != 0;

    status.in1_thermostat_request = in1;
    status.in6_thermostat_request = in6;
    status.in5_thermostat_request = in5;

    Ok(vec![
        ("status_in1_request", Value::Bool(in1)),
        ("status_in6_request", Value::Bool(in6)),
        ("status_in5_request", Value::Bool(in5)),
    ])
}

fn active_time(frame: &Frame, status: &mut Status) -> Result<Vec<FieldUpdate>, ProtocolError> {
    status.runtime = frame.scaled24_v2(3)?;
    Ok(vec![("runtime", Value::Number(status.runtime))])
}

fn pump_status(frame: &Frame, status: &mut Status) -> Result<Vec<FieldUpdate>, ProtocolError> {
    let pump1 = frame.byte(1)? != 0;
    let pump2 = frame.byte(4)? != 0;
    let pump3 = frame.byte(5)? != 0;
    let valve1 = frame.byte(6)? != 0;
    let valve2 = frame.byte(7)? != 0;
    let mixing_step = frame.byte(10)?;
    let mixing_status = frame.byte(11)?;

    status.water_pump_active = pump1;
    status.water_pump2_active = pump2;
    status.water_pump3_active = pump3;
    status.three_way_valve_active = valve1;
    status.three_way_valve2_active = valve2;
    status.mixing_valve_step = mixing_step;
    status.mixing_valve_status = mixing_status;

    Ok(vec![
        ("status_water_pump", Value::Bool(pump1)),
        ("status_water_pump_2", Value::Bool(pump2)),
        ("status_water_pump_3", Value::Bool(pump3)),
        ("status_three_way_valve", Value::Bool(valve1)),
        ("status_three_way_valve_2", Value::Bool(valve2)),
        ("mixing_valve_step", Value::Number(mixing_step as f32)),
        ("status_mixing_valve", Value::Number(mixing_status as f32)),
    ])
}

fn flow_rate(frame: &Frame, status: &mut Status) -> Result<Vec<FieldUpdate>, ProtocolError> {
    let booster = frame.byte(2)? != 0;
    let immersion = frame.byte(5)? != 0;
    let rate = frame.byte(12)?;

    status.booster_active = booster;
    status.immersion_active = immersion;
    status.flow_rate = rate;

    Ok(vec![
        ("status_booster", Value::Bool(booster)),
        ("status_immersion", Value::Bool(immersion)),
        ("flow_rate", Value::Number(rate as f32)),
    ])
}

fn mode_flags_a(frame: &Frame, status: &mut Status) -> Result<Vec<FieldUpdate>, ProtocolError> {
    let power = PowerMode::from(frame.byte(3)?);
    let operation = OperationMode::from(frame.byte(4)?);
    let dhw_mode = DhwMode::from(frame.byte(5)?);
    let hc_mode = HpMode::from(frame.byte(6)?);
    let hc_mode_z2 = HpMode::from(frame.byte(7)?);
    let dhw_flow_setpoint = frame.scaled16(8)?;

    status.power = power;
    status.operation = operation;
    status.hot_water_mode = dhw_mode;
    status.heating_cooling_mode = hc_mode;
    status.heating_cooling_mode_zone2 = hc_mode_z2;
    status.dhw_flow_setpoint = dhw_flow_setpoint;

    Ok(vec![
        ("status_power", Value::Bool(power == PowerMode::On)),
        ("status_operation", Value::Number(operation.code() as f32)),
        ("status_dhw_eco", Value::Bool(dhw_mode == DhwMode::Eco)),
        ("status_heating_cooling", Value::Enum(hc_mode.code())),
        ("status_heating_cooling_z2", Value::Enum(hc_mode_z2.code())),
        ("dhw_flow_temp_target", Value::Temperature(dhw_flow_setpoint)),
    ])
}

fn mode_flags_b(frame: &Frame, status: &mut Status) -> Result<Vec<FieldUpdate>, ProtocolError> {
    let dhw_forced = frame.byte(3)? != 0;
    let holiday = frame.byte(4)? != 0;
    let prohibit_dhw = frame.byte(5)? != 0;
    let prohibit_heating_z1 = frame.byte(6)? != 0;
    let prohibit_cooling_z1 = frame.byte(7)? != 0;
    let prohibit_heating_z2 = frame.byte(8)? != 0;
    let prohibit_cooling_z2 = frame.byte(9)? != 0;

    status.dhw_forced_active = dhw_forced;
    status.holiday_mode = holiday;
    status.prohibit_dhw = prohibit_dhw;
    status.prohibit_heating_z1 = prohibit_heating_z1;
    status.prohibit_cooling_z1 = prohibit_cooling_z1;
    status.prohibit_heating_z2 = prohibit_heating_z2;
    status.prohibit_cooling_z2 = prohibit_cooling_z2;

    Ok(vec![
        ("status_dhw_forced", Value::Bool(dhw_forced)),
        ("status_holiday", Value::Bool(holiday)),
        ("status_prohibit_dhw", Value::Bool(prohibit_dhw)),
        ("status_prohibit_heating_z1", Value::Bool(prohibit_heating_z1)),
        ("status_prohibit_cool_z1", Value::Bool(prohibit_cooling_z1)),
        ("status_prohibit_heating_z2", Value::Bool(prohibit_heating_z2)),
        ("status_prohibit_cool_z2", Value::Bool(prohibit_cooling_z2)),
    ])
}

fn energy_usage(frame: &Frame, status: &mut Status) -> Result<Vec<FieldUpdate>, ProtocolError> {
    let heating = frame.scaled24(4)?;
    let cooling = frame.scaled24(7)?;
    let dhw = frame.scaled24(10)?;

    status.energy_consumed_heating = heating;
    status.energy_consumed_cooling = cooling;
    status.energy_consumed_dhw = dhw;

    Ok(vec![
        ("heating_consumed", Value::Number(heating)),
        ("cool_consumed", Value::Number(cooling)),
        ("dhw_consumed", Value::Number(dhw)),
    ])
}

fn energy_delivery(frame: &Frame, status: &mut Status) -> Result<Vec<FieldUpdate>, ProtocolError> {
    let heating = frame.scaled24(4)?;
    let cooling = frame.scaled24(7)?;
    let dhw = frame.scaled24(10)?;

    status.energy_delivered_heating = heating;
    status.energy_delivered_cooling = cooling;
    status.energy_delivered_dhw = dhw;

    Ok(vec![
        ("heating_delivered", Value::Number(heating)),
        ("cool_delivered", Value::Number(cooling)),
        ("dhw_delivered", Value::Number(dhw)),
    ])
}

fn hardware_configuration(frame: &Frame, status: &mut Status) -> Result<Vec<FieldUpdate>, ProtocolError> {
    // byte 6: FTC, FTC2B, FTC4, FTC5, FTC6
    status.controller_version = frame.byte(6)?;
    Ok(vec![(
        "controller_version",
        Value::Number(status.controller_version as f32),
    )])
}
