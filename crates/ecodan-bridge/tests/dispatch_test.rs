//! Integration tests for the response dispatcher.
//!
//! Frames are built exactly as the controller would send them (message type
//! plus payload with the packet code in byte 0) and pushed through a
//! dispatcher with a recording sink, checking snapshot contents, publish
//! names, publish order and the no-partial-update guarantee.

use ecodan_bridge::{Dispatcher, MemorySink, Value};
use ecodan_protocol::{Command, Frame, MessageType};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn get_response(payload: Vec<u8>) -> Frame {
    Frame::new(MessageType::GetResponse, payload).unwrap()
}

fn dispatch(dispatcher: &mut Dispatcher, payload: Vec<u8>) -> MemorySink {
    let mut sink = MemorySink::new();
    dispatcher.handle_response(&get_response(payload), &mut sink);
    sink
}

// ============================================================================
// End-to-end scenarios
// ============================================================================

#[test]
fn test_error_state_fault_translation() {
    init_tracing();
    let mut dispatcher = Dispatcher::new();

    // refrigerant error 0, fault code 0x029A, letter bytes 0x00/0x03
    let sink = dispatch(&mut dispatcher, vec![0x03, 0x00, 0x02, 0x9A, 0x00, 0x03]);

    let status = dispatcher.status();
    assert_eq!(status.refrigerant_error_code, 0);
    assert_eq!(status.fault_code_numeric, 0x029A);
    assert_eq!(status.fault_code_letters, 0x0003);
    assert_eq!(status.fault_code_text, "A3 354");

    assert_eq!(sink.names(), ["refrigerant_error_code", "fault_code_text"]);
    assert_eq!(
        sink.last("fault_code_text"),
        Some(&Value::Text("A3 354".to_string()))
    );
}

#[test]
fn test_sh_temperature_sentinel_zone() {
    init_tracing();
    let mut dispatcher = Dispatcher::new();

    // z1 marked absent (0xF0 sentinel), z2 21.50, refrigerant -12.5,
    // condensing 35.0, outside 10.5
    let sink = dispatch(
        &mut dispatcher,
        vec![
            0x0B, 0xF0, 0x00, 0x08, 0x66, 0x00, 0x00, 0x00, 0xFB, 0x1E, 150, 101,
        ],
    );

    let status = dispatcher.status();
    assert_eq!(status.zone1_room_temperature, 0.0);
    assert_eq!(status.zone2_room_temperature, 21.5);
    assert_eq!(status.outside_temperature, 10.5);
    assert_eq!(status.refrigerant_liquid_temperature, -12.5);
    assert_eq!(status.refrigerant_condensing_temperature, 35.0);

    assert_eq!(sink.last("z1_room_temp"), Some(&Value::Temperature(0.0)));
    assert_eq!(
        sink.names(),
        [
            "z1_room_temp",
            "z2_room_temp",
            "outside_temp",
            "hp_refrigerant_temp",
            "hp_refrigerant_condensing_temp",
        ]
    );
}

// ============================================================================
// Derived fields
// ============================================================================

#[test]
fn test_output_power_estimate_follows_inputs() {
    init_tracing();
    let mut dispatcher = Dispatcher::new();

    // Flow rate 12 L/min (feed/return still at defaults).
    let sink = dispatch(
        &mut dispatcher,
        vec![0x15, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 12],
    );
    assert_eq!(
        sink.names(),
        [
            "status_booster",
            "status_immersion",
            "flow_rate",
            "computed_output_power",
        ]
    );

    // Feed 40.00, return 35.00, dhw 48.50, dhw secondary 47.00.
    let sink = dispatch(
        &mut dispatcher,
        vec![
            0x0C, 0x0F, 0xA0, 0x00, 0x0D, 0xAC, 0x00, 0x12, 0xF2, 0x00, 0x12, 0x5C,
        ],
    );
    assert_eq!(
        sink.names(),
        [
            "hp_feed_temp",
            "hp_return_temp",
            "dhw_temp",
            "dhw_secondary_temp",
            "computed_output_power",
        ]
    );

    // 5 K * 12 L/min * 4.186 kJ/(kg K) / 60 = 4.186 kW
    let status = dispatcher.status();
    assert!((status.computed_output_power - 4.186).abs() < 1e-3);
    match sink.last("computed_output_power") {
        Some(Value::Number(kw)) => assert!((kw - 4.186).abs() < 1e-3),
        other => panic!("unexpected value: {other:?}"),
    }
}

#[test]
fn test_cop_per_category_and_zero_division() {
    init_tracing();
    let mut dispatcher = Dispatcher::new();

    // Consumed: heating 250.00, cooling 0, dhw 100.00 kWh.
    dispatch(
        &mut dispatcher,
        vec![
            0xA1, 0, 0, 0, 0x00, 0x61, 0xA8, 0x00, 0x00, 0x00, 0x00, 0x27, 0x10,
        ],
    );
    // Delivered: heating 750.00, cooling 50.00, dhw 300.00 kWh.
    let sink = dispatch(
        &mut dispatcher,
        vec![
            0xA2, 0, 0, 0, 0x01, 0x24, 0xF8, 0x00, 0x13, 0x88, 0x00, 0x75, 0x30,
        ],
    );

    assert_eq!(
        sink.names(),
        [
            "heating_delivered",
            "cool_delivered",
            "dhw_delivered",
            "heating_cop",
            "cool_cop",
            "dhw_cop",
        ]
    );

    let status = dispatcher.status();
    assert_eq!(status.heating_cop, 3.0);
    // Nothing consumed for cooling: COP is exactly 0, not NaN or infinity.
    assert_eq!(status.cooling_cop, 0.0);
    assert_eq!(status.dhw_cop, 3.0);
    assert_eq!(sink.last("cool_cop"), Some(&Value::Number(0.0)));
}

#[test]
fn test_consumption_report_also_refreshes_cop() {
    init_tracing();
    let mut dispatcher = Dispatcher::new();

    let sink = dispatch(
        &mut dispatcher,
        vec![
            0xA1, 0, 0, 0, 0x00, 0x61, 0xA8, 0x00, 0x00, 0x00, 0x00, 0x27, 0x10,
        ],
    );
    assert_eq!(
        sink.names(),
        [
            "heating_consumed",
            "cool_consumed",
            "dhw_consumed",
            "heating_cop",
            "cool_cop",
            "dhw_cop",
        ]
    );
}

// ============================================================================
// Per-packet decoding
// ============================================================================

#[test]
fn test_datetime_firmware() {
    let mut dispatcher = Dispatcher::new();
    let sink = dispatch(
        &mut dispatcher,
        vec![0x01, 24, 8, 25, 14, 30, 5, 0x02, 0x1A],
    );

    let dt = dispatcher.status().controller_datetime;
    assert_eq!(
        (dt.year, dt.month, dt.day, dt.hour, dt.minute, dt.second),
        (2024, 8, 25, 14, 30, 5)
    );
    assert_eq!(
        sink.last("controller_firmware_text"),
        Some(&Value::Text("02.1A".to_string()))
    );
}

#[test]
fn test_temperature_config() {
    let mut dispatcher = Dispatcher::new();
    // z1 21.00, z2 20.00, z1 flow 45.00, z2 flow 40.00, legionella 65.00,
    // dhw drop 10, max flow 60, min flow 25.
    let sink = dispatch(
        &mut dispatcher,
        vec![
            0x09, 0x08, 0x34, 0x07, 0xD0, 0x11, 0x94, 0x0F, 0xA0, 0x19, 0x64, 50, 100, 65,
        ],
    );

    let status = dispatcher.status();
    assert_eq!(status.zone1_set_temperature, 21.0);
    assert_eq!(status.zone2_set_temperature, 20.0);
    assert_eq!(status.zone1_flow_setpoint, 45.0);
    assert_eq!(status.zone2_flow_setpoint, 40.0);
    assert_eq!(status.legionella_setpoint, 65.0);
    assert_eq!(status.dhw_temperature_drop, 10.0);
    assert_eq!(status.maximum_flow_temperature, 60.0);
    assert_eq!(status.minimum_flow_temperature, 25.0);
    assert_eq!(sink.updates.len(), 8);
}

#[test]
fn test_pump_status_order_and_values() {
    let mut dispatcher = Dispatcher::new();
    let sink = dispatch(
        &mut dispatcher,
        vec![0x14, 1, 0, 0, 0, 1, 1, 0, 0, 0, 3, 2],
    );

    let status = dispatcher.status();
    assert!(status.water_pump_active);
    assert!(!status.water_pump2_active);
    assert!(status.water_pump3_active);
    assert!(status.three_way_valve_active);
    assert!(!status.three_way_valve2_active);
    assert_eq!(status.mixing_valve_step, 3);
    assert_eq!(status.mixing_valve_status, 2);

    assert_eq!(
        sink.names(),
        [
            "status_water_pump",
            "status_water_pump_2",
            "status_water_pump_3",
            "status_three_way_valve",
            "status_three_way_valve_2",
            "mixing_valve_step",
            "status_mixing_valve",
        ]
    );
}

#[test]
fn test_mode_flags() {
    let mut dispatcher = Dispatcher::new();
    // power on, operation heating, dhw eco, z1 compensation curve,
    // z2 room target, dhw flow target 50.00.
    let sink = dispatch(
        &mut dispatcher,
        vec![0x26, 0, 0, 1, 2, 1, 2, 0, 0x13, 0x88],
    );

    assert_eq!(sink.last("status_power"), Some(&Value::Bool(true)));
    assert_eq!(sink.last("status_operation"), Some(&Value::Number(2.0)));
    assert_eq!(sink.last("status_dhw_eco"), Some(&Value::Bool(true)));
    assert_eq!(sink.last("status_heating_cooling"), Some(&Value::Enum(2)));
    assert_eq!(sink.last("status_heating_cooling_z2"), Some(&Value::Enum(0)));
    assert_eq!(
        sink.last("dhw_flow_temp_target"),
        Some(&Value::Temperature(50.0))
    );

    // Prohibit flags from the companion packet.
    let sink = dispatch(&mut dispatcher, vec![0x28, 0, 0, 1, 0, 1, 0, 0, 1, 0]);
    let status = dispatcher.status();
    assert!(status.dhw_forced_active);
    assert!(!status.holiday_mode);
    assert!(status.prohibit_dhw);
    assert!(status.prohibit_heating_z2);
    assert_eq!(sink.updates.len(), 7);
}

#[test]
fn test_single_field_packets() {
    let mut dispatcher = Dispatcher::new();

    let sink = dispatch(&mut dispatcher, vec![0x02, 0, 0, 1]);
    assert!(dispatcher.status().defrost_active);
    assert_eq!(sink.last("status_defrost"), Some(&Value::Bool(true)));

    dispatch(&mut dispatcher, vec![0x04, 52]);
    assert_eq!(dispatcher.status().compressor_frequency, 52);

    dispatch(&mut dispatcher, vec![0x05, 0, 0, 0, 0, 0, 2]);
    assert_eq!(dispatcher.status().heat_source, 2);

    let sink = dispatch(&mut dispatcher, vec![0x07, 0, 0, 0, 0, 0, 75]);
    assert_eq!(dispatcher.status().output_power, 75);
    // A fresh power report republishes the estimate alongside it.
    assert_eq!(sink.names(), ["output_power", "computed_output_power"]);
}

#[test]
fn test_zone_and_circuit_temperatures() {
    let mut dispatcher = Dispatcher::new();

    // z1 38.00/32.00, z2 37.00/31.00
    dispatch(
        &mut dispatcher,
        vec![
            0x0D, 0x0E, 0xD8, 0x00, 0x0C, 0x80, 0x00, 0x0E, 0x74, 0x00, 0x0C, 0x1C,
        ],
    );
    let status = dispatcher.status();
    assert_eq!(status.zone1_feed_temperature, 38.0);
    assert_eq!(status.zone1_return_temperature, 32.0);
    assert_eq!(status.zone2_feed_temperature, 37.0);
    assert_eq!(status.zone2_return_temperature, 31.0);

    // boiler 55.00/48.00
    dispatch(
        &mut dispatcher,
        vec![0x0E, 0x15, 0x7C, 0x00, 0x12, 0xC0],
    );
    assert_eq!(dispatcher.status().boiler_flow_temperature, 55.0);
    assert_eq!(dispatcher.status().boiler_return_temperature, 48.0);

    // mixing tank 42.00
    dispatch(&mut dispatcher, vec![0x0F, 0x10, 0x68]);
    assert_eq!(dispatcher.status().mixing_tank_temperature, 42.0);
}

#[test]
fn test_external_thermostat_inputs() {
    let mut dispatcher = Dispatcher::new();
    let sink = dispatch(&mut dispatcher, vec![0x10, 1, 0, 1]);

    let status = dispatcher.status();
    assert!(status.in1_thermostat_request);
    assert!(!status.in6_thermostat_request);
    assert!(status.in5_thermostat_request);
    assert_eq!(
        sink.names(),
        ["status_in1_request", "status_in6_request", "status_in5_request"]
    );
}

#[test]
fn test_runtime_counter() {
    let mut dispatcher = Dispatcher::new();
    // 0x0186A0 = 100000
    dispatch(&mut dispatcher, vec![0x13, 0, 0, 0x01, 0x86, 0xA0]);
    assert_eq!(dispatcher.status().runtime, 100000.0);
}

// ============================================================================
// Failure absorption
// ============================================================================

#[test]
fn test_truncated_payload_no_partial_update() {
    init_tracing();
    let mut dispatcher = Dispatcher::new();

    // TEMPERATURE_STATE_A needs bytes up to offset 11; give it two.
    let sink = dispatch(&mut dispatcher, vec![0x0C, 0x0F]);

    assert!(sink.updates.is_empty());
    assert_eq!(dispatcher.status().hp_feed_temperature, 0.0);
    assert_eq!(dispatcher.stats().truncated_frames, 1);
}

#[test]
fn test_unrecognized_message_type_ignored() {
    let mut dispatcher = Dispatcher::new();
    let mut sink = MemorySink::new();

    let frame = Frame::from_raw(0x99, vec![0x0C, 0x00]).unwrap();
    dispatcher.handle_response(&frame, &mut sink);

    assert!(sink.updates.is_empty());
    assert_eq!(dispatcher.stats().unrecognized_types, 1);
}

#[test]
fn test_unrecognized_packet_code_ignored() {
    let mut dispatcher = Dispatcher::new();
    let sink = dispatch(&mut dispatcher, vec![0x70, 0x01, 0x02]);

    assert!(sink.updates.is_empty());
    assert_eq!(dispatcher.stats().unrecognized_packets, 1);
}

// ============================================================================
// Connection and acknowledgements
// ============================================================================

#[test]
fn test_connect_response_marks_connected() {
    let mut dispatcher = Dispatcher::new();
    let mut sink = MemorySink::new();
    assert!(!dispatcher.is_connected());

    let frame = Frame::new(MessageType::ConnectResponse, vec![0x00]).unwrap();
    dispatcher.handle_response(&frame, &mut sink);
    assert!(dispatcher.is_connected());

    // Idempotent, no publishes.
    dispatcher.handle_response(&frame, &mut sink);
    assert!(dispatcher.is_connected());
    assert!(sink.updates.is_empty());
}

#[test]
fn test_acknowledgements_drain_write_queue_in_order() {
    let mut dispatcher = Dispatcher::new();
    let mut sink = MemorySink::new();

    dispatcher.enqueue_command(Command::new(MessageType::SetRequest, vec![0x01]).unwrap());
    dispatcher.enqueue_command(Command::new(MessageType::SetRequest, vec![0x02]).unwrap());
    assert_eq!(dispatcher.pending_writes(), 2);

    let ack = Frame::new(MessageType::SetResponse, vec![0x00]).unwrap();
    dispatcher.handle_response(&ack, &mut sink);
    assert_eq!(dispatcher.pending_writes(), 1);

    dispatcher.handle_response(&ack, &mut sink);
    assert_eq!(dispatcher.pending_writes(), 0);

    // Extra acknowledgement is absorbed as a diagnostic.
    dispatcher.handle_response(&ack, &mut sink);
    assert_eq!(dispatcher.pending_writes(), 0);
    assert!(sink.updates.is_empty());
    assert_eq!(dispatcher.stats().acknowledged_writes, 3);
}

// ============================================================================
// Snapshot export
// ============================================================================

#[test]
fn test_snapshot_serializes() {
    let mut dispatcher = Dispatcher::new();
    dispatch(&mut dispatcher, vec![0xC9, 0, 0, 0, 0, 0, 5]);

    let json = serde_json::to_value(dispatcher.status()).unwrap();
    assert_eq!(json["controller_version"], 5);
    assert_eq!(json["outside_temperature"], 0.0);
}
