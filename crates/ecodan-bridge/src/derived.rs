//! Derived-field recompute step.
//!
//! Derived fields are declared here as dependency edges: each names the
//! publish fields that trigger it and a pure compute function over the
//! snapshot. The dispatcher runs [`recompute`] once after every handler, so
//! no call site can forget to refresh a derived value.

use crate::status::{FieldUpdate, Status, Value};

/// Specific heat of water in kJ/(kg·K), for the output power estimate.
const WATER_SPECIFIC_HEAT: f32 = 4.186;

/// A derived snapshot field.
pub struct DerivedField {
    /// Publish name of the derived field.
    pub name: &'static str,
    /// Publish names of the raw fields whose change triggers a recompute.
    pub triggers: &'static [&'static str],
    compute: fn(&Status) -> f32,
    store: fn(&mut Status, f32),
}

/// All derived fields, in publish order.
pub static DERIVED_FIELDS: &[DerivedField] = &[
    DerivedField {
        name: "computed_output_power",
        // output_power is listed so a fresh power report also republishes
        // the estimate alongside it.
        triggers: &["hp_feed_temp", "hp_return_temp", "flow_rate", "output_power"],
        compute: estimated_output_power,
        store: |s, v| s.computed_output_power = v,
    },
    DerivedField {
        name: "heating_cop",
        triggers: &["heating_consumed", "heating_delivered"],
        compute: |s| cop(s.energy_delivered_heating, s.energy_consumed_heating),
        store: |s, v| s.heating_cop = v,
    },
    DerivedField {
        name: "cool_cop",
        triggers: &["cool_consumed", "cool_delivered"],
        compute: |s| cop(s.energy_delivered_cooling, s.energy_consumed_cooling),
        store: |s, v| s.cooling_cop = v,
    },
    DerivedField {
        name: "dhw_cop",
        triggers: &["dhw_consumed", "dhw_delivered"],
        compute: |s| cop(s.energy_delivered_dhw, s.energy_consumed_dhw),
        store: |s, v| s.dhw_cop = v,
    },
];

/// Recompute every derived field whose triggers intersect `changed`, store
/// the results in the snapshot and return them as further updates.
pub fn recompute(status: &mut Status, changed: &[FieldUpdate]) -> Vec<FieldUpdate> {
    let mut updates = Vec::new();
    for derived in DERIVED_FIELDS {
        let triggered = changed
            .iter()
            .any(|(name, _)| derived.triggers.contains(name));
        if !triggered {
            continue;
        }
        let value = (derived.compute)(status);
        (derived.store)(status, value);
        updates.push((derived.name, Value::Number(value)));
    }
    updates
}

/// Thermal output estimate in kW from feed/return delta and flow rate.
fn estimated_output_power(status: &Status) -> f32 {
    let delta = status.hp_feed_temperature - status.hp_return_temperature;
    (delta * status.flow_rate as f32 * WATER_SPECIFIC_HEAT / 60.0).max(0.0)
}

/// Coefficient of performance; exactly 0 when nothing was consumed.
fn cop(delivered: f32, consumed: f32) -> f32 {
    if consumed > 0.0 {
        delivered / consumed
    } else {
        0.0
    }
}
