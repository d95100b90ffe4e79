//! Combined heat and power unit: cogeneration with byproduct electricity.

use crate::supply::types::{SupplyEnergy, SupplyInput};

/// Thermal share of the fuel conversion.
pub const CHP_THERMAL_EFFICIENCY: f32 = 0.6;

/// Electrical share of the fuel conversion. Overall conversion is 93%.
pub const CHP_ELECTRICAL_EFFICIENCY: f32 = 0.33;

/// Combined heat and power unit.
///
/// Fuel input is sized to meet the thermal load; the electrical share of
/// the same fuel is reported as generated electricity, distinct from
/// electricity consumed.
pub fn combined_heat_and_power(input: &SupplyInput) -> SupplyEnergy {
    let fossil_fuel_in_kw = input.load_kw / CHP_THERMAL_EFFICIENCY;
    SupplyEnergy {
        fossil_fuel_in_kw: Some(fossil_fuel_in_kw),
        electricity_in_kw: Some(0.0),
        electricity_out_kw: Some(fossil_fuel_in_kw * CHP_ELECTRICAL_EFFICIENCY),
        cop: None,
    }
}
