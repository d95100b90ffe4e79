//! Electric resistance models: direct 100% conversion of electricity to
//! heating or cooling.

use crate::supply::types::{SupplyEnergy, SupplyInput};

/// Straightforward electric heating, 100 percent conversion to heat.
pub fn electric_heating(input: &SupplyInput) -> SupplyEnergy {
    direct_electric(input.load_kw)
}

/// Direct electric heater.
///
/// Reference model kept for validating simulation output against a known
/// electric baseline.
pub fn direct_heater(input: &SupplyInput) -> SupplyEnergy {
    direct_electric(input.load_kw)
}

/// Direct electric cooler.
///
/// Reference model kept for validating simulation output against a known
/// electric baseline.
pub fn direct_cooler(input: &SupplyInput) -> SupplyEnergy {
    direct_electric(input.load_kw)
}

fn direct_electric(load_kw: f32) -> SupplyEnergy {
    SupplyEnergy {
        fossil_fuel_in_kw: Some(0.0),
        electricity_in_kw: Some(load_kw),
        electricity_out_kw: Some(0.0),
        cop: None,
    }
}
