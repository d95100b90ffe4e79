//! Oil-fired boiler models with fixed fuel efficiencies.

use crate::supply::types::{SupplyEnergy, SupplyInput};

/// Fuel efficiency of the oldest boiler generation (no condensation, pilot light).
pub const OLD_OIL_BOILER_EFFICIENCY: f32 = 0.63;

/// Fuel efficiency of a classic boiler (no condensation, improved nozzles).
pub const MEDIUM_OIL_BOILER_EFFICIENCY: f32 = 0.82;

/// Fuel efficiency of a latest-generation condensing boiler.
pub const NEW_OIL_BOILER_EFFICIENCY: f32 = 0.98;

/// Old oil boiler at [`OLD_OIL_BOILER_EFFICIENCY`].
pub fn old_oil_boiler(input: &SupplyInput) -> SupplyEnergy {
    fuel_boiler(input.load_kw, OLD_OIL_BOILER_EFFICIENCY)
}

/// Classic oil boiler at [`MEDIUM_OIL_BOILER_EFFICIENCY`].
pub fn medium_oil_boiler(input: &SupplyInput) -> SupplyEnergy {
    fuel_boiler(input.load_kw, MEDIUM_OIL_BOILER_EFFICIENCY)
}

/// Condensing oil boiler at [`NEW_OIL_BOILER_EFFICIENCY`].
pub fn new_oil_boiler(input: &SupplyInput) -> SupplyEnergy {
    fuel_boiler(input.load_kw, NEW_OIL_BOILER_EFFICIENCY)
}

/// Shared boiler formula: fuel input is the load scaled by the fuel
/// efficiency; both electricity channels are zero.
fn fuel_boiler(load_kw: f32, efficiency: f32) -> SupplyEnergy {
    SupplyEnergy {
        fossil_fuel_in_kw: Some(load_kw / efficiency),
        electricity_in_kw: Some(0.0),
        electricity_out_kw: Some(0.0),
        cop: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heating(load_kw: f32) -> SupplyInput {
        SupplyInput::for_heating(load_kw, 10.0, 35.0)
    }

    #[test]
    fn old_boiler_63_kw_load_needs_100_kw_fuel() {
        let energy = old_oil_boiler(&heating(63.0));
        let fossil = energy.fossil_fuel_in_kw.unwrap();
        assert!((fossil - 100.0).abs() < 1e-3, "got {fossil}");
        assert_eq!(energy.electricity_in_kw, Some(0.0));
        assert_eq!(energy.electricity_out_kw, Some(0.0));
        assert!(energy.cop.is_none());
    }

    #[test]
    fn medium_boiler_uses_declared_efficiency() {
        let energy = medium_oil_boiler(&heating(82.0));
        assert!((energy.fossil_fuel_in_kw.unwrap() - 100.0).abs() < 1e-3);
    }

    #[test]
    fn new_boiler_uses_declared_efficiency() {
        let energy = new_oil_boiler(&heating(98.0));
        assert!((energy.fossil_fuel_in_kw.unwrap() - 100.0).abs() < 1e-3);
    }

    #[test]
    fn energy_identity_fuel_times_efficiency_reproduces_load() {
        let load_kw = 17.3;
        for (model, efficiency) in [
            (
                old_oil_boiler as fn(&SupplyInput) -> SupplyEnergy,
                OLD_OIL_BOILER_EFFICIENCY,
            ),
            (medium_oil_boiler, MEDIUM_OIL_BOILER_EFFICIENCY),
            (new_oil_boiler, NEW_OIL_BOILER_EFFICIENCY),
        ] {
            let energy = model(&heating(load_kw));
            let recovered = energy.fossil_fuel_in_kw.unwrap() * efficiency;
            assert!(
                (recovered - load_kw).abs() < 1e-4,
                "identity violated: {recovered} vs {load_kw}"
            );
        }
    }

    #[test]
    fn negative_load_propagates_unchecked() {
        let energy = old_oil_boiler(&heating(-63.0));
        assert!((energy.fossil_fuel_in_kw.unwrap() + 100.0).abs() < 1e-3);
    }
}
