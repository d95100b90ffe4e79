//! Supply system models for heating and cooling equipment.
//!
//! Each equipment kind is a stateless pure function of a [`SupplyInput`];
//! [`compute_supply`] dispatches to the model selected by a
//! [`SupplyKind`]. There is no shared mutable state: every call allocates
//! a fresh [`SupplyEnergy`], so the models can be invoked concurrently
//! without synchronization.

/// Oil-fired boiler models.
pub mod boiler;
/// Combined heat and power model.
pub mod chp;
/// Electric resistance models.
pub mod electric;
/// Air- and water-source heat pump models.
pub mod heat_pump;
pub mod types;

// Re-export the main types for convenience
pub use types::InvalidDemandState;
pub use types::SupplyEnergy;
pub use types::SupplyInput;

/// Closed set of supported supply equipment models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupplyKind {
    /// Old oil boiler, 63% fuel efficiency.
    OldOilBoiler,
    /// Classic oil boiler, 82% fuel efficiency.
    MediumOilBoiler,
    /// Condensing oil boiler, 98% fuel efficiency.
    NewOilBoiler,
    /// Electric resistance heating, 100% conversion.
    ElectricHeating,
    /// Direct electric heater, validation reference model.
    DirectHeater,
    /// Direct electric cooler, validation reference model.
    DirectCooler,
    /// Cogeneration unit with byproduct electricity.
    CombinedHeatAndPower,
    /// Air-water heat pump, outdoor air as reservoir.
    AirSourceHeatPump,
    /// Ground-water heat pump with fixed reservoir temperatures.
    WaterSourceHeatPump,
}

impl SupplyKind {
    /// All equipment kinds, in declaration order.
    pub const ALL: &[SupplyKind] = &[
        SupplyKind::OldOilBoiler,
        SupplyKind::MediumOilBoiler,
        SupplyKind::NewOilBoiler,
        SupplyKind::ElectricHeating,
        SupplyKind::DirectHeater,
        SupplyKind::DirectCooler,
        SupplyKind::CombinedHeatAndPower,
        SupplyKind::AirSourceHeatPump,
        SupplyKind::WaterSourceHeatPump,
    ];

    /// Configuration names accepted by [`SupplyKind::from_name`].
    pub const NAMES: &[&str] = &[
        "old_oil_boiler",
        "medium_oil_boiler",
        "new_oil_boiler",
        "electric_heating",
        "direct_heater",
        "direct_cooler",
        "combined_heat_and_power",
        "air_source_heat_pump",
        "water_source_heat_pump",
    ];

    /// Returns the configuration name of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            SupplyKind::OldOilBoiler => "old_oil_boiler",
            SupplyKind::MediumOilBoiler => "medium_oil_boiler",
            SupplyKind::NewOilBoiler => "new_oil_boiler",
            SupplyKind::ElectricHeating => "electric_heating",
            SupplyKind::DirectHeater => "direct_heater",
            SupplyKind::DirectCooler => "direct_cooler",
            SupplyKind::CombinedHeatAndPower => "combined_heat_and_power",
            SupplyKind::AirSourceHeatPump => "air_source_heat_pump",
            SupplyKind::WaterSourceHeatPump => "water_source_heat_pump",
        }
    }

    /// Resolves a configuration name to a kind.
    pub fn from_name(name: &str) -> Option<SupplyKind> {
        match name {
            "old_oil_boiler" => Some(SupplyKind::OldOilBoiler),
            "medium_oil_boiler" => Some(SupplyKind::MediumOilBoiler),
            "new_oil_boiler" => Some(SupplyKind::NewOilBoiler),
            "electric_heating" => Some(SupplyKind::ElectricHeating),
            "direct_heater" => Some(SupplyKind::DirectHeater),
            "direct_cooler" => Some(SupplyKind::DirectCooler),
            "combined_heat_and_power" => Some(SupplyKind::CombinedHeatAndPower),
            "air_source_heat_pump" => Some(SupplyKind::AirSourceHeatPump),
            "water_source_heat_pump" => Some(SupplyKind::WaterSourceHeatPump),
            _ => None,
        }
    }
}

/// Computes the energy demand of the selected supply system for one
/// timestep.
///
/// This is the single entry point over the model formula table: callers
/// pick a kind per equipment type, build the input, and receive a fresh
/// result they own.
///
/// # Examples
///
/// ```
/// use supply_sim::supply::{SupplyInput, SupplyKind, compute_supply};
///
/// let input = SupplyInput::for_heating(63.0, 10.0, 35.0);
/// let energy = compute_supply(SupplyKind::OldOilBoiler, &input).unwrap();
/// assert!((energy.fossil_fuel_in_kw.unwrap() - 100.0).abs() < 1e-3);
/// ```
///
/// # Errors
///
/// Returns [`InvalidDemandState`] when the air-source heat pump is
/// invoked with neither demand flag set. No other kind fails.
pub fn compute_supply(
    kind: SupplyKind,
    input: &SupplyInput,
) -> Result<SupplyEnergy, InvalidDemandState> {
    match kind {
        SupplyKind::OldOilBoiler => Ok(boiler::old_oil_boiler(input)),
        SupplyKind::MediumOilBoiler => Ok(boiler::medium_oil_boiler(input)),
        SupplyKind::NewOilBoiler => Ok(boiler::new_oil_boiler(input)),
        SupplyKind::ElectricHeating => Ok(electric::electric_heating(input)),
        SupplyKind::DirectHeater => Ok(electric::direct_heater(input)),
        SupplyKind::DirectCooler => Ok(electric::direct_cooler(input)),
        SupplyKind::CombinedHeatAndPower => Ok(chp::combined_heat_and_power(input)),
        SupplyKind::AirSourceHeatPump => heat_pump::air_source(input),
        SupplyKind::WaterSourceHeatPump => Ok(heat_pump::water_source(input)),
    }
}
