//! Common input and result types shared by all supply system models.

use std::fmt;

/// Operating conditions for one supply system evaluation.
///
/// Holds the thermal load of the current timestep together with the
/// temperatures and demand flags the equipment models read. The demand
/// flags are mutually exclusive by contract: callers assert at most one
/// of them per evaluation.
///
/// The formulas are unit-agnostic ratios, so every computed output shares
/// whatever unit the caller supplies `load_kw` in. Field names carry the
/// crate-wide `_kw` suffix; unit consistency is the caller's
/// responsibility.
#[derive(Debug, Clone, Copy)]
pub struct SupplyInput {
    /// Thermal energy demand of the building at this timestep (kW).
    pub load_kw: f32,

    /// Outdoor air temperature (°C).
    pub t_out_c: f32,

    /// Temperature required by the heat emission system (°C).
    pub heating_supply_temp_c: f32,

    /// Temperature required by the cooling emission system (°C).
    pub cooling_supply_temp_c: f32,

    /// Whether the building has a heating demand at this timestep.
    pub has_heating_demand: bool,

    /// Whether the building has a cooling demand at this timestep.
    pub has_cooling_demand: bool,
}

impl SupplyInput {
    /// Creates a new input record from the six operating conditions.
    pub fn new(
        load_kw: f32,
        t_out_c: f32,
        heating_supply_temp_c: f32,
        cooling_supply_temp_c: f32,
        has_heating_demand: bool,
        has_cooling_demand: bool,
    ) -> Self {
        Self {
            load_kw,
            t_out_c,
            heating_supply_temp_c,
            cooling_supply_temp_c,
            has_heating_demand,
            has_cooling_demand,
        }
    }

    /// Creates an input for a heating timestep.
    ///
    /// The cooling circuit temperature is not read in this mode and is
    /// filled with the outdoor temperature.
    pub fn for_heating(load_kw: f32, t_out_c: f32, supply_temp_c: f32) -> Self {
        Self {
            load_kw,
            t_out_c,
            heating_supply_temp_c: supply_temp_c,
            cooling_supply_temp_c: t_out_c,
            has_heating_demand: true,
            has_cooling_demand: false,
        }
    }

    /// Creates an input for a cooling timestep.
    ///
    /// The heating circuit temperature is not read in this mode and is
    /// filled with the outdoor temperature.
    pub fn for_cooling(load_kw: f32, t_out_c: f32, supply_temp_c: f32) -> Self {
        Self {
            load_kw,
            t_out_c,
            heating_supply_temp_c: t_out_c,
            cooling_supply_temp_c: supply_temp_c,
            has_heating_demand: false,
            has_cooling_demand: true,
        }
    }
}

/// Energy flows computed for one timestep, in the same unit as the load.
///
/// Each channel is an `Option`: `None` means the channel was not computed
/// for this equipment kind, `Some(0.0)` means it was computed as zero.
/// Every model explicitly zeroes the channels it does not use; `cop` is
/// populated only by heat pumps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SupplyEnergy {
    /// Fuel energy consumed by combustion-based equipment (kW).
    pub fossil_fuel_in_kw: Option<f32>,

    /// Electricity consumed (kW).
    pub electricity_in_kw: Option<f32>,

    /// Byproduct electricity generated by cogeneration equipment (kW).
    pub electricity_out_kw: Option<f32>,

    /// Coefficient of performance (dimensionless), heat pumps only.
    pub cop: Option<f32>,
}

impl SupplyEnergy {
    /// Returns a result with every channel unset.
    pub fn unset() -> Self {
        Self {
            fossil_fuel_in_kw: None,
            electricity_in_kw: None,
            electricity_out_kw: None,
            cop: None,
        }
    }
}

impl fmt::Display for SupplyEnergy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn channel(value: Option<f32>) -> String {
            match value {
                Some(v) => format!("{v:.2}"),
                None => "-".to_string(),
            }
        }
        write!(
            f,
            "fossil_in={}  elec_in={}  elec_out={}  cop={}",
            channel(self.fossil_fuel_in_kw),
            channel(self.electricity_in_kw),
            channel(self.electricity_out_kw),
            channel(self.cop),
        )
    }
}

/// Contract violation: a mode-aware supply system was invoked with
/// neither the heating nor the cooling demand flag set.
///
/// Raised only by the air-source heat pump model; it propagates to the
/// caller and is not recovered internally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDemandState {
    /// Name of the supply system that rejected the call.
    pub system: &'static str,
}

impl fmt::Display for InvalidDemandState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} invoked although there is no heating/cooling demand",
            self.system
        )
    }
}

impl std::error::Error for InvalidDemandState {}
