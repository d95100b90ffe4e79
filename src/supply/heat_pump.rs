//! Air- and water-source heat pump models.
//!
//! COP values come from empirical quadratic regressions in the driving
//! temperature difference between the required supply temperature and the
//! heat source/sink, fitted to manufacturer data.

use crate::supply::types::{InvalidDemandState, SupplyEnergy, SupplyInput};

/// Quadratic empirical COP regression: `offset − slope·ΔT + curvature·ΔT²`.
#[derive(Debug, Clone, Copy)]
pub struct CopCurve {
    /// COP at zero driving temperature difference.
    pub offset: f32,
    /// Linear decay per kelvin of driving temperature difference.
    pub slope: f32,
    /// Quadratic correction per kelvin squared.
    pub curvature: f32,
}

impl CopCurve {
    /// Evaluates the regression at the given driving temperature difference.
    ///
    /// There is no upper clamp: callers clamp the temperature difference,
    /// not the COP.
    pub fn at(&self, delta_t_k: f32) -> f32 {
        self.offset - self.slope * delta_t_k + self.curvature * delta_t_k * delta_t_k
    }
}

/// Regression fitted to air-source manufacturer data.
pub const AIR_SOURCE_COP: CopCurve = CopCurve {
    offset: 6.81,
    slope: 0.121,
    curvature: 0.000_630,
};

/// Regression fitted to ground-water manufacturer data.
pub const WATER_SOURCE_COP: CopCurve = CopCurve {
    offset: 8.77,
    slope: 0.150,
    curvature: 0.000_734,
};

/// Ground-water reservoir temperature assumed for heating (°C).
pub const WATER_RESERVOIR_HEATING_C: f32 = 7.0;

/// Ground-water reservoir temperature assumed for cooling (°C).
pub const WATER_RESERVOIR_COOLING_C: f32 = 12.0;

/// Air-water heat pump using the outdoor air as reservoir.
///
/// The driving temperature difference is floor-clamped at zero: a supply
/// temperature below the source (or above the sink) counts as zero, never
/// as an amplified COP.
///
/// # Errors
///
/// Returns [`InvalidDemandState`] when neither demand flag is set.
pub fn air_source(input: &SupplyInput) -> Result<SupplyEnergy, InvalidDemandState> {
    let delta_t_k = if input.has_heating_demand {
        (input.heating_supply_temp_c - input.t_out_c).max(0.0)
    } else if input.has_cooling_demand {
        (input.t_out_c - input.cooling_supply_temp_c).max(0.0)
    } else {
        return Err(InvalidDemandState {
            system: "air-source heat pump",
        });
    };
    Ok(heat_pump_energy(input.load_kw, AIR_SOURCE_COP.at(delta_t_k)))
}

/// Ground-water heat pump with fixed reservoir temperatures
/// ([`WATER_RESERVOIR_HEATING_C`] heating, [`WATER_RESERVOIR_COOLING_C`]
/// cooling); the outdoor temperature is never read.
///
/// Unlike [`air_source`], a call with neither demand flag set does not
/// fail: it silently returns a result with every channel unset. The
/// asymmetry between the two models is documented in DESIGN.md.
pub fn water_source(input: &SupplyInput) -> SupplyEnergy {
    let delta_t_k = if input.has_heating_demand {
        (input.heating_supply_temp_c - WATER_RESERVOIR_HEATING_C).max(0.0)
    } else if input.has_cooling_demand {
        (WATER_RESERVOIR_COOLING_C - input.cooling_supply_temp_c).max(0.0)
    } else {
        return SupplyEnergy::unset();
    };
    heat_pump_energy(input.load_kw, WATER_SOURCE_COP.at(delta_t_k))
}

fn heat_pump_energy(load_kw: f32, cop: f32) -> SupplyEnergy {
    SupplyEnergy {
        fossil_fuel_in_kw: Some(0.0),
        electricity_in_kw: Some(load_kw / cop),
        electricity_out_kw: Some(0.0),
        cop: Some(cop),
    }
}
