//! Shared test fixtures for integration tests.

use supply_sim::config::PlantConfig;
use supply_sim::supply::SupplyInput;

/// Default plant configuration (old oil boiler heating, air-source heat
/// pump cooling, 35/15 °C supply temperatures).
pub fn default_config() -> PlantConfig {
    PlantConfig::baseline()
}

/// Canonical heating conditions: 10 kW load, 0 °C outdoors, 35 °C supply.
pub fn heating_input() -> SupplyInput {
    SupplyInput::for_heating(10.0, 0.0, 35.0)
}

/// Canonical cooling conditions: 10 kW load, 30 °C outdoors, 15 °C supply.
pub fn cooling_input() -> SupplyInput {
    SupplyInput::for_cooling(10.0, 30.0, 15.0)
}

/// Conditions with neither demand flag set (caller contract violation).
pub fn idle_input() -> SupplyInput {
    SupplyInput::new(10.0, 10.0, 35.0, 15.0, false, false)
}
