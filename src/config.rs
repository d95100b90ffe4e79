//! TOML-based plant configuration and preset definitions.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::supply::{SupplyInput, SupplyKind};

/// Top-level plant configuration parsed from TOML.
///
/// All fields have defaults matching the baseline plant. Load from TOML
/// with [`PlantConfig::from_toml_file`] or use [`PlantConfig::baseline`]
/// for the built-in default.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlantConfig {
    /// Heating supply system parameters.
    #[serde(default)]
    pub heating: HeatingConfig,
    /// Cooling supply system parameters.
    #[serde(default)]
    pub cooling: CoolingConfig,
}

/// Heating supply system parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeatingConfig {
    /// Supply system name, one of [`SupplyKind::NAMES`].
    pub system: String,
    /// Temperature required by the heat emission system (°C).
    pub supply_temperature_c: f32,
}

impl Default for HeatingConfig {
    fn default() -> Self {
        Self {
            system: "old_oil_boiler".to_string(),
            supply_temperature_c: 35.0,
        }
    }
}

/// Cooling supply system parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoolingConfig {
    /// Supply system name, one of [`SupplyKind::NAMES`].
    pub system: String,
    /// Temperature required by the cooling emission system (°C).
    pub supply_temperature_c: f32,
}

impl Default for CoolingConfig {
    fn default() -> Self {
        Self {
            system: "air_source_heat_pump".to_string(),
            supply_temperature_c: 15.0,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"heating.system"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} — {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

impl PlantConfig {
    /// Returns the baseline plant: old oil boiler heating, air-source
    /// heat pump cooling.
    pub fn baseline() -> Self {
        Self {
            heating: HeatingConfig::default(),
            cooling: CoolingConfig::default(),
        }
    }

    /// Returns the all-electric preset: air-source heat pumps on both
    /// circuits.
    pub fn all_electric() -> Self {
        Self {
            heating: HeatingConfig {
                system: "air_source_heat_pump".to_string(),
                ..HeatingConfig::default()
            },
            cooling: CoolingConfig::default(),
        }
    }

    /// Returns the cogeneration preset: CHP heating with a direct
    /// electric cooler.
    pub fn cogeneration() -> Self {
        Self {
            heating: HeatingConfig {
                system: "combined_heat_and_power".to_string(),
                ..HeatingConfig::default()
            },
            cooling: CoolingConfig {
                system: "direct_cooler".to_string(),
                ..CoolingConfig::default()
            },
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["baseline", "all_electric", "cogeneration"];

    /// Loads a plant from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "baseline" => Ok(Self::baseline()),
            "all_electric" => Ok(Self::all_electric()),
            "cogeneration" => Ok(Self::cogeneration()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a plant from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is
    /// invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "plant".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a plant from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown
    /// fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if SupplyKind::from_name(&self.heating.system).is_none() {
            errors.push(ConfigError {
                field: "heating.system".into(),
                message: format!(
                    "unknown system \"{}\", available: {}",
                    self.heating.system,
                    SupplyKind::NAMES.join(", ")
                ),
            });
        }
        if SupplyKind::from_name(&self.cooling.system).is_none() {
            errors.push(ConfigError {
                field: "cooling.system".into(),
                message: format!(
                    "unknown system \"{}\", available: {}",
                    self.cooling.system,
                    SupplyKind::NAMES.join(", ")
                ),
            });
        }
        if !self.heating.supply_temperature_c.is_finite() {
            errors.push(ConfigError {
                field: "heating.supply_temperature_c".into(),
                message: "must be finite".into(),
            });
        }
        if !self.cooling.supply_temperature_c.is_finite() {
            errors.push(ConfigError {
                field: "cooling.supply_temperature_c".into(),
                message: "must be finite".into(),
            });
        }

        errors
    }

    /// Resolves the configured heating system name to a kind.
    pub fn heating_kind(&self) -> Option<SupplyKind> {
        SupplyKind::from_name(&self.heating.system)
    }

    /// Resolves the configured cooling system name to a kind.
    pub fn cooling_kind(&self) -> Option<SupplyKind> {
        SupplyKind::from_name(&self.cooling.system)
    }

    /// Builds the supply input for a heating timestep using the
    /// configured emission temperatures.
    pub fn heating_input(&self, load_kw: f32, t_out_c: f32) -> SupplyInput {
        SupplyInput::new(
            load_kw,
            t_out_c,
            self.heating.supply_temperature_c,
            self.cooling.supply_temperature_c,
            true,
            false,
        )
    }

    /// Builds the supply input for a cooling timestep using the
    /// configured emission temperatures.
    pub fn cooling_input(&self, load_kw: f32, t_out_c: f32) -> SupplyInput {
        SupplyInput::new(
            load_kw,
            t_out_c,
            self.heating.supply_temperature_c,
            self.cooling.supply_temperature_c,
            false,
            true,
        )
    }
}
