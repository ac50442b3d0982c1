/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::info;
use serde::Deserialize;
use std::fs;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::error::ConfigError;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub building: BuildingConfig,
    pub simulation: SimulationConfig,
}

#[derive(Deserialize, Clone)]
#[serde(default)]
pub struct BuildingConfig {
    pub n_floors: u8,
    pub n_elevators: u8,
}

#[derive(Deserialize, Clone)]
#[serde(default)]
pub struct SimulationConfig {
    pub tick_interval_ms: u64,
}

impl Default for BuildingConfig {
    fn default() -> BuildingConfig {
        BuildingConfig {
            n_floors: 7,
            n_elevators: 3,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> SimulationConfig {
        SimulationConfig {
            tick_interval_ms: 1000,
        }
    }
}

impl Config {
    /// Checks the constraints the simulation core assumes but never enforces
    /// itself. Must be re-run after command line overrides are applied.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.building.n_floors < 2 {
            return Err(ConfigError::Invalid(
                "building.n_floors must be at least 2".into(),
            ));
        }
        if self.building.n_elevators < 1 {
            return Err(ConfigError::Invalid(
                "building.n_elevators must be at least 1".into(),
            ));
        }
        if self.simulation.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "simulation.tick_interval_ms must be non-zero".into(),
            ));
        }
        Ok(())
    }
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config(path: &str) -> Result<Config, ConfigError> {
    let config = match fs::read_to_string(path) {
        Ok(config_str) => toml::from_str(&config_str)?,
        Err(_) => {
            info!("no configuration file at {}, using default settings", path);
            Config::default()
        }
    };
    config.validate()?;
    Ok(config)
}

/***************************************/
/*             Unit tests              */
/***************************************/
