use crate::grid::DEFAULT_DENSITY;
use crate::life_errors::{LifeError, LifeResult};
use log::warn;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable naming a JSON config file
pub const CONFIG_PATH_ENV: &str = "LIFE_CONFIG";

/// Runtime configuration for a simulation run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    pub display: DisplayConfig,
    pub simulation: SimulationConfig,
}

/// Display and pacing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Pause between frames (ms)
    pub frame_delay_ms: u64,
    /// Clear the whole screen before each frame instead of only resetting the cursor
    pub clear_each_frame: bool,
    /// Hide the cursor while the simulation runs
    pub hide_cursor: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            frame_delay_ms: 100,
            clear_each_frame: false,
            hide_cursor: true,
        }
    }
}

impl DisplayConfig {
    /// Get frame delay as Duration
    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }
}

/// Initial population configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Probability that a cell starts alive
    pub density: f64,
    /// Fixed seed for the process RNG; drawn from OS entropy when absent
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            density: DEFAULT_DENSITY,
            seed: None,
        }
    }
}

impl LifeConfig {
    /// Load configuration from file
    pub fn load_from_file(path: &str) -> LifeResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: LifeConfig = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file(&self, path: &str) -> LifeResult<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Load configuration from the process environment with fallback to defaults
    pub fn from_env() -> LifeResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from `lookup`, which maps variable names to values.
    /// A file named by `LIFE_CONFIG` is loaded first and individual variables
    /// override it.
    pub fn from_lookup<F>(lookup: F) -> LifeResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(CONFIG_PATH_ENV) {
            Some(path) => Self::load_from_file(&path)?,
            None => Self::default(),
        };

        if let Some(delay) = lookup("LIFE_FRAME_DELAY_MS") {
            match delay.parse::<u64>() {
                Ok(delay) => config.display.frame_delay_ms = delay,
                Err(_) => warn!("Ignoring LIFE_FRAME_DELAY_MS={:?}: not a number", delay),
            }
        }
        if let Some(clear) = lookup("LIFE_CLEAR_EACH_FRAME") {
            match clear.to_lowercase().parse::<bool>() {
                Ok(clear) => config.display.clear_each_frame = clear,
                Err(_) => warn!("Ignoring LIFE_CLEAR_EACH_FRAME={:?}: not true or false", clear),
            }
        }
        if let Some(density) = lookup("LIFE_DENSITY") {
            match density.parse::<f64>() {
                Ok(density) => config.simulation.density = density,
                Err(_) => warn!("Ignoring LIFE_DENSITY={:?}: not a number", density),
            }
        }
        if let Some(seed) = lookup("LIFE_SEED") {
            match seed.parse::<u64>() {
                Ok(seed) => config.simulation.seed = Some(seed),
                Err(_) => warn!("Ignoring LIFE_SEED={:?}: not a number", seed),
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> LifeResult<()> {
        let density = self.simulation.density;
        if !(0.0..=1.0).contains(&density) {
            return Err(LifeError::Config(format!(
                "density must be between 0 and 1, got {}",
                density
            )));
        }
        Ok(())
    }
}
