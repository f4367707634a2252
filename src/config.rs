use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::{centered_block, BoundaryPolicy, Grid2, RelaxationScheme, SimParams, SimState};

pub const DEFAULT_CONFIG_PATH: &str = "grid_smoke.yaml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub physics: PhysicsConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub size: usize,
    pub gravity: f32,
    pub damping: f32,
    pub pressure_iters: usize,
    pub relaxation: RelaxationScheme,
    pub boundary: BoundaryPolicy,
    pub side_walls: bool,
    pub seed_size: usize,
    pub seed_value: f32,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub fps: u32,
    /// Fixed simulated step; wall-clock frame time is used when absent.
    pub fixed_dt: Option<f32>,
    /// Frames to run before exiting; 0 runs until the process is stopped.
    pub frames: u64,
    /// Print an ASCII frame every N frames; 0 disables the preview.
    pub preview_every: u64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        let sim = SimParams::default();
        Self {
            size: 16,
            gravity: sim.gravity,
            damping: sim.damping,
            pressure_iters: sim.pressure_iters,
            relaxation: sim.relaxation,
            boundary: sim.boundary,
            side_walls: sim.side_walls,
            seed_size: 6,
            seed_value: 1.0,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            fps: 60,
            fixed_dt: None,
            frames: 0,
            preview_every: 0,
        }
    }
}

impl Config {
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::info!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let physics = &self.physics;
        if physics.size < 3 {
            return Err(ConfigError::Invalid(format!(
                "physics.size must be at least 3, got {}",
                physics.size
            )));
        }
        if !(physics.damping > 0.0 && physics.damping <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "physics.damping must be in (0, 1], got {}",
                physics.damping
            )));
        }
        if !physics.gravity.is_finite() {
            return Err(ConfigError::Invalid("physics.gravity must be finite".into()));
        }
        if physics.seed_size > physics.size {
            return Err(ConfigError::Invalid(format!(
                "physics.seed_size {} exceeds grid size {}",
                physics.seed_size, physics.size
            )));
        }
        if !(physics.seed_value >= 0.0 && physics.seed_value.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "physics.seed_value must be finite and non-negative, got {}",
                physics.seed_value
            )));
        }
        if self.display.fps == 0 {
            return Err(ConfigError::Invalid("display.fps must be > 0".into()));
        }
        if let Some(dt) = self.display.fixed_dt {
            if !(dt > 0.0 && dt.is_finite()) {
                return Err(ConfigError::Invalid(format!(
                    "display.fixed_dt must be positive, got {dt}"
                )));
            }
        }
        Ok(())
    }

    pub fn grid(&self) -> Grid2 {
        Grid2::new(self.physics.size)
    }

    /// Nominal frame length in seconds.
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.display.fps as f32
    }

    pub fn sim_params(&self, dt: f32) -> SimParams {
        SimParams {
            dt,
            gravity: self.physics.gravity,
            damping: self.physics.damping,
            pressure_iters: self.physics.pressure_iters,
            relaxation: self.physics.relaxation,
            boundary: self.physics.boundary,
            side_walls: self.physics.side_walls,
        }
    }

    pub fn initial_state(&self) -> SimState {
        let density = centered_block(self.grid(), self.physics.seed_size, self.physics.seed_value);
        SimState::with_density(density)
    }
}
