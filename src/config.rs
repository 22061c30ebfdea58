//! Simulation settings.
//!
//! Settings serialize to JSON so a run can be reproduced from a file:
//!
//! ```json
//! { "particle_count": 5000, "gravity": 9.81, "seed": 42 }
//! ```
//!
//! Any field left out takes its default.

use crate::error::ConfigError;
use crate::gravity::{GravityStep, MARS_GRAVITY, RESPAWN_SPEED};
use crate::particle::MAX_PARTICLES;
use crate::spawn::{Spawner, SIZE_SCALE};
use crate::time::DEFAULT_MAX_DELTA;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Window settings for the viewer.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "marsdust".into(),
            width: 1200,
            height: 1200,
        }
    }
}

/// Complete simulation configuration.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimConfig {
    pub particle_count: usize,
    /// Sizes are drawn in `[0, size_scale)`.
    pub size_scale: f32,
    /// Gravity strength in units per second squared.
    pub gravity: f32,
    /// Upper bound of each respawn velocity component.
    pub respawn_speed: f32,
    /// Seed for the random source. `None` seeds from entropy.
    pub seed: Option<u64>,
    pub window: WindowConfig,
    /// Background RGB.
    pub clear_color: [f64; 3],
    /// Constant frame delta in seconds, for reproducible runs.
    pub fixed_delta: Option<f32>,
    /// Largest frame delta fed to the simulation.
    pub max_delta: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            particle_count: 1000,
            size_scale: SIZE_SCALE,
            gravity: MARS_GRAVITY,
            respawn_speed: RESPAWN_SPEED,
            seed: None,
            window: WindowConfig::default(),
            clear_color: [0.1, 0.1, 0.1],
            fixed_delta: None,
            max_delta: DEFAULT_MAX_DELTA,
        }
    }
}

impl SimConfig {
    /// Load and validate a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Save the configuration as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Reject settings that would break the simulation invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count > MAX_PARTICLES {
            return Err(ConfigError::Invalid(format!(
                "particle_count must be at most {}, got {}",
                MAX_PARTICLES, self.particle_count
            )));
        }
        if !(self.size_scale.is_finite() && self.size_scale > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "size_scale must be positive, got {}",
                self.size_scale
            )));
        }
        if !self.gravity.is_finite() {
            return Err(ConfigError::Invalid("gravity must be finite".into()));
        }
        if !(self.respawn_speed.is_finite() && self.respawn_speed >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "respawn_speed must be non-negative, got {}",
                self.respawn_speed
            )));
        }
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window must be at least 1x1, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if let Some(dt) = self.fixed_delta {
            if !(dt.is_finite() && dt >= 0.0) {
                return Err(ConfigError::Invalid(format!("fixed_delta must be non-negative, got {dt}")));
            }
        }
        if !(self.max_delta.is_finite() && self.max_delta > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "max_delta must be positive, got {}",
                self.max_delta
            )));
        }
        Ok(())
    }

    pub fn spawner(&self) -> Spawner {
        Spawner::new(self.size_scale)
    }

    pub fn gravity_step(&self) -> GravityStep {
        GravityStep::new(self.gravity).with_respawn_speed(self.respawn_speed)
    }
}
