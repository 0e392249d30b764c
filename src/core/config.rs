//! Runner tuning configuration.
//!
//! `RunnerConfig::default()` is the default tuning. A JSON file can
//! override any subset of fields; missing fields keep their defaults.

use super::constants::*;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a user-supplied configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// All gameplay and frame-pacing parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Vertical acceleration (negative = downward), NDC units/s².
    pub gravity: f64,
    /// Upward velocity set on takeoff, NDC units/s.
    pub jump_impulse: f64,

    /// Spawn interval at score 0, seconds.
    pub base_spawn_interval: f64,
    /// Interval reduction per point of score, seconds.
    pub spawn_interval_score_factor: f64,
    /// Cap on the total interval reduction, seconds.
    pub max_spawn_interval_reduction: f64,

    /// Obstacle speed at score 0, NDC units/s.
    pub base_obstacle_speed: f64,
    /// Speed gain per point of score. Uncapped.
    pub obstacle_speed_score_factor: f64,

    pub obstacle_spawn_x: f64,
    pub obstacle_width: f64,
    /// Trailing edge crossing this x awards a point.
    pub passed_threshold_x: f64,
    /// Trailing edge crossing this x retires the obstacle.
    pub removal_threshold_x: f64,

    /// Day/night flips every this many points.
    pub night_mode_threshold: u32,

    /// Largest dt handed to the simulation in one frame, seconds.
    pub max_frame_dt: f64,
    /// Frame pacing target, milliseconds.
    pub target_frame_ms: u64,
    /// Leg pose alternations per second while grounded.
    pub leg_animation_hz: f64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            base_spawn_interval: BASE_SPAWN_INTERVAL_SECONDS,
            spawn_interval_score_factor: SPAWN_INTERVAL_SCORE_FACTOR,
            max_spawn_interval_reduction: MAX_SPAWN_INTERVAL_REDUCTION,
            base_obstacle_speed: BASE_OBSTACLE_SPEED,
            obstacle_speed_score_factor: OBSTACLE_SPEED_SCORE_FACTOR,
            obstacle_spawn_x: OBSTACLE_SPAWN_X,
            obstacle_width: OBSTACLE_WIDTH,
            passed_threshold_x: PASSED_THRESHOLD_X,
            removal_threshold_x: REMOVAL_THRESHOLD_X,
            night_mode_threshold: NIGHT_MODE_THRESHOLD,
            max_frame_dt: MAX_FRAME_DT_SECONDS,
            target_frame_ms: TARGET_FRAME_MS,
            leg_animation_hz: LEG_ANIMATION_HZ,
        }
    }
}

impl RunnerConfig {
    /// Load a config file, filling unspecified fields from the defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would break the simulation's invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));

        if self.gravity >= 0.0 {
            return invalid("gravity must be negative");
        }
        if self.jump_impulse <= 0.0 {
            return invalid("jump_impulse must be positive");
        }
        if self.base_spawn_interval <= 0.0 {
            return invalid("base_spawn_interval must be positive");
        }
        if self.spawn_interval_score_factor < 0.0 || self.max_spawn_interval_reduction < 0.0 {
            return invalid("spawn interval reduction must not be negative");
        }
        if self.max_spawn_interval_reduction >= self.base_spawn_interval {
            return invalid("max_spawn_interval_reduction must leave a positive interval");
        }
        if self.base_obstacle_speed <= 0.0 || self.obstacle_speed_score_factor <= 0.0 {
            return invalid("obstacle speed and its score factor must be positive");
        }
        if self.obstacle_width <= 0.0 {
            return invalid("obstacle_width must be positive");
        }
        if self.passed_threshold_x <= self.removal_threshold_x {
            return invalid("passed_threshold_x must lie ahead of removal_threshold_x");
        }
        if self.night_mode_threshold == 0 {
            return invalid("night_mode_threshold must be at least 1");
        }
        if self.max_frame_dt <= 0.0 {
            return invalid("max_frame_dt must be positive");
        }
        if self.leg_animation_hz <= 0.0 {
            return invalid("leg_animation_hz must be positive");
        }
        Ok(())
    }

    /// Floor of the spawn interval, reached once the reduction saturates.
    pub fn min_spawn_interval(&self) -> f64 {
        self.base_spawn_interval - self.max_spawn_interval_reduction
    }
}
