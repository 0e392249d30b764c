//! Dino Runner data structures.
//!
//! An endless runner: the character stays in place near the left edge while
//! obstacles scroll in from the right. Everything the simulation mutates lives
//! in one owned `GameState`.

use crate::core::config::RunnerConfig;

/// The player-controlled runner.
///
/// `offset` is the height above the ground line. A grounded character always
/// has `offset == 0.0` and `velocity == 0.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Character {
    pub offset: f64,
    /// Vertical velocity (positive = upward).
    pub velocity: f64,
    pub grounded: bool,
}

impl Character {
    pub fn new() -> Self {
        Self {
            offset: 0.0,
            velocity: 0.0,
            grounded: true,
        }
    }
}

impl Default for Character {
    fn default() -> Self {
        Self::new()
    }
}

/// A single obstacle in the world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    /// Center x in NDC. Decreases as the world scrolls.
    pub x: f64,
    pub width: f64,
    /// Set once, when the trailing edge first crosses the passed threshold.
    pub scored: bool,
}

impl Obstacle {
    pub fn new(x: f64, width: f64) -> Self {
        Self {
            x,
            width,
            scored: false,
        }
    }

    /// Right-hand edge; the last part of the obstacle to pass the character.
    pub fn trailing_edge(&self) -> f64 {
        self.x + self.width * 0.5
    }
}

/// Whether the run is live or waiting for a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    GameOver,
}

/// Authoritative game state, owned by the frame loop.
#[derive(Debug, Clone)]
pub struct GameState {
    pub character: Character,
    /// Spawn order, which is also left-to-right order.
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    pub night_mode: bool,
    pub phase: Phase,
    /// Seconds since the last spawn.
    pub spawn_timer: f64,
    pub config: RunnerConfig,
}

impl GameState {
    pub fn new(config: RunnerConfig) -> Self {
        debug_assert!(
            config.validate().is_ok(),
            "GameState built from an invalid config"
        );
        Self {
            character: Character::new(),
            obstacles: Vec::new(),
            score: 0,
            night_mode: false,
            phase: Phase::Running,
            spawn_timer: 0.0,
            config,
        }
    }

    /// Back to a fresh run. Configuration is kept.
    pub fn reset(&mut self) {
        self.character = Character::new();
        self.obstacles.clear();
        self.score = 0;
        self.night_mode = false;
        self.phase = Phase::Running;
        self.spawn_timer = 0.0;
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(RunnerConfig::default())
    }
}
