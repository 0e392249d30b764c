//! Obstacle spawning, scrolling, scoring, and retirement.
//!
//! Difficulty rises with score on two axes: obstacles arrive more often (down
//! to a floor) and move faster (without a ceiling).

use super::types::Obstacle;
use crate::core::config::RunnerConfig;
use crate::core::constants::SPAWN_TIMER_EPSILON;

/// Seconds that must elapse between spawns at the given score.
pub fn required_interval(score: u32, config: &RunnerConfig) -> f64 {
    let reduction = (config.spawn_interval_score_factor * score as f64)
        .min(config.max_spawn_interval_reduction);
    config.base_spawn_interval - reduction
}

/// Horizontal scroll speed at the given score, NDC units/s.
pub fn obstacle_speed(score: u32, config: &RunnerConfig) -> f64 {
    config.base_obstacle_speed + config.obstacle_speed_score_factor * score as f64
}

/// Result of one spawner step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnTick {
    pub spawn_timer: f64,
    pub spawned: Option<Obstacle>,
}

/// Accumulate `dt` and emit an obstacle once the interval has elapsed.
pub fn tick(spawn_timer: f64, dt: f64, score: u32, config: &RunnerConfig) -> SpawnTick {
    let timer = spawn_timer + dt;
    if timer + SPAWN_TIMER_EPSILON >= required_interval(score, config) {
        SpawnTick {
            spawn_timer: 0.0,
            spawned: Some(Obstacle::new(config.obstacle_spawn_x, config.obstacle_width)),
        }
    } else {
        SpawnTick {
            spawn_timer: timer,
            spawned: None,
        }
    }
}

/// Obstacles after one scroll step.
#[derive(Debug, Clone, Default)]
pub struct ScrollOutcome {
    /// Survivors, in their original order.
    pub obstacles: Vec<Obstacle>,
    /// Obstacles that crossed the passed threshold for the first time.
    pub newly_scored: u32,
    pub removed: usize,
}

/// Move every obstacle left by `speed * dt`, award passes, drop the ones that
/// have left the screen.
///
/// The input slice is never mutated; the surviving set is rebuilt in order.
/// Scoring is evaluated before removal, so an obstacle that crosses both
/// thresholds in one step still counts.
pub fn advance_obstacles(
    obstacles: &[Obstacle],
    speed: f64,
    dt: f64,
    config: &RunnerConfig,
) -> ScrollOutcome {
    debug_assert!(
        config.passed_threshold_x > config.removal_threshold_x,
        "passed threshold must precede removal"
    );

    let mut outcome = ScrollOutcome {
        obstacles: Vec::with_capacity(obstacles.len()),
        ..Default::default()
    };

    for obstacle in obstacles {
        let mut moved = Obstacle {
            x: obstacle.x - speed * dt,
            ..*obstacle
        };

        if !moved.scored && moved.trailing_edge() < config.passed_threshold_x {
            moved.scored = true;
            outcome.newly_scored += 1;
        }

        if is_off_screen(&moved, config) {
            outcome.removed += 1;
        } else {
            outcome.obstacles.push(moved);
        }
    }

    outcome
}

/// Removal predicate: trailing edge past the removal threshold.
pub fn is_off_screen(obstacle: &Obstacle, config: &RunnerConfig) -> bool {
    obstacle.trailing_edge() < config.removal_threshold_x
}
