//! Runner state machine: Running ⇄ GameOver.

use super::physics::{advance, collides};
use super::spawner::{self, advance_obstacles, obstacle_speed};
use super::types::{GameState, Phase};
use crate::input::InputState;

/// Everything that happened during one tick, for logging and the UI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickEvents {
    pub spawned: bool,
    pub scored: u32,
    pub removed: usize,
    pub collided: bool,
    pub restarted: bool,
    pub night_changed: bool,
}

/// Night for odd-numbered blocks of `threshold` points.
pub fn night_mode_for(score: u32, threshold: u32) -> bool {
    debug_assert!(threshold > 0, "night threshold must be positive");
    (score / threshold) % 2 == 1
}

/// Advance the game by `dt` seconds with this frame's input.
///
/// While running: physics, spawn, scroll/score/retire, collision, day/night.
/// While over: only a restart is honored; everything else stays frozen.
/// Quit is not handled here.
pub fn tick_game(game: &mut GameState, input: &InputState, dt: f64) -> TickEvents {
    let mut events = TickEvents::default();

    if game.phase == Phase::GameOver {
        if input.restart {
            events.night_changed = game.night_mode;
            game.reset();
            events.restarted = true;
        }
        return events;
    }

    let config = &game.config;

    // 1. Character
    advance(
        &mut game.character,
        dt,
        config.gravity,
        config.jump_impulse,
        input.jump,
    );

    // 2. Spawn
    let spawn = spawner::tick(game.spawn_timer, dt, game.score, config);
    game.spawn_timer = spawn.spawn_timer;
    if let Some(obstacle) = spawn.spawned {
        game.obstacles.push(obstacle);
        events.spawned = true;
    }

    // 3. Scroll, score, retire
    let speed = obstacle_speed(game.score, config);
    let scroll = advance_obstacles(&game.obstacles, speed, dt, config);
    game.obstacles = scroll.obstacles;
    game.score = game.score.saturating_add(scroll.newly_scored);
    events.scored = scroll.newly_scored;
    events.removed = scroll.removed;

    // 4. Collision
    if game
        .obstacles
        .iter()
        .any(|obstacle| collides(&game.character, obstacle))
    {
        game.phase = Phase::GameOver;
        events.collided = true;
    }

    // 5. Day/night
    let night = night_mode_for(game.score, game.config.night_mode_threshold);
    events.night_changed = night != game.night_mode;
    game.night_mode = night;

    events
}
