//! The per-frame driver: clock, input, state update, draw.
//!
//! Single-threaded and strictly ordered. The only exit is a Quit action.

use crate::core::clock::{Clock, FrameTimer};
use crate::core::config::RunnerConfig;
use crate::game::logic::{tick_game, TickEvents};
use crate::game::types::GameState;
use crate::input::InputSource;
use crate::ui::renderer::Renderer;
use crate::ui::scene::{leg_pose, Scene};
use log::{debug, info, trace};
use std::io;
use std::thread;
use std::time::{Duration, Instant};

/// Whether the loop should keep going after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Quit,
}

/// Owns the frame-to-frame bookkeeping that is not game state.
pub struct FrameLoop {
    timer: FrameTimer,
    scene: Scene,
    frame_count: u64,
    target_frame: Duration,
    leg_rate_hz: f64,
}

impl FrameLoop {
    pub fn new(config: &RunnerConfig) -> Self {
        Self {
            timer: FrameTimer::new(config.max_frame_dt),
            scene: Scene::new(),
            frame_count: 0,
            target_frame: Duration::from_millis(config.target_frame_ms),
            leg_rate_hz: config.leg_animation_hz,
        }
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Run one iteration. Quit is checked before the state is touched.
    pub fn run_frame<C, I, R>(
        &mut self,
        game: &mut GameState,
        clock: &C,
        input: &mut I,
        renderer: &mut R,
    ) -> io::Result<FrameOutcome>
    where
        C: Clock + ?Sized,
        I: InputSource + ?Sized,
        R: Renderer + ?Sized,
    {
        let now = clock.now();
        let dt = self.timer.delta(now);
        let pressed = input.sample()?;

        if pressed.quit {
            info!(
                "quit requested after {} frames (score {})",
                self.frame_count, game.score
            );
            return Ok(FrameOutcome::Quit);
        }

        let events = tick_game(game, &pressed, dt);
        self.log_events(game, &events);

        let legs = leg_pose(game.character.grounded, now, self.leg_rate_hz);
        renderer.begin_frame()?;
        self.scene.draw(renderer, game, legs);
        renderer.end_frame()?;

        self.frame_count += 1;
        Ok(FrameOutcome::Continue)
    }

    /// Loop until Quit, pacing frames to the configured target.
    pub fn run<C, I, R>(
        &mut self,
        game: &mut GameState,
        clock: &C,
        input: &mut I,
        renderer: &mut R,
    ) -> io::Result<()>
    where
        C: Clock + ?Sized,
        I: InputSource + ?Sized,
        R: Renderer + ?Sized,
    {
        loop {
            let start = Instant::now();
            if self.run_frame(game, clock, input, renderer)? == FrameOutcome::Quit {
                return Ok(());
            }
            if let Some(wait) = self.target_frame.checked_sub(start.elapsed()) {
                thread::sleep(wait);
            }
        }
    }

    fn log_events(&self, game: &GameState, events: &TickEvents) {
        if events.spawned {
            trace!("spawned obstacle ({} live)", game.obstacles.len());
        }
        if events.scored > 0 {
            debug!("score {}", game.score);
        }
        if events.night_changed {
            debug!(
                "switched to {} at score {}",
                if game.night_mode { "night" } else { "day" },
                game.score
            );
        }
        if events.collided {
            info!("game over with score {}", game.score);
        }
        if events.restarted {
            info!("restarted");
        }
    }
}
