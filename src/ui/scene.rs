//! Dino Runner scene composition.
//!
//! Turns a `GameState` into draw calls: background, ground strip, the
//! character as a stack of blocks, each obstacle as a two-piece cactus, and
//! the status line. The leg animation is derived from wall-clock time here and
//! never stored in the game state.

use super::palette::palette_for;
use super::renderer::Renderer;
use crate::core::constants::{STATUS_TEXT_X, STATUS_TEXT_Y};
use crate::game::types::{GameState, Obstacle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// `(offset_x, offset_y, scale_x, scale_y)` relative to the ground-level pose.
type Block = (f64, f64, f64, f64);

const GROUND: Block = (0.0, -0.5, 2.0, 0.05);

const CHARACTER_BODY: [Block; 8] = [
    (-0.5, -0.43, 0.08, 0.08),      // body
    (-0.54, -0.46, 0.04, 0.05),     // body extension
    (-0.42, -0.35, 0.006, 0.04),    // head tip
    (-0.435, -0.35, 0.015, 0.045),  // head middle
    (-0.455, -0.35, 0.025, 0.05),   // head base
    (-0.435, -0.345, 0.006, 0.006), // eye
    (-0.575, -0.46, 0.025, 0.018),  // tail
    (-0.47, -0.42, 0.008, 0.025),   // arm
];

const LEGS_FORWARD: [Block; 2] = [(-0.49, -0.50, 0.015, 0.04), (-0.51, -0.505, 0.015, 0.035)];
const LEGS_BACK: [Block; 2] = [(-0.51, -0.50, 0.015, 0.04), (-0.49, -0.505, 0.015, 0.035)];
const LEGS_JUMPING: [Block; 2] = [(-0.49, -0.50, 0.015, 0.04), (-0.51, -0.50, 0.015, 0.04)];

const STAR_COUNT: usize = 24;
const STAR_SEED: u64 = 0x5EED_D1A0;
const STAR_SIZE: f64 = 0.01;

/// Which leg frame to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegPose {
    Forward,
    Back,
    Jumping,
}

impl LegPose {
    fn blocks(self) -> &'static [Block; 2] {
        match self {
            LegPose::Forward => &LEGS_FORWARD,
            LegPose::Back => &LEGS_BACK,
            LegPose::Jumping => &LEGS_JUMPING,
        }
    }
}

/// Two-phase run cycle while grounded, fixed pose in the air.
pub fn leg_pose(grounded: bool, now: f64, rate_hz: f64) -> LegPose {
    if !grounded {
        return LegPose::Jumping;
    }
    let phase = (now * rate_hz).floor() as i64;
    if phase.rem_euclid(2) == 0 {
        LegPose::Forward
    } else {
        LegPose::Back
    }
}

/// Status line for the current phase.
pub fn status_text(game: &GameState) -> String {
    if game.is_game_over() {
        format!("Game Over! Score: {} -Press R to restart", game.score)
    } else {
        format!("Score: {}", game.score)
    }
}

/// Static decoration plus the draw routine.
pub struct Scene {
    stars: Vec<(f64, f64)>,
}

impl Scene {
    pub fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(STAR_SEED);
        let stars = (0..STAR_COUNT)
            .map(|_| (rng.gen_range(-0.95..0.95), rng.gen_range(0.0..0.9)))
            .collect();
        Self { stars }
    }

    /// Issue every draw call for one frame.
    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R, game: &GameState, legs: LegPose) {
        let palette = palette_for(game.night_mode);

        renderer.clear(palette.background);

        if let Some(star) = palette.stars {
            for &(x, y) in &self.stars {
                renderer.draw_rect(x, y, STAR_SIZE, STAR_SIZE, star);
            }
        }

        let (gx, gy, gw, gh) = GROUND;
        renderer.draw_rect(gx, gy, gw, gh, palette.ground);

        let lift = game.character.offset;
        for &(x, y, w, h) in CHARACTER_BODY.iter().chain(legs.blocks().iter()) {
            renderer.draw_rect(x, y + lift, w, h, palette.sprite);
        }

        for obstacle in &game.obstacles {
            for (x, y, w, h) in obstacle_blocks(obstacle) {
                renderer.draw_rect(x, y, w, h, palette.sprite);
            }
        }

        renderer.draw_text(STATUS_TEXT_X, STATUS_TEXT_Y, &status_text(game), palette.text);
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

/// Cactus trunk and a short arm.
fn obstacle_blocks(obstacle: &Obstacle) -> [Block; 2] {
    let w = obstacle.width;
    [
        (obstacle.x, -0.48, w * 0.6, 0.10),
        (obstacle.x + w * 0.22, -0.44, w * 0.3, 0.04),
    ]
}
