//! Vertical physics for the character and hitbox collision tests.

use super::types::{Character, Obstacle};
use crate::core::constants::{
    CHARACTER_HITBOX_HEIGHT, CHARACTER_HITBOX_LEFT, CHARACTER_HITBOX_RIGHT, GROUND_Y,
    OBSTACLE_HITBOX_BOTTOM, OBSTACLE_HITBOX_INSET, OBSTACLE_HITBOX_TOP,
};

/// Advance the character by `dt` seconds.
///
/// A jump request only matters while grounded: it sets the velocity to
/// `jump_impulse` for this step instead of applying gravity. Airborne
/// characters accelerate by `gravity`. Anything at or below the ground after
/// integration lands: offset 0, velocity 0, grounded.
pub fn advance(
    character: &mut Character,
    dt: f64,
    gravity: f64,
    jump_impulse: f64,
    jump_requested: bool,
) {
    debug_assert!(dt >= 0.0, "negative dt: {dt}");
    debug_assert!(gravity < 0.0, "gravity must pull down");

    if character.grounded {
        if jump_requested {
            character.velocity = jump_impulse;
            character.grounded = false;
        }
    } else {
        character.velocity += gravity * dt;
    }

    character.offset += character.velocity * dt;

    if character.offset <= 0.0 {
        character.offset = 0.0;
        character.velocity = 0.0;
        character.grounded = true;
    }
}

/// Axis-aligned rectangle in NDC.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl Hitbox {
    /// Strict overlap: touching edges do not count.
    pub fn overlaps(&self, other: &Hitbox) -> bool {
        self.right > other.left
            && self.left < other.right
            && self.top > other.bottom
            && self.bottom < other.top
    }
}

/// Collision box for the character; narrower and shorter than the sprite.
pub fn character_hitbox(character: &Character) -> Hitbox {
    let bottom = GROUND_Y + character.offset;
    Hitbox {
        left: CHARACTER_HITBOX_LEFT,
        right: CHARACTER_HITBOX_RIGHT,
        bottom,
        top: bottom + CHARACTER_HITBOX_HEIGHT,
    }
}

/// Collision box for an obstacle; inset horizontally and capped below the
/// drawn cactus top.
pub fn obstacle_hitbox(obstacle: &Obstacle) -> Hitbox {
    let half = obstacle.width * 0.5 * OBSTACLE_HITBOX_INSET;
    Hitbox {
        left: obstacle.x - half,
        right: obstacle.x + half,
        bottom: OBSTACLE_HITBOX_BOTTOM,
        top: OBSTACLE_HITBOX_TOP,
    }
}

pub fn collides(character: &Character, obstacle: &Obstacle) -> bool {
    character_hitbox(character).overlaps(&obstacle_hitbox(obstacle))
}
