//! Day and night colors.

use super::renderer::{Rgb, Rgba};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Rgb,
    pub ground: Rgb,
    /// Character and obstacles.
    pub sprite: Rgb,
    pub text: Rgba,
    pub stars: Option<Rgb>,
}

pub const DAY: Palette = Palette {
    background: Rgb::gray(1.0),
    ground: Rgb::gray(0.9),
    sprite: Rgb::gray(0.0),
    text: Rgba(0, 0, 0, 255),
    stars: None,
};

pub const NIGHT: Palette = Palette {
    background: Rgb::gray(0.15),
    ground: Rgb::gray(0.6),
    sprite: Rgb::gray(0.9),
    text: Rgba(255, 255, 255, 255),
    stars: Some(Rgb::gray(0.45)),
};

pub fn palette_for(night_mode: bool) -> &'static Palette {
    if night_mode {
        &NIGHT
    } else {
        &DAY
    }
}
