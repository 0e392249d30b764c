//! Rendering: backend-neutral draw calls plus the terminal backend.

pub mod palette;
pub mod renderer;
pub mod scene;
pub mod terminal;

pub use renderer::{Renderer, Rgb, Rgba};
pub use scene::{leg_pose, LegPose, Scene};
