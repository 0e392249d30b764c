//! Dino Runner gameplay.
//!
//! A real-time endless runner: jump over scrolling cacti, score a point for
//! each one cleared, and watch the sky flip between day and night as the
//! score climbs. Nothing here touches the terminal.

pub mod logic;
pub mod physics;
pub mod spawner;
pub mod types;

pub use logic::*;
pub use types::*;
