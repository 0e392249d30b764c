//! Dino Runner - terminal endless runner library
//!
//! This module exposes the game logic for testing and external use.

pub mod build_info;
pub mod core;
pub mod frame_loop;
pub mod game;
pub mod input;
pub mod logging;
pub mod ui;

pub use crate::core::RunnerConfig;
pub use game::GameState;
