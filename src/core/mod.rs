//! Shared constants, configuration, and time.

pub mod clock;
pub mod config;
pub mod constants;

pub use clock::{Clock, FrameTimer, ManualClock, SystemClock};
pub use config::{ConfigError, RunnerConfig};
