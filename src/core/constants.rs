// Physics (NDC units per second)
pub const GRAVITY: f64 = -5.0;
pub const JUMP_IMPULSE: f64 = 2.2;

// Spawning and difficulty
pub const BASE_SPAWN_INTERVAL_SECONDS: f64 = 1.5;
pub const SPAWN_INTERVAL_SCORE_FACTOR: f64 = 0.02;
pub const MAX_SPAWN_INTERVAL_REDUCTION: f64 = 1.0; // interval floor = 0.5s
pub const BASE_OBSTACLE_SPEED: f64 = 0.5;
pub const OBSTACLE_SPEED_SCORE_FACTOR: f64 = 0.05; // no cap: endless ramp
// Slack for dt sums built from clock differences (15 x 0.1 can land at 1.4999...)
pub const SPAWN_TIMER_EPSILON: f64 = 1e-9;

// Obstacle geometry (NDC x)
pub const OBSTACLE_SPAWN_X: f64 = 1.2;
pub const OBSTACLE_WIDTH: f64 = 0.08;
pub const PASSED_THRESHOLD_X: f64 = -0.5;
pub const REMOVAL_THRESHOLD_X: f64 = -1.0;

// Day/night
pub const NIGHT_MODE_THRESHOLD: u32 = 10;

// Ground line in NDC y; the character's offset is measured from here.
pub const GROUND_Y: f64 = -0.5;

// Hitboxes. Character box is fixed in x and rides on the vertical offset.
pub const CHARACTER_HITBOX_LEFT: f64 = -0.52;
pub const CHARACTER_HITBOX_RIGHT: f64 = -0.45;
pub const CHARACTER_HITBOX_HEIGHT: f64 = 0.12;
pub const OBSTACLE_HITBOX_INSET: f64 = 0.8; // fraction of half-width kept
pub const OBSTACLE_HITBOX_BOTTOM: f64 = -0.52;
pub const OBSTACLE_HITBOX_TOP: f64 = -0.47;

// Frame timing
pub const MAX_FRAME_DT_SECONDS: f64 = 0.1;
pub const TARGET_FRAME_MS: u64 = 16; // ~60 FPS
pub const LEG_ANIMATION_HZ: f64 = 8.0;

// Logical text surface (pixels)
pub const SCREEN_WIDTH: f64 = 800.0;
pub const SCREEN_HEIGHT: f64 = 600.0;
pub const STATUS_TEXT_X: f64 = 50.0;
pub const STATUS_TEXT_Y: f64 = 50.0;

pub const WINDOW_TITLE: &str = " Dino Runner ";
