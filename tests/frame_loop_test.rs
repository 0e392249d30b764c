//! Integration tests for the frame driver.
//!
//! Wires a `ManualClock`, `ScriptedInput`, and an in-memory `CellCanvas`
//! through `FrameLoop` so whole frames can be inspected without a terminal.

use dino_runner::core::{ManualClock, RunnerConfig};
use dino_runner::frame_loop::{FrameLoop, FrameOutcome};
use dino_runner::game::{GameState, Obstacle};
use dino_runner::input::{Action, InputState, ScriptedInput};
use dino_runner::ui::palette::{DAY, NIGHT};
use dino_runner::ui::terminal::CellCanvas;
use ratatui::style::Color;

const COLS: u16 = 80;
const ROWS: u16 = 24;

struct Rig {
    game: GameState,
    frame_loop: FrameLoop,
    clock: ManualClock,
    input: ScriptedInput,
    canvas: CellCanvas,
}

impl Rig {
    fn new() -> Self {
        Self::with_config(RunnerConfig::default())
    }

    fn with_config(config: RunnerConfig) -> Self {
        let frame_loop = FrameLoop::new(&config);
        let game = GameState::new(config);
        Self {
            game,
            frame_loop,
            clock: ManualClock::new(100.0),
            input: ScriptedInput::default(),
            canvas: CellCanvas::new(COLS, ROWS),
        }
    }

    /// Advance the clock by `dt`, queue `input`, and run one frame.
    fn frame(&mut self, dt: f64, input: InputState) -> FrameOutcome {
        self.clock.advance(dt);
        self.input.push(input);
        self.frame_loop
            .run_frame(&mut self.game, &self.clock, &mut self.input, &mut self.canvas)
            .unwrap()
    }

    fn row_text(&self, row: u16) -> String {
        (0..self.canvas.width())
            .map(|col| self.canvas.cell(col, row).unwrap().ch)
            .collect()
    }

    fn corner_bg(&self) -> Color {
        self.canvas.cell(0, 0).unwrap().bg
    }
}

fn rgb(color: dino_runner::ui::Rgb) -> Color {
    let (r, g, b) = color.to_bytes();
    Color::Rgb(r, g, b)
}

// =============================================================================
// Timing
// =============================================================================

#[test]
fn test_first_frame_has_zero_dt() {
    let mut rig = Rig::new();
    rig.frame(0.0, InputState::none());

    assert_eq!(rig.game.spawn_timer, 0.0);
    assert_eq!(rig.frame_loop.frame_count(), 1);
}

#[test]
fn test_fifteen_tenth_second_frames_spawn_once() {
    let mut rig = Rig::new();
    // First frame only primes the timer
    rig.frame(0.0, InputState::none());
    for _ in 0..15 {
        rig.frame(0.1, InputState::none());
    }
    assert_eq!(rig.game.obstacles.len(), 1);
}

#[test]
fn test_stall_is_clamped() {
    let mut rig = Rig::new();
    rig.frame(0.0, InputState::none());
    rig.frame(5.0, InputState::none());

    // A 5s stall counts as one max-length frame
    assert!((rig.game.spawn_timer - 0.1).abs() < 1e-9);
    assert!(rig.game.obstacles.is_empty());
}

// =============================================================================
// Quit
// =============================================================================

#[test]
fn test_quit_leaves_state_untouched() {
    let mut rig = Rig::new();
    rig.frame(0.0, InputState::none());
    rig.frame(0.1, InputState::none());
    let before = rig.game.clone();

    let outcome = rig.frame(0.1, InputState::with(&[Action::Quit, Action::Jump]));

    assert_eq!(outcome, FrameOutcome::Quit);
    assert_eq!(rig.game.spawn_timer, before.spawn_timer);
    assert_eq!(rig.game.character, before.character);
    assert_eq!(rig.frame_loop.frame_count(), 2);
}

#[test]
fn test_run_returns_on_quit() {
    let config = RunnerConfig {
        target_frame_ms: 0,
        ..Default::default()
    };
    let mut frame_loop = FrameLoop::new(&config);
    let mut game = GameState::new(config);
    let clock = ManualClock::new(0.0);
    let mut input = ScriptedInput::new([
        InputState::none(),
        InputState::with(&[Action::Jump]),
        InputState::none(),
        InputState::with(&[Action::Quit]),
    ]);
    let mut canvas = CellCanvas::new(COLS, ROWS);

    frame_loop
        .run(&mut game, &clock, &mut input, &mut canvas)
        .unwrap();

    assert_eq!(frame_loop.frame_count(), 3);
    assert!(game.is_running());
}

// =============================================================================
// Drawing
// =============================================================================

#[test]
fn test_running_frame_shows_score() {
    let mut rig = Rig::new();
    rig.frame(0.0, InputState::none());

    assert!(rig.row_text(2).contains("Score: 0"));
    assert_eq!(rig.corner_bg(), rgb(DAY.background));
}

#[test]
fn test_collision_shows_game_over_then_restart() {
    let mut rig = Rig::new();
    rig.game.obstacles.push(Obstacle::new(-0.48, 0.08));

    rig.frame(0.0, InputState::none());
    assert!(rig.game.is_game_over());
    assert!(rig
        .row_text(2)
        .contains("Game Over! Score: 0 -Press R to restart"));

    // Frozen frames keep showing the same text
    rig.frame(0.1, InputState::with(&[Action::Jump]));
    assert!(rig.game.is_game_over());
    assert!(rig.row_text(2).contains("Game Over!"));

    rig.frame(0.1, InputState::with(&[Action::Restart]));
    assert!(rig.game.is_running());
    assert!(rig.game.obstacles.is_empty());
    assert!(rig.row_text(2).contains("Score: 0"));
    assert!(!rig.row_text(2).contains("Game Over"));
}

#[test]
fn test_night_frame_uses_night_background() {
    let mut rig = Rig::new();
    rig.game.score = 10;

    rig.frame(0.0, InputState::none());

    assert!(rig.game.night_mode);
    assert_eq!(rig.corner_bg(), rgb(NIGHT.background));
    assert!(rig.row_text(2).contains("Score: 10"));
}
