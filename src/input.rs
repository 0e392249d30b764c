//! Keyboard input for the runner.
//!
//! The terminal delivers key presses as events, while the game wants a
//! per-frame "is this action pressed" view. `CrosstermInput` drains every
//! pending event once per frame and folds it into an `InputState`.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::VecDeque;
use std::io;
use std::time::Duration;

/// Logical actions the game understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Jump,    // Up or Space
    Restart, // R or Space
    Quit,    // Esc (or Ctrl-C)
}

/// Which actions were pressed this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub jump: bool,
    pub restart: bool,
    pub quit: bool,
}

impl InputState {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with(actions: &[Action]) -> Self {
        let mut state = Self::default();
        for &action in actions {
            state.press(action);
        }
        state
    }

    pub fn press(&mut self, action: Action) {
        match action {
            Action::Jump => self.jump = true,
            Action::Restart => self.restart = true,
            Action::Quit => self.quit = true,
        }
    }


    /// Fold a key event into this frame's state.
    pub fn apply_key(&mut self, key: &KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        for &action in actions_for_key(key) {
            self.press(action);
        }
    }
}

/// Map a physical key to the actions it triggers. Space is bound to both
/// Jump and Restart; the game state decides which one applies.
pub fn actions_for_key(key: &KeyEvent) -> &'static [Action] {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => &[Action::Quit],
        KeyCode::Up => &[Action::Jump],
        KeyCode::Char(' ') => &[Action::Jump, Action::Restart],
        KeyCode::Char('r') | KeyCode::Char('R') => &[Action::Restart],
        KeyCode::Esc => &[Action::Quit],
        _ => &[],
    }
}

/// Supplies one `InputState` per frame.
pub trait InputSource {
    fn sample(&mut self) -> io::Result<InputState>;
}

/// Non-blocking terminal keyboard source.
#[derive(Debug, Default)]
pub struct CrosstermInput;

impl CrosstermInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for CrosstermInput {
    fn sample(&mut self) -> io::Result<InputState> {
        let mut state = InputState::none();
        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key) = event::read()? {
                state.apply_key(&key);
            }
        }
        Ok(state)
    }
}

/// Replays a fixed sequence of frames, then reports nothing pressed.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    frames: VecDeque<InputState>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = InputState>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    pub fn push(&mut self, frame: InputState) {
        self.frames.push_back(frame);
    }
}

impl InputSource for ScriptedInput {
    fn sample(&mut self) -> io::Result<InputState> {
        Ok(self.frames.pop_front().unwrap_or_default())
    }
}
