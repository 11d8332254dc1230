//! Input module - logical actions and the crossterm-backed source.
//!
//! The fall timer lives here: polling with a timeout and answering
//! `NoSignal` when the window elapses is what drives gravity.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::types::UserAction;

/// One source of player actions.
pub trait InputSource {
    /// Block up to `timeout` (indefinitely when `None`) for the next
    /// action. A lapsed window answers `NoSignal`.
    fn poll_action(&mut self, timeout: Option<Duration>) -> Result<UserAction>;
}

/// Pure key-to-action lookup. Letter keys are case-insensitive; anything
/// unmapped is `NoSignal`.
pub fn map_key(key: KeyEvent) -> UserAction {
    match key.code {
        KeyCode::Left => UserAction::Left,
        KeyCode::Right => UserAction::Right,
        KeyCode::Up => UserAction::Up,
        KeyCode::Down => UserAction::Down,
        KeyCode::Char('r') | KeyCode::Char('R') => UserAction::Start,
        KeyCode::Char(' ') => UserAction::Rotate,
        KeyCode::Char('p') | KeyCode::Char('P') => UserAction::Pause,
        KeyCode::Esc => UserAction::Terminate,
        _ => UserAction::NoSignal,
    }
}

/// Terminal keyboard via crossterm events. Key presses only; repeats and
/// releases never reach the state machine.
pub struct CrosstermInput;

impl InputSource for CrosstermInput {
    fn poll_action(&mut self, timeout: Option<Duration>) -> Result<UserAction> {
        loop {
            if let Some(window) = timeout {
                if !event::poll(window)? {
                    return Ok(UserAction::NoSignal);
                }
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(map_key(key)),
                // Resize, release, repeat: keep waiting.
                _ => {}
            }
        }
    }
}
