//! Collaborator doubles: same contracts as the terminal, keyboard and
//! file store, minus the I/O.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use anyhow::Result;

use brickfall::core::Session;
use brickfall::input::InputSource;
use brickfall::persist::HighScoreStore;
use brickfall::term::Renderer;
use brickfall::types::UserAction;

/// Renderer that draws nothing.
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render_board(&mut self, _: &Session) -> Result<()> {
        Ok(())
    }
    fn render_stats(&mut self, _: &Session) -> Result<()> {
        Ok(())
    }
    fn render_next_preview(&mut self, _: &Session) -> Result<()> {
        Ok(())
    }
    fn render_active_piece(&mut self, _: &Session, _: bool) -> Result<()> {
        Ok(())
    }
    fn render_pause_banner(&mut self, _: &Session) -> Result<()> {
        Ok(())
    }
    fn render_game_over_banner(&mut self, _: &Session) -> Result<()> {
        Ok(())
    }
    fn render_error_banner(&mut self, _: &Session) -> Result<()> {
        Ok(())
    }
}

/// Replays a fixed script, then answers `NoSignal` forever.
pub struct ScriptedInput {
    queue: VecDeque<UserAction>,
}

impl ScriptedInput {
    pub fn new(actions: &[UserAction]) -> Self {
        Self {
            queue: actions.iter().copied().collect(),
        }
    }

    pub fn empty() -> Self {
        Self::new(&[])
    }
}

impl InputSource for ScriptedInput {
    fn poll_action(&mut self, _timeout: Option<Duration>) -> Result<UserAction> {
        Ok(self.queue.pop_front().unwrap_or(UserAction::NoSignal))
    }
}

/// In-memory score record; can be told to fail every sync.
pub struct MemoryStore {
    pub best: u32,
    pub fail: bool,
}

impl MemoryStore {
    pub fn with_record(best: u32) -> Self {
        Self { best, fail: false }
    }

    pub fn broken() -> Self {
        Self { best: 0, fail: true }
    }
}

impl HighScoreStore for MemoryStore {
    fn sync(&mut self, score: u32) -> io::Result<u32> {
        if self.fail {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "record store offline",
            ));
        }
        self.best = self.best.max(score);
        Ok(self.best)
    }
}
