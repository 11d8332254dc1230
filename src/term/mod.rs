//! Term module - the display seam between the state machine and a screen.

pub mod screen;

pub use screen::TerminalScreen;

use anyhow::Result;

use crate::core::session::Session;

/// Display surface the state machine draws through at fixed points:
/// after a successful spawn, after each gravity move, and on
/// pause/game-over/error. Implementations read the session only.
pub trait Renderer {
    /// Redraw the settled grid cells.
    fn render_board(&mut self, session: &Session) -> Result<()>;

    /// Refresh score, high score and level.
    fn render_stats(&mut self, session: &Session) -> Result<()>;

    /// Redraw the next-piece preview.
    fn render_next_preview(&mut self, session: &Session) -> Result<()>;

    /// Draw the active piece at its anchor, or erase it when `visible`
    /// is false (the half-step before a move).
    fn render_active_piece(&mut self, session: &Session, visible: bool) -> Result<()>;

    fn render_pause_banner(&mut self, session: &Session) -> Result<()>;

    fn render_game_over_banner(&mut self, session: &Session) -> Result<()>;

    fn render_error_banner(&mut self, session: &Session) -> Result<()>;
}
