//! TerminalScreen: crossterm implementation of the renderer seam.
//!
//! Draws a bordered playfield with 3-column cells, a stats panel with a
//! next-piece preview, and centered banners. The static overlay goes up
//! once on `enter`; the per-frame calls only touch the regions they own.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::Print,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
    QueueableCommand,
};

use crate::core::session::Session;
use crate::term::Renderer;
use crate::types::{BOARD_COLS, BOARD_ROWS, PIECE_SIDE};

/// Top-left margin of the whole layout.
const ORIGIN: u16 = 2;
/// Each grid cell renders 3 terminal columns wide.
const CELL_W: u16 = 3;
const BOARD_W: u16 = BOARD_COLS as u16 * CELL_W;
const BOARD_H: u16 = BOARD_ROWS as u16;
const PANEL_W: u16 = 13;

const FILLED: &str = "[X]";
const BLANK: &str = "   ";
const INTRO: &str = "Press R to start!";

pub struct TerminalScreen {
    stdout: io::Stdout,
    entered: bool,
}

impl TerminalScreen {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            entered: false,
        }
    }

    /// Switch to the alternate screen in raw mode and draw the static
    /// overlay: board frame, stats panel and intro message.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;
        self.entered = true;
        self.draw_overlay()?;
        self.stdout.flush()?;
        Ok(())
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn exit(&mut self) -> Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Print `text` at layout coordinates (columns, rows from ORIGIN).
    fn put(&mut self, x: u16, y: u16, text: &str) -> Result<()> {
        self.stdout.queue(cursor::MoveTo(ORIGIN + x, ORIGIN + y))?;
        self.stdout.queue(Print(text))?;
        Ok(())
    }

    fn draw_frame(&mut self, top: u16, bottom: u16, left: u16, right: u16) -> Result<()> {
        self.put(left, top, "┌")?;
        for x in (left + 1)..right {
            self.put(x, top, "─")?;
        }
        self.put(right, top, "┐")?;

        for y in (top + 1)..bottom {
            self.put(left, y, "│")?;
            self.put(right, y, "│")?;
        }

        self.put(left, bottom, "└")?;
        for x in (left + 1)..right {
            self.put(x, bottom, "─")?;
        }
        self.put(right, bottom, "┘")?;
        Ok(())
    }

    fn draw_overlay(&mut self) -> Result<()> {
        // Playfield frame and the status panel to its right.
        self.draw_frame(0, BOARD_H + 1, 0, BOARD_W + 1)?;
        self.draw_frame(0, BOARD_H + 1, BOARD_W + 2, BOARD_W + PANEL_W + 5)?;

        // Boxes for score, high score and level.
        self.draw_frame(1, 3, BOARD_W + 3, BOARD_W + PANEL_W + 4)?;
        self.draw_frame(4, 7, BOARD_W + 3, BOARD_W + PANEL_W + 4)?;
        self.draw_frame(8, 10, BOARD_W + 3, BOARD_W + PANEL_W + 4)?;

        self.put(BOARD_W + 5, 2, "SCORE")?;
        self.put(BOARD_W + 5, 5, "HIGH")?;
        self.put(BOARD_W + 5, 6, "SCORE")?;
        self.put(BOARD_W + 5, 9, "LEVEL")?;
        self.put(BOARD_W + 4, 13, "NEXT:")?;

        self.put((BOARD_W - INTRO.len() as u16) / 2 + 1, BOARD_H / 2, INTRO)?;
        Ok(())
    }

    fn banner(&mut self, line: &str, prompt: &str) -> Result<()> {
        let mid = BOARD_H / 2;
        self.put(1, mid - 1, "------------------------------")?;
        self.put(1, mid, line)?;
        self.put(1, mid + 1, prompt)?;
        self.put(1, mid + 2, "------------------------------")?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalScreen {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

impl Renderer for TerminalScreen {
    fn render_board(&mut self, session: &Session) -> Result<()> {
        for y in 0..BOARD_ROWS {
            for x in 0..BOARD_COLS {
                let cell = if session.board().filled(x as i8, y as i8) {
                    FILLED
                } else {
                    BLANK
                };
                self.put(1 + x as u16 * CELL_W, 1 + y as u16, cell)?;
            }
        }
        self.stdout.flush()?;
        Ok(())
    }

    fn render_stats(&mut self, session: &Session) -> Result<()> {
        let stats = session.stats();
        // Left-pad-free prints with trailing blanks so shrinking numbers
        // never leave stale digits behind.
        self.put(BOARD_W + 11, 2, &format!("{:<6}", stats.score))?;
        self.put(BOARD_W + 11, 6, &format!("{:<6}", stats.high_score))?;
        self.put(BOARD_W + 11, 9, &format!("{:<6}", stats.level))?;
        self.stdout.flush()?;
        Ok(())
    }

    fn render_next_preview(&mut self, session: &Session) -> Result<()> {
        for row in 0..PIECE_SIDE {
            for col in 0..PIECE_SIDE {
                let cell = if session.next().filled(row, col) {
                    FILLED
                } else {
                    BLANK
                };
                self.put(BOARD_W + 4 + col as u16 * CELL_W, 15 + row as u16, cell)?;
            }
        }
        self.stdout.flush()?;
        Ok(())
    }

    fn render_active_piece(&mut self, session: &Session, visible: bool) -> Result<()> {
        let Some(piece) = session.active() else {
            return Ok(());
        };
        let tray = if visible { FILLED } else { BLANK };
        for row in 0..PIECE_SIDE {
            for col in 0..PIECE_SIDE {
                if !piece.shape.filled(row, col) {
                    continue;
                }
                let x = piece.at.x + col as i8;
                let y = piece.at.y + row as i8;
                // Cells past the top edge (fresh spawns) stay undrawn.
                if x < 0 || x >= BOARD_COLS as i8 || y < 0 || y >= BOARD_ROWS as i8 {
                    continue;
                }
                self.put(1 + x as u16 * CELL_W, 1 + y as u16, tray)?;
            }
        }
        self.stdout.flush()?;
        Ok(())
    }

    fn render_pause_banner(&mut self, _session: &Session) -> Result<()> {
        self.banner(
            "          GAME PAUSED         ",
            "   press any key to continue  ",
        )
    }

    fn render_game_over_banner(&mut self, _session: &Session) -> Result<()> {
        self.banner(
            "           GAME OVER          ",
            "     press any key to quit    ",
        )
    }

    fn render_error_banner(&mut self, _session: &Session) -> Result<()> {
        self.banner(
            "        AN ERROR OCCURRED     ",
            "     press any key to quit    ",
        )
    }
}
