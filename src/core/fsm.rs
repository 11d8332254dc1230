//! Game state machine.
//!
//! Single-threaded and event-driven: one `step` processes exactly one
//! phase dispatch, fed either by a player action or by `NoSignal` when
//! the fall timer lapses. Gravity is the unconditional Shifting step
//! that follows every non-terminal Moving dispatch, so the poll timeout
//! *is* the fall speed.

use std::time::Duration;

use anyhow::Result;

use crate::core::placement::{collides, drop_to_floor, merge, spawn_anchor};
use crate::core::scoring::{apply_clear, past_max_level};
use crate::core::session::{ActivePiece, Session};
use crate::input::InputSource;
use crate::persist::HighScoreStore;
use crate::term::Renderer;
use crate::types::{Phase, UserAction};

/// The running game: one session, one phase, and the three collaborators
/// the machine drives. Holds the only mutable handle on the session.
pub struct Game<R, I, S> {
    session: Session,
    phase: Phase,
    renderer: R,
    input: I,
    store: S,
}

impl<R, I, S> Game<R, I, S>
where
    R: Renderer,
    I: InputSource,
    S: HighScoreStore,
{
    pub fn new(session: Session, renderer: R, input: I, store: S) -> Self {
        Self {
            session,
            phase: Phase::Start,
            renderer,
            input,
            store,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Process one dispatch of the current phase.
    ///
    /// Terminal phases absorb every action; banners and the final
    /// acknowledgement wait belong to `run`.
    pub fn step(&mut self, action: UserAction) -> Result<()> {
        match self.phase {
            Phase::Start => self.on_start(action),
            Phase::Spawn => self.on_spawn(),
            Phase::Moving => self.on_moving(action),
            Phase::Shifting => self.on_shifting(),
            Phase::Attaching => self.on_attaching(),
            Phase::GameOver | Phase::ExitError => Ok(()),
        }
    }

    /// Drive the machine to completion: poll the player in Start
    /// (blocking) and Moving (fall-timer window), feed `NoSignal`
    /// through the intermediate phases, and wait for one
    /// acknowledgement keypress under the terminal banners.
    pub fn run(&mut self) -> Result<()> {
        loop {
            match self.phase {
                Phase::Start => {
                    let action = self.input.poll_action(None)?;
                    self.step(action)?;
                }
                Phase::Moving => {
                    let window = Duration::from_millis(self.session.stats.speed_ms);
                    let action = self.input.poll_action(Some(window))?;
                    self.step(action)?;
                }
                Phase::Spawn | Phase::Shifting | Phase::Attaching => {
                    self.step(UserAction::NoSignal)?;
                }
                Phase::GameOver => {
                    self.renderer.render_game_over_banner(&self.session)?;
                    self.input.poll_action(None)?;
                    return Ok(());
                }
                Phase::ExitError => {
                    self.renderer.render_error_banner(&self.session)?;
                    self.input.poll_action(None)?;
                    return Ok(());
                }
            }
        }
    }

    fn on_start(&mut self, action: UserAction) -> Result<()> {
        match action {
            UserAction::Start => {
                self.session.next = self.session.selector.next_shape();
                self.phase = Phase::Spawn;
            }
            UserAction::Terminate => self.phase = Phase::GameOver,
            _ => {}
        }
        Ok(())
    }

    /// Sync the high-score record, promote the preview to the active
    /// piece, and draw a fresh preview. A blocked spawn ends the game.
    fn on_spawn(&mut self) -> Result<()> {
        match self.store.sync(self.session.stats.score) {
            Ok(best) => self.session.stats.high_score = best,
            Err(_) => {
                self.phase = Phase::ExitError;
                return Ok(());
            }
        }

        let shape = self.session.next;
        let piece = ActivePiece {
            shape,
            at: spawn_anchor(&shape),
        };
        self.session.active = Some(piece);
        self.session.next = self.session.selector.next_shape();

        self.renderer.render_next_preview(&self.session)?;
        self.renderer.render_board(&self.session)?;
        self.renderer.render_stats(&self.session)?;

        self.phase = if collides(&self.session.board, &piece.shape, piece.at) {
            Phase::GameOver
        } else {
            self.renderer.render_active_piece(&self.session, true)?;
            Phase::Moving
        };
        Ok(())
    }

    fn on_moving(&mut self, action: UserAction) -> Result<()> {
        match action {
            UserAction::Left => self.nudge(-1)?,
            UserAction::Right => self.nudge(1)?,
            // Up and Down both slam the piece to its rest position.
            UserAction::Up | UserAction::Down => self.hard_drop()?,
            UserAction::Rotate => self.rotate()?,
            UserAction::Pause => self.pause()?,
            UserAction::Terminate => self.phase = Phase::GameOver,
            UserAction::Start | UserAction::NoSignal => {}
        }

        // Every non-terminal dispatch falls through to the gravity step,
        // no-op input included.
        if self.phase != Phase::GameOver && self.phase != Phase::ExitError {
            self.phase = Phase::Shifting;
        }
        Ok(())
    }

    /// Gravity: one row down, or hand over to Attaching from the last
    /// legal position.
    fn on_shifting(&mut self) -> Result<()> {
        let Some(mut piece) = self.session.active else {
            self.phase = Phase::Moving;
            return Ok(());
        };

        piece.at.y += 1;
        if collides(&self.session.board, &piece.shape, piece.at) {
            self.phase = Phase::Attaching;
        } else {
            // Erase at the old anchor before the session moves on.
            self.renderer.render_active_piece(&self.session, false)?;
            self.session.active = Some(piece);
            self.renderer.render_board(&self.session)?;
            self.renderer.render_active_piece(&self.session, true)?;
            self.phase = Phase::Moving;
        }
        Ok(())
    }

    /// Lock the piece, clear rows, update progression, hand over to the
    /// next spawn (or end the game past the final level).
    fn on_attaching(&mut self) -> Result<()> {
        let Some(piece) = self.session.active else {
            self.phase = Phase::Spawn;
            return Ok(());
        };

        merge(&mut self.session.board, &piece.shape, piece.at);
        let cleared = self.session.board.clear_full_rows().len();
        apply_clear(&mut self.session.stats, cleared);

        // The merged cells collide with themselves, so this re-check
        // holds unless the destruction pass swallowed the entire piece;
        // in that corner the phase stays put and the piece re-attaches
        // on the next dispatch.
        if collides(&self.session.board, &piece.shape, piece.at) {
            self.session.active = None;
            self.phase = Phase::Spawn;
        }
        if past_max_level(&self.session.stats) {
            self.phase = Phase::GameOver;
        }
        if self.phase == Phase::Spawn {
            self.renderer.render_board(&self.session)?;
        }
        Ok(())
    }

    fn nudge(&mut self, dx: i8) -> Result<()> {
        let Some(mut piece) = self.session.active else {
            return Ok(());
        };
        self.renderer.render_active_piece(&self.session, false)?;
        piece.at.x += dx;
        if !collides(&self.session.board, &piece.shape, piece.at) {
            self.session.active = Some(piece);
        }
        self.renderer.render_active_piece(&self.session, true)?;
        Ok(())
    }

    fn hard_drop(&mut self) -> Result<()> {
        let Some(mut piece) = self.session.active else {
            return Ok(());
        };
        self.renderer.render_active_piece(&self.session, false)?;
        piece.at = drop_to_floor(&self.session.board, &piece.shape, piece.at);
        self.session.active = Some(piece);
        self.renderer.render_active_piece(&self.session, true)?;
        Ok(())
    }

    /// Rotate clockwise; a rotation that would collide keeps the
    /// original orientation. No wall-kick offsets are searched.
    fn rotate(&mut self) -> Result<()> {
        let Some(mut piece) = self.session.active else {
            return Ok(());
        };
        self.renderer.render_active_piece(&self.session, false)?;
        let turned = piece.shape.rotated_cw();
        if !collides(&self.session.board, &turned, piece.at) {
            piece.shape = turned;
            self.session.active = Some(piece);
        }
        self.renderer.render_active_piece(&self.session, true)?;
        Ok(())
    }

    /// Freeze until the next keypress: a blocking poll with no timeout,
    /// which is exactly what suspends gravity.
    fn pause(&mut self) -> Result<()> {
        self.session.stats.paused = true;
        self.renderer.render_pause_banner(&self.session)?;
        self.input.poll_action(None)?;
        self.session.stats.paused = false;
        // Repaint the board region the banner covered.
        self.renderer.render_board(&self.session)?;
        self.renderer.render_active_piece(&self.session, true)?;
        Ok(())
    }
}
