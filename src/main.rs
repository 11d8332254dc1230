//! Terminal brick-game runner (default binary).
//!
//! Wires the state machine to the crossterm screen and keyboard and the
//! high-score file in the working directory.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;

use brickfall::core::{Game, Session};
use brickfall::input::CrosstermInput;
use brickfall::persist::FileStore;
use brickfall::term::TerminalScreen;

const HIGH_SCORE_FILE: &str = "highscore.txt";

fn main() -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u32)
        .unwrap_or(1);

    let mut screen = TerminalScreen::new();
    screen.enter()?;

    // The screen restores the terminal on drop, so an error inside the
    // loop still leaves a usable shell behind.
    let mut game = Game::new(
        Session::new(seed),
        screen,
        CrosstermInput,
        FileStore::new(HIGH_SCORE_FILE),
    );
    game.run()
}
