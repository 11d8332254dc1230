//! Persist module - the high-score record.
//!
//! The backing store is a single text file holding one decimal integer.
//! A missing file means no record yet (high score 0); it is created on
//! the first write. Any other I/O problem is a real error - the state
//! machine turns it into the error banner rather than guessing a value.

use std::fs;
use std::io;
use std::path::PathBuf;

/// Keeper of the best score across sessions.
pub trait HighScoreStore {
    /// Reconcile `score` with the stored record: persist the larger of
    /// the two and return it.
    fn sync(&mut self, score: u32) -> io::Result<u32>;
}

/// One-integer text file store.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HighScoreStore for FileStore {
    fn sync(&mut self, score: u32) -> io::Result<u32> {
        let stored = match fs::read_to_string(&self.path) {
            Ok(text) => Some(
                text.trim()
                    .parse::<u32>()
                    .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?,
            ),
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => return Err(err),
        };

        let best = stored.unwrap_or(0).max(score);
        // Write on a new record, and on first contact to create the file.
        if stored != Some(best) {
            fs::write(&self.path, best.to_string())?;
        }
        Ok(best)
    }
}
