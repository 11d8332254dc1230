//! Brickfall: a falling-block puzzle engine with a terminal frontend.
//!
//! `core` holds the pure simulation: grid, piece catalog, collision,
//! scoring and the game state machine. `input`, `term` and `persist` are
//! the collaborator seams the machine drives; each ships a crossterm- or
//! file-backed implementation next to its trait.

pub mod core;
pub mod input;
pub mod persist;
pub mod term;
pub mod types;
