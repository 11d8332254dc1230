//! Core module - game rules and state, no terminal or filesystem access.

pub mod board;
pub mod fsm;
pub mod pieces;
pub mod placement;
pub mod rng;
pub mod scoring;
pub mod session;

// Re-export commonly used types
pub use board::Board;
pub use fsm::Game;
pub use pieces::PieceShape;
pub use session::{ActivePiece, Session, Stats};
