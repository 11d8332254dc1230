//! Placement engine - positions piece bitmaps against the grid.
//!
//! `collides` is the single authoritative predicate behind every move,
//! rotate, drop and spawn-validity check; nothing else re-implements the
//! bounds/overlap test.

use crate::core::board::Board;
use crate::core::pieces::PieceShape;
use crate::types::{Anchor, BOARD_COLS, PIECE_SIDE};

/// True if any filled bitmap cell, mapped through `at`, lands outside the
/// board or on an already-filled grid cell. Short-circuits on the first
/// violation.
pub fn collides(board: &Board, shape: &PieceShape, at: Anchor) -> bool {
    for row in 0..PIECE_SIDE {
        for col in 0..PIECE_SIDE {
            if !shape.filled(row, col) {
                continue;
            }
            let x = at.x + col as i8;
            let y = at.y + row as i8;
            if !board.open(x, y) {
                return true;
            }
        }
    }
    false
}

/// Stamp the shape's filled cells into the grid.
///
/// The caller has already verified `!collides(board, shape, at)`; no
/// checking happens here.
pub fn merge(board: &mut Board, shape: &PieceShape, at: Anchor) {
    for row in 0..PIECE_SIDE {
        for col in 0..PIECE_SIDE {
            if shape.filled(row, col) {
                board.fill(at.x + col as i8, at.y + row as i8);
            }
        }
    }
}

/// Anchor for a fresh spawn: horizontally centered, and pulled up/left past
/// the board edge by however much empty padding the bitmap carries, so the
/// topmost/leftmost filled cells sit flush with row 0 / the centered column.
pub fn spawn_anchor(shape: &PieceShape) -> Anchor {
    let center_x = ((BOARD_COLS - PIECE_SIDE) / 2) as i8;
    Anchor::new(
        center_x - shape.leading_empty_cols() as i8,
        -(shape.leading_empty_rows() as i8),
    )
}

/// Lowest non-colliding anchor straight below `at` (the hard-drop rest
/// position). `at` itself must be legal.
pub fn drop_to_floor(board: &Board, shape: &PieceShape, at: Anchor) -> Anchor {
    let mut rest = at;
    while !collides(board, shape, Anchor::new(rest.x, rest.y + 1)) {
        rest.y += 1;
    }
    rest
}
