//! Grid model tests - destruction pass scenarios.

use brickfall::core::Board;
use brickfall::types::{BOARD_COLS, BOARD_ROWS};

fn fill_row(board: &mut Board, y: i8) {
    for x in 0..BOARD_COLS as i8 {
        board.fill(x, y);
    }
}

#[test]
fn destruction_pass_on_a_full_grid_empties_it() {
    let mut board = Board::new();
    for y in 0..BOARD_ROWS as i8 {
        fill_row(&mut board, y);
    }

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.len(), BOARD_ROWS);
    for y in 0..BOARD_ROWS as i8 {
        for x in 0..BOARD_COLS as i8 {
            assert!(!board.filled(x, y));
        }
    }
}

#[test]
fn destruction_pass_counts_only_complete_rows() {
    let mut board = Board::new();
    fill_row(&mut board, 19);
    fill_row(&mut board, 17);
    board.fill(0, 18); // incomplete row between the two full ones

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.len(), 2);

    // The lone cell from row 18 ends up on the floor.
    assert!(board.filled(0, 19));
    for y in 0..19 {
        assert!(!board.is_row_full(y as usize));
        for x in 0..BOARD_COLS as i8 {
            assert!(!board.filled(x, y));
        }
    }
}

#[test]
fn destruction_pass_is_a_single_top_to_bottom_scan() {
    // Four full rows at the bottom with a marker riding above them: the
    // marker must drop exactly four rows, and each collapse must happen
    // against the already-shifted grid.
    let mut board = Board::new();
    for y in 16..20 {
        fill_row(&mut board, y);
    }
    board.fill(5, 10);

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.len(), 4);
    assert!(board.filled(5, 14));
    assert!(!board.filled(5, 10));
}

#[test]
fn empty_pass_clears_nothing() {
    let mut board = Board::new();
    board.fill(3, 12);
    let before = board.clone();

    assert_eq!(board.clear_full_rows().len(), 0);
    assert_eq!(board, before);
}
