//! Board tests - grid access and row compaction

use blockfall::core::Board;
use blockfall::types::{Cell, Variant, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, row: usize) {
    for col in 0..board.width() {
        board.set(row, col, Cell::Filled(Variant::O));
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::default();
    assert_eq!(board.width(), BOARD_WIDTH as usize);
    assert_eq!(board.height(), BOARD_HEIGHT as usize);

    for row in 0..board.height() {
        for col in 0..board.width() {
            assert!(!board.is_occupied(row, col), "cell ({row}, {col}) should be empty");
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new(10, 20);
    assert_eq!(board.get(20, 0), None);
    assert_eq!(board.get(0, 10), None);
    assert!(!board.in_bounds(-1, 0));
    assert!(!board.in_bounds(0, -1));
    assert!(board.in_bounds(19, 9));
}

#[test]
fn test_init_clears_everything() {
    let mut board = Board::from_ascii(&["#..#", "####", "T..S"]);
    board.init();
    assert_eq!(board.filled_count(), 0);
    assert_eq!((board.width(), board.height()), (4, 3));
}

#[test]
fn test_compact_empty_board_is_noop() {
    let mut board = Board::new(10, 20);
    assert_eq!(board.compact_rows(), 0);
    assert_eq!(board, Board::new(10, 20));
}

#[test]
fn test_single_full_row_shifts_rows_above() {
    for k in [0usize, 7, 19] {
        let mut board = Board::new(10, 20);
        fill_row(&mut board, k);
        // A marker on every row above k, tagged by row parity.
        for row in 0..k {
            let v = if row % 2 == 0 { Variant::T } else { Variant::Z };
            board.set(row, row % 10, Cell::Filled(v));
        }
        let before = board.clone();

        assert_eq!(board.compact_rows(), 1, "row {k}");

        assert!(board.row(0).unwrap().iter().all(|c| c.is_empty()));
        for row in 0..k {
            assert_eq!(board.row(row + 1), before.row(row), "row {row} should move down");
        }
        for row in k + 1..20 {
            assert_eq!(board.row(row), before.row(row), "row {row} below should stay");
        }
    }
}

#[test]
fn test_two_adjacent_bottom_rows() {
    let mut board = Board::new(10, 20);
    fill_row(&mut board, 18);
    fill_row(&mut board, 19);
    board.set(17, 4, Cell::Filled(Variant::J));

    assert_eq!(board.compact_rows(), 2);
    assert_eq!(board.get(19, 4), Some(Cell::Filled(Variant::J)));
    assert_eq!(board.filled_count(), 1);
}

#[test]
fn test_non_adjacent_rows_clear_together() {
    let mut board = Board::from_ascii(&[
        "L...", //
        "####",
        ".S..",
        "####",
    ]);
    assert_eq!(board.compact_rows(), 2);
    assert_eq!(board.to_ascii(), vec!["....", "....", "L...", ".S.."]);
}

#[test]
fn test_full_board_empties() {
    let mut board = Board::from_ascii(&["####", "####", "####"]);
    assert_eq!(board.compact_rows(), 3);
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_partial_rows_untouched() {
    let rows = ["....", "#.##", "###."];
    let mut board = Board::from_ascii(&rows);
    let before = board.clone();
    assert_eq!(board.compact_rows(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_place_writes_variant() {
    let mut board = Board::new(10, 20);
    board.place(&[(19, 0), (19, 1), (18, 0), (18, 1)], Variant::O);
    assert_eq!(board.filled_count(), 4);
    assert_eq!(board.get(18, 1), Some(Cell::Filled(Variant::O)));
    assert!(!board.is_row_complete(19));
}

#[test]
#[should_panic(expected = "outside")]
fn test_is_occupied_out_of_bounds_panics() {
    let board = Board::new(10, 20);
    board.is_occupied(20, 0);
}
