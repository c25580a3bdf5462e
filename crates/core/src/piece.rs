//! Piece module - the falling piece and its legality rules
//!
//! Every mutation goes through [`Piece::attempt`]: copy the small
//! position/orientation state, apply the change, validate against the board,
//! and restore the copy if the result is illegal. A failed attempt leaves the
//! piece exactly as it was.
//!
//! Rotation has no wall or floor kicks. A rotation that is blocked at the
//! current origin is rejected outright.

use arrayvec::ArrayVec;

use crate::board::{Board, BoardPos};
use crate::shapes::{self, ShapeMask};
use crate::types::{Orientation, Variant, SHAPE_BOX};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    /// Board row of the shape box's top-left corner.
    pub origin_row: i32,
    /// Board column of the shape box's top-left corner.
    pub origin_col: i32,
    pub variant: Variant,
    pub orientation: Orientation,
}

impl Piece {
    /// A piece at the spawn position for a board `board_width` wide:
    /// top row, shape box centred horizontally, North orientation.
    pub fn new(variant: Variant, board_width: usize) -> Self {
        Self {
            origin_row: 0,
            origin_col: spawn_col(board_width),
            variant,
            orientation: Orientation::North,
        }
    }

    pub fn mask(&self) -> ShapeMask {
        shapes::mask(self.variant, self.orientation)
    }

    /// Absolute `(row, col)` of every occupied cell, which may lie off-board.
    pub fn cells(&self) -> ArrayVec<(i32, i32), 16> {
        self.mask()
            .cells()
            .into_iter()
            .map(|(r, c)| (self.origin_row + r as i32, self.origin_col + c as i32))
            .collect()
    }

    /// Occupied cells as board positions.
    ///
    /// Only meaningful for a legal piece; off-board cells are dropped.
    pub fn board_cells(&self, board: &Board) -> ArrayVec<BoardPos, 16> {
        self.cells()
            .into_iter()
            .filter(|&(r, c)| board.in_bounds(r, c))
            .map(|(r, c)| (r as usize, c as usize))
            .collect()
    }

    /// Legal iff every occupied cell is on the board and not already filled.
    pub fn is_legal(&self, board: &Board) -> bool {
        let mask = self.mask();
        for r in 0..SHAPE_BOX {
            for c in 0..SHAPE_BOX {
                if !mask.is_set(r, c) {
                    continue;
                }
                let row = self.origin_row + r as i32;
                let col = self.origin_col + c as i32;
                if !board.in_bounds(row, col) || board.is_occupied(row as usize, col as usize) {
                    return false;
                }
            }
        }
        true
    }

    /// Apply `change`, keep it if the result is legal, otherwise restore the
    /// previous state. Returns whether the change was kept.
    pub fn attempt(&mut self, board: &Board, change: impl FnOnce(&mut Piece)) -> bool {
        let saved = *self;
        change(self);
        if self.is_legal(board) {
            true
        } else {
            *self = saved;
            false
        }
    }

    /// Reset to the spawn position with `variant`.
    ///
    /// Returns false when the spawn position already collides. The piece is
    /// left in that colliding position; the caller treats it as game over.
    pub fn try_spawn(&mut self, board: &Board, variant: Variant) -> bool {
        *self = Piece::new(variant, board.width());
        self.is_legal(board)
    }

    /// Shift the origin by `(d_row, d_col)` if the result is legal.
    pub fn try_move_by(&mut self, board: &Board, d_row: i32, d_col: i32) -> bool {
        self.attempt(board, |p| {
            p.origin_row += d_row;
            p.origin_col += d_col;
        })
    }

    /// Advance the orientation one step clockwise if the result is legal.
    pub fn try_rotate(&mut self, board: &Board) -> bool {
        self.attempt(board, |p| p.orientation = p.orientation.rotate_cw())
    }

    /// Row the origin would settle at if dropped straight down.
    pub fn drop_row(&self, board: &Board) -> i32 {
        let mut probe = *self;
        while probe.try_move_by(board, 1, 0) {}
        probe.origin_row
    }
}

/// Column that centres the 4-wide shape box on a board `board_width` wide.
pub fn spawn_col(board_width: usize) -> i32 {
    board_width as i32 / 2 - SHAPE_BOX as i32 / 2
}
