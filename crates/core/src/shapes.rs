//! Shapes module - occupied cells of every variant in every orientation
//!
//! Each (variant, orientation) pair maps to a 4x4 [`ShapeMask`]. Masks are
//! indexed `[local_row][local_col]`; the piece, the board and the view all
//! consult them through [`cells_occupied`] or [`ShapeMask::cells`], so there is
//! exactly one place that decides the axis order.

use arrayvec::ArrayVec;

use crate::types::{Orientation, Variant, SHAPE_BOX};

/// A `(local_row, local_col)` offset inside the 4x4 shape box.
pub type LocalCell = (u8, u8);

/// Occupied sub-cells of a 4x4 box, one nibble per row.
///
/// Within a row nibble the most significant bit is column 0, so the binary
/// literals passed to [`ShapeMask::from_rows`] read like the shape itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMask(u16);

impl ShapeMask {
    pub const fn from_rows(rows: [u8; SHAPE_BOX]) -> Self {
        let mut bits = 0u16;
        let mut r = 0;
        while r < SHAPE_BOX {
            bits |= ((rows[r] & 0b1111) as u16) << (12 - 4 * r);
            r += 1;
        }
        Self(bits)
    }

    /// True iff the sub-cell at `(row, col)` is occupied.
    #[inline(always)]
    pub const fn is_set(self, row: usize, col: usize) -> bool {
        if row >= SHAPE_BOX || col >= SHAPE_BOX {
            return false;
        }
        let bit = 15 - (row * SHAPE_BOX + col);
        self.0 & (1 << bit) != 0
    }

    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Occupied sub-cells in row-major order.
    pub fn cells(self) -> ArrayVec<LocalCell, 16> {
        let mut out = ArrayVec::new();
        for row in 0..SHAPE_BOX {
            for col in 0..SHAPE_BOX {
                if self.is_set(row, col) {
                    out.push((row as u8, col as u8));
                }
            }
        }
        out
    }
}

const fn m(rows: [u8; SHAPE_BOX]) -> ShapeMask {
    ShapeMask::from_rows(rows)
}

/// `SHAPE_TABLE[variant.index()][orientation.index()]`.
///
/// Orientations step clockwise. Every mask has exactly four cells.
pub static SHAPE_TABLE: [[ShapeMask; 4]; 7] = [
    // I
    [
        m([0b0000, 0b1111, 0b0000, 0b0000]),
        m([0b0010, 0b0010, 0b0010, 0b0010]),
        m([0b0000, 0b0000, 0b1111, 0b0000]),
        m([0b0100, 0b0100, 0b0100, 0b0100]),
    ],
    // O
    [
        m([0b0000, 0b0110, 0b0110, 0b0000]),
        m([0b0000, 0b0110, 0b0110, 0b0000]),
        m([0b0000, 0b0110, 0b0110, 0b0000]),
        m([0b0000, 0b0110, 0b0110, 0b0000]),
    ],
    // T
    [
        m([0b0000, 0b0100, 0b1110, 0b0000]),
        m([0b0000, 0b0100, 0b0110, 0b0100]),
        m([0b0000, 0b0000, 0b1110, 0b0100]),
        m([0b0000, 0b0100, 0b1100, 0b0100]),
    ],
    // J
    [
        m([0b0000, 0b1000, 0b1110, 0b0000]),
        m([0b0000, 0b0110, 0b0100, 0b0100]),
        m([0b0000, 0b0000, 0b1110, 0b0010]),
        m([0b0000, 0b0100, 0b0100, 0b1100]),
    ],
    // L
    [
        m([0b0000, 0b0010, 0b1110, 0b0000]),
        m([0b0000, 0b0100, 0b0100, 0b0110]),
        m([0b0000, 0b0000, 0b1110, 0b1000]),
        m([0b0000, 0b1100, 0b0100, 0b0100]),
    ],
    // S
    [
        m([0b0000, 0b0110, 0b1100, 0b0000]),
        m([0b0000, 0b0100, 0b0110, 0b0010]),
        m([0b0000, 0b0000, 0b0110, 0b1100]),
        m([0b0000, 0b1000, 0b1100, 0b0100]),
    ],
    // Z
    [
        m([0b0000, 0b1100, 0b0110, 0b0000]),
        m([0b0000, 0b0010, 0b0110, 0b0100]),
        m([0b0000, 0b0000, 0b1100, 0b0110]),
        m([0b0000, 0b0100, 0b1100, 0b1000]),
    ],
];

/// Mask for a variant in a given orientation.
#[inline(always)]
pub fn mask(variant: Variant, orientation: Orientation) -> ShapeMask {
    SHAPE_TABLE[variant.index()][orientation.index()]
}

/// Whether `(local_row, local_col)` is occupied for this variant/orientation.
pub fn cells_occupied(
    variant: Variant,
    orientation: Orientation,
    local_row: usize,
    local_col: usize,
) -> bool {
    mask(variant, orientation).is_set(local_row, local_col)
}
