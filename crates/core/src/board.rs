//! Board module - the grid of settled cells
//!
//! The board is a dumb row-major grid. It never decides whether a piece may
//! move; bounds checking is the piece's job, and the board's own mutators
//! treat a bad coordinate or an overwrite as a programming error.
//! Coordinates: `(row, col)`, row 0 at the top, col 0 at the left wall.

use crate::types::{Cell, Variant};

/// Absolute board coordinate, `(row, col)`.
pub type BoardPos = (usize, usize);

/// The playfield - `height` rows of `width` cells, flat storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Row-major cells (row * width + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board.
    pub fn new(width: u16, height: u16) -> Self {
        let (width, height) = (width as usize, height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    /// Build a board from ASCII rows, top row first.
    ///
    /// `.` or space is empty; a piece letter fills the cell with that variant;
    /// `#` fills with an unspecified variant. Mostly useful for fixtures.
    ///
    /// # Panics
    ///
    /// If the rows are ragged or contain any other character.
    pub fn from_ascii(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut board = Self::new(width as u16, height as u16);
        for (row, line) in rows.iter().enumerate() {
            assert_eq!(line.chars().count(), width, "ragged row {row}");
            for (col, ch) in line.chars().enumerate() {
                let cell = match ch {
                    '.' | ' ' => Cell::Empty,
                    '#' => Cell::Filled(Variant::I),
                    other => match Variant::from_letter(other) {
                        Some(v) => Cell::Filled(v),
                        None => panic!("unexpected board character {other:?}"),
                    },
                };
                board.cells[row * width + col] = cell;
            }
        }
        board
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(row * self.width + col)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Reset every cell to empty.
    pub fn init(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Whether a signed coordinate lies on the board.
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    /// Get cell at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Overwrite a single cell. Returns false if out of bounds.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether `(row, col)` holds a settled cell.
    ///
    /// # Panics
    ///
    /// If the coordinate is outside the board. Callers check bounds first.
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        match self.index(row, col) {
            Some(idx) => self.cells[idx].is_filled(),
            None => panic!(
                "is_occupied({row}, {col}) outside {}x{} board",
                self.height, self.width
            ),
        }
    }

    /// Commit cells into the grid.
    ///
    /// # Panics
    ///
    /// If any cell is out of bounds or already filled. The legality check
    /// must have ruled both out before a piece is placed.
    pub fn place(&mut self, cells: &[BoardPos], variant: Variant) {
        for &(row, col) in cells {
            let idx = self.index(row, col);
            assert!(
                idx.is_some_and(|i| self.cells[i].is_empty()),
                "place into ({row}, {col}) which is out of bounds or filled"
            );
        }
        for &(row, col) in cells {
            let idx = row * self.width + col;
            self.cells[idx] = Cell::Filled(variant);
        }
    }

    /// True iff every column of `row` is filled. Out-of-range rows are not.
    pub fn is_row_complete(&self, row: usize) -> bool {
        self.row(row)
            .is_some_and(|cells| cells.iter().all(|c| c.is_filled()))
    }

    /// Remove every complete row, shifting the rows above down and opening an
    /// empty row at the top for each one removed. Returns the number removed.
    ///
    /// Scans from the bottom. After a removal the same index is checked again,
    /// since the row that slid into it may be complete as well.
    pub fn compact_rows(&mut self) -> usize {
        let width = self.width;
        if width == 0 {
            return 0;
        }
        let mut removed = 0;
        let mut row = self.height;

        while row > 0 {
            let current = row - 1;
            if !self.is_row_complete(current) {
                row -= 1;
                continue;
            }

            // Rows 0..current slide down one; copy_within handles the overlap.
            self.cells.copy_within(0..current * width, width);
            self.cells[..width].fill(Cell::Empty);
            removed += 1;
        }

        removed
    }

    /// Cells of one row, left to right.
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// All rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width.max(1))
    }

    /// Flat row-major view of the grid.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of filled cells on the board.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_filled()).count()
    }

    /// Render as ASCII rows using piece letters and `.` for empty.
    pub fn to_ascii(&self) -> Vec<String> {
        self.rows()
            .map(|row| {
                row.iter()
                    .map(|c| match c {
                        Cell::Empty => '.',
                        Cell::Filled(v) => v.letter(),
                    })
                    .collect()
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::types::BOARD_WIDTH, crate::types::BOARD_HEIGHT)
    }
}
