//! Core types module - shared data structures and constants
//!
//! Pure data used by the simulation, the input mapping and the terminal view.
//! Nothing in here performs I/O or depends on another crate.
//!
//! # Board Dimensions
//!
//! Default playfield is 10 columns by 20 rows. Coordinates are always
//! `(row, col)`: row 0 is the top of the board, col 0 is the left wall.
//! Shape masks, pieces and the board all use this same ordering.
//!
//! # Gravity
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 500ms |
//! | 2 | 250ms |
//! | 3 | ~166ms |
//! | n | 500ms / n, never below 50ms |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Command, Orientation, Variant, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(Variant::from_letter('t'), Some(Variant::T));
//! assert_eq!(Orientation::West.rotate_cw(), Orientation::North);
//! assert_ne!(Command::Rotate, Command::HardDrop);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u16 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u16 = 20;

/// Largest board width or height the binary accepts.
pub const MAX_BOARD_SIDE: u16 = 100;

/// Side length of the square box every shape mask lives in.
pub const SHAPE_BOX: usize = 4;

/// Number of cells every standard piece occupies.
pub const CELLS_PER_PIECE: usize = 4;

/// Gravity interval at level 1, in microseconds.
pub const BASE_GRAVITY_MICROS: u64 = 500_000;

/// Gravity interval floor, in microseconds.
pub const MIN_GRAVITY_MICROS: u64 = 50_000;

/// Lines needed to advance one level.
pub const LINES_PER_LEVEL: u32 = 10;

/// Points for a single cleared line at level 1.
pub const POINTS_PER_LINE: u32 = 100;

/// How long the runner waits for a key each loop iteration.
pub const POLL_WINDOW_MS: u64 = 16;

/// The seven piece families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    I,
    O,
    T,
    J,
    L,
    S,
    Z,
}

impl Variant {
    /// Every variant, in shape table order.
    pub const ALL: [Variant; 7] = [
        Variant::I,
        Variant::O,
        Variant::T,
        Variant::J,
        Variant::L,
        Variant::S,
        Variant::Z,
    ];

    /// Position of this variant in the shape table.
    pub fn index(self) -> usize {
        match self {
            Variant::I => 0,
            Variant::O => 1,
            Variant::T => 2,
            Variant::J => 3,
            Variant::L => 4,
            Variant::S => 5,
            Variant::Z => 6,
        }
    }

    /// Single uppercase letter, used by the HUD and by ASCII board fixtures.
    pub fn letter(self) -> char {
        match self {
            Variant::I => 'I',
            Variant::O => 'O',
            Variant::T => 'T',
            Variant::J => 'J',
            Variant::L => 'L',
            Variant::S => 'S',
            Variant::Z => 'Z',
        }
    }

    pub fn from_letter(ch: char) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.letter() == ch.to_ascii_uppercase())
    }
}

/// Rotation states (North = spawn orientation), cyclic in clockwise order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::North,
        Orientation::East,
        Orientation::South,
        Orientation::West,
    ];

    /// Orientation as an integer in `0..4`.
    pub fn index(self) -> usize {
        match self {
            Orientation::North => 0,
            Orientation::East => 1,
            Orientation::South => 2,
            Orientation::West => 3,
        }
    }

    /// Advance one step clockwise.
    pub fn rotate_cw(self) -> Self {
        match self {
            Orientation::North => Orientation::East,
            Orientation::East => Orientation::South,
            Orientation::South => Orientation::West,
            Orientation::West => Orientation::North,
        }
    }
}

/// A board cell. The variant is kept only so the view can colour settled
/// cells; game rules treat every `Filled` cell the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled(Variant),
}

impl Cell {
    pub fn is_filled(self) -> bool {
        matches!(self, Cell::Filled(_))
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Player commands. Key bindings live in the input crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    Rotate,
    SoftDrop,
    HardDrop,
    Pause,
    Quit,
}

/// Tunables for one game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u16,
    pub height: u16,
    /// Gravity interval at level 1.
    pub base_gravity_micros: u64,
    /// Gravity never gets faster than this.
    pub min_gravity_micros: u64,
    pub lines_per_level: u32,
    pub points_per_line: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            base_gravity_micros: BASE_GRAVITY_MICROS,
            min_gravity_micros: MIN_GRAVITY_MICROS,
            lines_per_level: LINES_PER_LEVEL,
            points_per_line: POINTS_PER_LINE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_index_matches_all_order() {
        for (i, v) in Variant::ALL.iter().enumerate() {
            assert_eq!(v.index(), i);
        }
    }

    #[test]
    fn test_variant_letters_roundtrip() {
        for v in Variant::ALL {
            assert_eq!(Variant::from_letter(v.letter()), Some(v));
        }
        assert_eq!(Variant::from_letter('.'), None);
    }

    #[test]
    fn test_orientation_cycles_in_four_steps() {
        let mut o = Orientation::North;
        for step in 1..=4 {
            o = o.rotate_cw();
            assert_eq!(o.index(), step % 4);
        }
        assert_eq!(o, Orientation::North);
    }

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!((config.width, config.height), (10, 20));
        assert_eq!(config.base_gravity_micros, 500_000);
        assert!(config.min_gravity_micros > 0);
    }
}
