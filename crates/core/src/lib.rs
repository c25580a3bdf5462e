//! Core game logic - pure, single-threaded and testable
//!
//! This crate holds the whole simulation: shape data, the settled-cell grid,
//! the falling piece and the session state machine. It has no terminal, clock
//! or I/O dependencies; callers feed it [`TickEvent`]s and read state back.
//!
//! # Module Structure
//!
//! - [`shapes`]: 4x4 occupancy masks for every variant and orientation
//! - [`board`]: the grid of settled cells and row compaction
//! - [`piece`]: the falling piece with attempt-and-rollback moves
//! - [`scoring`]: points, level and gravity interval formulas
//! - [`rng`]: where the next variant comes from
//! - [`session`]: the tick-driven state machine tying it together
//!
//! # Rules
//!
//! - Pieces spawn at the top, centred, in North orientation
//! - Moves and rotations either succeed or change nothing; there are no kicks
//! - A piece that cannot descend locks immediately
//! - Each cleared line scores `100 * level`; level rises every 10 lines
//! - A blocked spawn ends the game
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameSession, SequenceVariants, TickEvent, TickOutcome};
//! use blockfall_types::{Command, GameConfig, Variant};
//!
//! let mut game = GameSession::new(GameConfig::default(), SequenceVariants::repeat(Variant::I));
//!
//! assert_eq!(game.tick(Command::MoveLeft), TickOutcome::Moved);
//! assert_eq!(game.tick(TickEvent::Gravity), TickOutcome::Moved);
//! assert!(matches!(game.tick(Command::HardDrop), TickOutcome::Locked(_)));
//!
//! assert_eq!(game.board().filled_count(), 4);
//! ```

pub mod board;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod shapes;

pub use blockfall_types as types;

pub use board::{Board, BoardPos};
pub use piece::Piece;
pub use rng::{RandomVariants, SequenceVariants, VariantSource};
pub use scoring::{gravity_interval_micros, level_for_lines, line_clear_points};
pub use session::{GameSession, LockEvent, Phase, TickEvent, TickOutcome};
pub use shapes::{cells_occupied, ShapeMask, SHAPE_TABLE};
