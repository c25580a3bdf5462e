//! Property tests for the board and the session state machine.
//!
//! - Compaction removes exactly the complete rows and keeps the others in
//!   order, bottom-aligned.
//! - Over any command stream the active piece stays legal, counters only
//!   grow, and level and gravity follow the line total.
//! - A rejected move or rotation leaves the piece untouched.
//! - Four successful rotations in a row return the piece to where it was.

use proptest::prelude::*;

use blockfall_core::{
    gravity_interval_micros, level_for_lines, Board, GameSession, Piece, RandomVariants, TickEvent,
    TickOutcome,
};
use blockfall_types::{Cell, Command, GameConfig, Orientation, Variant, SHAPE_BOX};

fn board_from_bits(rows: &[Vec<bool>]) -> Board {
    let width = rows[0].len();
    let mut board = Board::new(width as u16, rows.len() as u16);
    for (row, bits) in rows.iter().enumerate() {
        for (col, &filled) in bits.iter().enumerate() {
            if filled {
                board.set(row, col, Cell::Filled(Variant::ALL[(row + col) % 7]));
            }
        }
    }
    board
}

fn arb_rows() -> impl Strategy<Value = Vec<Vec<bool>>> {
    (4usize..=12, 4usize..=22).prop_flat_map(|(width, height)| {
        // Bias towards full rows so compaction has work to do.
        let row = prop_oneof![
            2 => Just(vec![true; width]),
            3 => proptest::collection::vec(any::<bool>(), width),
        ];
        proptest::collection::vec(row, height)
    })
}

fn arb_tick() -> impl Strategy<Value = TickEvent> {
    prop_oneof![
        Just(TickEvent::Command(Command::MoveLeft)),
        Just(TickEvent::Command(Command::MoveRight)),
        Just(TickEvent::Command(Command::Rotate)),
        Just(TickEvent::Command(Command::SoftDrop)),
        Just(TickEvent::Command(Command::HardDrop)),
        Just(TickEvent::Command(Command::Pause)),
        Just(TickEvent::Gravity),
        Just(TickEvent::Gravity),
    ]
}

fn arb_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        Just(Command::MoveLeft),
        Just(Command::MoveRight),
        Just(Command::Rotate),
        Just(Command::SoftDrop),
    ]
}

proptest! {
    #[test]
    fn compaction_removes_exactly_the_full_rows(rows in arb_rows()) {
        let mut board = board_from_bits(&rows);
        let before = board.clone();
        let full = (0..board.height()).filter(|&r| board.is_row_complete(r)).count();
        let kept: Vec<&[Cell]> = before
            .rows()
            .filter(|row| !row.iter().all(|c| c.is_filled()))
            .collect();

        prop_assert_eq!(board.compact_rows(), full);
        prop_assert_eq!(board.filled_count(), before.filled_count() - full * board.width());
        prop_assert!((0..board.height()).all(|r| !board.is_row_complete(r)));

        let after: Vec<&[Cell]> = board.rows().collect();
        for row in &after[..full] {
            prop_assert!(row.iter().all(|c| c.is_empty()));
        }
        prop_assert_eq!(&after[full..], &kept[..]);
    }

    #[test]
    fn session_invariants_hold_over_any_stream(
        seed in any::<u64>(),
        ticks in proptest::collection::vec(arb_tick(), 1..400),
    ) {
        let config = GameConfig::default();
        let mut game = GameSession::new(config, RandomVariants::seeded(seed));

        for tick in ticks {
            let (score, lines, interval) = (game.score(), game.lines(), game.gravity_interval_micros());
            let outcome = game.tick(tick);

            prop_assert!(game.score() >= score);
            prop_assert!(game.lines() >= lines);
            prop_assert!(game.gravity_interval_micros() <= interval);
            prop_assert!(game.gravity_interval_micros() >= config.min_gravity_micros);
            prop_assert_eq!(game.level(), level_for_lines(game.lines(), &config));
            prop_assert_eq!(
                game.gravity_interval_micros(),
                gravity_interval_micros(game.level(), &config)
            );

            if let TickOutcome::Locked(event) = outcome {
                prop_assert_eq!(game.lines() - lines, event.lines_cleared);
                prop_assert_eq!(game.score() - score, event.points);
            }

            if game.game_over() {
                break;
            }
            prop_assert!(game.active().is_legal(game.board()));
        }
    }

    #[test]
    fn rejected_moves_change_nothing(
        mut rows in arb_rows(),
        variant in 0usize..7,
        commands in proptest::collection::vec(arb_command(), 1..60),
    ) {
        // An open spawn box, so every variant starts legal.
        for row in rows.iter_mut().take(SHAPE_BOX) {
            row.fill(false);
        }
        let board = board_from_bits(&rows);
        let mut piece = Piece::new(Variant::ALL[variant], board.width());
        prop_assert!(piece.is_legal(&board));

        for command in commands {
            let before = piece;
            let ok = match command {
                Command::MoveLeft => piece.try_move_by(&board, 0, -1),
                Command::MoveRight => piece.try_move_by(&board, 0, 1),
                Command::Rotate => piece.try_rotate(&board),
                _ => piece.try_move_by(&board, 1, 0),
            };
            if !ok {
                prop_assert_eq!(piece, before);
            }
            prop_assert!(piece.is_legal(&board));
        }
    }

    #[test]
    fn four_rotations_are_identity_from_any_orientation(
        variant in 0usize..7,
        orientation in 0usize..4,
        origin_row in 0i32..12,
        origin_col in -1i32..7,
    ) {
        let board = Board::new(10, 20);
        let mut piece = Piece {
            origin_row,
            origin_col,
            variant: Variant::ALL[variant],
            orientation: Orientation::ALL[orientation],
        };
        prop_assume!(piece.is_legal(&board));

        let start = piece;
        let mut turns = 0;
        while turns < 4 && piece.try_rotate(&board) {
            turns += 1;
        }
        if turns == 4 {
            prop_assert_eq!(piece, start);
        } else {
            prop_assert!(piece.is_legal(&board));
        }
    }
}
