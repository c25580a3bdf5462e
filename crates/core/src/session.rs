//! Session module - drives the active piece and the board tick by tick
//!
//! A tick is one [`TickEvent`]: either a player command or a gravity timeout.
//! The session owns the board, the active piece and the counters, and moves
//! through the phases
//!
//! ```text
//! Falling --(can't descend)--> Locking --(rows removed)--> Cleared
//!    ^                            |                           |
//!    +-------(spawn ok)-----------+---------------------------+
//!                                 +--(spawn blocked / quit)--> GameOver
//! ```
//!
//! `Locking` and `Cleared` only exist inside a single tick; between ticks the
//! phase is always `Falling` or `GameOver`. The session never reads a clock:
//! callers measure elapsed time and ask [`GameSession::gravity_due`].

use std::time::Duration;

use tracing::{debug, info};

use crate::board::Board;
use crate::piece::Piece;
use crate::rng::{RandomVariants, VariantSource};
use crate::scoring::{gravity_interval_micros, level_for_lines, line_clear_points};
use crate::types::{Command, GameConfig};

/// Where the session is in its lock/clear cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Falling,
    Locking,
    Cleared,
    GameOver,
}

/// What drives a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    Command(Command),
    /// The gravity interval elapsed since the last forced descent.
    Gravity,
}

impl From<Command> for TickEvent {
    fn from(command: Command) -> Self {
        TickEvent::Command(command)
    }
}

/// Result of a lock, kept until someone takes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub points: u32,
    pub level_up: bool,
}

/// What a tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing happened: the session is over or paused.
    Ignored,
    /// The piece moved or rotated.
    Moved,
    /// A move or rotation was illegal and rolled back.
    Blocked,
    /// The piece locked and a new one spawned.
    Locked(LockEvent),
    Paused,
    Resumed,
    /// The session just ended, by quitting or by a blocked spawn.
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameSession<S = RandomVariants> {
    config: GameConfig,
    board: Board,
    active: Piece,
    source: S,
    phase: Phase,
    paused: bool,
    score: u32,
    level: u32,
    lines: u32,
    gravity_interval_micros: u64,
    /// Successful spawns so far, including the first piece.
    pieces_spawned: u32,
    last_event: Option<LockEvent>,
}

impl<S: VariantSource> GameSession<S> {
    /// Start a session on an empty board and spawn the first piece.
    pub fn new(config: GameConfig, source: S) -> Self {
        let mut board = Board::new(config.width, config.height);
        board.init();
        Self::with_board(config, board, source)
    }

    /// Start a session on a pre-filled board.
    ///
    /// The board's own dimensions win over `config.width`/`config.height`.
    pub fn with_board(config: GameConfig, board: Board, mut source: S) -> Self {
        let config = GameConfig {
            width: board.width() as u16,
            height: board.height() as u16,
            ..config
        };
        let first = source.next_variant();
        let level = level_for_lines(0, &config);
        let mut session = Self {
            config,
            active: Piece::new(first, board.width()),
            board,
            source,
            phase: Phase::Falling,
            paused: false,
            score: 0,
            level,
            lines: 0,
            gravity_interval_micros: gravity_interval_micros(level, &config),
            pieces_spawned: 0,
            last_event: None,
        };
        session.spawn(first);
        session
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The falling piece. After a blocked spawn this is the piece that
    /// could not enter the board.
    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Total lines cleared this session.
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn gravity_interval_micros(&self) -> u64 {
        self.gravity_interval_micros
    }

    pub fn gravity_interval(&self) -> Duration {
        Duration::from_micros(self.gravity_interval_micros)
    }

    /// Whether `elapsed` since the last forced descent warrants another.
    pub fn gravity_due(&self, elapsed: Duration) -> bool {
        elapsed >= self.gravity_interval()
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Advance the session by one event.
    pub fn tick(&mut self, event: impl Into<TickEvent>) -> TickOutcome {
        if self.phase == Phase::GameOver {
            return TickOutcome::Ignored;
        }

        let command = match event.into() {
            TickEvent::Command(Command::Quit) => {
                info!(score = self.score, "quit requested");
                self.finish();
                return TickOutcome::GameOver;
            }
            TickEvent::Command(Command::Pause) => {
                self.paused = !self.paused;
                debug!(paused = self.paused, "pause toggled");
                return if self.paused {
                    TickOutcome::Paused
                } else {
                    TickOutcome::Resumed
                };
            }
            _ if self.paused => return TickOutcome::Ignored,
            TickEvent::Gravity => Command::SoftDrop,
            TickEvent::Command(command) => command,
        };

        match command {
            Command::MoveLeft => self.shift(0, -1),
            Command::MoveRight => self.shift(0, 1),
            Command::Rotate => moved_or_blocked(self.active.try_rotate(&self.board)),
            Command::SoftDrop => {
                if self.active.try_move_by(&self.board, 1, 0) {
                    TickOutcome::Moved
                } else {
                    self.lock_active()
                }
            }
            Command::HardDrop => {
                self.active.origin_row = self.active.drop_row(&self.board);
                self.lock_active()
            }
            Command::Pause | Command::Quit => unreachable!("handled above"),
        }
    }

    fn shift(&mut self, d_row: i32, d_col: i32) -> TickOutcome {
        moved_or_blocked(self.active.try_move_by(&self.board, d_row, d_col))
    }

    /// Commit the active piece, clear rows, update counters, spawn the next.
    fn lock_active(&mut self) -> TickOutcome {
        self.phase = Phase::Locking;
        let cells = self.active.board_cells(&self.board);
        self.board.place(&cells, self.active.variant);

        let cleared = self.board.compact_rows() as u32;
        if cleared > 0 {
            self.phase = Phase::Cleared;
        }

        let points = line_clear_points(cleared, self.level, &self.config);
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(cleared);

        let level = level_for_lines(self.lines, &self.config);
        let level_up = level > self.level;
        if level_up {
            self.level = level;
            self.gravity_interval_micros = gravity_interval_micros(level, &self.config);
            debug!(
                level,
                gravity_us = self.gravity_interval_micros,
                "level up"
            );
        }

        let event = LockEvent {
            lines_cleared: cleared,
            points,
            level_up,
        };
        debug!(
            variant = ?self.active.variant,
            lines = cleared,
            points,
            score = self.score,
            "piece locked"
        );
        self.last_event = Some(event);

        let next = self.source.next_variant();
        if self.spawn(next) {
            TickOutcome::Locked(event)
        } else {
            TickOutcome::GameOver
        }
    }

    /// Spawn `variant` at the top. Ends the game if the spawn collides.
    fn spawn(&mut self, variant: crate::types::Variant) -> bool {
        if self.active.try_spawn(&self.board, variant) {
            self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
            self.phase = Phase::Falling;
            debug!(?variant, "spawned");
            true
        } else {
            info!(?variant, "spawn blocked");
            self.finish();
            false
        }
    }

    fn finish(&mut self) {
        self.phase = Phase::GameOver;
        self.paused = false;
        info!(
            score = self.score,
            level = self.level,
            lines = self.lines,
            "game over"
        );
    }
}

fn moved_or_blocked(ok: bool) -> TickOutcome {
    if ok {
        TickOutcome::Moved
    } else {
        TickOutcome::Blocked
    }
}
