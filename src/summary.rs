//! Final summary printed after the terminal is restored.

use std::fmt;

use serde::Serialize;

use crate::core::{GameSession, VariantSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub pieces: u32,
}

impl GameSummary {
    pub fn from_session<S: VariantSource>(session: &GameSession<S>) -> Self {
        Self {
            score: session.score(),
            level: session.level(),
            lines: session.lines(),
            pieces: session.pieces_spawned(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for GameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Game over. Score: {}  Level: {}  Lines: {}",
            self.score, self.level, self.lines
        )
    }
}
