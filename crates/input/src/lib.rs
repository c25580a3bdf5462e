//! Terminal input.
//!
//! Maps `crossterm` key events into [`crate::types::Command`] and polls the
//! terminal without blocking past a short window.
//!
//! | Key | Command |
//! |-----|---------|
//! | ← H A | Move left |
//! | → L D | Move right |
//! | ↓ J S | Soft drop |
//! | ↑ K W | Rotate |
//! | Space | Hard drop |
//! | P Esc | Pause |
//! | Q Ctrl+C | Quit |

pub mod map;
pub mod poll;

pub use blockfall_types as types;

pub use map::{map_key, should_quit};
pub use poll::{command_for_event, TerminalInput};
