//! Non-blocking key polling.
//!
//! Waits at most one poll window for a key event and returns at most one
//! command. Silence inside the window is a normal `Ok(None)`.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::map::map_key;
use crate::types::Command;

/// Reads key presses from the controlling terminal.
#[derive(Debug, Default)]
pub struct TerminalInput {
    _private: (),
}

impl TerminalInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait up to `window` for one key press and map it.
    ///
    /// Releases, repeats, resizes and unbound keys all yield `Ok(None)`.
    pub fn poll_command(&mut self, window: Duration) -> io::Result<Option<Command>> {
        if !event::poll(window)? {
            return Ok(None);
        }
        Ok(command_for_event(event::read()?))
    }
}

/// Command for a raw terminal event, if it is a bound key press.
pub fn command_for_event(event: Event) -> Option<Command> {
    match event {
        Event::Key(key) => command_for_key(key),
        _ => None,
    }
}

fn command_for_key(key: KeyEvent) -> Option<Command> {
    match key.kind {
        KeyEventKind::Press => map_key(key),
        // Terminal auto-repeat is left out so held keys don't flood the queue.
        KeyEventKind::Repeat | KeyEventKind::Release => None,
    }
}
