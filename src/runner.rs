//! Game loop and its collaborators.
//!
//! The loop is single-threaded: render, poll for at most one command, apply
//! it, then apply gravity if the interval has elapsed on the monotonic clock.
//! The poll window doubles as the sleep that bounds CPU use.

use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::{info, trace};

use crate::core::{GameSession, TickEvent, TickOutcome, VariantSource};
use crate::input::TerminalInput;
use crate::term::{GameView, TerminalRenderer, Viewport};
use crate::types::Command;

/// Source of player commands.
pub trait InputSource {
    /// Wait up to `window` for one command. `Ok(None)` means nothing arrived.
    fn poll_command(&mut self, window: Duration) -> Result<Option<Command>>;
}

/// Draws the session.
pub trait Renderer {
    fn render<S: VariantSource>(&mut self, session: &GameSession<S>) -> Result<()>;
}

impl InputSource for TerminalInput {
    fn poll_command(&mut self, window: Duration) -> Result<Option<Command>> {
        Ok(TerminalInput::poll_command(self, window)?)
    }
}

/// crossterm-backed renderer: lays the session out with [`GameView`] at the
/// current terminal size.
pub struct TerminalView {
    renderer: TerminalRenderer,
    view: GameView,
}

impl TerminalView {
    pub fn new() -> Self {
        Self {
            renderer: TerminalRenderer::new(),
            view: GameView::default(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TerminalView {
    fn render<S: VariantSource>(&mut self, session: &GameSession<S>) -> Result<()> {
        let (w, h) = self.renderer.size();
        let fb = self.view.render(session, Viewport::new(w, h));
        self.renderer.draw(fb)
    }
}

/// Drive `session` until it is over, then render the final frame.
pub fn run<S, I, R>(
    session: &mut GameSession<S>,
    input: &mut I,
    renderer: &mut R,
    poll_window: Duration,
) -> Result<()>
where
    S: VariantSource,
    I: InputSource,
    R: Renderer,
{
    let mut last_gravity = Instant::now();

    while !session.game_over() {
        renderer.render(session)?;

        if let Some(command) = input.poll_command(poll_window)? {
            let outcome = session.tick(command);
            trace!(?command, ?outcome, "command applied");
            // A fresh piece or a resumed game gets a full interval.
            if matches!(outcome, TickOutcome::Locked(_) | TickOutcome::Resumed) {
                last_gravity = Instant::now();
            }
        }

        if session.game_over() {
            break;
        }

        if session.gravity_due(last_gravity.elapsed()) {
            let outcome = session.tick(TickEvent::Gravity);
            trace!(?outcome, "gravity");
            last_gravity = Instant::now();
        }
    }

    info!(
        score = session.score(),
        level = session.level(),
        lines = session.lines(),
        "game over"
    );
    renderer.render(session)
}
