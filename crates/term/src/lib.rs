//! Terminal rendering.
//!
//! A small game-oriented layer: [`GameView`] turns a session into a
//! [`FrameBuffer`] without touching the terminal, and [`TerminalRenderer`]
//! flushes framebuffers through crossterm.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::{changed_runs, TerminalRenderer};
