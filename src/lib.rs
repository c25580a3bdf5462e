//! Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates under short module names and hosts the
//! pieces only the binary needs: CLI config, logging setup, the game loop and
//! the final summary.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub mod config;
pub mod logging;
pub mod runner;
pub mod summary;

pub use config::Cli;
pub use runner::{run, InputSource, Renderer, TerminalView};
pub use summary::GameSummary;
