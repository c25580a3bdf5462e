//! Blockfall terminal runner (default binary).
//!
//! Parses the CLI, takes over the terminal for the game, and prints a
//! summary once the terminal is restored.

use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use blockfall::core::{GameSession, RandomVariants};
use blockfall::input::TerminalInput;
use blockfall::types::POLL_WINDOW_MS;
use blockfall::{logging, run, Cli, GameSummary, TerminalView};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.game_config()?;

    if let Some(path) = &cli.log_file {
        logging::init_file_logging(path, cli.verbose)?;
    }

    let source = match cli.seed {
        Some(seed) => RandomVariants::seeded(seed),
        None => RandomVariants::new(),
    };
    let mut session = GameSession::new(config, source);
    tracing::info!(
        width = config.width,
        height = config.height,
        seed = ?cli.seed,
        "starting game"
    );

    let mut view = TerminalView::new();
    view.enter()?;
    let mut input = TerminalInput::new();
    let result = run(
        &mut session,
        &mut input,
        &mut view,
        Duration::from_millis(POLL_WINDOW_MS),
    );

    // Always try to restore terminal state.
    let _ = view.exit();
    result?;

    let summary = GameSummary::from_session(&session);
    if cli.json {
        println!("{}", summary.to_json()?);
    } else {
        println!("{summary}");
    }
    Ok(())
}
