//! Command-line configuration.

use std::path::PathBuf;

use anyhow::{ensure, Result};
use clap::Parser;

use crate::types::{GameConfig, MAX_BOARD_SIDE, SHAPE_BOX};

#[derive(Debug, Clone, Parser)]
#[command(name = "blockfall", version, about = "Falling-block puzzle in the terminal")]
pub struct Cli {
    #[arg(long, default_value_t = crate::types::BOARD_WIDTH, help = "Board width in cells")]
    pub width: u16,

    #[arg(long, default_value_t = crate::types::BOARD_HEIGHT, help = "Board height in cells")]
    pub height: u16,

    #[arg(
        long,
        default_value_t = crate::types::BASE_GRAVITY_MICROS / 1000,
        help = "Gravity interval at level 1, in milliseconds"
    )]
    pub gravity_ms: u64,

    #[arg(long, help = "Seed the piece generator for a reproducible game")]
    pub seed: Option<u64>,

    #[arg(long, help = "Write logs to this file (the screen is taken by the game)")]
    pub log_file: Option<PathBuf>,

    #[arg(short = 'v', long, action = clap::ArgAction::Count, help = "Increase log verbosity (-v = INFO, -vv = DEBUG, -vvv = TRACE)")]
    pub verbose: u8,

    #[arg(long, help = "Print the final summary as JSON")]
    pub json: bool,
}

impl Cli {
    /// Validated session config.
    pub fn game_config(&self) -> Result<GameConfig> {
        ensure!(
            self.width as usize >= SHAPE_BOX,
            "board width {} is narrower than a piece ({SHAPE_BOX})",
            self.width
        );
        ensure!(
            self.height as usize >= SHAPE_BOX,
            "board height {} is shorter than a piece ({SHAPE_BOX})",
            self.height
        );
        ensure!(
            self.width <= MAX_BOARD_SIDE && self.height <= MAX_BOARD_SIDE,
            "board {}x{} exceeds the {MAX_BOARD_SIDE}-cell limit",
            self.width,
            self.height
        );
        ensure!(self.gravity_ms > 0, "gravity interval must be positive");

        let defaults = GameConfig::default();
        let base_gravity_micros = self.gravity_ms.saturating_mul(1000);
        Ok(GameConfig {
            width: self.width,
            height: self.height,
            base_gravity_micros,
            min_gravity_micros: defaults.min_gravity_micros.min(base_gravity_micros),
            ..defaults
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("blockfall").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.game_config().unwrap(), GameConfig::default());
        assert!(cli.seed.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn test_custom_board_and_gravity() {
        let cli = parse(&["--width", "12", "--height", "24", "--gravity-ms", "800", "-vv"]);
        let config = cli.game_config().unwrap();
        assert_eq!((config.width, config.height), (12, 24));
        assert_eq!(config.base_gravity_micros, 800_000);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_floor_never_exceeds_base() {
        let config = parse(&["--gravity-ms", "20"]).game_config().unwrap();
        assert_eq!(config.base_gravity_micros, 20_000);
        assert_eq!(config.min_gravity_micros, 20_000);
    }

    #[test]
    fn test_rejects_tiny_board() {
        assert!(parse(&["--width", "3"]).game_config().is_err());
        assert!(parse(&["--height", "2"]).game_config().is_err());
        assert!(parse(&["--gravity-ms", "0"]).game_config().is_err());
    }

    #[test]
    fn test_rejects_huge_board() {
        assert!(parse(&["--width", "40000", "--height", "4"]).game_config().is_err());
        assert!(parse(&["--height", "101"]).game_config().is_err());
        let config = parse(&["--width", "100", "--height", "100"]).game_config().unwrap();
        assert_eq!((config.width, config.height), (100, 100));
    }
}
