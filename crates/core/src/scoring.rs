//! Scoring module - points, levels and gravity
//!
//! Classic rules without bonuses:
//! - Each cleared line is worth `points_per_line * level`, using the level in
//!   force when the piece locked.
//! - Level starts at 1 and rises by one every `lines_per_level` lines.
//! - Gravity at level `n` is the base interval divided by `n`, clamped to a
//!   positive floor.

use crate::types::GameConfig;

/// Points for clearing `lines` rows at `level`.
pub fn line_clear_points(lines: u32, level: u32, config: &GameConfig) -> u32 {
    lines
        .saturating_mul(config.points_per_line)
        .saturating_mul(level)
}

/// Level for a running line total. Always at least 1.
pub fn level_for_lines(total_lines: u32, config: &GameConfig) -> u32 {
    total_lines / config.lines_per_level.max(1) + 1
}

/// Gravity interval for a level, in microseconds.
///
/// Non-increasing in `level` and never below `config.min_gravity_micros`
/// (itself clamped to 1).
pub fn gravity_interval_micros(level: u32, config: &GameConfig) -> u64 {
    let floor = config.min_gravity_micros.max(1);
    (config.base_gravity_micros / u64::from(level.max(1))).max(floor)
}
