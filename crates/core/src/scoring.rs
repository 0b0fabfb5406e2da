//! Scoring module - classic line-clear scoring, levels and gravity pacing

use crate::types::{BASE_TICK_MS, LINES_PER_LEVEL, LINE_SCORES, MIN_TICK_MS, TICK_STEP_MS};

/// Calculate line clear score (Classic rules)
/// lines: number of lines cleared (1-4)
/// level: current level (0-based)
pub fn line_clear_score(lines: u32, level: u32) -> u32 {
    if lines == 0 || lines > 4 {
        return 0;
    }
    LINE_SCORES[lines as usize].saturating_mul(level + 1)
}

/// Level management
/// Level increases every 10 lines cleared
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL
}

/// Milliseconds between gravity ticks at `level`
pub fn tick_interval_ms(level: u32) -> u32 {
    BASE_TICK_MS
        .saturating_sub(level.saturating_mul(TICK_STEP_MS))
        .max(MIN_TICK_MS)
}
