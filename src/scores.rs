//! High-score persistence: one integer, stored as ASCII digits.

use std::io;
use std::path::{Path, PathBuf};

pub const SCORE_FILE: &str = "scores";
/// Overrides the score file location.
pub const SCORE_PATH_VAR: &str = "SHELL_INVADERS_SCORES";

pub fn high_score_path() -> PathBuf {
    std::env::var_os(SCORE_PATH_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(SCORE_FILE))
}

/// A missing or malformed file reads as zero.
pub fn load_high_score(path: &Path) -> u32 {
    std::fs::read_to_string(path)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0)
}

pub fn save_high_score(path: &Path, score: u32) -> io::Result<()> {
    std::fs::write(path, score.to_string())
}
