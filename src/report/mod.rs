pub mod json;
pub mod leaderboard;
pub mod markdown;

use std::fs;
use std::path::Path;

use crate::model::standings::ContestResults;
use json::{RunSummary, render_summary_json};
use leaderboard::render_leaderboard_csv;
use markdown::{render_club_table, render_leaderboard_table, render_repeater_table};

pub const LEADERBOARD_CSV: &str = "contest_scores.csv";
pub const LEADERBOARD_MD: &str = "leaderboard.md";
pub const REPEATERS_MD: &str = "repeater_activations.md";
pub const CLUBS_MD: &str = "club_activations.md";
pub const SUMMARY_JSON: &str = "summary.json";

// ties go to the even digit
pub fn round_to(v: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (v * scale).round_ties_even() / scale
}

pub fn format_fixed(v: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, v)
}

pub fn format_optional(v: Option<f64>, decimals: usize) -> String {
    v.map(|v| format_fixed(v, decimals)).unwrap_or_default()
}

pub fn write_reports(
    results: &ContestResults,
    summary: &RunSummary,
    out_dir: &Path,
) -> Result<(), crate::error::AppError> {
    fs::create_dir_all(out_dir)?;

    let path = out_dir.join(LEADERBOARD_CSV);
    fs::write(&path, render_leaderboard_csv(&results.leaderboard))?;
    tracing::info!("wrote {}", path.display());

    for (name, body) in [
        (LEADERBOARD_MD, render_leaderboard_table(&results.leaderboard)),
        (REPEATERS_MD, render_repeater_table(&results.repeater_activations)),
        (CLUBS_MD, render_club_table(&results.club_activations)),
    ] {
        let path = out_dir.join(name);
        fs::write(&path, body)?;
        tracing::info!("wrote {}", path.display());
    }

    let path = out_dir.join(SUMMARY_JSON);
    fs::write(&path, render_summary_json(summary, results)?)?;
    tracing::info!("wrote {}", path.display());

    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
