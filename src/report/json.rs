use serde::Serialize;

use crate::model::standings::ContestResults;

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub tool_name: String,
    pub tool_version: String,
    pub n_repeaters: usize,
    pub n_clubs: usize,
    pub n_logs: usize,
    pub n_log_rows: usize,
    pub n_unknown_rows: usize,
    pub n_untimed_rows: usize,
}

#[derive(Serialize)]
struct SummaryDocument<'a> {
    #[serde(flatten)]
    summary: &'a RunSummary,
    #[serde(flatten)]
    results: &'a ContestResults,
}

pub fn render_summary_json(
    summary: &RunSummary,
    results: &ContestResults,
) -> Result<String, serde_json::Error> {
    let mut out = serde_json::to_string_pretty(&SummaryDocument { summary, results })?;
    out.push('\n');
    Ok(out)
}
