use crate::model::standings::{ClubActivation, RepeaterActivation, ScoreCard};
use crate::report::leaderboard::HEADER;
use crate::report::{format_fixed, format_optional};

fn render_table(header: &[&str], numeric: &[bool], rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    out.push_str("| ");
    out.push_str(&header.join(" | "));
    out.push_str(" |\n|");
    for (i, _) in header.iter().enumerate() {
        if numeric.get(i).copied().unwrap_or(false) {
            out.push_str("---:|");
        } else {
            out.push_str(":---|");
        }
    }
    out.push('\n');
    for row in rows {
        out.push_str("| ");
        let cells = row.iter().map(|c| c.replace('|', "\\|")).collect::<Vec<_>>();
        out.push_str(&cells.join(" | "));
        out.push_str(" |\n");
    }
    out
}

pub fn render_leaderboard_table(board: &[ScoreCard]) -> String {
    let rows = board
        .iter()
        .map(|c| {
            vec![
                c.callsign.clone(),
                c.entries.to_string(),
                c.duplicates.to_string(),
                c.base_score.to_string(),
                c.bonus_points.to_string(),
                c.total_score.to_string(),
            ]
        })
        .collect::<Vec<_>>();
    render_table(&HEADER, &[false, true, true, true, true, true], &rows)
}

pub fn render_repeater_table(rows: &[RepeaterActivation]) -> String {
    let body = rows
        .iter()
        .map(|r| {
            vec![
                r.position.to_string(),
                r.rr_number.to_string(),
                r.group.clone(),
                r.name.clone(),
                format_fixed(r.frequency_mhz, 3),
                r.activations.to_string(),
                format_optional(r.readability, 2),
            ]
        })
        .collect::<Vec<_>>();
    render_table(
        &[
            "Position",
            "RR#",
            "Group",
            "Name",
            "Frequency",
            "Activations",
            "Readability",
        ],
        &[true, true, false, false, true, true, true],
        &body,
    )
}

pub fn render_club_table(rows: &[ClubActivation]) -> String {
    let body = rows
        .iter()
        .map(|c| {
            vec![
                c.position.to_string(),
                c.group.clone(),
                c.activations.to_string(),
            ]
        })
        .collect::<Vec<_>>();
    render_table(
        &["Position", "Group", "Activations"],
        &[true, false, true],
        &body,
    )
}
