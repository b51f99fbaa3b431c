use crate::model::standings::ScoreCard;

pub const HEADER: [&str; 6] = [
    "Callsign",
    "Entries",
    "Duplicates",
    "Base Score",
    "Bonus Points",
    "Total Score",
];

pub fn render_leaderboard_csv(board: &[ScoreCard]) -> String {
    let mut out = HEADER.join(",");
    out.push('\n');
    for card in board {
        let row = [
            csv_field(&card.callsign),
            card.entries.to_string(),
            card.duplicates.to_string(),
            card.base_score.to_string(),
            card.bonus_points.to_string(),
            card.total_score.to_string(),
        ]
        .join(",");
        out.push_str(&row);
        out.push('\n');
    }
    out
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
