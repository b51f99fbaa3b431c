use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreCard {
    pub callsign: String,
    pub entries: usize,
    pub duplicates: usize,
    pub base_score: usize,
    pub bonus_points: usize,
    pub total_score: usize,
    pub bonus_clubs: Vec<String>,
    pub unknown_repeaters: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepeaterActivation {
    pub position: usize,
    pub rr_number: i64,
    pub group: String,
    pub name: String,
    pub frequency_mhz: f64,
    pub location: String,
    pub activations: usize,
    pub readability: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClubActivation {
    pub position: usize,
    pub group: String,
    pub activations: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ContestResults {
    pub leaderboard: Vec<ScoreCard>,
    pub repeater_activations: Vec<RepeaterActivation>,
    pub club_activations: Vec<ClubActivation>,
}
