pub mod stage1_reports;
pub mod stage2_participants;
pub mod stage3_leaderboard;
pub mod stage4_activations;

use crate::model::log::ParticipantLog;
use crate::model::roster::Roster;
use crate::model::standings::ContestResults;
use stage2_participants::score_participant;
use stage3_leaderboard::build_leaderboard;
use stage4_activations::{club_activations, repeater_activations};

pub fn score_contest(roster: &Roster, logs: &[ParticipantLog]) -> ContestResults {
    let cards = logs
        .iter()
        .map(|log| score_participant(roster, log))
        .collect::<Vec<_>>();
    let leaderboard = build_leaderboard(cards);
    let repeater_activations = repeater_activations(roster, logs);
    let club_activations = club_activations(&repeater_activations);

    tracing::info!(
        participants = leaderboard.len(),
        repeaters_active = repeater_activations.len(),
        clubs_active = club_activations.len(),
        "scored contest"
    );

    ContestResults {
        leaderboard,
        repeater_activations,
        club_activations,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
