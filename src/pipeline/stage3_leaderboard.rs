use std::collections::BTreeMap;

use crate::model::standings::ScoreCard;

pub fn build_leaderboard(cards: Vec<ScoreCard>) -> Vec<ScoreCard> {
    let mut by_callsign: BTreeMap<String, ScoreCard> = BTreeMap::new();
    for card in cards {
        if by_callsign.contains_key(&card.callsign) {
            tracing::warn!(
                "multiple logs for {}; keeping the score from the last one",
                card.callsign
            );
        }
        by_callsign.insert(card.callsign.clone(), card);
    }

    let mut board: Vec<ScoreCard> = by_callsign.into_values().collect();
    board.sort_by(|a, b| {
        b.total_score
            .cmp(&a.total_score)
            .then_with(|| a.callsign.cmp(&b.callsign))
    });
    board
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_leaderboard.rs"]
mod tests;
