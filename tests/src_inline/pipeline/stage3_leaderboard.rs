use super::*;

fn card(callsign: &str, total_score: usize) -> ScoreCard {
    ScoreCard {
        callsign: callsign.to_string(),
        entries: total_score,
        duplicates: 0,
        base_score: total_score,
        bonus_points: 0,
        total_score,
        bonus_clubs: Vec::new(),
        unknown_repeaters: 0,
    }
}

#[test]
fn test_sorted_descending_by_total() {
    let board = build_leaderboard(vec![card("K1A", 3), card("K1B", 9), card("K1C", 5)]);
    let totals = board.iter().map(|c| c.total_score).collect::<Vec<_>>();
    assert_eq!(totals, vec![9, 5, 3]);
    assert!(board.windows(2).all(|w| w[0].total_score >= w[1].total_score));
}

#[test]
fn test_ties_broken_by_callsign() {
    let board = build_leaderboard(vec![card("W9Z", 4), card("K1A", 4), card("N2B", 4)]);
    let calls = board.iter().map(|c| c.callsign.as_str()).collect::<Vec<_>>();
    assert_eq!(calls, vec!["K1A", "N2B", "W9Z"]);
}

#[test]
fn test_duplicate_callsign_keeps_last() {
    let board = build_leaderboard(vec![card("K1A", 4), card("K1A", 2)]);
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].total_score, 2);
}

#[test]
fn test_empty() {
    assert!(build_leaderboard(Vec::new()).is_empty());
}
