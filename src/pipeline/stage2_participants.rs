use std::collections::{BTreeMap, HashSet};

use crate::model::log::{LogEntry, ParticipantLog};
use crate::model::roster::Roster;
use crate::model::standings::ScoreCard;

pub fn dedup_entries(entries: &[LogEntry]) -> Vec<&LogEntry> {
    let mut seen = HashSet::with_capacity(entries.len());
    entries
        .iter()
        .filter(|e| seen.insert(e.rr_number))
        .collect()
}

pub fn worked_by_club<'r>(roster: &'r Roster, unique: &[&LogEntry]) -> BTreeMap<&'r str, usize> {
    let mut worked: BTreeMap<&str, usize> = BTreeMap::new();
    for entry in unique {
        if let Some(club) = roster.club_of(entry.rr_number) {
            *worked.entry(club).or_insert(0) += 1;
        }
    }
    worked
}

pub fn club_bonus(worked: usize, club_size: usize) -> usize {
    if club_size > 1 && worked == club_size {
        worked
    } else {
        0
    }
}

pub fn score_participant(roster: &Roster, log: &ParticipantLog) -> ScoreCard {
    let entries = log.entries.len();
    let unique = dedup_entries(&log.entries);
    let base_score = unique.len();
    let duplicates = entries - base_score;

    let mut unknown_repeaters = 0usize;
    for entry in unique.iter().filter(|e| roster.get(e.rr_number).is_none()) {
        tracing::warn!(
            "{} logged RR# {} which is not on the roster; no bonus or activation credit",
            log.callsign,
            entry.rr_number
        );
        unknown_repeaters += 1;
    }

    let mut bonus_points = 0usize;
    let mut bonus_clubs = Vec::new();
    for (club, worked) in worked_by_club(roster, &unique) {
        let bonus = club_bonus(worked, roster.club_size(club));
        if bonus > 0 {
            bonus_points += bonus;
            bonus_clubs.push(club.to_string());
        }
    }

    let card = ScoreCard {
        callsign: log.callsign.clone(),
        entries,
        duplicates,
        base_score,
        bonus_points,
        total_score: base_score + bonus_points,
        bonus_clubs,
        unknown_repeaters,
    };
    tracing::debug!(
        callsign = %card.callsign,
        entries = card.entries,
        duplicates = card.duplicates,
        base = card.base_score,
        bonus = card.bonus_points,
        total = card.total_score,
        "scored participant"
    );
    card
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_participants.rs"]
mod tests;
