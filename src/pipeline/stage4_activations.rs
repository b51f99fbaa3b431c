use std::collections::BTreeMap;

use crate::model::log::ParticipantLog;
use crate::model::roster::Roster;
use crate::model::standings::{ClubActivation, RepeaterActivation};
use crate::pipeline::stage1_reports::classify_report;
use crate::report::round_to;

#[derive(Debug, Default)]
struct RepeaterTally {
    activations: usize,
    readability_sum: u64,
    readability_n: usize,
}

// Raw rows, not deduplicated. Rows off the roster are dropped.
pub fn repeater_activations(roster: &Roster, logs: &[ParticipantLog]) -> Vec<RepeaterActivation> {
    let mut tallies: BTreeMap<i64, RepeaterTally> = BTreeMap::new();
    for log in logs {
        for entry in &log.entries {
            if roster.get(entry.rr_number).is_none() {
                continue;
            }
            let tally = tallies.entry(entry.rr_number).or_default();
            tally.activations += 1;
            if let Some(r) = classify_report(&entry.signal_report) {
                tally.readability_sum += u64::from(r);
                tally.readability_n += 1;
            }
        }
    }

    let mut rows = Vec::with_capacity(tallies.len());
    for (rr_number, tally) in tallies {
        let Some(repeater) = roster.get(rr_number) else {
            continue;
        };
        let readability = (tally.readability_n > 0).then(|| {
            round_to(
                tally.readability_sum as f64 / tally.readability_n as f64,
                2,
            )
        });
        rows.push(RepeaterActivation {
            position: 0,
            rr_number,
            group: repeater.club.clone().unwrap_or_default(),
            name: repeater.long_name.clone(),
            frequency_mhz: repeater.output_mhz,
            location: repeater.location.clone(),
            activations: tally.activations,
            readability,
        });
    }

    // stable: equal keys stay in RR# order
    rows.sort_by(|a, b| {
        b.activations
            .cmp(&a.activations)
            .then_with(|| b.group.cmp(&a.group))
            .then_with(|| b.frequency_mhz.total_cmp(&a.frequency_mhz))
    });
    for (idx, row) in rows.iter_mut().enumerate() {
        row.position = idx + 1;
        row.frequency_mhz = round_to(row.frequency_mhz, 3);
    }
    rows
}

pub fn club_activations(repeaters: &[RepeaterActivation]) -> Vec<ClubActivation> {
    let mut totals: BTreeMap<&str, usize> = BTreeMap::new();
    for row in repeaters {
        if row.group.is_empty() {
            continue;
        }
        *totals.entry(row.group.as_str()).or_insert(0) += row.activations;
    }

    let mut clubs: Vec<ClubActivation> = totals
        .into_iter()
        .map(|(group, activations)| ClubActivation {
            position: 0,
            group: group.to_string(),
            activations,
        })
        .collect();
    clubs.sort_by(|a, b| {
        b.activations
            .cmp(&a.activations)
            .then_with(|| a.group.cmp(&b.group))
    });
    for (idx, club) in clubs.iter_mut().enumerate() {
        club.position = idx + 1;
    }
    clubs
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_activations.rs"]
mod tests;
